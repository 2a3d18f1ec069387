use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use lumapal::palettes::files::read_colors;
use lumapal::palettes::palette::{Palette, PaletteFormat};

/// Returns the explicit output path, or the input path with the target format's extension.
pub(crate) fn output_path(input: &Path, output: Option<&PathBuf>, format: PaletteFormat) -> Result<PathBuf> {
	let output = match output {
		Some(output) => output.clone(),
		None => input.with_extension(format.extension()),
	};

	if output == input || is_same_file(input, &output) {
		anyhow::bail!("Output file {} would overwrite the input file", output.display());
	}

	Ok(output)
}

/// Only an existing output can be the input under another name.
fn is_same_file(input: &Path, output: &Path) -> bool {
	match (fs::canonicalize(input), fs::canonicalize(output)) {
		(Ok(input), Ok(output)) => input == output,
		_ => false,
	}
}

/// Reads the input palette, printing it first if `debug` is set.
pub(crate) fn read_palette(input: &Path, debug: bool) -> Result<Palette> {
	let palette = read_colors(input)
		.with_context(|| format!("Couldn't read palette from {}", input.display()))?;

	if debug {
		print_palette(&palette);
	}

	Ok(palette)
}

pub(crate) fn print_palette(palette: &Palette) {
	println!("{:#^40}", " DEBUG MODE ");

	for (i, row) in palette.rows().enumerate() {
		let swatches = row.iter()
			.map(|c| "  ".on_truecolor(c.r, c.g, c.b).to_string())
			.collect::<String>();
		let codes = row.iter()
			.map(|c| c.to_string())
			.collect::<Vec<String>>()
			.join(" ");

		println!("row {i}: {swatches}");
		println!("       {codes}");
	}
}
