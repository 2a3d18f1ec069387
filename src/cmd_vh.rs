use std::path::PathBuf;

use anyhow::{Context, Result};
use lumapal::palettes::files::write_vh;
use lumapal::palettes::palette::PaletteFormat;

use crate::commands::ConvertArgs;
use crate::common::{output_path, read_palette};

pub(crate) fn convert_to_vh(args: &ConvertArgs, debug: bool) -> Result<PathBuf> {
	let output = output_path(&args.input, args.output.as_ref(), PaletteFormat::Vh)?;
	let palette = read_palette(&args.input, debug)?;

	write_vh(&palette.colors, &output)
		.with_context(|| format!("Couldn't write VH file {}", output.display()))?;

	println!("Successfully converted to VH format: {}", output.display());
	Ok(output)
}
