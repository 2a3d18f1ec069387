use std::path::PathBuf;

use anyhow::{Context, Result};
use lumapal::palettes::files::write_pal;
use lumapal::palettes::palette::PaletteFormat;

use crate::commands::ConvertArgs;
use crate::common::{output_path, read_palette};

pub(crate) fn convert_to_pal(args: &ConvertArgs, debug: bool) -> Result<PathBuf> {
	let output = output_path(&args.input, args.output.as_ref(), PaletteFormat::Pal)?;
	let palette = read_palette(&args.input, debug)?;

	write_pal(&palette.colors, &output)
		.with_context(|| format!("Couldn't write PAL file {}", output.display()))?;

	println!("Successfully converted to PAL format: {}", output.display());
	Ok(output)
}
