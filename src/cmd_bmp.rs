use std::path::PathBuf;

use anyhow::{Context, Result};
use lumapal::palettes::files::write_bmp;
use lumapal::palettes::palette::PaletteFormat;

use crate::commands::BmpArgs;
use crate::common::{output_path, read_palette};

pub(crate) fn convert_to_bmp(args: &BmpArgs, debug: bool) -> Result<PathBuf> {
	let output = output_path(&args.input, args.output.as_ref(), PaletteFormat::Bmp)?;
	let palette = read_palette(&args.input, debug)?;

	write_bmp(&palette.colors, args.square_size, &output)
		.with_context(|| format!("Couldn't write bitmap to {}", output.display()))?;

	println!("Successfully created palette visualization: {}", output.display());
	Ok(output)
}
