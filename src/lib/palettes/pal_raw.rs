use crate::palettes::palette::{Color, Palette, PaletteError};
use crate::palettes::rgb::{bytes_to_colors, colors_to_bytes};
use crate::palettes::{as_full_palette, BYTES_PER_COLOR, TOTAL_COLORS};

// Raw PAL tables have no header: 64 RGB triples, four rows of 16 colors.

pub const PAL_FILE_SIZE: usize = TOTAL_COLORS * BYTES_PER_COLOR;

/// Decodes the first 192 bytes of `bytes` as a PAL-ordered palette.
///
/// Anything past the table is ignored rather than rejected, so padded files still load.
pub fn decode(bytes: &[u8]) -> Result<Palette, PaletteError> {
	if bytes.len() < PAL_FILE_SIZE {
		return Err(PaletteError::TruncatedPalData { len: bytes.len() });
	}

	let colors = bytes_to_colors(&bytes[..PAL_FILE_SIZE])?;
	Palette::try_from(colors)
}

/// Encodes PAL-ordered colors into a 192-byte table.
pub fn encode(colors: &[Color]) -> Result<Vec<u8>, PaletteError> {
	let colors = as_full_palette(colors)?;
	Ok(colors_to_bytes(colors))
}

impl Palette {
	pub fn from_pal_bytes(bytes: &[u8]) -> Result<Palette, PaletteError> {
		decode(bytes)
	}

	pub fn to_pal_bytes(&self) -> Vec<u8> {
		colors_to_bytes(&self.colors)
	}
}
