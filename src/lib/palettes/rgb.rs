use crate::palettes::palette::{Color, PaletteError};
use crate::palettes::BYTES_PER_COLOR;

/// Packs three channels into a `0xRRGGBB` value. Only the low 8 bits of each channel are used.
pub fn pack(r: u32, g: u32, b: u32) -> u32 {
	((r & 0xFF) << 16) | ((g & 0xFF) << 8) | (b & 0xFF)
}

pub fn unpack(c: u32) -> (u8, u8, u8) {
	(
		((c >> 16) & 0xFF) as u8,
		((c >> 8) & 0xFF) as u8,
		(c & 0xFF) as u8,
	)
}

/// Reads consecutive RGB triples.
pub fn bytes_to_colors(bytes: &[u8]) -> Result<Vec<Color>, PaletteError> {
	if bytes.len() % BYTES_PER_COLOR != 0 {
		return Err(PaletteError::MisalignedByteLength { len: bytes.len() });
	}

	let colors = bytes
		.chunks_exact(BYTES_PER_COLOR)
		.map(|rgb| Color::from(pack(rgb[0] as u32, rgb[1] as u32, rgb[2] as u32)))
		.collect();

	Ok(colors)
}

pub fn colors_to_bytes(colors: &[Color]) -> Vec<u8> {
	let mut bytes = Vec::with_capacity(colors.len() * BYTES_PER_COLOR);
	for &c in colors {
		let (r, g, b) = unpack(c.into());
		bytes.extend_from_slice(&[r, g, b]);
	}
	bytes
}
