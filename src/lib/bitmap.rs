use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::palettes::palette::{Color, Palette, PaletteError};
use crate::palettes::{as_full_palette, COLORS_PER_ROW, NUM_ROWS, TOTAL_COLORS};

// Uncompressed 24-bit Windows bitmap:
// 14-byte file header, 40-byte BITMAPINFOHEADER, then bottom-up BGR rows padded to 4 bytes.

pub const DEFAULT_SQUARE_SIZE: u32 = 50;

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const HEADER_SIZE: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

const SIGNATURE: &[u8; 2] = b"BM";
const BITS_PER_PIXEL: u16 = 24;
const BYTES_PER_PIXEL: usize = BITS_PER_PIXEL as usize / 8;
const COMPRESSION_NONE: u32 = 0;
/// 72 DPI
const PIXELS_PER_METER: i32 = 2835;

/// Geometry of a palette rendered as a 16×4 grid of solid squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteBitmap {
	square_size: u32,
}

impl PaletteBitmap {
	/// Fails if `square_size` is zero or the resulting file would not fit the format's 32-bit size fields.
	pub fn new(square_size: u32) -> Result<Self, PaletteError> {
		let s = square_size as u64;
		let width = COLORS_PER_ROW as u64 * s;
		let height = NUM_ROWS as u64 * s;
		let file_size = (width * BITS_PER_PIXEL as u64)
			.div_ceil(32)
			.checked_mul(4)
			.and_then(|row_size| row_size.checked_mul(height))
			.and_then(|image_size| image_size.checked_add(HEADER_SIZE as u64));

		match file_size {
			Some(file_size) if square_size > 0 && width <= i32::MAX as u64 && file_size <= u32::MAX as u64 => {
				Ok(Self { square_size })
			}
			_ => Err(PaletteError::InvalidSquareSize { size: square_size }),
		}
	}

	pub fn square_size(&self) -> u32 {
		self.square_size
	}

	pub fn width(&self) -> u32 {
		COLORS_PER_ROW as u32 * self.square_size
	}

	pub fn height(&self) -> u32 {
		NUM_ROWS as u32 * self.square_size
	}

	/// Bytes per pixel row, including the padding up to a multiple of 4.
	pub fn row_size(&self) -> u32 {
		(self.width() * BITS_PER_PIXEL as u32).div_ceil(32) * 4
	}

	pub fn image_size(&self) -> u32 {
		self.row_size() * self.height()
	}

	pub fn file_size(&self) -> u32 {
		HEADER_SIZE + self.image_size()
	}

	/// Renders PAL-ordered colors into a complete BMP file.
	pub fn render(&self, colors: &[Color]) -> Result<Vec<u8>, PaletteError> {
		let colors = as_full_palette(colors)?;

		let mut bmp = Vec::with_capacity(self.file_size() as usize);
		self.write_header(&mut bmp)?;

		let mut row = vec![0_u8; self.row_size() as usize];
		for y in (0..self.height()).rev() {
			self.fill_row(&mut row, colors, y);
			bmp.write_all(&row)?;
		}

		Ok(bmp)
	}

	fn write_header<W: Write>(&self, w: &mut W) -> Result<(), PaletteError> {
		// file header
		w.write_all(SIGNATURE)?;
		w.write_u32::<LittleEndian>(self.file_size())?;
		w.write_u32::<LittleEndian>(0)?; // reserved
		w.write_u32::<LittleEndian>(HEADER_SIZE)?;

		// info header
		w.write_u32::<LittleEndian>(INFO_HEADER_SIZE)?;
		w.write_i32::<LittleEndian>(self.width() as i32)?;
		w.write_i32::<LittleEndian>(self.height() as i32)?;
		w.write_u16::<LittleEndian>(1)?; // color planes
		w.write_u16::<LittleEndian>(BITS_PER_PIXEL)?;
		w.write_u32::<LittleEndian>(COMPRESSION_NONE)?;
		w.write_u32::<LittleEndian>(self.image_size())?;
		w.write_i32::<LittleEndian>(PIXELS_PER_METER)?;
		w.write_i32::<LittleEndian>(PIXELS_PER_METER)?;
		w.write_u32::<LittleEndian>(0)?; // colors in color table
		w.write_u32::<LittleEndian>(0)?; // important colors

		Ok(())
	}

	/// Fills one pixel row for image row `y`. Padding bytes at the end of `row` stay zero.
	fn fill_row(&self, row: &mut [u8], colors: &[Color; TOTAL_COLORS], y: u32) {
		let square_y = (y / self.square_size) as usize;
		let pixels = row.chunks_exact_mut(BYTES_PER_PIXEL).take(self.width() as usize);

		for (x, pixel) in pixels.enumerate() {
			let square_x = x / self.square_size as usize;
			let c = colors[square_y * COLORS_PER_ROW + square_x];
			pixel.copy_from_slice(&[c.b, c.g, c.r]);
		}
	}
}

/// Renders PAL-ordered colors as a grid of `square_size`×`square_size` squares.
pub fn render(colors: &[Color], square_size: u32) -> Result<Vec<u8>, PaletteError> {
	PaletteBitmap::new(square_size)?.render(colors)
}

impl Palette {
	pub fn to_bmp_bytes(&self, square_size: u32) -> Result<Vec<u8>, PaletteError> {
		render(&self.colors, square_size)
	}
}
