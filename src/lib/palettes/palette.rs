use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::palettes::arrangement::{pal_to_vh_order, vh_to_pal_order};
use crate::palettes::rgb::{pack, unpack};
use crate::palettes::{pal_raw, pal_vh, as_full_palette, COLORS_PER_ROW, TOTAL_COLORS};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<Color> for [u8; 3] {
	fn from(c: Color) -> Self {
		[c.r, c.g, c.b]
	}
}

/// Anything above the low 24 bits is dropped.
impl From<u32> for Color {
	fn from(v: u32) -> Self {
		let (r, g, b) = unpack(v);
		Self { r, g, b }
	}
}

impl From<Color> for u32 {
	fn from(c: Color) -> Self {
		pack(c.r as u32, c.g as u32, c.b as u32)
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:06X}", u32::from(*self))
	}
}

/// A complete 64-color palette in PAL order (4 rows of 16 colors, row-major).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
	pub colors: [Color; TOTAL_COLORS],
}

impl Palette {
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
		self.colors.chunks_exact(COLORS_PER_ROW)
	}

	/// Rearranges the palette into VH order.
	pub fn to_vh_order(&self) -> [Color; TOTAL_COLORS] {
		pal_to_vh_order(&self.colors)
	}

	/// Builds a palette from colors listed in VH order.
	pub fn from_vh_order(vh: &[Color; TOTAL_COLORS]) -> Self {
		Self { colors: vh_to_pal_order(vh) }
	}

	pub fn load_from_bytes(bytes: &[u8], format: PaletteFormat) -> Result<Palette, PaletteError> {
		match format {
			PaletteFormat::Pal => pal_raw::decode(bytes),
			PaletteFormat::Vh => pal_vh::decode(&String::from_utf8_lossy(bytes)),
			PaletteFormat::Bmp => Err(PaletteError::UnsupportedFormat),
		}
	}
}

impl From<[Color; TOTAL_COLORS]> for Palette {
	fn from(colors: [Color; TOTAL_COLORS]) -> Self {
		Self { colors }
	}
}

impl TryFrom<&[Color]> for Palette {
	type Error = PaletteError;

	fn try_from(colors: &[Color]) -> Result<Self, Self::Error> {
		Ok(Self { colors: *as_full_palette(colors)? })
	}
}

impl TryFrom<Vec<Color>> for Palette {
	type Error = PaletteError;

	fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
		Self::try_from(colors.as_slice())
	}
}

impl TryFrom<Vec<u32>> for Palette {
	type Error = PaletteError;

	fn try_from(v: Vec<u32>) -> Result<Self, Self::Error> {
		let colors = v.into_iter().map(Color::from).collect::<Vec<Color>>();
		Self::try_from(colors)
	}
}

#[derive(Debug)]
pub enum PaletteError {
	InvalidArrayLength { expected: usize, found: usize },
	MisalignedByteLength { len: usize },
	TruncatedPalData { len: usize },
	MalformedVhLiteral { found: usize },
	InvalidVhToken { index: usize, token: String },
	InvalidSquareSize { size: u32 },
	UnsupportedFormat,
	IoErr(std::io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::InvalidArrayLength { expected, found } => write!(f, "Expected exactly {expected} colors, got {found}"),
			PaletteError::MisalignedByteLength { len } => write!(f, "Color data length {len} is not a multiple of 3"),
			PaletteError::TruncatedPalData { len } => write!(f, "Invalid .pal file size {len}, must be at least {} bytes", pal_raw::PAL_FILE_SIZE),
			PaletteError::MalformedVhLiteral { found } => write!(f, "Invalid number of colors in VH data: expected {TOTAL_COLORS}, found {found}"),
			PaletteError::InvalidVhToken { index, token } => write!(f, "Invalid VH color token at index {index}: \"{token}\" is not a hexadecimal color value"),
			PaletteError::InvalidSquareSize { size } => write!(f, "Invalid square size {size}, must be at least 1 pixel and fit into a bitmap"),
			PaletteError::UnsupportedFormat => write!(f, "Unsupported file format, use .pal or .vh files"),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PaletteError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteFormat {
	Pal, // .pal
	Vh, // .vh
	Bmp, // .bmp, write-only
}

impl PaletteFormat {
	pub fn from_path<P: AsRef<Path>>(path: P) -> Option<PaletteFormat> {
		let ext = path.as_ref()
			.extension()?
			.to_str()?
			.to_lowercase();

		match ext.as_str() {
			"pal" => Some(PaletteFormat::Pal),
			"vh" => Some(PaletteFormat::Vh),
			"bmp" => Some(PaletteFormat::Bmp),
			_ => None
		}
	}

	pub fn extension(&self) -> &'static str {
		match self {
			PaletteFormat::Pal => "pal",
			PaletteFormat::Vh => "vh",
			PaletteFormat::Bmp => "bmp",
		}
	}

	pub fn is_readable(&self) -> bool {
		!matches!(self, PaletteFormat::Bmp)
	}
}

impl Display for PaletteFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.extension())
	}
}
