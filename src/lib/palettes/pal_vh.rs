use std::sync::LazyLock;

use regex::Regex;

use crate::palettes::arrangement::{pal_to_vh_order, vh_to_pal};
use crate::palettes::palette::{Color, Palette, PaletteError};
use crate::palettes::{as_full_palette, TOTAL_COLORS};

// VH files hold a single Verilog array literal with the colors in VH order:
// wire [23:0] lumacode_data_3s[0:63] = '{ 24'h000000, 24'h000000, ...};

const VH_HEADER: &str = "wire [23:0] lumacode_data_3s[0:63] = '{ ";
const VH_FOOTER: &str = "};";
const VH_SEPARATOR: &str = ", ";

static COLOR_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"24'h([0-9a-fA-F]{6})").unwrap());

/// Collects every `24'hRRGGBB` token in `text` and returns them in PAL order.
///
/// Everything around the tokens (declaration, braces, commas, comments) is ignored,
/// but there have to be exactly 64 of them.
pub fn decode(text: &str) -> Result<Palette, PaletteError> {
	let vh_colors = COLOR_TOKEN
		.captures_iter(text)
		.enumerate()
		.map(|(index, caps)| parse_token(index, &caps[1]))
		.collect::<Result<Vec<Color>, PaletteError>>()?;

	if vh_colors.len() != TOTAL_COLORS {
		return Err(PaletteError::MalformedVhLiteral { found: vh_colors.len() });
	}

	Ok(Palette::from(vh_to_pal(&vh_colors)?))
}

/// Formats PAL-ordered colors as a VH array literal.
pub fn encode(colors: &[Color]) -> Result<String, PaletteError> {
	let colors = as_full_palette(colors)?;
	Ok(format_literal(&pal_to_vh_order(colors)))
}

fn parse_token(index: usize, hex: &str) -> Result<Color, PaletteError> {
	let value = u32::from_str_radix(hex, 16)
		.map_err(|_| PaletteError::InvalidVhToken { index, token: hex.to_string() })?;

	Ok(Color::from(value))
}

fn format_literal(vh_colors: &[Color; TOTAL_COLORS]) -> String {
	let tokens = vh_colors.iter()
		.map(|c| format!("24'h{:06X}", u32::from(*c)))
		.collect::<Vec<String>>()
		.join(VH_SEPARATOR);

	format!("{VH_HEADER}{tokens}{VH_FOOTER}")
}

impl Palette {
	pub fn from_vh_string<S: AsRef<str>>(s: S) -> Result<Palette, PaletteError> {
		decode(s.as_ref())
	}

	pub fn to_vh_string(&self) -> String {
		format_literal(&self.to_vh_order())
	}
}
