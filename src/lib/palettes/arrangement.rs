use crate::palettes::palette::PaletteError;
use crate::palettes::{as_full_palette, COLORS_PER_ROW, CORNER_COLORS, CORNER_COLUMNS, NUM_ROWS, TOTAL_COLORS};

// VH order starts with the two corner colors of every row, followed by the
// remaining 14 colors of each row in row-major order. The mapping only ever
// depends on positions, never on the colors themselves.

const BODY_COLUMNS: usize = COLORS_PER_ROW - CORNER_COLUMNS;

/// `VH_TO_PAL[vh_index]` is the PAL index the entry at `vh_index` comes from.
const VH_TO_PAL: [usize; TOTAL_COLORS] = build_vh_to_pal();

/// `PAL_TO_VH[pal_index]` is the VH index the entry at `pal_index` ends up at.
const PAL_TO_VH: [usize; TOTAL_COLORS] = invert(&VH_TO_PAL);

const fn build_vh_to_pal() -> [usize; TOTAL_COLORS] {
	let mut table = [0; TOTAL_COLORS];

	let mut row = 0;
	while row < NUM_ROWS {
		let row_start = row * COLORS_PER_ROW;

		let mut corner = 0;
		while corner < CORNER_COLUMNS {
			table[row * CORNER_COLUMNS + corner] = row_start + BODY_COLUMNS + corner;
			corner += 1;
		}

		let mut col = 0;
		while col < BODY_COLUMNS {
			table[CORNER_COLORS + row * BODY_COLUMNS + col] = row_start + col;
			col += 1;
		}

		row += 1;
	}

	table
}

const fn invert(table: &[usize; TOTAL_COLORS]) -> [usize; TOTAL_COLORS] {
	let mut inverse = [0; TOTAL_COLORS];
	let mut i = 0;
	while i < TOTAL_COLORS {
		inverse[table[i]] = i;
		i += 1;
	}
	inverse
}

/// Rearranges a PAL-ordered palette into VH order.
pub fn pal_to_vh_order<T: Copy>(pal: &[T; TOTAL_COLORS]) -> [T; TOTAL_COLORS] {
	std::array::from_fn(|vh_index| pal[VH_TO_PAL[vh_index]])
}

/// Rearranges a VH-ordered palette into PAL order.
pub fn vh_to_pal_order<T: Copy>(vh: &[T; TOTAL_COLORS]) -> [T; TOTAL_COLORS] {
	std::array::from_fn(|pal_index| vh[PAL_TO_VH[pal_index]])
}

/// Like [`pal_to_vh_order`], for input whose length is not known up front.
pub fn pal_to_vh<T: Copy>(pal: &[T]) -> Result<[T; TOTAL_COLORS], PaletteError> {
	Ok(pal_to_vh_order(as_full_palette(pal)?))
}

/// Like [`vh_to_pal_order`], for input whose length is not known up front.
pub fn vh_to_pal<T: Copy>(vh: &[T]) -> Result<[T; TOTAL_COLORS], PaletteError> {
	Ok(vh_to_pal_order(as_full_palette(vh)?))
}
