use crate::palettes::palette::PaletteError;

pub mod arrangement;
pub mod files;
pub mod pal_raw;
pub mod pal_vh;
pub mod palette;
pub mod rgb;

pub const COLORS_PER_ROW: usize = 16;
pub const NUM_ROWS: usize = 4;
pub const TOTAL_COLORS: usize = COLORS_PER_ROW * NUM_ROWS;

/// The two rightmost columns of every row are moved to the front in VH order.
pub const CORNER_COLUMNS: usize = 2;
pub const CORNER_COLORS: usize = CORNER_COLUMNS * NUM_ROWS;

pub const BYTES_PER_COLOR: usize = 3;

/// Borrows `colors` as a full palette-sized array or reports how many entries it actually had.
pub(crate) fn as_full_palette<T>(colors: &[T]) -> Result<&[T; TOTAL_COLORS], PaletteError> {
	colors.try_into().map_err(|_| PaletteError::InvalidArrayLength {
		expected: TOTAL_COLORS,
		found: colors.len(),
	})
}
