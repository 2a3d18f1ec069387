use lumapal::bitmap::{render, PaletteBitmap, DEFAULT_SQUARE_SIZE};
use lumapal::palettes::palette::{Color, Palette, PaletteError};

fn u16_at(bytes: &[u8], offset: usize) -> u16 {
	u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
	u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

/// Every color encodes its own index so pixels can be traced back to their square.
fn indexed_colors() -> Vec<Color> {
	(0..64_u8).map(|i| Color::new(i, 0x80 | i, 0xFF - i)).collect()
}

#[test]
fn default_square_size_dimensions() {
	let bmp = render(&indexed_colors(), DEFAULT_SQUARE_SIZE).unwrap();

	assert_eq!(u32_at(&bmp, 18), 800);
	assert_eq!(u32_at(&bmp, 22), 200);
}

#[test]
fn headers() {
	let bmp = render(&indexed_colors(), 10).unwrap();

	// 160 px * 3 bytes = 480, already a multiple of 4
	let row_size = 480;
	let image_size = row_size * 40;

	assert_eq!(&bmp[0..2], b"BM");
	assert_eq!(u32_at(&bmp, 2), 54 + image_size);
	assert_eq!(u32_at(&bmp, 6), 0);
	assert_eq!(u32_at(&bmp, 10), 54);

	assert_eq!(u32_at(&bmp, 14), 40);
	assert_eq!(u32_at(&bmp, 18), 160);
	assert_eq!(u32_at(&bmp, 22), 40);
	assert_eq!(u16_at(&bmp, 26), 1);
	assert_eq!(u16_at(&bmp, 28), 24);
	assert_eq!(u32_at(&bmp, 30), 0);
	assert_eq!(u32_at(&bmp, 34), image_size);
	assert_eq!(u32_at(&bmp, 38), 2835);
	assert_eq!(u32_at(&bmp, 42), 2835);
	assert_eq!(u32_at(&bmp, 46), 0);
	assert_eq!(u32_at(&bmp, 50), 0);

	assert_eq!(bmp.len() as u32, 54 + image_size);
}

#[test]
fn rows_are_bottom_up_bgr() {
	let colors = indexed_colors();
	let bmp = render(&colors, 2).unwrap();
	let pixels = &bmp[54..];

	// 32 px * 3 bytes = 96 bytes per row, no padding; 8 rows
	let row_size = 96;
	assert_eq!(pixels.len(), row_size * 8);

	// the first stored row is the bottom image row, i.e. palette row 3
	let first = &pixels[..row_size];
	assert_eq!(first[0..3], [0xFF - 48, 0x80 | 48, 48]);
	assert_eq!(first[3..6], [0xFF - 48, 0x80 | 48, 48]);
	assert_eq!(first[6..9], [0xFF - 49, 0x80 | 49, 49]);

	// the last stored row is the top image row, i.e. palette row 0
	let last = &pixels[row_size * 7..];
	assert_eq!(last[0..3], [0xFF, 0x80, 0]);
	assert_eq!(last[93..96], [0xFF - 15, 0x80 | 15, 15]);

	// every pixel maps back to the square it lies in
	for (file_row, row) in pixels.chunks_exact(row_size).enumerate() {
		let y = 7 - file_row;
		for (x, px) in row.chunks_exact(3).enumerate() {
			let c = colors[(y / 2) * 16 + x / 2];
			assert_eq!(px, [c.b, c.g, c.r]);
		}
	}
}

#[test]
fn single_pixel_squares() {
	let colors = vec![Color::new(0x11, 0x22, 0x33); 64];
	let bitmap = PaletteBitmap::new(1).unwrap();

	// 16 columns make every row a multiple of 48 bytes, so there is never any padding
	assert_eq!(bitmap.width(), 16);
	assert_eq!(bitmap.height(), 4);
	assert_eq!(bitmap.row_size(), 48);
	assert_eq!(bitmap.image_size(), 192);
	assert_eq!(bitmap.file_size(), 246);

	let bmp = bitmap.render(&colors).unwrap();
	assert_eq!(bmp.len(), 246);
	assert!(bmp[54..].chunks_exact(3).all(|px| px == [0x33, 0x22, 0x11]));
}

#[test]
fn geometry() {
	let bitmap = PaletteBitmap::new(30).unwrap();

	assert_eq!(bitmap.square_size(), 30);
	assert_eq!(bitmap.width(), 480);
	assert_eq!(bitmap.height(), 120);
	assert_eq!(bitmap.row_size() % 4, 0);
	assert_eq!(bitmap.file_size(), 54 + bitmap.row_size() * 120);
}

#[test]
fn palette_to_bmp() {
	let palette = Palette::try_from(indexed_colors()).unwrap();
	assert_eq!(palette.to_bmp_bytes(5).unwrap(), render(&indexed_colors(), 5).unwrap());
}

#[test]
fn invalid_square_size() {
	assert!(matches!(PaletteBitmap::new(0), Err(PaletteError::InvalidSquareSize { size: 0 })));
	assert!(matches!(render(&indexed_colors(), 0), Err(PaletteError::InvalidSquareSize { size: 0 })));

	// too big for the 32-bit size fields
	assert!(matches!(PaletteBitmap::new(u32::MAX), Err(PaletteError::InvalidSquareSize { .. })));
	assert!(matches!(PaletteBitmap::new(100_000), Err(PaletteError::InvalidSquareSize { .. })));
	assert!(matches!(PaletteBitmap::new(u32::MAX / 16 + 1), Err(PaletteError::InvalidSquareSize { .. })));
	assert!(matches!(render(&indexed_colors(), u32::MAX), Err(PaletteError::InvalidSquareSize { .. })));
}

#[test]
fn largest_square_size() {
	// 54 + 192 * s² has to fit into a u32
	let bitmap = PaletteBitmap::new(4729).unwrap();
	assert_eq!(bitmap.file_size(), 54 + 192 * 4729 * 4729);

	assert!(matches!(PaletteBitmap::new(4730), Err(PaletteError::InvalidSquareSize { size: 4730 })));
}

#[test]
fn invalid_lengths() {
	for len in [0_usize, 1, 63, 65] {
		let err = render(&vec![Color::default(); len], DEFAULT_SQUARE_SIZE).unwrap_err();
		assert!(matches!(err, PaletteError::InvalidArrayLength { expected: 64, found } if found == len));
	}
}
