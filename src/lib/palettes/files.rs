use std::fs;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::bitmap;
use crate::palettes::palette::{Color, Palette, PaletteError, PaletteFormat};
use crate::palettes::{pal_raw, pal_vh};

/// Reads a palette file, picking the decoder from the file extension.
pub fn read_colors<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
	let format = PaletteFormat::from_path(&path)
		.filter(PaletteFormat::is_readable)
		.ok_or(PaletteError::UnsupportedFormat)?;

	let bytes = fs::read(path)?;
	Palette::load_from_bytes(&bytes, format)
}

pub fn write_pal<P: AsRef<Path>>(colors: &[Color], path: P) -> Result<(), PaletteError> {
	let data = pal_raw::encode(colors)?;
	write_atomically(path, &data)
}

pub fn write_vh<P: AsRef<Path>>(colors: &[Color], path: P) -> Result<(), PaletteError> {
	let data = pal_vh::encode(colors)?;
	write_atomically(path, data.as_bytes())
}

pub fn write_bmp<P: AsRef<Path>>(colors: &[Color], square_size: u32, path: P) -> Result<(), PaletteError> {
	let data = bitmap::render(colors, square_size)?;
	write_atomically(path, &data)
}

/// Writes `data` to a temporary file next to `path` and moves it into place,
/// so a failed write never leaves a truncated file behind.
///
/// A replaced file keeps its permissions.
fn write_atomically<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), PaletteError> {
	let path = path.as_ref();
	let dir = match path.parent() {
		Some(p) if !p.as_os_str().is_empty() => p,
		_ => Path::new("."),
	};

	let existing = fs::metadata(path).ok().map(|m| m.permissions());

	let mut builder = tempfile::Builder::new();
	builder.prefix(".lumapal");
	// new files get the same mode as any other file created under the current umask
	#[cfg(unix)]
	builder.permissions(fs::Permissions::from_mode(0o666));

	let mut temp_file = builder.tempfile_in(dir)?;
	temp_file.write_all(data)?;
	if let Some(permissions) = existing {
		temp_file.as_file().set_permissions(permissions)?;
	}
	temp_file.as_file().sync_all()?;

	temp_file.persist(path).map_err(|e| PaletteError::IoErr(e.error))?;
	Ok(())
}
