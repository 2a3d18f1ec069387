pub mod bitmap;
pub mod palettes;
