//! Decode/encode seam shared by both tools.

use std::path::Path;

use anyhow::{Context, Result};
use image::{DynamicImage, ImageBuffer, ImageFormat, ImageReader, Rgba};

/// Decode a raster, sniffing the format from file content rather than
/// trusting the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    ImageReader::open(path)
        .with_context(|| format!("open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("sniff format of {}", path.display()))?
        .decode()
        .with_context(|| format!("decode {}", path.display()))
}

/// Write an 8-bit RGBA canvas as PNG at `path`, overwriting. The encoding is
/// always PNG, whatever extension the path carries.
pub fn write_png_rgba8(img: &ImageBuffer<Rgba<u8>, Vec<u8>>, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write {}", path.display()))
}

/// 16-bit variant of [`write_png_rgba8`].
pub fn write_png_rgba16(img: &ImageBuffer<Rgba<u16>, Vec<u16>>, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write {}", path.display()))
}
