//! Signed-distance remap: upscale a distance-style raster and re-encode the
//! median of its color channels as a 16-bit field.

use anyhow::{bail, Result};
use image::{imageops, DynamicImage, ImageBuffer, Rgba};

const MAX16: f32 = 65535.0;

/// Tuning for the remap transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RemapConfig {
    /// Linear upscale factor applied to both axes.
    pub scale: f32,
    /// Distance-field range expressed in output pixels.
    pub px_range: f32,
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self { scale: 16.0, px_range: 4.0 }
    }
}

impl RemapConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            bail!("scale must be positive and finite (got {})", self.scale);
        }
        if !self.px_range.is_finite() || self.px_range <= 0.0 {
            bail!("px-range must be positive and finite (got {})", self.px_range);
        }
        Ok(())
    }
}

/// Median of three channel samples: `max(min(r,g), min(max(r,g), b))`.
/// MSDF channels hold per-channel directional distance estimates; their
/// median suppresses single-channel interpolation outliers.
fn median3(r: u16, g: u16, b: u16) -> u16 {
    r.min(g).max(r.max(g).min(b))
}

/// Re-encode one normalized sample. `gain` is `px_range * scale`; the 0.5
/// bias is removed before the gain and reinstated after, so a mid-gray
/// sample is a fixed point regardless of gain.
fn remap_norm(norm: f32, gain: f32) -> u16 {
    let sig_dist = (norm - 0.5) * gain;
    ((sig_dist + 0.5) * 65535.99).clamp(0.0, MAX16) as u16
}

fn remap_sample(median: u16, gain: f32) -> u16 {
    remap_norm(median as f32 / MAX16, gain)
}

/// Upscale `src` by `cfg.scale` with bilinear filtering, then rewrite every
/// pixel with the remapped median of its color channels, alpha forced opaque.
/// Output extents truncate the float multiply, matching the layouts the
/// pipeline already bakes in.
pub fn remap_field(
    src: &DynamicImage,
    cfg: &RemapConfig,
) -> Result<ImageBuffer<Rgba<u16>, Vec<u16>>> {
    cfg.validate()?;
    let out_w = (src.width() as f32 * cfg.scale) as u32;
    let out_h = (src.height() as f32 * cfg.scale) as u32;
    if out_w == 0 || out_h == 0 {
        bail!(
            "output dimensions collapse to zero ({}x{} source at scale {})",
            src.width(),
            src.height(),
            cfg.scale
        );
    }

    let mut canvas = imageops::resize(
        &src.to_rgba16(),
        out_w,
        out_h,
        imageops::FilterType::Triangle,
    );

    let gain = cfg.px_range * cfg.scale;
    for px in canvas.pixels_mut() {
        let [r, g, b, _] = px.0;
        let v = remap_sample(median3(r, g, b), gain);
        *px = Rgba([v, v, v, u16::MAX]);
    }
    Ok(canvas)
}
