//! Row-wrapped atlas packing: verbatim pixel copy of each source into one
//! canvas, plus an optional slot manifest.

use anyhow::{bail, Result};
use image::{imageops, DynamicImage, RgbaImage};
use serde::Serialize;
use tracing::info;

/// One source image's slot in the atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Computed canvas extent plus one slot per source, in input order.
#[derive(Clone, Debug, Serialize)]
pub struct AtlasLayout {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

/// Sidecar manifest describing where each named source landed.
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub version: u32,
    pub atlas_width: u32,
    pub atlas_height: u32,
    pub entries: Vec<ManifestEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ManifestEntry<'a> {
    pub name: &'a str,
    pub px: Placement,
}

/// Plan the row-wrapped layout for sources of the given sizes.
///
/// Canvas extent derives from the first source: width is twice its width and
/// height four times its width. The height intentionally tracks the first
/// source's *width*; downstream consumers bake in that canvas shape.
///
/// The cursor starts at (0,0), advances right by each source's width, and on
/// a full row wraps to x = 0, y += that source's own height. A slot that
/// would spill past the canvas is a hard error, never a silent clip.
pub fn plan_layout(sizes: &[(u32, u32)]) -> Result<AtlasLayout> {
    let Some(&(first_w, _)) = sizes.first() else {
        bail!("no input images");
    };
    let width = first_w * 2;
    let height = first_w * 4;

    let mut placements = Vec::with_capacity(sizes.len());
    let (mut x, mut y) = (0u32, 0u32);
    for (i, &(w, h)) in sizes.iter().enumerate() {
        if x + w > width {
            x = 0;
            y += h;
        }
        if x + w > width || y + h > height {
            bail!(
                "layout overflow: source {i} ({w}x{h}) does not fit at ({x},{y}) \
                 in a {width}x{height} canvas"
            );
        }
        placements.push(Placement { x, y, w, h });
        x += w;
    }
    Ok(AtlasLayout { width, height, placements })
}

/// Copy each source verbatim into a fresh canvas (opaque overwrite, no
/// resampling or blending); uncovered canvas stays transparent black.
/// Placement order is input order.
pub fn compose(images: &[DynamicImage]) -> Result<(AtlasLayout, RgbaImage)> {
    let sizes: Vec<(u32, u32)> = images.iter().map(|m| (m.width(), m.height())).collect();
    let layout = plan_layout(&sizes)?;

    let mut canvas = RgbaImage::new(layout.width, layout.height);
    for (src, slot) in images.iter().zip(&layout.placements) {
        info!(x = slot.x, y = slot.y, "placing {}x{} source", slot.w, slot.h);
        imageops::replace(&mut canvas, &src.to_rgba8(), i64::from(slot.x), i64::from(slot.y));
    }
    Ok((layout, canvas))
}

/// Pair each slot with its source name, in input order.
pub fn manifest<'a>(layout: &AtlasLayout, names: &'a [String]) -> Manifest<'a> {
    Manifest {
        version: 1,
        atlas_width: layout.width,
        atlas_height: layout.height,
        entries: names
            .iter()
            .zip(&layout.placements)
            .map(|(name, px)| ManifestEntry { name, px: *px })
            .collect(),
    }
}
