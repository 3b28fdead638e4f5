//! Offline image preprocessing for the media pipeline.
//!
//! Two tools share this library:
//! - `msdf_remap` upscales a distance-style raster and re-encodes the median
//!   of its color channels as a 16-bit signed-distance field.
//! - `atlas_pack` copies a list of rasters verbatim into one row-wrapped
//!   atlas canvas.
//!
//! Both are single-shot batch transforms: decode, compute one canvas, write
//! one PNG.

pub mod codec;
pub mod pack;
pub mod remap;

// Curated re-exports
pub use codec::load_image;
pub use pack::{compose, plan_layout, AtlasLayout, Placement};
pub use remap::{remap_field, RemapConfig};
