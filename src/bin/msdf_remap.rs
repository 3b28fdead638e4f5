//! MSDF upscale/remap tool.
//!
//! Decodes one distance-style raster, upscales it with bilinear filtering
//! and re-encodes the per-pixel channel median as a 16-bit
//! grayscale-in-RGBA PNG.
//!
//! Example:
//!   cargo run --bin msdf_remap -- glyph.png -o glyph_msdf.png --scale 16 --px-range 4

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use msdf_prep::codec;
use msdf_prep::remap::{remap_field, RemapConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about = "Upscale and remap a distance-style raster into a 16-bit MSDF PNG", long_about = None)]
struct Cli {
    /// Input raster (format sniffed from content, not extension)
    input: PathBuf,
    /// Output PNG path
    #[arg(short, long, default_value = "out.png")] out: PathBuf,
    /// Linear upscale factor
    #[arg(long, default_value_t = 16.0)] scale: f32,
    /// Distance-field range in output pixels
    #[arg(long, default_value_t = 4.0)] px_range: f32,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let cfg = RemapConfig { scale: cli.scale, px_range: cli.px_range };

    let src = codec::load_image(&cli.input)?;
    tracing::debug!(w = src.width(), h = src.height(), "decoded {}", cli.input.display());

    let field = remap_field(&src, &cfg)?;
    codec::write_png_rgba16(&field, &cli.out)?;
    println!("Wrote {} ({}x{})", cli.out.display(), field.width(), field.height());
    Ok(())
}
