//! Atlas packer.
//!
//! Decodes the given rasters and copies each verbatim into one row-wrapped
//! RGBA canvas, optionally writing a JSON manifest of the slot assignments.
//!
//! Example:
//!   cargo run --bin atlas_pack -- a.png b.png c.png -o atlas.png --manifest atlas.json

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use msdf_prep::{codec, pack};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about = "Pack images into a single row-wrapped atlas PNG", long_about = None)]
struct Cli {
    /// Input rasters, placed in argument order
    #[arg(required = true)] inputs: Vec<PathBuf>,
    /// Output PNG path
    #[arg(short, long, default_value = "out.png")] out: PathBuf,
    /// Optional JSON manifest describing each source's slot
    #[arg(long)] manifest: Option<PathBuf>,
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

fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut images = Vec::with_capacity(cli.inputs.len());
    for path in &cli.inputs {
        images.push(codec::load_image(path)?);
    }

    let (layout, canvas) = pack::compose(&images)?;
    codec::write_png_rgba8(&canvas, &cli.out)?;

    if let Some(manifest_path) = &cli.manifest {
        let names: Vec<String> = cli.inputs.iter().map(|p| source_name(p)).collect();
        let manifest = pack::manifest(&layout, &names);
        let js = serde_json::to_string_pretty(&manifest)?;
        fs::write(manifest_path, js)
            .with_context(|| format!("write {}", manifest_path.display()))?;
    }

    println!(
        "Packed {} sources into {} ({}x{})",
        images.len(),
        cli.out.display(),
        layout.width,
        layout.height
    );
    Ok(())
}
