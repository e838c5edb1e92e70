//! 草图导出DXF命令行入口
//!
//! 读取草图JSON，导出为DXF并保存。

use anyhow::{Context, Result};
use clap::Parser;
use sketch_file::{dxf_export, sketch_io, ExportOptions};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(version, about = "Export a 2D sketch to DXF", long_about = None)]
struct Cli {
    /// Input sketch file (JSON)
    #[arg(value_name = "SKETCH")]
    input: PathBuf,

    /// Output DXF file (defaults to the input path with a .dxf extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Target layer for all primitives
    #[arg(long, default_value = dxf_export::DEFAULT_LAYER)]
    layer: String,

    /// Do not ignore invalid constraints
    #[arg(long)]
    strict_constraints: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(level).finish()
    )?;

    let sketch = sketch_io::load(&cli.input)
        .with_context(|| format!("Failed to load sketch: {}", cli.input.display()))?;

    let options = ExportOptions {
        ignore_invalid_constraints: !cli.strict_constraints,
        layer: cli.layer,
    };
    let drawing = dxf_export::sketch_to_dxf_with(&sketch, &options)
        .context("Failed to export sketch")?;

    let output = cli.output.unwrap_or_else(|| cli.input.with_extension("dxf"));
    dxf_export::save(&drawing, &output)
        .with_context(|| format!("Failed to save DXF: {}", output.display()))?;

    info!(
        "Exported {} entities to {}",
        sketch.entity_count(),
        output.display()
    );

    Ok(())
}
