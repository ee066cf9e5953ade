//! stockroom-export: Flatten a JSON product catalog into one SQL batch
//!
//! Usage:
//!   # Defaults: read products.json, write insert_all.sql
//!   stockroom-export
//!
//!   # Explicit paths
//!   stockroom-export catalog/products.json -o sql/insert_all.sql

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use stockroom::export_catalog;

#[derive(Parser, Debug)]
#[command(name = "stockroom-export")]
#[command(about = "Flatten a JSON product catalog into one SQL batch", long_about = None)]
struct Args {
    /// Catalog document to read
    #[arg(value_name = "FILE", default_value = "products.json")]
    input: String,

    /// SQL file to write
    #[arg(long, short = 'o', default_value = "insert_all.sql")]
    output: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let counts = export_catalog(&args.input, &args.output)
        .with_context(|| format!("exporting {}", args.input))?;

    println!(
        "✅ {} rows ({} products, {} images, {} descriptions, {} variants, {} options) written to {}",
        counts.total(),
        counts.products,
        counts.images,
        counts.descriptions,
        counts.variants,
        counts.options,
        args.output
    );

    Ok(())
}
