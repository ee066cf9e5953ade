//! stockroom-scrape: Extract commodity prices from a public market page
//!
//! Usage:
//!   # Scrape the default market page
//!   stockroom-scrape
//!
//!   # Scrape another region
//!   stockroom-scrape https://vegetablemarketprice.com/market/telangana/today
//!
//! Rows are printed to stdout as JSON lines; diagnostics go to stderr.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use stockroom::market::{fetch_page, page_title, parse_price_table, MARKET_URL};

#[derive(Parser, Debug)]
#[command(name = "stockroom-scrape")]
#[command(about = "Extract commodity prices from a public market page", long_about = None)]
struct Args {
    /// Page to scrape
    #[arg(value_name = "URL", default_value = MARKET_URL)]
    url: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    eprintln!("Fetching data from: {}", args.url);
    let html = fetch_page(&args.url)?;

    if let Some(title) = page_title(&html) {
        eprintln!("Page title: {}", title);
    }

    let rows = parse_price_table(&html)?;
    eprintln!("Extracted {} rows", rows.len());

    let mut stdout = std::io::stdout().lock();
    for row in &rows {
        let line = serde_json::to_string(row)?;
        writeln!(stdout, "{}", line)?;
    }

    Ok(())
}
