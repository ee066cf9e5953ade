//! Market price scraping - one blocking GET against a public price page,
//! one positional pass over its HTML table.

pub mod error;
pub mod scrape;

pub use error::ScrapeError;
pub use scrape::{fetch_page, page_title, parse_price_table, PriceRow, MARKET_URL};
