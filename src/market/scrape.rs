//! Fetch the market price page and extract its table rows.
//!
//! Extraction is positional: the first `<table>` on the page, one header
//! row, then name / wholesale / retail / shopping-mall columns with an
//! optional fifth units column. Every assumption about the page structure
//! lives in [`parse_price_table`], so a layout change only touches this
//! file.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::market::error::ScrapeError;

/// Default page scraped when no URL is given on the command line
pub const MARKET_URL: &str = "https://vegetablemarketprice.com/market/andhrapradesh/today";

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("static selector"));
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("static selector"));
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td, th").expect("static selector"));
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").expect("static selector"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// One extracted price listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRow {
    pub name: String,
    pub wholesale_price: String,
    pub retail_price: String,
    pub shopping_mall_price: String,
    pub units: String,
}

/// Perform the single blocking GET and return the response body.
///
/// There is no retry or backoff; a failed request fails the run.
pub fn fetch_page(url: &str) -> Result<String, ScrapeError> {
    let response = ureq::get(url).call().map_err(|err| ScrapeError::Network {
        url: url.to_string(),
        reason: err.to_string(),
    })?;

    response
        .into_body()
        .read_to_string()
        .map_err(|err| ScrapeError::Network {
            url: url.to_string(),
            reason: format!("failed reading response body: {err}"),
        })
}

/// The page `<title>` text, for the diagnostic banner
pub fn page_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&TITLE)
        .next()
        .map(|title| collapse_whitespace(&title.text().collect::<String>()))
}

/// Extract price rows from the first table on the page.
///
/// The header row is skipped. Rows with fewer than four cells (spacers,
/// section headings) are skipped rather than failing the run; a page with
/// no table at all is a [`ScrapeError::TableMissing`].
pub fn parse_price_table(html: &str) -> Result<Vec<PriceRow>, ScrapeError> {
    let document = Html::parse_document(html);
    let table = document
        .select(&TABLE)
        .next()
        .ok_or(ScrapeError::TableMissing)?;

    let mut rows = Vec::new();
    for row in table.select(&ROW).skip(1) {
        let cells: Vec<String> = row.select(&CELL).map(cell_text).collect();
        if cells.len() < 4 {
            continue;
        }

        rows.push(PriceRow {
            name: cells[0].clone(),
            wholesale_price: cells[1].clone(),
            retail_price: cells[2].clone(),
            shopping_mall_price: cells[3].clone(),
            units: cells.get(4).cloned().unwrap_or_default(),
        });
    }

    Ok(rows)
}

fn cell_text(cell: ElementRef<'_>) -> String {
    collapse_whitespace(&cell.text().collect::<String>())
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
          <head><title>  Vegetable Prices
            Today </title></head>
          <body>
            <table>
              <tr><th>Vegetable</th><th>Wholesale</th><th>Retail</th><th>Mall</th><th>Units</th></tr>
              <tr>
                <td> Tomato </td>
                <td>25 - 30</td>
                <td>35</td>
                <td>40</td>
                <td>1 kg</td>
              </tr>
              <tr><td colspan="5">--- leafy greens ---</td></tr>
              <tr>
                <td>Spinach
                    (local)</td>
                <td>10</td>
                <td>15</td>
                <td>18</td>
              </tr>
            </table>
          </body>
        </html>
    "#;

    #[test]
    fn test_extracts_rows_and_skips_header() {
        let rows = parse_price_table(PAGE).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            PriceRow {
                name: "Tomato".to_string(),
                wholesale_price: "25 - 30".to_string(),
                retail_price: "35".to_string(),
                shopping_mall_price: "40".to_string(),
                units: "1 kg".to_string(),
            }
        );
    }

    #[test]
    fn test_four_column_row_gets_empty_units() {
        let rows = parse_price_table(PAGE).unwrap();
        assert_eq!(rows[1].name, "Spinach (local)");
        assert_eq!(rows[1].units, "");
    }

    #[test]
    fn test_short_rows_are_skipped() {
        // the colspan spacer row has a single cell and must not appear
        let rows = parse_price_table(PAGE).unwrap();
        assert!(rows.iter().all(|row| !row.name.contains("leafy")));
    }

    #[test]
    fn test_page_without_table_is_structure_error() {
        let result = parse_price_table("<html><body><p>loading...</p></body></html>");
        assert!(matches!(result, Err(ScrapeError::TableMissing)));
    }

    #[test]
    fn test_title_is_whitespace_collapsed() {
        assert_eq!(
            page_title(PAGE).as_deref(),
            Some("Vegetable Prices Today")
        );
    }

    #[test]
    fn test_rows_serialize_as_json() {
        let rows = parse_price_table(PAGE).unwrap();
        let line = serde_json::to_string(&rows[0]).unwrap();
        assert!(line.contains("\"wholesale_price\":\"25 - 30\""));
    }
}
