//! # Stockroom - storefront data loading toolkit
//!
//! Two independent batch pipelines for a small storefront:
//!
//! - **catalog**: flatten a nested JSON product catalog into five
//!   relational tables and emit one truncate-then-insert SQL batch
//! - **market**: scrape a public commodity-price page into structured rows
//!
//! ## Quick Start
//!
//! ### Catalog export
//!
//! ```rust
//! use stockroom::catalog::{parse_catalog, SqlBatch};
//!
//! # fn main() -> Result<(), stockroom::catalog::ExportError> {
//! let products = parse_catalog(br#"[
//!     {"id": 1, "name": "O'Brien's Tea", "price": 3.5,
//!      "productvariants": [{"name": "Small"}]}
//! ]"#)?;
//!
//! let sql = SqlBatch::from_products(&products).into_sql();
//! assert!(sql.contains("(1, 'O''Brien''s Tea', true, '', '{}', 3.5, NULL, NULL)"));
//! assert!(sql.contains("(1, 1, 'Small', true)"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Price table extraction
//!
//! ```rust
//! use stockroom::market::parse_price_table;
//!
//! let page = "<table>\
//!     <tr><th>Vegetable</th><th>Wholesale</th><th>Retail</th><th>Mall</th></tr>\
//!     <tr><td>Okra</td><td>20</td><td>30</td><td>35</td></tr>\
//! </table>";
//!
//! let rows = parse_price_table(page).unwrap();
//! assert_eq!(rows[0].name, "Okra");
//! ```

use std::path::Path;

pub mod catalog;
pub mod market;

// Re-export commonly used types for convenience
pub use catalog::{escape, ExportError, IdSequence, Product, RowCounts, SqlBatch};
pub use market::{PriceRow, ScrapeError};

/// Main entry point: load a catalog file, render the SQL batch, and write
/// it atomically to `output`. Returns the per-table row counts.
pub fn export_catalog(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<RowCounts, ExportError> {
    let products = catalog::load_catalog(input)?;
    let batch = SqlBatch::from_products(&products);
    let counts = batch.counts();
    catalog::write_sql(output, &batch.into_sql())?;
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_export_catalog_end_to_end() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("products.json");
        let output = dir.path().join("insert_all.sql");

        fs::write(
            &input,
            r#"[{
                "id": 1,
                "name": "O'Brien's Tea",
                "price": 3.5,
                "labels": ["hot"],
                "productvariants": [{
                    "name": "Small",
                    "productvariantoptions": [{"name": "Default", "price": 0}]
                }]
            }]"#,
        )
        .unwrap();

        let counts = export_catalog(&input, &output).unwrap();

        assert_eq!(counts.products, 1);
        assert_eq!(counts.variants, 1);
        assert_eq!(counts.options, 1);

        let sql = fs::read_to_string(&output).unwrap();
        assert!(sql.starts_with("\n-- Clean up existing data"));
        assert!(sql.contains("(1, 'O''Brien''s Tea', true, '', '{\"hot\"}', 3.5, NULL, NULL)"));
        assert!(sql.contains("(1, 1, 'Default', 0, true, false, false)"));
    }

    #[test]
    fn test_export_fails_without_partial_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("products.json");
        let output = dir.path().join("insert_all.sql");

        // name missing on the second product: the whole run aborts
        fs::write(
            &input,
            r#"[{"id": 1, "name": "A", "price": 1}, {"id": 2, "price": 2}]"#,
        )
        .unwrap();

        let result = export_catalog(&input, &output);
        assert!(matches!(result, Err(ExportError::Schema(_))));
        assert!(!output.exists());
    }
}
