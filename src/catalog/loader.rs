use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::catalog::error::ExportError;
use crate::catalog::types::Product;

/// Read and parse a catalog document from disk.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Product>, ExportError> {
    let bytes = fs::read(path)?;
    parse_catalog(&bytes)
}

/// Parse a catalog document already held in memory.
///
/// Parsing happens in two stages so failures stay distinguishable: a byte
/// stream that is not JSON at all fails with [`ExportError::Parse`], while
/// well-formed JSON missing a required field (or shaped wrong, e.g. a
/// top-level object instead of an array) fails with [`ExportError::Schema`].
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Product>, ExportError> {
    let document = parse_document(bytes)?;
    serde_json::from_value(document).map_err(ExportError::Schema)
}

/// Parse raw bytes into a JSON value, trying SIMD first
fn parse_document(bytes: &[u8]) -> Result<Value, ExportError> {
    // simd-json mutates the buffer it parses, so hand it a scratch copy and
    // keep the original for the fallback parser's error reporting.
    let mut scratch = bytes.to_vec();
    match simd_json::serde::from_slice::<Value>(&mut scratch) {
        Ok(value) => Ok(value),
        Err(_) => serde_json::from_slice(bytes).map_err(ExportError::Parse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_catalog() {
        let doc = br#"[{
            "id": 7,
            "name": "Coffee",
            "price": 4.25,
            "labels": ["hot", "bestseller"],
            "imageUrls": ["https://cdn.example.com/coffee.png"],
            "productdescriptions": [{"title": "About", "content": "Dark roast"}],
            "productvariants": [{
                "name": "Large",
                "productvariantoptions": [{"name": "Oat milk", "price": 0.5}]
            }]
        }]"#;

        let products = parse_catalog(doc).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 7);
        assert_eq!(products[0].labels, vec!["hot", "bestseller"]);
        assert_eq!(products[0].variants[0].options[0].name, "Oat milk");
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let result = parse_catalog(b"[{\"id\": 1,");
        assert!(matches!(result, Err(ExportError::Parse(_))));
    }

    #[test]
    fn test_missing_required_field_is_schema_error() {
        // name is required on product
        let result = parse_catalog(br#"[{"id": 1, "price": 2.0}]"#);
        assert!(matches!(result, Err(ExportError::Schema(_))));
    }

    #[test]
    fn test_wrong_document_shape_is_schema_error() {
        let result = parse_catalog(br#"{"id": 1, "name": "Tea", "price": 2.0}"#);
        assert!(matches!(result, Err(ExportError::Schema(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_catalog("definitely/not/here/products.json");
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
