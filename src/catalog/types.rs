use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A product record as it appears in the catalog document.
///
/// The `id` is supplied by the source data and is never generated here;
/// everything the document may omit carries its default in the serde
/// attributes, so absence handling is declared in one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// External key, unique and stable across runs
    pub id: i64,

    pub name: String,

    /// Kept as a JSON number so `3.5` and `0` render with their source form
    pub price: Number,

    #[serde(default = "default_true")]
    pub ispublished: bool,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,

    #[serde(rename = "productdescriptions", default)]
    pub descriptions: Vec<ProductDescription>,

    #[serde(rename = "productvariants", default)]
    pub variants: Vec<ProductVariant>,
}

/// Title/body copy attached to a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDescription {
    pub title: String,
    pub content: String,
}

/// A named variant of a product (e.g. a size)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    pub name: String,

    #[serde(default = "default_true")]
    pub ispublished: bool,

    #[serde(rename = "productvariantoptions", default)]
    pub options: Vec<VariantOption>,
}

/// A selectable option within a variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantOption {
    pub name: String,

    pub price: Number,

    #[serde(default = "default_true")]
    pub ispublished: bool,

    #[serde(default)]
    pub isoutofstock: bool,

    #[serde(default)]
    pub isdefault: bool,
}

fn default_true() -> bool {
    true
}

/// Run-scoped surrogate key generator.
///
/// Ids start at 1 and never repeat within a run. Each child table that
/// needs client-side ids gets its own sequence, owned by the render call,
/// so the exporter stays reentrant.
#[derive(Debug)]
pub struct IdSequence {
    next: i64,
}

impl IdSequence {
    pub fn new() -> Self {
        IdSequence { next: 1 }
    }

    /// Take the next id, advancing the sequence
    pub fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Row counts per destination table for one export run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCounts {
    pub products: usize,
    pub images: usize,
    pub descriptions: usize,
    pub variants: usize,
    pub options: usize,
}

impl RowCounts {
    pub fn total(&self) -> usize {
        self.products + self.images + self.descriptions + self.variants + self.options
    }
}
