//! Catalog export - flatten a nested JSON product catalog into a
//! truncate-then-insert SQL batch.
//!
//! The pipeline is a single pass: load the document, walk the products in
//! input order collecting per-table row tuples (assigning surrogate ids to
//! variants and options as they are first seen), assemble the statements,
//! and write the artifact atomically.

pub mod error;
pub mod loader;
pub mod render;
pub mod types;
pub mod writer;

pub use error::ExportError;
pub use loader::{load_catalog, parse_catalog};
pub use render::{escape, SqlBatch};
pub use types::{
    IdSequence, Product, ProductDescription, ProductVariant, RowCounts, VariantOption,
};
pub use writer::write_sql;
