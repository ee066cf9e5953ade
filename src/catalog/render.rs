//! Render a loaded catalog into one truncate-then-insert SQL batch.
//!
//! Rendering is a single pass over the products in input order. Child rows
//! are appended as their parent is visited, so every foreign key refers to
//! an id that has already been emitted.

use crate::catalog::types::{IdSequence, Product, RowCounts};

/// Double every single quote so the value can sit inside a single-quoted
/// SQL literal. Applied to every user-supplied string field, never to
/// numeric or boolean fields.
pub fn escape(text: &str) -> String {
    text.replace('\'', "''")
}

/// The five per-table row collections produced by one export run.
#[derive(Debug, Default)]
pub struct SqlBatch {
    products: Vec<String>,
    images: Vec<String>,
    descriptions: Vec<String>,
    variants: Vec<String>,
    options: Vec<String>,
}

impl SqlBatch {
    /// Flatten the catalog into row tuples, assigning surrogate ids.
    ///
    /// Variant and option ids each come from their own run-scoped
    /// [`IdSequence`]; the sequences live and die inside this call, so
    /// repeated renders always restart at 1.
    pub fn from_products(products: &[Product]) -> Self {
        let mut variant_ids = IdSequence::new();
        let mut option_ids = IdSequence::new();
        let mut batch = SqlBatch::default();

        for product in products {
            batch.products.push(product_row(product));

            for url in &product.image_urls {
                batch
                    .images
                    .push(format!("(DEFAULT, {}, '{}')", product.id, escape(url)));
            }

            for description in &product.descriptions {
                batch.descriptions.push(format!(
                    "(DEFAULT, {}, '{}', '{}')",
                    product.id,
                    escape(&description.title),
                    escape(&description.content)
                ));
            }

            for variant in &product.variants {
                let variant_id = variant_ids.next_id();
                batch.variants.push(format!(
                    "({}, {}, '{}', {})",
                    variant_id,
                    product.id,
                    escape(&variant.name),
                    variant.ispublished
                ));

                for option in &variant.options {
                    let option_id = option_ids.next_id();
                    batch.options.push(format!(
                        "({}, {}, '{}', {}, {}, {}, {})",
                        option_id,
                        variant_id,
                        escape(&option.name),
                        option.price,
                        option.ispublished,
                        option.isoutofstock,
                        option.isdefault
                    ));
                }
            }
        }

        batch
    }

    /// Row counts per destination table
    pub fn counts(&self) -> RowCounts {
        RowCounts {
            products: self.products.len(),
            images: self.images.len(),
            descriptions: self.descriptions.len(),
            variants: self.variants.len(),
            options: self.options.len(),
        }
    }

    /// Assemble the final SQL text: the full TRUNCATE block (children
    /// before parents), then one INSERT per table in parent-first order.
    ///
    /// A table with zero rows contributes no INSERT statement at all,
    /// since `INSERT ... VALUES` with an empty tuple list is not valid
    /// SQL. The TRUNCATE block is always emitted in full.
    pub fn into_sql(self) -> String {
        let mut sql = String::from(
            "\n-- Clean up existing data\n\
             TRUNCATE TABLE productvariantoptions RESTART IDENTITY CASCADE;\n\
             TRUNCATE TABLE productvariants RESTART IDENTITY CASCADE;\n\
             TRUNCATE TABLE productdescriptions RESTART IDENTITY CASCADE;\n\
             TRUNCATE TABLE productimages RESTART IDENTITY CASCADE;\n\
             TRUNCATE TABLE products RESTART IDENTITY CASCADE;\n\n",
        );

        append_insert(
            &mut sql,
            "products (id, name, ispublished, category, labels, price, discount, tax)",
            &self.products,
        );
        append_insert(&mut sql, "productimages (id, productid, url)", &self.images);
        append_insert(
            &mut sql,
            "productdescriptions (id, productid, title, content)",
            &self.descriptions,
        );
        append_insert(
            &mut sql,
            "productvariants (id, productid, name, ispublished)",
            &self.variants,
        );
        append_insert(
            &mut sql,
            "productvariantoptions (id, variantid, name, price, ispublished, isoutofstock, isdefault)",
            &self.options,
        );

        sql
    }
}

fn product_row(product: &Product) -> String {
    // discount and tax have no source in the catalog document; the
    // destination schema carries them, so they load as NULL
    format!(
        "({}, '{}', {}, '{}', '{}', {}, NULL, NULL)",
        product.id,
        escape(&product.name),
        product.ispublished,
        escape(&product.category),
        labels_literal(&product.labels),
        product.price
    )
}

/// Postgres text-array literal: `{"a","b"}`
fn labels_literal(labels: &[String]) -> String {
    let quoted: Vec<String> = labels
        .iter()
        .map(|label| format!("\"{}\"", escape(label)))
        .collect();
    format!("{{{}}}", quoted.join(","))
}

fn append_insert(sql: &mut String, table_and_columns: &str, rows: &[String]) {
    if rows.is_empty() {
        return;
    }
    sql.push_str("INSERT INTO ");
    sql.push_str(table_and_columns);
    sql.push_str(" VALUES\n");
    sql.push_str(&rows.join(",\n"));
    sql.push_str(";\n\n");
}
