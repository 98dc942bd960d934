//! Product Catalog

use std::path::Path;

use checkout::products::Product;
use tracing::warn;

use crate::catalog::{CatalogError, read_document};

/// Load the products listed in `path`, dropping any that fail validation.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the file cannot be read or decoded.
pub fn load(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let records: Vec<Product> = read_document(path)?;

    Ok(validated(records))
}

/// Keep only the products that pass validation.
pub fn validated(records: Vec<Product>) -> Vec<Product> {
    records
        .into_iter()
        .filter(|product| match product.validate() {
            Ok(()) => true,
            Err(error) => {
                warn!(product = %product.code, %error, "skipping invalid product");
                false
            }
        })
        .collect()
}
