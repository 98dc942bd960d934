//! Catalog Config

use std::path::PathBuf;

use clap::Args;

/// Catalog file locations.
#[derive(Debug, Clone, Args)]
pub struct CatalogConfig {
    /// Products file (.json, .yml or .yaml)
    #[arg(long, env = "CHECKOUT_PRODUCTS", default_value = "fixtures/products.json")]
    pub products: PathBuf,

    /// Promotions file (.json, .yml or .yaml), applied in file order
    #[arg(
        long,
        env = "CHECKOUT_PROMOTIONS",
        default_value = "fixtures/promotions.json"
    )]
    pub promotions: PathBuf,
}
