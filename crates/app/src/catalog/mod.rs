//! Catalog
//!
//! Loads the product catalog and the active promotion list from JSON or YAML documents.

use std::{fs, path::Path};

use checkout::{products::Product, promotions::Promotion};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

pub mod products;
pub mod promotions;

pub use promotions::PromotionParseError;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unrecognised file extension
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

/// Catalog document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON
    Json,

    /// YAML
    Yaml,
}

impl Format {
    /// Pick the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnsupportedFormat`] for anything other than `.json`, `.yml` or
    /// `.yaml`.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("yml" | "yaml") => Ok(Format::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Decode a document in this format.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the document is malformed.
    pub fn decode<T: DeserializeOwned>(self, contents: &str) -> Result<T, CatalogError> {
        Ok(match self {
            Format::Json => serde_json::from_str(contents)?,
            Format::Yaml => serde_norway::from_str(contents)?,
        })
    }
}

pub(crate) fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let format = Format::from_path(path)?;
    let contents = fs::read_to_string(path)?;

    format.decode(&contents)
}

/// Products and promotions loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Valid products
    pub products: Vec<Product>,

    /// Promotions, in the order they apply
    pub promotions: Vec<Promotion>,
}

impl Catalog {
    /// Load a catalog from a products file and a promotions file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if either file cannot be read or is not a well-formed
    /// document. Individual invalid entries are skipped rather than failing the load.
    pub fn load(products: &Path, promotions: &Path) -> Result<Self, CatalogError> {
        let catalog = Catalog {
            products: products::load(products)?,
            promotions: promotions::load(promotions)?,
        };

        info!(
            products = catalog.products.len(),
            promotions = catalog.promotions.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use checkout::promotions::PromotionKind;
    use testresult::TestResult;

    use super::*;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn format_follows_extension() -> TestResult {
        assert_eq!(Format::from_path(Path::new("a.json"))?, Format::Json);
        assert_eq!(Format::from_path(Path::new("a.yml"))?, Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.yaml"))?, Format::Yaml);

        assert!(matches!(
            Format::from_path(Path::new("a.toml")),
            Err(CatalogError::UnsupportedFormat(_))
        ));

        Ok(())
    }

    #[test]
    fn loads_bundled_fixtures() -> TestResult {
        let catalog = Catalog::load(
            &fixture("products.json"),
            &fixture("promotions.json"),
        )?;

        assert_eq!(catalog.products.len(), 3);

        let kinds: Vec<PromotionKind> = catalog.promotions.iter().map(Promotion::kind).collect();

        assert_eq!(kinds, [PromotionKind::FreeItems, PromotionKind::Bulk]);

        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Catalog::load(
            &fixture("missing.json"),
            &fixture("promotions.json"),
        );

        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
