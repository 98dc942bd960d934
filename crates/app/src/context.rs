//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    config::CatalogConfig,
    datasource::{Datasource, InMemoryDatasource},
    domain::checkout::{CheckoutService, DatasourceCheckoutService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load catalog")]
    Catalog(#[source] CatalogError),
}

#[derive(Clone)]
pub struct AppContext {
    pub datasource: Arc<dyn Datasource>,
    pub checkout: Arc<dyn CheckoutService>,
}

impl AppContext {
    /// Build application context around an existing datasource.
    #[must_use]
    pub fn new(datasource: Arc<dyn Datasource>) -> Self {
        Self {
            checkout: Arc::new(DatasourceCheckoutService::new(Arc::clone(&datasource))),
            datasource,
        }
    }

    /// Build application context from the configured catalog files.
    ///
    /// # Errors
    ///
    /// Returns an error when either catalog file cannot be read or decoded.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, AppInitError> {
        let catalog =
            Catalog::load(&config.products, &config.promotions).map_err(AppInitError::Catalog)?;

        Ok(Self::new(Arc::new(InMemoryDatasource::from_catalog(catalog))))
    }
}
