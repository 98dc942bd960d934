//! Datasource
//!
//! Read-only catalog lookups plus the live basket store. Products and promotions are fixed at
//! construction; baskets are held behind a store-level lock that is separate from each basket's
//! own line lock.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use checkout::{
    basket::{Basket, BasketId},
    products::{Product, ProductCode},
    promotions::Promotion,
};
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::catalog::Catalog;

pub mod errors;

pub use errors::DatasourceError;

#[automock]
pub trait Datasource: Send + Sync {
    /// Look up a product by code.
    fn product(&self, code: &str) -> Result<Product, DatasourceError>;

    /// Return every product, ordered by code.
    fn products(&self) -> Vec<Product>;

    /// Return the active promotions, in the order they apply.
    fn promotions(&self) -> Arc<[Promotion]>;

    /// Look up a live basket.
    fn basket(&self, id: &str) -> Result<Arc<Basket>, DatasourceError>;

    /// Store a new basket, refusing to replace an existing one.
    fn add_basket(&self, basket: Arc<Basket>) -> Result<(), DatasourceError>;

    /// Remove a basket.
    fn delete_basket(&self, id: &str) -> Result<(), DatasourceError>;
}

type Baskets = FxHashMap<BasketId, Arc<Basket>>;

#[derive(Debug)]
pub struct InMemoryDatasource {
    products: FxHashMap<ProductCode, Product>,
    promotions: Arc<[Promotion]>,
    baskets: RwLock<Baskets>,
}

impl InMemoryDatasource {
    #[must_use]
    pub fn new(products: Vec<Product>, promotions: Vec<Promotion>) -> Self {
        let mut by_code = FxHashMap::default();

        for product in products {
            let code = product.code.clone();

            if by_code.insert(code.clone(), product).is_some() {
                warn!(product = %code, "duplicate product code, keeping the last entry");
            }
        }

        Self {
            products: by_code,
            promotions: promotions.into(),
            baskets: RwLock::new(FxHashMap::default()),
        }
    }

    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::new(catalog.products, catalog.promotions)
    }

    fn read(&self) -> RwLockReadGuard<'_, Baskets> {
        self.baskets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Baskets> {
        self.baskets.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Datasource for InMemoryDatasource {
    fn product(&self, code: &str) -> Result<Product, DatasourceError> {
        self.products
            .get(code)
            .cloned()
            .ok_or_else(|| DatasourceError::ProductNotFound(code.to_string()))
    }

    fn products(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();

        products.sort_unstable_by(|a, b| a.code.cmp(&b.code));

        products
    }

    fn promotions(&self) -> Arc<[Promotion]> {
        Arc::clone(&self.promotions)
    }

    fn basket(&self, id: &str) -> Result<Arc<Basket>, DatasourceError> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| DatasourceError::BasketNotFound(id.to_string()))
    }

    fn add_basket(&self, basket: Arc<Basket>) -> Result<(), DatasourceError> {
        let mut baskets = self.write();
        let id = basket.id().clone();

        if baskets.contains_key(&id) {
            return Err(DatasourceError::PrimaryKey(id.to_string()));
        }

        debug!(basket = %id, "basket stored");

        baskets.insert(id, basket);

        Ok(())
    }

    fn delete_basket(&self, id: &str) -> Result<(), DatasourceError> {
        if self.write().remove(id).is_none() {
            return Err(DatasourceError::BasketNotFound(id.to_string()));
        }

        debug!(basket = id, "basket removed");

        Ok(())
    }
}
