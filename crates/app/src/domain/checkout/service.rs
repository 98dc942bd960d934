//! Checkout service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use checkout::{
    basket::{Basket, BasketId},
    products::ProductCode,
};
use mockall::automock;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::{datasource::Datasource, domain::checkout::errors::CheckoutServiceError};

#[derive(Clone)]
pub struct DatasourceCheckoutService {
    datasource: Arc<dyn Datasource>,
}

impl DatasourceCheckoutService {
    #[must_use]
    pub fn new(datasource: Arc<dyn Datasource>) -> Self {
        Self { datasource }
    }
}

impl Debug for DatasourceCheckoutService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DatasourceCheckoutService").finish_non_exhaustive()
    }
}

#[async_trait]
impl CheckoutService for DatasourceCheckoutService {
    async fn create_basket(&self) -> Result<BasketId, CheckoutServiceError> {
        let id = BasketId::new(Uuid::now_v7().to_string());

        self.datasource.add_basket(Arc::new(Basket::new(id.clone())))?;

        info!(basket = %id, "basket created");

        Ok(id)
    }

    async fn add_product(
        &self,
        basket: BasketId,
        product: ProductCode,
    ) -> Result<(), CheckoutServiceError> {
        let product = self.datasource.product(product.as_str())?;
        let basket = self.datasource.basket(basket.as_str())?;

        basket.add_product(product)?;

        Ok(())
    }

    async fn basket_price(&self, basket: BasketId) -> Result<Decimal, CheckoutServiceError> {
        let basket = self.datasource.basket(basket.as_str())?;
        let promotions = self.datasource.promotions();

        let price = basket.calculate_price(&promotions);

        info!(basket = %basket.id(), %price, "basket priced");

        Ok(price)
    }

    async fn delete_basket(&self, basket: BasketId) -> Result<(), CheckoutServiceError> {
        self.datasource.delete_basket(basket.as_str())?;

        info!(%basket, "basket deleted");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Opens a new, empty basket and returns its identifier.
    async fn create_basket(&self) -> Result<BasketId, CheckoutServiceError>;

    /// Adds one unit of a catalog product to a basket.
    async fn add_product(
        &self,
        basket: BasketId,
        product: ProductCode,
    ) -> Result<(), CheckoutServiceError>;

    /// Prices a basket against the active promotions.
    async fn basket_price(&self, basket: BasketId) -> Result<Decimal, CheckoutServiceError>;

    /// Removes a basket.
    async fn delete_basket(&self, basket: BasketId) -> Result<(), CheckoutServiceError>;
}
