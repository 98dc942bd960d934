//! Checkout service errors.

use checkout::validation::ValidationError;
use thiserror::Error;

use crate::datasource::DatasourceError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("product {0} not found")]
    ProductNotFound(String),

    #[error("basket {0} not found")]
    BasketNotFound(String),

    #[error("basket {0} already exists")]
    AlreadyExists(String),
}

impl From<DatasourceError> for CheckoutServiceError {
    fn from(error: DatasourceError) -> Self {
        match error {
            DatasourceError::ProductNotFound(code) => Self::ProductNotFound(code),
            DatasourceError::BasketNotFound(id) => Self::BasketNotFound(id),
            DatasourceError::PrimaryKey(id) => Self::AlreadyExists(id),
        }
    }
}
