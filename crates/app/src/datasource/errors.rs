//! Datasource errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasourceError {
    #[error("product {0} not found")]
    ProductNotFound(String),

    #[error("basket {0} not found")]
    BasketNotFound(String),

    #[error("basket {0} already exists")]
    PrimaryKey(String),
}
