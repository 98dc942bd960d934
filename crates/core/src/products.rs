//! Products

use std::{
    borrow::Borrow,
    fmt::{Display, Formatter, Result as FmtResult},
};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::validation::{FieldViolation, ValidationError};

/// Product code, the key products are looked up and grouped by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    /// Create a new product code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Return the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code is empty once surrounding whitespace is removed.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for ProductCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ProductCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for ProductCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product code
    pub code: ProductCode,

    /// Display name, optional
    #[serde(default)]
    pub name: String,

    /// Unit price in minor units
    pub price: i64,
}

impl Product {
    /// Create a new product.
    pub fn new(code: impl Into<ProductCode>, name: impl Into<String>, price: i64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
        }
    }

    /// Validate the product, collecting every violated field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing each violation when the code is blank or the
    /// price is not positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = SmallVec::new();

        if self.code.is_blank() {
            violations.push(FieldViolation::new("code", "Invalid product code"));
        }

        if self.price <= 0 {
            violations.push(FieldViolation::new("price", "Invalid product price"));
        }

        ValidationError::from_violations(violations).map_or(Ok(()), Err)
    }
}
