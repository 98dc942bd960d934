//! Basket
//!
//! A basket owns its lines behind a single exclusive lock. Adding a product and calculating the
//! price both hold that lock for their whole duration, so a price is never computed against a
//! partially applied addition and concurrent additions never lose an increment.

use std::{
    borrow::Borrow,
    fmt::{Display, Formatter, Result as FmtResult},
    sync::{Mutex, MutexGuard, PoisonError},
};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    pricing::to_display,
    products::{Product, ProductCode},
    promotions::{Promotion, claims::Claims},
    validation::ValidationError,
};

mod line;

pub use line::Line;

/// Basket lines, keyed by product code.
pub type Lines = FxHashMap<ProductCode, Line>;

/// Opaque basket identifier, supplied by whoever creates the basket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BasketId(String);

impl BasketId {
    /// Create a new basket identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for BasketId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for BasketId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BasketId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BasketId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Basket
#[derive(Debug)]
pub struct Basket {
    id: BasketId,
    lines: Mutex<Lines>,
}

impl Basket {
    /// Create a new, empty basket.
    pub fn new(id: impl Into<BasketId>) -> Self {
        Basket {
            id: id.into(),
            lines: Mutex::new(FxHashMap::default()),
        }
    }

    /// Return the basket identifier.
    pub fn id(&self) -> &BasketId {
        &self.id
    }

    /// Add one unit of `product` to the basket.
    ///
    /// A new line is opened for an unseen product code; otherwise the existing line's quantity
    /// is incremented and the product it was opened with is kept.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the product is invalid. The basket is left unchanged.
    pub fn add_product(&self, product: Product) -> Result<(), ValidationError> {
        let mut lines = self.lock();

        product.validate()?;

        let code = product.code.clone();

        let quantity = if let Some(line) = lines.get_mut(code.as_str()) {
            line.increment();
            line.quantity()
        } else {
            lines.insert(code.clone(), Line::new(product));
            1
        };

        debug!(basket = %self.id, product = %code, quantity, "product added to basket");

        Ok(())
    }

    /// Calculate the basket total, in minor units, after applying `promotions` in order.
    ///
    /// Each promotion only sees the units left unclaimed by the promotions before it. Claimed
    /// units are charged at their claimed price and every other unit at the line's unit price.
    pub fn total_minor(&self, promotions: &[Promotion]) -> i64 {
        let lines = self.lock();

        let mut claims = Claims::new();

        for promotion in promotions {
            promotion.resolve(&lines, &mut claims);
        }

        let total = lines.iter().fold(0_i64, |total, (code, line)| {
            let unclaimed = line.quantity().saturating_sub(claims.count(code.as_str()));

            total
                .saturating_add(claims.claimed_total(code.as_str()))
                .saturating_add(line.product().price.saturating_mul(i64::from(unclaimed)))
        });

        debug!(basket = %self.id, promotions = promotions.len(), total, "basket priced");

        total
    }

    /// Calculate the basket price in display units after applying `promotions` in order.
    pub fn calculate_price(&self, promotions: &[Promotion]) -> Decimal {
        to_display(self.total_minor(promotions))
    }

    /// Return the quantity held for `code`, if the basket has a line for it.
    pub fn quantity(&self, code: &str) -> Option<u32> {
        self.lock().get(code).map(Line::quantity)
    }

    /// Return a snapshot of the basket lines, ordered by product code.
    pub fn lines(&self) -> Vec<Line> {
        let mut lines: Vec<Line> = self.lock().values().cloned().collect();

        lines.sort_unstable_by(|a, b| a.product().code.cmp(&b.product().code));

        lines
    }

    /// Number of distinct products in the basket.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Lines> {
        // Lines are only written after validation, so a poisoned guard still holds whole lines.
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
