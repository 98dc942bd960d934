//! Basket Lines

use crate::products::Product;

/// A product bound to the number of units of it held in a basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    product: Product,
    quantity: u32,
}

impl Line {
    /// Create a line holding a single unit of `product`.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Create a line holding `quantity` units of `product`.
    ///
    /// A line always holds at least one unit, so a zero quantity is raised to one.
    #[cfg(test)]
    pub(crate) fn with_quantity(product: Product, quantity: u32) -> Self {
        Self {
            product,
            quantity: quantity.max(1),
        }
    }

    /// Return the product.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Return the number of units.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Add one more unit.
    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }
}
