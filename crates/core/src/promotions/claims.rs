//! Promotion Claims
//!
//! The accumulator threaded through every promotion during a single price calculation. Each
//! product code maps to the per-unit prices assigned by the promotions that claimed those
//! units. A unit, once claimed, is unavailable to every later rule and promotion.

use rustc_hash::FxHashMap;

use crate::{basket::Line, products::ProductCode};

/// Units claimed by promotions, keyed by product code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Claims {
    claimed: FxHashMap<ProductCode, Vec<i64>>,
}

impl Claims {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the per-unit prices claimed for `code`, in claim order.
    pub fn claimed(&self, code: &str) -> &[i64] {
        self.claimed.get(code).map(Vec::as_slice).unwrap_or_default()
    }

    /// Return the number of units claimed for `code`.
    pub fn count(&self, code: &str) -> u32 {
        u32::try_from(self.claimed(code).len()).unwrap_or(u32::MAX)
    }

    /// Return the number of units on `line` that no promotion has claimed yet.
    pub fn available(&self, line: &Line) -> u32 {
        line.quantity()
            .saturating_sub(self.count(line.product().code.as_str()))
    }

    /// Sum of the claimed unit prices for `code`, in minor units.
    pub fn claimed_total(&self, code: &str) -> i64 {
        self.claimed(code)
            .iter()
            .fold(0_i64, |total, price| total.saturating_add(*price))
    }

    /// Claim `units` units of `code`, each at `unit_price`.
    pub fn claim(&mut self, code: &ProductCode, unit_price: i64, units: u32) {
        if units == 0 {
            return;
        }

        self.claimed
            .entry(code.clone())
            .or_default()
            .extend((0..units).map(|_| unit_price));
    }

    /// Whether no unit has been claimed.
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
