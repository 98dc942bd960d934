//! Free Items Promotion
//!
//! "Buy `buy`, get `free` of them free". Each rule claims as many whole sets of `buy` units as
//! are still available. Within the claimed units the first `free × sets` cost nothing and the
//! rest are recorded at the full unit price, so they count as claimed for later rules without
//! changing the total. Units left over below a whole set stay unclaimed.

use tracing::debug;

use crate::{
    basket::Lines,
    products::ProductCode,
    promotions::{claims::Claims, offers::Offers},
};

/// A single "buy X get Y free" rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeItemsRule {
    /// Units that make up one set.
    pub buy: u32,

    /// Units in each set that are free.
    pub free: u32,
}

impl FreeItemsRule {
    /// Create a new free items rule.
    pub const fn new(buy: u32, free: u32) -> Self {
        Self { buy, free }
    }
}

/// Free items promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeItemsPromotion {
    offers: Offers<FreeItemsRule>,
}

impl FreeItemsPromotion {
    /// Create a new free items promotion.
    pub fn new(offers: Offers<FreeItemsRule>) -> Self {
        Self { offers }
    }

    /// Return the offers.
    pub fn offers(&self) -> &Offers<FreeItemsRule> {
        &self.offers
    }

    /// Claim whole sets of each targeted line, marking the free units of each set.
    pub fn resolve(&self, lines: &Lines, claims: &mut Claims) {
        for (code, rules) in self.offers.iter() {
            let Some(line) = lines.get(code) else {
                continue;
            };

            debug!(product = %code, quantity = line.quantity(), "free items offer matches basket line");

            for rule in rules {
                let available = claims.available(line);

                let sets = available.checked_div(rule.buy).unwrap_or(0);

                if sets == 0 {
                    continue;
                }

                let elements = sets.saturating_mul(rule.buy);
                let free = rule.free.saturating_mul(sets).min(elements);

                debug!(
                    product = %code,
                    buy = rule.buy,
                    free = rule.free,
                    sets,
                    free_units = free,
                    "free items rule claimed units"
                );

                claims.claim(code, 0, free);
                claims.claim(code, line.product().price, elements - free);
            }
        }
    }
}

impl FromIterator<(ProductCode, Vec<FreeItemsRule>)> for FreeItemsPromotion {
    fn from_iter<I: IntoIterator<Item = (ProductCode, Vec<FreeItemsRule>)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;

    use crate::{basket::Line, products::Product};

    use super::*;

    fn lines(entries: &[(&str, i64, u32)]) -> Lines {
        entries
            .iter()
            .map(|&(code, price, quantity)| {
                (
                    ProductCode::from(code),
                    Line::with_quantity(Product::new(code, code, price), quantity),
                )
            })
            .collect()
    }

    fn promotion(offers: &[(&str, &[FreeItemsRule])]) -> FreeItemsPromotion {
        offers
            .iter()
            .map(|(code, rules)| (ProductCode::from(*code), rules.to_vec()))
            .collect()
    }

    fn free_units(claims: &Claims, code: &str) -> usize {
        claims.claimed(code).iter().filter(|price| **price == 0).count()
    }

    #[test]
    fn empty_basket_claims_nothing() {
        let mut claims = Claims::new();

        promotion(&[("P2", &[FreeItemsRule::new(2, 1)])])
            .resolve(&FxHashMap::default(), &mut claims);

        assert!(claims.is_empty());
    }

    #[test]
    fn untargeted_products_are_not_claimed() {
        let mut claims = Claims::new();
        let lines = lines(&[("P1", 1000, 1), ("P2", 1200, 1), ("P3", 1500, 1)]);

        promotion(&[("P2", &[FreeItemsRule::new(2, 1)])]).resolve(&lines, &mut claims);

        assert!(claims.is_empty());
    }

    #[test]
    fn exact_set_frees_one_unit() {
        let mut claims = Claims::new();
        let lines = lines(&[("P1", 1000, 3)]);

        promotion(&[("P1", &[FreeItemsRule::new(3, 1)])]).resolve(&lines, &mut claims);

        assert_eq!(claims.claimed("P1"), &[0, 1000, 1000]);
    }

    #[test]
    fn units_outside_a_whole_set_stay_unclaimed() {
        let mut claims = Claims::new();
        let lines = lines(&[("P2", 1200, 3)]);

        promotion(&[("P2", &[FreeItemsRule::new(2, 1)])]).resolve(&lines, &mut claims);

        assert_eq!(claims.claimed("P2"), &[0, 1200]);
        assert_eq!(claims.available(&Line::with_quantity(Product::new("P2", "", 1200), 3)), 1);
    }

    #[test]
    fn later_rules_take_the_remainder() {
        let mut claims = Claims::new();
        let lines = lines(&[("P1", 1000, 7)]);

        promotion(&[("P1", &[FreeItemsRule::new(5, 3), FreeItemsRule::new(2, 1)])])
            .resolve(&lines, &mut claims);

        assert_eq!(claims.count("P1"), 7);
        assert_eq!(free_units(&claims, "P1"), 4);
    }

    #[test]
    fn several_sets_free_several_units() {
        let mut claims = Claims::new();
        let lines = lines(&[("P3", 1500, 15)]);

        promotion(&[("P3", &[FreeItemsRule::new(4, 1)])]).resolve(&lines, &mut claims);

        assert_eq!(claims.count("P3"), 12);
        assert_eq!(free_units(&claims, "P3"), 3);
    }

    #[test]
    fn several_products_resolve_independently() {
        let mut claims = Claims::new();
        let lines = lines(&[("P1", 1500, 3), ("P2", 1200, 3)]);

        promotion(&[
            ("P1", &[FreeItemsRule::new(3, 1)]),
            ("P2", &[FreeItemsRule::new(3, 1)]),
        ])
        .resolve(&lines, &mut claims);

        assert_eq!(claims.count("P1") + claims.count("P2"), 6);
        assert_eq!(free_units(&claims, "P1") + free_units(&claims, "P2"), 2);
    }

    #[test]
    fn zero_set_size_claims_nothing() {
        let mut claims = Claims::new();
        let lines = lines(&[("P1", 1000, 4)]);

        promotion(&[("P1", &[FreeItemsRule::new(0, 1)])]).resolve(&lines, &mut claims);

        assert!(claims.is_empty());
    }

    #[test]
    fn free_count_is_capped_at_the_set() {
        let mut claims = Claims::new();
        let lines = lines(&[("P1", 1000, 2)]);

        promotion(&[("P1", &[FreeItemsRule::new(2, 5)])]).resolve(&lines, &mut claims);

        assert_eq!(claims.claimed("P1"), &[0, 0]);
    }
}
