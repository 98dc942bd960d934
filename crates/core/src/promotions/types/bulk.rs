//! Bulk Promotion
//!
//! Buying at least `buy` units of a product moves every still-unclaimed unit of it to a
//! lower unit price. The threshold only qualifies the line: once met, all available units are
//! claimed, not just whole multiples of the threshold. Rules are tried in their given order
//! and the first qualifying rule takes the whole remaining quantity.

use tracing::debug;

use crate::{
    basket::Lines,
    products::ProductCode,
    promotions::{claims::Claims, offers::Offers},
};

/// A single bulk pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkRule {
    /// Minimum number of available units required.
    pub buy: u32,

    /// Unit price, in minor units, once the threshold is met.
    pub price: i64,
}

impl BulkRule {
    /// Create a new bulk rule.
    pub const fn new(buy: u32, price: i64) -> Self {
        Self { buy, price }
    }
}

/// Bulk pricing promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkPromotion {
    offers: Offers<BulkRule>,
}

impl BulkPromotion {
    /// Create a new bulk promotion.
    pub fn new(offers: Offers<BulkRule>) -> Self {
        Self { offers }
    }

    /// Return the offers.
    pub fn offers(&self) -> &Offers<BulkRule> {
        &self.offers
    }

    /// Claim the units of each targeted line that qualify for a bulk price.
    pub fn resolve(&self, lines: &Lines, claims: &mut Claims) {
        for (code, rules) in self.offers.iter() {
            let Some(line) = lines.get(code) else {
                continue;
            };

            debug!(product = %code, quantity = line.quantity(), "bulk offer matches basket line");

            for rule in rules {
                let available = claims.available(line);

                if available < rule.buy {
                    continue;
                }

                debug!(
                    product = %code,
                    buy = rule.buy,
                    price = rule.price,
                    units = available,
                    "bulk rule claimed units"
                );

                claims.claim(code, rule.price, available);
            }
        }
    }
}

impl FromIterator<(ProductCode, Vec<BulkRule>)> for BulkPromotion {
    fn from_iter<I: IntoIterator<Item = (ProductCode, Vec<BulkRule>)>>(iter: I) -> Self {
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

    fn promotion(offers: &[(&str, &[BulkRule])]) -> BulkPromotion {
        offers
            .iter()
            .map(|(code, rules)| (ProductCode::from(*code), rules.to_vec()))
            .collect()
    }

    #[test]
    fn empty_basket_claims_nothing() {
        let mut claims = Claims::new();

        promotion(&[("P2", &[BulkRule::new(2, 1000)])]).resolve(&FxHashMap::default(), &mut claims);

        assert!(claims.is_empty());
    }

    #[test]
    fn untargeted_products_are_not_claimed() {
        let mut claims = Claims::new();
        let lines = lines(&[("P1", 1000, 1), ("P2", 1200, 1), ("P3", 1500, 1)]);

        promotion(&[("P2", &[BulkRule::new(2, 1000)])]).resolve(&lines, &mut claims);

        assert!(claims.is_empty());
    }

    #[test]
    fn exact_threshold_claims_every_unit() {
        let mut claims = Claims::new();
        let lines = lines(&[("P1", 1000, 3)]);

        promotion(&[("P1", &[BulkRule::new(3, 850)])]).resolve(&lines, &mut claims);

        assert_eq!(claims.claimed("P1"), &[850, 850, 850]);
    }

    #[test]
    fn spare_units_above_threshold_are_also_claimed() {
        let mut claims = Claims::new();
        let lines = lines(&[("P3", 1500, 15)]);

        promotion(&[("P3", &[BulkRule::new(4, 1100)])]).resolve(&lines, &mut claims);

        assert_eq!(claims.count("P3"), 15);
        assert_eq!(claims.claimed_total("P3"), 1100 * 15);
    }

    #[test]
    fn first_qualifying_rule_starves_later_rules() {
        let mut claims = Claims::new();
        let lines = lines(&[("P1", 1000, 7)]);

        promotion(&[("P1", &[BulkRule::new(5, 650), BulkRule::new(2, 850)])])
            .resolve(&lines, &mut claims);

        assert_eq!(claims.count("P1"), 7);
        assert!(claims.claimed("P1").iter().all(|price| *price == 650));
    }

    #[test]
    fn unmet_rule_falls_through_to_next_rule() {
        let mut claims = Claims::new();
        let lines = lines(&[("P1", 1000, 3)]);

        promotion(&[("P1", &[BulkRule::new(5, 650), BulkRule::new(2, 850)])])
            .resolve(&lines, &mut claims);

        assert_eq!(claims.claimed("P1"), &[850, 850, 850]);
    }

    #[test]
    fn units_claimed_earlier_are_unavailable() {
        let mut claims = Claims::new();
        let lines = lines(&[("P1", 1000, 4)]);

        claims.claim(&ProductCode::from("P1"), 0, 2);

        promotion(&[("P1", &[BulkRule::new(3, 900)])]).resolve(&lines, &mut claims);

        assert_eq!(claims.claimed("P1"), &[0, 0]);
    }

    #[test]
    fn zero_threshold_claims_every_unit() {
        let mut claims = Claims::new();
        let lines = lines(&[("P1", 1000, 2)]);

        promotion(&[("P1", &[BulkRule::new(0, 500)])]).resolve(&lines, &mut claims);

        assert_eq!(claims.claimed("P1"), &[500, 500]);
        assert_eq!(claims.claimed_total("P1"), 1000);
    }

    #[test]
    fn several_products_resolve_independently() {
        let mut claims = Claims::new();
        let lines = lines(&[("P1", 1500, 3), ("P2", 1200, 3)]);

        promotion(&[
            ("P1", &[BulkRule::new(3, 1300)]),
            ("P2", &[BulkRule::new(3, 1000)]),
        ])
        .resolve(&lines, &mut claims);

        assert_eq!(claims.count("P1") + claims.count("P2"), 6);
        assert_eq!(claims.claimed_total("P1"), 3900);
        assert_eq!(claims.claimed_total("P2"), 3000);
    }
}
