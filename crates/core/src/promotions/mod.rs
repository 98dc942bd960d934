//! Promotions

use std::fmt::{Display, Formatter, Result as FmtResult};

use tracing::debug;

use crate::{basket::Lines, products::ProductCode, promotions::claims::Claims};

pub mod claims;
pub mod offers;
pub mod types;

pub use types::{BulkPromotion, BulkRule, FreeItemsPromotion, FreeItemsRule};

/// Promotion kind, as named in promotion configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionKind {
    /// Bulk pricing
    Bulk,

    /// Buy X get Y free
    FreeItems,
}

impl PromotionKind {
    /// Return the configuration code for this kind.
    pub const fn code(self) -> &'static str {
        match self {
            PromotionKind::Bulk => "BULK",
            PromotionKind::FreeItems => "FREE_ITEMS",
        }
    }

    /// Look up a kind by its configuration code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BULK" => Some(PromotionKind::Bulk),
            "FREE_ITEMS" => Some(PromotionKind::FreeItems),
            _ => None,
        }
    }
}

impl Display for PromotionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

/// Promotion enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Promotion {
    /// Bulk pricing promotion
    Bulk(BulkPromotion),

    /// Free items promotion
    FreeItems(FreeItemsPromotion),
}

impl Promotion {
    /// Return the promotion kind.
    pub fn kind(&self) -> PromotionKind {
        match self {
            Promotion::Bulk(_) => PromotionKind::Bulk,
            Promotion::FreeItems(_) => PromotionKind::FreeItems,
        }
    }

    /// Return the product codes this promotion has rules for, sorted.
    pub fn product_codes(&self) -> Vec<&ProductCode> {
        match self {
            Promotion::Bulk(bulk) => bulk.offers().product_codes(),
            Promotion::FreeItems(free_items) => free_items.offers().product_codes(),
        }
    }

    /// Record in `claims` which units of `lines` this promotion discounts, and at what price.
    ///
    /// Only units not already present in `claims` are considered. Lines without rules and rules
    /// that cannot be met claim nothing; resolution never fails.
    pub fn resolve(&self, lines: &Lines, claims: &mut Claims) {
        debug!(kind = %self.kind(), "resolving promotion");

        match self {
            Promotion::Bulk(bulk) => bulk.resolve(lines, claims),
            Promotion::FreeItems(free_items) => free_items.resolve(lines, claims),
        }
    }
}

impl From<BulkPromotion> for Promotion {
    fn from(promotion: BulkPromotion) -> Self {
        Promotion::Bulk(promotion)
    }
}

impl From<FreeItemsPromotion> for Promotion {
    fn from(promotion: FreeItemsPromotion) -> Self {
        Promotion::FreeItems(promotion)
    }
}

#[cfg(test)]
mod tests {
    use crate::{basket::Line, products::Product};

    use super::*;

    #[test]
    fn kind_codes_round_trip() {
        for kind in [PromotionKind::Bulk, PromotionKind::FreeItems] {
            assert_eq!(PromotionKind::from_code(kind.code()), Some(kind));
        }

        assert_eq!(PromotionKind::from_code("MYSTERY"), None);
    }

    #[test]
    fn kind_delegates_to_variant() {
        let bulk = Promotion::from(
            [(ProductCode::from("P1"), vec![BulkRule::new(3, 820)])]
                .into_iter()
                .collect::<BulkPromotion>(),
        );

        let free_items = Promotion::from(
            [(ProductCode::from("P1"), vec![FreeItemsRule::new(2, 1)])]
                .into_iter()
                .collect::<FreeItemsPromotion>(),
        );

        assert_eq!(bulk.kind(), PromotionKind::Bulk);
        assert_eq!(free_items.kind(), PromotionKind::FreeItems);
    }

    #[test]
    fn resolve_delegates_to_variant() {
        let lines: Lines = [(
            ProductCode::from("P1"),
            Line::with_quantity(Product::new("P1", "Product 1", 1000), 3),
        )]
        .into_iter()
        .collect();

        let promotion = Promotion::from(
            [(ProductCode::from("P1"), vec![BulkRule::new(3, 820)])]
                .into_iter()
                .collect::<BulkPromotion>(),
        );

        let mut claims = Claims::new();

        promotion.resolve(&lines, &mut claims);

        assert_eq!(claims.claimed("P1"), &[820, 820, 820]);
    }

    #[test]
    fn product_codes_lists_targeted_products() {
        let promotion = Promotion::from(
            [
                (ProductCode::from("P2"), vec![FreeItemsRule::new(2, 1)]),
                (ProductCode::from("P1"), vec![FreeItemsRule::new(3, 1)]),
            ]
            .into_iter()
            .collect::<FreeItemsPromotion>(),
        );

        let codes: Vec<&str> = promotion
            .product_codes()
            .into_iter()
            .map(ProductCode::as_str)
            .collect();

        assert_eq!(codes, ["P1", "P2"]);
    }
}
