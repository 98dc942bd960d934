//! Checkout prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketId, Line},
    pricing::to_display,
    products::{Product, ProductCode},
    promotions::{
        Promotion, PromotionKind,
        claims::Claims,
        types::{BulkPromotion, BulkRule, FreeItemsPromotion, FreeItemsRule},
    },
    validation::{FieldViolation, ValidationError},
};
