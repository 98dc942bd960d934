//! Promotion Types

pub mod bulk;
pub mod free_items;

pub use bulk::{BulkPromotion, BulkRule};
pub use free_items::{FreeItemsPromotion, FreeItemsRule};
