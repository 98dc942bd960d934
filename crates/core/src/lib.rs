//! Checkout
//!
//! Basket pricing engine: accumulates product lines in a concurrency-safe basket and resolves
//! an ordered list of promotions against it to produce a discounted total.

pub mod basket;
pub mod pricing;
pub mod products;
pub mod promotions;
pub mod validation;

pub mod prelude;
