//! Checkout Domain Concerns

pub mod checkout;
