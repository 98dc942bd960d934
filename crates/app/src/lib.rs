//! Checkout application: catalog loading, basket storage and the checkout service.

pub mod catalog;
pub mod config;
pub mod context;
pub mod datasource;
pub mod domain;
pub mod observability;
