//! The shop: rotating card offers, purchases, refreshes, trashing.

pub mod generator;

pub use generator::{ShopError, ShopGenerator};
