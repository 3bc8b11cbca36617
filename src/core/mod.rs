//! Core engine types: resources, player stats, eras, RNG.
//!
//! These are the leaf building blocks every other module depends on.

pub mod era;
pub mod resources;
pub mod rng;

pub use era::Era;
pub use resources::{PlayerStats, ResourceCost, ResourceKind, Resources};
pub use rng::GameRng;
