//! Bundled game content: the base catalog and playable races.

pub mod base;

pub use base::{base_catalog, ids, race, races, RaceDefinition};
