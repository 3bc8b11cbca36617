//! Card system: templates, effects, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: identifier for card templates
//! - `CardDefinition`: static template data (cost, stats, effect, passive)
//! - `CardEffect`/`Passive`: effects as enumerable data
//! - `CardInstance`/`InstanceId`: runtime copies with unique identity
//! - `CardCatalog`: template lookup and per-era shop pools

pub mod catalog;
pub mod definition;
pub mod effect;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId, CardType, StatBlock};
pub use effect::{CardEffect, Passive, PassiveTrigger};
pub use instance::{CardInstance, InstanceAllocator, InstanceId};
