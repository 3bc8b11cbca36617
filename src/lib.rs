//! # civdeck
//!
//! A deterministic, turn-based civilization deck-building engine.
//!
//! Players spend accumulated resources to play cards from a hand, build
//! a persistent field of structures and units, survive periodic crises,
//! and advance through six technological eras until victory or collapse.
//!
//! ## Design Principles
//!
//! 1. **Synchronous commands**: every command runs to completion and
//!    either mutates state or refuses with a typed error - never both.
//!
//! 2. **Deterministic by seed**: all randomness flows through one
//!    seedable RNG, so a seed plus a command sequence reproduces a game.
//!
//! 3. **Effects as data**: card abilities are a small tagged enum
//!    interpreted by one dispatcher, keeping the catalog serializable.
//!
//! ## Modules
//!
//! - `core`: resources, player stats, eras, RNG
//! - `cards`: templates, effects, instances, the catalog
//! - `deck`: draw pile / hand / discard pile cycling
//! - `field`: deployed structures and units
//! - `shop`: card acquisition economy
//! - `crisis`: crisis scheduling and resolution
//! - `engine`: the turn-phase state machine and command surface
//! - `content`: the base card/crisis/race set
//!
//! ## Example
//!
//! ```
//! use civdeck::content;
//! use civdeck::engine::{EngineConfig, TurnEngine};
//!
//! let mut engine = TurnEngine::new(content::base_catalog(), EngineConfig::seeded(42));
//!
//! let race = content::race("human").unwrap();
//! engine.start_game(&race.starter_deck, race.id);
//!
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.hand.len(), 5);
//! ```

pub mod cards;
pub mod content;
pub mod core;
pub mod crisis;
pub mod deck;
pub mod engine;
pub mod field;
pub mod shop;

// Re-export commonly used types
pub use crate::core::{Era, GameRng, PlayerStats, ResourceCost, ResourceKind, Resources};

pub use crate::cards::{
    CardCatalog, CardDefinition, CardEffect, CardId, CardInstance, CardType, InstanceAllocator,
    InstanceId, Passive, PassiveTrigger, StatBlock,
};

pub use crate::deck::{DeckCycle, DeckError, DrawOutcome};

pub use crate::field::{FieldError, FieldRegistry};

pub use crate::shop::{ShopError, ShopGenerator};

pub use crate::crisis::{
    Crisis, CrisisId, CrisisOutcome, CrisisPenalty, CrisisRequirement, CrisisReward,
    CrisisSchedule,
};

pub use crate::engine::{
    EngineConfig, EraError, GameSnapshot, GameState, GameStatus, Phase, PhaseError, PlayError,
    ShopCommandError, TurnEngine,
};
