//! The turn engine: configuration, state, commands, snapshots.

pub mod config;
pub mod error;
pub mod snapshot;
pub mod state;
pub mod turn;

pub use config::EngineConfig;
pub use error::{EraError, PhaseError, PlayError, ShopCommandError};
pub use snapshot::{CardView, GameSnapshot};
pub use state::{GameState, GameStatus, Phase};
pub use turn::TurnEngine;
