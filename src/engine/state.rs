//! The aggregate game state.
//!
//! One `GameState` per game, created at `start_game`, mutated in place
//! by every command, and replaced wholesale on reset. The event log is
//! an `im::Vector` so snapshot clones are cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::InstanceAllocator;
use crate::core::{Era, GameRng, PlayerStats, Resources};
use crate::crisis::CrisisSchedule;
use crate::deck::DeckCycle;
use crate::field::FieldRegistry;
use crate::shop::ShopGenerator;

use super::config::EngineConfig;

/// Phase within one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Start,
    Action,
    Crisis,
    End,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Start => "start",
            Phase::Action => "action",
            Phase::Crisis => "crisis",
            Phase::End => "end",
        };
        write!(f, "{name}")
    }
}

/// Overall game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Title,
    RaceSelection,
    Playing,
    GameOver,
    Victory,
}

impl GameStatus {
    /// True while commands other than reset are accepted.
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    /// True for the one-way exits.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Victory)
    }
}

/// Everything that changes over the course of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub resources: Resources,
    pub stats: PlayerStats,
    pub deck: DeckCycle,
    pub field: FieldRegistry,
    pub shop: ShopGenerator,
    pub crisis: CrisisSchedule,
    pub era: Era,
    pub turn: u32,
    pub phase: Phase,
    pub status: GameStatus,
    pub race: Option<String>,
    pub rng: GameRng,
    pub alloc: InstanceAllocator,
    log: Vector<String>,
    log_cap: usize,
}

impl GameState {
    /// A title-screen state: no deck, no field, nothing running.
    #[must_use]
    pub fn title(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Self {
            resources: Resources::new(config.starting_food, 0, config.starting_science),
            stats: PlayerStats::new(config.max_health),
            deck: DeckCycle::new(),
            field: FieldRegistry::new(config.structure_slots, config.unit_slots),
            shop: ShopGenerator::new(
                config.shop_slots,
                config.previous_era_shop_chance,
                config.shop_refresh_cost,
                config.shop_trash_cost,
            ),
            crisis: CrisisSchedule::default(),
            era: Era::Primitive,
            turn: 1,
            phase: Phase::Start,
            status: GameStatus::Title,
            race: None,
            rng,
            alloc: InstanceAllocator::new(),
            log: Vector::new(),
            log_cap: config.log_cap,
        }
    }

    /// Append an event line, dropping the oldest past the cap.
    pub fn push_log(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("{message}");
        self.log.push_back(message);
        while self.log.len() > self.log_cap {
            self.log.pop_front();
        }
    }

    /// The full event log, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<String> {
        &self.log
    }

    /// The most recent `count` log lines, oldest first.
    #[must_use]
    pub fn log_tail(&self, count: usize) -> Vec<String> {
        let skip = self.log.len().saturating_sub(count);
        self.log.iter().skip(skip).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_state() {
        let config = EngineConfig::seeded(42);
        let state = GameState::title(&config);

        assert_eq!(state.status, GameStatus::Title);
        assert_eq!(state.era, Era::Primitive);
        assert_eq!(state.turn, 1);
        assert_eq!(state.resources.food, 10);
        assert_eq!(state.stats.health, 50);
        assert_eq!(state.deck.total_len(), 0);
        assert!(state.log().is_empty());
    }

    #[test]
    fn test_log_cap_drops_oldest() {
        let mut config = EngineConfig::seeded(42);
        config.log_cap = 3;
        let mut state = GameState::title(&config);

        for i in 0..5 {
            state.push_log(format!("event {i}"));
        }

        assert_eq!(state.log().len(), 3);
        assert_eq!(state.log_tail(10), vec!["event 2", "event 3", "event 4"]);
    }

    #[test]
    fn test_log_tail_limits() {
        let config = EngineConfig::seeded(42);
        let mut state = GameState::title(&config);
        state.push_log("a");
        state.push_log("b");

        assert_eq!(state.log_tail(1), vec!["b"]);
        assert_eq!(state.log_tail(5), vec!["a", "b"]);
    }

    #[test]
    fn test_status_predicates() {
        assert!(GameStatus::Playing.is_playing());
        assert!(!GameStatus::Title.is_playing());
        assert!(GameStatus::GameOver.is_terminal());
        assert!(GameStatus::Victory.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
    }
}
