//! Read-only state snapshots for a presentation layer.
//!
//! The snapshot is the engine's entire query surface: a serializable
//! value the UI can render without touching live state.

use serde::Serialize;

use crate::cards::{CardCatalog, CardInstance, CardType, InstanceId, StatBlock};
use crate::core::{Era, PlayerStats, ResourceCost, Resources};
use crate::crisis::Crisis;

use super::state::{GameState, Phase, GameStatus};

/// One card as the UI sees it: instance identity plus resolved template data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardView {
    pub instance_id: InstanceId,
    pub name: String,
    pub card_type: CardType,
    pub cost: ResourceCost,
    pub stats: Option<StatBlock>,
    pub unplayable: bool,
}

impl CardView {
    fn resolve(card: &CardInstance, catalog: &CardCatalog) -> Self {
        let def = catalog.get_unchecked(card.card_id);
        Self {
            instance_id: card.instance_id,
            name: def.name.clone(),
            card_type: def.card_type,
            cost: def.cost,
            stats: def.stats,
            unplayable: def.unplayable,
        }
    }
}

/// A complete, render-ready view of the game.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub phase: Phase,
    pub era: Era,
    pub turn: u32,
    pub resources: Resources,
    pub stats: PlayerStats,
    pub race: Option<String>,
    pub draw_pile_size: usize,
    pub discard_pile_size: usize,
    pub hand: Vec<CardView>,
    pub structures: Vec<CardView>,
    pub units: Vec<CardView>,
    pub shop: Vec<CardView>,
    pub active_crisis: Option<Crisis>,
    pub preview_crisis: Option<Crisis>,
    pub crisis_cooldown: i64,
    pub log: Vec<String>,
}

impl GameSnapshot {
    /// Capture the current state.
    #[must_use]
    pub fn capture(state: &GameState, catalog: &CardCatalog, log_tail: usize) -> Self {
        let view = |cards: &[CardInstance]| -> Vec<CardView> {
            cards.iter().map(|c| CardView::resolve(c, catalog)).collect()
        };

        Self {
            status: state.status,
            phase: state.phase,
            era: state.era,
            turn: state.turn,
            resources: state.resources,
            stats: state.stats,
            race: state.race.clone(),
            draw_pile_size: state.deck.draw_pile_len(),
            discard_pile_size: state.deck.discard_pile_len(),
            hand: view(state.deck.hand()),
            structures: view(state.field.structures()),
            units: view(state.field.units()),
            shop: view(state.shop.offers()),
            active_crisis: state.crisis.active.clone(),
            preview_crisis: state.crisis.preview.clone(),
            crisis_cooldown: state.crisis.cooldown,
            log: state.log_tail(log_tail),
        }
    }
}
