//! The turn engine: phase state machine and command surface.
//!
//! The only component exposed to external callers. Each command runs to
//! completion synchronously and either mutates state or refuses with a
//! typed error, never both.
//!
//! ## Phase cycle
//!
//! `start -> action -> crisis -> end -> start ...` with two one-way
//! exits (`victory`, `gameover`). The action phase is the only one that
//! waits for commands; `end_turn` drives crisis and end resolution and
//! rolls straight into the next start phase.

use crate::cards::{CardCatalog, CardEffect, CardId, InstanceId, PassiveTrigger};
use crate::crisis::{self, AppliedPenalty, ScheduleTick};

use super::config::EngineConfig;
use super::error::{EraError, PhaseError, PlayError, ShopCommandError};
use super::snapshot::GameSnapshot;
use super::state::{GameState, GameStatus, Phase};

/// The engine: configuration, catalog, and the current game.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    config: EngineConfig,
    catalog: CardCatalog,
    state: GameState,
}

impl TurnEngine {
    /// Create an engine sitting at the title screen.
    #[must_use]
    pub fn new(catalog: CardCatalog, config: EngineConfig) -> Self {
        let state = GameState::title(&config);
        Self {
            config,
            catalog,
            state,
        }
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The card catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Read access to the live state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for tests and debug tooling.
    ///
    /// The presentation layer should go through commands and
    /// [`TurnEngine::snapshot`] instead.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// A render-ready view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.state, &self.catalog, self.config.log_cap)
    }

    // === Game flow ===

    /// Move from the title screen to race selection.
    pub fn enter_race_selection(&mut self) {
        if self.state.status == GameStatus::Title {
            self.state.status = GameStatus::RaceSelection;
        }
    }

    /// Start a new game from a starter deck.
    ///
    /// Instantiates and shuffles the deck, resets every ledger, rolls
    /// the shop and the first crisis preview, then runs the start phase
    /// once, leaving the engine in the action phase of turn 1.
    pub fn start_game(&mut self, starter_deck: &[CardId], race_id: &str) {
        let mut state = GameState::title(&self.config);
        state.status = GameStatus::Playing;
        state.race = Some(race_id.to_string());

        let instances: Vec<_> = starter_deck
            .iter()
            .filter(|id| {
                let known = self.catalog.contains(**id);
                if !known {
                    log::warn!("starter deck references unknown card {id}, skipping");
                }
                known
            })
            .map(|&id| state.alloc.instantiate(id))
            .collect();
        state.deck = crate::deck::DeckCycle::from_instances(instances, &mut state.rng);

        state.crisis = crate::crisis::CrisisSchedule::roll(
            &self.catalog,
            state.era,
            self.config.crisis_cooldown(),
            &mut state.rng,
        );

        state.push_log(format!("A new game begins as the {race_id}."));
        state.push_log(format!(
            "First crisis expected in {} turns.",
            state.crisis.cooldown
        ));

        self.state = state;
        run_start_phase(&self.config, &self.catalog, &mut self.state);
    }

    /// Discard the game and return to the title screen.
    pub fn reset_game(&mut self) {
        self.state = GameState::title(&self.config);
    }

    // === Action-phase commands ===

    /// Play a card from the hand by instance identity.
    pub fn play_card(&mut self, id: InstanceId) -> Result<(), PlayError> {
        let state = &mut self.state;
        if !state.status.is_playing() || state.phase != Phase::Action {
            return Err(PlayError::WrongPhase);
        }

        let card = state
            .deck
            .hand()
            .iter()
            .find(|c| c.instance_id == id)
            .copied()
            .ok_or(PlayError::CardNotFound)?;
        let def = self.catalog.get_unchecked(card.card_id).clone();

        if def.unplayable {
            state.push_log(format!("{} cannot be played.", def.name));
            return Err(PlayError::Unplayable);
        }
        if !state.resources.can_afford(&def.cost) {
            state.push_log(format!("Not enough resources for {} ({}).", def.name, def.cost));
            return Err(PlayError::InsufficientResources);
        }
        if def.card_type.is_deployable() && !state.field.has_slot(def.card_type) {
            state.push_log(format!("No free slot for {}.", def.name));
            return Err(PlayError::FieldFull);
        }

        // All checks passed: the command can no longer fail.
        state.resources.spend(&def.cost);
        let card = state.deck.play_from_hand(id)?;

        if let Some(effect) = def.effect {
            apply_one_shot(&self.catalog, state, &def.name, effect);
        }

        if def.card_type.is_deployable() {
            state.field.deploy(card, def.card_type)?;
            state.push_log(format!("{} deployed.", def.name));
        } else {
            state.deck.discard(card);
            state.push_log(format!("{} played.", def.name));
        }

        if state.stats.is_dead() {
            enter_game_over(state);
        }
        Ok(())
    }

    /// Buy a shop offer; the copy lands in the discard pile.
    pub fn buy_card(&mut self, offer: InstanceId) -> Result<(), ShopCommandError> {
        let state = &mut self.state;
        if !state.status.is_playing() || state.phase != Phase::Action {
            return Err(ShopCommandError::WrongPhase);
        }

        let bought = state.shop.buy(
            offer,
            &self.catalog,
            &mut state.resources,
            &mut state.deck,
            &mut state.alloc,
        )?;
        let name = self.catalog.get_unchecked(bought).name.clone();
        state.push_log(format!("Bought {name} from the shop."));
        Ok(())
    }

    /// Re-roll the shop offers for a production fee.
    pub fn refresh_shop(&mut self) -> Result<(), ShopCommandError> {
        let state = &mut self.state;
        if !state.status.is_playing() || state.phase != Phase::Action {
            return Err(ShopCommandError::WrongPhase);
        }

        state.shop.refresh(
            state.era,
            &self.catalog,
            &mut state.resources,
            &mut state.alloc,
            &mut state.rng,
        )?;
        state.push_log("Shop refreshed.");
        Ok(())
    }

    /// Permanently remove a deck card for a production fee.
    pub fn trash_card(&mut self, id: InstanceId) -> Result<(), ShopCommandError> {
        let state = &mut self.state;
        if !state.status.is_playing() || state.phase != Phase::Action {
            return Err(ShopCommandError::WrongPhase);
        }

        let trashed = state.shop.trash(id, &mut state.resources, &mut state.deck)?;
        let name = self.catalog.get_unchecked(trashed).name.clone();
        state.push_log(format!("{name} removed from the deck."));
        Ok(())
    }

    /// Spend science to advance to the next era.
    ///
    /// Reaching the final era wins the game immediately.
    pub fn advance_era(&mut self) -> Result<(), EraError> {
        let state = &mut self.state;
        if !state.status.is_playing() || state.phase != Phase::Action {
            return Err(EraError::WrongPhase);
        }

        let next = state.era.next().ok_or(EraError::FinalEra)?;
        let cost = self.config.era_costs[state.era.index()];
        if state.resources.science < cost {
            state.push_log(format!(
                "Advancing to the {next} era needs {cost} science."
            ));
            return Err(EraError::InsufficientScience);
        }

        state.resources.science -= cost;
        state.era = next;
        state.push_log(format!("The civilization enters the {next} era!"));

        if next.is_final() {
            state.status = GameStatus::Victory;
            state.push_log("The stars are within reach. Victory!");
        }
        Ok(())
    }

    // === Turn advancement ===

    /// End the action phase: resolve the crisis, settle upkeep, and
    /// begin the next turn.
    pub fn end_turn(&mut self) -> Result<(), PhaseError> {
        if !self.state.status.is_playing() || self.state.phase != Phase::Action {
            return Err(PhaseError::WrongPhase);
        }

        run_crisis_phase(&self.catalog, &mut self.state);
        if !self.state.status.is_playing() {
            return Ok(());
        }

        run_end_phase(&self.config, &self.catalog, &mut self.state);
        if !self.state.status.is_playing() {
            return Ok(());
        }

        run_start_phase(&self.config, &self.catalog, &mut self.state);
        Ok(())
    }

    /// Alias for [`TurnEngine::end_turn`].
    pub fn next_phase(&mut self) -> Result<(), PhaseError> {
        self.end_turn()
    }

    // === Debug aids ===

    /// Grant an equal amount of every resource. Debug aid.
    pub fn grant_resources(&mut self, amount: i64) {
        let state = &mut self.state;
        state.resources.credit(&crate::core::Resources::new(amount, amount, amount));
        state.push_log(format!("[debug] all resources +{amount}"));
    }

    /// Draw extra cards. Debug aid.
    pub fn draw_cards(&mut self, count: usize) {
        let state = &mut self.state;
        let outcome = state.deck.draw(count, &mut state.rng);
        state.push_log(format!("[debug] drew {} cards", outcome.drawn));
    }
}

// === Phase implementations ===

fn run_start_phase(config: &EngineConfig, catalog: &CardCatalog, state: &mut GameState) {
    state.phase = Phase::Start;
    state.push_log(format!("--- Turn {} ---", state.turn));

    // Production is volatile: every turn starts from the base value.
    state.resources.production = config.base_production;

    fire_passives(catalog, state, PassiveTrigger::TurnStart);

    state
        .shop
        .generate(state.era, catalog, &mut state.alloc, &mut state.rng);

    let tick = state.crisis.tick(
        catalog,
        state.era,
        config.crisis_cooldown(),
        &mut state.rng,
    );
    match tick {
        ScheduleTick::Dormant { remaining } => {
            state.push_log(format!("A peaceful turn. Next crisis in {remaining} turns."));
        }
        ScheduleTick::Armed => {
            if let Some(active) = &state.crisis.active {
                state.push_log(format!("Crisis looming: {}!", active.name));
            }
        }
    }

    let bonus = (state.resources.production / 10).max(0) as usize;
    let hand_size = (config.base_hand_size + bonus).min(config.max_hand_size);
    let outcome = state.deck.draw(hand_size, &mut state.rng);
    if outcome.reshuffled {
        state.push_log("Shuffled the discard pile into the draw pile.");
    }
    if outcome.drawn < hand_size {
        state.push_log("No cards left to draw.");
    }

    state.phase = Phase::Action;
}

fn run_crisis_phase(catalog: &CardCatalog, state: &mut GameState) {
    state.phase = Phase::Crisis;

    let Some(active) = state.crisis.active.take() else {
        state.phase = Phase::End;
        return;
    };

    let outcome = crisis::resolve(
        &active,
        catalog,
        &mut state.resources,
        &mut state.stats,
        &mut state.deck,
        &mut state.field,
        &mut state.alloc,
        &mut state.rng,
    );

    if outcome.success {
        state.push_log(format!("Crisis averted: {}.", active.name));
        if let Some((resource, amount)) = outcome.consumed {
            state.push_log(format!("Spent {amount} {resource} to resolve it."));
        }
        if let Some(reward) = outcome.reward {
            state.push_log(format!("Reward: +{} {}.", reward.amount, reward.resource));
        }
    } else {
        state.push_log(format!("Crisis struck: {}!", active.name));
        match outcome.penalty {
            Some(AppliedPenalty::Damage { amount }) => {
                state.push_log(format!(
                    "Took {amount} damage ({}/{}).",
                    state.stats.health, state.stats.max_health
                ));
            }
            Some(AppliedPenalty::FoodLost { amount }) => {
                state.push_log(format!("Lost {amount} food."));
            }
            Some(AppliedPenalty::StructureDestroyed { card: Some(card) }) => {
                let name = &catalog.get_unchecked(card).name;
                state.push_log(format!("{name} was destroyed."));
            }
            Some(AppliedPenalty::StructureDestroyed { card: None }) => {
                state.push_log("No structure was standing to destroy.");
            }
            Some(AppliedPenalty::CursesAdded { card, count }) => {
                let name = &catalog.get_unchecked(card).name;
                state.push_log(format!("{count} {name} cards cursed the deck."));
            }
            None => {}
        }
    }

    if outcome.fatal {
        enter_game_over(state);
        return;
    }
    state.phase = Phase::End;
}

fn run_end_phase(config: &EngineConfig, catalog: &CardCatalog, state: &mut GameState) {
    state.phase = Phase::End;

    fire_passives(catalog, state, PassiveTrigger::TurnEnd);

    // Curses bite while held: each unplayable damage card in hand hurts.
    let curse_damage: Vec<(String, i64)> = state
        .deck
        .hand()
        .iter()
        .filter_map(|c| catalog.get(c.card_id))
        .filter(|def| def.unplayable)
        .filter_map(|def| match def.effect {
            Some(CardEffect::Damage { amount }) => Some((def.name.clone(), amount)),
            _ => None,
        })
        .collect();
    for (name, amount) in curse_damage {
        let fatal = state.stats.apply_damage(amount);
        state.push_log(format!("{name} in hand inflicts {amount} damage."));
        if fatal {
            enter_game_over(state);
            return;
        }
    }

    let upkeep = state.field.total_upkeep(catalog);
    state.resources.food -= upkeep;
    if state.resources.food < 0 {
        let deficit = -state.resources.food;
        let damage = deficit * config.starvation_damage;
        state.resources.food = 0;
        let fatal = state.stats.apply_damage(damage);
        state.push_log(format!(
            "Starvation! Short {deficit} food, took {damage} damage."
        ));
        if fatal {
            enter_game_over(state);
            return;
        }
    } else if upkeep > 0 {
        state.push_log(format!("Upkeep consumed {upkeep} food."));
    }

    state.deck.discard_hand();
    state.turn += 1;
    state.phase = Phase::Start;
}

/// Fire resource passives of deployed cards for the given trigger.
fn fire_passives(catalog: &CardCatalog, state: &mut GameState, trigger: PassiveTrigger) {
    let firing: Vec<(String, CardEffect)> = state
        .field
        .structures()
        .iter()
        .chain(state.field.units().iter())
        .filter_map(|c| catalog.get(c.card_id))
        .filter_map(|def| def.passive.map(|p| (def.name.clone(), p)))
        .filter(|(_, p)| p.trigger == trigger)
        .map(|(name, p)| (name, p.effect))
        .collect();

    for (name, effect) in firing {
        if let CardEffect::GainResource { resource, amount } = effect {
            state.resources.credit_kind(resource, amount);
            state.push_log(format!("{name}: +{amount} {resource}."));
        }
    }
}

/// Interpret a one-shot card effect.
fn apply_one_shot(catalog: &CardCatalog, state: &mut GameState, card_name: &str, effect: CardEffect) {
    match effect {
        CardEffect::GainResource { resource, amount } => {
            state.resources.credit_kind(resource, amount);
        }
        CardEffect::Damage { amount } => {
            state.stats.apply_damage(amount);
        }
        CardEffect::Heal { amount } => {
            state.stats.heal(amount);
        }
        CardEffect::TransformCard { from, to } => {
            match state.deck.transform_first(from, to, catalog) {
                Some(_) => {
                    let from_name = &catalog.get_unchecked(from).name;
                    let to_name = &catalog.get_unchecked(to).name;
                    state.push_log(format!("{card_name}: {from_name} became {to_name}."));
                }
                None => {
                    let from_name = &catalog.get_unchecked(from).name;
                    state.push_log(format!("{card_name}: no {from_name} left to transform."));
                }
            }
        }
    }
}

fn enter_game_over(state: &mut GameState) {
    state.status = GameStatus::GameOver;
    state.push_log("The civilization has fallen.");
}
