//! Crisis scheduling and resolution.
//!
//! ## Scheduling
//!
//! Crises fire on a cooldown of 2-5 turns. The next crisis is generated
//! one cycle ahead (the preview) so it can be shown to the player before
//! it triggers. Each start phase ticks the schedule: dormant turns count
//! the cooldown down; at zero the preview becomes the active crisis, a
//! new preview is rolled, and the cooldown resets.
//!
//! ## Resolution
//!
//! The active crisis is evaluated exactly once, between the action and
//! end phases. Resolution is deterministic given the current state: the
//! only randomness is the draw-pile reshuffle after curse injection.

use serde::{Deserialize, Serialize};

use super::definition::{Crisis, CrisisPenalty, CrisisRequirement, CrisisReward};
use crate::cards::{CardCatalog, CardId, CardType, InstanceAllocator};
use crate::core::{Era, GameRng, PlayerStats, ResourceKind, Resources};
use crate::deck::DeckCycle;
use crate::field::FieldRegistry;

/// What a schedule tick did during the start phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleTick {
    /// No crisis this turn; `remaining` turns until the next one.
    Dormant { remaining: i64 },
    /// The preview became the active crisis for this turn.
    Armed,
}

/// Cooldown, active crisis, and the announced preview.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CrisisSchedule {
    pub active: Option<Crisis>,
    pub preview: Option<Crisis>,
    pub cooldown: i64,
}

impl CrisisSchedule {
    /// Roll a fresh schedule at game start.
    ///
    /// The preview is generated immediately so the first crisis is
    /// always announced before it arms.
    #[must_use]
    pub fn roll(
        catalog: &CardCatalog,
        era: Era,
        cooldown: std::ops::RangeInclusive<i64>,
        rng: &mut GameRng,
    ) -> Self {
        Self {
            active: None,
            preview: generate(catalog, era, rng),
            cooldown: rng.gen_range(cooldown),
        }
    }

    /// Advance the schedule by one turn (called each start phase).
    pub fn tick(
        &mut self,
        catalog: &CardCatalog,
        era: Era,
        cooldown: std::ops::RangeInclusive<i64>,
        rng: &mut GameRng,
    ) -> ScheduleTick {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            self.active = None;
            return ScheduleTick::Dormant {
                remaining: self.cooldown,
            };
        }

        self.active = self.preview.take().or_else(|| generate(catalog, era, rng));
        self.preview = generate(catalog, era, rng);
        self.cooldown = rng.gen_range(cooldown);
        ScheduleTick::Armed
    }
}

/// Pick a crisis template and scale it for the era.
///
/// Returns `None` when the catalog defines no crises.
#[must_use]
pub fn generate(catalog: &CardCatalog, era: Era, rng: &mut GameRng) -> Option<Crisis> {
    rng.choose(catalog.crises())
        .map(|template| template.scaled_for(era))
}

/// The penalty a failed crisis actually inflicted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppliedPenalty {
    Damage { amount: i64 },
    FoodLost { amount: i64 },
    /// `None` when there was no structure to destroy.
    StructureDestroyed { card: Option<CardId> },
    CursesAdded { card: CardId, count: usize },
}

/// Facts about one crisis resolution, for the engine to log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrisisOutcome {
    pub success: bool,
    /// Resource consumed by a successful resource check.
    pub consumed: Option<(ResourceKind, i64)>,
    pub penalty: Option<AppliedPenalty>,
    pub reward: Option<CrisisReward>,
    /// Whether the penalty killed the player.
    pub fatal: bool,
}

/// Evaluate the crisis and apply exactly one penalty or the reward.
pub fn resolve(
    crisis: &Crisis,
    catalog: &CardCatalog,
    resources: &mut Resources,
    stats: &mut PlayerStats,
    deck: &mut DeckCycle,
    field: &mut FieldRegistry,
    alloc: &mut InstanceAllocator,
    rng: &mut GameRng,
) -> CrisisOutcome {
    let mut outcome = CrisisOutcome {
        success: false,
        consumed: None,
        penalty: None,
        reward: None,
        fatal: false,
    };

    match crisis.requirement {
        CrisisRequirement::Combat { attack } => {
            outcome.success = field.total_attack(catalog) >= attack;
        }
        CrisisRequirement::ResourceCheck { resource, amount } => {
            if resources.get(resource) >= amount {
                resources.credit_kind(resource, -amount);
                outcome.consumed = Some((resource, amount));
                outcome.success = true;
            }
        }
        CrisisRequirement::TechCount { count } => {
            let techs = deck.count_matching(|id| {
                catalog
                    .get(id)
                    .is_some_and(|def| def.card_type == CardType::Tech)
            });
            outcome.success = techs as i64 >= count;
        }
    }

    if outcome.success {
        if let Some(reward) = crisis.reward {
            resources.credit_kind(reward.resource, reward.amount);
            outcome.reward = Some(reward);
        }
        return outcome;
    }

    outcome.penalty = Some(match crisis.penalty {
        CrisisPenalty::DamageHp { amount } => {
            outcome.fatal = stats.apply_damage(amount);
            AppliedPenalty::Damage { amount }
        }
        CrisisPenalty::LoseResource { percent } => {
            let lost = resources.food * percent / 100;
            resources.credit_kind(ResourceKind::Food, -lost);
            AppliedPenalty::FoodLost { amount: lost }
        }
        CrisisPenalty::DestroyStructure => AppliedPenalty::StructureDestroyed {
            card: field.destroy_newest_structure().map(|c| c.card_id),
        },
        CrisisPenalty::AddCurseCard { card, count } => {
            deck.inject_curse(card, count, alloc, rng);
            AppliedPenalty::CursesAdded { card, count }
        }
    });

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, InstanceAllocator, StatBlock};
    use crate::crisis::CrisisId;

    const WARRIOR: CardId = CardId::new(1);
    const SCROLL: CardId = CardId::new(2);
    const HUT: CardId = CardId::new(3);
    const HUNGER: CardId = CardId::new(4);

    fn test_catalog() -> CardCatalog {
        let mut catalog = CardCatalog::new();
        catalog.register(
            CardDefinition::new(WARRIOR, "Warrior", CardType::Unit, Era::Primitive)
                .with_stats(StatBlock::new(3, 5, 1)),
        );
        catalog.register(CardDefinition::new(
            SCROLL,
            "Scroll",
            CardType::Tech,
            Era::Primitive,
        ));
        catalog.register(CardDefinition::new(
            HUT,
            "Hut",
            CardType::Structure,
            Era::Primitive,
        ));
        catalog.register(
            CardDefinition::new(HUNGER, "Hunger", CardType::Crisis, Era::Primitive).unplayable(),
        );
        catalog.register_crisis(Crisis::new(
            CrisisId::new(1),
            "Raid",
            "",
            CrisisRequirement::Combat { attack: 3 },
            CrisisPenalty::DamageHp { amount: 10 },
        ));
        catalog
    }

    struct World {
        catalog: CardCatalog,
        resources: Resources,
        stats: PlayerStats,
        deck: DeckCycle,
        field: FieldRegistry,
        alloc: InstanceAllocator,
        rng: GameRng,
    }

    impl World {
        fn new() -> Self {
            Self {
                catalog: test_catalog(),
                resources: Resources::new(10, 3, 0),
                stats: PlayerStats::new(50),
                deck: DeckCycle::new(),
                field: FieldRegistry::new(5, 5),
                alloc: InstanceAllocator::new(),
                rng: GameRng::new(42),
            }
        }

        fn resolve(&mut self, crisis: &Crisis) -> CrisisOutcome {
            resolve(
                crisis,
                &self.catalog,
                &mut self.resources,
                &mut self.stats,
                &mut self.deck,
                &mut self.field,
                &mut self.alloc,
                &mut self.rng,
            )
        }
    }

    fn combat_crisis(attack: i64, damage: i64) -> Crisis {
        Crisis::new(
            CrisisId::new(10),
            "Raid",
            "",
            CrisisRequirement::Combat { attack },
            CrisisPenalty::DamageHp { amount: damage },
        )
    }

    #[test]
    fn test_combat_failure_damages() {
        let mut world = World::new();
        let crisis = combat_crisis(3, 10);

        let outcome = world.resolve(&crisis);

        assert!(!outcome.success);
        assert_eq!(outcome.penalty, Some(AppliedPenalty::Damage { amount: 10 }));
        assert!(!outcome.fatal);
        assert_eq!(world.stats.health, 40);
    }

    #[test]
    fn test_combat_success_consumes_nothing() {
        let mut world = World::new();
        let warrior = world.alloc.instantiate(WARRIOR);
        world.field.deploy(warrior, CardType::Unit).unwrap();

        let crisis = combat_crisis(3, 10).with_reward(ResourceKind::Food, 5);
        let outcome = world.resolve(&crisis);

        assert!(outcome.success);
        assert_eq!(outcome.consumed, None);
        assert_eq!(world.stats.health, 50);
        // Reward granted.
        assert_eq!(world.resources.food, 15);
    }

    #[test]
    fn test_resource_check_consumes_on_success_only() {
        let mut world = World::new();
        let crisis = Crisis::new(
            CrisisId::new(11),
            "Famine",
            "",
            CrisisRequirement::ResourceCheck {
                resource: ResourceKind::Food,
                amount: 5,
            },
            CrisisPenalty::DamageHp { amount: 8 },
        );

        let outcome = world.resolve(&crisis);
        assert!(outcome.success);
        assert_eq!(outcome.consumed, Some((ResourceKind::Food, 5)));
        assert_eq!(world.resources.food, 5);

        // Below the requirement now scaled up: failure consumes nothing.
        world.resources.food = 2;
        let outcome = world.resolve(&crisis);
        assert!(!outcome.success);
        assert_eq!(world.resources.food, 2);
        assert_eq!(world.stats.health, 42);
    }

    #[test]
    fn test_tech_count_checks_whole_deck() {
        let mut world = World::new();
        let crisis = Crisis::new(
            CrisisId::new(12),
            "Plague",
            "",
            CrisisRequirement::TechCount { count: 2 },
            CrisisPenalty::DamageHp { amount: 15 },
        );

        // One tech in the discard pile, one in the draw pile.
        let scroll_a = world.alloc.instantiate(SCROLL);
        world.deck.discard(scroll_a);
        let mut rng = GameRng::new(7);
        world
            .deck
            .inject_curse(SCROLL, 1, &mut world.alloc, &mut rng);

        let outcome = world.resolve(&crisis);
        assert!(outcome.success);
        assert_eq!(world.stats.health, 50);
    }

    #[test]
    fn test_lose_resource_penalty_floors() {
        let mut world = World::new();
        world.resources.food = 7;
        let crisis = Crisis::new(
            CrisisId::new(13),
            "Drought",
            "",
            CrisisRequirement::Combat { attack: 99 },
            CrisisPenalty::LoseResource { percent: 30 },
        );

        let outcome = world.resolve(&crisis);

        // floor(7 * 30 / 100) = 2
        assert_eq!(outcome.penalty, Some(AppliedPenalty::FoodLost { amount: 2 }));
        assert_eq!(world.resources.food, 5);
    }

    #[test]
    fn test_destroy_structure_takes_newest() {
        let mut world = World::new();
        let older = world.alloc.instantiate(HUT);
        let newer = world.alloc.instantiate(HUT);
        world.field.deploy(older, CardType::Structure).unwrap();
        world.field.deploy(newer, CardType::Structure).unwrap();

        let crisis = Crisis::new(
            CrisisId::new(14),
            "Earthquake",
            "",
            CrisisRequirement::TechCount { count: 1 },
            CrisisPenalty::DestroyStructure,
        );

        let outcome = world.resolve(&crisis);

        assert_eq!(
            outcome.penalty,
            Some(AppliedPenalty::StructureDestroyed { card: Some(HUT) })
        );
        assert_eq!(world.field.structures().len(), 1);
        assert_eq!(world.field.structures()[0].instance_id, older.instance_id);
    }

    #[test]
    fn test_curse_injection_penalty() {
        let mut world = World::new();
        let crisis = Crisis::new(
            CrisisId::new(15),
            "Long Winter",
            "",
            CrisisRequirement::Combat { attack: 99 },
            CrisisPenalty::AddCurseCard {
                card: HUNGER,
                count: 2,
            },
        );

        let outcome = world.resolve(&crisis);

        assert_eq!(
            outcome.penalty,
            Some(AppliedPenalty::CursesAdded {
                card: HUNGER,
                count: 2
            })
        );
        assert_eq!(world.deck.count_matching(|id| id == HUNGER), 2);
    }

    #[test]
    fn test_fatal_damage_is_flagged() {
        let mut world = World::new();
        world.stats = PlayerStats::new(5);

        let outcome = world.resolve(&combat_crisis(3, 10));

        assert!(outcome.fatal);
        assert_eq!(world.stats.health, 0);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let crisis = combat_crisis(3, 10);

        let mut first = World::new();
        let mut second = World::new();

        assert_eq!(first.resolve(&crisis), second.resolve(&crisis));
        assert_eq!(first.stats, second.stats);
        assert_eq!(first.resources, second.resources);
    }

    #[test]
    fn test_schedule_counts_down_then_arms() {
        let catalog = test_catalog();
        let mut rng = GameRng::new(42);
        let mut schedule = CrisisSchedule {
            active: None,
            preview: generate(&catalog, Era::Primitive, &mut rng),
            cooldown: 2,
        };
        let announced = schedule.preview.clone().unwrap();

        assert_eq!(
            schedule.tick(&catalog, Era::Primitive, 2..=5, &mut rng),
            ScheduleTick::Dormant { remaining: 1 }
        );
        assert_eq!(
            schedule.tick(&catalog, Era::Primitive, 2..=5, &mut rng),
            ScheduleTick::Dormant { remaining: 0 }
        );
        assert_eq!(
            schedule.tick(&catalog, Era::Primitive, 2..=5, &mut rng),
            ScheduleTick::Armed
        );

        // The announced preview became active and a new one was rolled.
        assert_eq!(schedule.active, Some(announced));
        assert!(schedule.preview.is_some());
        assert!((2..=5).contains(&schedule.cooldown));
    }

    #[test]
    fn test_roll_always_announces_a_preview() {
        let catalog = test_catalog();
        let mut rng = GameRng::new(42);

        let schedule = CrisisSchedule::roll(&catalog, Era::Primitive, 2..=5, &mut rng);

        assert!(schedule.active.is_none());
        assert!(schedule.preview.is_some());
        assert!((2..=5).contains(&schedule.cooldown));
    }
}
