//! The base card, crisis, and race set.
//!
//! A compact catalog spanning the first two eras plus the crisis pool;
//! later eras keep selling the latest stocked pool. Balance numbers
//! follow the standard configuration.

use crate::cards::{CardCatalog, CardDefinition, CardEffect, CardId, CardType, Passive, StatBlock};
use crate::core::{Era, ResourceCost, ResourceKind};
use crate::crisis::{Crisis, CrisisId, CrisisPenalty, CrisisRequirement};

/// Stable template IDs for the base set.
pub mod ids {
    use crate::cards::CardId;
    use crate::crisis::CrisisId;

    pub const GATHER: CardId = CardId::new(1);
    pub const HUNT: CardId = CardId::new(2);
    pub const RESEARCH: CardId = CardId::new(3);
    pub const WORKER: CardId = CardId::new(4);
    pub const WARRIOR: CardId = CardId::new(5);
    pub const TENT: CardId = CardId::new(6);
    pub const FARM: CardId = CardId::new(7);
    pub const MINE: CardId = CardId::new(8);
    pub const LIBRARY: CardId = CardId::new(9);
    pub const FIRE_MAKING: CardId = CardId::new(10);
    pub const HUNGER: CardId = CardId::new(11);

    pub const RAID: CrisisId = CrisisId::new(1);
    pub const FAMINE: CrisisId = CrisisId::new(2);
    pub const PLAGUE: CrisisId = CrisisId::new(3);
    pub const WOLF_PACK: CrisisId = CrisisId::new(4);
    pub const EARTHQUAKE: CrisisId = CrisisId::new(5);
    pub const LONG_WINTER: CrisisId = CrisisId::new(6);
}

/// Build the base catalog.
#[must_use]
pub fn base_catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();

    // === Primitive era ===

    catalog.register(
        CardDefinition::new(ids::GATHER, "Gathering", CardType::Action, Era::Primitive)
            .with_effect(CardEffect::gain(ResourceKind::Food, 1)),
    );
    catalog.register(
        CardDefinition::new(ids::HUNT, "Hunting", CardType::Action, Era::Primitive)
            .with_cost(ResourceCost::production(1))
            .with_effect(CardEffect::gain(ResourceKind::Food, 3)),
    );
    catalog.register(
        CardDefinition::new(ids::RESEARCH, "Research", CardType::Action, Era::Primitive)
            .with_effect(CardEffect::gain(ResourceKind::Science, 1)),
    );
    catalog.register(
        CardDefinition::new(ids::WORKER, "Worker", CardType::Unit, Era::Primitive)
            .with_cost(ResourceCost::production(2))
            .with_stats(StatBlock::new(0, 2, 1))
            .with_effect(CardEffect::gain(ResourceKind::Production, 2)),
    );
    catalog.register(
        CardDefinition::new(ids::WARRIOR, "Warrior", CardType::Unit, Era::Primitive)
            .with_cost(ResourceCost::production(3))
            .with_stats(StatBlock::new(3, 5, 1)),
    );
    catalog.register(
        CardDefinition::new(ids::TENT, "Tent", CardType::Structure, Era::Primitive)
            .with_cost(ResourceCost::production(3))
            .with_stats(StatBlock::new(0, 5, 0))
            .with_passive(Passive::turn_start(ResourceKind::Food, 1)),
    );
    catalog.register(
        CardDefinition::new(ids::FIRE_MAKING, "Fire Making", CardType::Tech, Era::Primitive)
            .with_cost(ResourceCost::science(10))
            .with_effect(CardEffect::transform(ids::GATHER, ids::HUNT)),
    );

    // === Ancient era ===

    catalog.register(
        CardDefinition::new(ids::FARM, "Farm", CardType::Structure, Era::Ancient)
            .with_cost(ResourceCost::production(3))
            .with_stats(StatBlock::new(0, 10, 0))
            .with_passive(Passive::turn_start(ResourceKind::Food, 2)),
    );
    catalog.register(
        CardDefinition::new(ids::MINE, "Mine", CardType::Structure, Era::Ancient)
            .with_cost(ResourceCost::production(4))
            .with_stats(StatBlock::new(0, 10, 0))
            .with_passive(Passive::turn_start(ResourceKind::Production, 1)),
    );
    catalog.register(
        CardDefinition::new(ids::LIBRARY, "Library", CardType::Structure, Era::Ancient)
            .with_cost(ResourceCost::production(5))
            .with_stats(StatBlock::new(0, 8, 0))
            .with_passive(Passive::turn_start(ResourceKind::Science, 1)),
    );

    // === Curses ===

    catalog.register(
        CardDefinition::new(ids::HUNGER, "Hunger", CardType::Crisis, Era::Primitive)
            .with_effect(CardEffect::damage(5))
            .unplayable(),
    );

    // === Crises ===

    catalog.register_crisis(
        Crisis::new(
            ids::RAID,
            "Barbarian Raid",
            "Raiders test the walls. Muster 3 attack.",
            CrisisRequirement::Combat { attack: 3 },
            CrisisPenalty::DamageHp { amount: 10 },
        )
        .with_reward(ResourceKind::Food, 5),
    );
    catalog.register_crisis(Crisis::new(
        ids::FAMINE,
        "Famine",
        "The granaries must hold 5 food.",
        CrisisRequirement::ResourceCheck {
            resource: ResourceKind::Food,
            amount: 5,
        },
        CrisisPenalty::DamageHp { amount: 8 },
    ));
    catalog.register_crisis(Crisis::new(
        ids::PLAGUE,
        "Plague",
        "Only medicine helps. Requires 3 science.",
        CrisisRequirement::ResourceCheck {
            resource: ResourceKind::Science,
            amount: 3,
        },
        CrisisPenalty::DamageHp { amount: 15 },
    ));
    catalog.register_crisis(
        Crisis::new(
            ids::WOLF_PACK,
            "Wolf Pack",
            "Wolves circle the herds. Muster 2 attack.",
            CrisisRequirement::Combat { attack: 2 },
            CrisisPenalty::LoseResource { percent: 20 },
        )
        .with_reward(ResourceKind::Food, 3),
    );
    catalog.register_crisis(Crisis::new(
        ids::EARTHQUAKE,
        "Earthquake",
        "Sound construction takes knowledge. Requires a tech.",
        CrisisRequirement::TechCount { count: 1 },
        CrisisPenalty::DestroyStructure,
    ));
    catalog.register_crisis(Crisis::new(
        ids::LONG_WINTER,
        "Long Winter",
        "Stores for the cold months: 6 food.",
        CrisisRequirement::ResourceCheck {
            resource: ResourceKind::Food,
            amount: 6,
        },
        CrisisPenalty::AddCurseCard {
            card: ids::HUNGER,
            count: 2,
        },
    ));

    catalog
}

/// A playable race: flavor plus a starter deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub starter_deck: Vec<CardId>,
}

/// The three playable races.
#[must_use]
pub fn races() -> Vec<RaceDefinition> {
    vec![
        RaceDefinition {
            id: "human",
            name: "Homo Sapiens",
            description: "Balanced start across food, labor, and learning.",
            starter_deck: vec![
                ids::WORKER,
                ids::WORKER,
                ids::WORKER,
                ids::WORKER,
                ids::RESEARCH,
                ids::RESEARCH,
                ids::GATHER,
                ids::GATHER,
                ids::GATHER,
                ids::TENT,
            ],
        },
        RaceDefinition {
            id: "neanderthal",
            name: "Neanderthal",
            description: "Hunters and laborers. Strong early production.",
            starter_deck: vec![
                ids::WORKER,
                ids::WORKER,
                ids::WORKER,
                ids::WORKER,
                ids::WORKER,
                ids::HUNT,
                ids::HUNT,
                ids::HUNT,
                ids::GATHER,
                ids::GATHER,
            ],
        },
        RaceDefinition {
            id: "atlantean",
            name: "Atlantean",
            description: "Scholars above all. Science flows early.",
            starter_deck: vec![
                ids::RESEARCH,
                ids::RESEARCH,
                ids::RESEARCH,
                ids::WORKER,
                ids::WORKER,
                ids::GATHER,
                ids::GATHER,
                ids::GATHER,
                ids::GATHER,
                ids::GATHER,
            ],
        },
    ]
}

/// Look up a race by ID.
#[must_use]
pub fn race(id: &str) -> Option<RaceDefinition> {
    races().into_iter().find(|r| r.id == id)
}
