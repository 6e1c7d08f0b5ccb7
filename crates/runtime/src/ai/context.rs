//! Per-frame view of a bot handed to goals and evaluators.
//!
//! [`BotContext`] is the blackboard shared by arbitration and the goal tree.
//! It is assembled from disjoint borrows of the bot's fields at the start of
//! the brain update and dropped at the end, so goals can mutate navigation
//! and the ignore list while reading perception and weapons.

use std::collections::HashMap;

use arena_core::{
    ArenaEnv, BotConfig, EntityId, ItemKind, Navigation, Personality, TargetSystem, Vec3,
    WeaponSystem,
};
use rand::rngs::StdRng;

/// Context for goal execution and arbitration.
pub struct BotContext<'a> {
    /// The bot making the decision.
    pub owner: EntityId,
    /// Simulated time in seconds.
    pub now: f64,
    pub position: Vec3,
    pub health: f32,
    pub max_health: f32,
    pub navigation: &'a mut Navigation,
    pub targets: &'a TargetSystem,
    pub weapons: &'a WeaponSystem,
    pub ignores: &'a mut ItemIgnores,
    pub env: ArenaEnv<'a>,
    pub config: &'a BotConfig,
    pub personality: &'a Personality,
    pub rng: &'a mut StdRng,
}

impl BotContext<'_> {
    /// Whether the bot stands within the arrival tolerance of `point`.
    pub fn at_position(&self, point: Vec3) -> bool {
        let tolerance = self.config.navigation.arrive_tolerance;
        self.position.distance_squared(point) <= tolerance * tolerance
    }
}

/// Item kinds a bot has given up on for a while.
///
/// A kind is ignored after a fetch goal found no such item in the world, so
/// its evaluator does not win arbitration again before anything changed.
#[derive(Clone, Debug, Default)]
pub struct ItemIgnores {
    until: HashMap<ItemKind, f64>,
}

impl ItemIgnores {
    pub fn ignore(&mut self, kind: ItemKind, until: f64) {
        self.until.insert(kind, until);
    }

    pub fn is_ignored(&self, kind: ItemKind, now: f64) -> bool {
        self.until.get(&kind).is_some_and(|until| now < *until)
    }

    pub fn clear(&mut self) {
        self.until.clear();
    }
}
