//! Desirability scoring for top-level goals.
//!
//! Each evaluator maps the bot's situation to a score in `0..=1`: a tweak
//! constant times a formula over [`features`](super::features), scaled by
//! the matching personality bias and clamped. The winner of arbitration
//! installs its goal through [`Evaluator::goal`].

use arena_core::{ItemKind, WeaponKind};

use super::features::{self, MIN_DISTANCE};
use super::goals::{Engage, Explore, GetItem, GoalKind, TopLevelGoal};
use super::BotContext;

/// Candidate top-level behaviors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluator {
    Explore,
    GetHealth,
    GetWeapon(WeaponKind),
    Engage,
}

impl Evaluator {
    /// Evaluators every bot registers, in tie-breaking order.
    pub const DEFAULT_SET: [Evaluator; 5] = [
        Evaluator::Explore,
        Evaluator::GetHealth,
        Evaluator::GetWeapon(WeaponKind::AssaultRifle),
        Evaluator::GetWeapon(WeaponKind::Shotgun),
        Evaluator::Engage,
    ];

    /// Class of the goal this evaluator installs.
    pub fn kind(&self) -> GoalKind {
        match self {
            Evaluator::Explore => GoalKind::Explore,
            Evaluator::GetHealth | Evaluator::GetWeapon(_) => GoalKind::GetItem,
            Evaluator::Engage => GoalKind::Engage,
        }
    }

    /// Fresh goal for this evaluator.
    pub fn goal(&self) -> TopLevelGoal {
        match self {
            Evaluator::Explore => TopLevelGoal::Explore(Explore::new()),
            Evaluator::GetHealth => TopLevelGoal::GetItem(GetItem::new(ItemKind::HealthPack)),
            Evaluator::GetWeapon(kind) => {
                TopLevelGoal::GetItem(GetItem::new(ItemKind::Weapon(*kind)))
            }
            Evaluator::Engage => TopLevelGoal::Engage(Engage::new()),
        }
    }

    /// Desirability in `0..=1`.
    pub fn desirability(&self, ctx: &BotContext<'_>) -> f32 {
        let tuning = &ctx.config.tuning;
        let personality = ctx.personality;

        let (raw, bias) = match self {
            Evaluator::Explore => (tuning.explore, personality.explore),
            Evaluator::GetHealth => {
                let kind = ItemKind::HealthPack;
                let raw = if ctx.ignores.is_ignored(kind, ctx.now) {
                    0.0
                } else {
                    let distance = features::distance_to_item(ctx, kind).max(MIN_DISTANCE);
                    tuning.get_health * (1.0 - features::health(ctx)) / distance
                };
                (raw, personality.get_health)
            }
            Evaluator::GetWeapon(weapon) => {
                let kind = ItemKind::Weapon(*weapon);
                let raw = if ctx.ignores.is_ignored(kind, ctx.now) {
                    0.0
                } else {
                    let distance = features::distance_to_item(ctx, kind).max(MIN_DISTANCE);
                    let strength = features::individual_weapon_strength(ctx.weapons, *weapon);
                    tuning.get_weapon * (1.0 - strength) * features::health(ctx) / distance
                };
                (raw, personality.get_weapon)
            }
            Evaluator::Engage => {
                let raw = if ctx.targets.is_target_shootable() {
                    tuning.engage
                        * features::total_weapon_strength(ctx.weapons)
                        * features::health(ctx)
                } else {
                    0.0
                };
                (raw, personality.engage)
            }
        };

        (raw * bias).clamp(0.0, 1.0)
    }
}
