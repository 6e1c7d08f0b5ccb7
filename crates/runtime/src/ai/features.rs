//! Normalized bot features feeding the evaluators.
//!
//! Every feature is in `0..=1`.

use arena_core::{ItemKind, WeaponKind, WeaponSystem};

use super::BotContext;

/// Lower bound for distance features used as divisors.
pub const MIN_DISTANCE: f32 = 1e-3;

/// Current health as a share of the maximum.
pub fn health(ctx: &BotContext<'_>) -> f32 {
    if ctx.max_health <= 0.0 {
        return 0.0;
    }
    (ctx.health / ctx.max_health).clamp(0.0, 1.0)
}

/// Distance to the closest active item of `kind`, relative to the
/// configured maximum item distance. Returns 1 when there is no such item or
/// no item oracle to ask.
pub fn distance_to_item(ctx: &BotContext<'_>, kind: ItemKind) -> f32 {
    let max_distance = ctx.config.tuning.max_item_distance;
    let Ok(items) = ctx.env.items() else {
        return 1.0;
    };
    match items.closest_item(ctx.position, kind) {
        Some(closest) => (closest.distance / max_distance).clamp(0.0, 1.0),
        None => 1.0,
    }
}

/// Ammunition carried for `kind` as a share of its capacity; 0 when the
/// weapon is not owned.
pub fn individual_weapon_strength(weapons: &WeaponSystem, kind: WeaponKind) -> f32 {
    weapons.ammo_ratio(kind)
}

/// Mean individual strength over every weapon kind.
pub fn total_weapon_strength(weapons: &WeaponSystem) -> f32 {
    let sum: f32 = WeaponKind::ALL
        .iter()
        .map(|kind| individual_weapon_strength(weapons, *kind))
        .sum();
    sum / WeaponKind::ALL.len() as f32
}
