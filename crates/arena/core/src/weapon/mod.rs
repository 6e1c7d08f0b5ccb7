//! Weapon handling.
//!
//! [`Weapon`] is the per-weapon state machine (clip, reserve, timed states)
//! and [`WeaponSystem`] owns a bot's arsenal: selection, deferred switching,
//! reloading, aiming and firing. Both run independently of the goal
//! hierarchy and only read the [`crate::TargetSystem`].
mod state;
mod system;

pub use state::{Weapon, WeaponStatus};
pub use system::WeaponSystem;

use glam::Vec3;

/// Weapon types a competitor can own.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponKind {
    Blaster,
    Shotgun,
    AssaultRifle,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 3] = [
        WeaponKind::Blaster,
        WeaponKind::Shotgun,
        WeaponKind::AssaultRifle,
    ];
}

/// A fired projectile, resolved by whoever owns the world geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shot {
    pub weapon: WeaponKind,
    pub origin: Vec3,
    /// Unit direction of travel.
    pub direction: Vec3,
    pub damage: f32,
}
