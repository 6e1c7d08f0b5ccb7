//! Configuration validation errors.
//!
//! Behavioral failures of a bot (no path, item taken, target lost) are never
//! errors: they are goal statuses. The errors in this crate describe data a
//! bot cannot be built from.

use crate::weapon::WeaponKind;

/// Errors reported by [`crate::ArenaConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A regulator would never (or always) fire.
    #[error("update frequency of {subsystem} must be positive, got {value}")]
    NonPositiveFrequency { subsystem: &'static str, value: f64 },

    /// A quantity that must be strictly positive is zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// A quantity that must not be negative is negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// A weapon specification is internally inconsistent.
    #[error("weapon {kind} is misconfigured: {reason}")]
    InvalidWeapon {
        kind: WeaponKind,
        reason: &'static str,
    },

    /// Bots would stop walking before an item is within collecting distance.
    #[error(
        "items.pickup_radius ({pickup_radius}) is smaller than navigation.arrive_tolerance ({arrive_tolerance})"
    )]
    PickupOutOfReach {
        pickup_radius: f32,
        arrive_tolerance: f32,
    },
}
