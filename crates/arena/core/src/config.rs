//! Static configuration shared by every bot in an arena.
//!
//! An [`ArenaConfig`] is built once (from defaults or a data file), validated,
//! and handed to each bot at construction. Nothing in the bot core mutates it
//! at runtime.

use crate::error::ConfigError;
use crate::weapon::WeaponKind;

/// Root configuration for an arena session.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    pub bot: BotConfig,
    pub weapons: WeaponTable,
    pub items: ItemConfig,
}

impl ArenaConfig {
    /// Checks every tunable for values a bot cannot run with.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bot.validate()?;
        for kind in WeaponKind::ALL {
            self.weapons.get(kind).validate(kind)?;
        }
        self.items.validate()?;

        let arrive_tolerance = self.bot.navigation.arrive_tolerance;
        if self.items.pickup_radius < arrive_tolerance {
            return Err(ConfigError::PickupOutOfReach {
                pickup_radius: self.items.pickup_radius,
                arrive_tolerance,
            });
        }
        Ok(())
    }
}

/// Per-bot tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BotConfig {
    pub max_health: f32,
    /// Seconds between lethal damage and the bot being dead.
    pub dying_time: f64,
    /// Height of the eyes above the body position.
    pub head_height: f32,
    /// Radius used for projectile hits.
    pub bounding_radius: f32,
    pub max_speed: f32,
    pub goal: GoalConfig,
    pub navigation: NavigationConfig,
    pub vision: VisionConfig,
    pub memory: MemoryConfig,
    pub weapon: WeaponSelectionConfig,
    pub tuning: EvaluatorTuning,
}

impl BotConfig {
    pub const DEFAULT_MAX_HEALTH: f32 = 100.0;

    fn validate(&self) -> Result<(), ConfigError> {
        positive("bot.max_health", self.max_health as f64)?;
        positive("bot.bounding_radius", self.bounding_radius as f64)?;
        positive("bot.max_speed", self.max_speed as f64)?;
        non_negative("bot.dying_time", self.dying_time)?;
        non_negative("bot.head_height", self.head_height as f64)?;

        frequency("goal arbitration", self.goal.arbitration_frequency)?;
        non_negative("goal.item_ignore_time", self.goal.item_ignore_time)?;

        positive(
            "navigation.arrive_tolerance",
            self.navigation.arrive_tolerance as f64,
        )?;
        positive(
            "navigation.next_waypoint_distance",
            self.navigation.next_waypoint_distance as f64,
        )?;

        frequency("vision", self.vision.update_frequency)?;
        positive("vision.range", self.vision.range as f64)?;
        positive(
            "vision.field_of_view",
            self.vision.field_of_view_degrees as f64,
        )?;

        frequency("memory", self.memory.update_frequency)?;
        non_negative("memory.span", self.memory.span)?;

        frequency("weapon selection", self.weapon.update_frequency)?;
        non_negative("weapon.aim_accuracy", self.weapon.aim_accuracy as f64)?;

        self.tuning.validate()
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            dying_time: 3.0,
            head_height: 1.7,
            bounding_radius: 0.5,
            max_speed: 3.0,
            goal: GoalConfig::default(),
            navigation: NavigationConfig::default(),
            vision: VisionConfig::default(),
            memory: MemoryConfig::default(),
            weapon: WeaponSelectionConfig::default(),
            tuning: EvaluatorTuning::default(),
        }
    }
}

/// Goal arbitration settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GoalConfig {
    /// Arbitration ticks per simulated second.
    pub arbitration_frequency: f64,
    /// Rebuilds a fetch or engage goal may attempt after sub-goal failures
    /// before it gives up.
    pub max_replans: u32,
    /// Seconds an item kind is ignored after no such item could be found.
    pub item_ignore_time: f64,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            arbitration_frequency: 5.0,
            max_replans: 3,
            item_ignore_time: 10.0,
        }
    }
}

/// Path following settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigationConfig {
    /// Radius around the final waypoint that counts as arrived.
    pub arrive_tolerance: f32,
    /// Distance at which the locomotion layer advances to the next waypoint.
    pub next_waypoint_distance: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            arrive_tolerance: 2.0,
            next_waypoint_distance: 2.0,
        }
    }
}

/// Line-of-sight settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisionConfig {
    pub update_frequency: f64,
    pub range: f32,
    pub field_of_view_degrees: f32,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            update_frequency: 5.0,
            range: 80.0,
            field_of_view_degrees: 180.0,
        }
    }
}

/// Perception memory settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MemoryConfig {
    pub update_frequency: f64,
    /// Seconds a record stays valid after it was last sensed (inclusive).
    pub span: f64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            update_frequency: 5.0,
            span: 3.0,
        }
    }
}

/// Weapon selection and aiming settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeaponSelectionConfig {
    pub update_frequency: f64,
    /// Maximum aim jitter per axis, in world units.
    pub aim_accuracy: f32,
}

impl Default for WeaponSelectionConfig {
    fn default() -> Self {
        Self {
            update_frequency: 4.0,
            aim_accuracy: 0.3,
        }
    }
}

/// Tweak constants of the goal evaluators.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvaluatorTuning {
    pub explore: f32,
    pub get_health: f32,
    pub get_weapon: f32,
    pub engage: f32,
    /// Distance at which an item is considered as far as it gets.
    pub max_item_distance: f32,
}

impl EvaluatorTuning {
    fn validate(&self) -> Result<(), ConfigError> {
        non_negative("tuning.explore", self.explore as f64)?;
        non_negative("tuning.get_health", self.get_health as f64)?;
        non_negative("tuning.get_weapon", self.get_weapon as f64)?;
        non_negative("tuning.engage", self.engage as f64)?;
        positive("tuning.max_item_distance", self.max_item_distance as f64)
    }
}

impl Default for EvaluatorTuning {
    fn default() -> Self {
        Self {
            explore: 0.05,
            get_health: 0.2,
            get_weapon: 0.15,
            engage: 1.0,
            max_item_distance: 500.0,
        }
    }
}

/// Static description of one weapon type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSpec {
    pub rounds_per_clip: u32,
    pub max_ammo: u32,
    /// Rounds in the clip when the weapon is first owned.
    pub initial_rounds: u32,
    /// Reserve ammunition when the weapon is first owned.
    pub initial_ammo: u32,
    pub shot_time: f64,
    pub reload_time: f64,
    pub equip_time: f64,
    pub hide_time: f64,
    pub damage: f32,
    /// Seconds a target must have been visible before this weapon fires.
    pub reaction_time: f64,
    /// Distance up to which the weapon is fully effective.
    pub effective_range: f32,
    /// Relative strength used by weapon selection, 0..=1.
    pub strength: f32,
}

impl WeaponSpec {
    fn validate(&self, kind: WeaponKind) -> Result<(), ConfigError> {
        let invalid = |reason| ConfigError::InvalidWeapon { kind, reason };

        if self.rounds_per_clip == 0 {
            return Err(invalid("rounds_per_clip must be positive"));
        }
        if self.initial_rounds > self.rounds_per_clip {
            return Err(invalid("initial_rounds exceeds rounds_per_clip"));
        }
        if self.initial_ammo > self.max_ammo {
            return Err(invalid("initial_ammo exceeds max_ammo"));
        }
        if [
            self.shot_time,
            self.reload_time,
            self.equip_time,
            self.hide_time,
            self.reaction_time,
        ]
        .iter()
        .any(|t| *t < 0.0)
        {
            return Err(invalid("timings must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.strength) {
            return Err(invalid("strength must be within 0..=1"));
        }
        if self.effective_range <= 0.0 {
            return Err(invalid("effective_range must be positive"));
        }
        Ok(())
    }
}

/// Weapon specifications by kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeaponTable {
    pub blaster: WeaponSpec,
    pub shotgun: WeaponSpec,
    pub assault_rifle: WeaponSpec,
}

impl WeaponTable {
    pub fn get(&self, kind: WeaponKind) -> &WeaponSpec {
        match kind {
            WeaponKind::Blaster => &self.blaster,
            WeaponKind::Shotgun => &self.shotgun,
            WeaponKind::AssaultRifle => &self.assault_rifle,
        }
    }
}

impl Default for WeaponTable {
    fn default() -> Self {
        Self {
            blaster: WeaponSpec {
                rounds_per_clip: 12,
                max_ammo: 48,
                initial_rounds: 12,
                initial_ammo: 48,
                shot_time: 0.7,
                reload_time: 1.8,
                equip_time: 0.5,
                hide_time: 0.5,
                damage: 10.0,
                reaction_time: 0.5,
                effective_range: 20.0,
                strength: 0.4,
            },
            shotgun: WeaponSpec {
                rounds_per_clip: 1,
                max_ammo: 12,
                initial_rounds: 1,
                initial_ammo: 6,
                shot_time: 1.0,
                reload_time: 1.5,
                equip_time: 0.5,
                hide_time: 0.5,
                damage: 40.0,
                reaction_time: 0.4,
                effective_range: 10.0,
                strength: 0.7,
            },
            assault_rifle: WeaponSpec {
                rounds_per_clip: 30,
                max_ammo: 90,
                initial_rounds: 30,
                initial_ammo: 30,
                shot_time: 0.1,
                reload_time: 1.5,
                equip_time: 0.5,
                hide_time: 0.5,
                damage: 8.0,
                reaction_time: 0.3,
                effective_range: 40.0,
                strength: 0.8,
            },
        }
    }
}

/// Pickup settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemConfig {
    /// Distance at which a competitor collects an item. Must cover the
    /// navigation arrival tolerance.
    pub pickup_radius: f32,
    pub health_pack_heal: f32,
    pub health_pack_respawn_time: f64,
    pub weapon_respawn_time: f64,
}

impl ItemConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive("items.pickup_radius", self.pickup_radius as f64)?;
        non_negative("items.health_pack_heal", self.health_pack_heal as f64)?;
        non_negative(
            "items.health_pack_respawn_time",
            self.health_pack_respawn_time,
        )?;
        non_negative("items.weapon_respawn_time", self.weapon_respawn_time)
    }
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            pickup_radius: 2.5,
            health_pack_heal: 50.0,
            health_pack_respawn_time: 15.0,
            weapon_respawn_time: 20.0,
        }
    }
}

fn frequency(subsystem: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveFrequency { subsystem, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ArenaConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_frequency_is_rejected() {
        let mut config = ArenaConfig::default();
        config.bot.goal.arbitration_frequency = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveFrequency {
                subsystem: "goal arbitration",
                ..
            })
        ));
    }

    #[test]
    fn overfilled_clip_is_rejected() {
        let mut config = ArenaConfig::default();
        config.weapons.shotgun.initial_rounds = 5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidWeapon {
                kind: WeaponKind::Shotgun,
                reason: "initial_rounds exceeds rounds_per_clip",
            })
        );
    }

    #[test]
    fn pickup_radius_below_arrive_tolerance_is_rejected() {
        let mut config = ArenaConfig::default();
        config.items.pickup_radius = 1.5;
        config.bot.navigation.arrive_tolerance = 2.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::PickupOutOfReach {
                pickup_radius: 1.5,
                arrive_tolerance: 2.0,
            })
        );

        config.items.pickup_radius = 2.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn negative_memory_span_is_rejected() {
        let mut config = ArenaConfig::default();
        config.bot.memory.span = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "memory.span",
                ..
            })
        ));
    }
}
