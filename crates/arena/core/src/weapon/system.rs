use glam::Vec3;
use rand::Rng;

use crate::config::WeaponTable;
use crate::target::TargetSystem;

use super::{Shot, Weapon, WeaponKind, WeaponStatus};

/// The arsenal of one bot.
///
/// Holds the owned weapons, the equipped one and an optional pending change
/// that is carried out once the equipped weapon is in a safe state.
#[derive(Clone, Debug)]
pub struct WeaponSystem {
    table: WeaponTable,
    aim_accuracy: f32,
    weapons: Vec<Weapon>,
    current: WeaponKind,
    pending: Option<WeaponKind>,
}

impl WeaponSystem {
    /// Weapon every competitor spawns with.
    pub const STARTING_WEAPON: WeaponKind = WeaponKind::Blaster;

    pub fn new(table: WeaponTable, aim_accuracy: f32) -> Self {
        let mut system = Self {
            table,
            aim_accuracy,
            weapons: Vec::new(),
            current: Self::STARTING_WEAPON,
            pending: None,
        };
        system.reset();
        system
    }

    /// Restores the spawn loadout: a ready starting weapon and nothing else.
    pub fn reset(&mut self) {
        let mut weapon = Weapon::new(
            Self::STARTING_WEAPON,
            self.table.get(Self::STARTING_WEAPON).clone(),
        );
        weapon.make_ready();
        self.weapons.clear();
        self.weapons.push(weapon);
        self.current = Self::STARTING_WEAPON;
        self.pending = None;
    }

    pub fn current(&self) -> WeaponKind {
        self.current
    }

    pub fn current_weapon(&self) -> Option<&Weapon> {
        self.weapon(self.current)
    }

    pub fn pending_change(&self) -> Option<WeaponKind> {
        self.pending
    }

    pub fn has_weapon(&self, kind: WeaponKind) -> bool {
        self.weapon(kind).is_some()
    }

    pub fn weapon(&self, kind: WeaponKind) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.kind() == kind)
    }

    pub fn weapons(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter()
    }

    fn weapon_mut(&mut self, kind: WeaponKind) -> Option<&mut Weapon> {
        self.weapons.iter_mut().find(|w| w.kind() == kind)
    }

    /// Picks up a weapon. A weapon already owned only yields its ammunition.
    ///
    /// Returns `true` when the weapon was not owned before.
    pub fn add_weapon(&mut self, kind: WeaponKind) -> bool {
        let spec = self.table.get(kind).clone();
        let rounds = spec.initial_rounds + spec.initial_ammo;
        match self.weapon_mut(kind) {
            Some(weapon) => {
                weapon.add_ammo(rounds);
                false
            }
            None => {
                self.weapons.push(Weapon::new(kind, spec));
                true
            }
        }
    }

    /// Scores every owned weapon and records a pending change when one is
    /// strictly better than the equipped weapon.
    ///
    /// `distance` is the distance to the current target, if any. A change
    /// whose hide has already started is kept until it completes.
    pub fn select_best_weapon(&mut self, distance: Option<f32>) {
        if self.pending.is_some() && self.is_switching() {
            return;
        }

        let current_score = self
            .current_weapon()
            .map_or(0.0, |w| Self::desirability(w, distance));

        let mut best: Option<(WeaponKind, f32)> = None;
        for weapon in &self.weapons {
            let score = Self::desirability(weapon, distance);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((weapon.kind(), score));
            }
        }

        match best {
            Some((kind, score)) if kind != self.current && score > current_score => {
                if self.pending != Some(kind) {
                    tracing::debug!(from = %self.current, to = %kind, score, "weapon change requested");
                }
                self.pending = Some(kind);
            }
            _ => self.pending = None,
        }
    }

    fn desirability(weapon: &Weapon, distance: Option<f32>) -> f32 {
        if weapon.total_rounds() == 0 {
            return 0.0;
        }
        let spec = weapon.spec();
        let range_fit = match distance {
            Some(d) if d > spec.effective_range => spec.effective_range / d,
            _ => 1.0,
        };
        let ammo_factor = 0.5 + 0.5 * weapon.ammo_ratio();
        spec.strength * range_fit * ammo_factor
    }

    fn is_switching(&self) -> bool {
        self.current_weapon()
            .is_some_and(|w| matches!(w.status(), WeaponStatus::Hide | WeaponStatus::Unready))
    }

    /// Carries out a pending change: hides the equipped weapon, then equips
    /// the requested one once hidden. Waits while a shot or reload runs.
    ///
    /// With no change pending, a hidden equipped weapon is drawn again.
    pub fn update_weapon_change(&mut self, now: f64) {
        let current = self.current;
        let Some(next) = self.pending else {
            if let Some(weapon) = self.weapon_mut(current) {
                if weapon.status() == WeaponStatus::Unready {
                    weapon.equip(now);
                }
            }
            return;
        };
        let Some(weapon) = self.weapon_mut(current) else {
            return;
        };
        match weapon.status() {
            WeaponStatus::Hide => {}
            WeaponStatus::Unready => {
                if let Some(next_weapon) = self.weapon_mut(next) {
                    next_weapon.equip(now);
                    self.current = next;
                }
                self.pending = None;
            }
            status if status.is_safe_to_switch() => weapon.hide(now),
            _ => {}
        }
    }

    /// Fires at the current target when it is shootable and has been
    /// visible for at least the equipped weapon's reaction time.
    ///
    /// The aim point is the target's last sensed position raised by
    /// `head_offset`, with a uniform per-axis jitter bounded by the
    /// configured accuracy. An empty clip is reloaded; so is a partially
    /// used one while no target is shootable.
    pub fn aim_and_shoot<R: Rng + ?Sized>(
        &mut self,
        now: f64,
        eye: Vec3,
        head_offset: f32,
        target: &TargetSystem,
        rng: &mut R,
    ) -> Option<Shot> {
        let accuracy = self.aim_accuracy;
        let weapon = self.weapon_mut(self.current)?;

        if !target.is_target_shootable() {
            if weapon.rounds_left() < weapon.spec().rounds_per_clip {
                weapon.reload(now);
            }
            return None;
        }

        if weapon.status() == WeaponStatus::Empty {
            weapon.reload(now);
            return None;
        }

        let became_visible = target.time_became_visible()?;
        if now - became_visible < weapon.spec().reaction_time {
            return None;
        }

        let mut aim = target.last_sensed_position()? + Vec3::Y * head_offset;
        if accuracy > 0.0 {
            aim += Vec3::new(
                rng.gen_range(-accuracy..=accuracy),
                rng.gen_range(-accuracy..=accuracy),
                rng.gen_range(-accuracy..=accuracy),
            );
        }

        let direction = (aim - eye).normalize_or_zero();
        if direction == Vec3::ZERO || !weapon.shoot(now) {
            return None;
        }

        tracing::trace!(weapon = %weapon.kind(), rounds_left = weapon.rounds_left(), "shot fired");
        Some(Shot {
            weapon: weapon.kind(),
            origin: eye,
            direction,
            damage: weapon.spec().damage,
        })
    }

    /// Advances every owned weapon's timed state.
    pub fn update(&mut self, now: f64) {
        for weapon in &mut self.weapons {
            weapon.update(now);
        }
    }

    /// Ammunition ratio of a weapon kind, 0 when not owned.
    pub fn ammo_ratio(&self, kind: WeaponKind) -> f32 {
        self.weapon(kind).map_or(0.0, Weapon::ammo_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryRecord;
    use crate::types::EntityId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn visible_target(since: f64, at: Vec3) -> TargetSystem {
        let mut record = MemoryRecord::new(EntityId(7));
        record.visible = true;
        record.time_became_visible = since;
        record.time_last_sensed = since;
        record.last_sensed_position = at;
        let mut targets = TargetSystem::new();
        targets.update(Vec3::ZERO, [&record]);
        targets
    }

    #[test]
    fn spawns_with_ready_blaster() {
        let system = WeaponSystem::new(WeaponTable::default(), 0.0);
        assert_eq!(system.current(), WeaponKind::Blaster);
        assert_eq!(
            system.current_weapon().map(Weapon::status),
            Some(WeaponStatus::Ready)
        );
        assert!(!system.has_weapon(WeaponKind::Shotgun));
    }

    #[test]
    fn waits_for_reaction_time_before_firing() {
        let mut system = WeaponSystem::new(WeaponTable::default(), 0.0);
        let mut rng = StdRng::seed_from_u64(1);
        let target = visible_target(10.0, Vec3::new(0.0, 0.0, 5.0));

        assert!(
            system
                .aim_and_shoot(10.1, Vec3::ZERO, 0.0, &target, &mut rng)
                .is_none()
        );

        let shot = system
            .aim_and_shoot(10.6, Vec3::ZERO, 0.0, &target, &mut rng)
            .expect("reaction time elapsed");
        assert_eq!(shot.weapon, WeaponKind::Blaster);
        assert!((shot.direction - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn no_shot_without_target() {
        let mut system = WeaponSystem::new(WeaponTable::default(), 0.0);
        let mut rng = StdRng::seed_from_u64(1);
        let target = TargetSystem::new();
        assert!(
            system
                .aim_and_shoot(5.0, Vec3::ZERO, 0.0, &target, &mut rng)
                .is_none()
        );
    }

    #[test]
    fn jitter_stays_within_accuracy() {
        let mut system = WeaponSystem::new(WeaponTable::default(), 0.5);
        let mut rng = StdRng::seed_from_u64(3);
        let at = Vec3::new(0.0, 0.0, 10.0);
        let target = visible_target(0.0, at);

        let shot = system
            .aim_and_shoot(1.0, Vec3::ZERO, 0.0, &target, &mut rng)
            .expect("ready to fire");
        // distance from the aim ray to the target point
        let offset = at - shot.direction * at.dot(shot.direction);
        assert!(offset.length() <= 0.5 * 3f32.sqrt() + 1e-4);
    }

    #[test]
    fn better_weapon_is_switched_only_after_shot_completes() {
        let mut system = WeaponSystem::new(WeaponTable::default(), 0.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(system.add_weapon(WeaponKind::AssaultRifle));

        let target = visible_target(0.0, Vec3::new(0.0, 0.0, 5.0));
        assert!(
            system
                .aim_and_shoot(1.0, Vec3::ZERO, 0.0, &target, &mut rng)
                .is_some()
        );

        system.select_best_weapon(Some(5.0));
        assert_eq!(system.pending_change(), Some(WeaponKind::AssaultRifle));

        // mid-shot: nothing happens
        system.update_weapon_change(1.1);
        assert_eq!(
            system.current_weapon().map(Weapon::status),
            Some(WeaponStatus::Shot)
        );

        system.update(2.0);
        system.update_weapon_change(2.0);
        assert_eq!(
            system.current_weapon().map(Weapon::status),
            Some(WeaponStatus::Hide)
        );

        system.update(3.0);
        system.update_weapon_change(3.0);
        assert_eq!(system.current(), WeaponKind::AssaultRifle);
        assert_eq!(system.pending_change(), None);
        assert_eq!(
            system.current_weapon().map(Weapon::status),
            Some(WeaponStatus::Equip)
        );

        system.update(4.0);
        assert_eq!(
            system.current_weapon().map(Weapon::status),
            Some(WeaponStatus::Ready)
        );
    }

    #[test]
    fn change_in_progress_survives_reselection() {
        let mut system = WeaponSystem::new(WeaponTable::default(), 0.0);
        system.add_weapon(WeaponKind::Shotgun);

        system.select_best_weapon(Some(5.0));
        assert_eq!(system.pending_change(), Some(WeaponKind::Shotgun));
        system.update_weapon_change(0.0);
        assert_eq!(
            system.current_weapon().map(Weapon::status),
            Some(WeaponStatus::Hide)
        );

        // target moved out of shotgun range while the blaster was being put away
        system.select_best_weapon(Some(40.0));
        assert_eq!(system.pending_change(), Some(WeaponKind::Shotgun));

        let mut now = 0.0;
        while now < 5.0 {
            now += 0.25;
            system.update(now);
            system.update_weapon_change(now);
        }
        assert_eq!(system.current(), WeaponKind::Shotgun);
        assert_eq!(
            system.current_weapon().map(Weapon::status),
            Some(WeaponStatus::Ready)
        );
    }

    #[test]
    fn hidden_weapon_is_drawn_again_without_pending_change() {
        let mut system = WeaponSystem::new(WeaponTable::default(), 0.0);
        if let Some(blaster) = system.weapon_mut(WeaponKind::Blaster) {
            blaster.hide(0.0);
        }
        system.update(10.0);
        assert_eq!(
            system.current_weapon().map(Weapon::status),
            Some(WeaponStatus::Unready)
        );

        system.update_weapon_change(10.0);
        system.update(20.0);
        assert_eq!(
            system.current_weapon().map(Weapon::status),
            Some(WeaponStatus::Ready)
        );
    }

    #[test]
    fn picking_up_new_weapon_adds_it_unequipped() {
        let mut system = WeaponSystem::new(WeaponTable::default(), 0.0);
        assert!(system.add_weapon(WeaponKind::Shotgun));
        assert_eq!(
            system.weapon(WeaponKind::Shotgun).map(Weapon::status),
            Some(WeaponStatus::Unready)
        );
        assert_eq!(system.current(), WeaponKind::Blaster);
    }

    #[test]
    fn equal_weapon_does_not_request_change() {
        let mut system = WeaponSystem::new(WeaponTable::default(), 0.0);
        system.select_best_weapon(None);
        assert_eq!(system.pending_change(), None);
    }

    #[test]
    fn picking_up_owned_weapon_adds_ammo() {
        let mut system = WeaponSystem::new(WeaponTable::default(), 0.0);
        system.add_weapon(WeaponKind::Shotgun);
        let before = system.weapon(WeaponKind::Shotgun).map(Weapon::ammo);
        assert!(!system.add_weapon(WeaponKind::Shotgun));
        let after = system.weapon(WeaponKind::Shotgun).map(Weapon::ammo);
        assert!(after > before);
    }

    #[test]
    fn reset_drops_picked_up_weapons() {
        let mut system = WeaponSystem::new(WeaponTable::default(), 0.0);
        system.add_weapon(WeaponKind::Shotgun);
        system.reset();
        assert!(!system.has_weapon(WeaponKind::Shotgun));
        assert_eq!(system.current(), WeaponKind::Blaster);
    }
}
