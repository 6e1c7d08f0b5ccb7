use crate::config::WeaponSpec;

use super::WeaponKind;

/// State of a single weapon.
///
/// `Shot`, `Reload`, `Equip` and `Hide` are timed: they end on the first
/// [`Weapon::update`] at or after their end time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum WeaponStatus {
    Ready,
    Shot,
    Reload,
    Empty,
    OutOfAmmo,
    Equip,
    Hide,
    Unready,
}

impl WeaponStatus {
    /// A weapon change may begin only from one of these states.
    pub fn is_safe_to_switch(self) -> bool {
        !matches!(self, WeaponStatus::Shot | WeaponStatus::Reload)
    }
}

/// One owned weapon with its clip and reserve.
#[derive(Clone, Debug)]
pub struct Weapon {
    kind: WeaponKind,
    spec: WeaponSpec,
    rounds_left: u32,
    ammo: u32,
    status: WeaponStatus,
    end_time: f64,
}

impl Weapon {
    /// Creates an un-equipped weapon with its initial loadout.
    pub fn new(kind: WeaponKind, spec: WeaponSpec) -> Self {
        Self {
            kind,
            rounds_left: spec.initial_rounds,
            ammo: spec.initial_ammo,
            spec,
            status: WeaponStatus::Unready,
            end_time: 0.0,
        }
    }

    pub fn kind(&self) -> WeaponKind {
        self.kind
    }

    pub fn spec(&self) -> &WeaponSpec {
        &self.spec
    }

    pub fn status(&self) -> WeaponStatus {
        self.status
    }

    pub fn rounds_left(&self) -> u32 {
        self.rounds_left
    }

    /// Reserve ammunition outside the clip.
    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn total_rounds(&self) -> u32 {
        self.rounds_left + self.ammo
    }

    /// Share of the maximum carried rounds (clip plus reserve), 0..=1.
    pub fn ammo_ratio(&self) -> f32 {
        let capacity = self.spec.rounds_per_clip + self.spec.max_ammo;
        if capacity == 0 {
            return 0.0;
        }
        (self.total_rounds() as f32 / capacity as f32).min(1.0)
    }

    /// Fires one round. Only possible from `Ready` with a loaded clip.
    pub fn shoot(&mut self, now: f64) -> bool {
        if self.status != WeaponStatus::Ready || self.rounds_left == 0 {
            return false;
        }
        self.rounds_left -= 1;
        self.status = WeaponStatus::Shot;
        self.end_time = now + self.spec.shot_time;
        true
    }

    /// Starts a reload from `Ready` or `Empty`.
    ///
    /// An empty clip with no reserve left becomes `OutOfAmmo`. A partially
    /// filled clip with no reserve never becomes `OutOfAmmo`: it stays
    /// `Ready` and keeps firing its remaining rounds. A full clip is left
    /// untouched.
    pub fn reload(&mut self, now: f64) -> bool {
        if !matches!(self.status, WeaponStatus::Ready | WeaponStatus::Empty) {
            return false;
        }
        if self.ammo == 0 {
            if self.rounds_left == 0 {
                self.status = WeaponStatus::OutOfAmmo;
            }
            return false;
        }
        if self.rounds_left >= self.spec.rounds_per_clip {
            return false;
        }
        self.status = WeaponStatus::Reload;
        self.end_time = now + self.spec.reload_time;
        true
    }

    pub fn equip(&mut self, now: f64) {
        self.status = WeaponStatus::Equip;
        self.end_time = now + self.spec.equip_time;
    }

    pub fn hide(&mut self, now: f64) {
        self.status = WeaponStatus::Hide;
        self.end_time = now + self.spec.hide_time;
    }

    /// Adds reserve ammunition, capped at `max_ammo`.
    pub fn add_ammo(&mut self, rounds: u32) {
        self.ammo = self.ammo.saturating_add(rounds).min(self.spec.max_ammo);
        if self.status == WeaponStatus::OutOfAmmo && self.ammo > 0 {
            self.status = WeaponStatus::Empty;
        }
    }

    /// Puts the weapon in its freshly equipped state without delay.
    pub(crate) fn make_ready(&mut self) {
        self.status = self.resting_status();
        self.end_time = 0.0;
    }

    /// Advances timed states.
    pub fn update(&mut self, now: f64) {
        if now < self.end_time {
            return;
        }
        match self.status {
            WeaponStatus::Shot | WeaponStatus::Equip => {
                self.status = self.resting_status();
            }
            WeaponStatus::Reload => {
                let missing = self.spec.rounds_per_clip.saturating_sub(self.rounds_left);
                let moved = missing.min(self.ammo);
                self.rounds_left += moved;
                self.ammo -= moved;
                self.status = WeaponStatus::Ready;
            }
            WeaponStatus::Hide => self.status = WeaponStatus::Unready,
            WeaponStatus::Ready
            | WeaponStatus::Empty
            | WeaponStatus::OutOfAmmo
            | WeaponStatus::Unready => {}
        }
    }

    fn resting_status(&self) -> WeaponStatus {
        if self.rounds_left > 0 {
            WeaponStatus::Ready
        } else {
            WeaponStatus::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeaponTable;

    fn ready(kind: WeaponKind, rounds: u32, ammo: u32) -> Weapon {
        let mut weapon = Weapon::new(kind, WeaponTable::default().get(kind).clone());
        weapon.rounds_left = rounds;
        weapon.ammo = ammo;
        weapon.make_ready();
        weapon
    }

    #[test]
    fn last_round_leaves_weapon_empty() {
        let mut weapon = ready(WeaponKind::Blaster, 1, 10);
        assert_eq!(weapon.status(), WeaponStatus::Ready);

        assert!(weapon.shoot(0.0));
        assert_eq!(weapon.status(), WeaponStatus::Shot);

        weapon.update(weapon.spec().shot_time);
        assert_eq!(weapon.status(), WeaponStatus::Empty);
        assert_eq!(weapon.rounds_left(), 0);
    }

    #[test]
    fn shot_returns_to_ready_with_rounds_left() {
        let mut weapon = ready(WeaponKind::Blaster, 3, 0);
        assert!(weapon.shoot(0.0));
        weapon.update(0.1);
        assert_eq!(weapon.status(), WeaponStatus::Shot);
        weapon.update(1.0);
        assert_eq!(weapon.status(), WeaponStatus::Ready);
        assert_eq!(weapon.rounds_left(), 2);
    }

    #[test]
    fn cannot_fire_while_shot_is_in_progress() {
        let mut weapon = ready(WeaponKind::AssaultRifle, 10, 0);
        assert!(weapon.shoot(0.0));
        assert!(!weapon.shoot(0.01));
        assert_eq!(weapon.rounds_left(), 9);
    }

    #[test]
    fn reload_moves_reserve_into_clip() {
        let mut weapon = ready(WeaponKind::Blaster, 0, 5);
        weapon.status = WeaponStatus::Empty;

        assert!(weapon.reload(1.0));
        assert_eq!(weapon.status(), WeaponStatus::Reload);
        weapon.update(1.0 + weapon.spec().reload_time);

        assert_eq!(weapon.status(), WeaponStatus::Ready);
        assert_eq!(weapon.rounds_left(), 5);
        assert_eq!(weapon.ammo(), 0);
    }

    #[test]
    fn reload_without_reserve_runs_out_of_ammo() {
        let mut weapon = ready(WeaponKind::Shotgun, 0, 0);
        weapon.status = WeaponStatus::Empty;

        assert!(!weapon.reload(0.0));
        assert_eq!(weapon.status(), WeaponStatus::OutOfAmmo);
        assert!(!weapon.shoot(0.0));

        weapon.add_ammo(3);
        assert_eq!(weapon.status(), WeaponStatus::Empty);
        assert!(weapon.reload(0.0));
    }

    #[test]
    fn partial_clip_without_reserve_stays_usable() {
        let mut weapon = ready(WeaponKind::Blaster, 4, 0);
        assert!(!weapon.reload(0.0));
        assert_eq!(weapon.status(), WeaponStatus::Ready);

        assert!(weapon.shoot(0.0));
        assert_eq!(weapon.rounds_left(), 3);
    }

    #[test]
    fn hide_then_unready() {
        let mut weapon = ready(WeaponKind::Blaster, 4, 0);
        weapon.hide(0.0);
        assert_eq!(weapon.status(), WeaponStatus::Hide);
        weapon.update(0.1);
        assert_eq!(weapon.status(), WeaponStatus::Hide);
        weapon.update(weapon.spec().hide_time);
        assert_eq!(weapon.status(), WeaponStatus::Unready);
    }

    #[test]
    fn add_ammo_is_capped() {
        let mut weapon = ready(WeaponKind::Shotgun, 1, 0);
        weapon.add_ammo(1_000);
        assert_eq!(weapon.ammo(), weapon.spec().max_ammo);
    }
}
