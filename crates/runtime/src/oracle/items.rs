//! Respawning pickups served through [`ItemOracle`].
use arena_core::{ArenaLayout, ClosestItem, ItemConfig, ItemId, ItemKind, ItemOracle, Vec3};

/// One pickup location.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemSlot {
    pub id: ItemId,
    pub kind: ItemKind,
    pub position: Vec3,
    active: bool,
    respawn_at: f64,
}

impl ItemSlot {
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Every pickup in the arena. Collected items come back after the respawn
/// time of their kind.
#[derive(Clone, Debug)]
pub struct ItemRegistry {
    config: ItemConfig,
    slots: Vec<ItemSlot>,
}

impl ItemRegistry {
    pub fn new(config: ItemConfig) -> Self {
        Self {
            config,
            slots: Vec::new(),
        }
    }

    pub fn from_layout(layout: &ArenaLayout, config: ItemConfig) -> Self {
        let mut registry = Self::new(config);
        for placement in &layout.items {
            registry.add(placement.kind, placement.position);
        }
        registry
    }

    pub fn add(&mut self, kind: ItemKind, position: Vec3) -> ItemId {
        let id = ItemId(self.slots.len() as u32);
        self.slots.push(ItemSlot {
            id,
            kind,
            position,
            active: true,
            respawn_at: f64::INFINITY,
        });
        id
    }

    pub fn slots(&self) -> &[ItemSlot] {
        &self.slots
    }

    pub fn slot(&self, id: ItemId) -> Option<&ItemSlot> {
        self.slots.get(id.0 as usize)
    }

    /// Closest active item within pickup radius of `position`.
    pub fn in_reach(&self, position: Vec3) -> Option<&ItemSlot> {
        let radius_sq = self.config.pickup_radius * self.config.pickup_radius;
        self.slots
            .iter()
            .filter(|slot| slot.active)
            .map(|slot| (slot, slot.position.distance_squared(position)))
            .filter(|(_, distance_sq)| *distance_sq <= radius_sq)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(slot, _)| slot)
    }

    /// Deactivates an item and schedules its return.
    ///
    /// Returns `false` if the item does not exist or is already gone.
    pub fn collect(&mut self, id: ItemId, now: f64) -> bool {
        let Some(slot) = self.slots.get_mut(id.0 as usize) else {
            return false;
        };
        if !slot.active {
            return false;
        }
        let respawn_time = match slot.kind {
            ItemKind::HealthPack => self.config.health_pack_respawn_time,
            ItemKind::Weapon(_) => self.config.weapon_respawn_time,
        };
        slot.active = false;
        slot.respawn_at = now + respawn_time;
        tracing::debug!(item = %id, kind = %slot.kind, respawn_at = slot.respawn_at, "item collected");
        true
    }

    /// Brings back every item whose respawn time has come.
    pub fn update(&mut self, now: f64) {
        for slot in self.slots.iter_mut().filter(|s| !s.active) {
            if now >= slot.respawn_at {
                slot.active = true;
                slot.respawn_at = f64::INFINITY;
                tracing::debug!(item = %slot.id, kind = %slot.kind, "item respawned");
            }
        }
    }
}

impl ItemOracle for ItemRegistry {
    fn closest_item(&self, from: Vec3, kind: ItemKind) -> Option<ClosestItem> {
        self.slots
            .iter()
            .filter(|slot| slot.active && slot.kind == kind)
            .map(|slot| ClosestItem {
                item: slot.id,
                distance: slot.position.distance(from),
                position: slot.position,
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    fn is_active(&self, item: ItemId) -> bool {
        self.slot(item).is_some_and(ItemSlot::is_active)
    }
}

#[cfg(test)]
mod tests {
    use arena_core::WeaponKind;

    use super::*;

    fn registry() -> ItemRegistry {
        let mut registry = ItemRegistry::new(ItemConfig::default());
        registry.add(ItemKind::HealthPack, Vec3::new(10.0, 0.0, 0.0));
        registry.add(ItemKind::HealthPack, Vec3::new(4.0, 0.0, 0.0));
        registry.add(
            ItemKind::Weapon(WeaponKind::Shotgun),
            Vec3::new(1.0, 0.0, 0.0),
        );
        registry
    }

    #[test]
    fn closest_item_filters_by_kind() {
        let registry = registry();
        let closest = registry
            .closest_item(Vec3::ZERO, ItemKind::HealthPack)
            .expect("health packs placed");
        assert_eq!(closest.item, ItemId(1));
        assert_eq!(closest.distance, 4.0);
        assert!(
            registry
                .closest_item(Vec3::ZERO, ItemKind::Weapon(WeaponKind::AssaultRifle))
                .is_none()
        );
    }

    #[test]
    fn collected_item_respawns() {
        let mut registry = registry();
        assert!(registry.collect(ItemId(1), 2.0));
        assert!(!registry.collect(ItemId(1), 2.0));
        assert!(!registry.is_active(ItemId(1)));

        let closest = registry.closest_item(Vec3::ZERO, ItemKind::HealthPack);
        assert_eq!(closest.map(|c| c.item), Some(ItemId(0)));

        registry.update(16.9);
        assert!(!registry.is_active(ItemId(1)));
        registry.update(17.0);
        assert!(registry.is_active(ItemId(1)));
    }

    #[test]
    fn reach_uses_pickup_radius() {
        let registry = registry();
        assert!(registry.in_reach(Vec3::new(7.0, 0.0, 0.0)).is_none());
        let slot = registry
            .in_reach(Vec3::new(2.0, 0.0, 0.0))
            .expect("shotgun in reach");
        assert_eq!(slot.kind, ItemKind::Weapon(WeaponKind::Shotgun));
        assert!(!registry.is_active(ItemId(9)));
    }
}
