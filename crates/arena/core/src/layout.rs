use glam::Vec3;

use crate::types::ItemKind;
use crate::vision::Obstacle;

/// Static description of an arena: floor, spawn points, pickups, cover.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaLayout {
    /// Extent of the floor along x.
    pub width: f32,
    /// Extent of the floor along z.
    pub depth: f32,
    /// Edge length of the square navigation regions.
    pub region_size: f32,
    pub spawn_points: Vec<Vec3>,
    pub items: Vec<ItemPlacement>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<Obstacle>,
}

/// A pickup placed in the arena.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPlacement {
    pub kind: ItemKind,
    pub position: Vec3,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        use crate::weapon::WeaponKind;

        Self {
            width: 60.0,
            depth: 60.0,
            region_size: 10.0,
            spawn_points: vec![
                Vec3::new(5.0, 0.0, 5.0),
                Vec3::new(55.0, 0.0, 55.0),
                Vec3::new(5.0, 0.0, 55.0),
                Vec3::new(55.0, 0.0, 5.0),
            ],
            items: vec![
                ItemPlacement {
                    kind: ItemKind::HealthPack,
                    position: Vec3::new(30.0, 0.0, 10.0),
                },
                ItemPlacement {
                    kind: ItemKind::HealthPack,
                    position: Vec3::new(30.0, 0.0, 50.0),
                },
                ItemPlacement {
                    kind: ItemKind::Weapon(WeaponKind::Shotgun),
                    position: Vec3::new(10.0, 0.0, 30.0),
                },
                ItemPlacement {
                    kind: ItemKind::Weapon(WeaponKind::AssaultRifle),
                    position: Vec3::new(50.0, 0.0, 30.0),
                },
            ],
            obstacles: vec![Obstacle::new(
                Vec3::new(27.0, 0.0, 27.0),
                Vec3::new(33.0, 3.0, 33.0),
            )],
        }
    }
}
