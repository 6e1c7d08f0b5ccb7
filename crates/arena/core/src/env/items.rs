use glam::Vec3;

use crate::types::{ItemId, ItemKind};

/// Result of a closest-item query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestItem {
    pub item: ItemId,
    pub distance: f32,
    pub position: Vec3,
}

/// World query for pickups.
pub trait ItemOracle: Send + Sync {
    /// Closest active item of `kind` as seen from `from`.
    fn closest_item(&self, from: Vec3, kind: ItemKind) -> Option<ClosestItem>;

    /// Whether the item can currently be picked up.
    fn is_active(&self, item: ItemId) -> bool;
}
