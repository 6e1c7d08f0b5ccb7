use glam::Vec3;
use rand::RngCore;

/// Identifier of a navigation mesh region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(pub u32);

/// A walkable region with a point usable as a destination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub centroid: Vec3,
}

/// Navigation mesh queries a bot needs. Geometry stays behind the trait.
pub trait NavMeshOracle: Send + Sync {
    /// Picks a region uniformly at random.
    fn random_region(&self, rng: &mut dyn RngCore) -> Option<Region>;

    /// Region containing `point`, if it lies on the mesh.
    fn region_at(&self, point: Vec3) -> Option<RegionId>;

    /// Constrains a proposed move to mesh-valid space.
    ///
    /// Returns the region the clamped position lies in together with the
    /// clamped position.
    fn clamp_movement(&self, region: Option<RegionId>, from: Vec3, to: Vec3)
    -> (Option<RegionId>, Vec3);
}
