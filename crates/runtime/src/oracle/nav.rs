//! Flat rectangular floor served through [`NavMeshOracle`].
use arena_core::{ArenaLayout, NavMeshOracle, Region, RegionId, Vec3};
use rand::{Rng, RngCore};

/// A walkable rectangle `[0, width] × [0, depth]` on the ground plane,
/// tiled into square regions numbered row by row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpenFloor {
    width: f32,
    depth: f32,
    region_size: f32,
    columns: u32,
    rows: u32,
}

impl OpenFloor {
    pub fn new(width: f32, depth: f32, region_size: f32) -> Self {
        let region_size = if region_size > 0.0 {
            region_size
        } else {
            width.max(depth).max(1.0)
        };
        let columns = ((width / region_size).ceil() as u32).max(1);
        let rows = ((depth / region_size).ceil() as u32).max(1);
        Self {
            width,
            depth,
            region_size,
            columns,
            rows,
        }
    }

    pub fn from_layout(layout: &ArenaLayout) -> Self {
        Self::new(layout.width, layout.depth, layout.region_size)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn region_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Whether `point` lies on the floor, ignoring height.
    pub fn contains(&self, point: Vec3) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.depth).contains(&point.z)
    }

    /// Center of a region at ground level. Cells on the far edges are
    /// clipped to the floor.
    pub fn centroid(&self, id: RegionId) -> Option<Vec3> {
        if id.0 >= self.region_count() {
            return None;
        }
        let column = id.0 % self.columns;
        let row = id.0 / self.columns;

        let x0 = column as f32 * self.region_size;
        let z0 = row as f32 * self.region_size;
        let x1 = (x0 + self.region_size).min(self.width);
        let z1 = (z0 + self.region_size).min(self.depth);
        Some(Vec3::new((x0 + x1) * 0.5, 0.0, (z0 + z1) * 0.5))
    }

    fn clamp(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(0.0, self.width),
            point.y,
            point.z.clamp(0.0, self.depth),
        )
    }
}

impl NavMeshOracle for OpenFloor {
    fn random_region(&self, rng: &mut dyn RngCore) -> Option<Region> {
        let id = RegionId(rng.gen_range(0..self.region_count()));
        let centroid = self.centroid(id)?;
        Some(Region { id, centroid })
    }

    fn region_at(&self, point: Vec3) -> Option<RegionId> {
        if !self.contains(point) {
            return None;
        }
        let column = ((point.x / self.region_size) as u32).min(self.columns - 1);
        let row = ((point.z / self.region_size) as u32).min(self.rows - 1);
        Some(RegionId(row * self.columns + column))
    }

    fn clamp_movement(
        &self,
        _region: Option<RegionId>,
        _from: Vec3,
        to: Vec3,
    ) -> (Option<RegionId>, Vec3) {
        let clamped = self.clamp(to);
        (self.region_at(clamped), clamped)
    }
}
