use glam::Vec3;

use crate::config::VisionConfig;

/// Axis-aligned box that blocks line of sight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub min: Vec3,
    pub max: Vec3,
}

impl Obstacle {
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Slab test of the segment `from → to` against the box.
    pub fn intersects_segment(&self, from: Vec3, to: Vec3) -> bool {
        let delta = to - from;
        let mut t_min = 0.0f32;
        let mut t_max = 1.0f32;

        for axis in 0..3 {
            let origin = from[axis];
            let d = delta[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < f32::EPSILON {
                if origin < lo || origin > hi {
                    return false;
                }
                continue;
            }

            let inv = 1.0 / d;
            let mut t0 = (lo - origin) * inv;
            let mut t1 = (hi - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return false;
            }
        }
        true
    }
}

/// Line-of-sight capability: range, field of view and blocking obstacles.
#[derive(Clone, Debug)]
pub struct Vision {
    range: f32,
    half_fov_cos: f32,
    obstacles: Vec<Obstacle>,
}

impl Vision {
    pub fn new(config: &VisionConfig) -> Self {
        let half_fov = (config.field_of_view_degrees.clamp(0.0, 360.0) * 0.5).to_radians();
        Self {
            range: config.range,
            half_fov_cos: half_fov.cos(),
            obstacles: Vec::new(),
        }
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Whether `point` can be seen from `eye` looking along `forward`.
    ///
    /// A zero `forward` disables the field-of-view check.
    pub fn visible(&self, eye: Vec3, forward: Vec3, point: Vec3) -> bool {
        let to_point = point - eye;
        let distance_sq = to_point.length_squared();
        if distance_sq > self.range * self.range {
            return false;
        }

        let forward = forward.normalize_or_zero();
        if forward != Vec3::ZERO && distance_sq > 0.0 {
            let cos = forward.dot(to_point / distance_sq.sqrt());
            if cos < self.half_fov_cos {
                return false;
            }
        }

        !self
            .obstacles
            .iter()
            .any(|o| o.intersects_segment(eye, point))
    }
}
