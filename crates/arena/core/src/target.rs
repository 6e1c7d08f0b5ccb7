use glam::Vec3;

use crate::memory::{MemoryRecord, MemorySystem};
use crate::types::EntityId;

/// Chooses the opponent a bot treats as its target.
///
/// Holds a copy of the chosen memory record. [`update`] chooses the target;
/// [`refresh`] re-reads its record so visibility and position follow the
/// latest observation between choices.
///
/// [`update`]: TargetSystem::update
/// [`refresh`]: TargetSystem::refresh
#[derive(Clone, Debug, Default)]
pub struct TargetSystem {
    current: Option<MemoryRecord>,
}

impl TargetSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the record closest to `position`.
    ///
    /// Ties keep the earlier record. No records clears the target.
    pub fn update<'a, I>(&mut self, position: Vec3, records: I)
    where
        I: IntoIterator<Item = &'a MemoryRecord>,
    {
        let mut closest: Option<(&MemoryRecord, f32)> = None;
        for record in records {
            let distance = position.distance_squared(record.last_sensed_position);
            if closest.is_none_or(|(_, best)| distance < best) {
                closest = Some((record, distance));
            }
        }
        self.current = closest.map(|(record, _)| *record);
    }

    /// Copies the current target's record out of `memory` again. A target
    /// the memory no longer holds is dropped.
    pub fn refresh(&mut self, memory: &MemorySystem) {
        if let Some(current) = self.current {
            self.current = memory.record(current.entity).copied();
        }
    }

    pub fn has_target(&self) -> bool {
        self.current.is_some()
    }

    pub fn target(&self) -> Option<EntityId> {
        self.current.map(|r| r.entity)
    }

    pub fn is_target_shootable(&self) -> bool {
        self.current.is_some_and(|r| r.visible)
    }

    pub fn last_sensed_position(&self) -> Option<Vec3> {
        self.current.map(|r| r.last_sensed_position)
    }

    pub fn time_last_sensed(&self) -> Option<f64> {
        self.current.map(|r| r.time_last_sensed)
    }

    pub fn time_became_visible(&self) -> Option<f64> {
        self.current.map(|r| r.time_became_visible)
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}
