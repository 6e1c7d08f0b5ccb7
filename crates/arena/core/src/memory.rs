//! Perception memory.
//!
//! A bot keeps one [`MemoryRecord`] per competitor it has sensed. Records
//! are never expired eagerly; queries filter by the configured span.

use glam::Vec3;

use crate::types::EntityId;

/// What a bot believes about one other competitor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemoryRecord {
    pub entity: EntityId,
    /// Whether the last perception update had line of sight.
    pub visible: bool,
    /// Body position at the last time the entity was sensed.
    pub last_sensed_position: Vec3,
    pub time_last_sensed: f64,
    pub time_became_visible: f64,
}

impl MemoryRecord {
    pub fn new(entity: EntityId) -> Self {
        Self {
            entity,
            visible: false,
            last_sensed_position: Vec3::ZERO,
            time_last_sensed: f64::NEG_INFINITY,
            time_became_visible: f64::NEG_INFINITY,
        }
    }

    /// Applies the outcome of one line-of-sight check.
    ///
    /// `time_became_visible` is stamped only when the entity was not visible
    /// before; position and time are stamped on every visible sighting and
    /// kept as they were otherwise.
    pub fn observe(&mut self, now: f64, visible: bool, position: Vec3) {
        if visible {
            if !self.visible {
                self.time_became_visible = now;
            }
            self.time_last_sensed = now;
            self.last_sensed_position = position;
        }
        self.visible = visible;
    }
}

/// Records in insertion order, so iteration is stable between frames.
#[derive(Clone, Debug)]
pub struct MemorySystem {
    span: f64,
    records: Vec<MemoryRecord>,
}

impl MemorySystem {
    pub fn new(span: f64) -> Self {
        Self {
            span,
            records: Vec::new(),
        }
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    /// Creates an empty record unless one already exists.
    pub fn create_record(&mut self, entity: EntityId) -> &mut MemoryRecord {
        let index = match self.records.iter().position(|r| r.entity == entity) {
            Some(index) => index,
            None => {
                self.records.push(MemoryRecord::new(entity));
                self.records.len() - 1
            }
        };
        &mut self.records[index]
    }

    pub fn record(&self, entity: EntityId) -> Option<&MemoryRecord> {
        self.records.iter().find(|r| r.entity == entity)
    }

    pub fn record_mut(&mut self, entity: EntityId) -> Option<&mut MemoryRecord> {
        self.records.iter_mut().find(|r| r.entity == entity)
    }

    pub fn has_record(&self, entity: EntityId) -> bool {
        self.record(entity).is_some()
    }

    pub fn delete_record(&mut self, entity: EntityId) -> Option<MemoryRecord> {
        let index = self.records.iter().position(|r| r.entity == entity)?;
        Some(self.records.remove(index))
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MemoryRecord] {
        &self.records
    }

    /// Refills `out` with the records sensed within the span.
    ///
    /// A record sensed exactly `span` seconds ago is still valid.
    pub fn valid_records(&self, now: f64, out: &mut Vec<MemoryRecord>) {
        out.clear();
        out.extend(
            self.records
                .iter()
                .filter(|r| now - r.time_last_sensed <= self.span)
                .copied(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sensed_at(memory: &mut MemorySystem, entity: u32, time: f64) {
        memory
            .create_record(EntityId(entity))
            .observe(time, true, Vec3::ZERO);
    }

    #[test]
    fn record_expires_after_span() {
        let mut memory = MemorySystem::new(3.0);
        sensed_at(&mut memory, 1, 0.0);
        let mut out = Vec::new();

        memory.valid_records(2.99, &mut out);
        assert_eq!(out.len(), 1);

        memory.valid_records(3.01, &mut out);
        assert!(out.is_empty());
        assert!(memory.has_record(EntityId(1)));
    }

    #[test]
    fn span_boundary_is_inclusive() {
        let mut memory = MemorySystem::new(3.0);
        sensed_at(&mut memory, 1, 1.0);
        let mut out = Vec::new();
        memory.valid_records(4.0, &mut out);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn never_sensed_record_is_not_valid() {
        let mut memory = MemorySystem::new(3.0);
        memory.create_record(EntityId(4));
        let mut out = Vec::new();
        memory.valid_records(0.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn became_visible_only_on_transition() {
        let mut record = MemoryRecord::new(EntityId(1));
        record.observe(1.0, true, Vec3::X);
        record.observe(2.0, true, Vec3::Y);
        assert_eq!(record.time_became_visible, 1.0);
        assert_eq!(record.time_last_sensed, 2.0);
        assert_eq!(record.last_sensed_position, Vec3::Y);

        record.observe(3.0, false, Vec3::Z);
        assert!(!record.visible);
        assert_eq!(record.time_last_sensed, 2.0);
        assert_eq!(record.last_sensed_position, Vec3::Y);

        record.observe(4.0, true, Vec3::Z);
        assert_eq!(record.time_became_visible, 4.0);
    }

    #[test]
    fn create_record_is_idempotent() {
        let mut memory = MemorySystem::new(1.0);
        sensed_at(&mut memory, 2, 5.0);
        memory.create_record(EntityId(2));
        assert_eq!(memory.len(), 1);
        assert_eq!(
            memory.record(EntityId(2)).map(|r| r.time_last_sensed),
            Some(5.0)
        );
        assert!(memory.delete_record(EntityId(2)).is_some());
        assert!(memory.is_empty());
    }

    proptest! {
        #[test]
        fn valid_records_match_span_filter(
            span in 0.0f64..10.0,
            sensed in prop::collection::vec(0.0f64..20.0, 0..30),
            now in 0.0f64..30.0,
        ) {
            let mut memory = MemorySystem::new(span);
            for (i, time) in sensed.iter().enumerate() {
                sensed_at(&mut memory, i as u32, *time);
            }
            let mut out = Vec::new();
            memory.valid_records(now, &mut out);

            let expected = sensed.iter().filter(|t| now - **t <= span).count();
            prop_assert_eq!(out.len(), expected);
            prop_assert!(out.iter().all(|r| now - r.time_last_sensed <= span));
        }
    }
}
