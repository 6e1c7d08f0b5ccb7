use glam::Vec3;

use crate::types::EntityId;

/// Read-only view of one competitor as of the start of the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompetitorView {
    pub id: EntityId,
    pub position: Vec3,
    pub head_position: Vec3,
    pub alive: bool,
}

/// Shared snapshot of every competitor in the arena.
pub trait CompetitorOracle: Send + Sync {
    fn competitors(&self) -> &[CompetitorView];

    fn competitor(&self, id: EntityId) -> Option<&CompetitorView> {
        self.competitors().iter().find(|c| c.id == id)
    }
}

impl CompetitorOracle for [CompetitorView] {
    fn competitors(&self) -> &[CompetitorView] {
        self
    }
}

impl CompetitorOracle for Vec<CompetitorView> {
    fn competitors(&self) -> &[CompetitorView] {
        self
    }
}
