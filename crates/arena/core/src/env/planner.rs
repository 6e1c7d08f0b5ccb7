use glam::Vec3;

use crate::types::EntityId;

/// Identifies one path request of one bot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathTicket {
    pub owner: EntityId,
    pub generation: u64,
}

/// A path query waiting to be resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathRequest {
    pub ticket: PathTicket,
    pub from: Vec3,
    pub to: Vec3,
}

/// Planner answer; `None` means the destination is unreachable.
#[derive(Clone, Debug, PartialEq)]
pub struct PathResponse {
    pub ticket: PathTicket,
    pub path: Option<Vec<Vec3>>,
}

/// Asynchronous path planner.
///
/// Requests are fire-and-forget; their responses may come back any number
/// of frames later through [`poll`](PathPlanner::poll).
pub trait PathPlanner: Send {
    fn submit(&mut self, request: PathRequest);

    /// Moves every response resolved by `now` into `out`.
    fn poll(&mut self, now: f64, out: &mut Vec<PathResponse>);

    /// Number of requests not resolved yet.
    fn pending(&self) -> usize;
}
