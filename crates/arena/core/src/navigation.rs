//! The bot's path slot and follow-path capability.
//!
//! Path queries are asynchronous: [`Navigation::request_path`] queues a
//! request and the response arrives some frames later through
//! [`Navigation::deliver`]. Every request bumps a generation counter and
//! only a response carrying the current generation may fill the slot, so a
//! goal torn down before its response arrived cannot overwrite the path of
//! its successor.

use glam::Vec3;

use crate::env::{PathRequest, PathResponse, PathTicket};
use crate::types::EntityId;

/// Contents of the path slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PathState {
    #[default]
    Idle,
    Pending,
    Ready(Vec<Vec3>),
    Unreachable,
}

/// Outcome of handing a planner response to [`Navigation::deliver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathDelivery {
    Accepted,
    /// The response belongs to an abandoned request and was dropped.
    Stale,
}

/// External locomotion toggle: an active flag and a waypoint buffer.
#[derive(Clone, Debug, Default)]
pub struct FollowPathSteering {
    active: bool,
    path: Vec<Vec3>,
    cursor: usize,
}

impl FollowPathSteering {
    /// Replaces the buffer with `waypoints` and turns steering on.
    pub fn activate(&mut self, waypoints: &[Vec3]) {
        self.clear();
        for waypoint in waypoints {
            self.add(*waypoint);
        }
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn clear(&mut self) {
        self.path.clear();
        self.cursor = 0;
    }

    pub fn add(&mut self, waypoint: Vec3) {
        self.path.push(waypoint);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn path(&self) -> &[Vec3] {
        &self.path
    }

    /// Waypoint the locomotion layer is heading for.
    pub fn current_waypoint(&self) -> Option<Vec3> {
        self.path.get(self.cursor).copied()
    }

    /// Moves on to the next waypoint once within `distance` of the current
    /// one. The final waypoint is never passed.
    pub fn advance(&mut self, position: Vec3, distance: f32) {
        while self.cursor + 1 < self.path.len()
            && position.distance_squared(self.path[self.cursor]) <= distance * distance
        {
            self.cursor += 1;
        }
    }
}

/// A bot's navigation state: path slot, steering and outstanding requests.
#[derive(Clone, Debug, Default)]
pub struct Navigation {
    generation: u64,
    state: PathState,
    steering: FollowPathSteering,
    outbox: Vec<PathRequest>,
    stale_responses: u64,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the slot and queues a new path request.
    ///
    /// Any response to an earlier request becomes stale.
    pub fn request_path(&mut self, owner: EntityId, from: Vec3, to: Vec3) -> PathTicket {
        self.generation += 1;
        let ticket = PathTicket {
            owner,
            generation: self.generation,
        };
        self.state = PathState::Pending;
        self.outbox.push(PathRequest { ticket, from, to });
        tracing::trace!(%owner, generation = self.generation, "path requested");
        ticket
    }

    /// Fills the slot from a planner response unless it is stale.
    pub fn deliver(&mut self, response: PathResponse) -> PathDelivery {
        if response.ticket.generation != self.generation || self.state != PathState::Pending {
            self.stale_responses += 1;
            tracing::debug!(
                owner = %response.ticket.owner,
                generation = response.ticket.generation,
                current = self.generation,
                "discarding stale path response"
            );
            return PathDelivery::Stale;
        }

        self.state = match response.path {
            Some(path) if !path.is_empty() => PathState::Ready(path),
            _ => PathState::Unreachable,
        };
        PathDelivery::Accepted
    }

    pub fn state(&self) -> &PathState {
        &self.state
    }

    pub fn path(&self) -> Option<&[Vec3]> {
        match &self.state {
            PathState::Ready(path) => Some(path),
            _ => None,
        }
    }

    /// Loads the ready path into the steering capability and turns it on.
    ///
    /// Returns the final waypoint, or `None` (steering untouched) when no
    /// path is ready.
    pub fn follow_path(&mut self) -> Option<Vec3> {
        let PathState::Ready(path) = &self.state else {
            return None;
        };
        let destination = *path.last()?;
        self.steering.activate(path);
        Some(destination)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stale_responses(&self) -> u64 {
        self.stale_responses
    }

    pub fn steering(&self) -> &FollowPathSteering {
        &self.steering
    }

    pub fn steering_mut(&mut self) -> &mut FollowPathSteering {
        &mut self.steering
    }

    /// Hands the queued requests to the caller.
    pub fn drain_requests(&mut self) -> std::vec::Drain<'_, PathRequest> {
        self.outbox.drain(..)
    }

    /// Forgets the path and every outstanding request.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = PathState::Idle;
        self.outbox.clear();
        self.steering.deactivate();
        self.steering.clear();
    }
}
