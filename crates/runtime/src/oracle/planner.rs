//! Path planner that answers after a fixed delay.
use std::collections::VecDeque;

use arena_core::{PathPlanner, PathRequest, PathResponse, Vec3};

use super::OpenFloor;

/// Resolves straight-line paths across an [`OpenFloor`] once `latency`
/// seconds have passed since the poll preceding the request.
///
/// A destination off the floor is unreachable.
#[derive(Clone, Debug)]
pub struct DeferredPlanner {
    floor: OpenFloor,
    latency: f64,
    clock: f64,
    queue: VecDeque<(f64, PathRequest)>,
}

impl DeferredPlanner {
    pub fn new(floor: OpenFloor, latency: f64) -> Self {
        Self {
            floor,
            latency: latency.max(0.0),
            clock: 0.0,
            queue: VecDeque::new(),
        }
    }

    pub fn latency(&self) -> f64 {
        self.latency
    }

    fn resolve(&self, request: &PathRequest) -> Option<Vec<Vec3>> {
        if !self.floor.contains(request.to) {
            return None;
        }
        if request.from.distance_squared(request.to) <= f32::EPSILON {
            return Some(vec![request.to]);
        }
        Some(vec![request.from, request.to])
    }
}

impl PathPlanner for DeferredPlanner {
    fn submit(&mut self, request: PathRequest) {
        let due = self.clock + self.latency;
        self.queue.push_back((due, request));
    }

    fn poll(&mut self, now: f64, out: &mut Vec<PathResponse>) {
        self.clock = now;
        // Requests are queued in due order.
        while let Some((due, _)) = self.queue.front() {
            if *due > now {
                break;
            }
            let Some((_, request)) = self.queue.pop_front() else {
                break;
            };
            let path = self.resolve(&request);
            tracing::trace!(
                owner = %request.ticket.owner,
                generation = request.ticket.generation,
                reachable = path.is_some(),
                "path resolved"
            );
            out.push(PathResponse {
                ticket: request.ticket,
                path,
            });
        }
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
