use arena_core::{PathState, Vec3};
use goal_tree::{Goal, Status};

use crate::ai::BotContext;

/// Asks the planner for a path and waits for the answer.
#[derive(Clone, Debug)]
pub struct FindPath {
    status: Status,
    from: Vec3,
    to: Vec3,
}

impl FindPath {
    pub fn new(from: Vec3, to: Vec3) -> Self {
        Self {
            status: Status::Inactive,
            from,
            to,
        }
    }

    pub fn destination(&self) -> Vec3 {
        self.to
    }
}

impl<'a> Goal<BotContext<'a>> for FindPath {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn activate(&mut self, ctx: &mut BotContext<'a>) {
        ctx.navigation.request_path(ctx.owner, self.from, self.to);
    }

    fn execute(&mut self, ctx: &mut BotContext<'a>) {
        if !self.status.is_active() {
            return;
        }
        match ctx.navigation.state() {
            PathState::Pending => {}
            PathState::Ready(_) => self.status = Status::Completed,
            PathState::Unreachable => {
                tracing::debug!(owner = %ctx.owner, to = ?self.to, "destination unreachable");
                self.status = Status::Failed;
            }
            // The request was dropped by a navigation reset.
            PathState::Idle => self.status = Status::Failed,
        }
    }
}
