use goal_tree::{Goal, Status, Subgoals};

use super::{FindPath, FollowPath, NavGoal};
use crate::ai::BotContext;

/// Wanders to random regions of the navigation mesh.
///
/// Never finishes on its own: reaching a destination, or failing to, picks
/// a new one on the next frame. Only arbitration ends it.
#[derive(Debug, Default)]
pub struct Explore {
    status: Status,
    subgoals: Subgoals<NavGoal>,
}

impl Explore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> Goal<BotContext<'a>> for Explore {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn activate(&mut self, ctx: &mut BotContext<'a>) {
        self.subgoals.clear(ctx);

        let nav_mesh = match ctx.env.nav_mesh() {
            Ok(nav_mesh) => nav_mesh,
            Err(e) => {
                tracing::warn!(owner = %ctx.owner, error = %e, "cannot explore");
                self.status = Status::Failed;
                return;
            }
        };
        let Some(region) = nav_mesh.random_region(&mut *ctx.rng) else {
            tracing::warn!(owner = %ctx.owner, "navigation mesh offered no region to explore");
            self.status = Status::Failed;
            return;
        };

        tracing::trace!(owner = %ctx.owner, region = region.id.0, "exploring");
        self.subgoals
            .add(NavGoal::FindPath(FindPath::new(ctx.position, region.centroid)));
        self.subgoals.add(NavGoal::FollowPath(FollowPath::new()));
    }

    fn execute(&mut self, ctx: &mut BotContext<'a>) {
        if !self.status.is_active() {
            return;
        }
        match self.subgoals.execute(ctx) {
            Status::Completed | Status::Failed => self.status = Status::Inactive,
            status => self.status = status,
        }
    }

    fn terminate(&mut self, ctx: &mut BotContext<'a>) {
        self.subgoals.clear(ctx);
    }
}
