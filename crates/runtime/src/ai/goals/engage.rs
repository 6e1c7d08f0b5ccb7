use goal_tree::{Goal, Status, Subgoals};

use super::{FindPath, FollowPath, NavGoal};
use crate::ai::BotContext;

/// Closes in on the current target while it stays shootable.
///
/// Shooting is not part of this goal; the weapon system fires on its own
/// whenever the target is shootable.
#[derive(Debug, Default)]
pub struct Engage {
    status: Status,
    replans: u32,
    subgoals: Subgoals<NavGoal>,
}

impl Engage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> Goal<BotContext<'a>> for Engage {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn activate(&mut self, ctx: &mut BotContext<'a>) {
        self.subgoals.clear(ctx);

        let Some(to) = ctx.targets.last_sensed_position() else {
            self.status = Status::Failed;
            return;
        };
        self.subgoals.add(NavGoal::FindPath(FindPath::new(ctx.position, to)));
        self.subgoals.add(NavGoal::FollowPath(FollowPath::new()));
    }

    fn execute(&mut self, ctx: &mut BotContext<'a>) {
        if !self.status.is_active() {
            return;
        }

        if !ctx.targets.is_target_shootable() {
            self.status = Status::Completed;
            return;
        }

        self.status = self.subgoals.execute(ctx);
        if self.status.is_failed() && self.replans < ctx.config.goal.max_replans {
            self.replans += 1;
            self.replan_if_failed();
        }
    }

    fn terminate(&mut self, ctx: &mut BotContext<'a>) {
        self.subgoals.clear(ctx);
    }
}
