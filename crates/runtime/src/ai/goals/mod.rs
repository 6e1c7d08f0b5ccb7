//! Goal variants driven by [`crate::ai::Think`].
//!
//! Top-level goals are composites over a [`goal_tree::Subgoals`] stack of
//! navigation leaves. Both layers are closed enums dispatching to the
//! variant structs, so the goal tree is statically typed end to end.
mod engage;
mod explore;
mod find_path;
mod follow_path;
mod get_item;

pub use engage::Engage;
pub use explore::Explore;
pub use find_path::FindPath;
pub use follow_path::FollowPath;
pub use get_item::GetItem;

use goal_tree::{Goal, Status};

use super::BotContext;

/// Behavior class of a top-level goal.
///
/// Arbitration only replaces the running goal when the winner belongs to a
/// different class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum GoalKind {
    Explore,
    GetItem,
    Engage,
}

/// Goals installed by arbitration.
#[derive(Debug)]
pub enum TopLevelGoal {
    Explore(Explore),
    GetItem(GetItem),
    Engage(Engage),
}

impl TopLevelGoal {
    pub fn kind(&self) -> GoalKind {
        match self {
            TopLevelGoal::Explore(_) => GoalKind::Explore,
            TopLevelGoal::GetItem(_) => GoalKind::GetItem,
            TopLevelGoal::Engage(_) => GoalKind::Engage,
        }
    }
}

/// Navigation leaves used by every top-level goal.
#[derive(Clone, Debug)]
pub enum NavGoal {
    FindPath(FindPath),
    FollowPath(FollowPath),
}

macro_rules! dispatch {
    ($goal:expr, $inner:ident => $body:expr, $($variant:path),+) => {
        match $goal {
            $($variant($inner) => $body,)+
        }
    };
}

impl<'a> Goal<BotContext<'a>> for TopLevelGoal {
    fn status(&self) -> Status {
        dispatch!(self, g => g.status(), TopLevelGoal::Explore, TopLevelGoal::GetItem, TopLevelGoal::Engage)
    }

    fn set_status(&mut self, status: Status) {
        dispatch!(self, g => g.set_status(status), TopLevelGoal::Explore, TopLevelGoal::GetItem, TopLevelGoal::Engage)
    }

    fn activate(&mut self, ctx: &mut BotContext<'a>) {
        tracing::debug!(owner = %ctx.owner, goal = %self.kind(), "activating goal");
        dispatch!(self, g => g.activate(ctx), TopLevelGoal::Explore, TopLevelGoal::GetItem, TopLevelGoal::Engage)
    }

    fn execute(&mut self, ctx: &mut BotContext<'a>) {
        dispatch!(self, g => g.execute(ctx), TopLevelGoal::Explore, TopLevelGoal::GetItem, TopLevelGoal::Engage)
    }

    fn terminate(&mut self, ctx: &mut BotContext<'a>) {
        tracing::debug!(owner = %ctx.owner, goal = %self.kind(), status = ?self.status(), "terminating goal");
        dispatch!(self, g => g.terminate(ctx), TopLevelGoal::Explore, TopLevelGoal::GetItem, TopLevelGoal::Engage)
    }
}

impl<'a> Goal<BotContext<'a>> for NavGoal {
    fn status(&self) -> Status {
        dispatch!(self, g => g.status(), NavGoal::FindPath, NavGoal::FollowPath)
    }

    fn set_status(&mut self, status: Status) {
        dispatch!(self, g => g.set_status(status), NavGoal::FindPath, NavGoal::FollowPath)
    }

    fn activate(&mut self, ctx: &mut BotContext<'a>) {
        dispatch!(self, g => g.activate(ctx), NavGoal::FindPath, NavGoal::FollowPath)
    }

    fn execute(&mut self, ctx: &mut BotContext<'a>) {
        dispatch!(self, g => g.execute(ctx), NavGoal::FindPath, NavGoal::FollowPath)
    }

    fn terminate(&mut self, ctx: &mut BotContext<'a>) {
        dispatch!(self, g => g.terminate(ctx), NavGoal::FindPath, NavGoal::FollowPath)
    }
}
