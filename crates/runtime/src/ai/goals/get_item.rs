use arena_core::{ItemId, ItemKind};
use goal_tree::{Goal, Status, Subgoals};

use super::{FindPath, FollowPath, NavGoal};
use crate::ai::BotContext;

/// Walks to the closest active item of one kind.
///
/// Fails right away when no such item exists (and makes the bot ignore the
/// kind for a while), and fails as soon as the chosen item is taken by
/// someone else. A failed path is rebuilt a bounded number of times.
#[derive(Debug)]
pub struct GetItem {
    status: Status,
    kind: ItemKind,
    item: Option<ItemId>,
    replans: u32,
    subgoals: Subgoals<NavGoal>,
}

impl GetItem {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            status: Status::Inactive,
            kind,
            item: None,
            replans: 0,
            subgoals: Subgoals::new(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Item chosen by the last activation.
    pub fn item(&self) -> Option<ItemId> {
        self.item
    }

    pub fn subgoals(&self) -> &Subgoals<NavGoal> {
        &self.subgoals
    }
}

impl<'a> Goal<BotContext<'a>> for GetItem {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn activate(&mut self, ctx: &mut BotContext<'a>) {
        self.subgoals.clear(ctx);
        self.item = None;

        let items = match ctx.env.items() {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(owner = %ctx.owner, error = %e, kind = %self.kind, "cannot look for items");
                self.status = Status::Failed;
                return;
            }
        };

        let Some(closest) = items.closest_item(ctx.position, self.kind) else {
            let until = ctx.now + ctx.config.goal.item_ignore_time;
            ctx.ignores.ignore(self.kind, until);
            tracing::debug!(owner = %ctx.owner, kind = %self.kind, until, "no item available");
            self.status = Status::Failed;
            return;
        };

        self.item = Some(closest.item);
        self.subgoals
            .add(NavGoal::FindPath(FindPath::new(ctx.position, closest.position)));
        self.subgoals.add(NavGoal::FollowPath(FollowPath::new()));
    }

    fn execute(&mut self, ctx: &mut BotContext<'a>) {
        if !self.status.is_active() {
            return;
        }

        let available = match (self.item, ctx.env.items()) {
            (Some(item), Ok(items)) => items.is_active(item),
            _ => false,
        };
        if !available {
            tracing::debug!(owner = %ctx.owner, kind = %self.kind, "item no longer available");
            self.status = Status::Failed;
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
