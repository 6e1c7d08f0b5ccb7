use arena_core::Vec3;
use goal_tree::{Goal, Status};

use crate::ai::BotContext;

/// Hands the computed path to the steering capability and waits for arrival.
#[derive(Clone, Debug, Default)]
pub struct FollowPath {
    status: Status,
    to: Option<Vec3>,
    steering: bool,
}

impl FollowPath {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> Goal<BotContext<'a>> for FollowPath {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn activate(&mut self, ctx: &mut BotContext<'a>) {
        match ctx.navigation.follow_path() {
            Some(to) => {
                self.to = Some(to);
                self.steering = true;
            }
            None => self.status = Status::Failed,
        }
    }

    fn execute(&mut self, ctx: &mut BotContext<'a>) {
        if !self.status.is_active() {
            return;
        }
        if self.to.is_some_and(|to| ctx.at_position(to)) {
            self.status = Status::Completed;
        }
    }

    fn terminate(&mut self, ctx: &mut BotContext<'a>) {
        if self.steering {
            ctx.navigation.steering_mut().deactivate();
            self.steering = false;
        }
    }
}
