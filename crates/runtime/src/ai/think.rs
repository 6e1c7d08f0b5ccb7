//! Goal arbitration.
//!
//! [`Think`] is the root of a bot's goal tree. It owns the registered
//! evaluators and a one-slot stack holding the running top-level goal.
//!
//! # Arbitration
//!
//! [`Think::arbitrate`] scores every evaluator and lets only the winner
//! install its goal. The winner is the strictly highest score; in case of a
//! tie the evaluator registered first wins. A goal of the class already
//! running is never replaced, so repeated arbitration with an unchanged
//! winner keeps the same goal instance.
//!
//! # Execution
//!
//! Think is itself a [`Goal`]: activating it arbitrates, executing it runs
//! the top-level goal, and once that goal finishes Think drops back to
//! `Inactive` so the next frame arbitrates again.

use goal_tree::{Goal, Status, Subgoals};

use super::evaluators::Evaluator;
use super::goals::{GoalKind, TopLevelGoal};
use super::BotContext;

#[derive(Debug)]
pub struct Think {
    status: Status,
    evaluators: Vec<Evaluator>,
    goals: Subgoals<TopLevelGoal>,
}

impl Think {
    pub fn new(evaluators: impl IntoIterator<Item = Evaluator>) -> Self {
        Self {
            status: Status::Inactive,
            evaluators: evaluators.into_iter().collect(),
            goals: Subgoals::new(),
        }
    }

    pub fn add_evaluator(&mut self, evaluator: Evaluator) {
        self.evaluators.push(evaluator);
    }

    pub fn evaluators(&self) -> &[Evaluator] {
        &self.evaluators
    }

    /// The running top-level goal, if any.
    pub fn current_goal(&self) -> Option<&TopLevelGoal> {
        self.goals.current()
    }

    pub fn current_goal_kind(&self) -> Option<GoalKind> {
        self.current_goal()
            .filter(|goal| !Goal::<BotContext<'_>>::status(*goal).is_finished())
            .map(TopLevelGoal::kind)
    }

    /// Picks the most desirable evaluator and lets it set its goal.
    ///
    /// Returns the winner, or `None` when no evaluator is registered.
    pub fn arbitrate(&mut self, ctx: &mut BotContext<'_>) -> Option<Evaluator> {
        let mut best: Option<(Evaluator, f32)> = None;
        for evaluator in &self.evaluators {
            let score = evaluator.desirability(ctx);
            tracing::trace!(owner = %ctx.owner, ?evaluator, score, "evaluated");
            // In case of a tie, the first registered evaluator wins
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((*evaluator, score));
            }
        }

        let (winner, score) = best?;
        tracing::debug!(owner = %ctx.owner, ?winner, score, "arbitration winner");
        self.set_goal(winner, ctx);
        Some(winner)
    }

    /// Installs `evaluator`'s goal unless a goal of that class is running.
    fn set_goal(&mut self, evaluator: Evaluator, ctx: &mut BotContext<'_>) {
        if self.current_goal_kind() == Some(evaluator.kind()) {
            return;
        }
        self.goals.clear(ctx);
        self.goals.add(evaluator.goal());
    }

    /// Terminates the running goal and forces re-arbitration.
    pub fn clear(&mut self, ctx: &mut BotContext<'_>) {
        self.goals.clear(ctx);
        self.status = Status::Inactive;
    }
}

impl<'a> Goal<BotContext<'a>> for Think {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn activate(&mut self, ctx: &mut BotContext<'a>) {
        self.arbitrate(ctx);
    }

    fn execute(&mut self, ctx: &mut BotContext<'a>) {
        self.activate_if_inactive(ctx);

        let status = self.goals.execute(ctx);
        if status.is_finished() {
            self.status = Status::Inactive;
        }
    }

    fn terminate(&mut self, ctx: &mut BotContext<'a>) {
        self.clear(ctx);
    }
}
