//! Sub-goal stack for composite goals.
//!
//! A composite goal owns a [`Subgoals`] stack and forwards its own `execute`
//! to [`Subgoals::execute`], deriving its status from the result. The stack
//! is generic over the goal type so a composite can hold a closed enum of
//! goal variants (static dispatch) or `Box<dyn Goal<C>>` (dynamic dispatch).

use crate::{Goal, Status};

/// Ordered stack of sub-goals, most recently added first.
///
/// Goals run in the order they were added: the first goal added is the
/// current one, and [`Subgoals::add`] places new goals behind every goal
/// already queued.
///
/// # Semantics
///
/// Each call to [`Subgoals::execute`]:
/// - Removes (and terminates) every finished goal at the top of the stack
/// - Activates the current goal if needed and, if it is still `Active`,
///   executes it
/// - Returns `Active` when the current goal completed but others remain, so
///   only one sub-goal advances per frame
/// - Returns `Failed` as soon as the current goal fails (fail-fast, siblings
///   are never tried)
/// - Returns `Completed` once the stack is exhausted
///
/// At most one sub-goal is `Active` at any time.
#[derive(Debug)]
pub struct Subgoals<G> {
    /// Stored most-recent-first; the current goal is the last element.
    stack: Vec<G>,
}

impl<G> Subgoals<G> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Queues a goal behind every goal already in the stack.
    pub fn add(&mut self, goal: G) {
        self.stack.insert(0, goal);
    }

    /// Returns the goal that runs next, if any.
    pub fn current(&self) -> Option<&G> {
        self.stack.last()
    }

    /// Returns the goal that runs next, if any.
    pub fn current_mut(&mut self) -> Option<&mut G> {
        self.stack.last_mut()
    }

    /// Number of queued goals (including finished ones not yet removed).
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if no goals are queued.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterates goals in execution order (current first).
    pub fn iter(&self) -> impl Iterator<Item = &G> {
        self.stack.iter().rev()
    }
}

impl<G> Subgoals<G> {
    /// Terminates every queued goal and empties the stack.
    pub fn clear<C>(&mut self, ctx: &mut C)
    where
        G: Goal<C>,
    {
        while let Some(mut goal) = self.stack.pop() {
            goal.terminate(ctx);
        }
    }

    /// Advances the current sub-goal by one frame and reports the aggregate status.
    pub fn execute<C>(&mut self, ctx: &mut C) -> Status
    where
        G: Goal<C>,
    {
        // Drop finished goals from the top of the stack
        while self
            .stack
            .last()
            .is_some_and(|goal| goal.status().is_finished())
        {
            if let Some(mut finished) = self.stack.pop() {
                finished.terminate(ctx);
            }
        }

        let remaining = self.stack.len();
        let Some(current) = self.stack.last_mut() else {
            return Status::Completed;
        };

        current.activate_if_inactive(ctx);
        if current.status().is_active() {
            current.execute(ctx);
        }

        match current.status() {
            // Keep the parent running so the next sibling starts next frame
            Status::Completed if remaining > 1 => Status::Active,
            status => status,
        }
    }
}

impl<G> Default for Subgoals<G> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestContext {
        log: Vec<String>,
    }

    /// Leaf goal that finishes with `outcome` after `frames` executions.
    struct Countdown {
        name: &'static str,
        status: Status,
        frames: u32,
        outcome: Status,
    }

    impl Countdown {
        fn new(name: &'static str, frames: u32, outcome: Status) -> Self {
            Self {
                name,
                status: Status::Inactive,
                frames,
                outcome,
            }
        }
    }

    impl Goal<TestContext> for Countdown {
        fn status(&self) -> Status {
            self.status
        }

        fn set_status(&mut self, status: Status) {
            self.status = status;
        }

        fn activate(&mut self, ctx: &mut TestContext) {
            ctx.log.push(format!("activate {}", self.name));
        }

        fn execute(&mut self, ctx: &mut TestContext) {
            ctx.log.push(format!("execute {}", self.name));
            self.frames = self.frames.saturating_sub(1);
            if self.frames == 0 {
                self.status = self.outcome;
            }
        }

        fn terminate(&mut self, ctx: &mut TestContext) {
            ctx.log.push(format!("terminate {}", self.name));
        }
    }

    #[test]
    fn goals_run_in_insertion_order_one_per_frame() {
        let mut subgoals = Subgoals::new();
        subgoals.add(Countdown::new("find", 1, Status::Completed));
        subgoals.add(Countdown::new("follow", 1, Status::Completed));
        let mut ctx = TestContext::default();

        // Frame 1: "find" completes, siblings remain
        assert_eq!(subgoals.execute(&mut ctx), Status::Active);
        // Frame 2: "find" is removed, "follow" runs and completes
        assert_eq!(subgoals.execute(&mut ctx), Status::Completed);

        assert_eq!(
            ctx.log,
            vec![
                "activate find",
                "execute find",
                "terminate find",
                "activate follow",
                "execute follow",
            ]
        );
    }

    #[test]
    fn failure_is_fail_fast() {
        let mut subgoals = Subgoals::new();
        subgoals.add(Countdown::new("find", 1, Status::Failed));
        subgoals.add(Countdown::new("follow", 1, Status::Completed));
        let mut ctx = TestContext::default();

        assert_eq!(subgoals.execute(&mut ctx), Status::Failed);
        assert!(!ctx.log.iter().any(|line| line.contains("follow")));
    }

    #[test]
    fn exhausted_stack_is_completed() {
        let mut subgoals: Subgoals<Countdown> = Subgoals::new();
        let mut ctx = TestContext::default();
        assert_eq!(subgoals.execute(&mut ctx), Status::Completed);
    }

    #[test]
    fn only_current_goal_is_active() {
        let mut subgoals = Subgoals::new();
        subgoals.add(Countdown::new("a", 3, Status::Completed));
        subgoals.add(Countdown::new("b", 3, Status::Completed));
        let mut ctx = TestContext::default();

        subgoals.execute(&mut ctx);
        let active = subgoals
            .iter()
            .filter(|goal| goal.status().is_active())
            .count();
        assert_eq!(active, 1);
        assert_eq!(subgoals.current().map(|goal| goal.name), Some("a"));
    }

    #[test]
    fn clear_terminates_every_goal() {
        let mut subgoals = Subgoals::new();
        subgoals.add(Countdown::new("a", 3, Status::Completed));
        subgoals.add(Countdown::new("b", 3, Status::Completed));
        let mut ctx = TestContext::default();

        subgoals.execute(&mut ctx);
        subgoals.clear(&mut ctx);

        assert!(subgoals.is_empty());
        assert!(ctx.log.contains(&"terminate a".to_string()));
        assert!(ctx.log.contains(&"terminate b".to_string()));
    }

    #[test]
    fn goal_failing_on_activation_is_not_executed() {
        struct FailsOnActivate(Status);
        impl Goal<TestContext> for FailsOnActivate {
            fn status(&self) -> Status {
                self.0
            }
            fn set_status(&mut self, status: Status) {
                self.0 = status;
            }
            fn activate(&mut self, _ctx: &mut TestContext) {
                self.0 = Status::Failed;
            }
            fn execute(&mut self, ctx: &mut TestContext) {
                ctx.log.push("executed".to_string());
            }
        }

        let mut subgoals = Subgoals::new();
        subgoals.add(FailsOnActivate(Status::Inactive));
        let mut ctx = TestContext::default();

        assert_eq!(subgoals.execute(&mut ctx), Status::Failed);
        assert!(ctx.log.is_empty());
    }
}
