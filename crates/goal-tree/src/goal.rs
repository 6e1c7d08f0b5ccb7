//! Core goal trait.
//!
//! This module defines the [`Goal`] trait, the fundamental abstraction for
//! every leaf and composite goal. The trait is generic over a context type
//! `C`, allowing goals to read and mutate the state of the agent that owns
//! them without holding a reference to it.

use crate::Status;

/// A unit of agent behavior with an activate/execute/terminate lifecycle.
///
/// Implementors store their own [`Status`] and expose it through
/// [`Goal::status`] / [`Goal::set_status`]; the provided methods build the
/// lifecycle rules on top of that.
pub trait Goal<C> {
    /// Returns the current lifecycle status.
    fn status(&self) -> Status;

    /// Overwrites the lifecycle status.
    fn set_status(&mut self, status: Status);

    /// Prepares the goal for execution.
    ///
    /// Called with the status already set to `Active`, so an activation that
    /// cannot satisfy its precondition may set `Failed` (or `Completed`)
    /// directly.
    fn activate(&mut self, ctx: &mut C);

    /// Advances the goal by one frame.
    fn execute(&mut self, ctx: &mut C);

    /// Releases whatever the goal acquired.
    ///
    /// Runs exactly once when the goal is removed, whatever status it ended
    /// in (including interruption while still `Active`).
    fn terminate(&mut self, _ctx: &mut C) {}

    /// Activates the goal if it is `Inactive`.
    ///
    /// Idempotent within one activation: calling it again while `Active`
    /// does nothing.
    fn activate_if_inactive(&mut self, ctx: &mut C) {
        if self.status().is_inactive() {
            self.set_status(Status::Active);
            self.activate(ctx);
        }
    }

    /// Sends a failed goal back to `Inactive` so the next frame rebuilds it.
    fn replan_if_failed(&mut self) {
        if self.status().is_failed() {
            self.set_status(Status::Inactive);
        }
    }
}

/// Blanket implementation for boxed goals.
///
/// This allows `Box<dyn Goal<C>>` to also implement `Goal<C>`, enabling
/// heterogeneous sub-goal stacks when a closed set of variants is not wanted.
impl<C, G> Goal<C> for Box<G>
where
    G: Goal<C> + ?Sized,
{
    #[inline]
    fn status(&self) -> Status {
        (**self).status()
    }

    #[inline]
    fn set_status(&mut self, status: Status) {
        (**self).set_status(status)
    }

    #[inline]
    fn activate(&mut self, ctx: &mut C) {
        (**self).activate(ctx)
    }

    #[inline]
    fn execute(&mut self, ctx: &mut C) {
        (**self).execute(ctx)
    }

    #[inline]
    fn terminate(&mut self, ctx: &mut C) {
        (**self).terminate(ctx)
    }
}
