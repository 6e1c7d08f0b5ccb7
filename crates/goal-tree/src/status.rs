//! Lifecycle status of a goal.

/// The lifecycle state of a goal.
///
/// # Transitions
///
/// ```text
/// Inactive ──activate──▶ Active ──execute──▶ Completed | Failed
///     ▲                                           │
///     └──────────── replan (composites) ──────────┘
/// ```
///
/// `Completed` and `Failed` are terminal for a single activation. Only an
/// explicit replan sends a goal back to `Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// The goal has not been activated yet (or is waiting to be rebuilt).
    #[default]
    Inactive,

    /// The goal has been activated and is being executed every frame.
    Active,

    /// The goal reached its objective.
    Completed,

    /// The goal cannot reach its objective.
    Failed,
}

impl Status {
    /// Returns `true` if this status is `Inactive`.
    #[inline]
    pub fn is_inactive(self) -> bool {
        matches!(self, Status::Inactive)
    }

    /// Returns `true` if this status is `Active`.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Status::Active)
    }

    /// Returns `true` if this status is `Completed`.
    #[inline]
    pub fn is_completed(self) -> bool {
        matches!(self, Status::Completed)
    }

    /// Returns `true` if this status is `Failed`.
    #[inline]
    pub fn is_failed(self) -> bool {
        matches!(self, Status::Failed)
    }

    /// Returns `true` if the goal reached a terminal state.
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, Status::Completed | Status::Failed)
    }
}
