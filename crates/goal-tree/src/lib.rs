//! Hierarchical goal lifecycle library for frame-stepped game agents.
//!
//! A goal is a unit of agent behavior with an explicit lifecycle. Leaf goals
//! perform one concrete action; composite goals own an ordered stack of
//! sub-goals and derive their own status from the one currently running.
//!
//! - **Frame-stepped**: `execute` is called once per simulation frame and may
//!   leave the goal `Active` for as many frames as it needs
//! - **Explicit lifecycle**: `activate` → `execute`* → `terminate`
//! - **Fail-fast composites**: a failed sub-goal fails its parent immediately
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Goal`]: Core trait for all goals, generic over a context type
//! - [`Status`]: Inactive, Active, Completed or Failed
//! - [`Subgoals`]: The stack a composite goal delegates to

pub mod goal;
pub mod status;
pub mod subgoals;

// Re-export core types for ergonomic API
pub use goal::Goal;
pub use status::Status;
pub use subgoals::Subgoals;
