//! Goal-driven decision making.
//!
//! - [`context`] assembles the per-frame view goals operate on
//! - [`features`] and [`evaluators`] score candidate behaviors
//! - [`think`] arbitrates between them and drives the goal tree
//! - [`goals`] holds the goal variants
pub mod context;
pub mod evaluators;
pub mod features;
pub mod goals;
pub mod think;

pub use context::{BotContext, ItemIgnores};
pub use evaluators::Evaluator;
pub use goals::{
    Engage, Explore, FindPath, FollowPath, GetItem, GoalKind, NavGoal, TopLevelGoal,
};
pub use think::Think;
