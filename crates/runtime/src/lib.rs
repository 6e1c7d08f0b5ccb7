//! Goal-driven bots for a first-person arena.
//!
//! Each [`Bot`] perceives its opponents, remembers them for a while, picks a
//! target and a weapon, and decides what to do through a hierarchy of goals
//! arbitrated by desirability ([`ai::Think`]). Outside collaborators (the
//! navigation mesh, pickups, path planning) are reached only through the
//! `arena-core` oracle traits, so the same bots run inside an engine or in
//! the headless [`Arena`].
//!
//! Modules are organized by responsibility:
//! - [`ai`] holds evaluators, goals and the arbiter
//! - [`bot`] owns the per-bot subsystems and their update order
//! - [`arena`] hosts bots and routes their requests, messages and shots
//! - [`oracle`] provides in-process oracle implementations
pub mod ai;
pub mod arena;
pub mod bot;
pub mod error;
pub mod oracle;

pub use ai::{BotContext, Evaluator, GoalKind, ItemIgnores, Think, TopLevelGoal};
pub use arena::{Arena, DEFAULT_PATH_LATENCY};
pub use bot::{Bot, BotStats};
pub use error::{Result, RuntimeError};
pub use oracle::{DeferredPlanner, ItemRegistry, ItemSlot, OpenFloor};
