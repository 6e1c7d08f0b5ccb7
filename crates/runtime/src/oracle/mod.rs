//! In-process implementations of the arena oracles.
//!
//! These back a headless [`Arena`](crate::Arena): an open floor split into
//! square regions, a registry of respawning pickups and a planner that
//! answers path queries after a fixed latency. Hosts embedding bots in a
//! real engine supply their own implementations of the same traits.
mod items;
mod nav;
mod planner;

pub use items::{ItemRegistry, ItemSlot};
pub use nav::OpenFloor;
pub use planner::DeferredPlanner;
