//! Deterministic building blocks for arena bots.
//!
//! `arena-core` defines the per-bot subsystems that sit below goal
//! arbitration (perception memory, target selection, weapon handling, rate
//! limiting, navigation bookkeeping) together with the configuration they are
//! built from and the oracle traits through which a bot sees the outside
//! world. Nothing here decides *what* a bot wants to do; that lives in the
//! runtime crate.
//!
//! Modules are organized by responsibility:
//! - [`regulator`] rate limits subsystems in simulated time
//! - [`memory`] and [`vision`] implement perception
//! - [`target`] selects the opponent to engage
//! - [`weapon`] owns ammunition, reload and firing state
//! - [`navigation`] owns the path slot and the follow-path capability
//! - [`env`] exposes the external collaborators as traits
pub mod config;
pub mod env;
pub mod error;
pub mod layout;
pub mod memory;
pub mod message;
pub mod navigation;
pub mod personality;
pub mod regulator;
pub mod target;
pub mod types;
pub mod vision;
pub mod weapon;

pub use glam::Vec3;

pub use config::{
    ArenaConfig, BotConfig, EvaluatorTuning, GoalConfig, ItemConfig, MemoryConfig,
    NavigationConfig, VisionConfig, WeaponSelectionConfig, WeaponSpec, WeaponTable,
};
pub use env::{
    ArenaEnv, ClosestItem, CompetitorOracle, CompetitorView, Env, ItemOracle, NavMeshOracle,
    OracleError, PathPlanner, PathRequest, PathResponse, PathTicket, Region, RegionId,
};
pub use error::ConfigError;
pub use layout::{ArenaLayout, ItemPlacement};
pub use memory::{MemoryRecord, MemorySystem};
pub use message::{Message, Telegram};
pub use navigation::{FollowPathSteering, Navigation, PathDelivery, PathState};
pub use personality::Personality;
pub use regulator::Regulator;
pub use target::TargetSystem;
pub use types::{EntityId, ItemId, ItemKind, LifeStatus};
pub use vision::{Obstacle, Vision};
pub use weapon::{Shot, Weapon, WeaponKind, WeaponStatus, WeaponSystem};
