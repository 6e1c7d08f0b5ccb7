//! Data-driven content and loaders.
//!
//! This crate reads the data files an arena session is built from:
//! - Arena configuration: bot tunables, weapon table, item rules (TOML)
//! - Bot personalities (RON)
//! - Arena layouts: floor, spawn points, pickups, cover (RON)
//!
//! All loaders deserialize arena-core types directly through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LayoutLoader, PersonalityLoader};
