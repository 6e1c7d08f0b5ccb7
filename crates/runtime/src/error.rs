//! Errors surfaced by the runtime API.
//!
//! Bot behavior never fails with an error: goals report `Failed` and the next
//! arbitration recovers. These errors cover misuse of the hosting API and
//! data the arena cannot be built from.
use arena_core::{ConfigError, EntityId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no bot with id {0}")]
    UnknownBot(EntityId),

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("arena layout has no spawn points")]
    NoSpawnPoints,

    #[error("frame delta must be positive and finite, got {0}")]
    InvalidDelta(f64),
}
