//! Oracle access errors.

/// Errors that occur when a bot reaches for a collaborator the environment
/// does not provide.
///
/// A goal that hits one of these fails and logs a warning; the next
/// arbitration cycle picks something else to do.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// NavMeshOracle is not available in the environment.
    #[error("NavMeshOracle not available")]
    NavMeshNotAvailable,

    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    /// CompetitorOracle is not available in the environment.
    #[error("CompetitorOracle not available")]
    CompetitorsNotAvailable,

    /// The navigation mesh has no region to offer.
    #[error("navigation mesh has no regions")]
    NoRegions,
}
