//! Traits describing the world outside a bot.
//!
//! Oracles expose the navigation mesh, pickups and the competitor snapshot.
//! The [`Env`] aggregate bundles them so goals can reach what they need
//! without coupling to concrete implementations. The [`PathPlanner`] is not
//! part of the aggregate: it is mutable and driven by whoever hosts the bots,
//! which routes requests out of and responses into each bot.
mod competitors;
mod error;
mod items;
mod nav;
mod planner;

pub use competitors::{CompetitorOracle, CompetitorView};
pub use error::OracleError;
pub use items::{ClosestItem, ItemOracle};
pub use nav::{NavMeshOracle, Region, RegionId};
pub use planner::{PathPlanner, PathRequest, PathResponse, PathTicket};

/// Aggregates read-only oracles a bot consults during its update.
#[derive(Debug)]
pub struct Env<'a, N, I, C>
where
    N: NavMeshOracle + ?Sized,
    I: ItemOracle + ?Sized,
    C: CompetitorOracle + ?Sized,
{
    nav_mesh: Option<&'a N>,
    items: Option<&'a I>,
    competitors: Option<&'a C>,
}

pub type ArenaEnv<'a> =
    Env<'a, dyn NavMeshOracle + 'a, dyn ItemOracle + 'a, dyn CompetitorOracle + 'a>;

impl<N, I, C> Clone for Env<'_, N, I, C>
where
    N: NavMeshOracle + ?Sized,
    I: ItemOracle + ?Sized,
    C: CompetitorOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, I, C> Copy for Env<'_, N, I, C>
where
    N: NavMeshOracle + ?Sized,
    I: ItemOracle + ?Sized,
    C: CompetitorOracle + ?Sized,
{
}

impl<'a, N, I, C> Env<'a, N, I, C>
where
    N: NavMeshOracle + ?Sized,
    I: ItemOracle + ?Sized,
    C: CompetitorOracle + ?Sized,
{
    pub fn new(nav_mesh: Option<&'a N>, items: Option<&'a I>, competitors: Option<&'a C>) -> Self {
        Self {
            nav_mesh,
            items,
            competitors,
        }
    }

    pub fn with_all(nav_mesh: &'a N, items: &'a I, competitors: &'a C) -> Self {
        Self::new(Some(nav_mesh), Some(items), Some(competitors))
    }

    pub fn empty() -> Self {
        Self {
            nav_mesh: None,
            items: None,
            competitors: None,
        }
    }

    /// Returns the NavMeshOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::NavMeshNotAvailable` if no nav mesh was provided.
    pub fn nav_mesh(&self) -> Result<&'a N, OracleError> {
        self.nav_mesh.ok_or(OracleError::NavMeshNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the CompetitorOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CompetitorsNotAvailable` if no snapshot was provided.
    pub fn competitors(&self) -> Result<&'a C, OracleError> {
        self.competitors.ok_or(OracleError::CompetitorsNotAvailable)
    }
}

impl<'a, N, I, C> Env<'a, N, I, C>
where
    N: NavMeshOracle + 'a,
    I: ItemOracle + 'a,
    C: CompetitorOracle + 'a,
{
    /// Converts this environment into the trait-object based [`ArenaEnv`].
    pub fn into_arena_env(self) -> ArenaEnv<'a> {
        let nav_mesh: Option<&'a dyn NavMeshOracle> = self.nav_mesh.map(|n| n as _);
        let items: Option<&'a dyn ItemOracle> = self.items.map(|i| i as _);
        let competitors: Option<&'a dyn CompetitorOracle> = self.competitors.map(|c| c as _);
        Env::new(nav_mesh, items, competitors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntityId;
    use glam::Vec3;

    #[test]
    fn missing_oracles_report_errors() {
        let env = ArenaEnv::empty();
        assert_eq!(env.nav_mesh().err(), Some(OracleError::NavMeshNotAvailable));
        assert_eq!(env.items().err(), Some(OracleError::ItemsNotAvailable));
        assert_eq!(
            env.competitors().err(),
            Some(OracleError::CompetitorsNotAvailable)
        );
    }

    #[test]
    fn competitor_snapshot_lookup() {
        let snapshot = vec![CompetitorView {
            id: EntityId(3),
            position: Vec3::ZERO,
            head_position: Vec3::Y,
            alive: true,
        }];
        let competitors: &dyn CompetitorOracle = &snapshot;
        let env: ArenaEnv<'_> = Env::new(None, None, Some(competitors));
        let view = env
            .competitors()
            .ok()
            .and_then(|c| c.competitor(EntityId(3)));
        assert_eq!(view.map(|v| v.head_position), Some(Vec3::Y));
    }
}
