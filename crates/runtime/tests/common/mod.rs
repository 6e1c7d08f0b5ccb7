#![allow(dead_code)]

use arena_core::{
    ArenaEnv, BotConfig, CompetitorOracle, CompetitorView, EntityId, Env, ItemConfig, ItemKind,
    ItemOracle, MemoryRecord, NavMeshOracle, Navigation, PathResponse, Personality, TargetSystem,
    Vec3, WeaponSystem, WeaponTable,
};
use bot_runtime::ai::{BotContext, ItemIgnores};
use bot_runtime::{ItemRegistry, OpenFloor};
use goal_tree::{Goal, Status};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Owns everything a [`BotContext`] borrows.
pub struct Harness {
    pub owner: EntityId,
    pub now: f64,
    pub position: Vec3,
    pub health: f32,
    pub navigation: Navigation,
    pub targets: TargetSystem,
    pub weapons: WeaponSystem,
    pub ignores: ItemIgnores,
    pub config: BotConfig,
    pub personality: Personality,
    pub rng: StdRng,
}

impl Harness {
    pub fn new() -> Self {
        let config = BotConfig::default();
        Self {
            owner: EntityId(1),
            now: 0.0,
            position: Vec3::new(5.0, 0.0, 5.0),
            health: config.max_health,
            navigation: Navigation::new(),
            targets: TargetSystem::new(),
            weapons: WeaponSystem::new(WeaponTable::default(), 0.0),
            ignores: ItemIgnores::default(),
            personality: Personality::default(),
            rng: StdRng::seed_from_u64(11),
            config,
        }
    }

    pub fn ctx<'a>(&'a mut self, env: ArenaEnv<'a>) -> BotContext<'a> {
        BotContext {
            owner: self.owner,
            now: self.now,
            position: self.position,
            health: self.health,
            max_health: self.config.max_health,
            navigation: &mut self.navigation,
            targets: &self.targets,
            weapons: &self.weapons,
            ignores: &mut self.ignores,
            env,
            config: &self.config,
            personality: &self.personality,
            rng: &mut self.rng,
        }
    }

    /// Answers every queued path request with a straight line, or as
    /// unreachable.
    pub fn answer_paths(&mut self, reachable: bool) {
        let requests: Vec<_> = self.navigation.drain_requests().collect();
        for request in requests {
            let path = reachable.then(|| vec![request.from, request.to]);
            self.navigation.deliver(PathResponse {
                ticket: request.ticket,
                path,
            });
        }
    }

    /// Makes `entity` the visible target at `position`.
    pub fn see_target(&mut self, entity: EntityId, position: Vec3) {
        let mut record = MemoryRecord::new(entity);
        record.observe(self.now, true, position);
        self.targets.update(self.position, [&record]);
    }
}

/// Oracles backing an [`ArenaEnv`] in tests.
pub struct World {
    pub floor: OpenFloor,
    pub items: ItemRegistry,
    pub snapshot: Vec<CompetitorView>,
}

impl World {
    pub fn new() -> Self {
        Self {
            floor: OpenFloor::new(60.0, 60.0, 10.0),
            items: ItemRegistry::new(ItemConfig::default()),
            snapshot: Vec::new(),
        }
    }

    pub fn with_item(mut self, kind: ItemKind, position: Vec3) -> Self {
        self.items.add(kind, position);
        self
    }

    pub fn env(&self) -> ArenaEnv<'_> {
        let nav_mesh: &dyn NavMeshOracle = &self.floor;
        let items: &dyn ItemOracle = &self.items;
        let competitors: &dyn CompetitorOracle = &self.snapshot;
        Env::with_all(nav_mesh, items, competitors)
    }
}

/// Status of a goal outside of any context call.
pub fn status<G>(goal: &G) -> Status
where
    G: for<'a> Goal<BotContext<'a>>,
{
    Goal::<BotContext<'_>>::status(goal)
}
