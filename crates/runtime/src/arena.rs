//! Headless host that steps a set of bots against the in-process oracles.
//!
//! [`Arena::step`] runs one frame in a fixed order:
//!
//! 1. planner responses are handed to their owners (stale ones are dropped
//!    by the bot's navigation)
//! 2. the competitor snapshot is rebuilt from the start-of-frame state
//! 3. every bot runs its update against the shared environment
//! 4. path requests go to the planner, telegrams to inboxes, shots are
//!    traced and turned into hit telegrams
//! 5. bots move along their paths and collect items in reach
//! 6. kills are credited and dead bots respawn
use std::sync::Arc;

use arena_core::{
    ArenaConfig, ArenaEnv, ArenaLayout, CompetitorOracle, CompetitorView, EntityId, Env,
    ItemOracle, LifeStatus, Message, NavMeshOracle, Obstacle, PathPlanner, PathResponse,
    Personality, Shot, Telegram, Vec3,
};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::bot::Bot;
use crate::error::{Result, RuntimeError};
use crate::oracle::{DeferredPlanner, ItemRegistry, OpenFloor};

/// Seconds the default planner takes to answer a path query.
pub const DEFAULT_PATH_LATENCY: f64 = 0.1;

pub struct Arena {
    config: Arc<ArenaConfig>,
    layout: ArenaLayout,
    floor: OpenFloor,
    items: ItemRegistry,
    planner: Box<dyn PathPlanner>,
    bots: Vec<Bot>,
    snapshot: Vec<CompetitorView>,

    now: f64,
    frame: u64,
    next_id: u32,
    rng: StdRng,

    // Per-frame scratch buffers.
    responses: Vec<PathResponse>,
    telegrams: Vec<Telegram>,
    shots: Vec<(EntityId, Shot)>,
}

impl Arena {
    /// Builds an empty arena.
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not validate or the layout has no
    /// spawn points.
    pub fn new(config: ArenaConfig, layout: ArenaLayout, seed: u64) -> Result<Self> {
        config.validate()?;
        if layout.spawn_points.is_empty() {
            return Err(RuntimeError::NoSpawnPoints);
        }

        let floor = OpenFloor::from_layout(&layout);
        let items = ItemRegistry::from_layout(&layout, config.items.clone());
        Ok(Self {
            config: Arc::new(config),
            floor,
            items,
            planner: Box::new(DeferredPlanner::new(floor, DEFAULT_PATH_LATENCY)),
            layout,
            bots: Vec::new(),
            snapshot: Vec::new(),
            now: 0.0,
            frame: 0,
            next_id: 1,
            rng: StdRng::seed_from_u64(seed),
            responses: Vec::new(),
            telegrams: Vec::new(),
            shots: Vec::new(),
        })
    }

    /// Replaces the path planner.
    pub fn with_planner(mut self, planner: impl PathPlanner + 'static) -> Self {
        self.planner = Box::new(planner);
        self
    }

    /// Adds a bot at the next spawn point in rotation.
    pub fn spawn_bot(&mut self, personality: Personality) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;

        let spawn = self.layout.spawn_points[self.bots.len() % self.layout.spawn_points.len()];
        let mut bot = Bot::new(
            id,
            Arc::clone(&self.config),
            personality,
            spawn,
            self.rng.next_u64(),
        );
        bot.set_position(spawn, self.floor.region_at(spawn));
        for obstacle in &self.layout.obstacles {
            bot.add_obstacle(*obstacle);
        }

        tracing::info!(bot = %id, personality = %bot.personality().name, position = ?spawn, "bot spawned");
        self.bots.push(bot);
        id
    }

    /// Advances the simulation by `delta` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidDelta`] unless `delta` is positive and
    /// finite.
    pub fn step(&mut self, delta: f64) -> Result<()> {
        if !(delta > 0.0 && delta.is_finite()) {
            return Err(RuntimeError::InvalidDelta(delta));
        }
        self.now += delta;
        self.frame += 1;
        let now = self.now;

        self.deliver_paths(now);
        self.rebuild_snapshot();

        {
            let nav_mesh: &dyn NavMeshOracle = &self.floor;
            let items: &dyn ItemOracle = &self.items;
            let competitors: &dyn CompetitorOracle = &self.snapshot;
            let env: ArenaEnv<'_> = Env::with_all(nav_mesh, items, competitors);
            for bot in &mut self.bots {
                bot.update(now, env);
            }
        }

        self.route_outputs();
        self.resolve_shots();
        self.move_and_collect(delta, now);
        self.settle_deaths(now);
        Ok(())
    }

    /// Runs `frames` fixed steps.
    pub fn run(&mut self, frames: u64, delta: f64) -> Result<()> {
        for _ in 0..frames {
            self.step(delta)?;
        }
        Ok(())
    }

    fn deliver_paths(&mut self, now: f64) {
        self.responses.clear();
        self.planner.poll(now, &mut self.responses);
        for response in self.responses.drain(..) {
            let owner = response.ticket.owner;
            match self.bots.iter_mut().find(|bot| bot.id() == owner) {
                Some(bot) => {
                    bot.navigation_mut().deliver(response);
                }
                None => tracing::debug!(bot = %owner, "path response for unknown bot"),
            }
        }
    }

    fn rebuild_snapshot(&mut self) {
        self.snapshot.clear();
        self.snapshot
            .extend(self.bots.iter().map(|bot| CompetitorView {
                id: bot.id(),
                position: bot.position(),
                head_position: bot.head_position(),
                alive: bot.is_alive(),
            }));
    }

    fn route_outputs(&mut self) {
        for bot in &mut self.bots {
            for request in bot.navigation_mut().drain_requests() {
                self.planner.submit(request);
            }
            self.telegrams.extend(bot.drain_outbox());
            let shooter = bot.id();
            self.shots
                .extend(bot.drain_shots().map(|shot| (shooter, shot)));
        }

        for telegram in self.telegrams.drain(..) {
            match self.bots.iter_mut().find(|bot| bot.id() == telegram.receiver) {
                Some(bot) => bot.deliver_telegram(telegram),
                None => tracing::debug!(receiver = %telegram.receiver, "dropping telegram"),
            }
        }
    }

    fn resolve_shots(&mut self) {
        let radius = self.config.bot.bounding_radius;
        for (shooter, shot) in std::mem::take(&mut self.shots) {
            let Some(attacker_position) = self
                .bots
                .iter()
                .find(|bot| bot.id() == shooter)
                .map(Bot::position)
            else {
                continue;
            };
            let Some(victim) = trace_shot(&shot, shooter, &self.bots, &self.layout.obstacles, radius)
            else {
                continue;
            };

            tracing::debug!(shooter = %shooter, victim = %victim, weapon = %shot.weapon, "shot hit");
            let hit = Telegram::new(
                shooter,
                victim,
                Message::Hit {
                    damage: shot.damage,
                    attacker_position,
                },
            );
            if let Some(bot) = self.bots.iter_mut().find(|bot| bot.id() == victim) {
                bot.deliver_telegram(hit);
            }
        }
    }

    fn move_and_collect(&mut self, delta: f64, now: f64) {
        for bot in &mut self.bots {
            bot.steer(delta, &self.floor);
            if !bot.is_alive() {
                continue;
            }
            let Some((item, kind)) = self
                .items
                .in_reach(bot.position())
                .map(|slot| (slot.id, slot.kind))
            else {
                continue;
            };
            if bot.pick_up(kind) {
                self.items.collect(item, now);
            }
        }
        self.items.update(now);
    }

    fn settle_deaths(&mut self, now: f64) {
        for index in 0..self.bots.len() {
            let victim = self.bots[index].id();
            let Some(killer) = self.bots[index].take_killer() else {
                continue;
            };
            if killer == victim {
                continue;
            }
            if let Some(bot) = self.bots.iter_mut().find(|bot| bot.id() == killer) {
                bot.record_kill();
                tracing::info!(killer = %killer, victim = %victim, "kill");
            }
        }

        for bot in &mut self.bots {
            if bot.status() != LifeStatus::Dead {
                continue;
            }
            let index = self.rng.gen_range(0..self.layout.spawn_points.len());
            let spawn = self.layout.spawn_points[index];
            bot.reset(spawn, now);
            bot.set_position(spawn, self.floor.region_at(spawn));
        }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn layout(&self) -> &ArenaLayout {
        &self.layout
    }

    pub fn floor(&self) -> &OpenFloor {
        &self.floor
    }

    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    pub fn planner(&self) -> &dyn PathPlanner {
        self.planner.as_ref()
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn bots(&self) -> &[Bot] {
        &self.bots
    }

    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownBot`] if no bot has this id.
    pub fn bot(&self, id: EntityId) -> Result<&Bot> {
        self.bots
            .iter()
            .find(|bot| bot.id() == id)
            .ok_or(RuntimeError::UnknownBot(id))
    }

    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownBot`] if no bot has this id.
    pub fn bot_mut(&mut self, id: EntityId) -> Result<&mut Bot> {
        self.bots
            .iter_mut()
            .find(|bot| bot.id() == id)
            .ok_or(RuntimeError::UnknownBot(id))
    }
}

/// Nearest live bot other than the shooter whose head sphere the shot
/// crosses before any obstacle.
fn trace_shot(
    shot: &Shot,
    shooter: EntityId,
    bots: &[Bot],
    obstacles: &[Obstacle],
    radius: f32,
) -> Option<EntityId> {
    let direction = shot.direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return None;
    }

    let (victim, distance) = bots
        .iter()
        .filter(|bot| bot.id() != shooter && bot.is_alive())
        .filter_map(|bot| {
            ray_sphere(shot.origin, direction, bot.head_position(), radius)
                .map(|distance| (bot.id(), distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))?;

    let impact = shot.origin + direction * distance;
    if obstacles
        .iter()
        .any(|obstacle| obstacle.intersects_segment(shot.origin, impact))
    {
        return None;
    }
    Some(victim)
}

/// Distance along a unit ray to the first intersection with a sphere.
fn ray_sphere(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let offset = origin - center;
    let b = offset.dot(direction);
    let c = offset.length_squared() - radius * radius;
    if c > 0.0 && b > 0.0 {
        return None;
    }
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    Some((-b - discriminant.sqrt()).max(0.0))
}
