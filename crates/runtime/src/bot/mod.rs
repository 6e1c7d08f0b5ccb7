//! A single autonomous competitor.
//!
//! [`Bot`] owns every per-bot subsystem and runs them in a fixed order each
//! frame (see [`Bot::update`]). It only sees the rest of the arena through
//! the [`ArenaEnv`] it is handed and talks back through outboxes the host
//! drains after the update: path requests, telegrams and shots.
mod locomotion;
mod messages;
mod perception;

use std::collections::VecDeque;
use std::sync::Arc;

use arena_core::{
    ArenaConfig, ArenaEnv, EntityId, ItemKind, LifeStatus, MemoryRecord, MemorySystem,
    Navigation, Obstacle, Personality, RegionId, Regulator, Shot, TargetSystem, Telegram, Vec3,
    Vision, WeaponSystem,
};
use goal_tree::Goal;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ai::{BotContext, Evaluator, GoalKind, ItemIgnores, Think};

/// Rate limiters of the throttled subsystems.
#[derive(Clone, Debug)]
struct Regulators {
    vision: Regulator,
    memory: Regulator,
    arbitration: Regulator,
    weapon_selection: Regulator,
}

impl Regulators {
    fn new(config: &ArenaConfig) -> Self {
        let bot = &config.bot;
        Self {
            vision: Regulator::new(bot.vision.update_frequency),
            memory: Regulator::new(bot.memory.update_frequency),
            arbitration: Regulator::new(bot.goal.arbitration_frequency),
            weapon_selection: Regulator::new(bot.weapon.update_frequency),
        }
    }

    fn reset(&mut self) {
        self.vision.reset();
        self.memory.reset();
        self.arbitration.reset();
        self.weapon_selection.reset();
    }
}

/// Counters reported at the end of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BotStats {
    pub kills: u32,
    pub deaths: u32,
    pub shots_fired: u32,
    pub hits_taken: u32,
}

pub struct Bot {
    id: EntityId,
    config: Arc<ArenaConfig>,
    personality: Personality,

    position: Vec3,
    forward: Vec3,
    region: Option<RegionId>,
    health: f32,
    status: LifeStatus,
    end_time_dying: f64,

    brain: Think,
    memory: MemorySystem,
    targets: TargetSystem,
    weapons: WeaponSystem,
    navigation: Navigation,
    vision: Vision,
    ignores: ItemIgnores,
    regulators: Regulators,

    inbox: VecDeque<Telegram>,
    outbox: Vec<Telegram>,
    shots: Vec<Shot>,
    killer: Option<EntityId>,
    stats: BotStats,

    rng: StdRng,
    valid_records: Vec<MemoryRecord>,
}

impl Bot {
    /// Creates a live bot at `spawn` with the default evaluator set.
    pub fn new(
        id: EntityId,
        config: Arc<ArenaConfig>,
        personality: Personality,
        spawn: Vec3,
        seed: u64,
    ) -> Self {
        let bot = &config.bot;
        Self {
            id,
            personality,
            position: spawn,
            forward: Vec3::Z,
            region: None,
            health: bot.max_health,
            status: LifeStatus::Alive,
            end_time_dying: f64::INFINITY,
            brain: Think::new(Evaluator::DEFAULT_SET),
            memory: MemorySystem::new(bot.memory.span),
            targets: TargetSystem::new(),
            weapons: WeaponSystem::new(config.weapons.clone(), bot.weapon.aim_accuracy),
            navigation: Navigation::new(),
            vision: Vision::new(&bot.vision),
            ignores: ItemIgnores::default(),
            regulators: Regulators::new(&config),
            inbox: VecDeque::new(),
            outbox: Vec::new(),
            shots: Vec::new(),
            killer: None,
            stats: BotStats::default(),
            rng: StdRng::seed_from_u64(seed),
            valid_records: Vec::new(),
            config,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn personality(&self) -> &Personality {
        &self.personality
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn head_position(&self) -> Vec3 {
        self.position + Vec3::Y * self.config.bot.head_height
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn set_position(&mut self, position: Vec3, region: Option<RegionId>) {
        self.position = position;
        self.region = region;
    }

    pub fn set_forward(&mut self, forward: Vec3) {
        self.forward = forward.normalize_or_zero();
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn status(&self) -> LifeStatus {
        self.status
    }

    pub fn is_alive(&self) -> bool {
        self.status == LifeStatus::Alive
    }

    pub fn brain(&self) -> &Think {
        &self.brain
    }

    pub fn current_goal(&self) -> Option<GoalKind> {
        self.brain.current_goal_kind()
    }

    pub fn memory(&self) -> &MemorySystem {
        &self.memory
    }

    pub fn targets(&self) -> &TargetSystem {
        &self.targets
    }

    pub fn weapons(&self) -> &WeaponSystem {
        &self.weapons
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut Navigation {
        &mut self.navigation
    }

    pub fn ignores(&self) -> &ItemIgnores {
        &self.ignores
    }

    pub fn stats(&self) -> BotStats {
        self.stats
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.vision.add_obstacle(obstacle);
    }

    /// Queues a message for the next update.
    pub fn deliver_telegram(&mut self, telegram: Telegram) {
        self.inbox.push_back(telegram);
    }

    pub fn drain_outbox(&mut self) -> std::vec::Drain<'_, Telegram> {
        self.outbox.drain(..)
    }

    pub fn drain_shots(&mut self) -> std::vec::Drain<'_, Shot> {
        self.shots.drain(..)
    }

    /// Who dealt the lethal hit since the last call.
    pub fn take_killer(&mut self) -> Option<EntityId> {
        self.killer.take()
    }

    pub(crate) fn record_kill(&mut self) {
        self.stats.kills += 1;
    }

    /// Runs one frame.
    ///
    /// Order: inbox, then for a live bot vision, memory and target
    /// selection, goal execution, arbitration, weapon selection, weapon
    /// change, aiming and firing, weapon timers. A dying bot only waits for
    /// its dying time to pass.
    pub fn update(&mut self, now: f64, env: ArenaEnv<'_>) {
        while let Some(telegram) = self.inbox.pop_front() {
            self.handle_message(telegram, now, env);
        }

        match self.status {
            LifeStatus::Alive => self.update_alive(now, env),
            LifeStatus::Dying => {
                if now >= self.end_time_dying {
                    self.status = LifeStatus::Dead;
                    self.end_time_dying = f64::INFINITY;
                    tracing::info!(bot = %self.id, "bot is dead");
                }
            }
            LifeStatus::Dead => {}
        }
    }

    fn update_alive(&mut self, now: f64, env: ArenaEnv<'_>) {
        if self.regulators.vision.ready(now) {
            self.update_vision(now, env);
        }

        if self.regulators.memory.ready(now) {
            self.memory.valid_records(now, &mut self.valid_records);
            self.targets.update(self.position, &self.valid_records);
        }
        self.targets.refresh(&self.memory);

        {
            let mut ctx = BotContext {
                owner: self.id,
                now,
                position: self.position,
                health: self.health,
                max_health: self.config.bot.max_health,
                navigation: &mut self.navigation,
                targets: &self.targets,
                weapons: &self.weapons,
                ignores: &mut self.ignores,
                env,
                config: &self.config.bot,
                personality: &self.personality,
                rng: &mut self.rng,
            };

            self.brain.execute(&mut ctx);
            if self.regulators.arbitration.ready(now) {
                self.brain.arbitrate(&mut ctx);
            }
        }

        if self.regulators.weapon_selection.ready(now) {
            let distance = self
                .targets
                .last_sensed_position()
                .map(|target| self.position.distance(target));
            self.weapons.select_best_weapon(distance);
        }
        self.weapons.update_weapon_change(now);

        let eye = self.head_position();
        let head_offset = self.config.bot.head_height;
        if let Some(shot) =
            self.weapons
                .aim_and_shoot(now, eye, head_offset, &self.targets, &mut self.rng)
        {
            self.stats.shots_fired += 1;
            self.shots.push(shot);
        }
        self.weapons.update(now);
    }

    /// Collects an item the bot walked over.
    ///
    /// Returns `false` when a dead or dying bot touches the item.
    pub fn pick_up(&mut self, kind: ItemKind) -> bool {
        if !self.is_alive() {
            return false;
        }
        match kind {
            ItemKind::HealthPack => {
                let heal = self.config.items.health_pack_heal;
                self.health = (self.health + heal).min(self.config.bot.max_health);
            }
            ItemKind::Weapon(weapon) => {
                self.weapons.add_weapon(weapon);
            }
        }
        tracing::debug!(bot = %self.id, %kind, health = self.health, "picked up item");
        true
    }

    /// Brings the bot back to life at `spawn` with a fresh loadout and an
    /// empty mind.
    pub fn reset(&mut self, spawn: Vec3, now: f64) {
        {
            let mut ctx = BotContext {
                owner: self.id,
                now,
                position: self.position,
                health: self.health,
                max_health: self.config.bot.max_health,
                navigation: &mut self.navigation,
                targets: &self.targets,
                weapons: &self.weapons,
                ignores: &mut self.ignores,
                env: ArenaEnv::empty(),
                config: &self.config.bot,
                personality: &self.personality,
                rng: &mut self.rng,
            };
            self.brain.clear(&mut ctx);
        }

        self.navigation.reset();
        self.memory.clear();
        self.targets.reset();
        self.weapons.reset();
        self.ignores.clear();
        self.regulators.reset();
        self.inbox.clear();
        self.outbox.clear();
        self.shots.clear();

        self.position = spawn;
        self.region = None;
        self.health = self.config.bot.max_health;
        self.status = LifeStatus::Alive;
        self.end_time_dying = f64::INFINITY;
        tracing::info!(bot = %self.id, position = ?spawn, "bot respawned");
    }
}

