use arena_core::{
    ArenaConfig, ArenaLayout, EntityId, ItemId, ItemKind, ItemOracle, ItemPlacement, LifeStatus,
    Message, Personality, Telegram, Vec3, WeaponKind,
};
use bot_runtime::{Arena, RuntimeError};

const DELTA: f64 = 1.0 / 60.0;

fn open_layout(spawn_points: Vec<Vec3>, items: Vec<ItemPlacement>) -> ArenaLayout {
    ArenaLayout {
        spawn_points,
        items,
        obstacles: Vec::new(),
        ..ArenaLayout::default()
    }
}

fn default_arena(seed: u64, bots: usize) -> Arena {
    let mut arena =
        Arena::new(ArenaConfig::default(), ArenaLayout::default(), seed).expect("valid arena");
    for _ in 0..bots {
        arena.spawn_bot(Personality::default());
    }
    arena
}

#[test]
fn smoke_run_keeps_bots_on_the_floor() {
    let mut arena = default_arena(7, 4);
    let spawns: Vec<Vec3> = arena.bots().iter().map(|bot| bot.position()).collect();

    arena.run(600, DELTA).expect("steps succeed");

    assert_eq!(arena.frame(), 600);
    assert!((arena.now() - 10.0).abs() < 1e-6);
    for bot in arena.bots() {
        assert!(arena.floor().contains(bot.position()));
    }
    let moved = arena
        .bots()
        .iter()
        .zip(&spawns)
        .any(|(bot, spawn)| bot.position().distance(*spawn) > 1.0);
    assert!(moved);
}

#[test]
fn same_seed_same_run() {
    let mut a = default_arena(42, 3);
    let mut b = default_arena(42, 3);
    a.run(300, DELTA).expect("steps succeed");
    b.run(300, DELTA).expect("steps succeed");

    for (x, y) in a.bots().iter().zip(b.bots()) {
        assert_eq!(x.position(), y.position());
        assert_eq!(x.health(), y.health());
        assert_eq!(x.stats(), y.stats());
        assert_eq!(x.current_goal(), y.current_goal());
    }
}

#[test]
fn bots_in_sight_of_each_other_fight() {
    let layout = open_layout(
        vec![Vec3::new(10.0, 0.0, 30.0), Vec3::new(20.0, 0.0, 30.0)],
        Vec::new(),
    );
    let mut arena = Arena::new(ArenaConfig::default(), layout, 3).expect("valid arena");
    arena.spawn_bot(Personality::default());
    arena.spawn_bot(Personality::default());

    arena.run(600, DELTA).expect("steps succeed");

    let shots: u32 = arena.bots().iter().map(|bot| bot.stats().shots_fired).sum();
    let hits: u32 = arena.bots().iter().map(|bot| bot.stats().hits_taken).sum();
    assert!(shots > 0);
    assert!(hits > 0);
}

#[test]
fn killed_bot_respawns_and_killer_is_credited() {
    let mut arena = default_arena(5, 2);
    let victim = EntityId(1);
    let killer = EntityId(2);

    arena
        .bot_mut(victim)
        .expect("spawned")
        .deliver_telegram(Telegram::new(
            killer,
            victim,
            Message::Hit {
                damage: 1000.0,
                attacker_position: Vec3::new(55.0, 0.0, 55.0),
            },
        ));
    arena.step(0.1).expect("step succeeds");

    assert_eq!(arena.bot(victim).expect("spawned").status(), LifeStatus::Dying);
    assert_eq!(arena.bot(killer).expect("spawned").stats().kills, 1);
    assert_eq!(arena.bot(victim).expect("spawned").stats().deaths, 1);

    arena.run(19, 0.1).expect("steps succeed");
    assert_eq!(arena.bot(victim).expect("spawned").status(), LifeStatus::Dying);

    arena.run(15, 0.1).expect("steps succeed");
    let bot = arena.bot(victim).expect("spawned");
    assert!(bot.is_alive());
    assert_eq!(bot.health(), 100.0);
}

#[test]
fn items_in_reach_are_collected() {
    let layout = open_layout(
        vec![Vec3::new(10.0, 0.0, 10.0)],
        vec![ItemPlacement {
            kind: ItemKind::Weapon(WeaponKind::Shotgun),
            position: Vec3::new(10.0, 0.0, 10.5),
        }],
    );
    let mut arena = Arena::new(ArenaConfig::default(), layout, 1).expect("valid arena");
    let id = arena.spawn_bot(Personality::default());

    arena.step(DELTA).expect("step succeeds");

    assert!(
        arena
            .bot(id)
            .expect("spawned")
            .weapons()
            .has_weapon(WeaponKind::Shotgun)
    );
    assert!(!arena.items().is_active(ItemId(0)));
}

#[test]
fn bot_walks_to_distant_item_and_collects_it() {
    let layout = open_layout(
        vec![Vec3::new(10.0, 0.0, 10.0)],
        vec![ItemPlacement {
            kind: ItemKind::Weapon(WeaponKind::Shotgun),
            position: Vec3::new(10.0, 0.0, 25.0),
        }],
    );
    let mut arena = Arena::new(ArenaConfig::default(), layout, 1).expect("valid arena");
    let id = arena.spawn_bot(Personality::default());

    let mut collected_at = None;
    for frame in 0..600 {
        arena.step(DELTA).expect("step succeeds");
        if arena
            .bot(id)
            .expect("spawned")
            .weapons()
            .has_weapon(WeaponKind::Shotgun)
        {
            collected_at = Some(frame);
            break;
        }
    }

    // 15 units at walking speed; arriving must be enough to collect
    let frame = collected_at.expect("shotgun collected");
    assert!(frame < 300, "collected only at frame {frame}");
    assert!(!arena.items().is_active(ItemId(0)));
}

#[test]
fn unknown_bot_is_an_error() {
    let arena = default_arena(1, 1);
    assert!(matches!(
        arena.bot(EntityId(99)),
        Err(RuntimeError::UnknownBot(EntityId(99)))
    ));
}
