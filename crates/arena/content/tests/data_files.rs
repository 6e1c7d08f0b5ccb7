use std::io::Write;
use std::path::PathBuf;

use arena_content::{ConfigLoader, LayoutLoader, PersonalityLoader};
use arena_core::{ArenaConfig, ArenaLayout, ItemKind, WeaponKind};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn shipped_config_matches_defaults() {
    let config = ConfigLoader::load(&data_dir().join("config.toml")).expect("config loads");
    assert_eq!(config, ArenaConfig::default());
}

#[test]
fn shipped_personalities_load() {
    let roster =
        PersonalityLoader::load(&data_dir().join("personalities.ron")).expect("roster loads");
    assert_eq!(roster.len(), 4);
    assert!(roster.iter().any(|p| p.name == "hunter" && p.engage > 1.0));
}

#[test]
fn shipped_layout_matches_default_layout() {
    let layout = LayoutLoader::load(&data_dir().join("arena.ron")).expect("layout loads");
    assert_eq!(layout, ArenaLayout::default());
    assert!(
        layout
            .items
            .iter()
            .any(|i| i.kind == ItemKind::Weapon(WeaponKind::AssaultRifle))
    );
}

#[test]
fn config_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[bot.goal]\nmax_replans = 7").expect("write");

    let config = ConfigLoader::load(file.path()).expect("config loads");
    assert_eq!(config.bot.goal.max_replans, 7);
    assert_eq!(config.bot.goal.arbitration_frequency, 5.0);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let err = ConfigLoader::load(&path).expect_err("file does not exist");
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn layout_without_spawn_points_is_rejected() {
    let err = LayoutLoader::parse(
        "(width: 10.0, depth: 10.0, region_size: 5.0, spawn_points: [], items: [])",
    )
    .expect_err("no spawn points");
    assert!(err.to_string().contains("spawn point"));
}
