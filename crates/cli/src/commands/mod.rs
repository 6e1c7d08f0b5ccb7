mod check;
mod run;

pub use check::Check;
pub use run::Run;

use std::path::PathBuf;

use anyhow::{Context, Result};
use arena_content::{ConfigLoader, LayoutLoader, PersonalityLoader};
use arena_core::{ArenaConfig, ArenaLayout, Personality};
use clap::Args;

/// Content files shared by every command. Built-in defaults stand in for
/// files that are not given.
#[derive(Args)]
pub struct ContentArgs {
    /// Arena configuration (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Bot personalities (RON)
    #[arg(short, long, value_name = "FILE")]
    personalities: Option<PathBuf>,

    /// Arena layout (RON)
    #[arg(short, long, value_name = "FILE")]
    layout: Option<PathBuf>,
}

pub struct Content {
    pub config: ArenaConfig,
    pub personalities: Vec<Personality>,
    pub layout: ArenaLayout,
}

impl ContentArgs {
    pub fn load(&self) -> Result<Content> {
        let config = match &self.config {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => ArenaConfig::default(),
        };

        let personalities = match &self.personalities {
            Some(path) => PersonalityLoader::load(path)
                .with_context(|| format!("Failed to load personalities: {}", path.display()))?,
            None => vec![Personality::default()],
        };
        if personalities.is_empty() {
            anyhow::bail!("Personality roster is empty");
        }

        let layout = match &self.layout {
            Some(path) => LayoutLoader::load(path)
                .with_context(|| format!("Failed to load layout: {}", path.display()))?,
            None => ArenaLayout::default(),
        };

        Ok(Content {
            config,
            personalities,
            layout,
        })
    }
}
