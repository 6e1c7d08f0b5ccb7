//! Bot personality loader.

use std::path::Path;

use arena_core::Personality;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Personality roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityRoster {
    pub personalities: Vec<Personality>,
}

/// Loader for bot personalities from RON files.
pub struct PersonalityLoader;

impl PersonalityLoader {
    /// Load a personality roster from a RON file.
    ///
    /// Biases must not be negative; omitted biases default to 1.
    pub fn load(path: &Path) -> LoadResult<Vec<Personality>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Personality>> {
        let roster: PersonalityRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse personality RON: {}", e))?;

        for personality in &roster.personalities {
            let biases = [
                personality.explore,
                personality.get_health,
                personality.get_weapon,
                personality.engage,
            ];
            if biases.iter().any(|b| *b < 0.0 || !b.is_finite()) {
                anyhow::bail!("Personality '{}' has a negative bias", personality.name);
            }
        }

        Ok(roster.personalities)
    }
}
