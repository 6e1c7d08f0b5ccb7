//! Arena layout loader.

use std::path::Path;

use arena_core::ArenaLayout;

use crate::loaders::{LoadResult, read_file};

/// Loader for arena layouts from RON files.
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load an [`ArenaLayout`] from a RON file.
    pub fn load(path: &Path) -> LoadResult<ArenaLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ArenaLayout> {
        let layout: ArenaLayout = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse arena layout RON: {}", e))?;

        if layout.width <= 0.0 || layout.depth <= 0.0 || layout.region_size <= 0.0 {
            anyhow::bail!("Arena layout dimensions must be positive");
        }
        if layout.spawn_points.is_empty() {
            anyhow::bail!("Arena layout needs at least one spawn point");
        }

        Ok(layout)
    }
}
