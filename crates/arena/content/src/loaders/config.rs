//! Arena configuration loader.

use std::path::Path;

use arena_core::ArenaConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for arena configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate an [`ArenaConfig`] from a TOML file.
    ///
    /// Tables and keys missing from the file keep their default values.
    pub fn load(path: &Path) -> LoadResult<ArenaConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate an [`ArenaConfig`] from TOML text.
    pub fn parse(content: &str) -> LoadResult<ArenaConfig> {
        let config: ArenaConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid arena config: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ConfigLoader::parse("").expect("defaults are valid");
        assert_eq!(config, ArenaConfig::default());
    }

    #[test]
    fn partial_table_overrides_single_keys() {
        let config = ConfigLoader::parse(
            r#"
            [bot.memory]
            span = 5.0
            "#,
        )
        .expect("valid config");
        assert_eq!(config.bot.memory.span, 5.0);
        assert_eq!(config.bot.memory.update_frequency, 5.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ConfigLoader::parse(
            r#"
            [bot.vision]
            update_frequency = 0.0
            "#,
        )
        .expect_err("zero frequency");
        assert!(err.to_string().contains("vision"));
    }
}
