//! Configuration loading for the seeder.
//!
//! Seed settings are loaded from a TOML file. Every section is optional and
//! falls back to its defaults; command line flags override file values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use world_model::LocationNumber;

use crate::terrain::MissingTerrainPolicy;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "seed.toml";

/// Number of the starting town every location falls back to.
pub const DEFAULT_LOCATION_NUMBER: LocationNumber = 0;

/// Complete seeder configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// General seed settings
    #[serde(default)]
    pub seed: GeneralConfig,
    /// Terrain resource lookup
    #[serde(default)]
    pub terrain: TerrainConfig,
    /// Input and output locations
    #[serde(default)]
    pub paths: PathsConfig,
}

impl SeedConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Toml)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Returns this configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::TomlSerialize)
    }

    /// The subset of settings the initializers read while seeding.
    pub fn settings(&self) -> SeedSettings {
        SeedSettings {
            terrain_package: self.terrain.package.clone(),
            missing_terrain: self.terrain.missing,
            default_location: self.seed.default_location,
        }
    }
}

/// General seed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Seed for tracked entity ids
    pub rng_seed: u64,
    /// Location every map without a spawn gate respawns to
    pub default_location: LocationNumber,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            rng_seed: 42,
            default_location: DEFAULT_LOCATION_NUMBER,
        }
    }
}

/// Terrain resource settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Package identifier prefixed to terrain resource names
    pub package: String,
    /// Directory holding `Terrain<n>.att` files
    pub directory: Option<PathBuf>,
    /// What to do when a location has no terrain resource
    pub missing: MissingTerrainPolicy,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            package: "WorldSeed.Data".to_string(),
            directory: None,
            missing: MissingTerrainPolicy::Warn,
        }
    }
}

/// Input and output paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory of per-location TOML records
    pub data_dir: PathBuf,
    /// Where the seeded world is written
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/locations"),
            output: PathBuf::from("output/world.json"),
        }
    }
}

/// Settings handed to every initializer.
#[derive(Debug, Clone)]
pub struct SeedSettings {
    pub terrain_package: String,
    pub missing_terrain: MissingTerrainPolicy,
    pub default_location: LocationNumber,
}

impl Default for SeedSettings {
    fn default() -> Self {
        SeedConfig::default().settings()
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Error writing TOML config
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SeedConfig::default();
        assert_eq!(config.seed.rng_seed, 42);
        assert_eq!(config.seed.default_location, 0);
        assert_eq!(config.terrain.missing, MissingTerrainPolicy::Warn);
        assert!(config.terrain.directory.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SeedConfig::from_str(
            r#"
            [terrain]
            package = "OpenWorld.Data"
            missing = "fail"
            "#,
        )
        .unwrap();

        assert_eq!(config.terrain.package, "OpenWorld.Data");
        assert_eq!(config.terrain.missing, MissingTerrainPolicy::Fail);
        assert_eq!(config.seed.rng_seed, 42);
        assert_eq!(config.paths.data_dir, PathBuf::from("data/locations"));
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let mut config = SeedConfig::default();
        config.seed.rng_seed = 7;
        config.terrain.directory = Some(PathBuf::from("terrain"));

        let toml = config.to_toml().unwrap();
        let parsed = SeedConfig::from_str(&toml).unwrap();
        assert_eq!(parsed.seed.rng_seed, 7);
        assert_eq!(parsed.terrain.directory, Some(PathBuf::from("terrain")));
    }

    #[test]
    fn test_invalid_toml() {
        let result = SeedConfig::from_str("[seed\nrng_seed = ");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_settings() {
        let mut config = SeedConfig::default();
        config.seed.default_location = 3;
        let settings = config.settings();
        assert_eq!(settings.default_location, 3);
        assert_eq!(settings.terrain_package, "WorldSeed.Data");
    }
}
