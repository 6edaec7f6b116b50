//! Player configuration
//!
//! Construction parameters for a `Player`, loadable from a JSON file.
//! Every field is optional in the file; missing ones take their defaults.
//!
//! ```json
//! {
//!     "inventory_capacity": 3,
//!     "edible_items": ["Brownies", "Butterscotch Pie", "Pizza"],
//!     "rng_seed": 42,
//!     "direction_policy": "strict"
//! }
//! ```

use crate::item::EdibleRegistry;
use crate::movement::DirectionPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// File name looked up inside the config directory
pub const CONFIG_FILE_NAME: &str = "player.json";

/// Error types for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Maximum items carried at once (must be > 0)
    pub inventory_capacity: usize,
    /// Items that power the player up when eaten
    pub edible_items: Vec<String>,
    /// Seed for trip checks; `None` draws from OS entropy
    pub rng_seed: Option<u64>,
    pub direction_policy: DirectionPolicy,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            inventory_capacity: 3,
            edible_items: EdibleRegistry::create_default()
                .all_names()
                .into_iter()
                .map(String::from)
                .collect(),
            rng_seed: None,
            direction_policy: DirectionPolicy::Strict,
        }
    }
}

impl PlayerConfig {
    /// Loads and validates a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config: PlayerConfig = serde_json::from_str(&contents)?;
        config.validate()?;

        debug!(path = %path.display(), "Loaded player config");
        Ok(config)
    }

    /// Loads `<config_dir>/wanderer/player.json`, or defaults if there is none
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                info!("No player config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Where `load_or_default` looks
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wanderer").join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inventory_capacity == 0 {
            return Err(ConfigError::Invalid(
                "inventory_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn edible_registry(&self) -> EdibleRegistry {
        EdibleRegistry::from_names(self.edible_items.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.inventory_capacity, 3);
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.direction_policy, DirectionPolicy::Strict);
        assert!(config.edible_registry().is_edible("Pizza"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "inventory_capacity": 5, "rng_seed": 9 }}"#).unwrap();

        let config = PlayerConfig::load(file.path()).unwrap();
        assert_eq!(config.inventory_capacity, 5);
        assert_eq!(config.rng_seed, Some(9));
        assert_eq!(config.edible_items, PlayerConfig::default().edible_items);
    }

    #[test]
    fn test_max_capacity_builds_player() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "inventory_capacity": 18446744073709551615 }}"#).unwrap();

        let config = PlayerConfig::load(file.path()).unwrap();
        let player = crate::Player::from_config(&config).unwrap();
        assert_eq!(player.inventory().capacity(), usize::MAX);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "inventory_capacity": 0 }}"#).unwrap();

        let result = PlayerConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = PlayerConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = PlayerConfig::load("/definitely/not/here/player.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
