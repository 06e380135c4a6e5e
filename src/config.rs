use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_DIMENSION};

/// Display names for the two seats.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerNames {
    pub first: String,
    pub second: String,
}

impl Default for PlayerNames {
    fn default() -> Self {
        PlayerNames {
            first: "Player 1".to_string(),
            second: "Player 2".to_string(),
        }
    }
}

/// Match configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub rows: usize,
    pub columns: usize,
    /// Pieces in a row needed to win a round.
    pub connect_n: usize,
    /// Round wins needed to win the match.
    pub target_score: u32,
    pub players: PlayerNames,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            connect_n: 4,
            target_score: 2,
            players: PlayerNames::default(),
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: MatchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DIMENSION).contains(&self.rows) {
            return Err(ConfigError::Validation(format!(
                "rows must be in 1..={MAX_DIMENSION}"
            )));
        }
        if !(1..=MAX_DIMENSION).contains(&self.columns) {
            return Err(ConfigError::Validation(format!(
                "columns must be in 1..={MAX_DIMENSION}"
            )));
        }
        if self.connect_n == 0 {
            return Err(ConfigError::Validation("connect_n must be >= 1".into()));
        }
        // Every round would be drawn and the match could never end.
        if self.connect_n > self.rows.max(self.columns) {
            return Err(ConfigError::Validation(format!(
                "connect_n ({}) must fit on a {}x{} grid",
                self.connect_n, self.rows, self.columns
            )));
        }
        if self.target_score == 0 {
            return Err(ConfigError::Validation(
                "target_score must be >= 1".into(),
            ));
        }
        if self.players.first.trim().is_empty() || self.players.second.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player names must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&MatchConfig::default())
    }
}
