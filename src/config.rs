use std::path::Path;

use crate::ai::{SearchConfig, MAX_DEPTH};
use crate::error::ConfigError;

/// Board geometry and win condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: 8,
            cols: 8,
            win_length: 4,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub negamax: SearchConfig,
    pub alphabeta: SearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            negamax: SearchConfig {
                depth: 3,
                trace: false,
            },
            alphabeta: SearchConfig {
                depth: 5,
                trace: false,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_board()?;
        self.validate_search()
    }

    /// Check board geometry and win length.
    pub fn validate_board(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        if board.rows == 0 || board.cols == 0 {
            return Err(ConfigError::Validation(
                "board.rows and board.cols must be >= 1".into(),
            ));
        }
        if board.win_length == 0 || board.win_length > board.rows.min(board.cols) {
            return Err(ConfigError::Validation(format!(
                "board.win_length must be in [1, {}]",
                board.rows.min(board.cols)
            )));
        }
        Ok(())
    }

    /// Check search depths. A loaded snapshot brings its own geometry, so
    /// this is all that applies to it.
    pub fn validate_search(&self) -> Result<(), ConfigError> {
        for (section, search) in [("negamax", &self.negamax), ("alphabeta", &self.alphabeta)] {
            if search.depth == 0 || search.depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "{section}.depth must be in [1, {MAX_DEPTH}]"
                )));
            }
        }
        Ok(())
    }

    /// Turn per-node search tracing on for both agents
    pub fn enable_search_trace(&mut self) {
        self.negamax.trace = true;
        self.alphabeta.trace = true;
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
