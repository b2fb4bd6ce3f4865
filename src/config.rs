use std::path::Path;

use crate::error::ConfigError;
use crate::game::{COLS, ROWS, WINDOW_LENGTH};

/// Number of 4-cell windows on the board, all four directions.
const WINDOW_COUNT: i64 = (ROWS * (COLS - WINDOW_LENGTH + 1)
    + COLS * (ROWS - WINDOW_LENGTH + 1)
    + 2 * (ROWS - WINDOW_LENGTH + 1) * (COLS - WINDOW_LENGTH + 1)) as i64;

/// Scores the window heuristic assigns to piece configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Bonus per own piece in the center column.
    pub center_bonus: i64,
    /// Four own pieces in a window.
    pub four: i64,
    /// Three own pieces plus one empty cell.
    pub three: i64,
    /// Two own pieces plus two empty cells.
    pub two: i64,
    /// Penalty for three opponent pieces plus one empty cell.
    pub opponent_three: i64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        HeuristicWeights {
            center_bonus: 3,
            four: 100,
            three: 5,
            two: 2,
            opponent_three: 4,
        }
    }
}

impl HeuristicWeights {
    /// Upper bound on the absolute heuristic score of any board. Terminal
    /// scores must exceed this so win/loss always dominates the heuristic.
    pub fn max_board_score(&self) -> i64 {
        let per_window = self
            .four
            .max(self.three)
            .max(self.two)
            .max(self.opponent_three);
        WINDOW_COUNT * per_window + ROWS as i64 * self.center_bonus
    }
}

/// Parameters of the minimax search.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Lookahead in plies.
    pub depth: u32,
    /// Backed-up value of a won position.
    pub win_score: i64,
    pub weights: HeuristicWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            win_score: 1_000_000,
            weights: HeuristicWeights::default(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
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
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let search = &self.search;
        if search.depth == 0 {
            return Err(ConfigError::Validation(
                "search.depth must be >= 1".into(),
            ));
        }
        if search.depth > 12 {
            return Err(ConfigError::Validation(
                "search.depth must be <= 12".into(),
            ));
        }
        if search.weights.four <= 0 {
            return Err(ConfigError::Validation(
                "search.weights.four must be > 0".into(),
            ));
        }
        if search.weights.three < 0
            || search.weights.two < 0
            || search.weights.center_bonus < 0
            || search.weights.opponent_three < 0
        {
            return Err(ConfigError::Validation(
                "search.weights must be non-negative".into(),
            ));
        }
        if search.win_score <= search.weights.max_board_score() {
            return Err(ConfigError::Validation(format!(
                "search.win_score must exceed the maximum heuristic score ({})",
                search.weights.max_board_score()
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
