//! Configuration values handed to the controller and its collaborators.
//!
//! Nothing here is global: a [`Config`] is loaded or built by the caller and passed down explicitly.
//!
//! ```toml
//! [game]
//! difficulty = "expert"
//!
//! [solver]
//! settle_delay_ms = 50
//!
//! [screen]
//! origin = { x = 260, y = 158 }
//! tile_size = 32
//! ```
//!
//! A custom board replaces `difficulty` with `rows`, `cols` and `mines`.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

use crate::error::{ConfigError, ShapeError};
use crate::geometry::ScreenGeometry;

/// The standard board presets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumString, VariantArray, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 9x9, 10 mines.
    Beginner,
    /// 16x16, 40 mines.
    Intermediate,
    /// 16x30, 99 mines.
    Expert,
}

impl Difficulty {
    /// The game this preset describes.
    pub fn config(&self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig { rows: 9, cols: 9, mines: 10 },
            Self::Intermediate => GameConfig { rows: 16, cols: 16, mines: 40 },
            Self::Expert => GameConfig { rows: 16, cols: 30, mines: 99 },
        }
    }
}

/// The shape of a game and how many mines it hides.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "GameSpec")]
pub struct GameConfig {
    /// Board height.
    pub rows: usize,
    /// Board width.
    pub cols: usize,
    /// Total mines; the controller stops once it has accounted for this many flags.
    pub mines: usize,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GameSpec {
    Preset { difficulty: Difficulty },
    Custom { rows: usize, cols: usize, mines: usize },
}

impl From<GameSpec> for GameConfig {
    fn from(value: GameSpec) -> Self {
        match value {
            GameSpec::Preset { difficulty } => difficulty.config(),
            GameSpec::Custom { rows, cols, mines } => Self { rows, cols, mines },
        }
    }
}

impl From<Difficulty> for GameConfig {
    fn from(value: Difficulty) -> Self {
        value.config()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::Intermediate.config()
    }
}

impl GameConfig {
    /// Number of cells on the board, or `None` if that does not fit in a `usize`.
    pub fn cells(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Check the configuration describes a board that can hold its mines and still leave the opening move safe.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ShapeError::Empty.into());
        }
        let Some(cells) = self.cells() else {
            return Err(ConfigError::TooLarge { rows: self.rows, cols: self.cols });
        };
        if self.mines >= cells {
            return Err(ConfigError::TooManyMines { mines: self.mines, cells });
        }
        Ok(())
    }
}

/// Settings of the iteration controller itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Wait after every actuation batch before the next capture, in milliseconds.
    pub settle_delay_ms: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { settle_delay_ms: 50 }
    }
}

impl SolverConfig {
    /// The settle delay as a [`Duration`].
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// Everything a session needs, as read from a configuration file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The game being played.
    pub game: GameConfig,
    /// Controller settings.
    pub solver: SolverConfig,
    /// Where the board sits on screen, for collaborators that capture and click one.
    pub screen: ScreenGeometry,
}

impl Config {
    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.game.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the TOML configuration at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}
