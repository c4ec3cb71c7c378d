//! Viewer configuration.
//!
//! Read from a TOML file; every key is optional and falls back to the
//! defaults below. Command-line flags are applied on top with
//! `apply_overrides`, and the result is validated before use.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::tile_geometry::MAX_TILE_SIDE;
use crate::errors::{BoardError, BoardResult};
use crate::utils::fen_parser::STARTING_PLACEMENT;

pub const DEFAULT_TILE_SIZE: u32 = 100;
pub const DEFAULT_ARTWORK_DIR: &str = "Pieces";
pub const DEFAULT_ARTWORK_THEME: &str = "glass";
pub const DEFAULT_ARTWORK_BASE_URL: &str = "https://images.chesscomfiles.com/chess-themes/pieces";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Side length of one tile in pixels; the artwork is fetched at this size.
    pub tile_size: u32,
    /// FEN placement (or full FEN) loaded at startup.
    pub start_position: String,
    pub artwork_dir: PathBuf,
    pub artwork_theme: String,
    pub artwork_base_url: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            start_position: STARTING_PLACEMENT.to_owned(),
            artwork_dir: PathBuf::from(DEFAULT_ARTWORK_DIR),
            artwork_theme: DEFAULT_ARTWORK_THEME.to_owned(),
            artwork_base_url: DEFAULT_ARTWORK_BASE_URL.to_owned(),
        }
    }
}

/// Values given on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub start_position: Option<String>,
    pub tile_size: Option<u32>,
    pub artwork_dir: Option<PathBuf>,
}

impl ViewerConfig {
    pub fn from_toml_str(contents: &str) -> BoardResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a tile side of zero or one too large for pixel math.
    pub fn validate(&self) -> BoardResult<()> {
        if (1..=MAX_TILE_SIDE).contains(&self.tile_size) {
            Ok(())
        } else {
            Err(BoardError::InvalidTileSize(self.tile_size))
        }
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) -> BoardResult<()> {
        if let Some(fen) = overrides.start_position {
            self.start_position = fen;
        }
        if let Some(tile_size) = overrides.tile_size {
            self.tile_size = tile_size;
        }
        if let Some(dir) = overrides.artwork_dir {
            self.artwork_dir = dir;
        }
        self.validate()
    }

    pub fn to_toml_string(&self) -> BoardResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load_from_file(path: &Path) -> BoardResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| BoardError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
