//! Errors used throughout the board editor.
//!
//! `BoardError` is the single error type returned by board mutation, FEN
//! parsing, move generation, the artwork stamp file and configuration loading.
//! Each variant carries the offending input where one exists so callers can
//! log or print a precise message.
//!
//! Input-style variants (`InvalidFenToken`, `InvalidAlgebraic`, ...) are
//! recoverable and suitable for showing to the user; the terminal editor
//! prints them and keeps running. Board-state variants (`EmptySquare`,
//! `SquareOccupied`, `NotAPossibleMove`) indicate a request that does not fit
//! the current position.

use std::path::PathBuf;

use crate::board::board_types::Square;

/// Unified error type for the board editor.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// A character in the placement field is neither a piece letter nor a
    /// digit `1..=8`.
    ///
    /// Payload: the offending character.
    #[error("invalid FEN token '{0}'")]
    InvalidFenToken(char),

    /// The placement field does not contain exactly eight ranks.
    ///
    /// Payload: the number of ranks found.
    #[error("FEN placement must contain 8 ranks, found {0}")]
    WrongRankCount(usize),

    /// A rank describes more than eight files.
    ///
    /// Payload: the rank number as written in FEN order (1 = first listed).
    #[error("FEN rank {0} describes more than 8 files")]
    RankOverflow(usize),

    /// A rank describes fewer than eight files.
    ///
    /// Payload: (rank in FEN order, files described).
    #[error("FEN rank {0} describes only {1} files")]
    RankUnderfilled(usize, usize),

    /// The FEN text was empty.
    #[error("FEN text is empty")]
    EmptyFen,

    /// Text could not be read as a square such as `e4`.
    #[error("invalid algebraic square '{0}'")]
    InvalidAlgebraic(String),

    /// Square index outside `0..64`.
    #[error("square index {0} is off the board")]
    SquareOutOfRange(u8),

    /// Tried to view, move or remove a piece on an empty square.
    #[error("no piece on square {0}")]
    EmptySquare(Square),

    /// Tried to place or relocate a piece onto an occupied square.
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    /// A capture was requested onto a square holding a piece of the same
    /// colour.
    ///
    /// Payload: (from, to).
    #[error("piece on {0} cannot capture the piece on {1}")]
    NotACapture(Square, Square),

    /// The requested destination is not among the selected piece's
    /// possible moves.
    ///
    /// Payload: (from, to).
    #[error("{0} -> {1} is not a possible move")]
    NotAPossibleMove(Square, Square),

    /// The artwork stamp file exists but could not be read or written.
    #[error("artwork stamp {}: {source}", path.display())]
    Stamp {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tile side length outside `1..=MAX_TILE_SIDE`.
    #[error("tile size {0} must be between 1 and {max}", max = crate::board::tile_geometry::MAX_TILE_SIDE)]
    InvalidTileSize(u32),

    /// Configuration file could not be read.
    #[error("config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for `ViewerConfig`.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be written back out as TOML.
    #[error("config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type BoardResult<T> = Result<T, BoardError>;
