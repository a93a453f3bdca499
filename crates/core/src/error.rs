//! Error types for board construction and play.
//!
//! Player-facing results (`Continue`, `Solved`, `Failed`) are never errors;
//! they travel as [`Outcome`](crate::types::Outcome) values.

use thiserror::Error;

use crate::types::{BlockId, BlockType, BoardStatus, Color, LevelKey, Position, MAX_BOARD_SIZE};

/// Cell lookup outside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell {position} is outside the {size}x{size} board")]
pub struct GridError {
    pub position: Position,
    pub size: u8,
}

/// Rejected block placement during construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("cell {position} is outside the {size}x{size} board")]
    OutOfBounds { position: Position, size: u8 },
    #[error("cell {position} is already occupied by block {}", .occupant.0)]
    Occupied { position: Position, occupant: BlockId },
    #[error("cell {position} has no platform")]
    NoPlatform { position: Position },
}

/// Color assignment failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("palette of {palette_len} colors is exhausted, cannot color block type {block_type}")]
    PaletteExhausted { block_type: BlockType, palette_len: usize },
}

/// Invalid engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is outside 1..={max}", max = MAX_BOARD_SIZE)]
    BoardSize(u8),
    #[error("palette is empty")]
    EmptyPalette,
    #[error("palette lists {} more than once", .0.as_str())]
    DuplicateColor(Color),
    #[error("palette has {0} colors, more than the supported maximum")]
    PaletteTooLarge(usize),
    #[error("unknown color name {0:?}")]
    UnknownColor(String),
}

/// Level construction failure; no partially built board is ever returned
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("no level data for {0}")]
    NotFound(LevelKey),
    #[error("platform layout: {0}")]
    Layout(String),
    #[error("index {index} is outside the {size}x{size} board")]
    IndexOutOfRange { index: usize, size: u8 },
    #[error("cell {position} is both a destination and a hazard, or stamped twice")]
    CellConflict { position: Position },
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Shove rejected by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("level already finished ({status:?}); restart or load another level")]
    Finished { status: BoardStatus },
}
