//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond small lookups, making them
//! usable in any context (engine logic, level packs, renderers, tooling).
//!
//! # Board Geometry
//!
//! The playfield is a square of `N x N` cells:
//!
//! - **Default size**: 14 (the size every shipped level pack uses)
//! - **Maximum size**: 64
//! - **Coordinates**: `(x, y)` with `x` growing to the right and `y` growing downwards
//! - **Linear index**: `index = y * N + x`, so `x = index % N` and `y = index / N`
//!
//! # Cell Kinds
//!
//! | Kind | Walkable | Meaning |
//! |------|----------|---------|
//! | `Empty` | no | No platform; blocks can neither stand on nor cross it |
//! | `Open` | yes | Plain platform |
//! | `Destination(c)` | yes | A block of color `c` must end here |
//! | `Hazard` | yes | Destroys whatever comes to rest on it |
//!
//! # Block Kinds
//!
//! | Kind | Slides | Color match | On a hazard |
//! |------|--------|-------------|-------------|
//! | `Colored(c)` | yes | yes | destroyed, level failed |
//! | `Obstacle { stoppable: false }` | never | no | destroyed |
//! | `Obstacle { stoppable: true }` | never | no | destroyed |
//!
//! # Examples
//!
//! ```
//! use slidebox_types::{Color, Direction, Position, DEFAULT_BOARD_SIZE};
//!
//! // Parse a direction from a move string character
//! assert_eq!(Direction::from_char('R'), Some(Direction::Right));
//!
//! // Linear indices map to coordinates
//! let pos = Position::from_index(17, DEFAULT_BOARD_SIZE);
//! assert_eq!(pos, Position::new(3, 1));
//! assert_eq!(pos.to_index(DEFAULT_BOARD_SIZE), Some(17));
//!
//! // Colors parse case-insensitively
//! assert_eq!(Color::from_str("RED"), Some(Color::Red));
//! ```

use serde::{Deserialize, Serialize};

/// Board side length used by the shipped levels (14 x 14)
pub const DEFAULT_BOARD_SIZE: u8 = 14;

/// Largest supported board side length
pub const MAX_BOARD_SIZE: u8 = 64;

/// Levels per stage; finishing level 100 rolls over to level 1 of the next stage
pub const LEVELS_PER_STAGE: u32 = 100;

/// Number of distinct colors a palette can hold
pub const MAX_PALETTE_COLORS: usize = Color::ALL.len();

/// Level-local block type identifier, as authored in level data
pub type BlockType = u32;

/// A cell position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Convert a linear index into a position on a board of `size` columns.
    pub fn from_index(index: usize, size: u8) -> Self {
        let size = usize::from(size.max(1));
        Self {
            x: (index % size) as i16,
            y: (index / size) as i16,
        }
    }

    /// Linear index of this position, or `None` when outside a `size x size` board.
    pub fn to_index(self, size: u8) -> Option<usize> {
        if !self.in_bounds(size) {
            return None;
        }
        Some(self.y as usize * usize::from(size) + self.x as usize)
    }

    /// Check if the position lies within a `size x size` board
    pub fn in_bounds(self, size: u8) -> bool {
        let n = i16::from(size);
        self.x >= 0 && self.x < n && self.y >= 0 && self.y < n
    }

    /// Position `steps` cells away along `direction`
    pub fn step(self, direction: Direction, steps: i16) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * steps,
            y: self.y + dy * steps,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Shove directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)`; `y` grows downwards
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use slidebox_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("L"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Parse a single move character (`U`, `D`, `L`, `R`, case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Block and destination colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Cyan,
    Pink,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
        Color::Cyan,
        Color::Pink,
    ];

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            "yellow" => Some(Color::Yellow),
            "purple" => Some(Color::Purple),
            "orange" => Some(Color::Orange),
            "cyan" => Some(Color::Cyan),
            "pink" => Some(Color::Pink),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Cyan => "cyan",
            Color::Pink => "pink",
        }
    }

    /// Single-letter tag used by text renderings (uppercase)
    pub fn letter(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Purple => 'P',
            Color::Orange => 'O',
            Color::Cyan => 'C',
            Color::Pink => 'K',
        }
    }
}

/// Static kind of a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "color")]
pub enum CellKind {
    /// No platform
    Empty,
    Open,
    Destination(Color),
    Hazard,
}

impl CellKind {
    /// Whether a block may stand on or slide across this cell
    pub fn is_walkable(&self) -> bool {
        !matches!(self, CellKind::Empty)
    }
}

/// Kind of a movable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Colored(Color),
    Obstacle { stoppable: bool },
}

impl BlockKind {
    /// Whether the block takes part in shoves
    pub fn slides(&self) -> bool {
        match self {
            BlockKind::Colored(_) => true,
            BlockKind::Obstacle { .. } => false,
        }
    }

    /// Color that must match a destination for the level to be solved
    pub fn color(&self) -> Option<Color> {
        match self {
            BlockKind::Colored(color) => Some(*color),
            BlockKind::Obstacle { .. } => None,
        }
    }

    /// Whether losing this block to a hazard fails the level
    pub fn hazard_fails_level(&self) -> bool {
        match self {
            BlockKind::Colored(_) => true,
            BlockKind::Obstacle { .. } => false,
        }
    }
}

/// Stable identifier of a block within one board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(pub u32);

/// Result of evaluating the board after a shove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Continue,
    Solved,
    Failed,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Continue => "continue",
            Outcome::Solved => "solved",
            Outcome::Failed => "failed",
        }
    }
}

/// Externally visible state of a loaded board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardStatus {
    Ready,
    Solved,
    Failed,
}

impl BoardStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BoardStatus::Ready)
    }
}

impl From<Outcome> for BoardStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Continue => BoardStatus::Ready,
            Outcome::Solved => BoardStatus::Solved,
            Outcome::Failed => BoardStatus::Failed,
        }
    }
}

/// Stage/level pair identifying one authored level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelKey {
    pub stage: u32,
    pub level: u32,
}

impl LevelKey {
    pub const fn new(stage: u32, level: u32) -> Self {
        Self { stage, level }
    }

    /// The level that follows this one, rolling over into the next stage
    /// after [`LEVELS_PER_STAGE`].
    pub fn next(self) -> Self {
        if self.level >= LEVELS_PER_STAGE {
            Self {
                stage: self.stage + 1,
                level: 1,
            }
        } else {
            Self {
                stage: self.stage,
                level: self.level + 1,
            }
        }
    }
}

impl std::fmt::Display for LevelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stage, self.level)
    }
}
