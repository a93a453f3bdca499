//! Core engine - pure, deterministic sliding-block puzzle logic
//!
//! This crate holds the rules of the puzzle and nothing else: no I/O, no
//! rendering, no input handling. Given a board and a direction it produces
//! exactly one resulting board and one outcome.
//!
//! # Module Structure
//!
//! - [`grid`]: static cell kinds (platform, destinations, hazards)
//! - [`palette`]: color palette and per-load block type -> color assignment
//! - [`registry`]: movable blocks and their positions
//! - [`resolve`]: simultaneous shove resolution against a pre-move snapshot
//! - [`outcome`]: hazard destruction and solved/failed/continue classification
//! - [`board`]: one loaded level tying the above together
//! - [`level`]: level data as delivered by a level provider
//! - [`snapshot`]: serializable read-only view for renderers
//! - [`config`]: engine configuration (board size, palette, seed)
//!
//! # Rules
//!
//! - **Shove**: every sliding block moves as far as it can in the chosen
//!   direction, stopping before the board edge, a cell without platform, or
//!   a cell that was occupied before the shove started
//! - **Stoppable obstacles** never move
//! - **Hazards** destroy whatever rests on them; losing a colored block fails the level
//! - **Solved** when every colored block rests on a destination of its color
//!
//! # Example
//!
//! ```
//! use slidebox_core::{Board, EngineConfig, LevelData};
//! use slidebox_core::types::{Direction, Outcome};
//!
//! let level = LevelData::from_json(r####"{
//!     "size": 3,
//!     "platform": ["###", "###", "###"],
//!     "blocks": { "1": [0] },
//!     "destinations": { "1": [2] }
//! }"####).unwrap();
//!
//! let mut board = Board::load(&level, &EngineConfig::default()).unwrap();
//! let report = board.shove(Direction::Right).unwrap();
//! assert_eq!(report.outcome, Outcome::Solved);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod grid;
pub mod level;
pub mod outcome;
pub mod palette;
pub mod registry;
pub mod resolve;
pub mod rng;
pub mod snapshot;

pub use slidebox_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveReport};
pub use config::EngineConfig;
pub use error::{ColorError, ConfigError, GridError, LoadError, MoveError, PlacementError};
pub use grid::{Grid, GridBuilder};
pub use level::LevelData;
pub use outcome::{evaluate, is_solved, Evaluation};
pub use palette::{ColorAssigner, Palette};
pub use registry::{Block, BlockRegistry};
pub use resolve::{resolve_move, slide_distance, BlockMove, Resolution};
pub use rng::SimpleRng;
pub use snapshot::BoardSnapshot;
