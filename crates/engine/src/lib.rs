//! Engine module - drives the core through levels
//!
//! The core crate knows one board at a time. This crate adds what a game
//! needs around it: a level-data provider ([`pack`]), the interface to the
//! player's progress ([`progress`]), and a [`session::Session`] that
//! sequences start, shove, restart and next-level.

pub mod pack;
pub mod progress;
pub mod session;

pub use slidebox_core as core;
pub use slidebox_types as types;

pub use pack::{LevelPack, LevelSource, PackError};
pub use progress::{LevelStatus, MemoryProgress, ProgressStore};
pub use session::{Session, SessionError};
