//! Session - drives one player through levels
//!
//! The session loads boards from a [`LevelSource`], forwards shoves, and
//! reports solved levels to a [`ProgressStore`]. A failed load never
//! replaces the board that is currently installed.

use thiserror::Error;

use crate::core::{Board, EngineConfig, LoadError, MoveError, MoveReport};
use crate::pack::LevelSource;
use crate::progress::ProgressStore;
use crate::types::{Direction, LevelKey, Outcome};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no level is loaded")]
    NoLevel,
    #[error("cannot load level: {0}")]
    Load(#[from] LoadError),
    #[error(transparent)]
    Move(#[from] MoveError),
}

#[derive(Debug)]
pub struct Session<S, P> {
    source: S,
    progress: P,
    config: EngineConfig,
    current: Option<(LevelKey, Board)>,
}

impl<S: LevelSource, P: ProgressStore> Session<S, P> {
    pub fn new(source: S, progress: P, config: EngineConfig) -> Self {
        Self {
            source,
            progress,
            config,
            current: None,
        }
    }

    /// Load `key`, replacing the current board only on success
    pub fn start(&mut self, key: LevelKey) -> Result<&Board, SessionError> {
        let data = self.source.level(key).ok_or(LoadError::NotFound(key))?;
        let board = Board::load(&data, &self.config).map_err(|err| {
            tracing::warn!(level = %key, %err, "level failed to load");
            err
        })?;

        self.progress.set_last_played(key);
        tracing::info!(level = %key, "level started");

        let (_, board) = self.current.insert((key, board));
        Ok(&*board)
    }

    /// Reload the current level from scratch
    pub fn restart(&mut self) -> Result<&Board, SessionError> {
        let key = self.key().ok_or(SessionError::NoLevel)?;
        self.start(key)
    }

    /// Load the level after the current one (also used to skip a level)
    pub fn next_level(&mut self) -> Result<&Board, SessionError> {
        let key = self.key().ok_or(SessionError::NoLevel)?;
        self.start(key.next())
    }

    /// Continue from the last played level, or stage 1 level 1
    pub fn resume(&mut self) -> Result<&Board, SessionError> {
        let key = self.progress.last_played().unwrap_or(LevelKey::new(1, 1));
        self.start(key)
    }

    /// Shove the current board; a solved level is recorded as finished
    pub fn shove(&mut self, direction: Direction) -> Result<MoveReport, SessionError> {
        let (key, board) = self.current.as_mut().ok_or(SessionError::NoLevel)?;
        let key = *key;
        let report = board.shove(direction)?;

        match report.outcome {
            Outcome::Solved => {
                let first = self.progress.finish_level(key);
                tracing::info!(level = %key, moves = board.move_count(), first, "level solved");
            }
            Outcome::Failed => {
                tracing::info!(level = %key, moves = board.move_count(), "level failed");
            }
            Outcome::Continue => {}
        }

        Ok(report)
    }

    pub fn key(&self) -> Option<LevelKey> {
        self.current.as_ref().map(|(key, _)| *key)
    }

    pub fn board(&self) -> Option<&Board> {
        self.current.as_ref().map(|(_, board)| board)
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn into_progress(self) -> P {
        self.progress
    }
}
