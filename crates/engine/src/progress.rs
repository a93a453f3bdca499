//! Player progress interface
//!
//! The engine only reports results; where progress is kept (a save file,
//! platform storage, a server) is up to the embedding application. This
//! module defines the operations a session needs and an in-memory store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::LevelKey;

/// Unlock/finish flags of one level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelStatus {
    pub unlocked: bool,
    pub finished: bool,
}

pub trait ProgressStore {
    fn level_status(&self, key: LevelKey) -> LevelStatus;
    fn mark_unlocked(&mut self, key: LevelKey);
    fn mark_finished(&mut self, key: LevelKey);
    fn stage_stars(&self, stage: u32) -> u32;
    fn add_star(&mut self, stage: u32);
    fn total_stars(&self) -> u32;
    fn set_last_played(&mut self, key: LevelKey);
    fn last_played(&self) -> Option<LevelKey>;

    /// Record a solved level.
    ///
    /// The first completion marks the level finished and earns its stage a
    /// star. Every completion unlocks the following level. Returns whether
    /// this was the first completion.
    fn finish_level(&mut self, key: LevelKey) -> bool {
        let first = !self.level_status(key).finished;
        if first {
            self.mark_finished(key);
            self.add_star(key.stage);
        }
        self.mark_unlocked(key.next());
        first
    }
}

/// Progress kept in memory for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryProgress {
    levels: BTreeMap<LevelKey, LevelStatus>,
    stars: BTreeMap<u32, u32>,
    last_played: Option<LevelKey>,
}

impl MemoryProgress {
    /// Fresh progress: only stage 1, level 1 is unlocked
    pub fn new() -> Self {
        let mut levels = BTreeMap::new();
        levels.insert(
            LevelKey::new(1, 1),
            LevelStatus {
                unlocked: true,
                finished: false,
            },
        );
        Self {
            levels,
            stars: BTreeMap::new(),
            last_played: None,
        }
    }
}

impl Default for MemoryProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressStore for MemoryProgress {
    fn level_status(&self, key: LevelKey) -> LevelStatus {
        self.levels.get(&key).copied().unwrap_or_default()
    }

    fn mark_unlocked(&mut self, key: LevelKey) {
        self.levels.entry(key).or_default().unlocked = true;
    }

    fn mark_finished(&mut self, key: LevelKey) {
        self.levels.entry(key).or_default().finished = true;
    }

    fn stage_stars(&self, stage: u32) -> u32 {
        self.stars.get(&stage).copied().unwrap_or(0)
    }

    fn add_star(&mut self, stage: u32) {
        *self.stars.entry(stage).or_insert(0) += 1;
    }

    fn total_stars(&self) -> u32 {
        self.stars.values().sum()
    }

    fn set_last_played(&mut self, key: LevelKey) {
        self.last_played = Some(key);
    }

    fn last_played(&self) -> Option<LevelKey> {
        self.last_played
    }
}
