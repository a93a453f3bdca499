//! Level packs - the in-process level-data provider
//!
//! A pack is a JSON document listing levels by stage and level number:
//!
//! ```json
//! {
//!   "levels": [
//!     {
//!       "stage": 1,
//!       "level": 1,
//!       "data": {
//!         "size": 3,
//!         "platform": ["###", "###", "###"],
//!         "blocks": { "1": [0] },
//!         "destinations": { "1": [2] }
//!       }
//!     }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::LevelData;
use crate::types::LevelKey;

/// Anything that can hand out level data by key
pub trait LevelSource {
    fn level(&self, key: LevelKey) -> Option<LevelData>;
}

#[derive(Debug, Error)]
pub enum PackError {
    #[error("invalid level pack: {0}")]
    Json(#[from] serde_json::Error),
    #[error("level {0} appears more than once")]
    DuplicateLevel(LevelKey),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PackEntry {
    stage: u32,
    level: u32,
    data: LevelData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PackDocument {
    levels: Vec<PackEntry>,
}

/// In-memory level pack
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelPack {
    levels: BTreeMap<LevelKey, LevelData>,
}

impl LevelPack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a pack document, rejecting duplicate keys
    pub fn from_json(json: &str) -> Result<Self, PackError> {
        let document: PackDocument = serde_json::from_str(json)?;
        let mut pack = Self::new();
        for entry in document.levels {
            let key = LevelKey::new(entry.stage, entry.level);
            if pack.levels.insert(key, entry.data).is_some() {
                return Err(PackError::DuplicateLevel(key));
            }
        }
        tracing::debug!(levels = pack.len(), "level pack parsed");
        Ok(pack)
    }

    pub fn to_json(&self) -> Result<String, PackError> {
        let document = PackDocument {
            levels: self
                .levels
                .iter()
                .map(|(key, data)| PackEntry {
                    stage: key.stage,
                    level: key.level,
                    data: data.clone(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Add or replace a level
    pub fn insert(&mut self, key: LevelKey, data: LevelData) -> Option<LevelData> {
        self.levels.insert(key, data)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Keys in stage/level order
    pub fn keys(&self) -> impl Iterator<Item = LevelKey> + '_ {
        self.levels.keys().copied()
    }
}

impl LevelSource for LevelPack {
    fn level(&self, key: LevelKey) -> Option<LevelData> {
        self.levels.get(&key).cloned()
    }
}
