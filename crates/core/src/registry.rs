//! Block registry - movable entities and their positions
//!
//! Blocks are kept in a `BTreeMap` keyed by [`BlockId`], so iteration order
//! is stable (ascending id) for any given state. A flat occupancy table
//! (`y * N + x` -> id) gives O(1) position lookups and enforces that no two
//! blocks share a cell.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PlacementError;
use crate::types::{BlockId, BlockKind, Position};

/// A movable entity on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRegistry {
    size: u8,
    blocks: BTreeMap<BlockId, Block>,
    slots: Vec<Option<BlockId>>,
    next_id: u32,
}

impl BlockRegistry {
    pub fn new(size: u8) -> Self {
        let n = usize::from(size);
        Self {
            size,
            blocks: BTreeMap::new(),
            slots: vec![None; n * n],
            next_id: 0,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Block standing on `pos`, if any (`None` outside the board)
    #[inline]
    pub fn occupant_at(&self, pos: Position) -> Option<&Block> {
        let idx = pos.to_index(self.size)?;
        self.slots[idx].and_then(|id| self.blocks.get(&id))
    }

    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        pos.to_index(self.size)
            .is_some_and(|idx| self.slots[idx].is_some())
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(&id)
    }

    /// Every block, in ascending id order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.values()
    }

    /// Place a new block; construction only
    pub fn place(&mut self, kind: BlockKind, pos: Position) -> Result<BlockId, PlacementError> {
        let idx = pos
            .to_index(self.size)
            .ok_or(PlacementError::OutOfBounds {
                position: pos,
                size: self.size,
            })?;

        if let Some(occupant) = self.slots[idx] {
            return Err(PlacementError::Occupied {
                position: pos,
                occupant,
            });
        }

        let id = BlockId(self.next_id);
        self.next_id += 1;
        self.slots[idx] = Some(id);
        self.blocks.insert(
            id,
            Block {
                id,
                kind,
                position: pos,
            },
        );
        Ok(id)
    }

    /// Remove a block (hazard destruction), returning it
    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        let block = self.blocks.remove(&id)?;
        if let Some(idx) = block.position.to_index(self.size) {
            self.slots[idx] = None;
        }
        Some(block)
    }

    /// New registry with the same blocks at the given positions.
    ///
    /// `targets` must name every block exactly once with pairwise distinct,
    /// in-bounds positions; the resolver guarantees both.
    pub(crate) fn relocated(&self, targets: &[(BlockId, Position)]) -> Self {
        let mut next = Self {
            size: self.size,
            blocks: BTreeMap::new(),
            slots: vec![None; self.slots.len()],
            next_id: self.next_id,
        };

        for &(id, position) in targets {
            let Some(block) = self.blocks.get(&id) else {
                continue;
            };
            debug_assert!(position.in_bounds(self.size), "block {:?} relocated off the board", id);
            let Some(idx) = position.to_index(self.size) else {
                continue;
            };
            debug_assert!(next.slots[idx].is_none(), "two blocks relocated onto {}", position);
            next.slots[idx] = Some(id);
            next.blocks.insert(id, Block { position, ..*block });
        }

        debug_assert_eq!(next.blocks.len(), self.blocks.len());
        next
    }
}
