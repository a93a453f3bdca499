//! Level data as supplied by a level provider
//!
//! Positions are linear indices (`x = index % N`, `y = index / N`). The
//! platform is authored as `N` rows of `N` characters:
//!
//! | Char | Meaning |
//! |------|---------|
//! | `#` | platform (walkable) |
//! | `.` or space | no platform |
//!
//! ```
//! use slidebox_core::LevelData;
//!
//! let level = LevelData::from_json(r####"{
//!     "size": 3,
//!     "platform": ["###", "###", "###"],
//!     "blocks": { "1": [0] },
//!     "destinations": { "1": [2] }
//! }"####).unwrap();
//! assert_eq!(level.board_size(14), 3);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::grid::GridBuilder;
use crate::types::{BlockType, CellKind, Position};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelData {
    /// Board side; the engine default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u8>,
    pub platform: Vec<String>,
    /// Block type -> indices of the colored blocks of that type
    #[serde(default)]
    pub blocks: BTreeMap<BlockType, Vec<usize>>,
    /// Block type -> indices of the destinations for that type
    #[serde(default)]
    pub destinations: BTreeMap<BlockType, Vec<usize>>,
    /// Indices of stoppable obstacles
    #[serde(default)]
    pub obstacles: Vec<usize>,
    #[serde(default)]
    pub hazards: Vec<usize>,
}

impl LevelData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Side length of this level's board
    pub fn board_size(&self, default_size: u8) -> u8 {
        self.size.unwrap_or(default_size)
    }

    /// Convert a linear index into a position on a `size x size` board
    pub fn position(index: usize, size: u8) -> Result<Position, LoadError> {
        let n = usize::from(size);
        if index >= n * n {
            return Err(LoadError::IndexOutOfRange { index, size });
        }
        Ok(Position::from_index(index, size))
    }

    /// Base grid from the platform rows: walkable cells `Open`, the rest `Empty`
    pub fn platform_grid(&self, size: u8) -> Result<GridBuilder, LoadError> {
        if self.platform.len() != usize::from(size) {
            return Err(LoadError::Layout(format!(
                "expected {} rows, found {}",
                size,
                self.platform.len()
            )));
        }

        let mut builder = GridBuilder::new(size);
        for (y, row) in self.platform.iter().enumerate() {
            let width = row.chars().count();
            if width != usize::from(size) {
                return Err(LoadError::Layout(format!(
                    "row {} has {} cells, expected {}",
                    y, width, size
                )));
            }

            for (x, ch) in row.chars().enumerate() {
                let kind = match ch {
                    '#' => CellKind::Open,
                    '.' | ' ' => CellKind::Empty,
                    other => {
                        return Err(LoadError::Layout(format!(
                            "unexpected {:?} at row {}, column {}",
                            other, y, x
                        )))
                    }
                };
                builder
                    .set_cell_kind(Position::new(x as i16, y as i16), kind)
                    .map_err(|err| LoadError::Layout(err.to_string()))?;
            }
        }
        Ok(builder)
    }

    /// Distinct block types in the order colors are assigned:
    /// block types first, then destination-only types.
    pub fn block_types(&self) -> Vec<BlockType> {
        let mut types: Vec<BlockType> = self.blocks.keys().copied().collect();
        for &block_type in self.destinations.keys() {
            if !types.contains(&block_type) {
                types.push(block_type);
            }
        }
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(rows: &[&str]) -> LevelData {
        LevelData {
            size: Some(rows.len() as u8),
            platform: rows.iter().map(|r| r.to_string()).collect(),
            ..LevelData::default()
        }
    }

    #[test]
    fn test_platform_rows_become_cells() {
        let data = level(&["#.#", "###", " ##"]);
        let grid = data.platform_grid(3).unwrap().build();
        assert_eq!(grid.cell_kind(Position::new(1, 0)), Ok(CellKind::Empty));
        assert_eq!(grid.cell_kind(Position::new(0, 2)), Ok(CellKind::Empty));
        assert_eq!(grid.cell_kind(Position::new(2, 2)), Ok(CellKind::Open));
    }

    #[test]
    fn test_platform_shape_errors() {
        let data = level(&["###", "##"]);
        assert!(matches!(data.platform_grid(2), Err(LoadError::Layout(_))));

        let data = level(&["##", "#x"]);
        assert!(matches!(data.platform_grid(2), Err(LoadError::Layout(_))));

        let data = level(&["##", "##"]);
        assert!(matches!(data.platform_grid(3), Err(LoadError::Layout(_))));
    }

    #[test]
    fn test_index_conversion() {
        assert_eq!(LevelData::position(17, 14), Ok(Position::new(3, 1)));
        assert_eq!(
            LevelData::position(196, 14),
            Err(LoadError::IndexOutOfRange { index: 196, size: 14 })
        );
    }

    #[test]
    fn test_block_types_in_assignment_order() {
        let mut data = level(&["##", "##"]);
        data.blocks.insert(5, vec![0]);
        data.blocks.insert(2, vec![1]);
        data.destinations.insert(9, vec![2]);
        data.destinations.insert(2, vec![3]);
        assert_eq!(data.block_types(), vec![2, 5, 9]);
    }

    #[test]
    fn test_json_integer_keys() {
        let data = LevelData::from_json(
            r###"{"platform":["##","##"],"blocks":{"3":[0,1]},"hazards":[3]}"###,
        )
        .unwrap();
        assert_eq!(data.size, None);
        assert_eq!(data.board_size(2), 2);
        assert_eq!(data.blocks.get(&3), Some(&vec![0, 1]));
        assert_eq!(data.hazards, vec![3]);
        assert!(data.obstacles.is_empty());
    }
}
