//! Grid module - static cell kinds of the playfield
//!
//! The grid is an `N x N` field stored as a flat row-major vector
//! (`y * N + x`). It is assembled with a [`GridBuilder`] while a level loads
//! (platform layout first, then destinations and hazards stamped on top) and
//! frozen into a [`Grid`] that has no mutating API for the rest of the level.

use crate::error::GridError;
use crate::types::{CellKind, Position};

/// Mutable grid used only during level construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuilder {
    size: u8,
    cells: Vec<CellKind>,
}

impl GridBuilder {
    /// Create a builder with every cell `Empty`
    pub fn new(size: u8) -> Self {
        Self::filled(size, CellKind::Empty)
    }

    /// Create a builder with every cell set to `kind`
    pub fn filled(size: u8, kind: CellKind) -> Self {
        let n = usize::from(size);
        Self {
            size,
            cells: vec![kind; n * n],
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cell_kind(&self, pos: Position) -> Result<CellKind, GridError> {
        let idx = index(self.size, pos)?;
        Ok(self.cells[idx])
    }

    /// Stamp `kind` onto the cell at `pos`
    pub fn set_cell_kind(&mut self, pos: Position, kind: CellKind) -> Result<(), GridError> {
        let idx = index(self.size, pos)?;
        self.cells[idx] = kind;
        Ok(())
    }

    /// Freeze into a read-only grid
    pub fn build(self) -> Grid {
        Grid {
            size: self.size,
            cells: self.cells,
        }
    }
}

/// Frozen grid of cell kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    cells: Vec<CellKind>,
}

impl Grid {
    /// A fully open `size x size` grid
    pub fn open(size: u8) -> Self {
        GridBuilder::filled(size, CellKind::Open).build()
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Cell kind at `pos`, failing outside the board
    pub fn cell_kind(&self, pos: Position) -> Result<CellKind, GridError> {
        let idx = index(self.size, pos)?;
        Ok(self.cells[idx])
    }

    /// Cell kind at `pos`, `None` outside the board
    #[inline]
    pub fn get(&self, pos: Position) -> Option<CellKind> {
        pos.to_index(self.size).map(|idx| self.cells[idx])
    }

    /// Whether a block may stand on `pos` (false outside the board)
    #[inline]
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|kind| kind.is_walkable())
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }
}

fn index(size: u8, pos: Position) -> Result<usize, GridError> {
    pos.to_index(size)
        .ok_or(GridError { position: pos, size })
}
