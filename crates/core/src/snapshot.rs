use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::registry::Block;
use crate::types::{BlockKind, BoardStatus, CellKind, Position};

/// Read-only copy of a board for renderers and tooling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: u8,
    /// Row-major cell kinds
    pub cells: Vec<CellKind>,
    pub blocks: Vec<Block>,
    pub status: BoardStatus,
    pub moves: u32,
}

impl BoardSnapshot {
    pub fn capture(board: &Board) -> Self {
        Self {
            size: board.size(),
            cells: board.grid().cells().to_vec(),
            blocks: board.blocks().copied().collect(),
            status: board.status(),
            moves: board.move_count(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn glyph_at(&self, pos: Position) -> char {
        if let Some(block) = self.blocks.iter().find(|b| b.position == pos) {
            return match block.kind {
                BlockKind::Colored(color) => color.letter(),
                BlockKind::Obstacle { stoppable: true } => '#',
                BlockKind::Obstacle { stoppable: false } => '@',
            };
        }

        match pos.to_index(self.size).and_then(|idx| self.cells.get(idx)) {
            Some(CellKind::Open) => '.',
            Some(CellKind::Destination(color)) => color.letter().to_ascii_lowercase(),
            Some(CellKind::Hazard) => '^',
            Some(CellKind::Empty) | None => ' ',
        }
    }
}

/// Text rendering, one line per row:
/// uppercase = block, lowercase = destination, `#` = stoppable obstacle,
/// `@` = obstacle, `^` = hazard, `.` = open, space = no platform.
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = i16::from(self.size);
        for y in 0..n {
            let row: String = (0..n).map(|x| self.glyph_at(Position::new(x, y))).collect();
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}
