//! Outcome evaluator - hazards first, then color matching
//!
//! Precedence after every shove:
//!
//! 1. Every block resting on a hazard is destroyed. Losing a colored block
//!    fails the level; losing an obstacle does not.
//! 2. Any failing destruction means [`Outcome::Failed`], whatever else is on
//!    the board.
//! 3. Any colored block not on a destination of exactly its color means
//!    [`Outcome::Continue`].
//! 4. Otherwise [`Outcome::Solved`]. Obstacles never take part in matching.

use crate::grid::Grid;
use crate::registry::{Block, BlockRegistry};
use crate::types::{CellKind, Outcome};

/// Result of evaluating the board after a shove
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub outcome: Outcome,
    /// Blocks removed by hazards, in ascending id order
    pub destroyed: Vec<Block>,
}

/// Apply hazard destruction to `registry` and classify the board
pub fn evaluate(grid: &Grid, registry: &mut BlockRegistry) -> Evaluation {
    let doomed: Vec<_> = registry
        .blocks()
        .filter(|block| grid.get(block.position) == Some(CellKind::Hazard))
        .map(|block| block.id)
        .collect();

    let destroyed: Vec<Block> = doomed
        .into_iter()
        .filter_map(|id| registry.remove(id))
        .collect();

    let outcome = if destroyed.iter().any(|block| block.kind.hazard_fails_level()) {
        Outcome::Failed
    } else if is_solved(grid, registry) {
        Outcome::Solved
    } else {
        Outcome::Continue
    };

    Evaluation { outcome, destroyed }
}

/// Whether every colored block sits on a destination of its own color.
///
/// Vacuously true for a board without colored blocks.
pub fn is_solved(grid: &Grid, registry: &BlockRegistry) -> bool {
    registry.blocks().all(|block| match block.kind.color() {
        Some(color) => grid.get(block.position) == Some(CellKind::Destination(color)),
        None => true,
    })
}
