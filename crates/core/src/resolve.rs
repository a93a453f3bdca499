//! Movement resolver - simultaneous shove of every block
//!
//! A shove is resolved in two phases:
//!
//! 1. **Plan**: for every block compute its slide distance against the
//!    registry as it was *before* the shove. Nothing is written yet, so a
//!    block that vacates its cell never opens a gap for a block behind it
//!    within the same shove.
//! 2. **Apply**: build a new registry with every block at
//!    `position + distance * direction` in one batch.
//!
//! Because the plan only reads the snapshot, the result does not depend on
//! the order in which blocks are visited.
//!
//! Scanning from a block stops at the board edge, at an `Empty` cell, or at
//! a cell occupied in the snapshot; the distance is the number of free cells
//! crossed before that point. Obstacles never slide.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::registry::{Block, BlockRegistry};
use crate::types::{BlockId, Direction, Position};

/// Displacement of a single block during a shove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockMove {
    pub id: BlockId,
    pub from: Position,
    pub to: Position,
    pub distance: u16,
}

/// Result of resolving one shove
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub direction: Direction,
    /// Registry after the shove; holds every block, moved or not
    pub registry: BlockRegistry,
    /// Blocks that travelled at least one cell, in ascending id order
    pub moved: Vec<BlockMove>,
}

impl Resolution {
    /// Sum of all slide distances
    pub fn displacement(&self) -> u32 {
        self.moved.iter().map(|m| u32::from(m.distance)).sum()
    }

    /// True when no block moved; repeating the same direction changes nothing
    pub fn is_fixed_point(&self) -> bool {
        self.moved.is_empty()
    }
}

/// How far `block` slides along `direction` given the pre-shove snapshot
pub fn slide_distance(
    grid: &Grid,
    snapshot: &BlockRegistry,
    block: &Block,
    direction: Direction,
) -> u16 {
    if !block.kind.slides() {
        return 0;
    }

    let mut distance = 0u16;
    let mut cursor = block.position.step(direction, 1);
    while grid.is_walkable(cursor) && !snapshot.is_occupied(cursor) {
        distance += 1;
        cursor = cursor.step(direction, 1);
    }
    distance
}

/// Resolve a shove of every block in `direction`.
///
/// Pure function of `(grid, registry, direction)`: `registry` is only read.
pub fn resolve_move(grid: &Grid, registry: &BlockRegistry, direction: Direction) -> Resolution {
    let mut targets = Vec::with_capacity(registry.len());
    let mut moved = Vec::new();

    for block in registry.blocks() {
        let distance = slide_distance(grid, registry, block, direction);
        let to = block.position.step(direction, distance as i16);
        targets.push((block.id, to));
        if distance > 0 {
            moved.push(BlockMove {
                id: block.id,
                from: block.position,
                to,
                distance,
            });
        }
    }

    Resolution {
        direction,
        registry: registry.relocated(&targets),
        moved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridBuilder;
    use crate::types::{BlockKind, CellKind, Color};

    const RED: BlockKind = BlockKind::Colored(Color::Red);
    const BLUE: BlockKind = BlockKind::Colored(Color::Blue);
    const WALL: BlockKind = BlockKind::Obstacle { stoppable: true };

    fn positions(registry: &BlockRegistry) -> Vec<Position> {
        registry.blocks().map(|b| b.position).collect()
    }

    #[test]
    fn test_single_block_slides_to_edge() {
        let grid = Grid::open(5);
        let mut registry = BlockRegistry::new(5);
        registry.place(RED, Position::new(0, 2)).unwrap();

        let res = resolve_move(&grid, &registry, Direction::Right);
        assert_eq!(positions(&res.registry), vec![Position::new(4, 2)]);
        assert_eq!(res.displacement(), 4);

        let res = resolve_move(&grid, &res.registry, Direction::Up);
        assert_eq!(positions(&res.registry), vec![Position::new(4, 0)]);
    }

    #[test]
    fn test_block_stops_before_void() {
        let mut builder = GridBuilder::filled(5, CellKind::Open);
        builder
            .set_cell_kind(Position::new(3, 0), CellKind::Empty)
            .unwrap();
        let grid = builder.build();
        let mut registry = BlockRegistry::new(5);
        registry.place(RED, Position::new(0, 0)).unwrap();

        let res = resolve_move(&grid, &registry, Direction::Right);
        assert_eq!(positions(&res.registry), vec![Position::new(2, 0)]);
    }

    #[test]
    fn test_trailing_block_sees_pre_move_snapshot() {
        // Row: A B . . -> A stays (B was adjacent before the shove), B slides
        let grid = Grid::open(4);
        let mut registry = BlockRegistry::new(4);
        let a = registry.place(RED, Position::new(0, 0)).unwrap();
        let b = registry.place(BLUE, Position::new(1, 0)).unwrap();

        let res = resolve_move(&grid, &registry, Direction::Right);
        assert_eq!(res.registry.get(a).unwrap().position, Position::new(0, 0));
        assert_eq!(res.registry.get(b).unwrap().position, Position::new(3, 0));
        assert_eq!(res.moved.len(), 1);
        assert_eq!(res.moved[0].id, b);

        // Second shove closes the gap
        let res = resolve_move(&grid, &res.registry, Direction::Right);
        assert_eq!(res.registry.get(a).unwrap().position, Position::new(2, 0));
        assert!(resolve_move(&grid, &res.registry, Direction::Right).is_fixed_point());
    }

    #[test]
    fn test_stoppable_obstacle_never_moves() {
        let grid = Grid::open(3);
        let mut registry = BlockRegistry::new(3);
        let block = registry.place(RED, Position::new(0, 0)).unwrap();
        let wall = registry.place(WALL, Position::new(1, 0)).unwrap();

        let res = resolve_move(&grid, &registry, Direction::Right);
        assert_eq!(res.registry.get(block).unwrap().position, Position::new(0, 0));
        assert_eq!(res.registry.get(wall).unwrap().position, Position::new(1, 0));
        assert!(res.is_fixed_point());

        for direction in Direction::ALL {
            let res = resolve_move(&grid, &registry, direction);
            assert_eq!(res.registry.get(wall).unwrap().position, Position::new(1, 0));
        }
    }

    #[test]
    fn test_plain_obstacle_stays_put() {
        let grid = Grid::open(3);
        let mut registry = BlockRegistry::new(3);
        let crate_id = registry
            .place(BlockKind::Obstacle { stoppable: false }, Position::new(0, 0))
            .unwrap();
        registry.place(RED, Position::new(0, 1)).unwrap();

        for direction in Direction::ALL {
            let res = resolve_move(&grid, &registry, direction);
            assert_eq!(res.registry.get(crate_id).unwrap().position, Position::new(0, 0));
        }

        // The red block below it cannot climb past the obstacle
        let res = resolve_move(&grid, &registry, Direction::Up);
        assert!(res.moved.is_empty());
    }

    #[test]
    fn test_blocks_in_other_rows_do_not_interfere() {
        let grid = Grid::open(3);
        let mut registry = BlockRegistry::new(3);
        registry.place(RED, Position::new(0, 0)).unwrap();
        registry.place(BLUE, Position::new(0, 1)).unwrap();

        let res = resolve_move(&grid, &registry, Direction::Right);
        assert_eq!(
            positions(&res.registry),
            vec![Position::new(2, 0), Position::new(2, 1)]
        );
    }

    #[test]
    fn test_resolution_does_not_touch_input() {
        let grid = Grid::open(3);
        let mut registry = BlockRegistry::new(3);
        registry.place(RED, Position::new(0, 0)).unwrap();
        let before = registry.clone();

        let _ = resolve_move(&grid, &registry, Direction::Left);
        let _ = resolve_move(&grid, &registry, Direction::Right);
        assert_eq!(registry, before);
    }
}
