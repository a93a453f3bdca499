//! Shove invariants checked over many generated boards

use std::collections::HashSet;

use slidebox::core::{resolve_move, BlockRegistry, Grid, GridBuilder, SimpleRng};
use slidebox::types::{BlockKind, CellKind, Color, Direction, Position};

struct Layout {
    size: u8,
    grid: Grid,
    /// Blocks in placement order
    blocks: Vec<(BlockKind, Position)>,
}

impl Layout {
    fn generate(rng: &mut SimpleRng) -> Self {
        let size = 3 + rng.next_index(6) as u8;
        let mut builder = GridBuilder::new(size);
        let mut blocks = Vec::new();

        for y in 0..i16::from(size) {
            for x in 0..i16::from(size) {
                let pos = Position::new(x, y);
                let kind = match rng.next_index(20) {
                    0..=2 => CellKind::Empty,
                    3..=4 => CellKind::Hazard,
                    5..=6 => CellKind::Destination(Color::ALL[rng.next_index(3)]),
                    _ => CellKind::Open,
                };
                builder.set_cell_kind(pos, kind).unwrap();
                if kind.is_walkable() {
                    let block = match rng.next_index(12) {
                        0..=2 => Some(BlockKind::Colored(Color::ALL[rng.next_index(3)])),
                        3 => Some(BlockKind::Obstacle { stoppable: false }),
                        4 => Some(BlockKind::Obstacle { stoppable: true }),
                        _ => None,
                    };
                    if let Some(block) = block {
                        blocks.push((block, pos));
                    }
                }
            }
        }

        Self {
            size,
            grid: builder.build(),
            blocks,
        }
    }

    fn registry<'a>(&self, order: impl Iterator<Item = &'a (BlockKind, Position)>) -> BlockRegistry {
        let mut registry = BlockRegistry::new(self.size);
        for &(kind, pos) in order {
            registry.place(kind, pos).unwrap();
        }
        registry
    }
}

fn layouts(count: usize) -> Vec<Layout> {
    let mut rng = SimpleRng::new(20240611);
    (0..count).map(|_| Layout::generate(&mut rng)).collect()
}

fn kinds_multiset(registry: &BlockRegistry) -> Vec<String> {
    let mut kinds: Vec<String> = registry.blocks().map(|b| format!("{:?}", b.kind)).collect();
    kinds.sort();
    kinds
}

#[test]
fn shove_is_deterministic() {
    for layout in layouts(200) {
        let registry = layout.registry(layout.blocks.iter());
        for direction in Direction::ALL {
            let first = resolve_move(&layout.grid, &registry, direction);
            let second = resolve_move(&layout.grid, &registry, direction);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn shove_conserves_blocks_and_respects_board() {
    for layout in layouts(200) {
        let registry = layout.registry(layout.blocks.iter());
        for direction in Direction::ALL {
            let res = resolve_move(&layout.grid, &registry, direction);
            let after = &res.registry;

            assert_eq!(after.len(), registry.len());
            assert_eq!(kinds_multiset(after), kinds_multiset(&registry));

            let mut seen = HashSet::new();
            for block in after.blocks() {
                assert!(block.position.in_bounds(layout.size));
                assert!(layout.grid.is_walkable(block.position), "block on void at {}", block.position);
                assert!(seen.insert(block.position), "two blocks on {}", block.position);
                assert_eq!(after.occupant_at(block.position).map(|b| b.id), Some(block.id));

                let before = registry.get(block.id).unwrap();
                assert_eq!(before.kind, block.kind);
                if !block.kind.slides() {
                    assert_eq!(before.position, block.position);
                }
            }
        }
    }
}

#[test]
fn shove_moves_only_along_direction() {
    for layout in layouts(100) {
        let registry = layout.registry(layout.blocks.iter());
        for direction in Direction::ALL {
            let res = resolve_move(&layout.grid, &registry, direction);
            for m in &res.moved {
                assert!(registry.get(m.id).unwrap().kind.slides(), "obstacle moved from {}", m.from);
                assert_eq!(m.from.step(direction, m.distance as i16), m.to);
                // Every crossed cell was walkable and free before the shove
                for step in 1..=m.distance as i16 {
                    let cell = m.from.step(direction, step);
                    assert!(layout.grid.is_walkable(cell));
                    assert!(!registry.is_occupied(cell));
                }
            }
        }
    }
}

#[test]
fn shove_does_not_depend_on_block_order() {
    for layout in layouts(150) {
        let forward = layout.registry(layout.blocks.iter());
        let backward = layout.registry(layout.blocks.iter().rev());
        for direction in Direction::ALL {
            let a: HashSet<_> = resolve_move(&layout.grid, &forward, direction)
                .registry
                .blocks()
                .map(|b| (b.position, b.kind))
                .collect();
            let b: HashSet<_> = resolve_move(&layout.grid, &backward, direction)
                .registry
                .blocks()
                .map(|b| (b.position, b.kind))
                .collect();
            assert_eq!(a, b);
        }
    }
}

#[test]
fn repeated_shoves_reach_fixed_point_within_board_size() {
    for layout in layouts(150) {
        for direction in Direction::ALL {
            let mut registry = layout.registry(layout.blocks.iter());
            let mut settled = false;
            for _ in 0..layout.size {
                let res = resolve_move(&layout.grid, &registry, direction);
                if res.is_fixed_point() {
                    settled = true;
                    break;
                }
                registry = res.registry;
            }
            assert!(settled, "no fixed point after {} shoves {:?}", layout.size, direction);
        }
    }
}
