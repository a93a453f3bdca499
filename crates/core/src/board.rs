//! Board module - one loaded level
//!
//! A [`Board`] owns the frozen [`Grid`], the [`BlockRegistry`] and the
//! [`ColorAssigner`] used while loading. It is built in one go by
//! [`Board::load`]; any construction error leaves no board behind.
//!
//! Lifecycle: `Ready -> (shove) -> Ready | Solved | Failed`. Each
//! [`Board::shove`] resolves the move and evaluates the result before
//! returning, so callers only ever observe settled states. Once the board
//! is `Solved` or `Failed` further shoves are rejected.

use crate::config::{validate_board_size, EngineConfig};
use crate::error::{GridError, LoadError, MoveError, PlacementError};
use crate::grid::Grid;
use crate::level::LevelData;
use crate::outcome::evaluate;
use crate::palette::{ColorAssigner, Palette};
use crate::registry::{Block, BlockRegistry};
use crate::resolve::{resolve_move, BlockMove};
use crate::snapshot::BoardSnapshot;
use crate::types::{BlockKind, BlockType, BoardStatus, CellKind, Color, Direction, Outcome, Position};

/// Everything that happened during one shove
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub direction: Direction,
    pub outcome: Outcome,
    /// Blocks that travelled, with their start and end cells
    pub moved: Vec<BlockMove>,
    /// Blocks removed by hazards after the slide
    pub destroyed: Vec<Block>,
}

#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    registry: BlockRegistry,
    colors: ColorAssigner,
    status: BoardStatus,
    moves: u32,
}

impl Board {
    /// Build a board from level data.
    ///
    /// Colors are assigned to block types first, then to destination-only
    /// types. Destinations and hazards are stamped before blocks are placed,
    /// so a destination may sit where the platform layout has no cell.
    pub fn load(level: &LevelData, config: &EngineConfig) -> Result<Self, LoadError> {
        config.validate()?;
        let size = level.board_size(config.board_size);
        validate_board_size(size)?;

        let mut colors = ColorAssigner::new(config.palette.clone(), config.seed);
        for block_type in level.block_types() {
            colors.color_for(block_type)?;
        }

        let mut builder = level.platform_grid(size)?;
        let mut stamped = vec![false; usize::from(size) * usize::from(size)];

        for (&block_type, indices) in &level.destinations {
            let color = colors.color_for(block_type)?;
            for &index in indices {
                let pos = LevelData::position(index, size)?;
                stamp(&mut stamped, index, pos)?;
                builder
                    .set_cell_kind(pos, CellKind::Destination(color))
                    .map_err(|err| LoadError::Layout(err.to_string()))?;
            }
        }

        for &index in &level.hazards {
            let pos = LevelData::position(index, size)?;
            stamp(&mut stamped, index, pos)?;
            builder
                .set_cell_kind(pos, CellKind::Hazard)
                .map_err(|err| LoadError::Layout(err.to_string()))?;
        }

        let grid = builder.build();
        let mut registry = BlockRegistry::new(size);

        for (&block_type, indices) in &level.blocks {
            let color = colors.color_for(block_type)?;
            for &index in indices {
                let pos = LevelData::position(index, size)?;
                place(&grid, &mut registry, BlockKind::Colored(color), pos)?;
            }
        }

        for &index in &level.obstacles {
            let pos = LevelData::position(index, size)?;
            place(&grid, &mut registry, BlockKind::Obstacle { stoppable: true }, pos)?;
        }

        tracing::info!(
            size,
            blocks = registry.len(),
            types = colors.assignments().count(),
            "level loaded"
        );

        Ok(Self {
            grid,
            registry,
            colors,
            status: BoardStatus::Ready,
            moves: 0,
        })
    }

    /// Assemble a board from a prepared grid and registry, checking that
    /// every block stands on a walkable cell of a board of the same size.
    pub fn from_parts(grid: Grid, registry: BlockRegistry) -> Result<Self, LoadError> {
        if grid.size() != registry.size() {
            return Err(LoadError::Layout(format!(
                "grid is {0}x{0} but registry is {1}x{1}",
                grid.size(),
                registry.size()
            )));
        }
        if let Some(block) = registry.blocks().find(|b| !grid.is_walkable(b.position)) {
            return Err(PlacementError::NoPlatform {
                position: block.position,
            }
            .into());
        }

        Ok(Self {
            grid,
            registry,
            colors: ColorAssigner::new(Palette::full(), 1),
            status: BoardStatus::Ready,
            moves: 0,
        })
    }

    /// Shove every block in `direction`, then evaluate the result
    pub fn shove(&mut self, direction: Direction) -> Result<MoveReport, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::Finished {
                status: self.status,
            });
        }

        let resolution = resolve_move(&self.grid, &self.registry, direction);
        let mut registry = resolution.registry;
        let evaluation = evaluate(&self.grid, &mut registry);

        self.registry = registry;
        self.status = evaluation.outcome.into();
        self.moves += 1;

        tracing::debug!(
            direction = direction.as_str(),
            moved = resolution.moved.len(),
            destroyed = evaluation.destroyed.len(),
            outcome = evaluation.outcome.as_str(),
            "shove resolved"
        );

        Ok(MoveReport {
            direction,
            outcome: evaluation.outcome,
            moved: resolution.moved,
            destroyed: evaluation.destroyed,
        })
    }

    pub fn status(&self) -> BoardStatus {
        self.status
    }

    /// Number of shoves applied since load
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    pub fn size(&self) -> u8 {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.registry.blocks()
    }

    pub fn cell_kind(&self, pos: Position) -> Result<CellKind, GridError> {
        self.grid.cell_kind(pos)
    }

    pub fn occupant_at(&self, pos: Position) -> Option<&Block> {
        self.registry.occupant_at(pos)
    }

    /// Color assigned to `block_type` during load
    pub fn type_color(&self, block_type: BlockType) -> Option<Color> {
        self.colors.assigned(block_type)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }
}

fn stamp(stamped: &mut [bool], index: usize, position: Position) -> Result<(), LoadError> {
    if stamped[index] {
        return Err(LoadError::CellConflict { position });
    }
    stamped[index] = true;
    Ok(())
}

fn place(
    grid: &Grid,
    registry: &mut BlockRegistry,
    kind: BlockKind,
    position: Position,
) -> Result<(), LoadError> {
    if !grid.is_walkable(position) {
        return Err(PlacementError::NoPlatform { position }.into());
    }
    registry.place(kind, position)?;
    Ok(())
}
