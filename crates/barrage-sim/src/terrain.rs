//! Sparse block map — the terrain queried for shell obstruction.
//!
//! Cells default to `Air`; only non-air cells are stored.

use std::collections::HashMap;

use barrage_core::enums::BlockKind;
use barrage_core::types::{BlockPos, Position};

/// The world's block grid.
#[derive(Debug, Clone, Default)]
pub struct BlockMap {
    cells: HashMap<BlockPos, BlockKind>,
}

impl BlockMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block kind of one cell. Setting `Air` clears the cell.
    pub fn set_block(&mut self, cell: BlockPos, kind: BlockKind) {
        if kind == BlockKind::Air {
            self.cells.remove(&cell);
        } else {
            self.cells.insert(cell, kind);
        }
    }

    /// Fill an inclusive box of cells with one kind.
    pub fn fill_box(&mut self, min: BlockPos, max: BlockPos, kind: BlockKind) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.set_block(BlockPos::new(x, y, z), kind);
                }
            }
        }
    }

    /// The block kind of the cell containing a world position.
    pub fn block_at(&self, pos: &Position) -> BlockKind {
        self.cells
            .get(&BlockPos::containing(pos))
            .copied()
            .unwrap_or_default()
    }

    /// Whether a shell can occupy the cell containing `pos`.
    pub fn is_passable(&self, pos: &Position) -> bool {
        self.block_at(pos).is_passable()
    }

    /// Number of non-air cells.
    pub fn solid_count(&self) -> usize {
        self.cells.len()
    }
}
