//! Flat row-major tile storage with neighbor and index arithmetic
//!
//! Every layer owns one `TileGrid`. Cells are addressed either by `(x, y)`
//! or by flat index `y * width + x`; both views stay consistent because the
//! backing array is a standard-layout `(height, width)` matrix.

use crate::spatial::direction::NEIGHBOR_OFFSETS;
use crate::spatial::tile::{Position, Size, Tile};
use ndarray::Array2;
use serde::{Serialize, Serializer};

/// Fixed-size grid of optional tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    size: Size,
    cells: Array2<Option<Tile>>,
}

impl TileGrid {
    /// Create an empty grid
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cells: Array2::from_elem((size.height, size.width), None),
        }
    }

    /// Grid extent
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Number of cells, always `width * height`
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has zero cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Tile at a position, `None` when empty or off the grid
    pub fn get(&self, position: Position) -> Option<Tile> {
        if !self.size.contains(position) {
            return None;
        }
        self.cells
            .get((position.y as usize, position.x as usize))
            .copied()
            .flatten()
    }

    /// Write or clear a cell; returns `false` for off-grid positions
    pub fn set(&mut self, position: Position, tile: Option<Tile>) -> bool {
        if !self.size.contains(position) {
            return false;
        }
        match self.cells.get_mut((position.y as usize, position.x as usize)) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Whether a position holds a tile
    pub fn is_occupied(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    /// The 8 neighbors of a cell in mask order, `None` for off-grid neighbors
    pub fn surrounds(&self, position: Position) -> [Option<Tile>; 8] {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| self.get(position.offset(dx, dy)))
    }

    /// Coordinates of a flat index
    pub const fn index_position(&self, index: usize) -> Position {
        if self.size.width == 0 {
            return Position::new(0, 0);
        }
        Position::new(
            (index % self.size.width) as i32,
            (index / self.size.width) as i32,
        )
    }

    /// Tile at a flat index
    pub fn get_index(&self, index: usize) -> Option<Tile> {
        if index >= self.len() {
            return None;
        }
        self.get(self.index_position(index))
    }

    /// Write or clear the cell at a flat index
    pub fn set_index(&mut self, index: usize, tile: Option<Tile>) -> bool {
        if index >= self.len() {
            return false;
        }
        self.set(self.index_position(index), tile)
    }

    /// Overwrite every cell
    pub fn fill(&mut self, tile: Option<Tile>) {
        self.cells.fill(tile);
    }

    /// Cells in flat-index order
    pub fn tiles(&self) -> impl Iterator<Item = Option<Tile>> + '_ {
        self.cells.iter().copied()
    }

    /// Cells with their coordinates in flat-index order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<Tile>)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), tile)| (Position::new(x as i32, y as i32), *tile))
    }
}

impl Serialize for TileGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter())
    }
}
