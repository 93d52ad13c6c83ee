//! Tile values and the coordinate types used to address them

use serde::{Deserialize, Serialize};

/// Integer identifier of a ground type, resolved to artwork only at export
pub type TerrainId = u32;

/// A single immutable grid value
///
/// Empty cells are represented by `None` at the container level, never by a
/// zeroed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Ground type of this cell
    pub terrain: TerrainId,
    /// Relative height of this cell
    pub elevation: i32,
}

impl Tile {
    /// Create a tile at elevation zero
    pub const fn new(terrain: TerrainId) -> Self {
        Self {
            terrain,
            elevation: 0,
        }
    }

    /// Create a tile with an explicit elevation
    pub const fn with_elevation(terrain: TerrainId, elevation: i32) -> Self {
        Self { terrain, elevation }
    }
}

/// Grid coordinates, `x` growing east and `y` growing south
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Position {
    /// Create a position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a delta
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Width and height in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Size {
    /// Create a size
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether a position falls inside `[0, width) × [0, height)`
    pub const fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width
            && (position.y as usize) < self.height
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
