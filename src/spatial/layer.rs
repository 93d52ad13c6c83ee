//! Terrain and tiled-object layers
//!
//! A `Layer` is a sum type over the two layer variants. Positional reads go
//! through the shared grid; writes are variant-specific: terrain layers take
//! tiles directly while object layers only change through object placement.

use crate::spatial::grid::TileGrid;
use crate::spatial::object::{Object, PlacementOptions};
use crate::spatial::tile::{Position, Size, Tile, TerrainId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layer variant tag, as written in configurations and snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Grid of terrain tiles
    #[default]
    Terrain,
    /// Collection of placed objects
    #[serde(alias = "objectgroup")]
    TiledObject,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terrain => write!(f, "terrain"),
            Self::TiledObject => write!(f, "tiledobject"),
        }
    }
}

/// Named grid of terrain tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainLayer {
    name: String,
    grid: TileGrid,
}

impl TerrainLayer {
    /// Create an empty terrain layer
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            grid: TileGrid::new(size),
        }
    }

    /// Layer name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backing grid
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Mutable backing grid
    pub const fn grid_mut(&mut self) -> &mut TileGrid {
        &mut self.grid
    }

    /// Tile at a position
    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.grid.get(position)
    }

    /// Write a tile; off-grid writes are ignored and return `false`
    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        self.grid.set(Position::new(x, y), Some(tile))
    }

    /// Clear a cell back to empty
    pub fn clear_tile(&mut self, position: Position) -> bool {
        self.grid.set(position, None)
    }

    /// Set every cell to the same tile
    pub fn fill(&mut self, tile: Tile) {
        self.grid.fill(Some(tile));
    }
}

/// Named layer of placed objects
///
/// The grid mirrors object occupancy: every opaque footprint cell of every
/// placed object shows the object's tile there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLayer {
    name: String,
    grid: TileGrid,
    objects: Vec<Object>,
}

impl ObjectLayer {
    /// Create an object layer with no objects
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            grid: TileGrid::new(size),
            objects: Vec::new(),
        }
    }

    /// Layer name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Occupancy grid
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Placed objects in placement order
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Tile an object shows at a position
    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.grid.get(position)
    }

    /// Whether any object covers a position
    pub fn is_occupied(&self, position: Position) -> bool {
        self.grid.is_occupied(position)
    }

    /// Place an object and record its occupancy
    ///
    /// Footprint cells outside the layer are clipped. Without
    /// `allow_collisions` the placement fails, leaving the layer untouched,
    /// when any covered cell is already occupied.
    pub fn add_object(&mut self, object: Object, options: PlacementOptions) -> bool {
        let cells: Vec<(Position, TerrainId)> = object
            .covered_cells()
            .filter(|(position, _)| self.grid.size().contains(*position))
            .collect();

        if !options.allow_collisions
            && cells
                .iter()
                .any(|(position, _)| self.grid.is_occupied(*position))
        {
            return false;
        }

        for (position, terrain) in cells {
            self.grid.set(position, Some(Tile::new(terrain)));
        }
        self.objects.push(object);
        true
    }
}

/// A map layer of either variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layer {
    /// Terrain tile grid
    Terrain(TerrainLayer),
    /// Placed objects
    TiledObject(ObjectLayer),
}

impl Layer {
    /// Create an empty layer of the given kind
    pub fn empty(kind: LayerKind, name: impl Into<String>, size: Size) -> Self {
        match kind {
            LayerKind::Terrain => Self::Terrain(TerrainLayer::new(name, size)),
            LayerKind::TiledObject => Self::TiledObject(ObjectLayer::new(name, size)),
        }
    }

    /// Layer name
    pub fn name(&self) -> &str {
        match self {
            Self::Terrain(layer) => layer.name(),
            Self::TiledObject(layer) => layer.name(),
        }
    }

    /// Variant tag
    pub const fn kind(&self) -> LayerKind {
        match self {
            Self::Terrain(_) => LayerKind::Terrain,
            Self::TiledObject(_) => LayerKind::TiledObject,
        }
    }

    /// Backing grid of either variant
    pub const fn grid(&self) -> &TileGrid {
        match self {
            Self::Terrain(layer) => layer.grid(),
            Self::TiledObject(layer) => layer.grid(),
        }
    }

    /// Layer extent
    pub const fn size(&self) -> Size {
        self.grid().size()
    }

    /// Tile at a position
    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.grid().get(position)
    }

    /// The 8 neighbors of a cell in mask order
    pub fn surrounds(&self, x: i32, y: i32) -> [Option<Tile>; 8] {
        self.grid().surrounds(Position::new(x, y))
    }

    /// Coordinates of a flat index
    pub const fn index_position(&self, index: usize) -> Position {
        self.grid().index_position(index)
    }

    /// Terrain view, if this is a terrain layer
    pub const fn as_terrain(&self) -> Option<&TerrainLayer> {
        match self {
            Self::Terrain(layer) => Some(layer),
            Self::TiledObject(_) => None,
        }
    }

    /// Mutable terrain view, if this is a terrain layer
    pub const fn as_terrain_mut(&mut self) -> Option<&mut TerrainLayer> {
        match self {
            Self::Terrain(layer) => Some(layer),
            Self::TiledObject(_) => None,
        }
    }

    /// Object view, if this is an object layer
    pub const fn as_objects(&self) -> Option<&ObjectLayer> {
        match self {
            Self::TiledObject(layer) => Some(layer),
            Self::Terrain(_) => None,
        }
    }

    /// Mutable object view, if this is an object layer
    pub const fn as_objects_mut(&mut self) -> Option<&mut ObjectLayer> {
        match self {
            Self::TiledObject(layer) => Some(layer),
            Self::Terrain(_) => None,
        }
    }
}
