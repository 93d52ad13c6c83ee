//! Placed objects and their tile footprints

use crate::spatial::tile::{Position, TerrainId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Row-major tile pattern covered by an object
///
/// `None` cells are transparent: they neither render nor occupy the layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    /// Number of columns in the pattern
    pub width: usize,
    /// Pattern cells, `width` per row
    pub tiles: Vec<Option<TerrainId>>,
}

impl Footprint {
    /// Create a footprint; a zero width is treated as one column
    pub fn new(width: usize, tiles: Vec<Option<TerrainId>>) -> Self {
        Self {
            width: width.max(1),
            tiles,
        }
    }

    /// A solid rectangle of a single terrain
    pub fn solid(width: usize, height: usize, terrain: TerrainId) -> Self {
        Self::new(width, vec![Some(terrain); width * height])
    }

    /// Number of rows in the pattern
    pub const fn height(&self) -> usize {
        self.tiles.len().div_ceil(self.width)
    }

    /// Opaque cells as `(dx, dy, terrain)` relative to the top-left corner
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, TerrainId)> + '_ {
        let width = self.width;
        self.tiles.iter().enumerate().filter_map(move |(i, tile)| {
            tile.map(|terrain| ((i % width) as i32, (i / width) as i32, terrain))
        })
    }
}

/// An object placed on a tiled-object layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Object {
    /// Identifier unique within a run
    pub id: String,
    /// Grid position of the footprint's first cell
    pub top_left: Position,
    /// Covered tiles
    pub footprint: Footprint,
    /// Free-form properties forwarded to serializers
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl Object {
    /// Create an object with no properties
    pub fn new(id: impl Into<String>, top_left: Position, footprint: Footprint) -> Self {
        Self {
            id: id.into(),
            top_left,
            footprint,
            properties: BTreeMap::new(),
        }
    }

    /// Attach properties
    #[must_use]
    pub fn with_properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.properties = properties;
        self
    }

    /// Absolute positions and terrains of the opaque footprint cells
    pub fn covered_cells(&self) -> impl Iterator<Item = (Position, TerrainId)> + '_ {
        self.footprint
            .cells()
            .map(|(dx, dy, terrain)| (self.top_left.offset(dx, dy), terrain))
    }
}

/// Options for placing an object on a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementOptions {
    /// Permit the footprint to cover cells that are already occupied
    pub allow_collisions: bool,
}

impl PlacementOptions {
    /// Placement that may overlap existing objects
    pub const fn overlapping() -> Self {
        Self {
            allow_collisions: true,
        }
    }
}
