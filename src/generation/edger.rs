//! Bitmask-driven edge tiles and edge objects
//!
//! Every source cell of interest gets an 8-bit mask of which neighbors hold
//! one of the "next to" terrains. Configured bit patterns are matched
//! against the mask; a pattern matches when all of its bits are set.

use crate::generation::Generator;
use crate::io::configuration::{DEFAULT_EDGE_LAYER, DEFAULT_OBJECT_LAYER, DEFAULT_TERRAIN_LAYER};
use crate::io::error::{Result, WorldError, invalid_parameter};
use crate::math::membership::TerrainSet;
use crate::spatial::{
    Footprint, Layer, Map, Object, PlacementOptions, Position, TerrainId, TerrainLayer, Tile,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Neighbor mask: bit `2^i` set when neighbor `i` (E, SE, S, …) is in `next_to`
pub fn neighbor_mask(surrounds: &[Option<Tile>; 8], next_to: &TerrainSet) -> u8 {
    surrounds
        .iter()
        .enumerate()
        .filter(|(_, tile)| next_to.matches(**tile))
        .fold(0, |mask, (i, _)| mask | (1 << i))
}

/// An 8-bit neighbor pattern, written in configurations as a binary string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitPattern(pub u8);

impl BitPattern {
    /// Whether every bit of the pattern is set in the mask
    pub const fn matches(self, mask: u8) -> bool {
        mask & self.0 == self.0
    }
}

/// Error for a pattern string that is not an 8-bit binary number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPatternError(String);

impl fmt::Display for BitPatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not an 8-bit binary pattern", self.0)
    }
}

impl TryFrom<String> for BitPattern {
    type Error = BitPatternError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        u8::from_str_radix(value.trim(), 2)
            .map(Self)
            .map_err(|_| BitPatternError(value))
    }
}

impl From<BitPattern> for String {
    fn from(pattern: BitPattern) -> Self {
        format!("{:08b}", pattern.0)
    }
}

/// Edge rule writing a terrain tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainEdge {
    /// Neighbor pattern to match
    pub mask: BitPattern,
    /// Terrain written on the edge layer
    pub terrain: TerrainId,
}

/// Edge rule placing a named object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectEdge {
    /// Neighbor pattern to match
    pub mask: BitPattern,
    /// Name of the object template to place
    pub object: String,
}

/// Grid offset applied to a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Offset {
    /// Horizontal offset
    pub x: i32,
    /// Vertical offset
    pub y: i32,
}

/// Object template placed by the advanced edger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeObject {
    /// Columns in the tile pattern
    pub width: usize,
    /// Row-major tile pattern, `None` for transparent cells
    pub tiles: Vec<Option<TerrainId>>,
    /// Offset from the matched cell to the object's top-left
    #[serde(default)]
    pub offset: Offset,
    /// Allow this object to overlap earlier ones
    #[serde(default)]
    pub overwrite: bool,
    /// Properties copied onto every placement
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

fn invert_terrain(invert_to: Option<TerrainId>, next_to: &TerrainSet) -> Result<TerrainId> {
    invert_to.or_else(|| next_to.first()).ok_or_else(|| {
        invalid_parameter(
            "invertTo",
            &"<none>",
            &"invert needs invertTo or at least one nextToTiles entry",
        )
    })
}

/// Edge tile generator options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Edger {
    /// Layer inspected for edges
    pub source_layer: String,
    /// Terrain layer written from scratch with the edge tiles
    pub output_layer: String,
    /// Terrains that may receive an edge
    pub source_tiles: TerrainSet,
    /// Terrains whose presence as neighbors sets mask bits
    pub next_to_tiles: TerrainSet,
    /// Ordered rules; later matches overwrite earlier ones
    pub edges: Vec<TerrainEdge>,
    /// Overwrite edged cells on the source layer afterwards
    pub invert: bool,
    /// Terrain used by `invert`, defaulting to the first `nextToTiles` entry
    pub invert_to: Option<TerrainId>,
}

impl Default for Edger {
    fn default() -> Self {
        Self {
            source_layer: DEFAULT_TERRAIN_LAYER.to_string(),
            output_layer: DEFAULT_EDGE_LAYER.to_string(),
            source_tiles: TerrainSet::default(),
            next_to_tiles: TerrainSet::default(),
            edges: Vec::new(),
            invert: false,
            invert_to: None,
        }
    }
}

impl Edger {
    /// Compute the edge layer for a source layer
    pub fn edge_layer(&self, source: &Layer) -> TerrainLayer {
        let mut edges = TerrainLayer::new(self.output_layer.clone(), source.size());
        for index in 0..source.grid().len() {
            let position = source.index_position(index);
            if !self.source_tiles.matches(source.tile(position)) {
                continue;
            }
            let mask = neighbor_mask(&source.surrounds(position.x, position.y), &self.next_to_tiles);
            for rule in &self.edges {
                if rule.mask.matches(mask) {
                    edges.set_tile(position.x, position.y, Tile::new(rule.terrain));
                }
            }
        }
        edges
    }
}

impl Generator for Edger {
    const NAME: &'static str = "edger";

    fn generate<R: Rng + ?Sized>(&self, map: &mut Map, _rng: &mut R) -> Result<()> {
        let edges = self.edge_layer(map.require_layer(&self.source_layer)?);

        if self.invert {
            let terrain = invert_terrain(self.invert_to, &self.next_to_tiles)?;
            let source = map.require_terrain_mut(&self.source_layer)?;
            for (position, tile) in edges.grid().iter() {
                if tile.is_some_and(|tile| tile.terrain > 0) {
                    source.set_tile(position.x, position.y, Tile::new(terrain));
                }
            }
        }

        map.add_layer(Layer::Terrain(edges));
        Ok(())
    }
}

/// Edge object generator options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedEdger {
    /// Layer inspected for edges
    pub source_layer: String,
    /// Object layer receiving edge objects, created if absent
    pub output_layer: String,
    /// Terrains that may receive an edge
    pub source_tiles: TerrainSet,
    /// Terrains whose presence as neighbors sets mask bits
    pub next_to_tiles: TerrainSet,
    /// Object templates by name
    pub objects: BTreeMap<String, EdgeObject>,
    /// Groups of ordered rules; every matching rule places its object
    pub edges: Vec<Vec<ObjectEdge>>,
    /// Overwrite cells covered by placed objects on the source layer
    pub invert: bool,
    /// Terrain used by `invert`, defaulting to the first `nextToTiles` entry
    pub invert_to: Option<TerrainId>,
}

impl Default for AdvancedEdger {
    fn default() -> Self {
        Self {
            source_layer: DEFAULT_TERRAIN_LAYER.to_string(),
            output_layer: DEFAULT_OBJECT_LAYER.to_string(),
            source_tiles: TerrainSet::default(),
            next_to_tiles: TerrainSet::default(),
            objects: BTreeMap::new(),
            edges: Vec::new(),
            invert: false,
            invert_to: None,
        }
    }
}

impl AdvancedEdger {
    fn validate(&self) -> Result<()> {
        if let Some(rule) = self
            .edges
            .iter()
            .flatten()
            .find(|rule| !self.objects.contains_key(&rule.object))
        {
            return Err(WorldError::UnknownObject {
                name: rule.object.clone(),
            });
        }
        Ok(())
    }

    /// Matched cells and the template each places, in placement order
    pub fn matches<'a>(&'a self, source: &Layer) -> Vec<(Position, &'a str)> {
        let mut matches = Vec::new();
        for index in 0..source.grid().len() {
            let position = source.index_position(index);
            if !self.source_tiles.matches(source.tile(position)) {
                continue;
            }
            let mask = neighbor_mask(&source.surrounds(position.x, position.y), &self.next_to_tiles);
            for rule in self.edges.iter().flatten() {
                if rule.mask.matches(mask) {
                    matches.push((position, rule.object.as_str()));
                }
            }
        }
        matches
    }
}

impl Generator for AdvancedEdger {
    const NAME: &'static str = "advancededger";

    fn generate<R: Rng + ?Sized>(&self, map: &mut Map, _rng: &mut R) -> Result<()> {
        self.validate()?;
        let matches = self.matches(map.require_layer(&self.source_layer)?);
        let layer = map.object_layer_or_create(&self.output_layer)?;

        let mut covered = Vec::new();
        for (id, (position, name)) in matches.into_iter().enumerate() {
            let Some(template) = self.objects.get(name) else {
                continue;
            };
            let object = Object::new(
                format!("{name}-{id}"),
                position.offset(template.offset.x, template.offset.y),
                Footprint::new(template.width, template.tiles.clone()),
            )
            .with_properties(template.properties.clone());

            let cells: Vec<Position> = object.covered_cells().map(|(cell, _)| cell).collect();
            let options = PlacementOptions {
                allow_collisions: template.overwrite,
            };
            if layer.add_object(object, options) {
                covered.extend(cells);
            }
        }

        if self.invert {
            let terrain = invert_terrain(self.invert_to, &self.next_to_tiles)?;
            let source = map.require_terrain_mut(&self.source_layer)?;
            for position in covered {
                source.set_tile(position.x, position.y, Tile::new(terrain));
            }
        }
        Ok(())
    }
}
