//! Probabilistic object scattering
//!
//! Every free cell of the output layer is offered to the sections whose base
//! tiles include the cell's own terrain, in order. A section's candidates are
//! tried last-declared first; each candidate fires with its own probability
//! and is placed only when the ground under its base sits on the section's
//! base tiles.

use crate::generation::Generator;
use crate::io::configuration::{DEFAULT_OBJECT_LAYER, DEFAULT_TERRAIN_LAYER};
use crate::io::error::Result;
use crate::math::membership::TerrainSet;
use crate::math::probability::is_triggered;
use crate::spatial::{
    Footprint, Layer, LayerPair, Map, Object, PlacementOptions, Position, TerrainId,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const fn default_base() -> [usize; 2] {
    [1, 1]
}

/// Visual and footprint description of a scattered object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprite {
    /// Cell of the sprite anchored on the scanned cell, as `[x, y]`
    #[serde(default)]
    pub origin: [i32; 2],
    /// Extent `[width, height]` that must rest on base tiles
    #[serde(default = "default_base")]
    pub base: [usize; 2],
    /// Columns in the tile pattern
    pub width: usize,
    /// Row-major tile pattern, `None` for transparent cells
    pub tiles: Vec<Option<TerrainId>>,
    /// Properties copied onto every placement
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl Sprite {
    /// Top-left corner when the sprite's origin sits on `cell`
    pub const fn anchor(&self, cell: Position) -> Position {
        cell.offset(-self.origin[0], -self.origin[1])
    }
}

/// One object a section may scatter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Name used for object ids
    pub name: String,
    /// Chance of trying this candidate at a cell
    pub probability: f64,
    /// Shape of the object
    pub sprite: Sprite,
}

/// Candidates sharing the same ground requirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Terrains the sprite base must cover
    pub base_tiles: TerrainSet,
    /// Candidates, later entries tried first
    pub objects: Vec<Candidate>,
}

impl Section {
    /// Whether the `[width, height]` rectangle at `top_left` lies on base tiles
    ///
    /// Zero extents count as one cell.
    pub fn supports(&self, source: &Layer, top_left: Position, base: [usize; 2]) -> bool {
        let [width, height] = base.map(|extent| extent.max(1));
        (0..height as i32).all(|dy| {
            (0..width as i32)
                .all(|dx| self.base_tiles.matches(source.tile(top_left.offset(dx, dy))))
        })
    }
}

/// Object scattering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectRandomizer {
    /// Layer inspected for base tiles
    pub source_layer: String,
    /// Object layer receiving scattered objects, created if absent
    pub output_layer: String,
    /// Sections in priority order
    pub sections: Vec<Section>,
}

impl Default for ObjectRandomizer {
    fn default() -> Self {
        Self {
            source_layer: DEFAULT_TERRAIN_LAYER.to_string(),
            output_layer: DEFAULT_OBJECT_LAYER.to_string(),
            sections: Vec::new(),
        }
    }
}

impl ObjectRandomizer {
    /// Offer one cell to every section, returning whether an object landed
    pub fn populate_cell<R: Rng + ?Sized>(
        &self,
        pair: &mut LayerPair<'_>,
        cell: Position,
        next_id: &mut usize,
        rng: &mut R,
    ) -> bool {
        let terrain = pair.source().tile(cell);
        for section in &self.sections {
            if !section.base_tiles.matches(terrain) {
                continue;
            }
            for candidate in section.objects.iter().rev() {
                if !is_triggered(rng, candidate.probability) {
                    continue;
                }
                let sprite = &candidate.sprite;
                let top_left = sprite.anchor(cell);
                if !section.supports(pair.source(), top_left, sprite.base) {
                    continue;
                }

                let object = Object::new(
                    format!("{}-{next_id}", candidate.name),
                    top_left,
                    Footprint::new(sprite.width, sprite.tiles.clone()),
                )
                .with_properties(sprite.properties.clone());
                *next_id += 1;

                let placed = pair
                    .output()
                    .as_objects_mut()
                    .is_some_and(|layer| layer.add_object(object, PlacementOptions::default()));
                if placed {
                    return true;
                }
            }
        }
        false
    }
}

impl Generator for ObjectRandomizer {
    const NAME: &'static str = "objectrandomizer";

    fn generate<R: Rng + ?Sized>(&self, map: &mut Map, rng: &mut R) -> Result<()> {
        map.require_layer(&self.source_layer)?;
        map.object_layer_or_create(&self.output_layer)?;
        let mut pair = map.layer_pair(&self.source_layer, &self.output_layer)?;

        let mut next_id = 0;
        let mut placed = 0;
        for index in (0..pair.output().grid().len()).rev() {
            let cell = pair.output().index_position(index);
            if pair.output().grid().is_occupied(cell) {
                continue;
            }
            if self.populate_cell(&mut pair, cell, &mut next_id, rng) {
                placed += 1;
            }
        }
        tracing::debug!(placed, attempts = next_id, "objects scattered");
        Ok(())
    }
}
