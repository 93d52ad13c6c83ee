//! Whole-layer fills

use crate::generation::Generator;
use crate::io::configuration::{DEFAULT_TERRAIN_LAYER, FILL_ELEVATION};
use crate::io::error::Result;
use crate::math::membership::TerrainSet;
use crate::spatial::{Map, TerrainId, Tile};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fills a terrain layer with one tile, optionally only over chosen terrains
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filler {
    /// Layer to fill, created if absent
    pub output_layer: String,
    /// Terrain written to every selected cell
    pub fill_tile: TerrainId,
    /// When set, only cells currently holding one of these terrains change
    pub base_tiles: Option<TerrainSet>,
}

impl Default for Filler {
    fn default() -> Self {
        Self {
            output_layer: DEFAULT_TERRAIN_LAYER.to_string(),
            fill_tile: 0,
            base_tiles: None,
        }
    }
}

impl Generator for Filler {
    const NAME: &'static str = "filler";

    fn generate<R: Rng + ?Sized>(&self, map: &mut Map, _rng: &mut R) -> Result<()> {
        let layer = map.terrain_layer_or_create(&self.output_layer)?;
        let tile = Tile::with_elevation(self.fill_tile, FILL_ELEVATION);

        let Some(base_tiles) = &self.base_tiles else {
            layer.fill(tile);
            return Ok(());
        };

        let grid = layer.grid_mut();
        for index in 0..grid.len() {
            if base_tiles.matches(grid.get_index(index)) {
                grid.set_index(index, Some(tile));
            }
        }
        Ok(())
    }
}
