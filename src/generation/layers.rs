//! Layer creation and subtraction utilities

use crate::generation::Generator;
use crate::io::configuration::{DEFAULT_EMPTY_LAYER, DEFAULT_TERRAIN_LAYER};
use crate::io::error::Result;
use crate::spatial::{LayerKind, Map};
use bitvec::vec::BitVec;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Creates an empty layer unless one of that name already exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEmptyLayer {
    /// Name of the layer to create
    pub output_layer: String,
    /// Variant of the layer
    #[serde(rename = "type")]
    pub kind: LayerKind,
}

impl Default for CreateEmptyLayer {
    fn default() -> Self {
        Self {
            output_layer: DEFAULT_EMPTY_LAYER.to_string(),
            kind: LayerKind::Terrain,
        }
    }
}

impl Generator for CreateEmptyLayer {
    const NAME: &'static str = "createemptylayer";

    fn generate<R: Rng + ?Sized>(&self, map: &mut Map, _rng: &mut R) -> Result<()> {
        if map.layer(&self.output_layer).is_some() {
            return Ok(());
        }
        map.ensure_layer(&self.output_layer, self.kind)
    }
}

/// Clears output cells wherever any source layer holds a non-zero terrain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerDifference {
    /// Terrain layer to subtract from
    pub output_layer: String,
    /// Layers whose covered cells are removed from the output
    pub source_layers: Vec<String>,
}

impl Default for LayerDifference {
    fn default() -> Self {
        Self {
            output_layer: DEFAULT_TERRAIN_LAYER.to_string(),
            source_layers: Vec::new(),
        }
    }
}

impl LayerDifference {
    /// Cells covered by a non-zero terrain on any source layer, by flat index
    ///
    /// # Errors
    ///
    /// Returns `MissingLayer` if a source layer does not exist
    pub fn coverage(&self, map: &Map) -> Result<BitVec> {
        let mut covered = BitVec::repeat(false, map.size().area());
        for name in &self.source_layers {
            let grid = map.require_layer(name)?.grid();
            for (index, tile) in grid.tiles().enumerate() {
                if tile.is_some_and(|tile| tile.terrain > 0)
                    && let Some(mut bit) = covered.get_mut(index)
                {
                    *bit = true;
                }
            }
        }
        Ok(covered)
    }
}

impl Generator for LayerDifference {
    const NAME: &'static str = "layerdifference";

    fn generate<R: Rng + ?Sized>(&self, map: &mut Map, _rng: &mut R) -> Result<()> {
        let covered = self.coverage(map)?;
        let grid = map.require_terrain_mut(&self.output_layer)?.grid_mut();
        for index in covered.iter_ones() {
            grid.set_index(index, None);
        }
        Ok(())
    }
}
