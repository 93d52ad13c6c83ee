//! The world map: a fixed size plus a set of named layers

use crate::io::error::{Result, WorldError, missing_layer};
use crate::spatial::layer::{Layer, LayerKind, ObjectLayer, TerrainLayer};
use crate::spatial::tile::Size;

/// Map shared by every generation phase of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    size: Size,
    tile_dimensions: Size,
    layers: Vec<Layer>,
}

impl Map {
    /// Create a map with no layers
    pub const fn new(size: Size, tile_dimensions: Size) -> Self {
        Self {
            size,
            tile_dimensions,
            layers: Vec::new(),
        }
    }

    /// Map extent in tiles
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Rendered tile dimensions, carried for serializers
    pub const fn tile_dimensions(&self) -> Size {
        self.tile_dimensions
    }

    /// Layers in creation order
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.layers.iter().position(|layer| layer.name() == name)
    }

    /// Layer by name
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name() == name)
    }

    /// Mutable layer by name
    pub fn layer_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.name() == name)
    }

    /// Add a layer, replacing any existing layer of the same name in place
    pub fn add_layer(&mut self, layer: Layer) {
        match self.index_of(layer.name()) {
            Some(index) => {
                if let Some(slot) = self.layers.get_mut(index) {
                    *slot = layer;
                }
            }
            None => self.layers.push(layer),
        }
    }

    /// Layer by name, failing when absent
    ///
    /// # Errors
    ///
    /// Returns `MissingLayer` if no layer has this name
    pub fn require_layer(&self, name: &str) -> Result<&Layer> {
        self.layer(name).ok_or_else(|| missing_layer(name))
    }

    /// Terrain layer by name, failing when absent or of the other variant
    ///
    /// # Errors
    ///
    /// Returns `MissingLayer` or `LayerKindMismatch`
    pub fn require_terrain_mut(&mut self, name: &str) -> Result<&mut TerrainLayer> {
        self.layer_mut(name)
            .ok_or_else(|| missing_layer(name))?
            .as_terrain_mut()
            .ok_or_else(|| kind_mismatch(name, LayerKind::Terrain))
    }

    /// Make sure a layer of the given kind exists under this name
    ///
    /// # Errors
    ///
    /// Returns `LayerKindMismatch` if the name is taken by the other variant
    pub fn ensure_layer(&mut self, name: &str, kind: LayerKind) -> Result<()> {
        match self.layer(name) {
            Some(layer) if layer.kind() == kind => Ok(()),
            Some(_) => Err(kind_mismatch(name, kind)),
            None => {
                self.layers.push(Layer::empty(kind, name, self.size));
                Ok(())
            }
        }
    }

    /// Terrain layer by name, created empty if absent
    ///
    /// # Errors
    ///
    /// Returns `LayerKindMismatch` if the name belongs to an object layer
    pub fn terrain_layer_or_create(&mut self, name: &str) -> Result<&mut TerrainLayer> {
        self.ensure_layer(name, LayerKind::Terrain)?;
        self.require_terrain_mut(name)
    }

    /// Object layer by name, created empty if absent
    ///
    /// # Errors
    ///
    /// Returns `LayerKindMismatch` if the name belongs to a terrain layer
    pub fn object_layer_or_create(&mut self, name: &str) -> Result<&mut ObjectLayer> {
        self.ensure_layer(name, LayerKind::TiledObject)?;
        self.layer_mut(name)
            .ok_or_else(|| missing_layer(name))?
            .as_objects_mut()
            .ok_or_else(|| kind_mismatch(name, LayerKind::TiledObject))
    }

    /// Read access to one layer and write access to another
    ///
    /// The two names may refer to the same layer, in which case reads observe
    /// the writes made so far.
    ///
    /// # Errors
    ///
    /// Returns `MissingLayer` if either layer is absent
    pub fn layer_pair(&mut self, source: &str, output: &str) -> Result<LayerPair<'_>> {
        let source_index = self.index_of(source).ok_or_else(|| missing_layer(source))?;
        let output_index = self.index_of(output).ok_or_else(|| missing_layer(output))?;

        if source_index == output_index {
            return self
                .layers
                .get_mut(output_index)
                .map(LayerPair::Shared)
                .ok_or_else(|| missing_layer(output));
        }

        let (source_layer, output_layer) = if source_index < output_index {
            let (head, tail) = self.layers.split_at_mut(output_index);
            (head.get(source_index), tail.first_mut())
        } else {
            let (head, tail) = self.layers.split_at_mut(source_index);
            (tail.first(), head.get_mut(output_index))
        };

        match (source_layer, output_layer) {
            (Some(read), Some(write)) => Ok(LayerPair::Split {
                source: read,
                output: write,
            }),
            (None, _) => Err(missing_layer(source)),
            (_, None) => Err(missing_layer(output)),
        }
    }
}

/// A source layer to read and an output layer to write, possibly the same one
#[derive(Debug)]
pub enum LayerPair<'a> {
    /// Source and output are one layer
    Shared(&'a mut Layer),
    /// Distinct source and output layers
    Split {
        /// Layer read from
        source: &'a Layer,
        /// Layer written to
        output: &'a mut Layer,
    },
}

impl LayerPair<'_> {
    /// The layer to read from
    pub fn source(&self) -> &Layer {
        match self {
            Self::Shared(layer) => layer,
            Self::Split { source, .. } => source,
        }
    }

    /// The layer to write to
    pub fn output(&mut self) -> &mut Layer {
        match self {
            Self::Shared(layer) => layer,
            Self::Split { output, .. } => output,
        }
    }
}

fn kind_mismatch(name: &str, expected: LayerKind) -> WorldError {
    WorldError::LayerKindMismatch {
        name: name.to_string(),
        expected: match expected {
            LayerKind::Terrain => "terrain",
            LayerKind::TiledObject => "tiledobject",
        },
    }
}
