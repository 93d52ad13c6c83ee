//! Serializer-facing JSON view of a finished map

use crate::io::error::{Result, WorldError};
use crate::spatial::{Layer, LayerKind, Map, Object, Size, TileGrid};
use serde::Serialize;
use std::path::Path;

/// Contents of one layer in a snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LayerContents<'a> {
    /// Row-major tiles of a terrain layer, `null` for empty cells
    Tiles {
        /// Grid cells
        tiles: &'a TileGrid,
    },
    /// Objects placed on an object layer
    Objects {
        /// Objects in placement order
        objects: &'a [Object],
    },
}

/// One layer of a snapshot
#[derive(Debug, Clone, Serialize)]
pub struct LayerSnapshot<'a> {
    /// Layer name
    pub name: &'a str,
    /// Layer variant
    #[serde(rename = "type")]
    pub kind: LayerKind,
    /// Layer extent
    pub size: Size,
    /// Tiles or objects
    #[serde(flatten)]
    pub contents: LayerContents<'a>,
}

impl<'a> From<&'a Layer> for LayerSnapshot<'a> {
    fn from(layer: &'a Layer) -> Self {
        let contents = match layer {
            Layer::Terrain(terrain) => LayerContents::Tiles {
                tiles: terrain.grid(),
            },
            Layer::TiledObject(objects) => LayerContents::Objects {
                objects: objects.objects(),
            },
        };
        Self {
            name: layer.name(),
            kind: layer.kind(),
            size: layer.size(),
            contents,
        }
    }
}

/// Borrowed view of a map handed to external serializers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSnapshot<'a> {
    /// Map extent in tiles
    pub size: Size,
    /// Rendered tile dimensions
    pub tile_dimensions: Size,
    /// Layers in creation order
    pub layers: Vec<LayerSnapshot<'a>>,
}

impl<'a> MapSnapshot<'a> {
    /// Capture a map
    pub fn new(map: &'a Map) -> Self {
        Self {
            size: map.size(),
            tile_dimensions: map.tile_dimensions(),
            layers: map.layers().iter().map(LayerSnapshot::from).collect(),
        }
    }

    /// Encode as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON encoding to a file, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` on write failures and `Serialization` if
    /// encoding fails
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| WorldError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
        std::fs::write(path, json).map_err(|source| WorldError::FileSystem {
            path: path.to_path_buf(),
            operation: "write snapshot",
            source,
        })
    }
}
