//! World configuration loading and the phase pipeline driver

use crate::io::configuration::{
    DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
};
use crate::io::error::{Result, WorldError};
use crate::io::phase::{Phase, PhaseDescriptor};
use crate::spatial::{Map, Size};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

const fn default_map_size() -> Size {
    Size::new(DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT)
}

const fn default_tile_size() -> Size {
    Size::new(DEFAULT_TILE_WIDTH, DEFAULT_TILE_HEIGHT)
}

/// Map-wide parameters of a world configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapParameters {
    /// Map extent in tiles
    #[serde(default = "default_map_size")]
    pub size: Size,
    /// Rendered tile dimensions, passed through to serializers
    #[serde(default = "default_tile_size")]
    pub tile: Size,
}

impl Default for MapParameters {
    fn default() -> Self {
        Self {
            size: default_map_size(),
            tile: default_tile_size(),
        }
    }
}

/// A world configuration: map parameters plus an ordered list of phases
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Map parameters
    #[serde(default)]
    pub parameters: MapParameters,
    /// Tileset metadata, carried through untouched for serializers
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub tilesets: serde_json::Value,
    /// Phases in execution order
    #[serde(default)]
    pub phases: Vec<PhaseDescriptor>,
}

impl WorldConfig {
    /// Parse a configuration from JSON text
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the text is not a valid configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read and `ConfigLoad` if
    /// it is not a valid configuration
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| WorldError::FileSystem {
            path: path.to_path_buf(),
            operation: "read configuration",
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| WorldError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A phase resolved from its descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPhase {
    /// The generator to run
    pub phase: Phase,
    /// Label from the configuration, if any
    pub description: Option<String>,
}

impl ResolvedPhase {
    /// Description if given, plugin name otherwise
    pub fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(self.phase.name())
    }
}

/// Runs a world configuration's phases in order against one map
#[derive(Debug, Clone)]
pub struct WorldGenerator {
    parameters: MapParameters,
    phases: Vec<ResolvedPhase>,
}

impl WorldGenerator {
    /// Resolve every phase of a configuration
    ///
    /// # Errors
    ///
    /// Returns `UnknownPlugin` or `InvalidOptions` for the first phase that
    /// fails to resolve; nothing runs in that case
    pub fn new(config: &WorldConfig) -> Result<Self> {
        let phases = config
            .phases
            .iter()
            .map(|descriptor| {
                Phase::from_descriptor(descriptor).map(|phase| ResolvedPhase {
                    phase,
                    description: descriptor.description.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            parameters: config.parameters,
            phases,
        })
    }

    /// Resolved phases in execution order
    pub fn phases(&self) -> &[ResolvedPhase] {
        &self.phases
    }

    /// A fresh map with the configured size and no layers
    pub const fn new_map(&self) -> Map {
        Map::new(self.parameters.size, self.parameters.tile)
    }

    /// Run every phase with a random source seeded from `seed`
    ///
    /// # Errors
    ///
    /// Returns the first phase error; earlier phases are not rolled back
    pub fn generate(&self, seed: u64) -> Result<Map> {
        self.generate_with(seed, |_, _, _| {})
    }

    /// Run every phase, calling `observer` after each one completes
    ///
    /// # Errors
    ///
    /// Returns the first phase error; earlier phases are not rolled back
    pub fn generate_with<F>(&self, seed: u64, mut observer: F) -> Result<Map>
    where
        F: FnMut(usize, &ResolvedPhase, &Map),
    {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut map = self.new_map();

        for (index, resolved) in self.phases.iter().enumerate() {
            tracing::info!(
                phase = index + 1,
                plugin = resolved.phase.name(),
                "{}",
                resolved.label()
            );
            resolved.phase.run(&mut map, &mut rng)?;
            observer(index, resolved, &map);
        }
        Ok(map)
    }
}
