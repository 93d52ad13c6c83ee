//! Phase descriptors and the closed registry of generation plugins

use crate::generation::{
    AdvancedEdger, BiomeGenerator, CreateEmptyLayer, Edger, EnclosedArea, Filler, Generator,
    LayerDifference, Meanderer, ObjectRandomizer, VectorGenerator,
};
use crate::io::error::{Result, WorldError};
use crate::spatial::Map;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One pipeline step as written in a world configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseDescriptor {
    /// Plugin name, matched case-insensitively
    pub plugin: String,
    /// Plugin options, decoded when the pipeline is built
    #[serde(default)]
    pub options: serde_json::Value,
    /// Human-readable label for logs and progress
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PhaseDescriptor {
    /// Create a descriptor with no description
    pub fn new(plugin: impl Into<String>, options: serde_json::Value) -> Self {
        Self {
            plugin: plugin.into(),
            options,
            description: None,
        }
    }
}

/// A resolved generation phase
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Fill a terrain layer
    Filler(Filler),
    /// Create an empty layer
    CreateEmptyLayer(CreateEmptyLayer),
    /// Subtract covered cells from a terrain layer
    LayerDifference(LayerDifference),
    /// Raise landmasses from sparks and rays
    VectorGenerator(VectorGenerator),
    /// Spread biomes across base terrain
    BiomeGenerator(BiomeGenerator),
    /// Write edge tiles
    Edger(Edger),
    /// Place edge objects
    AdvancedEdger(AdvancedEdger),
    /// Fill closed octal walks
    EnclosedArea(EnclosedArea),
    /// Chain pieces along a direction wheel
    Meanderer(Meanderer),
    /// Scatter objects over base terrain
    ObjectRandomizer(ObjectRandomizer),
}

fn decode<G: Generator + DeserializeOwned>(options: &serde_json::Value) -> Result<G> {
    let options = if options.is_null() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        options.clone()
    };
    serde_json::from_value(options).map_err(|source| WorldError::InvalidOptions {
        plugin: G::NAME,
        source,
    })
}

impl Phase {
    /// Resolve a descriptor against the registry and decode its options
    ///
    /// # Errors
    ///
    /// Returns `UnknownPlugin` for a name outside the registry and
    /// `InvalidOptions` when the options do not decode
    pub fn from_descriptor(descriptor: &PhaseDescriptor) -> Result<Self> {
        let options = &descriptor.options;
        let phase = match descriptor.plugin.to_ascii_lowercase().as_str() {
            Filler::NAME => Self::Filler(decode(options)?),
            CreateEmptyLayer::NAME => Self::CreateEmptyLayer(decode(options)?),
            LayerDifference::NAME => Self::LayerDifference(decode(options)?),
            VectorGenerator::NAME => Self::VectorGenerator(decode(options)?),
            BiomeGenerator::NAME => Self::BiomeGenerator(decode(options)?),
            Edger::NAME => Self::Edger(decode(options)?),
            AdvancedEdger::NAME => Self::AdvancedEdger(decode(options)?),
            EnclosedArea::NAME => Self::EnclosedArea(decode(options)?),
            Meanderer::NAME => Self::Meanderer(decode(options)?),
            ObjectRandomizer::NAME => Self::ObjectRandomizer(decode(options)?),
            _ => {
                return Err(WorldError::UnknownPlugin {
                    name: descriptor.plugin.clone(),
                });
            }
        };
        Ok(phase)
    }

    /// Registry name of the phase's plugin
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Filler(_) => Filler::NAME,
            Self::CreateEmptyLayer(_) => CreateEmptyLayer::NAME,
            Self::LayerDifference(_) => LayerDifference::NAME,
            Self::VectorGenerator(_) => VectorGenerator::NAME,
            Self::BiomeGenerator(_) => BiomeGenerator::NAME,
            Self::Edger(_) => Edger::NAME,
            Self::AdvancedEdger(_) => AdvancedEdger::NAME,
            Self::EnclosedArea(_) => EnclosedArea::NAME,
            Self::Meanderer(_) => Meanderer::NAME,
            Self::ObjectRandomizer(_) => ObjectRandomizer::NAME,
        }
    }

    /// Run the phase against the map
    ///
    /// # Errors
    ///
    /// Propagates the generator's error
    pub fn run<R: Rng + ?Sized>(&self, map: &mut Map, rng: &mut R) -> Result<()> {
        match self {
            Self::Filler(generator) => generator.generate(map, rng),
            Self::CreateEmptyLayer(generator) => generator.generate(map, rng),
            Self::LayerDifference(generator) => generator.generate(map, rng),
            Self::VectorGenerator(generator) => generator.generate(map, rng),
            Self::BiomeGenerator(generator) => generator.generate(map, rng),
            Self::Edger(generator) => generator.generate(map, rng),
            Self::AdvancedEdger(generator) => generator.generate(map, rng),
            Self::EnclosedArea(generator) => generator.generate(map, rng),
            Self::Meanderer(generator) => generator.generate(map, rng),
            Self::ObjectRandomizer(generator) => generator.generate(map, rng),
        }
    }
}
