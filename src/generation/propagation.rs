//! Multi-pass biome propagation
//!
//! Base-terrain cells are reclassified into biomes. A cell's chance of
//! joining a biome grows with the number of neighbors already in it, so
//! biomes spread outwards from early seeds. Passes alternate scan direction
//! to avoid a directional bias in the spread.

use crate::generation::Generator;
use crate::io::configuration::{
    DEFAULT_BIOME_LAYER, DEFAULT_BIOME_PASSES, DEFAULT_FILL_THRESHOLD,
    DEFAULT_PROBABILITY_CEILING, DEFAULT_TERRAIN_LAYER,
};
use crate::io::error::Result;
use crate::math::membership::TerrainSet;
use crate::math::probability::{additive, exponential, is_triggered, select_weighted};
use crate::spatial::{LayerPair, Map, Position, Size, TerrainId, Tile};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shape of the adjacency probability curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// `min(base + value * adjacent, ceiling)`
    Additive,
    /// `base + factor^adjacent * value`
    Exponential,
}

const fn default_ceiling() -> f64 {
    DEFAULT_PROBABILITY_CEILING
}

const fn default_factor() -> f64 {
    1.0
}

const fn default_fill() -> u32 {
    DEFAULT_FILL_THRESHOLD
}

/// Probability used once at least one neighbor belongs to the biome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjacentProbability {
    /// Curve shape
    #[serde(rename = "type")]
    pub kind: CurveKind,
    /// Constant term
    #[serde(default)]
    pub base: f64,
    /// Per-neighbor (additive) or scaled (exponential) term
    #[serde(default)]
    pub value: f64,
    /// Exponential growth factor
    #[serde(default = "default_factor")]
    pub factor: f64,
    /// Upper bound of the additive curve
    #[serde(default = "default_ceiling")]
    pub ceiling: f64,
    /// Neighbor count that forces the biome without a random draw
    #[serde(default = "default_fill")]
    pub fill: u32,
}

impl AdjacentProbability {
    /// Chance for a given number of neighbors in the biome
    pub fn chance(&self, adjacent: u32) -> f64 {
        match self.kind {
            CurveKind::Additive => additive(adjacent, self.base, self.value, self.ceiling),
            CurveKind::Exponential => exponential(adjacent, self.base, self.factor, self.value),
        }
    }
}

/// Trigger probabilities of a biome
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BiomeProbability {
    /// Chance when no neighbor belongs to the biome
    pub normal: f64,
    /// Curve used when some neighbors do
    pub adjacent: Option<AdjacentProbability>,
}

impl BiomeProbability {
    /// Chance for a given number of neighbors in the biome
    pub fn chance(&self, adjacent: u32) -> f64 {
        match self.adjacent {
            Some(curve) if adjacent > 0 => curve.chance(adjacent),
            _ => self.normal,
        }
    }

    /// Neighbor count that forces the biome
    pub fn fill_threshold(&self) -> u32 {
        self.adjacent.map_or(DEFAULT_FILL_THRESHOLD, |curve| curve.fill)
    }
}

/// One weighted output terrain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputWeight {
    /// Terrain written
    pub terrain: TerrainId,
    /// Share of the unit interval this terrain owns
    pub weight: f64,
}

/// A biome the generator may spread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomeDefinition {
    /// Terrains counted as already belonging to the biome
    pub biome_tiles: TerrainSet,
    /// Trigger probabilities
    #[serde(default)]
    pub probability: BiomeProbability,
    /// Block written when the biome triggers, anchored at the cell
    #[serde(default)]
    pub chunk_size: Size,
    /// Weighted distribution of written terrains
    pub output: Vec<OutputWeight>,
}

impl BiomeDefinition {
    fn distribution(&self) -> Vec<(TerrainId, f64)> {
        self.output
            .iter()
            .map(|entry| (entry.terrain, entry.weight))
            .collect()
    }
}

/// Biome propagation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BiomeGenerator {
    /// Layer whose cells and neighbors are inspected
    pub source_layer: String,
    /// Terrain layer receiving biome tiles, created if absent
    pub output_layer: String,
    /// Terrains eligible for reclassification
    pub base_terrains: TerrainSet,
    /// Biomes, later entries taking priority
    pub biomes: Vec<BiomeDefinition>,
    /// Number of probabilistic passes
    pub passes: usize,
    /// Run a trailing pass that applies only the fill threshold
    pub fill_pass: bool,
}

impl Default for BiomeGenerator {
    fn default() -> Self {
        Self {
            source_layer: DEFAULT_TERRAIN_LAYER.to_string(),
            output_layer: DEFAULT_BIOME_LAYER.to_string(),
            base_terrains: TerrainSet::default(),
            biomes: Vec::new(),
            passes: DEFAULT_BIOME_PASSES,
            fill_pass: false,
        }
    }
}

/// Scan order of a 1-based pass: odd passes forward, even passes backward
pub fn pass_order(pass: usize, len: usize) -> Box<dyn Iterator<Item = usize>> {
    if pass % 2 == 1 {
        Box::new(0..len)
    } else {
        Box::new((0..len).rev())
    }
}

impl BiomeGenerator {
    fn run_pass<R: Rng + ?Sized>(
        &self,
        pair: &mut LayerPair<'_>,
        distributions: &[Vec<(TerrainId, f64)>],
        pass: usize,
        fill_only: bool,
        rng: &mut R,
    ) -> usize {
        let len = pair.source().grid().len();
        let mut triggered = 0;

        for index in pass_order(pass, len) {
            let position = pair.source().index_position(index);
            if !self.base_terrains.matches(pair.source().tile(position)) {
                continue;
            }
            let surrounds = pair.source().surrounds(position.x, position.y);

            for (biome, distribution) in self.biomes.iter().zip(distributions).rev() {
                let adjacent = biome.biome_tiles.count_matches(&surrounds);
                let chance = biome.probability.chance(adjacent);

                if adjacent >= biome.probability.fill_threshold()
                    || (!fill_only && is_triggered(rng, chance))
                {
                    self.create_chunk(pair, biome.chunk_size, distribution, position, rng);
                    triggered += 1;
                    break;
                }
            }
        }
        triggered
    }

    fn create_chunk<R: Rng + ?Sized>(
        &self,
        pair: &mut LayerPair<'_>,
        chunk_size: Size,
        distribution: &[(TerrainId, f64)],
        anchor: Position,
        rng: &mut R,
    ) {
        for i in 0..chunk_size.width as i32 {
            for j in 0..chunk_size.height as i32 {
                let position = anchor.offset(i, j);
                if !self.base_terrains.matches(pair.source().tile(position)) {
                    continue;
                }
                let Some(terrain) = select_weighted(rng, distribution) else {
                    continue;
                };
                if let Some(output) = pair.output().as_terrain_mut() {
                    output.set_tile(position.x, position.y, Tile::new(terrain));
                }
            }
        }
    }
}

impl Generator for BiomeGenerator {
    const NAME: &'static str = "biomegenerator";

    fn generate<R: Rng + ?Sized>(&self, map: &mut Map, rng: &mut R) -> Result<()> {
        map.require_layer(&self.source_layer)?;
        map.terrain_layer_or_create(&self.output_layer)?;
        let mut pair = map.layer_pair(&self.source_layer, &self.output_layer)?;

        let distributions: Vec<Vec<(TerrainId, f64)>> = self
            .biomes
            .iter()
            .map(BiomeDefinition::distribution)
            .collect();

        for pass in 1..=self.passes {
            let triggered = self.run_pass(&mut pair, &distributions, pass, false, rng);
            tracing::debug!(pass, triggered, "biome pass complete");
        }

        if self.fill_pass {
            let triggered =
                self.run_pass(&mut pair, &distributions, self.passes + 1, true, rng);
            tracing::debug!(triggered, "biome fill pass complete");
        }
        Ok(())
    }
}
