//! Spark-and-ray landmass shaping
//!
//! Random origin points ("sparks") each cast a fan of rays with random
//! lengths. The ray ends are joined into a closed staircase outline, and the
//! outline is span-filled with land.

use crate::generation::Generator;
use crate::io::configuration::{
    DEFAULT_MAX_VECTOR_LENGTH, DEFAULT_MIN_VECTOR_LENGTH, DEFAULT_NUM_ORIGINS,
    DEFAULT_NUM_VECTORS, DEFAULT_TERRAIN_LAYER, LAND_ELEVATION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::boundary::{BoundaryMap, step_line};
use crate::spatial::{Map, Position, Size, TerrainId, TerrainLayer, Tile};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Landmass generator options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VectorGenerator {
    /// Terrain layer receiving land, created if absent
    pub output_layer: String,
    /// Number of sparks
    pub num_origins: usize,
    /// Rays per spark, evenly spaced from 0°
    pub num_vectors: usize,
    /// Shortest ray, inclusive
    pub min_vector_length: u32,
    /// Longest ray, inclusive
    pub max_vector_length: u32,
    /// Terrain written as land
    pub terrain_tile: TerrainId,
}

impl Default for VectorGenerator {
    fn default() -> Self {
        Self {
            output_layer: DEFAULT_TERRAIN_LAYER.to_string(),
            num_origins: DEFAULT_NUM_ORIGINS,
            num_vectors: DEFAULT_NUM_VECTORS,
            min_vector_length: DEFAULT_MIN_VECTOR_LENGTH,
            max_vector_length: DEFAULT_MAX_VECTOR_LENGTH,
            terrain_tile: 0,
        }
    }
}

/// End of a ray, rounded to the grid and clamped inside it
pub fn terminus(origin: Position, angle_degrees: f64, length: u32, size: Size) -> Position {
    let radians = angle_degrees.to_radians();
    let length = f64::from(length);
    let x = length.mul_add(radians.cos(), f64::from(origin.x)).round() as i32;
    let y = length.mul_add(radians.sin(), f64::from(origin.y)).round() as i32;

    let max_x = size.width.saturating_sub(1) as i32;
    let max_y = size.height.saturating_sub(1) as i32;
    Position::new(x.clamp(0, max_x), y.clamp(0, max_y))
}

/// Closed outline through the ray ends, last joined back to first
pub fn outline(termini: &[Position]) -> BoundaryMap {
    let mut boundaries = BoundaryMap::new();
    for (i, &from) in termini.iter().enumerate() {
        let Some(&to) = termini.get(i + 1).or_else(|| termini.first()) else {
            continue;
        };
        boundaries.record_all(step_line(from, to));
    }
    boundaries
}

impl VectorGenerator {
    fn validate(&self) -> Result<()> {
        if self.min_vector_length > self.max_vector_length {
            return Err(invalid_parameter(
                "minVectorLength",
                &self.min_vector_length,
                &format!("exceeds maxVectorLength {}", self.max_vector_length),
            ));
        }
        Ok(())
    }

    fn land(&self) -> Tile {
        Tile::with_elevation(self.terrain_tile, LAND_ELEVATION)
    }

    /// Ray ends for one spark given each ray's length
    pub fn ray_termini(
        &self,
        origin: Position,
        lengths: impl IntoIterator<Item = u32>,
        size: Size,
    ) -> Vec<Position> {
        let delta_angle = 360.0 / self.num_vectors.max(1) as f64;
        lengths
            .into_iter()
            .take(self.num_vectors)
            .enumerate()
            .map(|(i, length)| terminus(origin, delta_angle * i as f64, length, size))
            .collect()
    }

    /// Cast this spark's rays and fill the enclosed land, returning cells written
    pub fn explode_origin<R: Rng + ?Sized>(
        &self,
        layer: &mut TerrainLayer,
        origin: Position,
        rng: &mut R,
    ) -> usize {
        let lengths: Vec<u32> = (0..self.num_vectors)
            .map(|_| rng.random_range(self.min_vector_length..=self.max_vector_length))
            .collect();
        let termini = self.ray_termini(origin, lengths, layer.grid().size());
        outline(&termini).fill(layer, self.land())
    }
}

impl Generator for VectorGenerator {
    const NAME: &'static str = "vectorgenerator";

    fn generate<R: Rng + ?Sized>(&self, map: &mut Map, rng: &mut R) -> Result<()> {
        self.validate()?;
        let size = map.size();
        let layer = map.terrain_layer_or_create(&self.output_layer)?;
        if size.area() == 0 {
            return Ok(());
        }

        let land = self.land();
        let origins: Vec<Position> = (0..self.num_origins)
            .map(|_| {
                Position::new(
                    rng.random_range(0..size.width) as i32,
                    rng.random_range(0..size.height) as i32,
                )
            })
            .collect();
        for origin in &origins {
            layer.set_tile(origin.x, origin.y, land);
        }

        for origin in origins {
            let filled = self.explode_origin(layer, origin, rng);
            tracing::debug!(x = origin.x, y = origin.y, filled, "landmass raised");
        }
        Ok(())
    }
}
