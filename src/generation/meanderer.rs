//! Direction-wheel piece chaining
//!
//! A meander is a chain of object pieces. Each piece is drawn from a wheel of
//! directions; the next piece may keep the direction or turn up to `range`
//! positions further round the wheel, and is attached to the current piece
//! according to its alignment. The chance of continuing drops with every
//! piece placed.

use crate::generation::Generator;
use crate::io::configuration::{
    DEFAULT_CONTINUATION_DEGRADATION, DEFAULT_CONTINUATION_PROBABILITY, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_NUM_ORIGINS, DEFAULT_OBJECT_LAYER, DEFAULT_TERRAIN_LAYER,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::membership::TerrainSet;
use crate::math::probability::is_triggered;
use crate::spatial::direction::{DirectionInfo, DirectionWheel};
use crate::spatial::{Layer, LayerPair, Map, Object, PlacementOptions, Position, Size};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Chance of placing another piece, shrinking per piece placed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Continuation {
    /// Starting chance
    pub probability: f64,
    /// Drop in chance per piece placed
    pub degradation: f64,
}

impl Default for Continuation {
    fn default() -> Self {
        Self {
            probability: DEFAULT_CONTINUATION_PROBABILITY,
            degradation: DEFAULT_CONTINUATION_DEGRADATION,
        }
    }
}

impl Continuation {
    /// Chance of continuing after `movements` pieces
    pub fn chance(&self, movements: u32) -> f64 {
        (-f64::from(movements)).mul_add(self.degradation, self.probability)
    }
}

/// A piece about to be placed
#[derive(Debug, Clone, Copy)]
pub struct Piece<'a> {
    /// Shape and chaining rules
    pub info: &'a DirectionInfo,
    /// Wheel index the piece behaves as
    pub index: usize,
    /// Grid position of the footprint's first cell
    pub top_left: Position,
}

/// Meander generator options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meanderer {
    /// Layer whose tiles pieces must sit on
    pub source_layer: String,
    /// Object layer receiving pieces, created if absent
    pub output_layer: String,
    /// Chains started per run
    pub num_origins: usize,
    /// Terrains every piece cell must cover on the source layer
    pub base_tiles: TerrainSet,
    /// Continuation chance
    pub continuation: Continuation,
    /// Pieces and their chaining rules
    pub direction_wheel: DirectionWheel,
    /// Random starts tried per chain
    pub max_attempts: usize,
}

impl Default for Meanderer {
    fn default() -> Self {
        Self {
            source_layer: DEFAULT_TERRAIN_LAYER.to_string(),
            output_layer: DEFAULT_OBJECT_LAYER.to_string(),
            num_origins: DEFAULT_NUM_ORIGINS,
            base_tiles: TerrainSet::default(),
            continuation: Continuation::default(),
            direction_wheel: DirectionWheel::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Meanderer {
    /// Whether every opaque cell of a piece lands on a base tile
    pub fn fits(&self, source: &Layer, info: &DirectionInfo, top_left: Position) -> bool {
        info.footprint()
            .cells()
            .all(|(dx, dy, _)| self.base_tiles.matches(source.tile(top_left.offset(dx, dy))))
    }

    /// Pick a random valid opening piece, trying up to `maxAttempts` times
    pub fn find_start<R: Rng + ?Sized>(
        &self,
        source: &Layer,
        size: Size,
        rng: &mut R,
    ) -> Option<Piece<'_>> {
        let wheel = &self.direction_wheel;
        if wheel.is_empty() || size.area() == 0 {
            return None;
        }

        for _ in 0..self.max_attempts {
            let top_left = Position::new(
                rng.random_range(0..size.width) as i32,
                rng.random_range(0..size.height) as i32,
            );
            let (info, index) = match &wheel.start {
                Some(start) => (&start.piece, start.acts_as % wheel.len()),
                None => {
                    let index = rng.random_range(0..wheel.len());
                    let Some(info) = wheel.direction(index) else {
                        continue;
                    };
                    (info, index)
                }
            };
            if self.fits(source, info, top_left) {
                return Some(Piece {
                    info,
                    index,
                    top_left,
                });
            }
        }
        None
    }

    /// Follow a chain from its opening piece, returning the pieces placed
    ///
    /// The chain stops when the continuation draw fails, a piece does not
    /// fit or collides, or the turns taken add up to a full revolution of
    /// the wheel. It never places more pieces than the map has cells.
    pub fn meander<'a, R: Rng + ?Sized>(
        &'a self,
        pair: &mut LayerPair<'_>,
        start: Piece<'a>,
        next_id: &mut usize,
        rng: &mut R,
    ) -> u32 {
        let wheel = &self.direction_wheel;
        let cell_count = pair.source().size().area();
        let mut piece = start;
        let mut options = PlacementOptions::default();
        let mut movements = 0;
        let mut rotation = 0;

        loop {
            let object = Object::new(
                format!("element {next_id}"),
                piece.top_left,
                piece.info.footprint(),
            );
            *next_id += 1;
            let placed = pair
                .output()
                .as_objects_mut()
                .is_some_and(|layer| layer.add_object(object, options));
            if !placed {
                break;
            }
            movements += 1;

            if movements as usize >= cell_count
                || !is_triggered(rng, self.continuation.chance(movements))
            {
                break;
            }

            let reachable = wheel.reachable(piece.index, piece.info.range);
            if reachable.is_empty() {
                break;
            }
            let turn = rng.random_range(0..reachable.len());
            let Some(&index) = reachable.get(turn) else {
                break;
            };
            let Some(info) = wheel.direction(index) else {
                break;
            };
            // a turn landing back on the same position repeats the direction
            rotation += turn % wheel.len();
            if rotation >= wheel.len() {
                break;
            }

            let (offset, allow_collisions) = match info.same_next {
                Some(delta) if index == piece.index => ((delta.delta_x, delta.delta_y), true),
                _ => (piece.info.align_next.offset(piece.info.size, info.size), false),
            };
            let top_left = piece.top_left.offset(offset.0, offset.1);
            if !self.fits(pair.source(), info, top_left) {
                break;
            }

            piece = Piece {
                info,
                index,
                top_left,
            };
            options = PlacementOptions { allow_collisions };
        }
        movements
    }
}

impl Generator for Meanderer {
    const NAME: &'static str = "meanderer";

    fn generate<R: Rng + ?Sized>(&self, map: &mut Map, rng: &mut R) -> Result<()> {
        if let Some(start) = &self.direction_wheel.start
            && start.acts_as >= self.direction_wheel.len()
        {
            return Err(invalid_parameter(
                "directionWheel.start.actsAs",
                &start.acts_as,
                &format!("wheel has {} directions", self.direction_wheel.len()),
            ));
        }

        map.require_layer(&self.source_layer)?;
        map.object_layer_or_create(&self.output_layer)?;
        let size = map.size();
        let mut pair = map.layer_pair(&self.source_layer, &self.output_layer)?;

        let mut next_id = 0;
        for chain in 0..self.num_origins {
            let Some(start) = self.find_start(pair.source(), size, rng) else {
                tracing::debug!(chain, attempts = self.max_attempts, "no valid meander start");
                continue;
            };
            let pieces = self.meander(&mut pair, start, &mut next_id, rng);
            tracing::debug!(chain, pieces, "meander placed");
        }
        Ok(())
    }
}
