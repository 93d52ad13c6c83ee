//! Closed-loop octal walks filled into areas
//!
//! A walker leaves its origin heading east and turns counter-clockwise
//! through the eight octal directions, then takes a final east leg home.
//! Every leg but the last runs at least `minimumMovements` steps. A move is
//! only taken when the loop can still close afterwards, so every completed
//! walk ends on its origin.

use crate::generation::Generator;
use crate::io::configuration::{
    DEFAULT_CHANGE_PROBABILITY, DEFAULT_ENCLOSURE_LAYER, DEFAULT_MINIMUM_MOVEMENTS,
    DEFAULT_NUM_ORIGINS,
};
use crate::io::error::Result;
use crate::math::membership::TerrainSet;
use crate::math::probability::is_triggered;
use crate::spatial::boundary::BoundaryMap;
use crate::spatial::direction::OCTAL_DELTAS;
use crate::spatial::{Layer, Map, Position, Size, TerrainId, Tile};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Index of the closing east leg, one past the last octal direction
pub const FINAL_LEG: usize = OCTAL_DELTAS.len();

/// Step vector of a leg; the closing leg reuses east
pub fn leg_delta(leg: usize) -> (i32, i32) {
    OCTAL_DELTAS
        .get(leg % OCTAL_DELTAS.len())
        .copied()
        .unwrap_or((1, 0))
}

/// Whether a walk on `leg`, `run` steps into it, can still return home
///
/// `remaining` is the displacement from the walker to the origin. The
/// mandatory minimum runs of this and every later leg are taken out first;
/// what is left must be a non-negative integer combination of the step
/// vectors of the legs still ahead.
pub fn closable(remaining: (i64, i64), leg: usize, run: u32, minimum: u32) -> bool {
    let (mut x, mut y) = remaining;
    for later in leg..FINAL_LEG {
        let steps = if later == leg {
            minimum.saturating_sub(run)
        } else {
            minimum
        };
        let (dx, dy) = leg_delta(later);
        x -= i64::from(dx) * i64::from(steps);
        y -= i64::from(dy) * i64::from(steps);
    }

    match leg {
        0..=3 => true,
        4 => y >= 0,
        5 => y >= 0 && x + y >= 0,
        6 => y >= 0 && x >= 0,
        7 => y >= 0 && x >= y,
        _ => y == 0 && x >= 0,
    }
}

fn displacement(from: Position, to: Position) -> (i64, i64) {
    (
        i64::from(to.x) - i64::from(from.x),
        i64::from(to.y) - i64::from(from.y),
    )
}

/// Enclosed-area generator options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnclosedArea {
    /// Layer gating the walk; without one every on-map cell is walkable
    pub source_layer: Option<String>,
    /// Terrain layer receiving the filled areas, created if absent
    pub output_layer: String,
    /// Walks attempted per run
    pub num_origins: usize,
    /// Terrains the walk may cross on the source layer
    pub base_tiles: TerrainSet,
    /// Terrain written inside completed loops
    pub output_tile: TerrainId,
    /// Shortest run before a turn
    pub minimum_movements: u32,
    /// Chance of turning when both stepping and turning are possible
    pub change_probability: f64,
}

impl Default for EnclosedArea {
    fn default() -> Self {
        Self {
            source_layer: None,
            output_layer: DEFAULT_ENCLOSURE_LAYER.to_string(),
            num_origins: DEFAULT_NUM_ORIGINS,
            base_tiles: TerrainSet::default(),
            output_tile: 0,
            minimum_movements: DEFAULT_MINIMUM_MOVEMENTS,
            change_probability: DEFAULT_CHANGE_PROBABILITY,
        }
    }
}

impl EnclosedArea {
    fn walkable(&self, source: Option<&Layer>, size: Size, position: Position) -> bool {
        size.contains(position)
            && source.is_none_or(|layer| self.base_tiles.matches(layer.tile(position)))
    }

    /// Walk one loop from `origin`, returning the visited cells
    ///
    /// The path starts and ends on the origin and every step moves to a
    /// king-adjacent cell. `None` means the walk got stuck and was abandoned.
    pub fn trace_enclosure<R: Rng + ?Sized>(
        &self,
        source: Option<&Layer>,
        size: Size,
        origin: Position,
        rng: &mut R,
    ) -> Option<Vec<Position>> {
        if !self.walkable(source, size, origin) {
            return None;
        }

        let minimum = self.minimum_movements;
        let mut path = vec![origin];
        let mut position = origin;
        let mut leg = 0;
        let mut run = 0;

        loop {
            if position == origin && leg + 1 >= FINAL_LEG && path.len() > 1 {
                return Some(path);
            }

            let (dx, dy) = leg_delta(leg);
            let next = position.offset(dx, dy);
            let can_step = self.walkable(source, size, next)
                && closable(displacement(next, origin), leg, run + 1, minimum);
            let can_turn = leg < FINAL_LEG
                && run >= minimum
                && closable(displacement(position, origin), leg + 1, 0, minimum);

            let turn = match (can_step, can_turn) {
                (true, true) => is_triggered(rng, self.change_probability),
                (false, true) => true,
                (true, false) => false,
                (false, false) => {
                    tracing::debug!(x = origin.x, y = origin.y, leg, "enclosure abandoned");
                    return None;
                }
            };

            if turn {
                leg += 1;
                run = 0;
                continue;
            }

            position = next;
            run += 1;
            path.push(position);
        }
    }
}

impl Generator for EnclosedArea {
    const NAME: &'static str = "enclosedarea";

    fn generate<R: Rng + ?Sized>(&self, map: &mut Map, rng: &mut R) -> Result<()> {
        if let Some(name) = &self.source_layer {
            map.require_layer(name)?;
        }
        map.terrain_layer_or_create(&self.output_layer)?;

        let size = map.size();
        if size.area() == 0 {
            return Ok(());
        }
        let tile = Tile::new(self.output_tile);

        for _ in 0..self.num_origins {
            let origin = Position::new(
                rng.random_range(0..size.width) as i32,
                rng.random_range(0..size.height) as i32,
            );
            let source = match &self.source_layer {
                Some(name) => Some(map.require_layer(name)?),
                None => None,
            };
            let Some(path) = self.trace_enclosure(source, size, origin, rng) else {
                continue;
            };

            let mut boundaries = BoundaryMap::new();
            boundaries.record_all(path);
            let filled = boundaries.fill(map.require_terrain_mut(&self.output_layer)?, tile);
            tracing::debug!(x = origin.x, y = origin.y, filled, "enclosure filled");
        }
        Ok(())
    }
}
