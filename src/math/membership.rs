//! Terrain membership sets

use crate::spatial::tile::{TerrainId, Tile};
use serde::{Deserialize, Serialize};

/// Set of terrain ids a generator reacts to
///
/// Configurations list a handful of ids, so membership is a linear scan over
/// the declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerrainSet(Vec<TerrainId>);

impl TerrainSet {
    /// Create a set from ids
    pub fn new(ids: impl IntoIterator<Item = TerrainId>) -> Self {
        Self(ids.into_iter().collect())
    }

    /// Whether an id belongs to the set
    pub fn contains(&self, terrain: TerrainId) -> bool {
        self.0.contains(&terrain)
    }

    /// Whether a cell holds a tile of a member terrain; empty cells never match
    pub fn matches(&self, tile: Option<Tile>) -> bool {
        tile.is_some_and(|tile| self.contains(tile.terrain))
    }

    /// First declared id
    pub fn first(&self) -> Option<TerrainId> {
        self.0.first().copied()
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count of matching cells among a neighborhood
    pub fn count_matches(&self, tiles: &[Option<Tile>]) -> u32 {
        tiles.iter().filter(|tile| self.matches(**tile)).count() as u32
    }
}

impl FromIterator<TerrainId> for TerrainSet {
    fn from_iter<I: IntoIterator<Item = TerrainId>>(iter: I) -> Self {
        Self::new(iter)
    }
}
