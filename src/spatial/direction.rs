//! Direction catalogues: neighbor order, octal walk vectors and the direction wheel
//!
//! Screen coordinates are used throughout, so "north" is `y - 1`.

use crate::spatial::object::Footprint;
use crate::spatial::tile::{Size, TerrainId};
use serde::{Deserialize, Serialize};

/// Neighbor offsets in mask order: E, SE, S, SW, W, NW, N, NE
///
/// Index `i` contributes bit `2^i` to neighbor masks.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Index of the east neighbor in [`NEIGHBOR_OFFSETS`]
pub const EAST: usize = 0;
/// Index of the south neighbor in [`NEIGHBOR_OFFSETS`]
pub const SOUTH: usize = 2;
/// Index of the west neighbor in [`NEIGHBOR_OFFSETS`]
pub const WEST: usize = 4;
/// Index of the north neighbor in [`NEIGHBOR_OFFSETS`]
pub const NORTH: usize = 6;

/// Octal step vectors in enclosure walk order: E, NE, N, NW, W, SW, S, SE
///
/// Walking the list once, then east again, traces a counter-clockwise loop
/// on screen.
pub const OCTAL_DELTAS: [(i32, i32); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Edge of the current piece the next piece is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Next piece sits left of the current piece, top edges level
    Top,
    /// Next piece sits right of the current piece, bottom edges level
    Bottom,
    /// Next piece sits above the current piece, right edges level
    Right,
    /// Next piece sits directly below the current piece
    Left,
}

impl Alignment {
    /// Offset from the current piece's top-left to the next piece's top-left
    pub const fn offset(self, current: Size, next: Size) -> (i32, i32) {
        let (cw, ch) = (current.width as i32, current.height as i32);
        let (nw, nh) = (next.width as i32, next.height as i32);
        match self {
            Self::Bottom => (cw, ch - nh),
            Self::Right => (cw - nw, -nh),
            Self::Top => (-nw, 0),
            Self::Left => (0, ch),
        }
    }
}

/// Fixed offset used when a piece follows another of the same direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SameDirectionDelta {
    /// Horizontal offset
    pub delta_x: i32,
    /// Vertical offset
    pub delta_y: i32,
}

const fn default_range() -> usize {
    1
}

/// One entry of a direction wheel: a placeable piece and its chaining rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionInfo {
    /// Label used in logs
    #[serde(default)]
    pub name: String,
    /// Extent of the piece in tiles
    #[serde(default)]
    pub size: Size,
    /// Row-major tile pattern, `None` for transparent cells
    pub tiles: Vec<Option<TerrainId>>,
    /// How many wheel positions ahead the next piece may turn, zero acting as one
    #[serde(default = "default_range")]
    pub range: usize,
    /// Edge the following piece attaches to
    pub align_next: Alignment,
    /// Offset used instead of the alignment when the direction repeats
    #[serde(default)]
    pub same_next: Option<SameDirectionDelta>,
}

impl DirectionInfo {
    /// Tile footprint of this piece
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.size.width, self.tiles.clone())
    }
}

/// Optional opening piece standing in for a wheel direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartPiece {
    /// Wheel index the opening piece behaves as when choosing what follows
    pub acts_as: usize,
    /// The opening piece itself
    #[serde(flatten)]
    pub piece: DirectionInfo,
}

/// Ordered catalogue of directions used by chained placement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DirectionWheel {
    /// Opening piece, if the chain always starts the same way
    #[serde(default)]
    pub start: Option<Box<StartPiece>>,
    /// Wheel positions in order
    pub directions: Vec<DirectionInfo>,
}

impl DirectionWheel {
    /// Number of wheel positions
    pub const fn len(&self) -> usize {
        self.directions.len()
    }

    /// Whether the wheel has no positions
    pub const fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Direction at a wheel index
    pub fn direction(&self, index: usize) -> Option<&DirectionInfo> {
        self.directions.get(index)
    }

    /// Wheel indices reachable from `index`, in order, wrapping past the end
    ///
    /// A range of zero is treated as one.
    pub fn reachable(&self, index: usize, range: usize) -> Vec<usize> {
        if self.is_empty() {
            return Vec::new();
        }
        (index..=index + range.max(1))
            .map(|i| i % self.len())
            .collect()
    }
}
