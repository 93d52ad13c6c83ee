//! Spatial data model shared by every generator
//!
//! This module contains:
//! - Tile values, positions and sizes
//! - Flat row-major tile grids with neighbor arithmetic
//! - Terrain and object layers, and the map that owns them
//! - Boundary records for span-fill rasterization
//! - Direction catalogues used by walks and chained placement

/// Column boundary records and span fill
pub mod boundary;
/// Neighbor order, octal walk vectors and direction wheels
pub mod direction;
/// Row-major tile storage
pub mod grid;
/// Terrain and tiled-object layers
pub mod layer;
/// Map owning the named layers of a run
pub mod map;
/// Placed objects and footprints
pub mod object;
/// Tile values and coordinates
pub mod tile;

pub use grid::TileGrid;
pub use layer::{Layer, LayerKind, ObjectLayer, TerrainLayer};
pub use map::{LayerPair, Map};
pub use object::{Footprint, Object, PlacementOptions};
pub use tile::{Position, Size, TerrainId, Tile};
