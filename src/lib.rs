//! Procedural tile-based world generation through a pipeline of composable generators
//!
//! A world configuration lists phases. Each phase names a generator and its
//! options; the generators run in order against one shared map, reading and
//! writing named terrain and object layers, with a single seeded random
//! source threaded through every call.

#![forbid(unsafe_code)]

/// Grid-mutating generation plugins
pub mod generation;
/// Configuration, errors, pipeline driver and exports
pub mod io;
/// Probability and terrain membership helpers
pub mod math;
/// Tiles, grids, layers and the map
pub mod spatial;

pub use io::error::{Result, WorldError};
