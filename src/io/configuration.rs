//! Generation constants and runtime configuration defaults

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Map width used when a world configuration omits its size
pub const DEFAULT_MAP_WIDTH: usize = 100;
/// Map height used when a world configuration omits its size
pub const DEFAULT_MAP_HEIGHT: usize = 100;
/// Rendered tile width handed to downstream serializers
pub const DEFAULT_TILE_WIDTH: usize = 16;
/// Rendered tile height handed to downstream serializers
pub const DEFAULT_TILE_HEIGHT: usize = 16;

// Layer names generators fall back on when the phase does not name one
/// Default layer for terrain-writing generators
pub const DEFAULT_TERRAIN_LAYER: &str = "terrain";
/// Default output layer of the biome generator
pub const DEFAULT_BIOME_LAYER: &str = "biomes";
/// Default output layer of the edger
pub const DEFAULT_EDGE_LAYER: &str = "edges";
/// Default output layer of `CreateEmptyLayer`
pub const DEFAULT_EMPTY_LAYER: &str = "empty";
/// Default output layer of object generators
pub const DEFAULT_OBJECT_LAYER: &str = "objects";
/// Default output layer of the enclosed-area generator
pub const DEFAULT_ENCLOSURE_LAYER: &str = "enclosures";

/// Elevation given to tiles written by the filler
pub const FILL_ELEVATION: i32 = 1;
/// Elevation given to land raised by the vector generator
pub const LAND_ELEVATION: i32 = 2;

// Vector generator
/// Number of spark points per run
pub const DEFAULT_NUM_ORIGINS: usize = 5;
/// Number of rays cast from each spark
pub const DEFAULT_NUM_VECTORS: usize = 6;
/// Shortest ray length
pub const DEFAULT_MIN_VECTOR_LENGTH: u32 = 5;
/// Longest ray length
pub const DEFAULT_MAX_VECTOR_LENGTH: u32 = 50;

// Biome generator
/// Number of propagation passes
pub const DEFAULT_BIOME_PASSES: usize = 2;
/// Adjacent count that forces a biome regardless of chance
///
/// Nine is unreachable with eight neighbors, so the rule is off unless configured.
pub const DEFAULT_FILL_THRESHOLD: u32 = 9;
/// Upper bound of the additive adjacency curve
pub const DEFAULT_PROBABILITY_CEILING: f64 = 1.0;

// Enclosed-area generator
/// Straight-run length required before a direction change
pub const DEFAULT_MINIMUM_MOVEMENTS: u32 = 3;
/// Chance of turning when no constraint decides
pub const DEFAULT_CHANGE_PROBABILITY: f64 = 0.5;

// Meanderer
/// Origin picks tried before a meander gives up
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;
/// Chance of placing a second piece
pub const DEFAULT_CONTINUATION_PROBABILITY: f64 = 1.0;
/// Amount the continuation chance drops per placed piece
pub const DEFAULT_CONTINUATION_DEGRADATION: f64 = 0.1;

// Output settings
/// Suffix added to rendered preview filenames
pub const OUTPUT_SUFFIX: &str = "_world";
/// Suffix added to per-phase capture filenames
pub const CAPTURE_SUFFIX: &str = "_phases";
/// Suffix added to JSON snapshot filenames
pub const SNAPSHOT_SUFFIX: &str = "_snapshot";
/// Pixels per tile in rendered previews
pub const DEFAULT_RENDER_SCALE: u32 = 4;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
