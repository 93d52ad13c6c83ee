//! Input/output: configuration, errors, the phase pipeline and map exports

/// Command-line front end
pub mod cli;
/// Defaults and named constants
pub mod configuration;
/// Error type shared by the crate
pub mod error;
/// PNG previews
pub mod image;
/// Phase descriptors and the plugin registry
pub mod phase;
/// Progress bars
pub mod progress;
/// JSON map snapshots
pub mod snapshot;
/// Per-phase GIF capture
pub mod visualization;
/// World configuration and pipeline driver
pub mod world;
