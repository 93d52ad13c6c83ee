//! Error types for world configuration, generation phases and map export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum WorldError {
    /// A generator referenced a layer that does not exist on the map
    MissingLayer {
        /// Name of the missing layer
        name: String,
    },

    /// A layer exists but is of the wrong variant for the operation
    LayerKindMismatch {
        /// Name of the offending layer
        name: String,
        /// Layer variant the operation required
        expected: &'static str,
    },

    /// A phase named a plugin outside the generator registry
    UnknownPlugin {
        /// The plugin name as written in the configuration
        name: String,
    },

    /// Phase options could not be decoded for the named plugin
    InvalidOptions {
        /// Plugin whose options failed to decode
        plugin: &'static str,
        /// Underlying decoding error
        source: serde_json::Error,
    },

    /// Generator parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An edge rule referenced an object template that was never declared
    UnknownObject {
        /// Name used by the edge rule
        name: String,
    },

    /// Failed to parse a world configuration file
    ConfigLoad {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to encode a map snapshot
    Serialization {
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLayer { name } => write!(f, "Layer '{name}' does not exist"),
            Self::LayerKindMismatch { name, expected } => {
                write!(f, "Layer '{name}' is not a {expected} layer")
            }
            Self::UnknownPlugin { name } => write!(f, "Unknown generation plugin '{name}'"),
            Self::InvalidOptions { plugin, source } => {
                write!(f, "Invalid options for plugin '{plugin}': {source}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownObject { name } => {
                write!(f, "Edge rule references undeclared object '{name}'")
            }
            Self::ConfigLoad { path, source } => {
                write!(
                    f,
                    "Failed to load world configuration '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => write!(f, "Failed to encode map snapshot: {source}"),
        }
    }
}

impl std::error::Error for WorldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidOptions { source, .. }
            | Self::ConfigLoad { source, .. }
            | Self::Serialization { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, WorldError>;

impl From<std::io::Error> for WorldError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for WorldError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

impl From<image::ImageError> for WorldError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WorldError {
    WorldError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a missing layer error
pub fn missing_layer(name: &str) -> WorldError {
    WorldError::MissingLayer {
        name: name.to_string(),
    }
}
