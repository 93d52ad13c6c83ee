//! Grid-mutating generation plugins
//!
//! Each generator is a plain options value deserialized from a phase
//! descriptor. Running it mutates the shared map in place; the random source
//! is passed in explicitly so a run is reproducible from its seed.

use crate::io::error::Result;
use crate::spatial::Map;
use rand::Rng;

/// Bitmask-driven edge tiles and edge objects
pub mod edger;
/// Closed-loop octal walks filled into areas
pub mod enclosed;
/// Whole-layer fills
pub mod filler;
/// Layer creation and subtraction utilities
pub mod layers;
/// Direction-wheel piece chaining
pub mod meanderer;
/// Multi-pass biome propagation
pub mod propagation;
/// Probabilistic object scattering
pub mod randomizer;
/// Spark-and-ray landmass shaping
pub mod vector;

pub use edger::{AdvancedEdger, Edger};
pub use enclosed::EnclosedArea;
pub use filler::Filler;
pub use layers::{CreateEmptyLayer, LayerDifference};
pub use meanderer::Meanderer;
pub use propagation::BiomeGenerator;
pub use randomizer::ObjectRandomizer;
pub use vector::VectorGenerator;

/// A generation phase that reshapes a map
pub trait Generator {
    /// Plugin name used in phase descriptors and logs
    const NAME: &'static str;

    /// Run the phase to completion against the map
    ///
    /// # Errors
    ///
    /// Returns an error when a referenced layer is missing or of the wrong
    /// kind, or when the options are inconsistent. Mutations made before the
    /// error are kept.
    fn generate<R: Rng + ?Sized>(&self, map: &mut Map, rng: &mut R) -> Result<()>;
}
