//! Probability and containment helpers shared by the generators

/// Terrain membership sets
pub mod membership;
/// Bernoulli trials, weighted selection and adjacency curves
pub mod probability;
