//! Bernoulli trials, weighted selection and adjacency probability curves

use rand::Rng;

/// Bernoulli trial: draw uniform `[0, 1)` and succeed when it falls below `probability`
///
/// Probabilities at or below zero never trigger; at or above one always do.
pub fn is_triggered<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.random::<f64>() < probability
}

/// Pick an entry by cumulative weight from a single uniform `[0, 1)` draw
///
/// Entries own consecutive ranges `[base, base + weight)`. When the weights
/// sum to less than one the draw can land past every range, and no entry is
/// selected.
pub fn select_weighted<R: Rng + ?Sized, T: Copy>(rng: &mut R, entries: &[(T, f64)]) -> Option<T> {
    let outcome = rng.random::<f64>();
    select_cumulative(entries, outcome)
}

/// Entry whose cumulative range contains `outcome`
pub fn select_cumulative<T: Copy>(entries: &[(T, f64)], outcome: f64) -> Option<T> {
    let mut base = 0.0;
    for &(value, weight) in entries {
        let upper = base + weight;
        if outcome >= base && outcome < upper {
            return Some(value);
        }
        base = upper;
    }
    None
}

/// Linear adjacency curve: `min(base + value * adjacent, ceiling)`
pub fn additive(adjacent: u32, base: f64, value: f64, ceiling: f64) -> f64 {
    value.mul_add(adjacent as f64, base).min(ceiling)
}

/// Exponential adjacency curve: `base + factor^adjacent * value`
pub fn exponential(adjacent: u32, base: f64, factor: f64, value: f64) -> f64 {
    factor.powi(adjacent as i32).mul_add(value, base)
}
