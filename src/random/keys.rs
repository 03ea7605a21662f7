//! Search key streams.
//!
//! Both generators fill a caller-owned buffer with keys in `1..=max`.

use crate::error::{AlgoError, Result};
use rand::{Rng, RngCore};

/// Fill `keys` cycling through `1..=max`; with `keys.len() == max` each key
/// appears exactly once.
pub fn uniform_key_generator(keys: &mut [i32], max: i32) -> Result<()> {
    check_max(max)?;
    for (i, key) in keys.iter_mut().enumerate() {
        *key = 1 + (i % max as usize) as i32;
    }
    Ok(())
}

/// Fill `keys` with an approximately power-law distribution over `1..=max`.
///
/// Each key is `floor(0.5 + max / (1 + max * U))` with `U` uniform in
/// `[0, 1)`. The chance of a key of at least `k` is `1/(k - 0.5) - 1/max`,
/// so for large `max` value 1 takes about a third of the mass, value 2
/// about 27%, value 3 about 11%, decaying from there.
pub fn potential_key_generator<R: Rng + ?Sized>(
    keys: &mut [i32],
    max: i32,
    rng: &mut R,
) -> Result<()> {
    check_max(max)?;
    let m = max as f64;
    for key in keys.iter_mut() {
        let u: f64 = rng.random();
        *key = (0.5 + m / (1.0 + m * u)) as i32;
    }
    Ok(())
}

fn check_max(max: i32) -> Result<()> {
    if max <= 0 {
        return Err(AlgoError::GenerationFailed(format!(
            "key upper bound must be positive, got {}",
            max
        )));
    }
    Ok(())
}

/// Interchangeable key stream used by the search harness.
pub trait KeyGenerator: Send + Sync {
    /// Short identifier (e.g., "uniform")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Fill `keys` with values in `1..=max`.
    fn generate(&self, keys: &mut [i32], max: i32, rng: &mut dyn RngCore) -> Result<()>;
}

/// Cyclic `1, 2, ..., max, 1, 2, ...` stream.
pub struct UniformKeys;

impl KeyGenerator for UniformKeys {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn description(&self) -> &'static str {
        "Every key from 1 to max in turn"
    }

    fn generate(&self, keys: &mut [i32], max: i32, _rng: &mut dyn RngCore) -> Result<()> {
        uniform_key_generator(keys, max)
    }
}

/// Skewed stream favouring small keys.
pub struct PotentialKeys;

impl KeyGenerator for PotentialKeys {
    fn name(&self) -> &'static str {
        "potential"
    }

    fn description(&self) -> &'static str {
        "Power-law keys, small values far more likely"
    }

    fn generate(&self, keys: &mut [i32], max: i32, rng: &mut dyn RngCore) -> Result<()> {
        potential_key_generator(keys, max, rng)
    }
}

/// All key generators.
pub fn available_generators() -> Vec<Box<dyn KeyGenerator>> {
    vec![Box::new(UniformKeys), Box::new(PotentialKeys)]
}
