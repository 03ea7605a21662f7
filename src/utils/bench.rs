//! Shared measurement helpers.
//!
//! Wall-clock timing and random-source construction used by the harness and
//! by every generator. All randomness flows through an explicit [`BenchRng`]
//! so a run can be reproduced from its seed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Random source used for permutations and key streams.
pub type BenchRng = StdRng;

/// Read the current instant.
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Time elapsed since `start`.
#[inline(always)]
pub fn elapsed(start: Instant) -> Duration {
    start.elapsed()
}

/// Duration expressed in seconds, divided evenly over `count` operations.
pub fn per_op_seconds(total: Duration, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    total.as_secs_f64() / count as f64
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Build the random source: fixed when `seed` is given, clock-seeded otherwise.
pub fn make_rng(seed: Option<u64>) -> BenchRng {
    BenchRng::seed_from_u64(seed.unwrap_or_else(time_seed))
}
