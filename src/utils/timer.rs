//! Measurement harness.
//!
//! Drives repeated trials of a sorting or searching algorithm over freshly
//! generated input and reduces them to one [`TimeRecord`] per input size:
//! - wall-clock time per trial (sorting) or per lookup (searching)
//! - average, minimum and maximum basic-operation count
//!
//! Any failure aborts the whole sweep; nothing partial is written.

use rand::RngCore;
use std::path::Path;
use tracing::{debug, info};

use super::bench::{elapsed, now, per_op_seconds};
use super::cpu_affinity::CpuPinGuard;
use super::runner::save_time_table;
use crate::error::{AlgoError, Result};
use crate::random::{generate_perm, generate_permutations, KeyGenerator};
use crate::search::{Dictionary, Order, SearchMethod};
use crate::sorting::SortAlgorithm;

// ============================================================================
// Configuration
// ============================================================================

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin for the duration of each timed loop
    #[default]
    Global,
    /// Leave scheduling to the OS
    Unpinned,
}

/// Configuration for timing measurements
#[derive(Clone, Debug, Default)]
pub struct TimingConfig {
    /// CPU pinning strategy (default: Global)
    pub pin_strategy: PinStrategy,
}

/// Sizes and repetitions of a sorting sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSweep {
    pub num_min: usize,
    pub num_max: usize,
    pub incr: usize,
    /// Permutations sorted at each size
    pub n_perms: usize,
}

/// Sizes and repetitions of a search sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchSweep {
    pub num_min: usize,
    pub num_max: usize,
    pub incr: usize,
    /// Keys searched per stored element
    pub n_times: usize,
    pub order: Order,
}

/// Aggregated results for one input size.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeRecord {
    /// Input size
    pub n: usize,
    /// Trials (sorts or lookups) aggregated into this record
    pub n_elems: usize,
    /// Average wall time per trial, in seconds
    pub time: f64,
    pub average_ob: f64,
    pub max_ob: u64,
    pub min_ob: u64,
}

/// Running min/max/total of operation counts.
#[derive(Clone, Copy, Debug)]
struct ObStats {
    total: u128,
    min: u64,
    max: u64,
    count: usize,
}

impl ObStats {
    fn new() -> Self {
        Self {
            total: 0,
            min: u64::MAX,
            max: 0,
            count: 0,
        }
    }

    fn record(&mut self, ob: u64) {
        self.total += ob as u128;
        self.min = self.min.min(ob);
        self.max = self.max.max(ob);
        self.count += 1;
    }

    fn average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.total as f64 / self.count as f64
    }

    fn min(&self) -> u64 {
        if self.count == 0 {
            0
        } else {
            self.min
        }
    }
}

/// Sizes visited by a sweep: `num_min, num_min + incr, ...` up to `num_max`.
pub fn sweep_sizes(num_min: usize, num_max: usize, incr: usize) -> Result<Vec<usize>> {
    if incr == 0 || num_min > num_max {
        return Err(AlgoError::InvalidSweep {
            num_min,
            num_max,
            incr,
        });
    }
    Ok((num_min..=num_max).step_by(incr).collect())
}

fn pin(config: &TimingConfig) -> Option<CpuPinGuard> {
    (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new)
}

// ============================================================================
// Sorting
// ============================================================================

/// Sort `n_perms` fresh permutations of size `n` with `method` and
/// aggregate the results.
pub fn average_sorting_time(
    method: &dyn SortAlgorithm,
    n_perms: usize,
    n: usize,
    rng: &mut dyn RngCore,
    config: &TimingConfig,
) -> Result<TimeRecord> {
    if n_perms == 0 {
        return Err(AlgoError::GenerationFailed(
            "at least one permutation per size is required".to_string(),
        ));
    }

    let mut perms = generate_permutations(n_perms, n, rng)?;
    let mut stats = ObStats::new();

    let guard = pin(config);
    let start = now();
    for perm in perms.iter_mut() {
        let ob = method.sort(perm, 0, n - 1)?;
        stats.record(ob);
    }
    let total = elapsed(start);
    drop(guard);

    let record = TimeRecord {
        n,
        n_elems: n_perms,
        time: per_op_seconds(total, n_perms),
        average_ob: stats.average(),
        max_ob: stats.max,
        min_ob: stats.min(),
    };
    debug!(
        algorithm = method.name(),
        n,
        average_ob = record.average_ob,
        min_ob = record.min_ob,
        max_ob = record.max_ob,
        "sorting size done"
    );
    Ok(record)
}

/// Run [`average_sorting_time`] over every size of `sweep`, write the table
/// to `file` and return it.
pub fn generate_sorting_times(
    method: &dyn SortAlgorithm,
    file: impl AsRef<Path>,
    sweep: &SortSweep,
    rng: &mut dyn RngCore,
    config: &TimingConfig,
) -> Result<Vec<TimeRecord>> {
    let sizes = sweep_sizes(sweep.num_min, sweep.num_max, sweep.incr)?;

    let mut records = Vec::with_capacity(sizes.len());
    for n in sizes {
        records.push(average_sorting_time(method, sweep.n_perms, n, rng, config)?);
    }

    save_time_table(file.as_ref(), &records)?;
    info!(
        algorithm = method.name(),
        rows = records.len(),
        file = %file.as_ref().display(),
        "sorting times written"
    );
    Ok(records)
}

// ============================================================================
// Searching
// ============================================================================

/// Fill a dictionary of size `n` with a fresh permutation, search
/// `n * n_times` generated keys with `method` and aggregate the results.
///
/// A key that is not found fails the whole measurement.
pub fn average_search_time(
    method: &dyn SearchMethod,
    generator: &dyn KeyGenerator,
    order: Order,
    n: usize,
    n_times: usize,
    rng: &mut dyn RngCore,
    config: &TimingConfig,
) -> Result<TimeRecord> {
    let n_keys = n.checked_mul(n_times).filter(|&k| k > 0).ok_or_else(|| {
        AlgoError::GenerationFailed(format!("cannot generate {} x {} keys", n, n_times))
    })?;
    let max = i32::try_from(n)
        .map_err(|_| AlgoError::GenerationFailed(format!("size {} does not fit in i32", n)))?;

    let mut dict = Dictionary::new(n, order)?;
    let perm = generate_perm(n, rng)?;
    dict.massive_insert(&perm)?;

    let mut keys: Vec<i32> = Vec::new();
    keys.try_reserve_exact(n_keys)?;
    keys.resize(n_keys, 0);
    generator.generate(&mut keys, max, rng)?;

    let mut stats = ObStats::new();
    let guard = pin(config);
    let start = now();
    for &key in &keys {
        let hit = dict.search(key, method)?;
        stats.record(hit.obs);
    }
    let total = elapsed(start);
    drop(guard);

    let record = TimeRecord {
        n,
        n_elems: n_keys,
        time: per_op_seconds(total, n_keys),
        average_ob: stats.average(),
        max_ob: stats.max,
        min_ob: stats.min(),
    };
    debug!(
        method = method.name(),
        generator = generator.name(),
        n,
        average_ob = record.average_ob,
        "search size done"
    );
    Ok(record)
}

/// Run [`average_search_time`] over every size of `sweep`, write the table
/// to `file` and return it.
pub fn generate_search_times(
    method: &dyn SearchMethod,
    generator: &dyn KeyGenerator,
    file: impl AsRef<Path>,
    sweep: &SearchSweep,
    rng: &mut dyn RngCore,
    config: &TimingConfig,
) -> Result<Vec<TimeRecord>> {
    let sizes = sweep_sizes(sweep.num_min, sweep.num_max, sweep.incr)?;

    let mut records = Vec::with_capacity(sizes.len());
    for n in sizes {
        records.push(average_search_time(
            method,
            generator,
            sweep.order,
            n,
            sweep.n_times,
            rng,
            config,
        )?);
    }

    save_time_table(file.as_ref(), &records)?;
    info!(
        method = method.name(),
        generator = generator.name(),
        rows = records.len(),
        file = %file.as_ref().display(),
        "search times written"
    );
    Ok(records)
}
