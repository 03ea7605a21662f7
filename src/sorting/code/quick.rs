//! Quicksort over a pluggable pivot policy.

use super::pivot::PivotPolicy;
use crate::error::{check_range, AlgoError, Result};
use crate::sorting::SortAlgorithm;

/// Recursive quicksort parameterised by its pivot policy.
pub struct QuickSort<P> {
    pivot: P,
}

impl<P: PivotPolicy> QuickSort<P> {
    pub fn new(pivot: P) -> Self {
        Self { pivot }
    }

    fn sort_range(&self, table: &mut [i32], ip: usize, iu: usize) -> Result<u64> {
        if ip == iu {
            return Ok(0);
        }

        let (pos, mut obs) = partition(table, ip, iu, &self.pivot)?;

        // only descend into sub-ranges of at least two elements
        if ip + 1 < pos {
            obs += self.sort_range(table, ip, pos - 1)?;
        }
        if pos + 1 < iu {
            obs += self.sort_range(table, pos + 1, iu)?;
        }
        Ok(obs)
    }
}

impl<P: PivotPolicy> SortAlgorithm for QuickSort<P> {
    fn name(&self) -> &'static str {
        self.pivot.sort_name()
    }

    fn description(&self) -> &'static str {
        self.pivot.sort_description()
    }

    fn sort(&self, table: &mut [i32], ip: usize, iu: usize) -> Result<u64> {
        check_range(table.len(), ip, iu)?;
        self.sort_range(table, ip, iu)
    }
}

/// Partition `table[ip..=iu]` around the pivot chosen by `policy`.
///
/// The pivot is parked at `ip`, smaller elements are gathered right after it
/// in one left-to-right pass, then the pivot is swapped into its final slot.
/// Returns that slot and the comparison count, which is always `iu - ip`.
pub fn partition<P: PivotPolicy + ?Sized>(
    table: &mut [i32],
    ip: usize,
    iu: usize,
    policy: &P,
) -> Result<(usize, u64)> {
    check_range(table.len(), ip, iu)?;

    let chosen = policy.choose(table, ip, iu)?;
    if chosen < ip || chosen > iu {
        return Err(AlgoError::PivotOutOfRange {
            pos: chosen as i64,
            ip,
            iu,
        });
    }

    let key = table[chosen];
    table.swap(ip, chosen);

    let mut pos = ip;
    let mut obs = 0u64;
    for i in ip + 1..=iu {
        obs += 1;
        if table[i] < key {
            pos += 1;
            table.swap(i, pos);
        }
    }
    table.swap(ip, pos);

    Ok((pos, obs))
}
