//! Pivot selection policies for quicksort.

use crate::error::{check_range, AlgoError, Result};

/// Chooses the position of the pivot inside `[ip, iu]`.
pub trait PivotPolicy: Send + Sync {
    /// Registry name of a quicksort using this policy.
    fn sort_name(&self) -> &'static str;

    /// Description of a quicksort using this policy.
    fn sort_description(&self) -> &'static str;

    /// Position of the pivot. Policies are not required to stay inside the
    /// range; the partition step rejects positions that do not.
    fn choose(&self, table: &[i32], ip: usize, iu: usize) -> Result<usize>;
}

/// Pivot is the last element of the range.
pub struct LastElement;

impl PivotPolicy for LastElement {
    fn sort_name(&self) -> &'static str {
        "quick_sort_last"
    }

    fn sort_description(&self) -> &'static str {
        "Quicksort, pivot is the last element"
    }

    fn choose(&self, table: &[i32], ip: usize, iu: usize) -> Result<usize> {
        check_range(table.len(), ip, iu)?;
        Ok(iu)
    }
}

/// Pivot is the element at the middle index of the range.
pub struct Midpoint;

impl PivotPolicy for Midpoint {
    fn sort_name(&self) -> &'static str {
        "quick_sort_mid"
    }

    fn sort_description(&self) -> &'static str {
        "Quicksort, pivot is the middle index"
    }

    fn choose(&self, table: &[i32], ip: usize, iu: usize) -> Result<usize> {
        check_range(table.len(), ip, iu)?;
        Ok((ip + iu) / 2)
    }
}

/// Pivot position is the integer average of the values at `ip`, `iu` and
/// the middle index, used directly as an index.
///
/// This is not a median of three: it reads values and returns them as a
/// position. On a permutation of `1..=N` every sub-range holds consecutive
/// values, which keeps the result inside the range. Anything else can push
/// it outside: large values, and also repeated values, since equal keys stop
/// the sub-ranges from shrinking around their own values (ten 7s fail once
/// the range narrows to `[8, 9]`). Partitioning then fails with
/// [`AlgoError::PivotOutOfRange`]. Only permutations sort reliably.
pub struct StatisticalAverage;

impl PivotPolicy for StatisticalAverage {
    fn sort_name(&self) -> &'static str {
        "quick_sort_stat"
    }

    fn sort_description(&self) -> &'static str {
        "Quicksort, pivot index is the average of three values"
    }

    fn choose(&self, table: &[i32], ip: usize, iu: usize) -> Result<usize> {
        check_range(table.len(), ip, iu)?;
        let mid = (ip + iu) / 2;
        let sum = table[ip] as i64 + table[iu] as i64 + table[mid] as i64;
        let pos = sum / 3;
        usize::try_from(pos).map_err(|_| AlgoError::PivotOutOfRange { pos, ip, iu })
    }
}

/// Pivot is the position holding the median value among `ip`, the middle
/// index and `iu`.
pub struct MedianOfThree;

impl PivotPolicy for MedianOfThree {
    fn sort_name(&self) -> &'static str {
        "quick_sort_median3"
    }

    fn sort_description(&self) -> &'static str {
        "Quicksort, pivot is the median of first, middle and last"
    }

    fn choose(&self, table: &[i32], ip: usize, iu: usize) -> Result<usize> {
        check_range(table.len(), ip, iu)?;
        let mid = (ip + iu) / 2;
        let (a, b, c) = (table[ip], table[mid], table[iu]);

        let pos = if (a <= b) == (b <= c) {
            mid
        } else if (b <= a) == (a <= c) {
            ip
        } else {
            iu
        };
        Ok(pos)
    }
}
