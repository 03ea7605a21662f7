//! Top-down merge sort.

use crate::error::{check_range, AlgoError, Result};
use crate::sorting::SortAlgorithm;

/// Recursive merge sort.
pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn name(&self) -> &'static str {
        "merge_sort"
    }

    fn description(&self) -> &'static str {
        "Recursive merge sort with a scratch buffer per merge"
    }

    fn sort(&self, table: &mut [i32], ip: usize, iu: usize) -> Result<u64> {
        check_range(table.len(), ip, iu)?;
        merge_sort_range(table, ip, iu)
    }
}

fn merge_sort_range(table: &mut [i32], ip: usize, iu: usize) -> Result<u64> {
    if ip == iu {
        return Ok(0);
    }

    let mid = ip + (iu - ip) / 2;
    let mut obs = merge_sort_range(table, ip, mid)?;
    obs += merge_sort_range(table, mid + 1, iu)?;
    obs += merge(table, ip, mid, iu)?;
    Ok(obs)
}

/// Merge the sorted runs `table[ip..=mid]` and `table[mid+1..=iu]`.
///
/// Returns the number of head-to-head comparisons. Copying the leftover tail
/// of whichever run outlasts the other costs nothing.
pub fn merge(table: &mut [i32], ip: usize, mid: usize, iu: usize) -> Result<u64> {
    check_range(table.len(), ip, iu)?;
    if mid < ip || mid > iu {
        return Err(AlgoError::InvalidRange {
            ip,
            iu: mid,
            len: table.len(),
        });
    }

    let mut buf: Vec<i32> = Vec::new();
    buf.try_reserve_exact(iu + 1 - ip)?;

    let (mut i, mut j) = (ip, mid + 1);
    let mut obs = 0u64;
    while i <= mid && j <= iu {
        obs += 1;
        if table[i] < table[j] {
            buf.push(table[i]);
            i += 1;
        } else {
            buf.push(table[j]);
            j += 1;
        }
    }
    // at most one of these tails is non-empty
    buf.extend_from_slice(&table[i..mid + 1]);
    buf.extend_from_slice(&table[j..iu + 1]);

    table[ip..=iu].copy_from_slice(&buf);
    Ok(obs)
}
