//! Selection sort, ascending and descending.

use crate::error::{check_range, Result};
use crate::sorting::SortAlgorithm;

/// Index of the smallest element of `table[ip..=iu]`.
///
/// The first occurrence wins on ties. Scanning starts at `ip + 1`, so the
/// search costs `iu - ip` comparisons.
pub fn min_index(table: &[i32], ip: usize, iu: usize) -> usize {
    let mut min = ip;
    for i in ip + 1..=iu {
        if table[i] < table[min] {
            min = i;
        }
    }
    min
}

/// Ascending selection sort.
pub struct SelectSort;

impl SortAlgorithm for SelectSort {
    fn name(&self) -> &'static str {
        "select_sort"
    }

    fn description(&self) -> &'static str {
        "Selection sort, smallest element swapped to the front"
    }

    fn sort(&self, table: &mut [i32], ip: usize, iu: usize) -> Result<u64> {
        check_range(table.len(), ip, iu)?;

        let mut count = 0u64;
        for i in ip..iu {
            let minimum = min_index(table, i, iu);
            count += (iu - i) as u64;
            table.swap(i, minimum);
        }
        Ok(count)
    }
}

/// Descending selection sort.
///
/// Walks down from `iu`, moving the minimum of `[ip, i]` to position `i`, so
/// the largest values end up at the front.
pub struct SelectSortInv;

impl SortAlgorithm for SelectSortInv {
    fn name(&self) -> &'static str {
        "select_sort_inv"
    }

    fn description(&self) -> &'static str {
        "Selection sort, descending order"
    }

    fn sort(&self, table: &mut [i32], ip: usize, iu: usize) -> Result<u64> {
        check_range(table.len(), ip, iu)?;

        let mut count = 0u64;
        for i in (ip + 1..=iu).rev() {
            let minimum = min_index(table, ip, i);
            count += (i - ip) as u64;
            table.swap(i, minimum);
        }
        Ok(count)
    }

    fn descending(&self) -> bool {
        true
    }
}
