use crate::error::{check_range, AlgoError, Result};
use crate::search::{SearchHit, SearchMethod};
use std::cmp::Ordering;

/// Classic binary search; one comparison counted per midpoint probe.
pub struct BinarySearch;

impl SearchMethod for BinarySearch {
    fn name(&self) -> &'static str {
        "binary"
    }

    fn description(&self) -> &'static str {
        "Binary search over a sorted table"
    }

    fn requires_sorted(&self) -> bool {
        true
    }

    fn search(&self, table: &mut [i32], first: usize, last: usize, key: i32) -> Result<SearchHit> {
        check_range(table.len(), first, last)?;

        // half-open [lo, hi) so the bounds never underflow
        let (mut lo, mut hi) = (first, last + 1);
        let mut obs = 0u64;
        while lo < hi {
            let mid = lo + (hi - 1 - lo) / 2;
            obs += 1;
            match key.cmp(&table[mid]) {
                Ordering::Equal => return Ok(SearchHit { position: mid, obs }),
                Ordering::Less => hi = mid,
                Ordering::Greater => lo = mid + 1,
            }
        }
        Err(AlgoError::NotFound { key })
    }
}
