use crate::error::{check_range, AlgoError, Result};
use crate::search::{SearchHit, SearchMethod};

/// Left-to-right scan.
pub struct LinearSearch;

impl SearchMethod for LinearSearch {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn description(&self) -> &'static str {
        "Linear scan from the first slot"
    }

    fn search(&self, table: &mut [i32], first: usize, last: usize, key: i32) -> Result<SearchHit> {
        check_range(table.len(), first, last)?;

        let mut obs = 0u64;
        for (position, &value) in table.iter().enumerate().take(last + 1).skip(first) {
            obs += 1;
            if value == key {
                return Ok(SearchHit { position, obs });
            }
        }
        Err(AlgoError::NotFound { key })
    }
}

/// Linear scan that swaps each hit one slot towards the front.
pub struct SelfOrganizingSearch;

impl SearchMethod for SelfOrganizingSearch {
    fn name(&self) -> &'static str {
        "self_organizing"
    }

    fn description(&self) -> &'static str {
        "Linear scan, hit moves one slot forward"
    }

    fn search(&self, table: &mut [i32], first: usize, last: usize, key: i32) -> Result<SearchHit> {
        let mut hit = LinearSearch.search(table, first, last, key)?;
        if hit.position > first {
            table.swap(hit.position - 1, hit.position);
            hit.position -= 1;
        }
        Ok(hit)
    }
}
