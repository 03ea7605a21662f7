//! # Sorting Algorithms
//!
//! Every sort works in place on an inclusive index range `[ip, iu]` of an
//! `i32` table and returns the number of basic operations (key comparisons)
//! it performed.
//!
//! ## Variants
//!
//! - **Selection sort**: ascending and descending, `n(n-1)/2` comparisons
//!   regardless of input order
//! - **Merge sort**: recursive halving, counts only the comparisons made
//!   while interleaving the two halves
//! - **Quicksort**: recursive partitioning around a pivot chosen by a
//!   pluggable [`PivotPolicy`]

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

use crate::error::Result;

/// Common interface of every sorting variant.
///
/// The harness only sees this trait, so variants can be swapped at call time.
pub trait SortAlgorithm: Send + Sync {
    /// Short identifier (e.g., "merge_sort")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Sort `table[ip..=iu]` in place and return the comparison count.
    fn sort(&self, table: &mut [i32], ip: usize, iu: usize) -> Result<u64>;

    /// True when the variant leaves the range in descending order.
    fn descending(&self) -> bool {
        false
    }
}

/// All sorting variants, in the order they are listed to the user.
pub fn available_sorters() -> Vec<Box<dyn SortAlgorithm>> {
    vec![
        Box::new(SelectSort),
        Box::new(SelectSortInv),
        Box::new(MergeSort),
        Box::new(QuickSort::new(LastElement)),
        Box::new(QuickSort::new(Midpoint)),
        Box::new(QuickSort::new(StatisticalAverage)),
        Box::new(QuickSort::new(MedianOfThree)),
    ]
}
