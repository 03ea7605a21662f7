//! Sorting implementations.

mod merge;
mod pivot;
mod quick;
mod select;

pub use merge::{merge, MergeSort};
pub use pivot::{LastElement, MedianOfThree, Midpoint, PivotPolicy, StatisticalAverage};
pub use quick::{partition, QuickSort};
pub use select::{min_index, SelectSort, SelectSortInv};
