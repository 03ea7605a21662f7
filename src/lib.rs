//! # Algo-Times
//!
//! Wall-clock time and basic-operation ("OB") counts for classic sorting
//! and searching algorithms over integer tables, swept across input sizes
//! and written out as plain-text tables.

pub mod error;
pub mod random;
pub mod registry;
pub mod search;
pub mod sorting;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

pub use error::{AlgoError, Result};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{AlgoError, Result};
    pub use crate::random::{generate_perm, KeyGenerator, PotentialKeys, UniformKeys};
    pub use crate::registry::{build_registry, AlgorithmRegistry};
    pub use crate::search::{
        BinarySearch, Dictionary, LinearSearch, Order, SearchHit, SearchMethod,
        SelfOrganizingSearch,
    };
    pub use crate::sorting::{
        LastElement, MedianOfThree, MergeSort, Midpoint, PivotPolicy, QuickSort, SelectSort,
        SelectSortInv, SortAlgorithm, StatisticalAverage,
    };
    pub use crate::utils::{
        generate_search_times, generate_sorting_times, make_rng, save_time_table, SearchSweep,
        SortSweep, TimeRecord, TimingConfig,
    };
}
