//! Utility modules for measuring and reporting.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{make_rng, time_seed, BenchRng};
pub use cpu_affinity::CpuPinGuard;
pub use runner::{read_time_table, save_time_table};
pub use timer::{
    average_search_time, average_sorting_time, generate_search_times, generate_sorting_times,
    PinStrategy, SearchSweep, SortSweep, TimeRecord, TimingConfig,
};
