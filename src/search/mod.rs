//! # Dictionary Search
//!
//! A fixed-capacity table of keys, optionally kept sorted on insertion, and
//! three interchangeable ways to look a key up in it:
//!
//! - **Linear**: left-to-right scan
//! - **Self-organizing linear**: linear scan, then the hit moves one slot
//!   towards the front so frequent keys drift forward
//! - **Binary**: midpoint halving, needs a sorted table
//!
//! Each search reports the position of the key and the number of key
//! comparisons it made.

pub mod code;
#[cfg(test)]
pub mod test;

pub use code::*;

use crate::error::Result;

/// Outcome of a successful lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchHit {
    /// Index at which the key is stored once the search returns; for a
    /// self-organizing search this is the slot after the move
    pub position: usize,
    /// Key comparisons performed
    pub obs: u64,
}

/// Common interface of every search method.
pub trait SearchMethod: Send + Sync {
    /// Short identifier (e.g., "binary")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// True if the method only works on a sorted table.
    fn requires_sorted(&self) -> bool {
        false
    }

    /// Look `key` up in `table[first..=last]`.
    ///
    /// Takes the table mutably because some methods reorganise it.
    fn search(&self, table: &mut [i32], first: usize, last: usize, key: i32) -> Result<SearchHit>;
}

/// All search methods.
pub fn available_searchers() -> Vec<Box<dyn SearchMethod>> {
    vec![
        Box::new(LinearSearch),
        Box::new(SelfOrganizingSearch),
        Box::new(BinarySearch),
    ]
}
