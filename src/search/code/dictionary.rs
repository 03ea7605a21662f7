//! Fixed-capacity key table.

use crate::error::{AlgoError, Result};
use crate::search::{SearchHit, SearchMethod};

/// Whether insertion keeps the table sorted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    Sorted,
    #[default]
    NotSorted,
}

/// Array-backed dictionary of `i32` keys with a capacity fixed at creation.
///
/// With [`Order::Sorted`] the stored keys are non-decreasing between calls.
#[derive(Debug, Clone)]
pub struct Dictionary {
    table: Vec<i32>,
    size: usize,
    order: Order,
}

impl Dictionary {
    /// Create an empty dictionary able to hold `size` keys.
    pub fn new(size: usize, order: Order) -> Result<Self> {
        let mut table = Vec::new();
        table.try_reserve_exact(size)?;
        Ok(Self { table, size, order })
    }

    /// Declared capacity.
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Stored keys in slot order.
    pub fn as_slice(&self) -> &[i32] {
        &self.table
    }

    /// Append `key`; a sorted dictionary then bubbles it left until order
    /// is restored. Returns the number of shifts made.
    pub fn insert(&mut self, key: i32) -> Result<u64> {
        if self.table.len() == self.size {
            return Err(AlgoError::CapacityExceeded { size: self.size });
        }
        self.table.push(key);

        let mut obs = 0u64;
        if self.order == Order::Sorted {
            let mut j = self.table.len() - 1;
            while j > 0 && self.table[j - 1] > self.table[j] {
                obs += 1;
                self.table.swap(j - 1, j);
                j -= 1;
            }
        }
        Ok(obs)
    }

    /// Insert every key of `keys`, stopping at the first failure.
    pub fn massive_insert(&mut self, keys: &[i32]) -> Result<u64> {
        let mut obs = 0u64;
        for &key in keys {
            obs += self.insert(key)?;
        }
        Ok(obs)
    }

    /// Look `key` up over all stored keys with `method`.
    pub fn search(&mut self, key: i32, method: &dyn SearchMethod) -> Result<SearchHit> {
        if self.table.is_empty() {
            return Err(AlgoError::NotFound { key });
        }
        let last = self.table.len() - 1;
        method.search(&mut self.table, 0, last, key)
    }
}
