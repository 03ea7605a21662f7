//! Algorithm registry for lookup by name.
//!
//! The CLI resolves user-supplied names here, so sorters, search methods
//! and key generators never have to be matched on by hand.

use crate::random::{available_generators, generate_perm, KeyGenerator};
use crate::search::{available_searchers, SearchMethod};
use crate::sorting::{available_sorters, SortAlgorithm};
use crate::utils::bench::make_rng;

/// Every runnable variant, grouped by kind
pub struct AlgorithmRegistry {
    sorters: Vec<Box<dyn SortAlgorithm>>,
    searchers: Vec<Box<dyn SearchMethod>>,
    generators: Vec<Box<dyn KeyGenerator>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            sorters: Vec::new(),
            searchers: Vec::new(),
            generators: Vec::new(),
        }
    }

    pub fn register_sorter(&mut self, algo: Box<dyn SortAlgorithm>) {
        self.sorters.push(algo);
    }

    pub fn register_searcher(&mut self, method: Box<dyn SearchMethod>) {
        self.searchers.push(method);
    }

    pub fn register_generator(&mut self, generator: Box<dyn KeyGenerator>) {
        self.generators.push(generator);
    }

    pub fn sorters(&self) -> &[Box<dyn SortAlgorithm>] {
        &self.sorters
    }

    pub fn searchers(&self) -> &[Box<dyn SearchMethod>] {
        &self.searchers
    }

    pub fn generators(&self) -> &[Box<dyn KeyGenerator>] {
        &self.generators
    }

    /// Find sorting algorithm by name
    pub fn find_sorter(&self, name: &str) -> Option<&dyn SortAlgorithm> {
        self.sorters
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// Find search method by name
    pub fn find_searcher(&self, name: &str) -> Option<&dyn SearchMethod> {
        self.searchers
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
    }

    /// Find key generator by name
    pub fn find_generator(&self, name: &str) -> Option<&dyn KeyGenerator> {
        self.generators
            .iter()
            .find(|g| g.name() == name)
            .map(|g| g.as_ref())
    }

    /// List sorter names
    pub fn sorter_names(&self) -> Vec<&'static str> {
        self.sorters.iter().map(|a| a.name()).collect()
    }

    /// List search method names
    pub fn searcher_names(&self) -> Vec<&'static str> {
        self.searchers.iter().map(|s| s.name()).collect()
    }

    /// List key generator names
    pub fn generator_names(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.name()).collect()
    }

    /// Check every sorter against the standard library sort on random
    /// permutations of a few sizes.
    pub fn verify(&self, seed: u64) -> Result<(), String> {
        let mut rng = make_rng(Some(seed));
        for algo in &self.sorters {
            for n in [1usize, 2, 3, 17, 100, 513] {
                let input = generate_perm(n, &mut rng).map_err(|e| e.to_string())?;
                let mut expected = input.clone();
                expected.sort_unstable();
                if algo.descending() {
                    expected.reverse();
                }

                let mut table = input;
                algo.sort(&mut table, 0, n - 1)
                    .map_err(|e| format!("Algorithm '{}' failed at size {}: {}", algo.name(), n, e))?;
                if table != expected {
                    return Err(format!(
                        "Algorithm '{}' failed verification at size {}",
                        algo.name(),
                        n
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();
    for algo in available_sorters() {
        registry.register_sorter(algo);
    }
    for method in available_searchers() {
        registry.register_searcher(method);
    }
    for generator in available_generators() {
        registry.register_generator(generator);
    }
    registry
}
