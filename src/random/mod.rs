//! # Input Generators
//!
//! Random permutations for the sorting sweeps and key streams for the
//! search sweeps. Every generator draws from a caller-supplied random
//! source so runs can be replayed from a seed.

pub mod keys;
pub mod permutations;

pub use keys::{
    available_generators, potential_key_generator, uniform_key_generator, KeyGenerator,
    PotentialKeys, UniformKeys,
};
pub use permutations::{generate_perm, generate_permutations, random_num};
