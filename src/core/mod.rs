//! Permutation generation, strategy timing, and the shared error type

pub mod error;
pub mod performance;
pub mod permutations;

pub use error::InvalidArgument;
pub use performance::{analyze_performance, PerformanceResult};
pub use permutations::{
    expected_count, factorial, generate, generate_by_swap, PermutationSet, Strategy,
};
