//! Recursive Toolkit Library
//!
//! Two small recursive utilities: an exact-name file finder and a generator
//! of the unique permutations of a string, with a strategy timing report.

pub mod core;
pub mod interactive;
pub mod reporting;
pub mod scanner;

pub use crate::core::permutations;
pub use crate::reporting::report_writer;
pub use crate::scanner::file_finder;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::error::InvalidArgument;
    pub use crate::core::performance::{analyze_performance, PerformanceResult};
    pub use crate::core::permutations::{
        expected_count, factorial, generate, generate_by_swap, PermutationSet, Strategy,
    };
    pub use crate::interactive::run_session;
    pub use crate::reporting::report_writer::{
        write_comparison_report, write_json, write_permutation_report, write_search_report,
        ComparisonReport, PermutationReport, SearchReport,
    };
    pub use crate::scanner::file_finder::{find, find_with_progress};
}
