//! Text and JSON output

pub mod report_writer;

pub use report_writer::{
    write_comparison_report, write_json, write_permutation_report, write_search_report,
    ComparisonReport, PermutationReport, SearchReport,
};
