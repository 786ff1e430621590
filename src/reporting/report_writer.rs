//! Report writing for search and permutation results

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::performance::PerformanceResult;
use crate::core::permutations::{PermutationSet, Strategy};

/// Permutation listings at or below this size are always printed in full.
pub const SHOW_ALL_THRESHOLD: usize = 20;

/// How many permutations a truncated listing shows.
pub const PREVIEW_LIMIT: usize = 10;

/// Outcome of one file search
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub directory: PathBuf,
    pub file_name: String,
    pub matches: Vec<PathBuf>,
}

impl SearchReport {
    pub fn new(directory: &Path, file_name: &str, matches: Vec<PathBuf>) -> Self {
        Self {
            directory: directory.to_path_buf(),
            file_name: file_name.to_string(),
            matches,
        }
    }
}

/// Outcome of one permutation generation
#[derive(Debug, Clone, Serialize)]
pub struct PermutationReport {
    pub input: String,
    pub strategy: Strategy,
    pub count: usize,
    pub elapsed_ms: f64,
    pub permutations: Vec<String>,
}

impl PermutationReport {
    pub fn new(input: &str, strategy: Strategy, set: PermutationSet, elapsed: Duration) -> Self {
        Self {
            input: input.to_string(),
            strategy,
            count: set.len(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            permutations: set.into_iter().collect(),
        }
    }
}

/// Strategy timings in a serializable shape
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub input: String,
    pub permutation_count: usize,
    pub standard_ms: f64,
    pub swap_based_ms: f64,
}

impl ComparisonReport {
    pub fn new(input: &str, result: &PerformanceResult) -> Self {
        Self {
            input: input.to_string(),
            permutation_count: result.permutation_count,
            standard_ms: result.standard_ms(),
            swap_based_ms: result.swap_based_ms(),
        }
    }
}

/// Write the search outcome as text
///
/// # Arguments
/// * `out` - Destination writer
/// * `report` - Search outcome to describe
pub fn write_search_report<W: Write>(out: &mut W, report: &SearchReport) -> Result<()> {
    if report.matches.is_empty() {
        writeln!(
            out,
            "File '{}' not found in directory: {}",
            report.file_name,
            report.directory.display()
        )?;
        return Ok(());
    }

    writeln!(out, "File '{}' found at the following location(s):", report.file_name)?;
    for path in &report.matches {
        writeln!(out, "{}", path.display())?;
    }

    Ok(())
}

/// Write the generation outcome as text
///
/// Lists every permutation when `show_all` is set or the set is small,
/// otherwise the first [`PREVIEW_LIMIT`] followed by a remainder count.
pub fn write_permutation_report<W: Write>(
    out: &mut W,
    report: &PermutationReport,
    show_all: bool,
) -> Result<()> {
    writeln!(out, "Generating permutations for: \"{}\"", report.input)?;
    writeln!(out, "Generated {} permutations", report.count)?;
    writeln!(out, "Time taken: {:.2} ms", report.elapsed_ms)?;
    writeln!(out)?;

    if show_all || report.count <= SHOW_ALL_THRESHOLD {
        writeln!(out, "Permutations:")?;
        write_numbered(out, &report.permutations)?;
    } else {
        writeln!(out, "First {} permutations:", PREVIEW_LIMIT)?;
        write_numbered(out, &report.permutations[..PREVIEW_LIMIT])?;
        writeln!(out, "... and {} more", report.count - PREVIEW_LIMIT)?;
    }

    Ok(())
}

fn write_numbered<W: Write>(out: &mut W, permutations: &[String]) -> Result<()> {
    for (idx, permutation) in permutations.iter().enumerate() {
        writeln!(out, "{:4}: {}", idx + 1, permutation)?;
    }
    Ok(())
}

/// Write the strategy comparison as text
pub fn write_comparison_report<W: Write>(out: &mut W, report: &ComparisonReport) -> Result<()> {
    writeln!(out, "Comparing strategies for: \"{}\"", report.input)?;
    writeln!(out, "Generated {} permutations", report.permutation_count)?;
    writeln!(out, "Standard implementation: {:.2} ms", report.standard_ms)?;
    writeln!(out, "Swap-based implementation: {:.2} ms", report.swap_based_ms)?;
    Ok(())
}

/// Write any report as pretty-printed JSON followed by a newline
pub fn write_json<W: Write, T: Serialize>(out: &mut W, report: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
