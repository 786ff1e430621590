//! Timing comparison between the two permutation strategies

use std::fmt;
use std::time::{Duration, Instant};

use super::error::InvalidArgument;
use super::permutations::{generate, generate_by_swap};

/// Permutation count and wall time of each strategy for one input.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceResult {
    pub permutation_count: usize,
    pub standard: Duration,
    pub swap_based: Duration,
}

impl PerformanceResult {
    pub fn standard_ms(&self) -> f64 {
        self.standard.as_secs_f64() * 1000.0
    }

    pub fn swap_based_ms(&self) -> f64 {
        self.swap_based.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for PerformanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated {} permutations", self.permutation_count)?;
        writeln!(f, "Standard implementation: {:.2} ms", self.standard_ms())?;
        write!(f, "Swap-based implementation: {:.2} ms", self.swap_based_ms())
    }
}

/// Run both strategies on `input` and time each one.
///
/// # Errors
/// [`InvalidArgument::MissingInput`] when `input` is `None`; nothing is
/// timed in that case.
pub fn analyze_performance(input: Option<&str>) -> Result<PerformanceResult, InvalidArgument> {
    let input = input.ok_or(InvalidArgument::MissingInput)?;

    let start = Instant::now();
    let standard_set = generate(Some(input))?;
    let standard = start.elapsed();

    let start = Instant::now();
    let swap_set = generate_by_swap(Some(input))?;
    let swap_based = start.elapsed();

    if standard_set != swap_set {
        tracing::warn!(input, "strategies disagree on the permutation set");
    }

    tracing::info!(
        input,
        count = standard_set.len(),
        standard_ms = standard.as_secs_f64() * 1000.0,
        swap_ms = swap_based.as_secs_f64() * 1000.0,
        "compared permutation strategies"
    );

    Ok(PerformanceResult {
        permutation_count: standard_set.len(),
        standard,
        swap_based,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_counts_permutations() {
        let result = analyze_performance(Some("abcd")).unwrap();
        assert_eq!(result.permutation_count, 24);
        assert!(result.standard_ms() >= 0.0);
        assert!(result.swap_based_ms() >= 0.0);
    }

    #[test]
    fn test_analyze_rejects_missing_input() {
        assert_eq!(analyze_performance(None), Err(InvalidArgument::MissingInput));
    }

    #[test]
    fn test_display_format() {
        let result = PerformanceResult {
            permutation_count: 6,
            standard: Duration::from_micros(1500),
            swap_based: Duration::from_micros(250),
        };
        assert_eq!(
            result.to_string(),
            "Generated 6 permutations\nStandard implementation: 1.50 ms\nSwap-based implementation: 0.25 ms"
        );
    }
}
