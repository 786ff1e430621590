//! Menu-driven permutation session over any reader/writer pair

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Instant;

use crate::core::performance::analyze_performance;
use crate::core::permutations::{factorial, Strategy};
use crate::reporting::report_writer::{
    write_comparison_report, write_permutation_report, ComparisonReport, PermutationReport,
};

/// Inputs longer than this many characters need confirmation first.
pub const LONG_INPUT_THRESHOLD: usize = 8;

/// Whether generating permutations of `input` warrants a warning.
pub fn needs_confirmation(input: &str) -> bool {
    input.chars().count() > LONG_INPUT_THRESHOLD
}

/// The warning shown before a long generation, without the trailing prompt.
pub fn long_input_warning(input: &str) -> String {
    let len = input.chars().count();
    match factorial(len) {
        Some(n) => format!("Warning: This will generate {} permutations.", n),
        None => format!("Warning: This will generate more than 34! permutations ({} characters).", len),
    }
}

/// Run the menu loop until the user exits or `input` reaches EOF.
pub fn run_session<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    loop {
        write_menu(output)?;
        let Some(choice) = read_trimmed(input)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => generate_interactive(input, output)?,
            "2" => compare_interactive(input, output)?,
            "3" => {
                writeln!(output, "Thank you for using String Permutations Generator!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }

        writeln!(output, "\nPress Enter to continue...")?;
        output.flush()?;
        if read_trimmed(input)?.is_none() {
            return Ok(());
        }
    }
}

fn write_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "\n=== String Permutations Generator ===")?;
    writeln!(output, "1. Generate Permutations")?;
    writeln!(output, "2. Compare Strategies")?;
    writeln!(output, "3. Exit")?;
    write!(output, "Enter your choice (1-3): ")?;
    output.flush()?;
    Ok(())
}

fn generate_interactive<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    write!(output, "Enter a string to generate permutations: ")?;
    output.flush()?;
    let text = read_trimmed(input)?;

    if let Some(text) = text.as_deref() {
        if needs_confirmation(text) {
            write!(output, "{} Continue? (y/n): ", long_input_warning(text))?;
            output.flush()?;
            if !answered_yes(read_trimmed(input)?) {
                return Ok(());
            }
        }
    }

    let show_all = match text {
        Some(_) => {
            write!(output, "Show all permutations? (y/n): ")?;
            output.flush()?;
            answered_yes(read_trimmed(input)?)
        }
        None => false,
    };

    let start = Instant::now();
    match Strategy::Standard.run(text.as_deref()) {
        Ok(set) => {
            let report = PermutationReport::new(
                text.as_deref().unwrap_or_default(),
                Strategy::Standard,
                set,
                start.elapsed(),
            );
            writeln!(output)?;
            write_permutation_report(output, &report, show_all)?;
        }
        Err(e) => writeln!(output, "Error: {}", e)?,
    }

    Ok(())
}

fn compare_interactive<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    write!(output, "Enter a string to compare strategies: ")?;
    output.flush()?;
    let text = read_trimmed(input)?;

    if let Some(text) = text.as_deref() {
        if needs_confirmation(text) {
            write!(output, "{} Continue? (y/n): ", long_input_warning(text))?;
            output.flush()?;
            if !answered_yes(read_trimmed(input)?) {
                return Ok(());
            }
        }
    }

    match analyze_performance(text.as_deref()) {
        Ok(result) => {
            let report = ComparisonReport::new(text.as_deref().unwrap_or_default(), &result);
            writeln!(output)?;
            write_comparison_report(output, &report)?;
        }
        Err(e) => writeln!(output, "Error: {}", e)?,
    }

    Ok(())
}

/// Read one line with surrounding whitespace removed; `None` at EOF.
pub fn read_trimmed<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// `y`, `yes`, `Y`... count as yes; anything else, including EOF, is no.
pub fn answered_yes(answer: Option<String>) -> bool {
    answer
        .map(|a| a.to_lowercase().starts_with('y'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_confirmation() {
        assert!(!needs_confirmation("abcdefgh"));
        assert!(needs_confirmation("abcdefghi"));
    }

    #[test]
    fn test_long_input_warning() {
        assert_eq!(
            long_input_warning("abcdefghi"),
            "Warning: This will generate 362880 permutations."
        );
    }

    #[test]
    fn test_answered_yes() {
        assert!(answered_yes(Some("Yes".into())));
        assert!(answered_yes(Some("y".into())));
        assert!(!answered_yes(Some("n".into())));
        assert!(!answered_yes(Some(String::new())));
        assert!(!answered_yes(None));
    }
}
