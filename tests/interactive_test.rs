//! Integration tests for the interactive permutation session
//!
//! Drives `run_session` with scripted input and inspects the transcript.

use recursive_toolkit::prelude::*;
use std::io::Cursor;

fn transcript(script: &str) -> String {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    run_session(&mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

/// Test that choosing exit ends the session
#[test]
fn test_exit_immediately() {
    let out = transcript("3\n");
    assert!(out.contains("=== String Permutations Generator ==="));
    assert!(out.contains("Thank you for using String Permutations Generator!"));
}

/// Test generating and listing a small permutation set
#[test]
fn test_generate_small_input() {
    let out = transcript("1\nabc\nn\n\n3\n");

    assert!(out.contains("Generating permutations for: \"abc\""));
    assert!(out.contains("Generated 6 permutations"));
    assert!(out.contains("   1: abc"));
    assert!(out.contains("Press Enter to continue..."));
    assert!(out.ends_with("Thank you for using String Permutations Generator!\n"));
}

/// Test that large sets are truncated to a preview
#[test]
fn test_generate_truncates_large_output() {
    let out = transcript("1\nabcde\nn\n\n3\n");

    assert!(out.contains("Generated 120 permutations"));
    assert!(out.contains("First 10 permutations:"));
    assert!(out.contains("... and 110 more"));
}

/// Test that answering yes lists every permutation
#[test]
fn test_generate_show_all() {
    let out = transcript("1\nabcde\ny\n\n3\n");

    assert!(out.contains(" 120: edcba"));
    assert!(!out.contains("more"));
}

/// Test that declining the long-input warning skips generation
#[test]
fn test_long_input_declined() {
    let out = transcript("1\nabcdefghi\nn\n\n3\n");

    assert!(out.contains("Warning: This will generate 362880 permutations. Continue? (y/n): "));
    assert!(!out.contains("Generated"));
}

/// Test the strategy comparison menu entry
#[test]
fn test_compare_strategies() {
    let out = transcript("2\nabcd\n\n3\n");

    assert!(out.contains("Comparing strategies for: \"abcd\""));
    assert!(out.contains("Generated 24 permutations"));
    assert!(out.contains("Standard implementation:"));
    assert!(out.contains("Swap-based implementation:"));
}

/// Test that an unknown menu choice is reported
#[test]
fn test_invalid_choice() {
    let out = transcript("9\n\n3\n");
    assert!(out.contains("Invalid choice. Please try again."));
}

/// Test that EOF at the menu ends the session
#[test]
fn test_eof_ends_session() {
    let out = transcript("");
    assert!(out.contains("Enter your choice (1-3): "));
    assert!(!out.contains("Thank you"));
}

/// Test that EOF at the input prompt surfaces the missing-input error
#[test]
fn test_eof_at_input_prompt_reports_missing_input() {
    let out = transcript("1\n");
    assert!(out.contains("Error: Input string cannot be null"));
}
