//! Unique permutation generation
//!
//! Two independent strategies produce the same [`PermutationSet`]:
//!
//! * [`generate`] grows a prefix by extracting one character at a time from
//!   the remaining pool.
//! * [`generate_by_swap`] permutes a single character buffer in place and
//!   undoes each swap on the way back up.
//!
//! Both collect into an ordered set, so inputs with repeated characters
//! collapse to one representative per distinct arrangement.
//! Work and memory are O(n!), so keep inputs short (beyond ~10 characters
//! is impractical).

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use super::error::InvalidArgument;

/// Distinct permutations produced by one generation call.
pub type PermutationSet = BTreeSet<String>;

/// Generate all unique permutations by prefix extension.
///
/// `None` stands for an absent input and is rejected; the empty string is
/// valid and yields `{""}`.
///
/// # Errors
/// [`InvalidArgument::MissingInput`] when `input` is `None`.
pub fn generate(input: Option<&str>) -> Result<PermutationSet, InvalidArgument> {
    let input = input.ok_or(InvalidArgument::MissingInput)?;

    let mut result = PermutationSet::new();
    let mut pool: Vec<char> = input.chars().collect();
    let mut prefix = String::with_capacity(input.len());
    extend_prefix(&mut prefix, &mut pool, &mut result);

    tracing::debug!(input, count = result.len(), "generated permutations by prefix");
    Ok(result)
}

fn extend_prefix(prefix: &mut String, pool: &mut Vec<char>, result: &mut PermutationSet) {
    if pool.is_empty() {
        result.insert(prefix.clone());
        return;
    }

    for i in 0..pool.len() {
        let c = pool.remove(i);
        prefix.push(c);
        extend_prefix(prefix, pool, result);
        prefix.pop();
        pool.insert(i, c);
    }
}

/// Generate all unique permutations by in-place swapping and backtracking.
///
/// # Errors
/// [`InvalidArgument::MissingInput`] when `input` is `None`.
pub fn generate_by_swap(input: Option<&str>) -> Result<PermutationSet, InvalidArgument> {
    let input = input.ok_or(InvalidArgument::MissingInput)?;

    let mut result = PermutationSet::new();
    let mut buffer: Vec<char> = input.chars().collect();
    permute_in_place(&mut buffer, 0, &mut result);

    tracing::debug!(input, count = result.len(), "generated permutations by swap");
    Ok(result)
}

fn permute_in_place(buffer: &mut [char], start: usize, result: &mut PermutationSet) {
    if start == buffer.len() {
        result.insert(buffer.iter().collect());
        return;
    }

    for i in start..buffer.len() {
        buffer.swap(start, i);
        permute_in_place(buffer, start + 1, result);
        // Restore so the next sibling sees the pre-swap arrangement
        buffer.swap(start, i);
    }
}

/// `n!`, or `None` once it no longer fits in a `u128` (n > 34).
pub fn factorial(n: usize) -> Option<u128> {
    (2..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

/// Number of distinct permutations of `input`: n! / Π(mᵢ!) over the
/// multiplicity of each character. Matches the size of the set either
/// strategy returns, without generating it.
pub fn expected_count(input: &str) -> Option<u128> {
    let mut multiplicities: HashMap<char, u128> = HashMap::new();
    for c in input.chars() {
        *multiplicities.entry(c).or_insert(0) += 1;
    }

    // Product of binomials C(placed + m, m); every partial quotient is exact.
    let mut placed = 0u128;
    let mut count = 1u128;
    for m in multiplicities.into_values() {
        for i in 1..=m {
            placed += 1;
            count = count.checked_mul(placed)? / i;
        }
    }
    Some(count)
}

/// Selects one of the two generation strategies by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Prefix extension, see [`generate`].
    #[default]
    Standard,
    /// In-place swap with backtracking, see [`generate_by_swap`].
    Swap,
}

impl Strategy {
    pub fn run(self, input: Option<&str>) -> Result<PermutationSet, InvalidArgument> {
        match self {
            Strategy::Standard => generate(input),
            Strategy::Swap => generate_by_swap(input),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Standard => f.write_str("standard"),
            Strategy::Swap => f.write_str("swap"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "prefix" => Ok(Strategy::Standard),
            "swap" | "backtrack" => Ok(Strategy::Swap),
            other => Err(format!(
                "unknown strategy '{}' (expected 'standard' or 'swap')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> PermutationSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(generate(Some("")).unwrap(), set(&[""]));
        assert_eq!(generate(Some("a")).unwrap(), set(&["a"]));
        assert_eq!(generate_by_swap(Some("")).unwrap(), set(&[""]));
        assert_eq!(generate_by_swap(Some("a")).unwrap(), set(&["a"]));
    }

    #[test]
    fn test_missing_input_rejected() {
        assert_eq!(generate(None), Err(InvalidArgument::MissingInput));
        assert_eq!(generate_by_swap(None), Err(InvalidArgument::MissingInput));
    }

    #[test]
    fn test_repeated_characters_collapse() {
        assert_eq!(generate(Some("aba")).unwrap(), set(&["aab", "aba", "baa"]));
        assert_eq!(generate_by_swap(Some("aaa")).unwrap(), set(&["aaa"]));
    }

    #[test]
    fn test_multibyte_characters_are_permuted_whole() {
        let result = generate(Some("éa")).unwrap();
        assert_eq!(result, set(&["éa", "aé"]));
        assert_eq!(result, generate_by_swap(Some("éa")).unwrap());
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(8), Some(40320));
        assert!(factorial(34).is_some());
        assert_eq!(factorial(35), None);
    }

    #[test]
    fn test_expected_count() {
        assert_eq!(expected_count(""), Some(1));
        assert_eq!(expected_count("abc"), Some(6));
        assert_eq!(expected_count("aba"), Some(3));
        assert_eq!(expected_count("aabb"), Some(6));
        assert_eq!(expected_count("mississippi"), Some(34650));
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("swap".parse::<Strategy>(), Ok(Strategy::Swap));
        assert_eq!(" Standard ".parse::<Strategy>(), Ok(Strategy::Standard));
        assert!("heap".parse::<Strategy>().is_err());
        assert_eq!(Strategy::default().to_string(), "standard");
    }
}
