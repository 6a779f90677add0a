// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! String analysis.
//!
//! Derives the fixed property set of a raw string. Every function here is
//! pure: the same input always yields the same output, and the input is
//! never normalized before fingerprinting.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::record::StringProperties;

/// Compute the content fingerprint of a raw value.
///
/// SHA-256 over the UTF-8 bytes, lower-case hex. Case and whitespace
/// sensitive: `"Abc"` and `"abc"` have different fingerprints.
pub fn fingerprint(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// Derive the full property set of `value`.
pub fn analyze(value: &str) -> StringProperties {
    let character_frequency_map = character_frequencies(value);

    StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: character_frequency_map.len(),
        word_count: word_count(value),
        content_hash: fingerprint(value),
        character_frequency_map,
    }
}

/// Palindrome check after lower-casing and dropping whitespace.
///
/// Punctuation is kept, so `"a,a"` is a palindrome but `"a,b a"` is not.
pub fn is_palindrome(value: &str) -> bool {
    let normalized: Vec<char> = value
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    normalized.iter().eq(normalized.iter().rev())
}

/// Number of whitespace-delimited, non-empty tokens.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Case-sensitive occurrence count of every character, whitespace included.
pub fn character_frequencies(value: &str) -> BTreeMap<char, usize> {
    let mut frequencies = BTreeMap::new();
    for c in value.chars() {
        *frequencies.entry(c).or_insert(0) += 1;
    }
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_frequency_map_exactness() {
        let props = analyze("aabc");

        assert_eq!(props.length, 4);
        assert_eq!(props.unique_characters, 3);
        assert_eq!(props.word_count, 1);
        assert_eq!(props.character_frequency_map.get(&'a'), Some(&2));
        assert_eq!(props.character_frequency_map.get(&'b'), Some(&1));
        assert_eq!(props.character_frequency_map.get(&'c'), Some(&1));
        assert_eq!(props.character_frequency_map.len(), 3);
    }

    #[test]
    fn test_empty_string_is_total() {
        let props = analyze("");

        assert_eq!(props.length, 0);
        assert_eq!(props.word_count, 0);
        assert_eq!(props.unique_characters, 0);
        assert!(props.is_palindrome);
        assert!(props.character_frequency_map.is_empty());
        assert_eq!(
            props.content_hash,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_palindrome_folds_case_and_whitespace_only() {
        assert!(is_palindrome("A man a nam A"));
        assert!(is_palindrome("Race car"));
        // "amana" reversed is "anama"
        assert!(!is_palindrome("A man A"));
        assert!(!is_palindrome("hello"));
        // punctuation survives normalization
        assert!(!is_palindrome("A man, a plan, a canal: Panama"));
        assert!(is_palindrome("a,a"));
    }

    #[test]
    fn test_word_count_ignores_surrounding_and_repeated_whitespace() {
        assert_eq!(word_count("  hello   world \t again\n"), 3);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("single"), 1);
    }

    #[test]
    fn test_frequencies_are_case_sensitive_and_count_whitespace() {
        let freq = character_frequencies("Aa a!");
        assert_eq!(freq.get(&'A'), Some(&1));
        assert_eq!(freq.get(&'a'), Some(&2));
        assert_eq!(freq.get(&' '), Some(&1));
        assert_eq!(freq.get(&'!'), Some(&1));
    }

    #[test]
    fn test_fingerprint_is_case_sensitive() {
        assert_ne!(fingerprint("Hello"), fingerprint("hello"));
        assert_ne!(fingerprint("hello"), fingerprint("hello "));
        assert_eq!(
            fingerprint("hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let props = analyze("héllo");
        assert_eq!(props.length, 5);
        assert_eq!(props.unique_characters, 4);
    }

    proptest! {
        #[test]
        fn proptest_analysis_is_deterministic(value in "\\PC{0,64}") {
            prop_assert_eq!(analyze(&value), analyze(&value));
        }

        #[test]
        fn proptest_frequency_map_sums_to_length(value in "\\PC{0,64}") {
            let props = analyze(&value);
            let total: usize = props.character_frequency_map.values().sum();
            prop_assert_eq!(total, props.length);
            prop_assert_eq!(props.unique_characters, props.character_frequency_map.len());
        }

        #[test]
        fn proptest_fingerprint_matches_id_material(value in "\\PC{0,64}") {
            let props = analyze(&value);
            prop_assert_eq!(props.content_hash.len(), 64);
            prop_assert_eq!(props.content_hash, fingerprint(&value));
        }
    }
}
