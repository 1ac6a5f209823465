// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Counts occurrences of a word in a blob of text.

use log::warn;
use regex::{Regex, RegexBuilder};

/// Differentiates between the ways a word can be matched in text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Only count the word when it stands on its own, bounded by
    /// non-word characters (or the ends of the text) on both sides.
    #[default]
    WholeWord,

    /// Count the word anywhere it appears, even inside other words.
    Substring,
}

impl MatchMode {
    /// Selects substring matching if `substring` is true, or whole-word
    /// matching otherwise.
    pub fn from_substring_flag(substring: bool) -> Self {
        if substring {
            MatchMode::Substring
        } else {
            MatchMode::WholeWord
        }
    }
}

/// Counts case-insensitive, non-overlapping occurrences of a single word.
///
/// The word is always matched literally: characters such as `.` or `*`
/// have no special meaning.
///
/// # Examples
///
/// ```
/// use redditwc::count::{MatchMode, OccurrenceCounter};
/// let counter = OccurrenceCounter::new("cat", MatchMode::WholeWord);
/// assert_eq!(counter.count("cat catalog Cat"), 2);
///
/// let counter = OccurrenceCounter::new("cat", MatchMode::Substring);
/// assert_eq!(counter.count("cat catalog Cat"), 3);
/// ```
#[derive(Clone, Debug)]
pub struct OccurrenceCounter {
    pattern: Option<Regex>,
}

impl OccurrenceCounter {
    /// Creates a counter for `word` using the given matching `mode`.
    ///
    /// An empty word never matches anything.
    pub fn new(word: &str, mode: MatchMode) -> Self {
        let pattern = if word.is_empty() {
            None
        } else {
            Self::compile(word, mode)
        };
        Self { pattern }
    }

    fn compile(word: &str, mode: MatchMode) -> Option<Regex> {
        let escaped = regex::escape(word);
        let pattern = match mode {
            MatchMode::WholeWord => format!(r"\b{escaped}\b"),
            MatchMode::Substring => escaped,
        };
        RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .inspect_err(|err| warn!("could not compile pattern for {word:?}: {err}"))
            .ok()
    }

    /// Number of times the word occurs in `text`.
    pub fn count(&self, text: &str) -> usize {
        match &self.pattern {
            Some(pattern) if !text.is_empty() => pattern.find_iter(text).count(),
            _ => 0,
        }
    }
}

/// Counts the occurrences of `word` in `text`.
///
/// This is a shortcut for building an [`OccurrenceCounter`] and using it
/// once. Prefer the counter when the same word is counted in many texts.
pub fn count_occurrences(text: &str, word: &str, mode: MatchMode) -> usize {
    OccurrenceCounter::new(word, mode).count(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_returns_zero_for_empty_text() {
        assert_eq!(count_occurrences("", "cat", MatchMode::WholeWord), 0);
        assert_eq!(count_occurrences("", "cat", MatchMode::Substring), 0);
    }

    #[test]
    fn it_returns_zero_for_an_empty_word() {
        assert_eq!(count_occurrences("cat", "", MatchMode::WholeWord), 0);
        assert_eq!(count_occurrences("cat", "", MatchMode::Substring), 0);
    }

    #[test]
    fn it_counts_whole_words() {
        assert_eq!(count_occurrences("cat catalog cat", "cat", MatchMode::WholeWord), 2);
    }

    #[test]
    fn it_counts_substrings() {
        assert_eq!(count_occurrences("cat catalog cat", "cat", MatchMode::Substring), 3);
    }

    #[test]
    fn it_counts_whole_words_by_default() {
        let mode = MatchMode::default();
        assert_eq!(count_occurrences("cat catalog cat", "cat", mode), 2);
    }

    #[test]
    fn it_ignores_case() {
        assert_eq!(count_occurrences("Cat CAT cat", "cat", MatchMode::WholeWord), 3);
        assert_eq!(count_occurrences("cat", "CAT", MatchMode::Substring), 1);
    }

    #[test]
    fn it_treats_metacharacters_literally() {
        assert_eq!(count_occurrences("a.b a.b", "a.b", MatchMode::WholeWord), 2);
        assert_eq!(count_occurrences("axb a.b", "a.b", MatchMode::WholeWord), 1);
        assert_eq!(count_occurrences("1+1=2 (1+1)", "1+1", MatchMode::Substring), 2);
    }

    #[test]
    fn it_treats_punctuation_as_a_word_boundary() {
        let text = "cat, cat. (cat) cat's cats";
        assert_eq!(count_occurrences(text, "cat", MatchMode::WholeWord), 4);
    }

    #[test]
    fn it_counts_across_lines() {
        let text = "Cat\nthe cat\n\ncat";
        assert_eq!(count_occurrences(text, "cat", MatchMode::WholeWord), 3);
    }

    #[test]
    fn it_does_not_count_overlapping_matches() {
        assert_eq!(count_occurrences("aaaa", "aa", MatchMode::Substring), 2);
    }

    #[test]
    fn it_can_be_reused() {
        let counter = OccurrenceCounter::new("rust", MatchMode::WholeWord);
        assert_eq!(counter.count("Rust is rusty"), 1);
        assert_eq!(counter.count("rust, rust, rust"), 3);
        assert_eq!(counter.count(""), 0);
    }

    #[test]
    fn it_chooses_a_mode_from_a_flag() {
        assert_eq!(MatchMode::from_substring_flag(true), MatchMode::Substring);
        assert_eq!(MatchMode::from_substring_flag(false), MatchMode::WholeWord);
    }
}
