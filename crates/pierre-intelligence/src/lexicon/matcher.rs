// ABOUTME: Compiled term matchers for lexicon lookups over lowercased wellness notes
// ABOUTME: Single words match on word boundaries, multi-word phrases match as substrings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ConfigError;
use regex::Regex;

#[derive(Debug, Clone)]
enum MatchKind {
    /// Word-boundary match so "dead" does not fire inside "deadlift"
    Word(Regex),
    /// Plain substring match for phrases
    Phrase,
}

/// A single lexicon term compiled for matching
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    kind: MatchKind,
}

impl TermMatcher {
    /// Compile a term, lowercasing it
    ///
    /// # Errors
    ///
    /// Returns an error if the term is blank or its word pattern cannot be compiled
    pub fn new(term: &str) -> Result<Self, ConfigError> {
        let term = normalize_text(term.trim());
        if term.is_empty() {
            return Err(ConfigError::InvalidLexicon(
                "lexicon terms must not be blank".to_owned(),
            ));
        }

        let kind = if term.contains(char::is_whitespace) {
            MatchKind::Phrase
        } else {
            let pattern = format!(r"\b{}\b", regex::escape(&term));
            let regex = Regex::new(&pattern)
                .map_err(|e| ConfigError::InvalidLexicon(format!("term '{term}': {e}")))?;
            MatchKind::Word(regex)
        };

        Ok(Self { term, kind })
    }

    /// The normalized term text
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Whether the term occurs in already-normalized text
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match &self.kind {
            MatchKind::Word(regex) => regex.is_match(text),
            MatchKind::Phrase => text.contains(self.term.as_str()),
        }
    }
}

/// An ordered set of compiled terms
#[derive(Debug, Clone, Default)]
pub struct TermSet {
    matchers: Vec<TermMatcher>,
}

impl TermSet {
    /// Compile every term in order
    ///
    /// # Errors
    ///
    /// Returns an error if any term fails to compile
    pub fn compile(terms: &[String]) -> Result<Self, ConfigError> {
        let matchers = terms
            .iter()
            .map(|term| TermMatcher::new(term))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { matchers })
    }

    /// Whether any term occurs in the text
    #[must_use]
    pub fn any_match(&self, text: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(text))
    }

    /// First term (in lexicon order) that occurs in the text
    #[must_use]
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.matchers
            .iter()
            .find(|m| m.is_match(text))
            .map(TermMatcher::term)
    }

    /// Every term that occurs in the text, in lexicon order
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.matchers
            .iter()
            .filter(move |m| m.is_match(text))
            .map(TermMatcher::term)
    }

    /// Number of compiled terms
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the set has no terms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

/// Lowercase text and fold typographic apostrophes so "can’t" matches "can't"
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_respects_word_boundaries() {
        let matcher = TermMatcher::new("dead").unwrap();
        assert!(matcher.is_match("legs are dead"));
        assert!(!matcher.is_match("new deadlift pr"));
    }

    #[test]
    fn test_phrase_uses_substring_match() {
        let matcher = TermMatcher::new("Lower Back").unwrap();
        assert_eq!(matcher.term(), "lower back");
        assert!(matcher.is_match("my lower back is sore"));
    }

    #[test]
    fn test_apostrophe_terms() {
        let matcher = TermMatcher::new("can't").unwrap();
        assert!(matcher.is_match(&normalize_text("I can\u{2019}t bend")));
    }

    #[test]
    fn test_blank_term_rejected() {
        assert!(TermMatcher::new("   ").is_err());
    }
}
