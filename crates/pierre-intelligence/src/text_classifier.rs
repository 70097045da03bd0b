// ABOUTME: Rule-based wellness-note classifier that detects potential injuries from free text
// ABOUTME: Filters gym hyperbole and DOMS, then resolves body part, severity, injury type and confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Wellness Note Classifier
//!
//! `analyze` runs an ordered pipeline where each early stage can short-circuit to
//! a "no injury" result:
//!
//! 1. blank notes
//! 2. hyperbolic gym talk ("killed it", "legs are dead")
//! 3. normal training soreness (DOMS, "good sore")
//! 4. injury indicator scan (pain words, discomfort tiers, injury names, functional
//!    limitation and acute onset clues)
//!
//! Once an indicator fires the note is treated as a potential injury and the
//! remaining stages enrich it: body part, severity, injury type, confidence and a
//! short description. The classifier is deterministic and never fails.

use crate::config::{ClassifierConfig, ConfigError};
use crate::lexicon::{normalize_text, CompiledLexicon, Lexicon};
use pierre_core::models::{BodyPart, Severity};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of analyzing one wellness note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Whether the note suggests a potential injury
    pub injury_detected: bool,
    /// Confidence in the detection, 0.0 when nothing was detected
    pub confidence: f64,
    /// Resolved body part, if any term matched
    pub body_part: Option<BodyPart>,
    /// Severity tier, always present when an injury is detected
    pub severity: Option<Severity>,
    /// Canonical injury type identifier (e.g. `herniated_disc`)
    pub injury_type: Option<String>,
    /// Human readable summary
    pub description: String,
    /// Indicator terms that fired, in scan order
    pub matched_keywords: Vec<String>,
}

impl DetectionResult {
    fn no_injury(description: &str) -> Self {
        Self {
            injury_detected: false,
            confidence: 0.0,
            body_part: None,
            severity: None,
            injury_type: None,
            description: description.to_owned(),
            matched_keywords: Vec::new(),
        }
    }
}

/// Which severity-related lexicon categories fired in a note
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeveritySignals {
    /// A severe discomfort term fired
    pub severe: bool,
    /// A moderate discomfort term fired
    pub moderate: bool,
    /// A mild discomfort term fired
    pub mild: bool,
    /// A functional limitation clue fired
    pub functional_limitation: bool,
    /// An acute onset clue fired
    pub acute_onset: bool,
    /// A worsening modifier fired
    pub worsening: bool,
    /// A persistence modifier fired
    pub persistent: bool,
    /// An objective sign fired
    pub objective_signs: bool,
}

/// One entry of the ordered severity decision list
#[derive(Debug, Clone, Copy)]
pub struct SeverityRule {
    /// Short identifier used in debug logs
    pub name: &'static str,
    /// Severity assigned when the predicate holds
    pub severity: Severity,
    /// Predicate over the signals found in the note
    pub applies: fn(&SeveritySignals) -> bool,
}

const fn severe_keyword(s: &SeveritySignals) -> bool {
    s.severe
}

const fn limitation_with_escalator(s: &SeveritySignals) -> bool {
    s.functional_limitation && (s.severe || s.moderate || s.objective_signs || s.acute_onset)
}

const fn acute_and_severe(s: &SeveritySignals) -> bool {
    s.acute_onset && s.severe
}

const fn objective_and_severe(s: &SeveritySignals) -> bool {
    s.objective_signs && s.severe
}

const fn moderate_keyword(s: &SeveritySignals) -> bool {
    s.moderate
}

const fn mild_or_limitation_trending(s: &SeveritySignals) -> bool {
    (s.mild || s.functional_limitation) && (s.worsening || s.persistent)
}

const fn any_remaining_signal(s: &SeveritySignals) -> bool {
    s.mild
        || s.functional_limitation
        || s.acute_onset
        || s.worsening
        || s.persistent
        || s.objective_signs
}

/// Severity rules in priority order; the first rule that applies wins
pub const SEVERITY_RULES: &[SeverityRule] = &[
    SeverityRule {
        name: "severe_keyword",
        severity: Severity::Severe,
        applies: severe_keyword,
    },
    SeverityRule {
        name: "limitation_with_escalator",
        severity: Severity::Severe,
        applies: limitation_with_escalator,
    },
    SeverityRule {
        name: "acute_and_severe",
        severity: Severity::Severe,
        applies: acute_and_severe,
    },
    SeverityRule {
        name: "objective_and_severe",
        severity: Severity::Severe,
        applies: objective_and_severe,
    },
    SeverityRule {
        name: "moderate_keyword",
        severity: Severity::Moderate,
        applies: moderate_keyword,
    },
    SeverityRule {
        name: "mild_or_limitation_trending",
        severity: Severity::Moderate,
        applies: mild_or_limitation_trending,
    },
    SeverityRule {
        name: "any_remaining_signal",
        severity: Severity::Mild,
        applies: any_remaining_signal,
    },
];

/// Classify severity from fired signals, defaulting to mild
#[must_use]
pub fn classify_severity(signals: &SeveritySignals) -> Severity {
    SEVERITY_RULES
        .iter()
        .find(|rule| (rule.applies)(signals))
        .map_or(Severity::Mild, |rule| {
            debug!(rule = rule.name, severity = %rule.severity, "Severity rule matched");
            rule.severity
        })
}

/// Wellness-note injury classifier
///
/// Constructed once with an injected lexicon; `analyze` takes `&self` and is safe
/// to share across threads.
#[derive(Debug, Clone)]
pub struct TextClassifier {
    lexicon: Lexicon,
    compiled: CompiledLexicon,
    config: ClassifierConfig,
}

impl TextClassifier {
    /// Build a classifier from a lexicon and scoring weights
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon fails validation or a term fails to compile
    pub fn new(lexicon: Lexicon, config: ClassifierConfig) -> Result<Self, ConfigError> {
        lexicon.validate()?;
        let compiled = lexicon.compile()?;
        Ok(Self {
            lexicon,
            compiled,
            config,
        })
    }

    /// Classifier over the built-in lexicon with default weights
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in lexicon fails to compile
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(Lexicon::default(), ClassifierConfig::default())
    }

    /// The lexicon this classifier was built from
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyze a wellness note
    #[must_use]
    pub fn analyze(&self, notes: &str) -> DetectionResult {
        if notes.trim().is_empty() {
            return DetectionResult::no_injury("No notes provided");
        }

        let text = normalize_text(notes);
        let lex = &self.compiled;

        if let Some(phrase) = lex.false_positives.first_match(&text) {
            debug!(phrase, note_len = notes.len(), "Hyperbolic phrase suppressed detection");
            return DetectionResult::no_injury("Hyperbolic training language, not an injury");
        }

        if let Some(phrase) = lex.normal_training.first_match(&text) {
            debug!(phrase, note_len = notes.len(), "Normal training soreness suppressed detection");
            return DetectionResult::no_injury("Normal training soreness");
        }

        let matched_keywords = self.scan_indicators(&text);
        if matched_keywords.is_empty() {
            debug!(note_len = notes.len(), "No injury indicators in note");
            return DetectionResult::no_injury("No injury indicators detected");
        }

        let body_part = self.extract_body_part(&text);
        let severity = classify_severity(&self.signals(&text));
        let injury_type = self.identify_injury_type(&text);
        let confidence = self.confidence(body_part.is_some(), severity, matched_keywords.len());
        let description = describe(severity, body_part, injury_type.as_deref());

        debug!(
            keywords = ?matched_keywords,
            body_part = ?body_part,
            severity = %severity,
            confidence,
            "Potential injury detected"
        );

        DetectionResult {
            injury_detected: true,
            confidence,
            body_part,
            severity: Some(severity),
            injury_type,
            description,
            matched_keywords,
        }
    }

    fn scan_indicators(&self, text: &str) -> Vec<String> {
        let lex = &self.compiled;
        let categories = [
            &lex.pain_descriptors,
            &lex.mild,
            &lex.moderate,
            &lex.severe,
        ]
        .into_iter()
        .chain(lex.injury_types.iter())
        .chain([&lex.functional_limitation, &lex.acute_onset]);

        let mut matched: Vec<String> = Vec::new();
        for set in categories {
            for term in set.matches(text) {
                if !matched.iter().any(|m| m == term) {
                    matched.push(term.to_owned());
                }
            }
        }
        matched
    }

    /// Specific keys beat generic alias keys, then the longest term wins, then the longer key
    ///
    /// Generic "back" only resolves to `lower_back` when nothing more specific is
    /// named, so "knee pain keeps coming back" stays a knee note.
    fn extract_body_part(&self, text: &str) -> Option<BodyPart> {
        let mut best: Option<((bool, usize, usize), &str)> = None;
        for (key, set) in &self.compiled.body_parts {
            let specific = !self.lexicon.body_part_aliases.contains_key(key);
            for term in set.matches(text) {
                let rank = (specific, term.len(), key.len());
                if best.map_or(true, |(best_rank, _)| rank > best_rank) {
                    best = Some((rank, key.as_str()));
                }
            }
        }
        best.and_then(|(_, key)| self.lexicon.resolve_body_part(key))
    }

    fn signals(&self, text: &str) -> SeveritySignals {
        let lex = &self.compiled;
        SeveritySignals {
            severe: lex.severe.any_match(text),
            moderate: lex.moderate.any_match(text),
            mild: lex.mild.any_match(text),
            functional_limitation: lex.functional_limitation.any_match(text),
            acute_onset: lex.acute_onset.any_match(text),
            worsening: lex.worsening.any_match(text),
            persistent: lex.persistent.any_match(text),
            objective_signs: lex.objective_signs.any_match(text),
        }
    }

    fn identify_injury_type(&self, text: &str) -> Option<String> {
        self.compiled
            .injury_types
            .iter()
            .find_map(|set| set.first_match(text))
            .map(|term| self.lexicon.canonical_injury_type(term))
    }

    fn confidence(&self, has_body_part: bool, severity: Severity, keyword_count: usize) -> f64 {
        let c = &self.config;
        let body_part_bonus = if has_body_part { c.body_part_bonus } else { 0.0 };
        let keyword_bonus = (c.per_keyword_bonus * keyword_count as f64).min(c.max_keyword_bonus);
        (c.base_indicator_confidence + body_part_bonus + c.severity_bonus(severity) + keyword_bonus)
            .clamp(0.0, 1.0)
    }
}

fn describe(severity: Severity, body_part: Option<BodyPart>, injury_type: Option<&str>) -> String {
    let parts: Vec<String> = [
        Some(severity.as_str().to_owned()),
        body_part.map(BodyPart::display_name),
        injury_type.map(str::to_owned),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        "Potential injury detected".to_owned()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_rule_priority() {
        let limitation_and_moderate = SeveritySignals {
            functional_limitation: true,
            moderate: true,
            ..SeveritySignals::default()
        };
        assert_eq!(classify_severity(&limitation_and_moderate), Severity::Severe);

        let mild_and_persistent = SeveritySignals {
            mild: true,
            persistent: true,
            ..SeveritySignals::default()
        };
        assert_eq!(classify_severity(&mild_and_persistent), Severity::Moderate);

        let acute_only = SeveritySignals {
            acute_onset: true,
            ..SeveritySignals::default()
        };
        assert_eq!(classify_severity(&acute_only), Severity::Mild);
    }

    #[test]
    fn test_no_signals_default_to_mild() {
        assert_eq!(classify_severity(&SeveritySignals::default()), Severity::Mild);
    }

    #[test]
    fn test_description_omits_missing_parts() {
        assert_eq!(
            describe(Severity::Moderate, Some(BodyPart::LowerBack), None),
            "moderate lower back"
        );
        assert_eq!(
            describe(Severity::Severe, None, Some("sprain")),
            "severe sprain"
        );
    }
}
