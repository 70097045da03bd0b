// ABOUTME: Categorized injury term dictionary consumed by the wellness-note classifier
// ABOUTME: Loads from JSON or the built-in default, validates body-part keys and compiles matchers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Injury Lexicon
//!
//! The lexicon is a read-only document injected into the classifier at
//! construction. It is plain data so tests and deployments can substitute their
//! own dictionaries; the built-in one is returned by [`Lexicon::default`].
//!
//! Categories:
//! - `false_positives`: hyperbolic gym talk ("killed it", "legs are dead")
//! - `normal_training`: DOMS and other expected soreness
//! - `pain_descriptors` and tiered `discomfort` terms
//! - `injury_types`: ordered categories of injury names plus a canonicalization table
//! - `context_clues`: functional limitation, acute onset, worsening, persistence, objective signs
//! - `body_parts`: ordered entries with primary terms, synonyms and regional qualifiers,
//!   plus `body_part_aliases` normalizing generic keys ("back" -> "lower_back")

mod default;
mod matcher;

pub use matcher::{normalize_text, TermMatcher, TermSet};

use crate::config::ConfigError;
use pierre_core::models::BodyPart;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Discomfort terms grouped by the severity they suggest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscomfortTiers {
    /// Terms suggesting a mild problem
    #[serde(default)]
    pub mild: Vec<String>,
    /// Terms suggesting a moderate problem
    #[serde(default)]
    pub moderate: Vec<String>,
    /// Terms suggesting a severe problem
    #[serde(default)]
    pub severe: Vec<String>,
}

/// Contextual phrases that modify how an injury is read
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextClues {
    /// Loss of function ("can't bend", "limping")
    #[serde(default)]
    pub functional_limitation: Vec<String>,
    /// Sudden onset ("popped", "tweaked")
    #[serde(default)]
    pub acute_onset: Vec<String>,
    /// Trajectory is getting worse
    #[serde(default)]
    pub worsening: Vec<String>,
    /// Symptoms lasting or recurring
    #[serde(default)]
    pub persistent: Vec<String>,
    /// Visible or measurable signs (swelling, bruising, numbness)
    #[serde(default)]
    pub objective_signs: Vec<String>,
}

/// An ordered category of injury-type names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjuryTypeCategory {
    /// Category name (e.g. "muscle", "spine")
    pub category: String,
    /// Terms in priority order
    pub terms: Vec<String>,
}

/// Terms that resolve to one body-part key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPartEntry {
    /// Lexicon key, a `BodyPart` name or an alias of one
    pub key: String,
    /// Primary anatomical terms
    pub primary: Vec<String>,
    /// Colloquial synonyms
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Regional qualifiers ("back of my thigh")
    #[serde(default)]
    pub regions: Vec<String>,
}

impl BodyPartEntry {
    /// All terms for this entry
    pub fn terms(&self) -> impl Iterator<Item = &String> {
        self.primary
            .iter()
            .chain(self.synonyms.iter())
            .chain(self.regions.iter())
    }
}

/// Categorized injury term dictionary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Hyperbolic phrases that suppress detection
    #[serde(default)]
    pub false_positives: Vec<String>,
    /// Normal-training soreness phrases that suppress detection
    #[serde(default)]
    pub normal_training: Vec<String>,
    /// Generic pain words
    #[serde(default)]
    pub pain_descriptors: Vec<String>,
    /// Severity-tiered discomfort words
    #[serde(default)]
    pub discomfort: DiscomfortTiers,
    /// Injury-type names, first match wins
    #[serde(default)]
    pub injury_types: Vec<InjuryTypeCategory>,
    /// Injury-type term to canonical identifier
    #[serde(default)]
    pub injury_type_canonical: BTreeMap<String, String>,
    /// Context clues and severity modifiers
    #[serde(default)]
    pub context_clues: ContextClues,
    /// Body-part vocabulary
    #[serde(default)]
    pub body_parts: Vec<BodyPartEntry>,
    /// Normalization of generic body-part keys
    #[serde(default)]
    pub body_part_aliases: BTreeMap<String, String>,
}

impl Lexicon {
    /// Parse a lexicon from a JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the lexicon fails validation
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let lexicon: Self = serde_json::from_str(json)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Load a lexicon from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Validate that the lexicon can drive detection
    ///
    /// # Errors
    ///
    /// Returns an error if no indicator category has terms, or a body-part key does
    /// not resolve to a known body part after alias normalization
    pub fn validate(&self) -> Result<(), ConfigError> {
        let indicator_terms = self.pain_descriptors.len()
            + self.discomfort.mild.len()
            + self.discomfort.moderate.len()
            + self.discomfort.severe.len()
            + self
                .injury_types
                .iter()
                .map(|c| c.terms.len())
                .sum::<usize>()
            + self.context_clues.functional_limitation.len()
            + self.context_clues.acute_onset.len();
        if indicator_terms == 0 {
            return Err(ConfigError::InvalidLexicon(
                "lexicon defines no injury indicator terms".to_owned(),
            ));
        }

        for entry in &self.body_parts {
            if self.resolve_body_part(&entry.key).is_none() {
                return Err(ConfigError::InvalidLexicon(format!(
                    "body part key '{}' does not name a known body part",
                    entry.key
                )));
            }
            if entry.terms().next().is_none() {
                return Err(ConfigError::InvalidLexicon(format!(
                    "body part key '{}' has no terms",
                    entry.key
                )));
            }
        }

        Ok(())
    }

    /// Resolve a lexicon body-part key through the alias table
    #[must_use]
    pub fn resolve_body_part(&self, key: &str) -> Option<BodyPart> {
        let canonical = self
            .body_part_aliases
            .get(key)
            .map_or(key, String::as_str);
        BodyPart::from_str(canonical).ok()
    }

    /// Canonical identifier for an injury-type term
    ///
    /// Terms missing from the canonicalization table fall back to a `snake_case`
    /// form of the term itself.
    #[must_use]
    pub fn canonical_injury_type(&self, term: &str) -> String {
        self.injury_type_canonical.get(term).cloned().unwrap_or_else(|| {
            term.chars()
                .map(|c| if c.is_alphanumeric() { c } else { '_' })
                .collect()
        })
    }

    /// Compile every category into matchers
    ///
    /// # Errors
    ///
    /// Returns an error if any term fails to compile
    pub fn compile(&self) -> Result<CompiledLexicon, ConfigError> {
        let clues = &self.context_clues;
        Ok(CompiledLexicon {
            false_positives: TermSet::compile(&self.false_positives)?,
            normal_training: TermSet::compile(&self.normal_training)?,
            pain_descriptors: TermSet::compile(&self.pain_descriptors)?,
            mild: TermSet::compile(&self.discomfort.mild)?,
            moderate: TermSet::compile(&self.discomfort.moderate)?,
            severe: TermSet::compile(&self.discomfort.severe)?,
            injury_types: self
                .injury_types
                .iter()
                .map(|category| TermSet::compile(&category.terms))
                .collect::<Result<_, _>>()?,
            functional_limitation: TermSet::compile(&clues.functional_limitation)?,
            acute_onset: TermSet::compile(&clues.acute_onset)?,
            worsening: TermSet::compile(&clues.worsening)?,
            persistent: TermSet::compile(&clues.persistent)?,
            objective_signs: TermSet::compile(&clues.objective_signs)?,
            body_parts: self
                .body_parts
                .iter()
                .map(|entry| {
                    let terms: Vec<String> = entry.terms().cloned().collect();
                    TermSet::compile(&terms).map(|set| (entry.key.clone(), set))
                })
                .collect::<Result<_, _>>()?,
        })
    }
}

/// A lexicon with every category compiled into matchers
#[derive(Debug, Clone)]
pub struct CompiledLexicon {
    /// Hyperbolic phrases
    pub false_positives: TermSet,
    /// Normal-training phrases
    pub normal_training: TermSet,
    /// Pain words
    pub pain_descriptors: TermSet,
    /// Mild discomfort tier
    pub mild: TermSet,
    /// Moderate discomfort tier
    pub moderate: TermSet,
    /// Severe discomfort tier
    pub severe: TermSet,
    /// Injury-type categories in priority order
    pub injury_types: Vec<TermSet>,
    /// Functional limitation clues
    pub functional_limitation: TermSet,
    /// Acute onset clues
    pub acute_onset: TermSet,
    /// Worsening modifiers
    pub worsening: TermSet,
    /// Persistence modifiers
    pub persistent: TermSet,
    /// Objective sign modifiers
    pub objective_signs: TermSet,
    /// Body-part keys with their compiled terms, in lexicon order
    pub body_parts: Vec<(String, TermSet)>,
}
