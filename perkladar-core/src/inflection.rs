//! Inflection pattern table
//!
//! Maps a grammatical category key to `(number, case) -> suffix`. Lookups
//! are total: anything absent resolves to the empty suffix so unknown
//! combinations degrade to the bare form.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::Read;

use crate::error::{DataFormatError, Result};
use crate::grammar::{Case, Number};
use crate::lexicon::Lexicon;

/// Accepted shapes of one category's pattern
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PatternShape {
    /// number -> case -> suffix
    ByNumber(BTreeMap<String, BTreeMap<String, String>>),
    /// case -> suffix, singular implied
    Flat(BTreeMap<String, String>),
}

/// A category used in the lexicon with no pattern in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMismatch {
    pub category: String,
    /// First lemma carrying the category
    pub lemma: String,
}

/// Category -> (number, case) -> suffix
#[derive(Debug, Clone, Default)]
pub struct InflectionTable {
    patterns: HashMap<String, HashMap<(Number, Case), String>>,
    diagnostics: Vec<DataFormatError>,
}

impl InflectionTable {
    /// Empty table; every lookup yields ""
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a single suffix
    pub fn with_suffix(
        mut self,
        category: impl Into<String>,
        number: Number,
        case: Case,
        suffix: impl Into<String>,
    ) -> Self {
        self.insert(category.into(), number, case, suffix.into());
        self
    }

    fn insert(&mut self, category: String, number: Number, case: Case, suffix: String) {
        self.patterns
            .entry(category)
            .or_default()
            .insert((number, case), suffix);
    }

    /// Parse a JSON object keyed by category
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Read a JSON object keyed by category
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Build from an untyped JSON object
    ///
    /// Categories with an unusable shape and cells with unknown number or
    /// case names are skipped and recorded as diagnostics.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(categories) = value else {
            return Err(DataFormatError::UnexpectedShape {
                expected: "a JSON object keyed by grammatical category",
            }
            .into());
        };

        let mut table = Self::new();
        for (category, pattern) in categories {
            match serde_json::from_value::<PatternShape>(pattern) {
                Ok(PatternShape::ByNumber(numbers)) => {
                    for (number_key, cases) in numbers {
                        let Some(number) =
                            table.parse_key::<Number>(&category, "number", &number_key)
                        else {
                            continue;
                        };
                        table.insert_cases(&category, number, cases);
                    }
                }
                Ok(PatternShape::Flat(cases)) => {
                    table.insert_cases(&category, Number::Singular, cases);
                }
                Err(_) => table.skip(DataFormatError::InvalidPattern {
                    category: category.clone(),
                    reason: "expected number -> case -> suffix or case -> suffix".to_string(),
                }),
            }
            // Categories whose every cell was rejected still count as known
            table.patterns.entry(category).or_default();
        }

        log::debug!(
            "Loaded inflection patterns for {} categories ({} problems)",
            table.patterns.len(),
            table.diagnostics.len()
        );
        Ok(table)
    }

    fn insert_cases(&mut self, category: &str, number: Number, cases: BTreeMap<String, String>) {
        for (case_key, suffix) in cases {
            if let Some(case) = self.parse_key::<Case>(category, "case", &case_key) {
                self.insert(category.to_string(), number, case, suffix);
            }
        }
    }

    fn parse_key<T: std::str::FromStr>(
        &mut self,
        category: &str,
        kind: &'static str,
        key: &str,
    ) -> Option<T> {
        match key.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.skip(DataFormatError::UnknownKey {
                    category: category.to_string(),
                    kind,
                    key: key.to_string(),
                });
                None
            }
        }
    }

    fn skip(&mut self, error: DataFormatError) {
        log::warn!("Skipping inflection data: {error}");
        self.diagnostics.push(error);
    }

    /// Suffix for a category in the given number and case, or "" when absent
    pub fn suffix_for(&self, category: &str, number: Number, case: Case) -> &str {
        self.patterns
            .get(category)
            .and_then(|cells| cells.get(&(number, case)))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.patterns.contains_key(category)
    }

    /// Known categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.patterns.keys().map(String::as_str).collect();
        categories.sort_unstable();
        categories
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Problems found while loading
    pub fn diagnostics(&self) -> &[DataFormatError] {
        &self.diagnostics
    }

    /// Lexicon categories with no pattern, in lexicon order
    ///
    /// Entries without a category are uninflected and never reported.
    pub fn missing_categories(&self, lexicon: &Lexicon) -> Vec<CategoryMismatch> {
        let mut seen = HashSet::new();
        lexicon
            .iter()
            .filter(|entry| !entry.grammatical_category().is_empty())
            .filter(|entry| !self.has_category(entry.grammatical_category()))
            .filter(|entry| seen.insert(entry.grammatical_category()))
            .map(|entry| CategoryMismatch {
                category: entry.grammatical_category().to_string(),
                lemma: entry.source_lemma().to_string(),
            })
            .collect()
    }
}
