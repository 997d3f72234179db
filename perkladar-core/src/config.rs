//! Configuration structures and validation
//!
//! This module defines the TOML schema for translator configuration. Every
//! constant the engine relies on (markers, palatalization reflexes,
//! prepositions, overrides) is data so that a configuration file can be
//! validated on its own.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Root translator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub lemma: LemmaSettings,
    #[serde(default)]
    pub markers: Markers,
    #[serde(default)]
    pub palatalization: Palatalization,
    #[serde(default)]
    pub prepositions: Prepositions,
    /// Irregular forms emitted verbatim, keyed by normalized surface form
    #[serde(default = "default_overrides")]
    pub overrides: BTreeMap<String, String>,
    #[serde(default)]
    pub case_style: CaseStyleSettings,
    #[serde(default)]
    pub reorder: ReorderSettings,
}

/// Configuration metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Prefix lemmatizer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LemmaSettings {
    /// Number of leading characters compared by the fuzzy matcher
    #[serde(default = "default_prefix_len")]
    pub fuzzy_prefix_len: usize,
    /// Trailing characters stripped from tokens before lookup
    #[serde(default = "default_strip_chars")]
    pub strip_chars: Vec<char>,
}

impl Default for LemmaSettings {
    fn default() -> Self {
        Self {
            fuzzy_prefix_len: default_prefix_len(),
            strip_chars: default_strip_chars(),
        }
    }
}

/// Special characters and literals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Markers {
    /// Reduced vowels stripped from a base before suffixation
    #[serde(default = "default_yers")]
    pub yers: Vec<char>,
    /// Suffix-initial vowel that triggers palatalization
    #[serde(default = "default_front_vowel")]
    pub front_vowel: char,
    /// Emitted in place of words missing from the lexicon
    #[serde(default = "default_unknown_word")]
    pub unknown_word: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            yers: default_yers(),
            front_vowel: default_front_vowel(),
            unknown_word: default_unknown_word(),
        }
    }
}

/// Palatalization reflexes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palatalization {
    #[serde(default = "default_reflexes")]
    pub rules: Vec<Reflex>,
}

impl Default for Palatalization {
    fn default() -> Self {
        Self {
            rules: default_reflexes(),
        }
    }
}

/// A single consonant → reflex rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reflex {
    pub from: char,
    pub to: String,
}

/// Case-forcing prepositions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prepositions {
    /// Normalized forms that force the locative on the next word
    #[serde(default = "default_locative_prepositions")]
    pub locative: Vec<String>,
    /// Literal emitted in their place
    #[serde(default = "default_locative_literal")]
    pub literal: String,
}

impl Default for Prepositions {
    fn default() -> Self {
        Self {
            locative: default_locative_prepositions(),
            literal: default_locative_literal(),
        }
    }
}

/// Letter-case restoration settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseStyleSettings {
    /// Map case character by character when lengths match
    #[serde(default)]
    pub mixed_exact: bool,
}

/// Adjective placement policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderPolicy {
    /// Swap adjacent noun-adjective pairs in one pass
    #[default]
    Swap,
    /// Hold a noun back while the adjectives after it are emitted
    Buffer,
}

/// Reorder settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReorderSettings {
    #[serde(default)]
    pub policy: ReorderPolicy,
}

fn default_prefix_len() -> usize {
    4
}

fn default_strip_chars() -> Vec<char> {
    vec![',', '.', '?', '!', ' ']
}

fn default_yers() -> Vec<char> {
    vec!['ъ', 'ь']
}

fn default_front_vowel() -> char {
    'ě'
}

fn default_unknown_word() -> String {
    "(ne najdeno slova)".to_string()
}

fn default_reflexes() -> Vec<Reflex> {
    vec![
        Reflex {
            from: 'g',
            to: "dz".to_string(),
        },
        Reflex {
            from: 'k',
            to: "c".to_string(),
        },
        Reflex {
            from: 'h',
            to: "z".to_string(),
        },
    ]
}

fn default_locative_prepositions() -> Vec<String> {
    vec!["w".to_string(), "v".to_string(), "we".to_string()]
}

fn default_locative_literal() -> String {
    "vu".to_string()
}

fn default_overrides() -> BTreeMap<String, String> {
    [("jestem", "jesmь"), ("jesteś", "jesi"), ("jest", "jestь")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

static EMBEDDED: OnceLock<TranslatorConfig> = OnceLock::new();

impl TranslatorConfig {
    /// The embedded Proto-Slavic configuration
    pub fn embedded() -> &'static TranslatorConfig {
        EMBEDDED.get_or_init(|| {
            match Self::from_toml_str(include_str!("../configs/proto_slavic.toml")) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Failed to load embedded configuration, using defaults: {e}");
                    Self::default()
                }
            }
        })
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: TranslatorConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(Error::Configuration("metadata.code must not be empty".into()));
        }

        if !(3..=4).contains(&self.lemma.fuzzy_prefix_len) {
            return Err(Error::Configuration(format!(
                "lemma.fuzzy_prefix_len must be 3 or 4, got {}",
                self.lemma.fuzzy_prefix_len
            )));
        }

        if self.markers.unknown_word.is_empty() {
            return Err(Error::Configuration(
                "markers.unknown_word must not be empty".into(),
            ));
        }

        for reflex in &self.palatalization.rules {
            if reflex.to.is_empty() {
                return Err(Error::Configuration(format!(
                    "palatalization reflex for '{}' is empty",
                    reflex.from
                )));
            }
        }

        if self.prepositions.literal.trim().is_empty() && !self.prepositions.locative.is_empty() {
            return Err(Error::Configuration(
                "prepositions.literal must not be empty".into(),
            ));
        }

        if let Some(key) = self.overrides.keys().find(|k| k.trim().is_empty()) {
            return Err(Error::Configuration(format!(
                "override key '{key}' is empty"
            )));
        }

        Ok(())
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            metadata: Metadata {
                code: "sla-x-proto".to_string(),
                name: "Proto-Slavic".to_string(),
            },
            lemma: LemmaSettings::default(),
            markers: Markers::default(),
            palatalization: Palatalization::default(),
            prepositions: Prepositions::default(),
            overrides: default_overrides(),
            case_style: CaseStyleSettings::default(),
            reorder: ReorderSettings::default(),
        }
    }
}
