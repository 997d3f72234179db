//! Retrieval context for external prompt builders
//!
//! Collects the lexicon entries whose lemmas appear verbatim in a text so
//! a downstream model can be shown the relevant dictionary lines.

use serde::Serialize;
use std::collections::HashSet;

use crate::error::Result;
use crate::lexicon::{LexicalEntry, Lexicon};
use crate::pipeline::{tokenize, TokenKind};

/// Upper bound on entries returned when the caller gives no limit
pub const DEFAULT_CONTEXT_LIMIT: usize = 600;

/// Lower-cased word tokens that contain a letter, unique, in order of
/// first appearance
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| t.kind == TokenKind::Word && t.text.chars().any(char::is_alphabetic))
        .map(|t| t.text.to_lowercase())
        .filter(|k| seen.insert(k.clone()))
        .collect()
}

/// Exact-match entries for every keyword of `text`
///
/// Each keyword contributes all of its homonyms. Entries repeating an
/// already collected `(reconstructed_base, grammatical_category)` pair are
/// dropped, and the result is cut at `limit`.
pub fn relevant_entries<'a>(
    lexicon: &'a Lexicon,
    text: &str,
    limit: usize,
) -> Vec<&'a LexicalEntry> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut hits = Vec::new();

    'keywords: for keyword in extract_keywords(text) {
        for entry in lexicon.entries(&keyword) {
            if hits.len() >= limit {
                break 'keywords;
            }
            if seen.insert((entry.reconstructed_base(), entry.grammatical_category())) {
                hits.push(entry);
            }
        }
    }

    log::debug!("Collected {} context entries (limit {limit})", hits.len());
    hits
}

/// One dictionary line in the payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextHit {
    pub pl: String,
    pub sl: String,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<&LexicalEntry> for ContextHit {
    fn from(entry: &LexicalEntry) -> Self {
        Self {
            pl: entry.source_lemma().to_string(),
            sl: entry.reconstructed_base().to_string(),
            tag: entry.grammatical_category().to_string(),
            note: entry.context_note().map(str::to_string),
        }
    }
}

/// Text plus its dictionary hits, ready for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextPayload {
    pub text: String,
    pub dictionary_hits: Vec<ContextHit>,
}

impl ContextPayload {
    pub fn build(lexicon: &Lexicon, text: &str, limit: usize) -> Self {
        Self {
            text: text.to_string(),
            dictionary_hits: relevant_entries(lexicon, text, limit)
                .into_iter()
                .map(ContextHit::from)
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
