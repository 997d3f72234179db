//! Sentence pipeline
//!
//! Drives a token stream through case forcing, overrides, lemma
//! resolution and reconstruction, then reorders and joins the result:
//!
//! ```text
//! SCAN -> (PREPOSITION | WORD | PUNCTUATION)* -> REORDER -> JOIN
//! ```
//!
//! Nothing here fails. Unknown words become the configured marker, styled
//! like the token they replace.

pub mod join;
pub mod reorder;
pub mod tokenizer;

pub use join::join;
pub use reorder::reorder;
pub use tokenizer::{tokenize, Token, TokenKind};

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::case_style::CaseStyleCodec;
use crate::config::{ReorderPolicy, TranslatorConfig};
use crate::grammar::{Case, Number};
use crate::inflection::InflectionTable;
use crate::lexicon::Lexicon;
use crate::reconstructor::WordReconstructor;
use crate::resolver::{LemmaResolver, Resolution};

/// What produced an output token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Case-forcing preposition replaced by its literal
    Preposition,
    /// Irregular form from the override table
    Override,
    /// Exact lexicon match
    Exact,
    /// Prefix match
    Fuzzy,
    /// Not in the lexicon; the unknown-word marker was emitted
    Unknown,
    Punctuation,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Preposition => "preposition",
            Outcome::Override => "override",
            Outcome::Exact => "exact",
            Outcome::Fuzzy => "fuzzy",
            Outcome::Unknown => "unknown",
            Outcome::Punctuation => "punctuation",
        }
    }
}

/// One token after resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotated {
    /// Surface token as it appeared in the input
    pub source: String,
    /// Styled output form
    pub output: String,
    pub outcome: Outcome,
    /// Grammatical category of the resolved entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Case the form was built for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<Case>,
}

impl Annotated {
    pub fn punctuation(mark: &str) -> Self {
        Self {
            source: mark.to_string(),
            output: mark.to_string(),
            outcome: Outcome::Punctuation,
            category: None,
            case: None,
        }
    }

    pub fn is_punctuation(&self) -> bool {
        self.outcome == Outcome::Punctuation
    }

    pub fn is_noun(&self) -> bool {
        self.category_contains("noun")
    }

    pub fn is_adjective(&self) -> bool {
        self.category_contains("adjective")
    }

    fn category_contains(&self, needle: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|category| category.contains(needle))
    }
}

/// Borrowed morphology components used by the pipeline
#[derive(Debug, Clone, Copy)]
pub struct Morphology<'a> {
    pub lexicon: &'a Lexicon,
    pub table: &'a InflectionTable,
    pub resolver: &'a LemmaResolver,
    pub reconstructor: &'a WordReconstructor,
}

/// Sentence-level rules: prepositions, overrides, markers, styling, order
#[derive(Debug, Clone)]
pub struct SentencePipeline {
    locative_prepositions: HashSet<String>,
    preposition_literal: String,
    overrides: HashMap<String, String>,
    unknown_word: String,
    codec: CaseStyleCodec,
    policy: ReorderPolicy,
}

impl SentencePipeline {
    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self {
            locative_prepositions: config
                .prepositions
                .locative
                .iter()
                .map(|p| p.trim().to_lowercase())
                .collect(),
            preposition_literal: config.prepositions.literal.clone(),
            overrides: config
                .overrides
                .iter()
                .map(|(k, v)| (k.trim().to_lowercase(), v.clone()))
                .collect(),
            unknown_word: config.markers.unknown_word.clone(),
            codec: CaseStyleCodec::new(config.case_style.mixed_exact),
            policy: config.reorder.policy,
        }
    }

    /// Resolve every token and reorder, without joining
    pub fn annotate(&self, morph: &Morphology<'_>, text: &str) -> Vec<Annotated> {
        let tokens = tokenize(text);
        let mut out = Vec::with_capacity(tokens.len());
        let mut forced: Option<Case> = None;

        for token in tokens {
            if token.kind == TokenKind::Punctuation {
                out.push(Annotated::punctuation(token.text));
                continue;
            }

            let normalized = morph.resolver.normalize(token.text);
            let style = self.codec.capture(token.text);

            if self.locative_prepositions.contains(&normalized) {
                out.push(Annotated {
                    source: token.text.to_string(),
                    output: style.apply(&self.preposition_literal),
                    outcome: Outcome::Preposition,
                    category: None,
                    case: None,
                });
                forced = Some(Case::Locative);
                continue;
            }

            let case = forced.take().unwrap_or_default();

            if let Some(form) = self.overrides.get(&normalized) {
                out.push(Annotated {
                    source: token.text.to_string(),
                    output: style.apply(form),
                    outcome: Outcome::Override,
                    category: None,
                    case: None,
                });
                continue;
            }

            let resolution = morph.resolver.resolve_detailed(morph.lexicon, token.text);
            let annotated = match resolution {
                Resolution::Exact(entry) | Resolution::Fuzzy(entry) => {
                    let form =
                        morph
                            .reconstructor
                            .reconstruct(morph.table, entry, case, Number::Singular);
                    Annotated {
                        source: token.text.to_string(),
                        output: style.apply(&form),
                        outcome: if matches!(resolution, Resolution::Exact(_)) {
                            Outcome::Exact
                        } else {
                            Outcome::Fuzzy
                        },
                        category: Some(entry.grammatical_category().to_string()),
                        case: Some(case),
                    }
                }
                Resolution::Unknown => Annotated {
                    source: token.text.to_string(),
                    output: style.apply(&self.unknown_word),
                    outcome: Outcome::Unknown,
                    category: None,
                    case: Some(case),
                },
            };
            out.push(annotated);
        }

        reorder(&mut out, self.policy);
        out
    }

    /// Translate text; empty or blank input yields an empty string
    pub fn translate(&self, morph: &Morphology<'_>, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        join(&self.annotate(morph, text))
    }

    pub fn codec(&self) -> &CaseStyleCodec {
        &self.codec
    }
}

impl Default for SentencePipeline {
    fn default() -> Self {
        Self::from_config(&TranslatorConfig::default())
    }
}
