//! Deterministic reconstruction of Proto-Slavic word forms from Polish text
//!
//! This crate combines a lemma lexicon with inflection-pattern tables and
//! a handful of historical sound changes. Every step is a table lookup or
//! a string rewrite, so the same data always yields the same output.
//!
//! # Architecture
//!
//! Components, leaves first:
//! - **Lexicon** ([`lexicon`]): Polish lemma to reconstructed entries, with
//!   a pluggable prefix fallback
//! - **Inflection table** ([`inflection`]): category to `(number, case)` suffix
//! - **Sound change** ([`phonology`]): palatalization at the stem boundary
//! - **Case style** ([`case_style`]): letter-case capture and restoration
//! - **Resolver / reconstructor**: token to entry, entry to inflected form
//! - **Pipeline** ([`pipeline`]): prepositions, overrides, reordering, joining
//! - **Context** ([`context`]): dictionary hits for external prompt builders
//!
//! # Example
//!
//! ```rust
//! use perkladar_core::{Case, Number, Translator};
//!
//! let translator = Translator::with_sample_data().unwrap();
//!
//! assert_eq!(translator.translate("Matka"), "Matь");
//! assert_eq!(translator.translate("w ogrodzie"), "vu (ne najdeno slova)");
//!
//! let form = translator.reconstruct_word("wilk", Case::Locative, Number::Singular);
//! assert_eq!(form.as_deref(), Some("vьlcě"));
//! ```

pub mod case_style;
pub mod config;
pub mod context;
pub mod error;
pub mod grammar;
pub mod inflection;
pub mod lexicon;
pub mod phonology;
pub mod pipeline;
pub mod reconstructor;
pub mod resolver;
pub mod sample;
pub mod translator;

pub use case_style::{CaseStyle, CaseStyleCodec};
pub use config::{ReorderPolicy, TranslatorConfig};
pub use context::{ContextHit, ContextPayload, DEFAULT_CONTEXT_LIMIT};
pub use error::{DataFormatError, Error, Result};
pub use grammar::{Case, Number};
pub use inflection::{CategoryMismatch, InflectionTable};
pub use lexicon::{LemmaMatcher, LexicalEntry, Lexicon, LexiconRecord, PrefixMatcher};
pub use phonology::SoundChange;
pub use pipeline::{Annotated, Outcome, SentencePipeline};
pub use reconstructor::WordReconstructor;
pub use resolver::{LemmaResolver, Resolution};
pub use translator::{CachedTranslator, SharedTranslator, Translator, TranslatorBuilder};
