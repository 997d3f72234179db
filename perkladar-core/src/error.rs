//! Error types for loading lexicons, inflection tables and configuration
//!
//! Nothing in the translation path returns these. They are produced by
//! constructors and loaders only; per-record problems are recovered locally
//! and reported as [`DataFormatError`] diagnostics.

use thiserror::Error;

/// A malformed or incomplete record found while loading data.
///
/// The offending record is skipped; the rest of the load continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataFormatError {
    /// A lexicon record lacks a required field
    #[error("record {index}: missing required field '{field}'")]
    MissingField {
        /// Position of the record in the source list
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// A lexicon record could not be read as an object of string fields
    #[error("record {index}: {reason}")]
    InvalidRecord {
        /// Position of the record in the source list
        index: usize,
        /// Deserializer message
        reason: String,
    },

    /// A whole data source is not the expected container
    #[error("expected {expected}")]
    UnexpectedShape {
        /// Description of the expected container
        expected: &'static str,
    },

    /// An inflection pattern has an unexpected shape
    #[error("category '{category}': {reason}")]
    InvalidPattern {
        /// Grammatical category key of the pattern
        category: String,
        /// What was wrong with it
        reason: String,
    },

    /// An inflection pattern uses a number or case name that is not recognized
    #[error("category '{category}': unknown {kind} '{key}'")]
    UnknownKey {
        /// Grammatical category key of the pattern
        category: String,
        /// Either "number" or "case"
        kind: &'static str,
        /// The unrecognized key
        key: String,
    },
}

/// Top-level errors returned by loaders and builders
#[derive(Debug, Error)]
pub enum Error {
    /// JSON input could not be parsed at all
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error while reading data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is syntactically valid but unusable
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A whole data source has the wrong shape
    #[error("data format error: {0}")]
    DataFormat(#[from] DataFormatError),

    /// A lexicon category has no inflection pattern (strict mode only)
    #[error("category '{category}' used by lemma '{lemma}' has no inflection pattern")]
    CategoryMismatch {
        /// The category missing from the inflection table
        category: String,
        /// First lemma that uses it
        lemma: String,
    },
}

/// Result type for loading operations
pub type Result<T> = std::result::Result<T, Error>;
