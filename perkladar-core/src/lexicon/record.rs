//! Raw lexicon records as they appear in JSON dictionaries

use serde::{Deserialize, Serialize};

/// One dictionary record before validation
///
/// Both the long field names (`polish`, `slovian`, `type and case`) and the
/// short ones used by the web dictionary (`pl`, `sl`, `tag`) are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconRecord {
    #[serde(default, alias = "pl", skip_serializing_if = "Option::is_none")]
    pub polish: Option<String>,
    #[serde(default, alias = "sl", skip_serializing_if = "Option::is_none")]
    pub slovian: Option<String>,
    #[serde(
        default,
        rename = "type and case",
        alias = "tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(default, alias = "note", skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl LexiconRecord {
    /// Convenience constructor for a complete record
    pub fn new(
        polish: impl Into<String>,
        slovian: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            polish: Some(polish.into()),
            slovian: Some(slovian.into()),
            category: Some(category.into()),
            context: None,
        }
    }

    /// Attach a context note
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}
