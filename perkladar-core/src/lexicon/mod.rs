//! Lemma lexicon
//!
//! Indexes dictionary records by normalized Polish lemma. The index keeps
//! lemmas in first-insertion order and homonyms in record order, so both
//! exact and prefix lookups are deterministic for a given data file.

pub mod matcher;
pub mod record;

pub use matcher::{LemmaMatcher, PrefixMatcher};
pub use record::LexiconRecord;

use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::io::Read;

use crate::error::{DataFormatError, Result};

/// A single lexicon entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LexicalEntry {
    source_lemma: String,
    reconstructed_base: String,
    grammatical_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    context_note: Option<String>,
}

impl LexicalEntry {
    /// Create an entry; the lemma is normalized
    pub fn new(
        source_lemma: &str,
        reconstructed_base: impl Into<String>,
        grammatical_category: impl Into<String>,
        context_note: Option<String>,
    ) -> Self {
        Self {
            source_lemma: normalize_lemma(source_lemma),
            reconstructed_base: reconstructed_base.into(),
            grammatical_category: grammatical_category.into(),
            context_note,
        }
    }

    /// Normalized Polish lemma
    pub fn source_lemma(&self) -> &str {
        &self.source_lemma
    }

    /// Nominative singular citation form, possibly ending in a yer
    pub fn reconstructed_base(&self) -> &str {
        &self.reconstructed_base
    }

    /// Join key into the inflection table
    pub fn grammatical_category(&self) -> &str {
        &self.grammatical_category
    }

    pub fn context_note(&self) -> Option<&str> {
        self.context_note.as_deref()
    }
}

/// Lower-case and trim a lemma
pub fn normalize_lemma(lemma: &str) -> String {
    lemma.trim().to_lowercase()
}

type Homonyms = SmallVec<[LexicalEntry; 1]>;

/// Read-only lemma index
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Lemmas in first-insertion order with their homonyms
    lemmas: Vec<(String, Homonyms)>,
    /// Lemma -> position in `lemmas`
    positions: HashMap<String, usize>,
    entry_count: usize,
    /// Records skipped during the load
    diagnostics: Vec<DataFormatError>,
}

impl Lexicon {
    /// Build the index from records, skipping incomplete ones
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = LexiconRecord>,
    {
        let mut lexicon = Self::default();
        for (index, record) in records.into_iter().enumerate() {
            lexicon.push_record(index, record);
        }
        lexicon.log_summary();
        lexicon
    }

    /// Build the index from untyped JSON values
    ///
    /// Values that are not objects of string fields are skipped.
    pub fn from_values(values: Vec<serde_json::Value>) -> Self {
        let mut lexicon = Self::default();
        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<LexiconRecord>(value) {
                Ok(record) => lexicon.push_record(index, record),
                Err(e) => lexicon.skip(DataFormatError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                }),
            }
        }
        lexicon.log_summary();
        lexicon
    }

    /// Parse a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Read a JSON array of records
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_json_value(value)
    }

    fn from_json_value(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Array(values) => Ok(Self::from_values(values)),
            _ => Err(DataFormatError::UnexpectedShape {
                expected: "a JSON array of lexicon records",
            }
            .into()),
        }
    }

    fn push_record(&mut self, index: usize, record: LexiconRecord) {
        let lemma = match record.polish.as_deref().map(normalize_lemma) {
            Some(lemma) if !lemma.is_empty() => lemma,
            _ => {
                return self.skip(DataFormatError::MissingField {
                    index,
                    field: "polish",
                })
            }
        };

        let base = match record.slovian.as_deref().map(str::trim) {
            Some(base) if !base.is_empty() => base.to_string(),
            _ => {
                return self.skip(DataFormatError::MissingField {
                    index,
                    field: "slovian",
                })
            }
        };

        let entry = LexicalEntry {
            source_lemma: lemma.clone(),
            reconstructed_base: base,
            grammatical_category: record.category.unwrap_or_default().trim().to_string(),
            context_note: record.context.filter(|c| !c.trim().is_empty()),
        };

        match self.positions.get(&lemma).copied() {
            Some(pos) => self.lemmas[pos].1.push(entry),
            None => {
                self.positions.insert(lemma.clone(), self.lemmas.len());
                let mut homonyms = Homonyms::new();
                homonyms.push(entry);
                self.lemmas.push((lemma, homonyms));
            }
        }
        self.entry_count += 1;
    }

    fn skip(&mut self, error: DataFormatError) {
        log::warn!("Skipping lexicon record: {error}");
        self.diagnostics.push(error);
    }

    fn log_summary(&self) {
        log::debug!(
            "Indexed {} lexicon entries under {} lemmas ({} skipped)",
            self.entry_count,
            self.lemmas.len(),
            self.diagnostics.len()
        );
    }

    /// First entry for the normalized lemma
    pub fn lookup_exact(&self, lemma: &str) -> Option<&LexicalEntry> {
        self.entries(lemma).first()
    }

    /// Prefix-based fallback lookup with the default matcher
    pub fn lookup_fuzzy(&self, lemma: &str) -> Option<&LexicalEntry> {
        PrefixMatcher::default().find(lemma, self)
    }

    /// All homonyms for the normalized lemma, in record order
    pub fn entries(&self, lemma: &str) -> &[LexicalEntry] {
        self.positions
            .get(&normalize_lemma(lemma))
            .map(|&pos| self.lemmas[pos].1.as_slice())
            .unwrap_or(&[])
    }

    /// Lemmas with their homonyms in index order
    pub fn lemmas(&self) -> impl Iterator<Item = (&str, &[LexicalEntry])> {
        self.lemmas
            .iter()
            .map(|(lemma, entries)| (lemma.as_str(), entries.as_slice()))
    }

    /// Every entry in index order
    pub fn iter(&self) -> impl Iterator<Item = &LexicalEntry> {
        self.lemmas.iter().flat_map(|(_, entries)| entries.iter())
    }

    /// Number of entries (homonyms counted separately)
    pub fn len(&self) -> usize {
        self.entry_count
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Number of distinct lemmas
    pub fn lemma_count(&self) -> usize {
        self.lemmas.len()
    }

    /// Records skipped while loading
    pub fn diagnostics(&self) -> &[DataFormatError] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_exact_lookup_is_normalized() {
        let lexicon = Lexicon::from_records(vec![LexiconRecord::new(
            " Matka ",
            "matь",
            "noun-fem",
        )]);

        let entry = lexicon.lookup_exact("MATKA").unwrap();
        assert_eq!(entry.source_lemma(), "matka");
        assert_eq!(entry.reconstructed_base(), "matь");
        assert_eq!(entry.grammatical_category(), "noun-fem");
        assert!(lexicon.lookup_exact("ojciec").is_none());
    }

    #[test]
    fn test_homonyms_keep_record_order() {
        let lexicon = Lexicon::from_records(vec![
            LexiconRecord::new("zamek", "zamъkъ", "noun - o-stem - masculine")
                .with_context("castle"),
            LexiconRecord::new("dom", "domъ", "noun - u-stem - masculine"),
            LexiconRecord::new("zamek", "zamъkъ", "noun - o-stem - masculine")
                .with_context("lock"),
        ]);

        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.lemma_count(), 2);
        let entries = lexicon.entries("zamek");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].context_note(), Some("castle"));
        assert_eq!(entries[1].context_note(), Some("lock"));
        assert_eq!(lexicon.lookup_exact("zamek").unwrap().context_note(), Some("castle"));

        let order: Vec<&str> = lexicon.lemmas().map(|(lemma, _)| lemma).collect();
        assert_eq!(order, vec!["zamek", "dom"]);
    }

    #[test]
    fn test_records_without_lemma_are_skipped() {
        let lexicon = Lexicon::from_json_str(
            r#"[
                {"polish": "dom", "slovian": "domъ", "type and case": "noun"},
                {"slovian": "lěsъ", "type and case": "noun"},
                {"polish": "   ", "slovian": "x"},
                {"polish": "las"},
                {"polish": 7, "slovian": "sedmь"},
                "not a record"
            ]"#,
        )
        .unwrap();

        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.lookup_exact("dom").is_some());
        let diagnostics = lexicon.diagnostics();
        assert_eq!(diagnostics.len(), 5);
        assert_eq!(
            &diagnostics[..3],
            &[
                DataFormatError::MissingField {
                    index: 1,
                    field: "polish"
                },
                DataFormatError::MissingField {
                    index: 2,
                    field: "polish"
                },
                DataFormatError::MissingField {
                    index: 3,
                    field: "slovian"
                },
            ]
        );
        assert!(matches!(
            diagnostics[3],
            DataFormatError::InvalidRecord { index: 4, .. }
        ));
        assert!(matches!(
            diagnostics[4],
            DataFormatError::InvalidRecord { index: 5, .. }
        ));
    }

    #[test]
    fn test_missing_category_becomes_empty() {
        let lexicon = Lexicon::from_json_str(r#"[{"pl": "i", "sl": "i"}]"#).unwrap();
        assert_eq!(lexicon.lookup_exact("i").unwrap().grammatical_category(), "");
    }

    #[test]
    fn test_top_level_must_be_array() {
        let result = Lexicon::from_json_str(r#"{"polish": "dom"}"#);
        assert!(matches!(
            result,
            Err(Error::DataFormat(DataFormatError::UnexpectedShape { .. }))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Lexicon::from_json_str("[{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_reader_loading() {
        let data = r#"[{"polish": "rzeka", "slovian": "rěka", "type and case": "noun-fem"}]"#;
        let data = data.as_bytes();
        let lexicon = Lexicon::from_json_reader(data).unwrap();
        assert_eq!(lexicon.lookup_exact("rzeka").unwrap().reconstructed_base(), "rěka");
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::from_records(Vec::new());
        assert!(lexicon.is_empty());
        assert!(lexicon.lookup_exact("dom").is_none());
        assert!(lexicon.lookup_fuzzy("domek").is_none());
        assert!(lexicon.entries("dom").is_empty());
    }
}
