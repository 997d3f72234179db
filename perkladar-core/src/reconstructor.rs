//! Inflected form synthesis: stem + suffix through sound change

use crate::grammar::{Case, Number};
use crate::inflection::InflectionTable;
use crate::lexicon::LexicalEntry;
use crate::phonology::SoundChange;

/// Builds inflected reconstructed forms for resolved entries
#[derive(Debug, Clone)]
pub struct WordReconstructor {
    sound_change: SoundChange,
    yers: Vec<char>,
}

impl WordReconstructor {
    pub fn new(sound_change: SoundChange, yers: Vec<char>) -> Self {
        Self { sound_change, yers }
    }

    /// Base with trailing yers removed
    pub fn stem<'e>(&self, base: &'e str) -> &'e str {
        base.trim_end_matches(self.yers.as_slice())
    }

    /// Unstyled form of `entry` in the requested case and number
    ///
    /// The base already is the nominative singular, so that combination
    /// returns it verbatim. Everything else strips the yers, appends the
    /// table suffix (possibly empty) and applies palatalization.
    pub fn reconstruct(
        &self,
        table: &InflectionTable,
        entry: &LexicalEntry,
        case: Case,
        number: Number,
    ) -> String {
        let base = entry.reconstructed_base();
        if case == Case::Nominative && number == Number::Singular {
            return base.to_string();
        }

        let suffix = table.suffix_for(entry.grammatical_category(), number, case);
        if suffix.is_empty() && !table.has_category(entry.grammatical_category()) {
            log::debug!(
                "No inflection pattern for category '{}', using bare stem",
                entry.grammatical_category()
            );
        }
        self.sound_change.apply(self.stem(base), suffix)
    }
}

impl Default for WordReconstructor {
    fn default() -> Self {
        Self::new(SoundChange::default(), vec!['ъ', 'ь'])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(base: &str, category: &str) -> LexicalEntry {
        LexicalEntry::new("x", base, category, None)
    }

    #[test]
    fn test_nominative_singular_is_citation_form() {
        let r = WordReconstructor::default();
        let table = InflectionTable::new();
        assert_eq!(
            r.reconstruct(&table, &entry("matь", "noun-fem"), Case::Nominative, Number::Singular),
            "matь"
        );
    }

    #[test]
    fn test_missing_suffix_yields_bare_stem() {
        let r = WordReconstructor::default();
        let table = InflectionTable::new();
        assert_eq!(
            r.reconstruct(
                &table,
                &entry("domъ", "noun - u-stem - masculine"),
                Case::Locative,
                Number::Singular
            ),
            "dom"
        );
    }

    #[test]
    fn test_suffix_with_palatalization() {
        let r = WordReconstructor::default();
        let masc = "noun - o-stem - masculine";
        let table = InflectionTable::new()
            .with_suffix(masc, Number::Singular, Case::Locative, "ě")
            .with_suffix(masc, Number::Singular, Case::Genitive, "a");
        assert_eq!(
            r.reconstruct(&table, &entry("bogъ", masc), Case::Locative, Number::Singular),
            "bodzě"
        );
        assert_eq!(
            r.reconstruct(&table, &entry("vьlkъ", masc), Case::Locative, Number::Singular),
            "vьlcě"
        );
        assert_eq!(
            r.reconstruct(&table, &entry("vьlkъ", masc), Case::Genitive, Number::Singular),
            "vьlka"
        );
    }

    #[test]
    fn test_stem_strips_all_trailing_yers() {
        let r = WordReconstructor::default();
        assert_eq!(r.stem("domъ"), "dom");
        assert_eq!(r.stem("kostь"), "kost");
        assert_eq!(r.stem("sъnъ"), "sъn");
        assert_eq!(r.stem("ъь"), "");
        assert_eq!(r.stem("rěka"), "rěka");
    }

    #[test]
    fn test_nominative_plural_goes_through_table() {
        let r = WordReconstructor::default();
        let table =
            InflectionTable::new().with_suffix("noun", Number::Plural, Case::Nominative, "i");
        assert_eq!(
            r.reconstruct(&table, &entry("vьlkъ", "noun"), Case::Nominative, Number::Plural),
            "vьlki"
        );
    }
}
