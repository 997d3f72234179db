//! Surface token → lexicon entry

use crate::lexicon::{LemmaMatcher, LexicalEntry, Lexicon, PrefixMatcher};

/// How a token was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Exact(&'a LexicalEntry),
    Fuzzy(&'a LexicalEntry),
    Unknown,
}

impl<'a> Resolution<'a> {
    pub fn entry(&self) -> Option<&'a LexicalEntry> {
        match *self {
            Resolution::Exact(entry) | Resolution::Fuzzy(entry) => Some(entry),
            Resolution::Unknown => None,
        }
    }
}

/// Exact lookup first, then the fallback matcher
#[derive(Debug)]
pub struct LemmaResolver {
    matcher: Box<dyn LemmaMatcher>,
    strip_chars: Vec<char>,
}

impl LemmaResolver {
    pub fn new(matcher: Box<dyn LemmaMatcher>, strip_chars: Vec<char>) -> Self {
        Self {
            matcher,
            strip_chars,
        }
    }

    /// Lower-case, trim and drop trailing punctuation
    pub fn normalize(&self, token: &str) -> String {
        token
            .trim()
            .trim_end_matches(self.strip_chars.as_slice())
            .trim()
            .to_lowercase()
    }

    /// Entry for a token, or `None` for an unknown word
    pub fn resolve<'a>(&self, lexicon: &'a Lexicon, token: &str) -> Option<&'a LexicalEntry> {
        self.resolve_detailed(lexicon, token).entry()
    }

    /// Like [`resolve`](Self::resolve) but reports which lookup succeeded
    pub fn resolve_detailed<'a>(&self, lexicon: &'a Lexicon, token: &str) -> Resolution<'a> {
        let lemma = self.normalize(token);
        if lemma.is_empty() {
            return Resolution::Unknown;
        }

        if let Some(entry) = lexicon.lookup_exact(&lemma) {
            log::trace!("'{token}' resolved exactly to '{}'", entry.reconstructed_base());
            return Resolution::Exact(entry);
        }

        match self.matcher.find(&lemma, lexicon) {
            Some(entry) => {
                log::debug!(
                    "'{token}' resolved by prefix to lemma '{}'",
                    entry.source_lemma()
                );
                Resolution::Fuzzy(entry)
            }
            None => {
                log::debug!("'{token}' not found in lexicon");
                Resolution::Unknown
            }
        }
    }
}

impl Default for LemmaResolver {
    fn default() -> Self {
        Self::new(
            Box::new(PrefixMatcher::default()),
            vec![',', '.', '?', '!', ' '],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconRecord;

    fn lexicon() -> Lexicon {
        Lexicon::from_records(vec![
            LexiconRecord::new("matka", "matь", "noun-fem"),
            LexiconRecord::new("rzeka", "rěka", "noun - a-stem - feminine"),
        ])
    }

    #[test]
    fn test_normalize() {
        let resolver = LemmaResolver::default();
        assert_eq!(resolver.normalize("Matka,"), "matka");
        assert_eq!(resolver.normalize(" RZEKA?! "), "rzeka");
        assert_eq!(resolver.normalize("..."), "");
    }

    #[test]
    fn test_exact_before_fuzzy() {
        let lexicon = lexicon();
        let resolver = LemmaResolver::default();

        assert!(matches!(
            resolver.resolve_detailed(&lexicon, "Matka."),
            Resolution::Exact(e) if e.reconstructed_base() == "matь"
        ));
        assert!(matches!(
            resolver.resolve_detailed(&lexicon, "rzekach"),
            Resolution::Fuzzy(e) if e.reconstructed_base() == "rěka"
        ));
    }

    #[test]
    fn test_unknown_word() {
        let lexicon = lexicon();
        let resolver = LemmaResolver::default();
        assert!(resolver.resolve(&lexicon, "ogrodzie").is_none());
        assert!(resolver.resolve(&lexicon, "").is_none());
        assert_eq!(resolver.resolve_detailed(&lexicon, "!"), Resolution::Unknown);
    }

    #[test]
    fn test_custom_matcher() {
        #[derive(Debug)]
        struct Never;
        impl LemmaMatcher for Never {
            fn find<'a>(&self, _: &str, _: &'a Lexicon) -> Option<&'a LexicalEntry> {
                None
            }
        }

        let lexicon = lexicon();
        let resolver = LemmaResolver::new(Box::new(Never), vec![]);
        assert!(resolver.resolve(&lexicon, "rzekach").is_none());
        assert!(resolver.resolve(&lexicon, "rzeka").is_some());
    }
}
