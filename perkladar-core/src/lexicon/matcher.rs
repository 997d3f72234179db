//! Fallback lemma matching strategies
//!
//! The only strategy shipped is a crude prefix comparison. It is kept
//! behind [`LemmaMatcher`] so a real morphological analyzer can replace it
//! without touching the resolver or the pipeline.

use super::{normalize_lemma, LexicalEntry, Lexicon};

/// Indexed lemmas must be strictly longer than this to take part in prefix matching
pub const MIN_INDEXED_LEN: usize = 3;

/// Strategy used when a token has no exact lexicon entry
pub trait LemmaMatcher: Send + Sync + std::fmt::Debug {
    /// Find a plausible entry for a lemma that missed exact lookup
    fn find<'a>(&self, lemma: &str, lexicon: &'a Lexicon) -> Option<&'a LexicalEntry>;
}

/// First-N-characters comparison against every indexed lemma
///
/// Returns the first entry of the first lemma (in insertion order) whose
/// leading `prefix_len` characters equal the query's. This both
/// over-matches (unrelated words sharing a prefix) and under-matches
/// (suppletive stems); callers depend on exactly that behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatcher {
    prefix_len: usize,
}

impl PrefixMatcher {
    pub fn new(prefix_len: usize) -> Self {
        Self { prefix_len }
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }
}

impl Default for PrefixMatcher {
    fn default() -> Self {
        Self::new(4)
    }
}

impl LemmaMatcher for PrefixMatcher {
    fn find<'a>(&self, lemma: &str, lexicon: &'a Lexicon) -> Option<&'a LexicalEntry> {
        let query = normalize_lemma(lemma);
        let wanted = char_prefix(&query, self.prefix_len);
        if wanted.is_empty() {
            return None;
        }

        lexicon
            .lemmas()
            .filter(|(indexed, _)| indexed.chars().count() > MIN_INDEXED_LEN)
            .find(|(indexed, _)| char_prefix(indexed, self.prefix_len) == wanted)
            .and_then(|(_, entries)| entries.first())
    }
}

/// Leading `n` characters of `s` (all of it when shorter)
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
