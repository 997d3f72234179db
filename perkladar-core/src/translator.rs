//! Translator facade, builder and shared wrappers
//!
//! [`Translator`] owns every loaded table and is immutable once built, so a
//! single instance can serve any number of threads. [`SharedTranslator`]
//! adds atomic replacement of the whole index and [`CachedTranslator`]
//! memoizes sentence translations on top of it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::TranslatorConfig;
use crate::context::{self, ContextPayload};
use crate::error::{Error, Result};
use crate::grammar::{Case, Number};
use crate::inflection::{CategoryMismatch, InflectionTable};
use crate::lexicon::{LemmaMatcher, LexicalEntry, Lexicon, PrefixMatcher};
use crate::phonology::SoundChange;
use crate::pipeline::{Annotated, Morphology, SentencePipeline};
use crate::reconstructor::WordReconstructor;
use crate::resolver::{LemmaResolver, Resolution};
use crate::sample;

/// Loaded lexicon, inflection table and sentence rules
#[derive(Debug)]
pub struct Translator {
    config: TranslatorConfig,
    lexicon: Lexicon,
    table: InflectionTable,
    resolver: LemmaResolver,
    reconstructor: WordReconstructor,
    pipeline: SentencePipeline,
}

impl Translator {
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::new()
    }

    /// Translator over the given tables with the embedded configuration
    pub fn new(lexicon: Lexicon, table: InflectionTable) -> Result<Self> {
        Self::builder().lexicon(lexicon).inflection_table(table).build()
    }

    /// Translator over the embedded sample dictionary
    pub fn with_sample_data() -> Result<Self> {
        Self::new(sample::lexicon()?, sample::inflection_table()?)
    }

    fn morphology(&self) -> Morphology<'_> {
        Morphology {
            lexicon: &self.lexicon,
            table: &self.table,
            resolver: &self.resolver,
            reconstructor: &self.reconstructor,
        }
    }

    /// Translate a sentence; never fails
    pub fn translate(&self, text: &str) -> String {
        self.pipeline.translate(&self.morphology(), text)
    }

    /// Per-token resolution details, after reordering
    pub fn annotate(&self, text: &str) -> Vec<Annotated> {
        self.pipeline.annotate(&self.morphology(), text)
    }

    /// Translate many texts, in parallel when the `parallel` feature is on
    pub fn translate_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            texts.par_iter().map(|t| self.translate(t.as_ref())).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            texts.iter().map(|t| self.translate(t.as_ref())).collect()
        }
    }

    pub fn resolve(&self, token: &str) -> Resolution<'_> {
        self.resolver.resolve_detailed(&self.lexicon, token)
    }

    /// Inflected form of a single word, styled like the token
    ///
    /// Returns `None` when the word cannot be resolved. Overrides are not
    /// consulted; they apply to running text only.
    pub fn reconstruct_word(&self, token: &str, case: Case, number: Number) -> Option<String> {
        let entry = self.resolve(token).entry()?;
        let form = self
            .reconstructor
            .reconstruct(&self.table, entry, case, number);
        Some(self.pipeline.codec().restyle(token, &form))
    }

    /// Exact-match dictionary entries for the words of `text`
    pub fn relevant_entries(&self, text: &str, limit: usize) -> Vec<&LexicalEntry> {
        context::relevant_entries(&self.lexicon, text, limit)
    }

    pub fn context_payload(&self, text: &str, limit: usize) -> ContextPayload {
        ContextPayload::build(&self.lexicon, text, limit)
    }

    /// Lexicon categories with no inflection pattern
    pub fn validate_categories(&self) -> Vec<CategoryMismatch> {
        self.table.missing_categories(&self.lexicon)
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn inflection_table(&self) -> &InflectionTable {
        &self.table
    }
}

/// Builder for [`Translator`]
#[derive(Debug, Default)]
pub struct TranslatorBuilder {
    config: Option<TranslatorConfig>,
    lexicon: Option<Lexicon>,
    table: Option<InflectionTable>,
    matcher: Option<Box<dyn LemmaMatcher>>,
    strict: bool,
}

impl TranslatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: TranslatorConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    pub fn inflection_table(mut self, table: InflectionTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Replace the prefix fallback with another matching strategy
    pub fn matcher(mut self, matcher: Box<dyn LemmaMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Fail the build when a lexicon category has no inflection pattern
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build(self) -> Result<Translator> {
        let config = match self.config {
            Some(config) => config,
            None => TranslatorConfig::embedded().clone(),
        };
        config.validate()?;

        let lexicon = self.lexicon.unwrap_or_default();
        let table = self.table.unwrap_or_default();

        let missing = table.missing_categories(&lexicon);
        if let Some(first) = missing.first() {
            if self.strict {
                return Err(Error::CategoryMismatch {
                    category: first.category.clone(),
                    lemma: first.lemma.clone(),
                });
            }
            for mismatch in &missing {
                log::warn!(
                    "Category '{}' (lemma '{}') has no inflection pattern",
                    mismatch.category,
                    mismatch.lemma
                );
            }
        }

        let matcher = self
            .matcher
            .unwrap_or_else(|| Box::new(PrefixMatcher::new(config.lemma.fuzzy_prefix_len)));
        let resolver = LemmaResolver::new(matcher, config.lemma.strip_chars.clone());
        let reconstructor = WordReconstructor::new(
            SoundChange::from_config(&config.markers, &config.palatalization),
            config.markers.yers.clone(),
        );
        let pipeline = SentencePipeline::from_config(&config);

        log::info!(
            "Translator ready: {} entries, {} inflection categories ({})",
            lexicon.len(),
            table.len(),
            config.metadata.name
        );

        Ok(Translator {
            config,
            lexicon,
            table,
            resolver,
            reconstructor,
            pipeline,
        })
    }
}

/// A translator that can be replaced while readers keep working
///
/// Readers take an `Arc` snapshot and never observe a partially built
/// index; [`reload`](Self::reload) swaps in a fully built translator.
#[derive(Debug)]
pub struct SharedTranslator {
    current: RwLock<Arc<Translator>>,
}

impl SharedTranslator {
    pub fn new(translator: Translator) -> Self {
        Self {
            current: RwLock::new(Arc::new(translator)),
        }
    }

    /// The translator currently published
    pub fn snapshot(&self) -> Arc<Translator> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn translate(&self, text: &str) -> String {
        self.snapshot().translate(text)
    }

    /// Publish a new translator and return the previous one
    pub fn reload(&self, translator: Translator) -> Arc<Translator> {
        let next = Arc::new(translator);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Build a translator and publish it only if the build succeeds
    pub fn reload_with<F>(&self, build: F) -> Result<Arc<Translator>>
    where
        F: FnOnce() -> Result<Translator>,
    {
        let translator = build()?;
        Ok(self.reload(translator))
    }
}

#[derive(Debug)]
struct CacheState {
    owner: Arc<Translator>,
    entries: HashMap<String, String>,
}

/// Memoizing front for a [`SharedTranslator`]
///
/// The cache is bound to the translator snapshot that filled it and is
/// dropped as soon as a reload publishes a different one. When full it is
/// cleared wholesale.
#[derive(Debug)]
pub struct CachedTranslator {
    shared: Arc<SharedTranslator>,
    capacity: usize,
    state: Mutex<CacheState>,
}

impl CachedTranslator {
    pub const DEFAULT_CAPACITY: usize = 1024;

    pub fn new(shared: Arc<SharedTranslator>, capacity: usize) -> Self {
        let owner = shared.snapshot();
        Self {
            shared,
            capacity,
            state: Mutex::new(CacheState {
                owner,
                entries: HashMap::new(),
            }),
        }
    }

    pub fn translate(&self, text: &str) -> String {
        let current = self.shared.snapshot();

        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if !Arc::ptr_eq(&state.owner, &current) {
                log::debug!("Translator reloaded, dropping {} cached entries", state.entries.len());
                state.owner = Arc::clone(&current);
                state.entries.clear();
            }
            if let Some(hit) = state.entries.get(text) {
                return hit.clone();
            }
        }

        let translated = current.translate(text);

        if self.capacity > 0 {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if Arc::ptr_eq(&state.owner, &current) {
                if state.entries.len() >= self.capacity {
                    state.entries.clear();
                }
                state.entries.insert(text.to_string(), translated.clone());
            }
        }
        translated
    }

    /// Number of memoized translations
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconRecord;

    fn small_translator(base: &str) -> Translator {
        Translator::new(
            Lexicon::from_records(vec![LexiconRecord::new("matka", base, "noun-fem")]),
            InflectionTable::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_translator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
        assert_send_sync::<SharedTranslator>();
        assert_send_sync::<CachedTranslator>();
    }

    #[test]
    fn test_sample_translator() {
        let translator = Translator::with_sample_data().unwrap();
        assert_eq!(translator.translate("Matka"), "Matь");
        assert_eq!(translator.translate("w ogrodzie"), "vu (ne najdeno slova)");
    }

    #[test]
    fn test_strict_mode_reports_mismatch() {
        let lexicon = Lexicon::from_records(vec![LexiconRecord::new(
            "dom",
            "domъ",
            "noun - u-stem - masculine",
        )]);

        let err = Translator::builder()
            .lexicon(lexicon.clone())
            .strict(true)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::CategoryMismatch { ref category, ref lemma }
                if category == "noun - u-stem - masculine" && lemma == "dom"
        ));

        let lenient = Translator::builder().lexicon(lexicon).build().unwrap();
        assert_eq!(lenient.validate_categories().len(), 1);
        assert_eq!(
            lenient.reconstruct_word("dom", Case::Locative, Number::Singular),
            Some("dom".to_string())
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = TranslatorConfig::default();
        config.lemma.fuzzy_prefix_len = 7;
        assert!(matches!(
            Translator::builder().config(config).build(),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_reconstruct_word_styles_output() {
        let translator = Translator::with_sample_data().unwrap();
        assert_eq!(
            translator.reconstruct_word("BÓG", Case::Locative, Number::Singular),
            Some("BODZĚ".to_string())
        );
        assert_eq!(translator.reconstruct_word("xyzzy", Case::Locative, Number::Singular), None);
    }

    #[test]
    fn test_batch_preserves_order() {
        let translator = Translator::with_sample_data().unwrap();
        let texts = ["Matka", "", "w ogrodzie"];
        assert_eq!(
            translator.translate_batch(&texts),
            vec!["Matь", "", "vu (ne najdeno slova)"]
        );
    }

    #[test]
    fn test_reload_swaps_snapshot() {
        let shared = SharedTranslator::new(small_translator("matь"));
        let before = shared.snapshot();
        assert_eq!(shared.translate("matka"), "matь");

        let previous = shared.reload(small_translator("mati"));
        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(shared.translate("matka"), "mati");
        assert_eq!(before.translate("matka"), "matь");
    }

    #[test]
    fn test_failed_reload_keeps_current() {
        let shared = SharedTranslator::new(small_translator("matь"));
        let result = shared.reload_with(|| Err(Error::Configuration("broken".into())));
        assert!(result.is_err());
        assert_eq!(shared.translate("matka"), "matь");
    }

    #[test]
    fn test_cache_cleared_on_reload() {
        let shared = Arc::new(SharedTranslator::new(small_translator("matь")));
        let cached = CachedTranslator::new(Arc::clone(&shared), 8);

        assert_eq!(cached.translate("Matka"), "Matь");
        assert_eq!(cached.translate("Matka"), "Matь");
        assert_eq!(cached.len(), 1);

        shared.reload(small_translator("mati"));
        assert_eq!(cached.translate("Matka"), "Mati");
        assert_eq!(cached.len(), 1);
    }

    #[test]
    fn test_cache_capacity_bound() {
        let shared = Arc::new(SharedTranslator::new(small_translator("matь")));
        let cached = CachedTranslator::new(shared, 2);
        cached.translate("a");
        cached.translate("b");
        assert_eq!(cached.len(), 2);
        cached.translate("c");
        assert_eq!(cached.len(), 1);

        cached.clear();
        assert!(cached.is_empty());
    }
}
