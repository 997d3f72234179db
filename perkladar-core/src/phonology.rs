//! Sound changes at the stem/suffix boundary
//!
//! Velars and `h` palatalize before a front vowel: `g > dz`, `k > c`,
//! `h > z`. The function is total; anything else concatenates unchanged.

use std::collections::HashMap;

use crate::config::{Markers, Palatalization};

/// Palatalization rules applied when a suffix is attached
#[derive(Debug, Clone)]
pub struct SoundChange {
    front_vowel: char,
    reflexes: HashMap<char, String>,
}

impl SoundChange {
    /// Build from a front-vowel marker and consonant reflexes
    pub fn new<I, S>(front_vowel: char, reflexes: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        Self {
            front_vowel,
            reflexes: reflexes
                .into_iter()
                .map(|(from, to)| (from, to.into()))
                .collect(),
        }
    }

    /// Build from configuration sections
    pub fn from_config(markers: &Markers, palatalization: &Palatalization) -> Self {
        Self::new(
            markers.front_vowel,
            palatalization
                .rules
                .iter()
                .map(|reflex| (reflex.from, reflex.to.clone())),
        )
    }

    /// Join `stem` and `suffix`, palatalizing the stem-final consonant when required
    pub fn apply(&self, stem: &str, suffix: &str) -> String {
        let mut word = String::with_capacity(stem.len() + suffix.len() + 1);

        if suffix.starts_with(self.front_vowel) {
            if let Some((idx, last)) = stem.char_indices().next_back() {
                if let Some(reflex) = self.reflexes.get(&last) {
                    word.push_str(&stem[..idx]);
                    word.push_str(reflex);
                    word.push_str(suffix);
                    return word;
                }
            }
        }

        word.push_str(stem);
        word.push_str(suffix);
        word
    }

    pub fn front_vowel(&self) -> char {
        self.front_vowel
    }
}

impl Default for SoundChange {
    fn default() -> Self {
        Self::from_config(&Markers::default(), &Palatalization::default())
    }
}
