//! Letter-case capture and restoration
//!
//! Output words are built in lower case and then restyled after the
//! surface token they replace.

/// Letter-case pattern of a surface token
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaseStyle {
    #[default]
    Lower,
    /// Every letter uppercase
    Upper,
    /// First letter uppercase, the rest lowercase
    Capitalized,
    /// Arbitrary per-character pattern
    Mixed {
        /// Uppercase flag for every character of the token
        mask: Vec<bool>,
        /// Whether the first letter is uppercase, used when lengths differ
        leading_upper: bool,
    },
}

impl CaseStyle {
    /// Three-way capture: upper, capitalized or lower
    ///
    /// Only alphabetic characters count, so a single capital (`W`) is
    /// upper and leading punctuation does not hide a capitalized word.
    pub fn capture(token: &str) -> Self {
        let mut letters = token.chars().filter(|c| c.is_alphabetic()).peekable();
        let Some(&first) = letters.peek() else {
            return CaseStyle::Lower;
        };

        if letters.all(|c| c.is_uppercase()) {
            CaseStyle::Upper
        } else if first.is_uppercase() {
            CaseStyle::Capitalized
        } else {
            CaseStyle::Lower
        }
    }

    /// Capture that keeps irregular patterns as [`CaseStyle::Mixed`]
    pub fn capture_exact(token: &str) -> Self {
        let style = Self::capture(token);
        let conforms = match style {
            CaseStyle::Lower => !token.chars().any(char::is_uppercase),
            CaseStyle::Capitalized => token
                .chars()
                .filter(|c| c.is_alphabetic())
                .skip(1)
                .all(|c| !c.is_uppercase()),
            _ => true,
        };

        if conforms {
            return style;
        }

        CaseStyle::Mixed {
            mask: token.chars().map(char::is_uppercase).collect(),
            leading_upper: style == CaseStyle::Capitalized,
        }
    }

    /// Restyle `word` with this pattern
    pub fn apply(&self, word: &str) -> String {
        match self {
            CaseStyle::Lower => word.to_lowercase(),
            CaseStyle::Upper => word.to_uppercase(),
            CaseStyle::Capitalized => capitalize(word),
            CaseStyle::Mixed {
                mask,
                leading_upper,
            } => {
                if word.chars().count() == mask.len() {
                    let mut out = String::with_capacity(word.len());
                    for (ch, &upper) in word.chars().zip(mask) {
                        if upper {
                            out.extend(ch.to_uppercase());
                        } else {
                            out.extend(ch.to_lowercase());
                        }
                    }
                    out
                } else if *leading_upper {
                    capitalize(word)
                } else {
                    word.to_lowercase()
                }
            }
        }
    }
}

/// Uppercase the first letter and lowercase everything else
fn capitalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut seen_letter = false;
    for ch in word.chars() {
        if !seen_letter && ch.is_alphabetic() {
            seen_letter = true;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Capture/apply pair with the configured tie-break
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseStyleCodec {
    mixed_exact: bool,
}

impl CaseStyleCodec {
    pub fn new(mixed_exact: bool) -> Self {
        Self { mixed_exact }
    }

    pub fn capture(&self, token: &str) -> CaseStyle {
        if self.mixed_exact {
            CaseStyle::capture_exact(token)
        } else {
            CaseStyle::capture(token)
        }
    }

    pub fn apply(&self, style: &CaseStyle, word: &str) -> String {
        style.apply(word)
    }

    /// Style `word` after `token` in one step
    pub fn restyle(&self, token: &str, word: &str) -> String {
        self.capture(token).apply(word)
    }
}
