//! Word / punctuation tokenization
//!
//! Word runs are letters, combining marks, digits, apostrophes and
//! underscores. The punctuation marks `. , ! ? ;` are kept as their own
//! tokens; every other character only separates tokens.

use regex::Regex;
use std::sync::OnceLock;

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_RE.get_or_init(|| {
        Regex::new(r"[\p{L}\p{M}\p{N}_'’]+|[.,!?;]").expect("token pattern is valid")
    })
}

/// Kind of a surface token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punctuation,
}

/// A token borrowed from the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'t> {
    pub text: &'t str,
    pub kind: TokenKind,
    /// Byte offset in the input
    pub offset: usize,
}

/// Split text into word and punctuation tokens
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    token_regex()
        .find_iter(text)
        .map(|m| {
            let kind = if is_punctuation(m.as_str()) {
                TokenKind::Punctuation
            } else {
                TokenKind::Word
            };
            Token {
                text: m.as_str(),
                kind,
                offset: m.start(),
            }
        })
        .collect()
}

fn is_punctuation(s: &str) -> bool {
    matches!(s, "." | "," | "!" | "?" | ";")
}
