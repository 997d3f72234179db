//! Output reassembly

use super::Annotated;

/// Join outputs with single spaces, attaching punctuation to the preceding word
pub fn join(tokens: &[Annotated]) -> String {
    let mut out = String::new();
    for token in tokens {
        if !token.is_punctuation() && !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&token.output);
    }
    out
}
