//! Adjective placement
//!
//! Polish puts many adjectives after the noun; the output places them
//! before it.

use super::Annotated;
use crate::config::ReorderPolicy;

/// Reorder annotated tokens in place according to `policy`
pub fn reorder(tokens: &mut Vec<Annotated>, policy: ReorderPolicy) {
    match policy {
        ReorderPolicy::Swap => swap_pass(tokens),
        ReorderPolicy::Buffer => {
            let taken = std::mem::take(tokens);
            *tokens = buffer_pass(taken);
        }
    }
}

/// Swap each adjacent (noun, adjective) pair once, left to right.
///
/// Scanning resumes after a swapped pair, so `[noun, adj, noun]` becomes
/// `[adj, noun, noun]` and nothing cascades.
pub fn swap_pass(tokens: &mut [Annotated]) {
    let mut i = 0;
    while i + 1 < tokens.len() {
        if tokens[i].is_noun() && tokens[i + 1].is_adjective() {
            tokens.swap(i, i + 1);
            i += 2;
        } else {
            i += 1;
        }
    }
}

/// Hold a noun back while the adjectives following it are emitted.
///
/// The held noun is released at the first token that is not an adjective,
/// or at the end of input.
pub fn buffer_pass(tokens: Vec<Annotated>) -> Vec<Annotated> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut held: Option<Annotated> = None;

    for token in tokens {
        if held.is_some() && token.is_adjective() {
            out.push(token);
            continue;
        }
        if let Some(noun) = held.take() {
            out.push(noun);
        }
        if token.is_noun() {
            held = Some(token);
        } else {
            out.push(token);
        }
    }

    if let Some(noun) = held {
        out.push(noun);
    }
    out
}
