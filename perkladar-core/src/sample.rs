//! Embedded sample dictionary
//!
//! A small lexicon and inflection table compiled into the crate so the
//! translator works without external data files.

use crate::error::Result;
use crate::inflection::InflectionTable;
use crate::lexicon::Lexicon;

pub const LEXICON_JSON: &str = include_str!("../configs/data/lexicon.json");
pub const INFLECTION_JSON: &str = include_str!("../configs/data/inflection.json");

/// Parse the embedded lexicon
pub fn lexicon() -> Result<Lexicon> {
    Lexicon::from_json_str(LEXICON_JSON)
}

/// Parse the embedded inflection table
pub fn inflection_table() -> Result<InflectionTable> {
    InflectionTable::from_json_str(INFLECTION_JSON)
}
