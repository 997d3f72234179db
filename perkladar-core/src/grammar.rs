//! Grammatical case and number

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grammatical case of a reconstructed form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// Citation form
    #[default]
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    /// Forced after `w` / `we` / `v`
    Locative,
    Vocative,
}

impl Case {
    /// All cases in traditional order
    pub const ALL: [Case; 7] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Locative,
        Case::Vocative,
    ];

    /// Lowercase name as used in inflection tables
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Accusative => "accusative",
            Case::Instrumental => "instrumental",
            Case::Locative => "locative",
            Case::Vocative => "vocative",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nominative" | "nom" => Ok(Case::Nominative),
            "genitive" | "gen" => Ok(Case::Genitive),
            "dative" | "dat" => Ok(Case::Dative),
            "accusative" | "acc" => Ok(Case::Accusative),
            "instrumental" | "ins" | "inst" => Ok(Case::Instrumental),
            "locative" | "loc" => Ok(Case::Locative),
            "vocative" | "voc" => Ok(Case::Vocative),
            other => Err(format!("unknown case: {other}")),
        }
    }
}

/// Grammatical number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    #[default]
    Singular,
    Dual,
    Plural,
}

impl Number {
    /// Lowercase name as used in inflection tables
    pub fn as_str(&self) -> &'static str {
        match self {
            Number::Singular => "singular",
            Number::Dual => "dual",
            Number::Plural => "plural",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Number {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "singular" | "sg" => Ok(Number::Singular),
            "dual" | "du" => Ok(Number::Dual),
            "plural" | "pl" => Ok(Number::Plural),
            other => Err(format!("unknown number: {other}")),
        }
    }
}
