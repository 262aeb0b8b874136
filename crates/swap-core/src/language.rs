use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
    Fr,
    Es,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Es => "es",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::De, Language::Fr, Language::Es]
    }

    /// Mixed into every letter hash so buckets differ between languages.
    pub(crate) fn salt(&self) -> u32 {
        match self {
            Language::En => 0x0E11_7A5D,
            Language::De => 0x0DE5_C0B3,
            Language::Fr => 0x0F12_94E7,
            Language::Es => 0x0E55_3F29,
        }
    }

    pub(crate) fn vowels(&self) -> &'static [u8] {
        match self {
            Language::En | Language::De => b"AEIOU",
            Language::Fr => b"AEIOUY",
            Language::Es => b"AEIOU",
        }
    }

    pub(crate) fn consonants(&self) -> &'static [u8] {
        match self {
            Language::En => b"BCDFGHKLMNPRSTVWY",
            Language::De => b"BDFGHKLMNRSTWZ",
            Language::Fr => b"BCDFGLMNPRSTV",
            Language::Es => b"BCDFGLMNPRSTVZ",
        }
    }

    /// Topic phrases used to fill clue templates.
    pub(crate) fn topics(&self) -> &'static [&'static str] {
        match self {
            Language::En => &["nature", "travel", "the kitchen", "music", "science", "sports"],
            Language::De => &["Natur", "Reisen", "Küche", "Musik", "Wissenschaft", "Sport"],
            Language::Fr => &["la nature", "le voyage", "la cuisine", "la musique", "la science", "le sport"],
            Language::Es => &["la naturaleza", "los viajes", "la cocina", "la música", "la ciencia", "el deporte"],
        }
    }

    /// Clue templates; `{}` is replaced by a topic phrase.
    pub(crate) fn clue_templates(&self) -> &'static [&'static str] {
        match self {
            Language::En => &[
                "A word you might meet in {}.",
                "Think of {} for this one.",
                "Found on a list about {}.",
            ],
            Language::De => &[
                "Ein Wort rund um {}.",
                "Denk an {}.",
                "Steht auf einer Liste zu {}.",
            ],
            Language::Fr => &[
                "Un mot lié à {}.",
                "Pensez à {}.",
                "Sur une liste consacrée à {}.",
            ],
            Language::Es => &[
                "Una palabra sobre {}.",
                "Piensa en {}.",
                "Aparece en una lista de {}.",
            ],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            "fr" => Ok(Language::Fr),
            "es" => Ok(Language::Es),
            other => Err(ParseError::Language(other.to_string())),
        }
    }
}
