use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use super::table::SEPARATOR;

#[derive(Deserialize)]
struct ItransConfig {
    vowels: BTreeMap<String, RawVowel>,
    consonants: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    clusters: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    symbols: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct RawVowel {
    roman: Vec<String>,
    sign: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ItransConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("{0:?} must be a single code point")]
    MultiCharLetter(String),
    #[error("vowel sign of {0:?} must be a single code point")]
    InvalidSign(String),
    #[error("no spelling for {0:?}")]
    NoSpelling(String),
    #[error("invalid spelling {spelling:?} for {letter:?}: must be printable ASCII without '_'")]
    InvalidSpelling { letter: String, spelling: String },
    #[error("spelling {0:?} is used more than once")]
    DuplicateSpelling(String),
    #[error("ITRANS table already initialized")]
    AlreadyInitialized,
}

/// How a Devanagari letter behaves in the ITRANS grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingKind {
    /// Independent vowel; `sign` is its dependent form (`None` for the inherent `a`).
    Vowel { sign: Option<char> },
    Consonant,
    /// Multi-letter conjunct, accepted on input only.
    Cluster,
    Symbol,
}

/// One validated table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub letter: String,
    /// ITRANS spellings, canonical first.
    pub roman: Vec<String>,
    pub kind: MappingKind,
}

/// Parse TOML text into validated mappings.
pub fn parse_itrans_toml(toml_str: &str) -> Result<Vec<Mapping>, ItransConfigError> {
    let config: ItransConfig =
        toml::from_str(toml_str).map_err(|e| ItransConfigError::Parse(e.to_string()))?;

    if config.vowels.is_empty() {
        return Err(ItransConfigError::Empty("vowels"));
    }
    if config.consonants.is_empty() {
        return Err(ItransConfigError::Empty("consonants"));
    }

    let mut mappings = Vec::new();
    for (letter, raw) in config.vowels {
        single_char(&letter)?;
        let sign = match raw.sign {
            Some(s) => {
                let sign =
                    single_char(&s).map_err(|_| ItransConfigError::InvalidSign(letter.clone()))?;
                Some(sign)
            }
            None => None,
        };
        mappings.push(Mapping {
            letter,
            roman: raw.roman,
            kind: MappingKind::Vowel { sign },
        });
    }
    for (letter, roman) in config.consonants {
        single_char(&letter)?;
        mappings.push(Mapping {
            letter,
            roman,
            kind: MappingKind::Consonant,
        });
    }
    for (letter, roman) in config.clusters {
        if letter.is_empty() {
            return Err(ItransConfigError::MultiCharLetter(letter));
        }
        mappings.push(Mapping {
            letter,
            roman,
            kind: MappingKind::Cluster,
        });
    }
    for (letter, roman) in config.symbols {
        single_char(&letter)?;
        mappings.push(Mapping {
            letter,
            roman,
            kind: MappingKind::Symbol,
        });
    }

    validate_spellings(&mappings)?;
    Ok(mappings)
}

fn single_char(s: &str) -> Result<char, ItransConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ItransConfigError::MultiCharLetter(s.to_string())),
    }
}

fn validate_spellings(mappings: &[Mapping]) -> Result<(), ItransConfigError> {
    let mut seen = HashSet::new();
    for m in mappings {
        if m.roman.is_empty() {
            return Err(ItransConfigError::NoSpelling(m.letter.clone()));
        }
        for spelling in &m.roman {
            let printable = spelling.bytes().all(|b| b.is_ascii_graphic());
            if spelling.is_empty() || !printable || spelling.contains(SEPARATOR) {
                return Err(ItransConfigError::InvalidSpelling {
                    letter: m.letter.clone(),
                    spelling: spelling.clone(),
                });
            }
            if !seen.insert(spelling.as_str()) {
                return Err(ItransConfigError::DuplicateSpelling(spelling.clone()));
            }
        }
    }
    Ok(())
}
