use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_itrans_toml, ItransConfigError, Mapping, MappingKind};
use super::trie::SpellingTrie;

pub(super) const DEFAULT_ITRANS_TOML: &str = include_str!("default_itrans.toml");

/// Devanagari sign that suppresses the inherent vowel.
pub const VIRAMA: char = '\u{094D}';

/// ITRANS separator. Produces no output; keeps the spellings on either side
/// from being read as one token.
pub const SEPARATOR: char = '_';

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `ItransTable::global()` call.
pub fn init_custom(toml_content: String) -> Result<(), ItransConfigError> {
    // Validate eagerly
    parse_itrans_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| ItransConfigError::AlreadyInitialized)
}

/// Returns the embedded default ITRANS table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_ITRANS_TOML
}

/// A unit recognised while reading ITRANS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Token {
    Vowel { letter: char, sign: Option<char> },
    /// A consonant or conjunct; owes a vowel or a virama.
    Consonant(String),
    Virama,
    Symbol(String),
}

/// Role of a Devanagari code point when writing ITRANS, with its canonical spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Letter {
    Vowel(String),
    Sign(String),
    Consonant(String),
    Virama(String),
    Symbol(String),
}

pub struct ItransTable {
    trie: SpellingTrie,
    tokens: Vec<Token>,
    letters: HashMap<char, Letter>,
}

impl ItransTable {
    pub(super) fn from_mappings(mappings: &[Mapping]) -> Self {
        let mut trie = SpellingTrie::new();
        let mut tokens = Vec::with_capacity(mappings.len());
        let mut letters = HashMap::new();

        for m in mappings {
            let first = m.letter.chars().next();
            let canonical = m.roman[0].clone();
            let token = match (m.kind, first) {
                (MappingKind::Vowel { sign }, Some(letter)) => {
                    letters.insert(letter, Letter::Vowel(canonical.clone()));
                    if let Some(sign) = sign {
                        letters.insert(sign, Letter::Sign(canonical));
                    }
                    Token::Vowel { letter, sign }
                }
                (MappingKind::Consonant, Some(letter)) => {
                    letters.insert(letter, Letter::Consonant(canonical));
                    Token::Consonant(m.letter.clone())
                }
                (MappingKind::Symbol, Some(VIRAMA)) => {
                    letters.insert(VIRAMA, Letter::Virama(canonical));
                    Token::Virama
                }
                (MappingKind::Symbol, Some(letter)) => {
                    letters.insert(letter, Letter::Symbol(canonical));
                    Token::Symbol(m.letter.clone())
                }
                (MappingKind::Cluster, _) | (_, None) => Token::Consonant(m.letter.clone()),
            };
            let index = tokens.len();
            tokens.push(token);
            for spelling in &m.roman {
                trie.insert(spelling, index);
            }
        }

        Self {
            trie,
            tokens,
            letters,
        }
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static ItransTable {
        static INSTANCE: OnceLock<ItransTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_ITRANS_TOML);
            let mappings = parse_itrans_toml(toml_str).expect("ITRANS TOML must be valid");
            ItransTable::from_mappings(&mappings)
        })
    }

    /// Longest token at the start of `input`, with its byte length.
    pub(super) fn next_token(&self, input: &str) -> Option<(usize, &Token)> {
        self.trie
            .longest_match(input)
            .map(|(len, index)| (len, &self.tokens[index]))
    }

    /// Byte length of the longest spelling in the table.
    pub(super) fn max_spelling_len(&self) -> usize {
        self.trie.max_len()
    }

    pub(super) fn letter(&self, c: char) -> Option<&Letter> {
        self.letters.get(&c)
    }

    /// Canonical ITRANS spelling of a single Devanagari code point.
    pub fn spelling(&self, c: char) -> Option<&str> {
        self.letters.get(&c).map(|l| match l {
            Letter::Vowel(s)
            | Letter::Sign(s)
            | Letter::Consonant(s)
            | Letter::Virama(s)
            | Letter::Symbol(s) => s.as_str(),
        })
    }
}
