//! ITRANS ⇄ Devanagari romanization engine.
//!
//! Spellings come from a TOML table (embedded default, replaceable once via
//! [`init_custom`]) and are matched longest-first through a byte trie.
//! Handles the inherent vowel, vowel signs, explicit and implied virama, and
//! the conjunct shortcuts `x` (क्ष) and `GY` (ज्ञ). Output is written so it
//! reads back to the same letters, with `_` between spellings that would
//! otherwise fuse.

mod config;
mod convert;
mod table;
mod trie;

pub use config::{parse_itrans_toml, ItransConfigError, Mapping, MappingKind};
pub use convert::ItransEngine;
pub use table::{default_toml, init_custom, ItransTable, SEPARATOR, VIRAMA};
