//! Unicode block table for the coordinated Brahmic scripts.
//!
//! Maps a script identifier (`hi`, `ta`, `ml`, ...) to the bounds of its
//! Unicode block, and carries the coordinated offset range that every block
//! shares. Loaded from TOML, with an embedded default.

mod config;
mod table;

pub use config::{parse_scripts_toml, ScriptConfigError};
pub use table::{
    default_toml, init_custom, parse_custom_toml, CoordinatedRange, ScriptRange, ScriptTable,
};
