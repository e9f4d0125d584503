use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Serialize;

use super::config::{parse_scripts_toml, ScriptConfigError};
use crate::bridge::REFERENCE_SCRIPT;

pub(super) const DEFAULT_SCRIPTS_TOML: &str = include_str!("default_scripts.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `ScriptTable::global()` call.
pub fn init_custom(toml_content: String) -> Result<(), ScriptConfigError> {
    // Validate eagerly
    parse_custom_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| ScriptConfigError::AlreadyInitialized)
}

/// Parse a replacement for the global table. Unlike [`parse_scripts_toml`],
/// the table must contain the script romanization pivots through.
pub fn parse_custom_toml(toml_str: &str) -> Result<ScriptTable, ScriptConfigError> {
    let table = parse_scripts_toml(toml_str)?;
    if !table.contains(REFERENCE_SCRIPT) {
        return Err(ScriptConfigError::MissingReference(REFERENCE_SCRIPT));
    }
    Ok(table)
}

/// Returns the embedded default script table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_SCRIPTS_TOML
}

/// Inclusive range of block offsets shared by every coordinated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoordinatedRange {
    pub start: u32,
    pub end: u32,
}

impl CoordinatedRange {
    pub fn contains(&self, offset: u32) -> bool {
        (self.start..=self.end).contains(&offset)
    }
}

/// Unicode block assigned to one script identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptRange {
    pub id: String,
    /// Unicode block name, e.g. "Devanagari". Shared by ids that use one block.
    pub block: String,
    /// Block origin: the code point at offset 0.
    pub start: u32,
    pub end: u32,
}

impl ScriptRange {
    /// Offset of `c` from the block origin, or `None` when `c` lies below it.
    pub fn offset_of(&self, c: char) -> Option<u32> {
        (c as u32).checked_sub(self.start)
    }

    /// Code point at `offset` within this block.
    pub fn char_at(&self, offset: u32) -> Option<char> {
        self.start.checked_add(offset).and_then(char::from_u32)
    }
}

/// Read-only lookup from script identifier to Unicode block.
#[derive(Debug, Clone)]
pub struct ScriptTable {
    coordinated: CoordinatedRange,
    scripts: BTreeMap<String, ScriptRange>,
}

impl ScriptTable {
    pub(super) fn new(
        coordinated: CoordinatedRange,
        scripts: BTreeMap<String, ScriptRange>,
    ) -> Self {
        Self {
            coordinated,
            scripts,
        }
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static ScriptTable {
        static INSTANCE: OnceLock<ScriptTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_SCRIPTS_TOML);
            parse_scripts_toml(toml_str).expect("script table TOML must be valid")
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.scripts.contains_key(id)
    }

    pub fn range(&self, id: &str) -> Option<&ScriptRange> {
        self.scripts.get(id)
    }

    pub fn origin(&self, id: &str) -> Option<u32> {
        self.scripts.get(id).map(|r| r.start)
    }

    pub fn coordinated(&self) -> CoordinatedRange {
        self.coordinated
    }

    /// All scripts, sorted by identifier.
    pub fn scripts(&self) -> impl Iterator<Item = &ScriptRange> {
        self.scripts.values()
    }
}
