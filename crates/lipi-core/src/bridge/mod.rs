//! Romanization through a reference script.
//!
//! The romanization engine only knows Devanagari. Any other coordinated
//! script is first mapped onto Devanagari by block offset, handed to the
//! engine, and on the way back mapped from Devanagari onto the target block.

pub mod normalize;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::engine::{ConvertOptions, EngineError, RomanizationEngine, Scheme, UnrecognisedPolicy};
use crate::itrans::ItransEngine;
use crate::mapper::{transliterate, transliterate_with};
use crate::script::ScriptTable;

/// Script whose block the romanization engine is defined over.
pub const REFERENCE_SCRIPT: &str = "hi";

/// Identifier that selects ITRANS in [`convert`].
pub const ITRANS: &str = "itrans";

/// Engine options used on both legs: keep Unicode output and echo whatever
/// the engine cannot read.
const BRIDGE_OPTIONS: ConvertOptions = ConvertOptions {
    ascii_output: false,
    unrecognised: UnrecognisedPolicy::Echo,
};

/// Connects a script table and a romanization engine.
pub struct RomanizationBridge<'a, E: RomanizationEngine + ?Sized> {
    table: &'a ScriptTable,
    engine: &'a E,
    scheme: Scheme,
}

impl<'a, E: RomanizationEngine + ?Sized> RomanizationBridge<'a, E> {
    /// Bridge to ITRANS.
    pub fn new(table: &'a ScriptTable, engine: &'a E) -> Self {
        Self {
            table,
            engine,
            scheme: Scheme::Itrans,
        }
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Romanize `text` written in `script`.
    ///
    /// Text in an unknown script is returned unchanged. Errors only come from
    /// the engine.
    pub fn to_romanized(&self, text: &str, script: &str) -> Result<String, EngineError> {
        let Some(range) = self.table.range(script) else {
            debug!(script, "unknown script, returning input unchanged");
            return Ok(text.to_string());
        };
        let _span = debug_span!("to_romanized", script, scheme = self.scheme.name()).entered();

        let normalized = normalize::pre_romanize(text, range);
        let reference = transliterate_with(self.table, &normalized, script, REFERENCE_SCRIPT);
        self.engine
            .convert(&reference, Scheme::Devanagari, self.scheme, &BRIDGE_OPTIONS)
    }

    /// Convert romanized `text` into `script`.
    ///
    /// Chillus are not re-synthesised; Malayalam output keeps consonant +
    /// virama.
    pub fn from_romanized(&self, text: &str, script: &str) -> Result<String, EngineError> {
        if !self.table.contains(script) {
            debug!(script, "unknown script, returning input unchanged");
            return Ok(text.to_string());
        }
        let _span = debug_span!("from_romanized", script, scheme = self.scheme.name()).entered();

        let reference =
            self.engine
                .convert(text, self.scheme, Scheme::Devanagari, &BRIDGE_OPTIONS)?;
        Ok(transliterate_with(self.table, &reference, REFERENCE_SCRIPT, script))
    }
}

/// Romanize `text` in `script` to ITRANS using the global tables.
pub fn to_itrans(text: &str, script: &str) -> Result<String, EngineError> {
    let engine = ItransEngine::global();
    RomanizationBridge::new(ScriptTable::global(), &engine).to_romanized(text, script)
}

/// Convert ITRANS `text` into `script` using the global tables.
pub fn from_itrans(text: &str, script: &str) -> Result<String, EngineError> {
    let engine = ItransEngine::global();
    RomanizationBridge::new(ScriptTable::global(), &engine).from_romanized(text, script)
}

/// Convert between any two identifiers, where either side may be [`ITRANS`].
pub fn convert(text: &str, source: &str, target: &str) -> Result<String, EngineError> {
    if source == ITRANS {
        from_itrans(text, target)
    } else if target == ITRANS {
        to_itrans(text, source)
    } else {
        Ok(transliterate(text, source, target))
    }
}
