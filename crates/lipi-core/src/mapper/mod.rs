//! Script-to-script transliteration by coordinated block offsets.
//!
//! The Unicode blocks of the Brahmic scripts share a layout: offset 0x15 is
//! KA in Devanagari, Bengali, Tamil, Malayalam and the rest. Converting a
//! character means subtracting the source block origin and adding the target
//! one. Offsets outside the coordinated range (digits in some blocks,
//! script-specific letters) are copied unchanged.

mod rules;


use tracing::{debug, debug_span};

use crate::script::{CoordinatedRange, ScriptRange, ScriptTable};

pub use rules::{
    OffsetRule, TamilPlosiveCollapse, GRID_COLUMNS, PLOSIVE_GRID_END, PLOSIVE_GRID_START,
    TAMIL_SCRIPT,
};

/// Transliterate `text` from `source` to `target` using the global script table.
pub fn transliterate(text: &str, source: &str, target: &str) -> String {
    transliterate_with(ScriptTable::global(), text, source, target)
}

/// Transliterate `text` from `source` to `target` using `table`.
///
/// When either identifier is missing from the table the whole input is
/// returned unchanged; no partial conversion is attempted. Output always has
/// the same number of code points as the input.
pub fn transliterate_with(table: &ScriptTable, text: &str, source: &str, target: &str) -> String {
    transliterate_with_rules(table, rules::DEFAULT_RULES, text, source, target)
}

/// Like [`transliterate_with`], with an explicit set of offset rules.
pub fn transliterate_with_rules(
    table: &ScriptTable,
    rules: &[&dyn OffsetRule],
    text: &str,
    source: &str,
    target: &str,
) -> String {
    let (Some(src), Some(tgt)) = (table.range(source), table.range(target)) else {
        debug!(source, target, "unknown script, returning input unchanged");
        return text.to_string();
    };
    let _span = debug_span!("transliterate", source, target, bytes = text.len()).entered();

    let active: Vec<&dyn OffsetRule> = rules
        .iter()
        .copied()
        .filter(|rule| rule.applies_to(tgt))
        .collect();
    let coordinated = table.coordinated();

    text.chars()
        .map(|c| map_char(c, src, tgt, coordinated, &active))
        .collect()
}

fn map_char(
    c: char,
    src: &ScriptRange,
    tgt: &ScriptRange,
    coordinated: CoordinatedRange,
    rules: &[&dyn OffsetRule],
) -> char {
    let Some(offset) = src.offset_of(c).filter(|&o| coordinated.contains(o)) else {
        return c;
    };
    let offset = rules.iter().fold(offset, |o, rule| rule.adjust(o));
    tgt.char_at(offset).unwrap_or(c)
}
