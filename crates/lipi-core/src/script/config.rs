use std::collections::BTreeMap;

use serde::Deserialize;

use super::table::{CoordinatedRange, ScriptRange, ScriptTable};

const MAX_SCALAR: u32 = 0x10FFFF;
const SURROGATES: (u32, u32) = (0xD800, 0xDFFF);

#[derive(Deserialize)]
struct ScriptConfig {
    coordinated: RawRange,
    scripts: BTreeMap<String, RawScript>,
}

#[derive(Deserialize)]
struct RawRange {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RawScript {
    block: String,
    start: u32,
    end: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[scripts] table is empty")]
    Empty,
    #[error("invalid script id: {0:?}")]
    InvalidId(String),
    #[error("invalid range for {field}: {reason}")]
    InvalidRange { field: String, reason: String },
    #[error("script table has no {0:?} entry; romanization maps through it")]
    MissingReference(&'static str),
    #[error("script table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a validated [`ScriptTable`].
pub fn parse_scripts_toml(toml_str: &str) -> Result<ScriptTable, ScriptConfigError> {
    let config: ScriptConfig =
        toml::from_str(toml_str).map_err(|e| ScriptConfigError::Parse(e.to_string()))?;

    let coordinated = CoordinatedRange {
        start: config.coordinated.start,
        end: config.coordinated.end,
    };
    if coordinated.start > coordinated.end {
        return Err(invalid("coordinated", "start must not exceed end"));
    }

    if config.scripts.is_empty() {
        return Err(ScriptConfigError::Empty);
    }

    let mut scripts = BTreeMap::new();
    for (id, raw) in config.scripts {
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ScriptConfigError::InvalidId(id));
        }
        validate_block(&id, &raw, coordinated)?;
        let range = ScriptRange {
            id: id.clone(),
            block: raw.block,
            start: raw.start,
            end: raw.end,
        };
        scripts.insert(id, range);
    }

    Ok(ScriptTable::new(coordinated, scripts))
}

fn validate_block(
    id: &str,
    raw: &RawScript,
    coordinated: CoordinatedRange,
) -> Result<(), ScriptConfigError> {
    let field = format!("scripts.{id}");
    if raw.start > raw.end {
        return Err(invalid(&field, "start must not exceed end"));
    }
    if raw.end > MAX_SCALAR {
        return Err(invalid(&field, "block lies outside the Unicode code space"));
    }
    if raw.start <= SURROGATES.1 && raw.end >= SURROGATES.0 {
        return Err(invalid(&field, "block overlaps the surrogate range"));
    }
    // Every coordinated offset must land inside the block.
    if raw.end - raw.start < coordinated.end {
        return Err(invalid(&field, "block is narrower than the coordinated range"));
    }
    Ok(())
}

fn invalid(field: &str, reason: &str) -> ScriptConfigError {
    ScriptConfigError::InvalidRange {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
