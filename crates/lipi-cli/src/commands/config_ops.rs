use std::fs;

use serde::Serialize;

use lipi_core::itrans;
use lipi_core::script::{self, CoordinatedRange, ScriptRange, ScriptTable};

#[derive(Serialize)]
struct ScriptListing<'a> {
    coordinated: CoordinatedRange,
    scripts: Vec<&'a ScriptRange>,
}

/// Install custom tables. Must run before any conversion touches the globals.
pub fn install_custom_tables(scripts: Option<&str>, itrans_file: Option<&str>) {
    if let Some(file) = scripts {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(script::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = itrans_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(itrans::init_custom(content), "Error in {file}: {}");
    }
}

fn format_scripts(table: &ScriptTable) -> String {
    let mut out = String::new();
    for r in table.scripts() {
        out.push_str(&format!(
            "{:<4} {:<12} U+{:04X}..U+{:04X}\n",
            r.id, r.block, r.start, r.end
        ));
    }
    out
}

pub fn scripts_list(json: bool) {
    let table = ScriptTable::global();
    if json {
        let listing = ScriptListing {
            coordinated: table.coordinated(),
            scripts: table.scripts().collect(),
        };
        let s = die!(serde_json::to_string_pretty(&listing), "Error: {}");
        println!("{s}");
    } else {
        print!("{}", format_scripts(table));
    }
}

pub fn scripts_export() {
    print!("{}", script::default_toml());
}

pub fn scripts_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(script::parse_custom_toml(&content), "Error: {}");
    let c = table.coordinated();
    println!(
        "OK: {} scripts, coordinated offsets 0x{:02X}..0x{:02X}",
        table.scripts().count(),
        c.start,
        c.end
    );
}

pub fn itrans_export() {
    print!("{}", itrans::default_toml());
}

pub fn itrans_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let mappings = die!(itrans::parse_itrans_toml(&content), "Error: {}");
    println!("OK: {} mappings", mappings.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_is_sorted_and_aligned() {
        let text = format_scripts(ScriptTable::global());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "as   Bengali      U+0980..U+09FF");
        assert!(lines.contains(&"ta   Tamil        U+0B80..U+0BFF"));
    }

    #[test]
    fn listing_serializes_to_json() {
        let table = ScriptTable::global();
        let listing = ScriptListing {
            coordinated: table.coordinated(),
            scripts: table.scripts().collect(),
        };
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["coordinated"]["start"], 0);
        assert_eq!(value["coordinated"]["end"], 0x6F);
        let hi = value["scripts"]
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["id"] == "hi")
            .unwrap();
        assert_eq!(hi["start"], 0x0900);
        assert_eq!(hi["block"], "Devanagari");
    }

    #[test]
    fn exported_defaults_validate() {
        assert!(script::parse_custom_toml(script::default_toml()).is_ok());
        assert!(itrans::parse_itrans_toml(itrans::default_toml()).is_ok());
    }
}
