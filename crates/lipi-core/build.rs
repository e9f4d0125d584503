fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/script/default_scripts.toml",
        include_str!("src/script/default_scripts.toml"),
    );
    validate_toml(
        "src/itrans/default_itrans.toml",
        include_str!("src/itrans/default_itrans.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
