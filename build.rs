use std::fs;

const DEFAULT_CONFIG: &str = "src/default_config.toml";

// Every key `Config::compiled_default` falls back on.
const REQUIRED_KEYS: &[(&str, &str)] = &[
    ("paths", "static_dir"),
    ("paths", "content_dir"),
    ("paths", "template"),
    ("paths", "output_dir"),
    ("site", "base_path"),
];

fn main() {
    println!("cargo:rerun-if-changed={DEFAULT_CONFIG}");

    let content = fs::read_to_string(DEFAULT_CONFIG)
        .unwrap_or_else(|e| panic!("Failed to read {DEFAULT_CONFIG}: {e}"));
    let table: toml::Table = content
        .parse()
        .unwrap_or_else(|e| panic!("Invalid {DEFAULT_CONFIG}: {e}"));

    for (section, key) in REQUIRED_KEYS {
        let value = table
            .get(*section)
            .and_then(|s| s.get(*key))
            .unwrap_or_else(|| panic!("{DEFAULT_CONFIG} is missing [{section}] {key}"));
        if !value.is_str() {
            panic!("{DEFAULT_CONFIG}: [{section}] {key} must be a string");
        }
    }

    let base_path = table["site"]["base_path"].as_str().unwrap_or_default();
    if !base_path.starts_with('/') || !base_path.ends_with('/') {
        panic!("{DEFAULT_CONFIG}: site.base_path must start and end with '/', got {base_path:?}");
    }
}
