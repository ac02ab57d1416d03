//! Filesystem facts recorded by the evidence cache.
//!
//! Read and parse failures are facts too: they are stored once and turned
//! into Fail verdicts by the criteria that depend on them.

use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Upper bound on bytes read from any single file.
pub const MAX_TEXT_BYTES: usize = 400_000;

/// Decoded contents of a text file.
#[derive(Debug)]
pub struct Text {
    pub raw: String,
    /// Lowercased copy used for case-insensitive needle matching.
    pub lower: String,
}

impl Text {
    fn new(raw: String) -> Self {
        let lower = raw.to_lowercase();
        Self { raw, lower }
    }

    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.lower.contains(&n.to_lowercase()))
    }

    pub fn contains_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|n| self.lower.contains(&n.to_lowercase()))
    }
}

#[derive(Debug, Clone)]
pub enum TextFact {
    Missing,
    Present(Arc<Text>),
    Unreadable(String),
}

impl TextFact {
    pub fn text(&self) -> Option<&Text> {
        match self {
            TextFact::Present(t) => Some(t),
            _ => None,
        }
    }
}

/// Result of parsing a JSON, YAML or TOML config file into a generic tree.
#[derive(Debug, Clone)]
pub enum ConfigFact {
    Missing,
    Parsed(Arc<serde_json::Value>),
    Malformed(String),
}

impl ConfigFact {
    pub fn value(&self) -> Option<&serde_json::Value> {
        match self {
            ConfigFact::Parsed(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

fn config_format(path: &Path) -> Option<ConfigFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "json" => Some(ConfigFormat::Json),
        "yml" | "yaml" => Some(ConfigFormat::Yaml),
        "toml" => Some(ConfigFormat::Toml),
        _ => None,
    }
}

/// Read at most [`MAX_TEXT_BYTES`] of a file, decoding lossily.
pub fn read_text(path: &Path) -> TextFact {
    match fs::read(path) {
        Ok(mut bytes) => {
            bytes.truncate(MAX_TEXT_BYTES);
            TextFact::Present(Arc::new(Text::new(
                String::from_utf8_lossy(&bytes).into_owned(),
            )))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => TextFact::Missing,
        Err(e) => TextFact::Unreadable(e.to_string()),
    }
}

/// Parse a config file from already-read text, choosing the format by
/// extension.
pub fn parse_config(path: &Path, text: &TextFact) -> ConfigFact {
    let content = match text {
        TextFact::Missing => return ConfigFact::Missing,
        TextFact::Unreadable(err) => return ConfigFact::Malformed(err.clone()),
        TextFact::Present(t) => &t.raw,
    };
    let parsed = match config_format(path) {
        Some(ConfigFormat::Json) => {
            serde_json::from_str::<serde_json::Value>(content).map_err(|e| e.to_string())
        }
        Some(ConfigFormat::Yaml) => {
            serde_yaml::from_str::<serde_json::Value>(content).map_err(|e| e.to_string())
        }
        Some(ConfigFormat::Toml) => {
            toml::from_str::<toml::Value>(content)
                .map_err(|e| e.to_string())
                .and_then(|v| serde_json::to_value(v).map_err(|e| e.to_string()))
        }
        None => Err(format!("unsupported config format: {}", path.display())),
    };
    match parsed {
        Ok(v) => ConfigFact::Parsed(Arc::new(v)),
        Err(e) => ConfigFact::Malformed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            read_text(&temp.path().join("nope.md")),
            TextFact::Missing
        ));
    }

    #[test]
    fn test_text_matching_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, "Run `Cargo Build` to compile").unwrap();
        let fact = read_text(&path);
        let text = fact.text().unwrap();
        assert!(text.contains_any(&["cargo build"]));
        assert!(text.contains_all(&["cargo", "compile"]));
        assert!(!text.contains_all(&["cargo", "deploy"]));
    }

    #[test]
    fn test_parse_each_format() {
        let temp = TempDir::new().unwrap();
        let cases = [
            ("package.json", r#"{"name": "web"}"#),
            ("config.yml", "name: web\n"),
            ("Cargo.toml", "[package]\nname = \"web\"\n"),
        ];
        for (file, body) in cases {
            let path = temp.path().join(file);
            fs::write(&path, body).unwrap();
            let fact = parse_config(&path, &read_text(&path));
            assert!(fact.value().is_some(), "{} should parse", file);
        }
    }

    #[test]
    fn test_malformed_config_is_recorded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        fs::write(&path, "{ \"name\": ").unwrap();
        assert!(matches!(
            parse_config(&path, &read_text(&path)),
            ConfigFact::Malformed(_)
        ));
    }
}
