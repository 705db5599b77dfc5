//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation can live
//! in a config file:
//!
//! ```toml
//! # biis.toml
//! [decode]
//! strict = true
//! trim_text = false
//! buffer_size = 65536
//! key_figures = ["MarketValue", "CapitalizationRate"]
//!
//! [output]
//! format = "summary"
//! pretty = true
//! ```
//!
//! Command-line flags take precedence over the file.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;

use biis_xml::biis::{DecodeOptions, DispatchTable};

/// Root configuration structure for biis.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Decoder settings.
    #[serde(default)]
    pub decode: DecodeConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for the decode pass.
#[derive(Debug, Default, Deserialize)]
pub struct DecodeConfig {
    /// Fail on the first conversion error instead of keeping a partial result.
    pub strict: Option<bool>,

    /// Trim whitespace around element text.
    pub trim_text: Option<bool>,

    /// Capacity of the buffered file reader in bytes.
    pub buffer_size: Option<usize>,

    /// Leaf names under `ValuationResults` to collect as key figures.
    #[serde(default)]
    pub key_figures: Vec<String>,
}

/// Configuration for how results are printed.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Output format.
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
}

/// How a decoded container is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The container as JSON
    #[default]
    Json,
    /// A human-readable report
    Summary,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reader settings with unset values taken from the defaults.
    pub fn decode_options(&self) -> DecodeOptions {
        let defaults = DecodeOptions::default();
        DecodeOptions {
            trim_text: self.decode.trim_text.unwrap_or(defaults.trim_text),
            buffer_size: self.decode.buffer_size.unwrap_or(defaults.buffer_size),
        }
    }

    /// The standard dispatch table extended with the configured key figures.
    pub fn dispatch_table(&self) -> DispatchTable {
        self.decode
            .key_figures
            .iter()
            .fold(DispatchTable::standard(), |table, leaf| table.with_key_figure(leaf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [decode]
            strict = true
            trim_text = true
            buffer_size = 8192
            key_figures = ["MarketValue"]

            [output]
            format = "summary"
            pretty = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.decode.strict, Some(true));
        assert_eq!(config.decode.trim_text, Some(true));
        assert_eq!(config.decode.buffer_size, Some(8192));
        assert_eq!(config.decode.key_figures, vec!["MarketValue".to_string()]);
        assert_eq!(config.output.format, Some(OutputFormat::Summary));
        assert_eq!(config.output.pretty, Some(false));

        let options = config.decode_options();
        assert!(options.trim_text);
        assert_eq!(options.buffer_size, 8192);
        assert_eq!(config.dispatch_table().len(), DispatchTable::standard().len() + 1);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [output]
            format = "json"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(config.decode.strict, None);
        assert_eq!(config.decode_options(), DecodeOptions::default());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.output.format, None);
        assert!(config.decode.key_figures.is_empty());
        assert_eq!(config.dispatch_table(), DispatchTable::standard());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Config::from_str("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[decode]\nstrict = true").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.decode.strict, Some(true));

        assert!(Config::load(None).unwrap().decode.strict.is_none());
        assert!(Config::from_file(Path::new("/nonexistent/biis.toml")).is_err());
    }
}
