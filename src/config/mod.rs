pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::{
    core::ConfigProvider,
    domain::model::{GroupOrder, OutputFormat},
    utils::error::{GrouperError, Result},
    utils::validation::{validate_path, validate_paths, Validate},
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "anagram-grouper", version)]
#[command(about = "Group words into sets of anagrams")]
pub struct CliConfig {
    /// Words to group
    pub words: Vec<String>,

    /// Input files (.txt whitespace separated, .json string array, .csv first column)
    #[arg(short, long = "input", value_delimiter = ',')]
    pub input_files: Vec<String>,

    /// Also read whitespace separated words from stdin
    #[arg(long)]
    pub stdin: bool,

    #[arg(short, long, default_value = "./output")]
    pub output_path: String,

    /// Output formats: text, json, csv, tsv
    #[arg(short, long = "format", value_delimiter = ',', default_value = "text")]
    pub formats: Vec<OutputFormat>,

    /// Group order: first-seen, key, size
    #[arg(long, default_value = "first-seen")]
    pub order: GroupOrder,

    /// Bundle all outputs into groups.zip
    #[arg(long)]
    pub compress: bool,

    /// Print each group to stdout, one per line
    #[arg(long)]
    pub print: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per stage")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn words(&self) -> &[String] {
        &self.words
    }

    fn input_files(&self) -> &[String] {
        &self.input_files
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> Vec<OutputFormat> {
        self.formats.clone()
    }

    fn group_order(&self) -> GroupOrder {
        self.order
    }

    fn compress(&self) -> bool {
        self.compress
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_paths("input", &self.input_files)?;

        if self.formats.is_empty() {
            return Err(GrouperError::MissingConfigError {
                field: "format".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_defaults() {
        let config = CliConfig::parse_from(["anagram-grouper", "eat", "tea"]);

        assert_eq!(config.words, vec!["eat", "tea"]);
        assert_eq!(config.output_path, "./output");
        assert_eq!(config.formats, vec![OutputFormat::Text]);
        assert_eq!(config.order, GroupOrder::FirstSeen);
        assert!(!config.compress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_cli_options() {
        let config = CliConfig::parse_from([
            "anagram-grouper",
            "--input",
            "a.txt,b.json",
            "--format",
            "json,csv",
            "--order",
            "size",
            "--compress",
        ]);

        assert!(config.words.is_empty());
        assert_eq!(config.input_files, vec!["a.txt", "b.json"]);
        assert_eq!(config.output_formats(), vec![OutputFormat::Json, OutputFormat::Csv]);
        assert_eq!(config.group_order(), GroupOrder::Size);
        assert!(config.compress());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let parsed = CliConfig::try_parse_from(["anagram-grouper", "--format", "xml"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validate_rejects_empty_output_path() {
        let config = CliConfig::parse_from(["anagram-grouper", "--output-path", ""]);
        assert!(config.validate().is_err());
    }
}
