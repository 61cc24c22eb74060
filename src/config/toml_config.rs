use crate::core::ConfigProvider;
use crate::domain::model::{GroupOrder, OutputFormat};
use crate::utils::error::{GrouperError, Result};
use crate::utils::validation::{
    validate_formats, validate_non_empty_string, validate_path, validate_paths, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: JobConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub grouping: GroupingConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub words: Option<Vec<String>>,
    pub files: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupingConfig {
    pub order: Option<GroupOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    pub formats: Vec<String>,
    pub compress: Option<bool>,
    pub print: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GrouperError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GrouperError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WORD_LIST})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GrouperError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("job.name", &self.job.name)?;
        validate_path("output.output_path", &self.output.output_path)?;
        validate_formats("output.formats", &self.output.formats)?;

        if let Some(files) = &self.input.files {
            validate_paths("input.files", files)?;
        }

        Ok(())
    }

    pub fn print_groups(&self) -> bool {
        self.output.print.unwrap_or(false)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn words(&self) -> &[String] {
        self.input.words.as_deref().unwrap_or(&[])
    }

    fn input_files(&self) -> &[String] {
        self.input.files.as_deref().unwrap_or(&[])
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> Vec<OutputFormat> {
        // 格式已在 validate_config 檢查過，這裡略過無法解析的項目
        self.output
            .formats
            .iter()
            .filter_map(|f| f.parse().ok())
            .collect()
    }

    fn group_order(&self) -> GroupOrder {
        self.grouping.order.unwrap_or_default()
    }

    fn compress(&self) -> bool {
        self.output.compress.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[job]
name = "test-job"
description = "Test job"
version = "1.0.0"

[input]
words = ["eat", "tea", "tan"]
files = ["extra.txt"]

[grouping]
order = "size"

[output]
output_path = "./test-output"
formats = ["text", "json"]
compress = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.job.name, "test-job");
        assert_eq!(config.words(), ["eat", "tea", "tan"]);
        assert_eq!(config.input_files(), ["extra.txt"]);
        assert_eq!(config.group_order(), GroupOrder::Size);
        assert_eq!(
            config.output_formats(),
            vec![OutputFormat::Text, OutputFormat::Json]
        );
        assert!(config.compress());
        assert!(!config.print_groups());
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let toml_content = r#"
[job]
name = "minimal"

[output]
output_path = "./output"
formats = ["csv"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.words().is_empty());
        assert!(config.input_files().is_empty());
        assert_eq!(config.group_order(), GroupOrder::FirstSeen);
        assert!(!config.compress());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GROUPER_TEST_OUTPUT", "/tmp/grouper-out");

        let toml_content = r#"
[job]
name = "env"

[output]
output_path = "${GROUPER_TEST_OUTPUT}"
formats = ["text"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/tmp/grouper-out");

        std::env::remove_var("GROUPER_TEST_OUTPUT");
    }

    #[test]
    fn test_unset_env_var_is_left_alone() {
        let toml_content = r#"
[job]
name = "env"

[output]
output_path = "${GROUPER_TEST_NEVER_SET}"
formats = ["text"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "${GROUPER_TEST_NEVER_SET}");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[job]
name = "bad"

[output]
output_path = "./output"
formats = ["text", "xml"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[job\nname = ").unwrap_err();
        assert!(matches!(err, GrouperError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[job]
name = "file-test"

[output]
output_path = "./output"
formats = ["tsv"]

[monitoring]
enabled = true
json_logs = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.job.name, "file-test");
        assert!(config.monitoring_enabled());
        assert!(config.json_logs());
    }
}
