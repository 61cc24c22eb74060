use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrouperError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Input error in '{source_name}': {message}")]
    InputError {
        source_name: String,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GrouperError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GrouperError::ConfigValidationError { .. }
            | GrouperError::InvalidConfigValueError { .. }
            | GrouperError::MissingConfigError { .. } => ErrorCategory::Configuration,
            GrouperError::InputError { .. } => ErrorCategory::Input,
            GrouperError::ZipError(_)
            | GrouperError::CsvError(_)
            | GrouperError::SerializationError(_) => ErrorCategory::Output,
            GrouperError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GrouperError::ConfigValidationError { field, .. }
            | GrouperError::InvalidConfigValueError { field, .. } => {
                format!("Check the value of '{}' in your configuration", field)
            }
            GrouperError::MissingConfigError { field } => {
                format!("Add the '{}' setting to your configuration", field)
            }
            GrouperError::InputError { source_name, .. } => format!(
                "Make sure '{}' exists and is plain text, a JSON string array or CSV",
                source_name
            ),
            GrouperError::CsvError(_) | GrouperError::SerializationError(_) => {
                "Retry with a different --format".to_string()
            }
            GrouperError::ZipError(_) => {
                "Retry without --compress or check free disk space".to_string()
            }
            GrouperError::IoError(_) => {
                "Check file permissions and that the output path is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Could not read input: {}", self),
            ErrorCategory::Output => format!("Could not write output: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    /// 依嚴重程度決定的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, GrouperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = GrouperError::MissingConfigError {
            field: "output.output_path".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("output.output_path"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: GrouperError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().starts_with("System error"));
    }
}
