use crate::domain::model::OutputFormat;
use crate::utils::error::{GrouperError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GrouperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GrouperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_paths(field_name: &str, paths: &[String]) -> Result<()> {
    for path in paths {
        validate_path(field_name, path)?;
    }
    Ok(())
}

/// 檢查輸出格式名稱，並轉成 [`OutputFormat`]
pub fn validate_formats(field_name: &str, formats: &[String]) -> Result<Vec<OutputFormat>> {
    if formats.is_empty() {
        return Err(GrouperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one output format is required".to_string(),
        });
    }

    formats
        .iter()
        .map(|format| {
            format
                .parse::<OutputFormat>()
                .map_err(|reason| GrouperError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: format.clone(),
                    reason,
                })
        })
        .collect()
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GrouperError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_formats() {
        let formats = vec!["json".to_string(), "CSV".to_string()];
        let parsed = validate_formats("output.formats", &formats).unwrap();
        assert_eq!(parsed, vec![OutputFormat::Json, OutputFormat::Csv]);

        assert!(validate_formats("output.formats", &[]).is_err());

        let invalid = vec!["xml".to_string()];
        let err = validate_formats("output.formats", &invalid).unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("job.name", "nightly").is_ok());
        assert!(validate_non_empty_string("job.name", "   ").is_err());
    }
}
