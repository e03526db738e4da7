// Engine settings, loadable from a JSON config file
use crate::error::EngineError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Defaults: pipe-delimited files grouped by `PROVINCIA`, summing
/// `TOTAL_VENTAS`. These are configuration, not per-call parameters;
/// queries always run with the settings the analyzer was built with.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub delimiter: char,
    pub group_column: String,
    pub amount_column: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            delimiter: '|',
            group_column: "PROVINCIA".to_string(),
            amount_column: "TOTAL_VENTAS".to_string(),
        }
    }
}

impl EngineSettings {
    /// Loads settings from a JSON file; absent keys fall back to the
    /// defaults above.
    pub fn from_json_file(path: &Path) -> Result<Self, EngineError> {
        let raw = fs::read_to_string(path)?;
        let settings: EngineSettings = serde_json::from_str(&raw)
            .map_err(|e| EngineError::ConfigError(format!("Invalid settings file '{}': {}", path.display(), e)))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), EngineError> {
        if !self.delimiter.is_ascii() {
            return Err(EngineError::ConfigError(format!(
                "Delimiter '{}' must be a single ASCII character",
                self.delimiter
            )));
        }
        if self.group_column.is_empty() || self.amount_column.is_empty() {
            return Err(EngineError::ConfigError(
                "Column names must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    // The csv reader wants the delimiter as a byte.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_the_documented_constants() {
        let settings = EngineSettings::default();
        assert_eq!(settings.delimiter, '|');
        assert_eq!(settings.group_column, "PROVINCIA");
        assert_eq!(settings.amount_column, "TOTAL_VENTAS");
    }

    #[test]
    fn json_file_overrides_defaults_per_key() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "delimiter": ";", "amount_column": "MONTO" }}"#).unwrap();
        let settings = EngineSettings::from_json_file(file.path()).unwrap();
        assert_eq!(settings.delimiter, ';');
        assert_eq!(settings.group_column, "PROVINCIA"); // untouched key keeps its default
        assert_eq!(settings.amount_column, "MONTO");
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();
        let err = EngineSettings::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "delimiter": "¦" }}"#).unwrap();
        let err = EngineSettings::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn missing_settings_file_is_an_io_error() {
        let err = EngineSettings::from_json_file(Path::new("no_such_settings.json")).unwrap_err();
        assert!(matches!(err, EngineError::IoError { .. }));
    }
}
