//! Settings of the interactive calculator, read from a sectioned document (see [`super::task_parser`])
use super::task_parser::{DocumentMap, Value, parse_document_as};
use log::warn;
use simplelog::LevelFilter;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(String),
    #[error("loglevel must be off, none, error, warn, info, debug or trace, got '{0}'")]
    UnknownLogLevel(String),
    #[error("invalid value '{value}' for key '{key}'")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalcConfig {
    /// None or "off"/"none" disables logging
    pub loglevel: Option<String>,
    /// also write the log to log_<date>_<time>.txt
    pub log_to_file: bool,
    /// number of decimals of printed results; None prints the shortest exact form
    pub precision: Option<usize>,
}

impl Default for CalcConfig {
    fn default() -> Self {
        CalcConfig {
            loglevel: Some("warn".to_string()),
            log_to_file: false,
            precision: None,
        }
    }
}

fn single_value<'a>(key: &str, values: &'a [Value]) -> Result<&'a Value, ConfigError> {
    match values {
        [value] => Ok(value),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

fn invalid(key: &str, value: &Value) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

impl CalcConfig {
    pub fn from_document(document: &DocumentMap) -> Result<CalcConfig, ConfigError> {
        let mut config = CalcConfig::default();
        for (title, section) in document {
            for (key, values) in section {
                match (title.as_str(), key.as_str()) {
                    ("logging", "loglevel") => {
                        let value = single_value(key, values)?;
                        let level = value.as_string().ok_or_else(|| invalid(key, value))?;
                        config.loglevel = Some(level.to_lowercase());
                    }
                    ("logging", "log_to_file") => {
                        let value = single_value(key, values)?;
                        config.log_to_file =
                            value.as_boolean().ok_or_else(|| invalid(key, value))?;
                    }
                    ("output", "precision") => {
                        let value = single_value(key, values)?;
                        let precision = value
                            .as_integer()
                            .filter(|p| *p >= 0)
                            .ok_or_else(|| invalid(key, value))?;
                        config.precision = Some(precision as usize);
                    }
                    _ => warn!("unknown config entry {}.{} ignored", title, key),
                }
            }
        }
        // fail early on a bad level rather than when the logger is set up
        config.level_filter()?;
        Ok(config)
    }

    pub fn from_text(input: &str) -> Result<CalcConfig, ConfigError> {
        let document = parse_document_as(input).map_err(ConfigError::Parse)?;
        CalcConfig::from_document(&document)
    }

    pub fn from_file(path: &Path) -> Result<CalcConfig, ConfigError> {
        let content = fs::read_to_string(path)?;
        CalcConfig::from_text(&content)
    }

    /// None when logging is switched off
    pub fn level_filter(&self) -> Result<Option<LevelFilter>, ConfigError> {
        let Some(level) = self.loglevel.as_deref() else {
            return Ok(None);
        };
        let filter = match level {
            "off" | "none" => return Ok(None),
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            other => return Err(ConfigError::UnknownLogLevel(other.to_string())),
        };
        Ok(Some(filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CalcConfig::default();
        assert_eq!(config.level_filter().unwrap(), Some(LevelFilter::Warn));
        assert!(!config.log_to_file);
        assert_eq!(config.precision, None);
        assert_eq!(CalcConfig::from_text("").unwrap(), config);
    }

    #[test]
    fn test_full_config() {
        let input = "logging\nloglevel: DEBUG\nlog_to_file: true\noutput\nprecision: 4";
        let config = CalcConfig::from_text(input).unwrap();
        assert_eq!(config.loglevel.as_deref(), Some("debug"));
        assert_eq!(config.level_filter().unwrap(), Some(LevelFilter::Debug));
        assert!(config.log_to_file);
        assert_eq!(config.precision, Some(4));
    }

    #[test]
    fn test_logging_off() {
        let config = CalcConfig::from_text("logging\nloglevel: off").unwrap();
        assert_eq!(config.level_filter().unwrap(), None);
        let config = CalcConfig {
            loglevel: None,
            ..CalcConfig::default()
        };
        assert_eq!(config.level_filter().unwrap(), None);
    }

    #[test]
    fn test_unknown_entries_are_ignored() {
        let config = CalcConfig::from_text("plots\ncolor: red\noutput\nwidth: 3").unwrap();
        assert_eq!(config, CalcConfig::default());
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            CalcConfig::from_text("logging\nloglevel: loud"),
            Err(ConfigError::UnknownLogLevel(level)) if level == "loud"
        ));
        assert!(matches!(
            CalcConfig::from_text("output\nprecision: -2"),
            Err(ConfigError::InvalidValue { key, .. }) if key == "precision"
        ));
        assert!(matches!(
            CalcConfig::from_text("output\nprecision: 2, 3"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            CalcConfig::from_text("logging\nlog_to_file: 1"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            CalcConfig::from_text("logging"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CalcConfig::from_file(Path::new("/definitely/not/here.cfg")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# calculator").unwrap();
        writeln!(file, "output").unwrap();
        writeln!(file, "precision: 2").unwrap();
        let config = CalcConfig::from_file(file.path()).unwrap();
        assert_eq!(config.precision, Some(2));
    }
}
