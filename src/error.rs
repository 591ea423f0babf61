use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type ParseResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading, editing and saving configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be opened, read or written
    #[error("I/O error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Line matched a structural pattern but could not be split
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Value segment is not a valid number for its kind
    #[error("Invalid number '{value}': {reason}")]
    InvalidNumber { value: String, reason: String },

    /// New value would not read back as the same setting
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    /// Typed access does not match the entry's kind
    #[error("Type error for '{key}': expected {expected}, found {found}")]
    TypeError {
        key: String,
        expected: String,
        found: String,
    },

    /// Configuration key not found
    #[error("Configuration key '{key}' not found")]
    KeyNotFound { key: String },

    /// No companion settings file next to the profile
    #[error("No '{stem}.{extension}' settings file in '{}'", dir.display())]
    SettingsFileNotFound {
        dir: PathBuf,
        stem: String,
        extension: String,
    },

    /// Custom error with message
    #[error("{message}")]
    Custom { message: String },
}

impl ConfigError {
    /// Create an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        ConfigError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(value: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidNumber {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a type error
    pub fn type_error(
        key: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        ConfigError::TypeError {
            key: key.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a key not found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        ConfigError::KeyNotFound { key: key.into() }
    }

    /// Create a missing settings file error
    pub fn settings_file_not_found(
        dir: impl Into<PathBuf>,
        stem: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        ConfigError::SettingsFileNotFound {
            dir: dir.into(),
            stem: stem.into(),
            extension: extension.into(),
        }
    }

    /// Create a custom error
    pub fn custom(message: impl Into<String>) -> Self {
        ConfigError::Custom {
            message: message.into(),
        }
    }

    /// Rewrite the line number of a parse error; other variants are returned untouched
    pub fn at_line(self, line: usize) -> Self {
        match self {
            ConfigError::Parse { message, .. } => ConfigError::Parse { line, message },
            other => other,
        }
    }
}

impl<R: pest::RuleType> From<pest::error::Error<R>> for ConfigError {
    fn from(err: pest::error::Error<R>) -> Self {
        let line = match err.line_col {
            pest::error::LineColLocation::Pos((line, _)) => line,
            pest::error::LineColLocation::Span((line, _), _) => line,
        };

        ConfigError::Parse {
            line,
            message: err.variant.to_string(),
        }
    }
}
