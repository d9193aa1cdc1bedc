use thiserror::Error;

#[derive(Error, Debug)]
pub enum XalError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlDeError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error("Unsupported format: {value}")]
    UnsupportedFormat { value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown xAL record: {name}")]
    UnknownRecord { name: String },
}

impl XalError {
    /// Short message for the terminal, without the wrapped error chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            XalError::IoError(e) => format!("Could not read or write the file: {}", e),
            XalError::JsonError(e) => format!("The JSON document is not a valid xAL tree: {}", e),
            XalError::TomlDeError(e) => format!("The TOML document is not a valid xAL tree: {}", e),
            XalError::TomlSerError(e) => format!("The tree could not be written as TOML: {}", e),
            XalError::UnsupportedFormat { value } => {
                format!("'{}' is not a supported document format", value)
            }
            XalError::ConfigError { message } => format!("Configuration problem: {}", message),
            XalError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            XalError::UnknownRecord { name } => format!("There is no xAL record named '{}'", name),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            XalError::IoError(_) => "Check that the path exists and is readable/writable",
            XalError::JsonError(_) | XalError::TomlDeError(_) => {
                "Check the document against the field names listed by `xal schema <RECORD>`"
            }
            XalError::TomlSerError(_) => "Try writing the document as JSON instead",
            XalError::UnsupportedFormat { .. } => "Use a .json or .toml file, or pass --format",
            XalError::ConfigError { .. } | XalError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line arguments"
            }
            XalError::UnknownRecord { .. } => "Run `xal schema` to list every record",
        }
    }
}

pub type Result<T> = std::result::Result<T, XalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_message_names_the_field() {
        let err = XalError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "Unsupported format".to_string(),
        };

        assert!(err.user_friendly_message().contains("output.format"));
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: XalError = io.into();
        assert!(matches!(err, XalError::IoError(_)));
        assert!(!err.recovery_suggestion().is_empty());
    }
}
