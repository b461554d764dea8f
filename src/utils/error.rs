use crate::domain::schema::SchemaViolation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse {path} as JSON: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Schema violation: {message}")]
    SchemaViolation { message: String },

    #[error("Malformed birthday '{birthday}' for {surname} {name}: {reason}")]
    MalformedDate {
        surname: String,
        name: String,
        birthday: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Document,
    Input,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RegistryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::IoError(_) => ErrorCategory::Storage,
            RegistryError::ParseError { .. }
            | RegistryError::SerializationError(_)
            | RegistryError::SchemaViolation { .. } => ErrorCategory::Document,
            RegistryError::MalformedDate { .. } => ErrorCategory::Input,
            RegistryError::ConfigError { .. } | RegistryError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A stale document only costs the stale file, the run goes on.
            RegistryError::SchemaViolation { .. } => ErrorSeverity::Low,
            RegistryError::MalformedDate { .. } => ErrorSeverity::Medium,
            RegistryError::ParseError { .. }
            | RegistryError::ConfigError { .. }
            | RegistryError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RegistryError::IoError(_) | RegistryError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::IoError(e) => format!("Could not access the data file: {}", e),
            RegistryError::ParseError { path, .. } => {
                format!("The data file '{}' is not valid JSON", path)
            }
            RegistryError::SerializationError(e) => {
                format!("Could not encode the people list: {}", e)
            }
            RegistryError::SchemaViolation { message } => {
                format!("The data file does not look like a people list: {}", message)
            }
            RegistryError::MalformedDate {
                surname,
                name,
                birthday,
                ..
            } => format!(
                "Birthday '{}' of {} {} is not a valid DD.MM.YYYY date",
                birthday, surname, name
            ),
            RegistryError::ConfigError { field, message } => {
                format!("Configuration problem with '{}': {}", field, message)
            }
            RegistryError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {}: {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RegistryError::IoError(_) => "Check that the file and its directory are readable and writable",
            RegistryError::ParseError { .. } => {
                "Fix the JSON by hand or move the file away to start a fresh list"
            }
            RegistryError::SerializationError(_) => "Report this as a bug",
            RegistryError::SchemaViolation { .. } => {
                "The next 'add' will overwrite the file with a fresh list"
            }
            RegistryError::MalformedDate { .. } => {
                "Use the DD.MM.YYYY format, for example 15.03.1990"
            }
            RegistryError::ConfigError { .. } | RegistryError::InvalidConfigValueError { .. } => {
                "Check the configuration file passed with --config"
            }
        }
    }
}

impl From<SchemaViolation> for RegistryError {
    fn from(violation: SchemaViolation) -> Self {
        RegistryError::SchemaViolation {
            message: violation.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering_drives_exit_codes() {
        let schema = RegistryError::SchemaViolation {
            message: "x".to_string(),
        };
        let io = RegistryError::IoError(std::io::Error::other("disk full"));
        assert_eq!(schema.severity(), ErrorSeverity::Low);
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert!(schema.severity() < io.severity());
    }

    #[test]
    fn test_schema_violation_converts_with_location() {
        let err = RegistryError::from(SchemaViolation {
            path: "[0].birthday".to_string(),
            message: "\"15.03.1990\" is not of type 'array'".to_string(),
        });
        assert_eq!(err.category(), ErrorCategory::Document);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("[0].birthday"));
    }

    #[test]
    fn test_malformed_date_message_names_the_record() {
        let err = RegistryError::MalformedDate {
            surname: "Doe".to_string(),
            name: "Jane".to_string(),
            birthday: "31.02.1990".to_string(),
            reason: "day out of range".to_string(),
        };
        let message = err.user_friendly_message();
        assert!(message.contains("Doe Jane"));
        assert!(message.contains("31.02.1990"));
        assert_eq!(err.category(), ErrorCategory::Input);
    }
}
