use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Persistence error: {message}")]
    PersistenceError { message: String },

    #[error("Contract violation by '{subject}': expected {expected}, found {found}")]
    ContractViolation {
        subject: String,
        expected: String,
        found: String,
    },

    #[error("'{implementor}' cannot {capability}")]
    Unsupported {
        implementor: String,
        capability: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::ContractViolation { .. } | DemoError::Unsupported { .. } => {
                ErrorSeverity::Low
            }
            DemoError::ConfigError { .. } | DemoError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            DemoError::PersistenceError { .. }
            | DemoError::SerializationError(_)
            | DemoError::CsvError(_) => ErrorSeverity::High,
            DemoError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that the output path is writable",
            DemoError::SerializationError(_) | DemoError::CsvError(_) => {
                "Try the plain text format with --format text"
            }
            DemoError::ConfigError { .. } | DemoError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or run without --config to use the built-in samples"
            }
            DemoError::PersistenceError { .. } => "Check the user store collaborator",
            DemoError::ContractViolation { .. } => {
                "A subtype changed the result shape of an inherited operation"
            }
            DemoError::Unsupported { .. } => {
                "Split the capability so implementors only provide what they use"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not read or write a file: {}", e),
            DemoError::ConfigError { message } => format!("Configuration problem: {}", message),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
