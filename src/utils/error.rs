use thiserror::Error;

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Bundle processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Processing,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BundleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BundleError::IoError(_) | BundleError::WalkError(_) => ErrorCategory::Io,
            BundleError::SerializationError(_) | BundleError::TomlParseError(_) => {
                ErrorCategory::Serialization
            }
            BundleError::ConfigError { .. }
            | BundleError::InvalidConfigValueError { .. }
            | BundleError::MissingConfigError { .. } => ErrorCategory::Config,
            BundleError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 檔案系統錯誤無法重試，視為系統層級
            BundleError::IoError(_) | BundleError::WalkError(_) => ErrorSeverity::Critical,
            BundleError::SerializationError(_) => ErrorSeverity::Medium,
            BundleError::TomlParseError(_)
            | BundleError::ConfigError { .. }
            | BundleError::InvalidConfigValueError { .. }
            | BundleError::MissingConfigError { .. } => ErrorSeverity::High,
            BundleError::ProcessingError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BundleError::IoError(_) => {
                "Check that the root directory exists and is readable/writable".to_string()
            }
            BundleError::WalkError(_) => {
                "Check directory permissions under the documentation root".to_string()
            }
            BundleError::SerializationError(_) => {
                "Re-run with --verbose to see which manifest entry failed".to_string()
            }
            BundleError::TomlParseError(_) => {
                "Check the TOML configuration file syntax".to_string()
            }
            BundleError::ConfigError { .. }
            | BundleError::InvalidConfigValueError { .. }
            | BundleError::MissingConfigError { .. } => {
                "Fix the configuration value and try again".to_string()
            }
            BundleError::ProcessingError { .. } => {
                "Re-run with --verbose to see which file failed".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BundleError::IoError(e) => format!("File system operation failed: {}", e),
            BundleError::WalkError(e) => format!("Could not traverse the documentation tree: {}", e),
            BundleError::SerializationError(e) => format!("Could not write the manifest: {}", e),
            BundleError::TomlParseError(e) => format!("Configuration file is not valid TOML: {}", e),
            BundleError::ConfigError { message } => format!("Configuration problem: {}", message),
            BundleError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' has an invalid value '{}': {}", field, value, reason),
            BundleError::MissingConfigError { field } => {
                format!("Required configuration field '{}' is missing", field)
            }
            BundleError::ProcessingError { message } => {
                format!("Bundle assembly failed: {}", message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BundleError>;
