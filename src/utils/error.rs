use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value} ({reason})")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid event: {reason}")]
    InvalidEvent { reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Persistence error: {message}")]
    PersistenceError { message: String },

    #[error("Calculation error: {message}")]
    CalculationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::MissingField { .. }
            | AppError::InvalidField { .. }
            | AppError::InvalidEvent { .. }
            | AppError::SerializationError(_) => ErrorCategory::Input,
            AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::TomlError(_) => ErrorCategory::Configuration,
            AppError::PersistenceError { .. } | AppError::CalculationError { .. } => {
                ErrorCategory::Processing
            }
            AppError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            // 持久化失敗通常可以重試
            ErrorCategory::Processing => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::MissingField { field } => {
                format!("Include a numeric '{}' field in the event", field)
            }
            AppError::InvalidField { field, .. } => {
                format!("Make sure '{}' is a JSON number, e.g. {{\"{}\": 4}}", field, field)
            }
            AppError::InvalidEvent { .. } => {
                "Send the event as a JSON object, e.g. {\"number\": 4}".to_string()
            }
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                "Check the command line flags, environment variables and config file".to_string()
            }
            AppError::TomlError(_) => "Make sure the config file is valid TOML".to_string(),
            AppError::PersistenceError { .. } => {
                "Retry the request; the database may be temporarily unavailable".to_string()
            }
            AppError::CalculationError { .. } => {
                "Check the input number against the calculation's accepted range".to_string()
            }
            AppError::IoError(_) => "Check file permissions and that the path exists".to_string(),
            AppError::SerializationError(_) => "Make sure the event is valid JSON".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("The request could not be processed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Processing => format!("Processing failed: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
