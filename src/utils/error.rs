use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    /// Rejected user input. Displays as the bare message.
    #[error("{message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl InventoryError {
    pub fn validation(message: impl Into<String>) -> Self {
        InventoryError::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            InventoryError::ValidationError { .. } => ErrorCategory::Input,
            InventoryError::ConfigError { .. }
            | InventoryError::ConfigValidationError { .. }
            | InventoryError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            InventoryError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => self.to_string(),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("Terminal failure: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
