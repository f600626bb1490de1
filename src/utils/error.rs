use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareBridgeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Service returned {status}: {message}")]
    ServiceStatusError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Preference store error: {message}")]
    PreferenceError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("{capability} is not supported")]
    UnsupportedCapability { capability: String },

    #[error("Capability failed: {message}")]
    CapabilityError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Configuration,
    Input,
    Capability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CareBridgeError {
    pub fn validation(field: &str, message: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::ServiceStatusError { .. } | Self::SerializationError(_) => {
                ErrorCategory::Network
            }
            Self::IoError(_) | Self::PreferenceError { .. } => ErrorCategory::Storage,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } => ErrorCategory::Input,
            Self::UnsupportedCapability { .. } | Self::CapabilityError { .. } => {
                ErrorCategory::Capability
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Capability => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Storage => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) if e.is_connect() => {
                "Could not reach the CareBridge service".to_string()
            }
            Self::ApiError(_) | Self::SerializationError(_) => {
                "The CareBridge service returned an unreadable response".to_string()
            }
            Self::ServiceStatusError { status, .. } => {
                format!("The CareBridge service rejected the request (HTTP {})", status)
            }
            Self::IoError(e) => format!("Could not access a local file: {}", e),
            Self::PreferenceError { message } => {
                format!("Could not access preferences: {}", message)
            }
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::MissingConfigError { field } => format!("Missing configuration: {}", field),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            Self::ValidationError { message, .. } => message.clone(),
            Self::UnsupportedCapability { capability } => format!("{} not supported", capability),
            Self::CapabilityError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check the service URL and your network connection, then try again"
            }
            ErrorCategory::Storage => "Check that the download and preference paths are writable",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Input => "Fill in both symptoms and age",
            ErrorCategory::Capability => "Type the symptoms instead",
        }
    }
}

pub type Result<T> = std::result::Result<T, CareBridgeError>;
