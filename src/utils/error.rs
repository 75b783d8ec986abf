use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Preference cookie could not be decoded: {message}")]
    PreferenceDecode { message: String },

    #[error("Invalid form value '{value}' for '{field}'")]
    InvalidFormValue { field: String, value: String },

    #[error("Dealer backend request failed: {0}")]
    DealerBackend(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Content table error: {message}")]
    ContentError { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Upstream,
    Configuration,
    Content,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::PreferenceDecode { .. } | SiteError::InvalidFormValue { .. } => {
                ErrorCategory::Request
            }
            SiteError::DealerBackend(_) => ErrorCategory::Upstream,
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SiteError::ContentError { .. } | SiteError::SerializationError(_) => {
                ErrorCategory::Content
            }
            SiteError::IoError(_) | SiteError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Content => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// HTTP status a handler answers with when this error escapes it.
    pub fn status_code(&self) -> u16 {
        match self {
            SiteError::PreferenceDecode { .. } | SiteError::InvalidFormValue { .. } => 400,
            SiteError::DealerBackend(_) => 502,
            _ => 500,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::PreferenceDecode { .. } => {
                "Your saved site preferences could not be read.".to_string()
            }
            SiteError::InvalidFormValue { field, .. } => {
                format!("The submitted value for '{}' is not supported.", field)
            }
            SiteError::DealerBackend(_) => {
                "The dealer directory is unavailable right now.".to_string()
            }
            SiteError::ConfigError { message } => format!("Configuration problem: {}", message),
            SiteError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            SiteError::ContentError { message } => format!("Content table is invalid: {}", message),
            _ => "Something went wrong on our side.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Request => "Clear the site cookies and reload the page",
            ErrorCategory::Upstream => "Check that the dealer backend is reachable and retry",
            ErrorCategory::Configuration => "Review the TOML configuration file",
            ErrorCategory::Content => "Make sure every content key has text for every language",
            ErrorCategory::System => "Check the server logs",
        }
    }
}
