use thiserror::Error;

/// 使用者在任何提交失敗時看到的唯一訊息
pub const SUBMISSION_ERROR_NOTICE: &str = "Erro ao calcular o salário. Tente novamente.";

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Request to calculation service failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Calculation service returned status {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Malformed calculation response: {message}")]
    MalformedResponse { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Submission task failed: {message}")]
    TaskError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Response,
    Internal,
    Configuration,
}

impl FormError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormError::TransportError(_) => ErrorCategory::Transport,
            FormError::ServiceError { .. } | FormError::MalformedResponse { .. } => {
                ErrorCategory::Response
            }
            FormError::SerializationError(_) | FormError::TaskError { .. } => {
                ErrorCategory::Internal
            }
            FormError::IoError(_)
            | FormError::ConfigError { .. }
            | FormError::InvalidConfigValueError { .. }
            | FormError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 提交階段的錯誤一律收斂成同一則提示，不區分原因
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            _ => SUBMISSION_ERROR_NOTICE.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormError::TransportError(e) if e.is_timeout() => {
                "The calculation service did not answer in time; check that it is running"
            }
            FormError::TransportError(_) => {
                "Check that the calculation service is reachable at the configured endpoint"
            }
            FormError::ServiceError { .. } => {
                "Check the submitted hourly rate and campus hours; the service rejected them"
            }
            FormError::MalformedResponse { .. } => {
                "The endpoint does not look like a salary calculation service"
            }
            FormError::SerializationError(_) | FormError::TaskError { .. } => {
                "Re-run with --verbose and report the logged error"
            }
            FormError::IoError(_) => "Check that the configuration file exists and is readable",
            FormError::ConfigError { .. }
            | FormError::InvalidConfigValueError { .. }
            | FormError::MissingConfigError { .. } => "Fix the configuration value and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
