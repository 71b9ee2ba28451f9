use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Repository read failed at {path}: {message}")]
    Repository { path: String, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl ThemeError {
    pub fn repository(path: &str, message: impl Into<String>) -> Self {
        ThemeError::Repository {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// 是否為內容儲存庫的讀取失敗
    pub fn is_repository_failure(&self) -> bool {
        matches!(
            self,
            ThemeError::Repository { .. }
                | ThemeError::Http(_)
                | ThemeError::Io(_)
                | ThemeError::Serialization(_)
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ThemeError::Repository { .. } | ThemeError::Http(_) => {
                "Check that the content store is reachable and the credentials are valid"
            }
            ThemeError::Io(_) => "Check that the file exists and is readable",
            ThemeError::Serialization(_) => "Check that the content export is valid JSON",
            ThemeError::ConfigError { .. }
            | ThemeError::ConfigValidationError { .. }
            | ThemeError::InvalidConfigValueError { .. }
            | ThemeError::MissingConfigError { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ThemeError>;
