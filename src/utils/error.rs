use thiserror::Error;

/// Discriminant of a [`ParseError`], for callers that only care about the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    MissingVersion,
    MissingName,
    DetachedComment,
    UnseparatedComment,
    UnterminatedComment,
}

/// A User-Agent string could not be parsed. The whole parse is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("product '{token}' is missing a version (expected Name/Version)")]
    MissingVersion { token: String },

    #[error("product '{token}' is missing a name (expected Name/Version)")]
    MissingName { token: String },

    #[error("comment '{token}' is not attached to a product")]
    DetachedComment { token: String },

    #[error("'{token}' must be separated from the surrounding text by whitespace")]
    UnseparatedComment { token: String },

    #[error("comment '{token}' is missing its closing ')'")]
    UnterminatedComment { token: String },
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::MissingVersion { .. } => ParseErrorKind::MissingVersion,
            Self::MissingName { .. } => ParseErrorKind::MissingName,
            Self::DetachedComment { .. } => ParseErrorKind::DetachedComment,
            Self::UnseparatedComment { .. } => ParseErrorKind::UnseparatedComment,
            Self::UnterminatedComment { .. } => ParseErrorKind::UnterminatedComment,
        }
    }

    /// The piece of input that triggered the error.
    pub fn token(&self) -> &str {
        match self {
            Self::MissingVersion { token }
            | Self::MissingName { token }
            | Self::DetachedComment { token }
            | Self::UnseparatedComment { token }
            | Self::UnterminatedComment { token } => token,
        }
    }
}

#[derive(Error, Debug)]
pub enum UaError {
    #[error("User-Agent parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid User-Agent override in ${var}: {source}")]
    Override {
        var: String,
        #[source]
        source: ParseError,
    },

    #[error("User-Agent override in ${var} is not valid UTF-8")]
    UnreadableOverride { var: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

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
}

impl UaError {
    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::Parse(_) => {
                "Use the form Name/Version, optionally followed by ' (comment)'".to_string()
            }
            Self::Override { var, .. } => format!(
                "Fix or unset the {} environment variable, e.g. {}=\"MyTool/1.0\"",
                var, var
            ),
            Self::UnreadableOverride { var } => {
                format!("Set {} to plain UTF-8 text, or unset it", var)
            }
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::SerializationError(_) => "Report this as a bug".to_string(),
            Self::InvalidHeader(_) => {
                "Remove control characters and non-ASCII text from products".to_string()
            }
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Check the configuration file syntax".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Parse(e) => format!("Could not understand the User-Agent text: {}", e),
            Self::Override { var, source } => {
                format!("The value of {} is not a valid User-Agent: {}", var, source)
            }
            Self::IoError(e) => format!("Could not read a file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UaError>;
