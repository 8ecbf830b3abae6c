//! Error handling for diceware-list

use thiserror::Error;

/// Main error type for diceware-list
#[derive(Error, Debug, Clone)]
pub enum WordlistError {
    #[error("Wordlist too short: at least {required} unique terms required, got {available}")]
    InsufficientPool { required: usize, available: usize },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Decode error: {message}")]
    Decode { message: String },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl WordlistError {
    /// Create an insufficient pool error
    pub fn insufficient_pool(required: usize, available: usize) -> Self {
        Self::InsufficientPool {
            required,
            available,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InsufficientPool {
                required,
                available,
            } => {
                format!(
                    "❌ Wordlist too short: {} unique terms available, {} required\n💡 Add more dictionary files, enable base lists or lower --length",
                    available, required
                )
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or options", message)
            }
            Self::Network {
                message,
                status_code,
                url,
            } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                let url = url.as_ref().map_or(String::new(), |u| format!(" fetching {}", u));
                format!(
                    "❌ Network error{}{}: {}\n💡 Check your internet connection",
                    status, url, message
                )
            }
            Self::Decode { message } => {
                format!("❌ Could not decode wordlist data: {}\n💡 Is this a gzipped Android wordlist?", message)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}", message)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
        }
    }
}

/// Convert from common error types
impl From<reqwest::Error> for WordlistError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::network("Request timed out", status_code, url)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_request() {
            Self::network("Request failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for WordlistError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for WordlistError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<base64::DecodeError> for WordlistError {
    fn from(err: base64::DecodeError) -> Self {
        Self::decode(format!("invalid base64: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WordlistError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::WordlistError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordlistError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::WordlistError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::WordlistError::validation(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_pool_message() {
        let err = WordlistError::insufficient_pool(4, 3);
        assert!(err.to_string().contains("at least 4 unique terms"));
        assert!(err.user_message().contains("3 unique terms available"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: WordlistError = io.into();
        assert!(matches!(err, WordlistError::Io { .. }));
    }

    #[test]
    fn test_macros() {
        let err = config_error!("dice need {} sides", 2);
        assert!(err.to_string().contains("dice need 2 sides"));
        let err = validation_error!("bad");
        assert!(matches!(err, WordlistError::Validation { .. }));
    }
}
