use std::fmt;

/// Custom error type for Azure DevOps operations
#[derive(Debug)]
pub enum AzdoError {
    /// Required parameter not supplied by flag or environment
    MissingParameter {
        name: &'static str,
        flag: &'static str,
        env_var: &'static str,
    },
    /// Request could not be constructed
    Request(String),
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// JSON parsing error
    Json(String),
    /// Writing output failed
    Io(std::io::Error),
}

impl fmt::Display for AzdoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AzdoError::MissingParameter {
                name,
                flag,
                env_var,
            } => write!(
                f,
                "Missing {}: pass -{} <VALUE> or set the {} environment variable",
                name, flag, env_var
            ),
            AzdoError::Request(msg) => write!(f, "Invalid request: {}", msg),
            AzdoError::Http(e) => write!(f, "HTTP request failed: {}", e),
            AzdoError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            AzdoError::Json(msg) => write!(f, "JSON error: {}", msg),
            AzdoError::Io(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for AzdoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AzdoError::Http(e) => Some(e),
            AzdoError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AzdoError {
    fn from(err: reqwest::Error) -> Self {
        AzdoError::Http(err)
    }
}

impl From<serde_json::Error> for AzdoError {
    fn from(err: serde_json::Error) -> Self {
        AzdoError::Json(err.to_string())
    }
}

impl From<std::io::Error> for AzdoError {
    fn from(err: std::io::Error) -> Self {
        AzdoError::Io(err)
    }
}

/// Result type alias for Azure DevOps operations
pub type Result<T> = std::result::Result<T, AzdoError>;
