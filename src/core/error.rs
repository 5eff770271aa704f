//! Error handling logic

use thiserror::Error;

/// Result type alias for echo operations.
pub type Result<T> = std::result::Result<T, EchoError>;

/// Failures surfaced by the transformation layer and the request handler.
///
/// Unknown enumerated parameter values (echo types, circuit types, gate
/// tokens) are never errors; they are normalized to defaults before they
/// reach any of these variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EchoError {
    /// A required request field was absent.
    #[error("Missing {name} parameter")]
    MissingParameter {
        /// Name of the absent field.
        name: String,
    },

    /// A field was present but could not be used.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Field name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The request body could not be decoded.
    #[error("Malformed request body: {0}")]
    MalformedRequest(String),

    /// No route matches the request path.
    #[error("No endpoint at {path}")]
    NotFound {
        /// Requested path.
        path: String,
    },

    /// The route exists but not for this method.
    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed {
        /// Request method.
        method: String,
        /// Requested path.
        path: String,
    },

    /// The circuit backend failed while evolving or sampling a register.
    #[error("Simulation failed: {message}")]
    Simulation {
        /// Backend failure message.
        message: String,
    },

    /// A response body could not be serialized.
    #[error("Response encoding failed: {0}")]
    Encoding(String),

    /// A state drifted away from unit norm.
    #[error("Incoherent state: {message}")]
    Incoherence {
        /// Details of the violated invariant.
        message: String,
    },
}

impl EchoError {
    /// Create a missing parameter error.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a simulation error.
    pub fn simulation(message: impl Into<String>) -> Self {
        Self::Simulation {
            message: message.into(),
        }
    }

    /// True for errors caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. }
                | Self::InvalidParameter { .. }
                | Self::MalformedRequest(_)
                | Self::NotFound { .. }
                | Self::MethodNotAllowed { .. }
        )
    }

    /// HTTP status code the request handler reports for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingParameter { .. } | Self::InvalidParameter { .. } | Self::MalformedRequest(_) => 400,
            Self::NotFound { .. } => 404,
            Self::MethodNotAllowed { .. } => 405,
            Self::Simulation { .. } | Self::Encoding(_) | Self::Incoherence { .. } => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_text_message() {
        let err = EchoError::missing("text");
        assert_eq!(err.to_string(), "Missing text parameter");
        assert_eq!(err.status_code(), 400);
        assert!(err.is_client_error());
    }

    #[test]
    fn test_internal_errors_are_500() {
        let err = EchoError::simulation("register too wide");
        assert!(err.to_string().contains("register too wide"));
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_client_error());

        let err = EchoError::Incoherence { message: "norm 2.0".to_string() };
        assert_eq!(err.status_code(), 500);

        let err = EchoError::Encoding("key must be a string".to_string());
        assert_eq!(err.to_string(), "Response encoding failed: key must be a string");
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_routing_errors() {
        let err = EchoError::NotFound { path: "/nowhere".to_string() };
        assert_eq!(err.status_code(), 404);
        let err = EchoError::MethodNotAllowed { method: "GET".to_string(), path: "/quantum_echo".to_string() };
        assert_eq!(err.status_code(), 405);
        assert!(err.to_string().contains("/quantum_echo"));
    }
}
