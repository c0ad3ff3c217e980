use crate::models::LookupKind;
use std::fmt;

/// Errors raised by the identification lookup flow.
///
/// Every variant is terminal for the current invocation and carries a
/// human-readable message suitable for surfacing directly to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// API endpoint or token missing from the organization configuration.
    Configuration(String),
    /// Identification type name is not one of the recognized literals.
    UnsupportedIdentificationType(String),
    /// Timeout, connection failure, or non-success HTTP status from the API.
    Network(String),
    /// Response body could not be decoded as the expected JSON shape.
    ResponseDecode(String),
    /// API responded but declared the lookup unsuccessful.
    LookupFailed(LookupKind),
}

impl fmt::Display for LookupError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            LookupError::UnsupportedIdentificationType(name) => write!(
                f,
                "The identification type '{}' is not valid or not supported",
                name
            ),
            LookupError::Network(msg) => write!(f, "{}", msg),
            LookupError::ResponseDecode(msg) => write!(f, "{}", msg),
            LookupError::LookupFailed(kind) => write!(
                f,
                "The API lookup was not successful. Check the {} number.",
                kind
            ),
        }
    }
}

impl std::error::Error for LookupError {}

impl From<reqwest::Error> for LookupError {
    /// Converts a `reqwest::Error` into a `LookupError`.
    ///
    /// Timeouts and other transport failures both abort the lookup; only the
    /// message distinguishes them.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Network("The API request took too long. Try again.".to_string())
        } else if err.is_decode() {
            LookupError::ResponseDecode(format!(
                "Could not decode the API response. Check the response received: {}",
                err
            ))
        } else {
            LookupError::Network(format!("Connection error with the API: {}", err))
        }
    }
}
