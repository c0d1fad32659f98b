//! Client Errors
//!
//! One error type for every backend call and client-side check.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Request never produced a response (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response; `message` is the body's `error` field if there was one
    #[error("backend returned {status}")]
    Status { status: u16, message: Option<String> },

    /// Response body did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Rejected before any request was made
    #[error("{0}")]
    Invalid(String),

    /// A DOM call failed (download link, file read)
    #[error("browser API failed: {0}")]
    Browser(String),

    /// Import file could not be read or is not JSON
    #[error("malformed import file: {0}")]
    MalformedFile(String),
}

impl Error {
    /// Text for the notification area.
    ///
    /// The backend's own `error` field wins, then client-side validation text;
    /// everything else shows `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Status { message: Some(message), .. } if !message.is_empty() => message.clone(),
            Error::Invalid(message) => message.clone(),
            Error::MalformedFile(_) => "Error importing data. Please check file format.".to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_preferred() {
        let err = Error::Status { status: 400, message: Some("Missing required field: name".into()) };
        assert_eq!(err.user_message("Error adding problem"), "Missing required field: name");
    }

    #[test]
    fn test_fallback_without_server_message() {
        let err = Error::Status { status: 500, message: None };
        assert_eq!(err.user_message("Error adding problem"), "Error adding problem");

        let err = Error::Status { status: 500, message: Some(String::new()) };
        assert_eq!(err.user_message("Error adding problem"), "Error adding problem");

        let err = Error::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message("Error deleting problem"), "Error deleting problem");
    }

    #[test]
    fn test_browser_failure_uses_fallback() {
        let err = Error::Browser("no document".into());
        assert_eq!(err.user_message("Error exporting data"), "Error exporting data");
    }

    #[test]
    fn test_malformed_file_message() {
        let err = Error::MalformedFile("expected value at line 1 column 1".into());
        assert_eq!(
            err.user_message("Error importing data"),
            "Error importing data. Please check file format."
        );
    }
}
