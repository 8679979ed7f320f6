//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required path or query parameter was missing or blank. Raised before
    /// any request is sent.
    #[error("Missing the required parameter '{param}' when calling {operation}")]
    InvalidArgument {
        param: &'static str,
        operation: &'static str,
    },
    /// The configured base path could not be turned into a request URL.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
    /// The HTTP request failed before a response was received.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("{operation} failed with status {status}")]
    HttpStatus {
        operation: String,
        status: u16,
        body: String,
    },
    /// The response body did not match the expected shape.
    #[error("Failed to parse response of {operation}: {message}")]
    Deserialize {
        operation: String,
        message: String,
        body: String,
    },
    /// Raised by a caller-supplied failure classifier.
    #[error("{operation} rejected: {message}")]
    Rejected { operation: String, message: String },
}

impl Error {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Shortens a response body for inclusion in an error, respecting char boundaries.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
