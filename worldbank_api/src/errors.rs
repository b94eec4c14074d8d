//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// The public endpoint methods on [`Client`](crate::Client) never return these
/// directly; they are folded into an [`ApiResponse::Failure`](crate::ApiResponse)
/// via [`Error::envelope_message`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request URL could not be assembled from the base URL and path.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The underlying HTTP client could not be built (e.g. TLS backend setup).
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// Connection, DNS, TLS, timeout, or body read failure.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The API returned a status other than 200 OK.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A 200 response whose body was not valid JSON.
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// The message carried by the failure envelope for this error.
    ///
    /// Non-200 statuses become `HTTP Error: <code>`; everything else becomes
    /// `Exception: <error text>`, followed by the chain of underlying causes.
    pub fn envelope_message(&self) -> String {
        use std::error::Error as _;

        match self {
            Error::HttpStatus { status, .. } => format!("HTTP Error: {}", status),
            other => {
                let mut msg = format!("Exception: {}", other);
                // The first source is already part of our own Display text.
                let mut cause = other.source().and_then(|s| s.source());
                while let Some(err) = cause {
                    msg.push_str(": ");
                    msg.push_str(&err.to_string());
                    cause = err.source();
                }
                msg
            }
        }
    }
}
