//! Error types for the CLI layer.

use worldbank_api::types::ApiMessage;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The call came back as a failure envelope.
    #[error("{0}")]
    Api(String),
    /// HTTP 200, but the API refused the request with a message body.
    #[error("World Bank API rejected the request: {0}")]
    Rejected(String),
}

impl CliError {
    pub fn rejected(messages: &[ApiMessage]) -> Self {
        let text = messages
            .iter()
            .map(|m| format!("{} ({}): {}", m.key, m.id, m.value))
            .collect::<Vec<_>>()
            .join("; ");
        CliError::Rejected(text)
    }
}
