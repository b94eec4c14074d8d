//! CLI subcommand implementations.

pub mod countries;
pub mod indicators;
pub mod lists;
pub mod series;

use anyhow::Result;
use clap::Args;
use serde::{de::DeserializeOwned, Serialize};
use tabled::Tabled;
use worldbank_api::types::Page;
use worldbank_api::{ApiResponse, Query};

use crate::error::CliError;
use crate::output::{print_csv, print_json, print_markdown, print_table, OutputFormat};

/// Paging flags shared by every subcommand.
#[derive(Args)]
pub struct PageArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page (0 uses the API default of 50)
    #[arg(long, default_value = "0")]
    pub per_page: i64,
}

impl PageArgs {
    pub fn apply<Q: Query>(&self, query: Q) -> Q {
        query.with_page(self.page).with_per_page(self.per_page)
    }
}

/// Turns a failure envelope or an API rejection message into an error.
pub fn ensure_success(resp: &ApiResponse) -> Result<(), CliError> {
    if let Some(message) = resp.error_message() {
        return Err(CliError::Api(message.to_string()));
    }
    let messages = resp.api_messages();
    if !messages.is_empty() {
        return Err(CliError::rejected(&messages));
    }
    Ok(())
}

/// Prints `resp` in the requested format.
///
/// JSON prints the envelope itself, failures included, before reporting the
/// error. The other formats need a typed page, so failures are reported first.
pub fn render<T, R>(
    resp: &ApiResponse,
    format: &OutputFormat,
    build_rows: impl Fn(&[T]) -> Vec<R>,
) -> Result<()>
where
    T: DeserializeOwned,
    R: Tabled + Serialize,
{
    if let OutputFormat::Json = format {
        print_json(resp);
        ensure_success(resp)?;
        return Ok(());
    }

    ensure_success(resp)?;
    let page: Page<T> = resp.parse_page()?;

    eprintln!(
        "Page {}/{} ({} total)",
        page.meta.page, page.meta.pages, page.meta.total
    );

    let rows = build_rows(&page.data);
    match format {
        OutputFormat::Csv => print_csv(&rows)?,
        OutputFormat::Markdown => print_markdown(&rows),
        _ => print_table(&rows),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use worldbank_api::ApiResponse;

    use super::ensure_success;
    use crate::error::CliError;

    #[test]
    fn test_failure_envelope_is_error() {
        let err = ensure_success(&ApiResponse::failure("HTTP Error: 502")).unwrap_err();
        assert_eq!(err.to_string(), "HTTP Error: 502");
    }

    #[test]
    fn test_api_message_is_rejection() {
        let resp = ApiResponse::Success(json!([{
            "message": [{"id": "120", "key": "Invalid value", "value": "The provided parameter value is not valid"}]
        }]));
        match ensure_success(&resp) {
            Err(CliError::Rejected(text)) => {
                assert_eq!(
                    text,
                    "Invalid value (120): The provided parameter value is not valid"
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_data_page_is_success() {
        let resp = ApiResponse::Success(json!([{"page": 1, "pages": 1, "per_page": 50, "total": 0}, null]));
        assert!(ensure_success(&resp).is_ok());
    }
}
