//! Async client for the World Bank open-data API (v2).
//!
//! Every endpoint method resolves to an [`ApiResponse`]: the parsed JSON body
//! on HTTP 200, or a failure message otherwise. Errors are values, not `Err`s.
//!
//! ```no_run
//! # async fn run() {
//! use worldbank_api::{Client, SeriesQuery};
//!
//! let client = Client::new();
//! let resp = client
//!     .get_country_indicator("USA", "NY.GDP.MKTP.CD", &SeriesQuery::default().with_mrv(5))
//!     .await;
//! match resp.error_message() {
//!     None => println!("{}", resp.to_json()),
//!     Some(message) => eprintln!("{}", message),
//! }
//! # }
//! ```

mod client;
mod config;
mod errors;
mod query;
mod response;
pub mod types;
mod user_agent;
pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_HOST, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::query::{
    encode_component, CountryQuery, DatePoint, DateSpec, IndicatorQuery, ListQuery, ParseDateSpecError,
    Query, QueryCommon, QueryParams, SeriesQuery,
};
pub use self::response::ApiResponse;
pub use self::user_agent::DEFAULT_USER_AGENT;
