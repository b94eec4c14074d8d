//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] paging
//! fields, and the [`QueryParams`] map that renders the query string.

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Everything outside the RFC 3986 unreserved set gets percent-encoded.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const FORMAT: &str = "format";

/// Percent-encodes a single query value or path segment.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED).to_string()
}

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// Writes this query's parameters into `params`.
    fn add_params(&self, params: &mut QueryParams);

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Renders the full query string, including the leading `?`.
    fn to_query_string(&self) -> String {
        let mut params = QueryParams::new();
        self.add_params(&mut params);
        params.to_query_string()
    }

    /// Replaces the query of the given URL with this query's parameters.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let query = self.to_query_string();
        match query.strip_prefix('?') {
            Some(query) => url.set_query(Some(query)),
            None => url.set_query(None),
        }
        url
    }

    /// Sets the page number (1-indexed). Values `<= 0` drop the parameter.
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page. Values `<= 0` use the API default.
    fn with_per_page(mut self, per_page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().per_page = per_page;
        self
    }
}

/// Paging fields shared by every endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
    /// Results per page. Defaults to 0, which leaves the parameter out.
    pub per_page: i64,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page: 1,
            per_page: 0,
        }
    }
}

impl QueryCommon {
    /// Adds `per_page` and `page` when they are positive.
    pub fn add_params(&self, params: &mut QueryParams) {
        params.insert_positive("per_page", self.per_page);
        params.insert_positive("page", self.page);
    }
}

/// Query parameter set, keyed by wire name.
///
/// Values are percent-encoded on insertion and empty values are never
/// rendered. `format` is always emitted first; the rest follow in name order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<&'static str, String>,
}

impl QueryParams {
    /// A parameter set that already carries `format=json`.
    pub fn new() -> Self {
        let mut params = Self::default();
        params.insert(FORMAT, "json");
        params
    }

    /// Inserts `value` percent-encoded. Empty values are skipped.
    pub fn insert(&mut self, name: &'static str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.params.insert(name, encode_component(value));
    }

    /// Inserts `value` as a decimal integer when it is greater than zero.
    pub fn insert_positive(&mut self, name: &'static str, value: i64) {
        if value > 0 {
            self.params.insert(name, value.to_string());
        }
    }

    /// Returns the encoded value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Renders `?name=value&...`, or an empty string when there is nothing to send.
    pub fn to_query_string(&self) -> String {
        let ordered = self
            .params
            .iter()
            .filter(|(name, _)| **name == FORMAT)
            .chain(self.params.iter().filter(|(name, _)| **name != FORMAT));

        let pairs: Vec<String> = ordered
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}
