use super::{common::QueryCommon, Query, QueryParams};

/// Query for the `/indicator` catalogue, optionally restricted to one source.
#[derive(Clone, Debug, Default)]
pub struct IndicatorQuery {
    pub common: QueryCommon,
    /// Source id, e.g. `2` for World Development Indicators.
    pub source: String,
}

impl Query for IndicatorQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_params(&self, params: &mut QueryParams) {
        self.common.add_params(params);
        params.insert("source", &self.source);
    }
}

impl IndicatorQuery {
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = source.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{IndicatorQuery, Query};

    #[test]
    fn test_indicator_query() {
        let url = Url::parse("https://example.com/indicator").unwrap();

        insta::assert_snapshot!(
            IndicatorQuery::default()
                .with_source("2")
                .with_per_page(50)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/indicator?format=json&page=1&per_page=50&source=2"
        );

        insta::assert_snapshot!(
            IndicatorQuery::default().with_source("").to_query_string(),
            @"?format=json&page=1"
        );
    }
}
