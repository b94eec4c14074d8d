use super::{common::QueryCommon, Query, QueryParams};

/// Query for `/country`, filterable by region, income level, and lending type.
///
/// Filters take World Bank codes (e.g. region `EAS`, income level `HIC`,
/// lending type `IDX`). Empty strings leave the filter out.
#[derive(Clone, Debug, Default)]
pub struct CountryQuery {
    pub common: QueryCommon,
    pub region: String,
    pub income_level: String,
    pub lending_type: String,
}

impl Query for CountryQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_params(&self, params: &mut QueryParams) {
        self.common.add_params(params);
        params.insert("region", &self.region);
        params.insert("incomeLevel", &self.income_level);
        params.insert("lendingType", &self.lending_type);
    }
}

impl CountryQuery {
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    pub fn with_income_level(mut self, income_level: &str) -> Self {
        self.income_level = income_level.to_string();
        self
    }

    pub fn with_lending_type(mut self, lending_type: &str) -> Self {
        self.lending_type = lending_type.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{CountryQuery, Query};

    #[test]
    fn test_country_query() {
        let url = Url::parse("https://example.com/country").unwrap();

        insta::assert_snapshot!(
            CountryQuery::default()
                .with_per_page(300)
                .with_region("EAS")
                .with_income_level("HIC")
                .with_lending_type("IBD")
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/country?format=json&incomeLevel=HIC&lendingType=IBD&page=1&per_page=300&region=EAS"
        );

        insta::assert_snapshot!(
            CountryQuery::default()
                .with_region("Sub Saharan/Africa")
                .to_query_string(),
            @"?format=json&page=1&region=Sub%20Saharan%2FAfrica"
        );
    }
}
