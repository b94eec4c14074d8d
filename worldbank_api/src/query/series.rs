use super::{common::QueryCommon, DateSpec, Query, QueryParams};

/// Query for indicator time series: `/country/{code}/indicator/{code}` and
/// `/indicator/{code}`.
#[derive(Clone, Debug, Default)]
pub struct SeriesQuery {
    pub common: QueryCommon,
    /// Date or date range in wire form, e.g. `2020`, `2000:2010`, or `2012M01:2012M08`.
    pub date: String,
    /// Number of most recent values to return. `<= 0` leaves it out.
    pub mrv: i64,
}

impl Query for SeriesQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_params(&self, params: &mut QueryParams) {
        self.common.add_params(params);
        params.insert("date", &self.date);
        params.insert_positive("mrv", self.mrv);
    }
}

impl SeriesQuery {
    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn with_date_spec(mut self, date: DateSpec) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn with_mrv(mut self, mrv: i64) -> Self {
        self.mrv = mrv;
        self
    }
}
