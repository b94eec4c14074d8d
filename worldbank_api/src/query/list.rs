use super::{common::QueryCommon, Query, QueryParams};

/// Query for the plain list endpoints (`/sources`, `/topic`, `/region`),
/// which only take paging parameters.
#[derive(Clone, Debug, Default)]
pub struct ListQuery {
    pub common: QueryCommon,
}

impl Query for ListQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_params(&self, params: &mut QueryParams) {
        self.common.add_params(params);
    }
}
