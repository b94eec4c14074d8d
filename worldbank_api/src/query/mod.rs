mod common;
pub use self::common::{encode_component, Query, QueryCommon, QueryParams};
mod date;
pub use self::date::{DatePoint, DateSpec, ParseDateSpecError};

mod list;
pub use self::list::ListQuery;

mod country;
pub use self::country::CountryQuery;

mod indicator;
pub use self::indicator::IndicatorQuery;

mod series;
pub use self::series::SeriesQuery;
