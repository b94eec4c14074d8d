mod meta;
pub use self::meta::{ApiMessage, IdValue, Page, PageMeta};

mod source;
pub use self::source::Source;

mod country;
pub use self::country::{Classification, Country, Region};

mod indicator;
pub use self::indicator::{Indicator, Observation, Topic};
