//! Data source records returned by `/sources`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::meta::optional_date;

/// A World Bank data source (e.g. "World Development Indicators").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Source id, usable as the `source` filter on `/indicator`.
    pub id: String,

    pub name: String,

    /// Short code, e.g. `WDI`.
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub url: String,

    #[serde(default, deserialize_with = "optional_date")]
    pub lastupdated: Option<NaiveDate>,

    #[serde(default)]
    dataavailability: String,

    #[serde(default)]
    metadataavailability: String,

    #[serde(default)]
    concepts: String,
}

impl Source {
    /// Whether the source publishes data (as opposed to metadata only).
    pub fn has_data(&self) -> bool {
        self.dataavailability.eq_ignore_ascii_case("y")
    }
}
