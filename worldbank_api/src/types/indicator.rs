//! Indicator, observation, and topic records.

use serde::{Deserialize, Serialize};

use super::meta::IdValue;

/// Indicator definition returned by `/indicator` (and by `/indicator/{code}`
/// when no data parameters are given).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    /// Indicator code, e.g. `SP.POP.TOTL`.
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub source: IdValue,

    #[serde(default)]
    pub source_note: String,

    #[serde(default)]
    pub source_organization: String,

    /// The API sometimes emits `{}` entries here; those become empty refs.
    #[serde(default)]
    pub topics: Vec<IdValue>,
}

/// One data point of an indicator time series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub indicator: IdValue,

    pub country: IdValue,

    #[serde(default)]
    pub countryiso3code: String,

    /// Period label: `2020`, `2020Q1`, or `2020M01` depending on frequency.
    pub date: String,

    /// `None` where the series has no value for the period.
    pub value: Option<f64>,

    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub obs_status: String,

    #[serde(default)]
    pub decimal: Option<i64>,
}

impl Observation {
    /// The period as a year, when `date` starts with one.
    pub fn year(&self) -> Option<i32> {
        self.date.get(..4)?.parse().ok()
    }
}

/// Topic record returned by `/topic`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,

    /// Topic name. The API pads some of these with trailing spaces.
    pub value: String,

    #[serde(default)]
    pub source_note: String,
}
