//! Country and region records.

use serde::{Deserialize, Serialize};

/// Classification reference carrying an ISO2 code next to the id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub iso2code: String,
    #[serde(default)]
    pub value: String,
}

/// Full country record returned by `/country`.
///
/// Aggregates (e.g. `EAS`, "East Asia & Pacific") come back as countries
/// whose region is `{"id": "NA", "value": "Aggregates"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// ISO3 code, e.g. `USA`.
    pub id: String,

    /// ISO2 code, e.g. `US`.
    pub iso2_code: String,

    pub name: String,

    #[serde(default)]
    pub region: Classification,

    #[serde(default, rename = "adminregion")]
    admin_region: Classification,

    #[serde(default)]
    pub income_level: Classification,

    #[serde(default)]
    pub lending_type: Classification,

    #[serde(default)]
    pub capital_city: String,

    #[serde(default)]
    longitude: String,

    #[serde(default)]
    latitude: String,
}

impl Country {
    /// True for regional and income-group aggregates.
    pub fn is_aggregate(&self) -> bool {
        let id = self.region.id.trim();
        id.is_empty() || id == "NA" || self.region.value.trim() == "Aggregates"
    }

    /// Longitude/latitude, when the API reports them.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lon = self.longitude.trim().parse().ok()?;
        let lat = self.latitude.trim().parse().ok()?;
        Some((lon, lat))
    }

    /// The administrative region, for countries the World Bank lends to.
    pub fn admin_region(&self) -> Option<&Classification> {
        if self.admin_region.id.is_empty() {
            None
        } else {
            Some(&self.admin_region)
        }
    }
}

/// Region record returned by `/region`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    #[serde(default)]
    pub id: String,

    /// Region code, e.g. `AFR`. This is what `/country?region=` expects.
    pub code: String,

    #[serde(default)]
    pub iso2code: String,

    pub name: String,
}
