//! Paging envelope and small shared shapes of the World Bank v2 schema.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Paging metadata, the first element of every list response.
///
/// The API is inconsistent about number encoding (`"per_page": "50"` on some
/// endpoints, `50` on others), so all counters accept either form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(deserialize_with = "number_or_string")]
    pub page: i64,
    #[serde(deserialize_with = "number_or_string")]
    pub pages: i64,
    #[serde(deserialize_with = "number_or_string")]
    pub per_page: i64,
    #[serde(deserialize_with = "number_or_string")]
    pub total: i64,
    #[serde(default)]
    pub sourceid: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub lastupdated: Option<NaiveDate>,
}

/// One page of a list endpoint: `[meta, [records...]]`.
///
/// A `null` data element (no matches) deserializes to an empty `data` vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub meta: PageMeta,
    pub data: Vec<T>,
}

impl<'de, T> Deserialize<'de> for Page<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (meta, data) = <(PageMeta, Option<Vec<T>>)>::deserialize(deserializer)?;
        Ok(Page {
            meta,
            data: data.unwrap_or_default(),
        })
    }
}

impl<T> Serialize for Page<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.meta, &self.data).serialize(serializer)
    }
}

/// The `{"id": ..., "value": ...}` reference used for regions, income levels,
/// sources, and topics embedded in other records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdValue {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub value: String,
}

/// An API-level message, returned with HTTP 200 for invalid requests:
/// `[{"message": [{"id": "120", "key": "Invalid value", "value": "..."}]}]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

pub(crate) fn number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

/// Accepts `null`, `""`, or a `YYYY-MM-DD` date.
pub(crate) fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, PageMeta};
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_meta_accepts_string_numbers() {
        let meta: PageMeta = serde_json::from_value(json!({
            "page": 1, "pages": "3", "per_page": "50", "total": 120,
            "sourceid": null, "lastupdated": "2024-06-28"
        }))
        .unwrap();
        assert_eq!(meta.pages, 3);
        assert_eq!(meta.per_page, 50);
        assert_eq!(meta.sourceid, None);
        assert_eq!(meta.lastupdated, NaiveDate::from_ymd_opt(2024, 6, 28));
    }

    #[test]
    fn test_null_data_is_empty_page() {
        let page: Page<serde_json::Value> = serde_json::from_value(json!([
            {"page": 1, "pages": 0, "per_page": 50, "total": 0},
            null
        ]))
        .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 0);
        assert_eq!(page.meta.lastupdated, None);
    }
}
