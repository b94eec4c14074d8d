use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use worldbank_api::types::{Country, Indicator, Observation, Region, Source, Topic};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct SourceRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Last Updated")]
    #[serde(rename = "Last Updated")]
    last_updated: String,
}

#[derive(Tabled, Serialize)]
pub struct CountryRow {
    #[tabled(rename = "ISO3")]
    #[serde(rename = "ISO3")]
    id: String,
    #[tabled(rename = "ISO2")]
    #[serde(rename = "ISO2")]
    iso2: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Region")]
    #[serde(rename = "Region")]
    region: String,
    #[tabled(rename = "Income Level")]
    #[serde(rename = "Income Level")]
    income_level: String,
    #[tabled(rename = "Lending Type")]
    #[serde(rename = "Lending Type")]
    lending_type: String,
    #[tabled(rename = "Capital")]
    #[serde(rename = "Capital")]
    capital: String,
}

#[derive(Tabled, Serialize)]
pub struct IndicatorRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Source")]
    #[serde(rename = "Source")]
    source: String,
    #[tabled(rename = "Unit")]
    #[serde(rename = "Unit")]
    unit: String,
}

#[derive(Tabled, Serialize)]
pub struct ObservationRow {
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    country: String,
    #[tabled(rename = "ISO3")]
    #[serde(rename = "ISO3")]
    iso3: String,
    #[tabled(rename = "Indicator")]
    #[serde(rename = "Indicator")]
    indicator: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
pub struct TopicRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Topic")]
    #[serde(rename = "Topic")]
    topic: String,
}

#[derive(Tabled, Serialize)]
pub struct RegionRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "ISO2")]
    #[serde(rename = "ISO2")]
    iso2: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
}

// -- Row builders --

pub fn build_source_rows(sources: &[Source]) -> Vec<SourceRow> {
    sources
        .iter()
        .map(|s| SourceRow {
            id: s.id.clone(),
            code: s.code.clone(),
            name: s.name.clone(),
            last_updated: s
                .lastupdated
                .map(|d| d.to_string())
                .unwrap_or_default(),
        })
        .collect()
}

pub fn build_country_rows(countries: &[Country]) -> Vec<CountryRow> {
    countries
        .iter()
        .map(|c| CountryRow {
            id: c.id.clone(),
            iso2: c.iso2_code.clone(),
            name: c.name.clone(),
            region: c.region.value.trim().to_string(),
            income_level: c.income_level.value.trim().to_string(),
            lending_type: c.lending_type.value.trim().to_string(),
            capital: c.capital_city.clone(),
        })
        .collect()
}

pub fn build_indicator_rows(indicators: &[Indicator]) -> Vec<IndicatorRow> {
    indicators
        .iter()
        .map(|i| IndicatorRow {
            id: i.id.clone(),
            name: i.name.clone(),
            source: i.source.value.clone(),
            unit: i.unit.clone(),
        })
        .collect()
}

pub fn build_observation_rows(observations: &[Observation]) -> Vec<ObservationRow> {
    observations
        .iter()
        .map(|o| ObservationRow {
            country: o.country.value.clone(),
            iso3: o.countryiso3code.clone(),
            indicator: o.indicator.id.clone(),
            date: o.date.clone(),
            value: format_value(o.value),
        })
        .collect()
}

pub fn build_topic_rows(topics: &[Topic]) -> Vec<TopicRow> {
    topics
        .iter()
        .map(|t| TopicRow {
            id: t.id.clone(),
            topic: t.value.trim().to_string(),
        })
        .collect()
}

pub fn build_region_rows(regions: &[Region]) -> Vec<RegionRow> {
    regions
        .iter()
        .map(|r| RegionRow {
            code: r.code.clone(),
            iso2: r.iso2code.clone(),
            name: r.name.clone(),
        })
        .collect()
}

// -- Table, markdown, and CSV output --

pub fn print_table<R: Tabled>(rows: &[R]) {
    println!("{}", Table::new(rows));
}

pub fn print_markdown<R: Tabled>(rows: &[R]) {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_csv<R: Serialize>(rows: &[R]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Compact rendering of an observation: `25.74T`, `1.20B`, `3.50M`, `12.35`.
fn format_value(value: Option<f64>) -> String {
    let value = match value {
        Some(v) => v,
        None => return String::new(),
    };
    let abs = value.abs();
    if abs >= 1_000_000_000_000.0 {
        format!("{:.2}T", value / 1_000_000_000_000.0)
    } else if abs >= 1_000_000_000.0 {
        format!("{:.2}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.2}M", value / 1_000_000.0)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldbank_api::types::Page;

    fn load_page<T: serde::de::DeserializeOwned>(json_str: &str) -> Vec<T> {
        let page: Page<T> = serde_json::from_str(json_str).unwrap();
        page.data
    }

    fn load_sources_fixture() -> Vec<Source> {
        load_page(include_str!("../../worldbank_api/tests/fixtures/sources.json"))
    }

    fn load_countries_fixture() -> Vec<Country> {
        load_page(include_str!("../../worldbank_api/tests/fixtures/countries.json"))
    }

    fn load_indicators_fixture() -> Vec<Indicator> {
        load_page(include_str!("../../worldbank_api/tests/fixtures/indicators.json"))
    }

    fn load_observations_fixture() -> Vec<Observation> {
        load_page(include_str!(
            "../../worldbank_api/tests/fixtures/country_indicator.json"
        ))
    }

    fn load_topics_fixture() -> Vec<Topic> {
        load_page(include_str!("../../worldbank_api/tests/fixtures/topics.json"))
    }

    fn load_regions_fixture() -> Vec<Region> {
        load_page(include_str!("../../worldbank_api/tests/fixtures/regions.json"))
    }

    // -- format_value tests --

    #[test]
    fn test_format_value_trillions() {
        assert_eq!(format_value(Some(25_744_108_000_000.0)), "25.74T");
    }

    #[test]
    fn test_format_value_billions_and_millions() {
        assert_eq!(format_value(Some(1_200_000_000.0)), "1.20B");
        assert_eq!(format_value(Some(-3_500_000.0)), "-3.50M");
    }

    #[test]
    fn test_format_value_small() {
        assert_eq!(format_value(Some(12.346)), "12.35");
        assert_eq!(format_value(Some(0.0)), "0.00");
    }

    #[test]
    fn test_format_value_missing() {
        assert_eq!(format_value(None), "");
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::from_name("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("csv"), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_name("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_name("whatever"), OutputFormat::Table);
    }

    // -- Row builder tests --

    #[test]
    fn test_build_source_rows_mapping() {
        let rows = build_source_rows(&load_sources_fixture());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, "2");
        assert_eq!(rows[1].code, "WDI");
        assert_eq!(rows[1].last_updated, "2024-06-28");
    }

    #[test]
    fn test_build_country_rows_trims_labels() {
        let rows = build_country_rows(&load_countries_fixture());
        let row = &rows[0];
        assert_eq!(row.id, "ABW");
        assert_eq!(row.iso2, "AW");
        assert_eq!(row.region, "Latin America & Caribbean");
        assert_eq!(row.income_level, "High income");
        assert_eq!(row.capital, "Oranjestad");
    }

    #[test]
    fn test_build_indicator_rows_mapping() {
        let rows = build_indicator_rows(&load_indicators_fixture());
        assert_eq!(rows[0].id, "SP.POP.TOTL");
        assert_eq!(rows[0].source, "World Development Indicators");
    }

    #[test]
    fn test_build_observation_rows_mapping() {
        let rows = build_observation_rows(&load_observations_fixture());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value, "");
        assert_eq!(rows[1].country, "United States");
        assert_eq!(rows[1].iso3, "USA");
        assert_eq!(rows[1].date, "2022");
        assert_eq!(rows[1].value, "25.74T");
    }

    #[test]
    fn test_build_topic_and_region_rows() {
        let topics = build_topic_rows(&load_topics_fixture());
        assert_eq!(topics[0].topic, "Agriculture & Rural Development");

        let regions = build_region_rows(&load_regions_fixture());
        assert_eq!(regions[0].code, "AFR");
        assert_eq!(regions[0].iso2, "A9");
    }

    #[test]
    fn test_build_rows_empty() {
        assert!(build_source_rows(&[]).is_empty());
        assert!(build_observation_rows(&[]).is_empty());
    }

    #[test]
    fn test_csv_headers_use_display_names() {
        let rows = build_region_rows(&load_regions_fixture());
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in &rows {
            wtr.serialize(row).unwrap();
        }
        let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        assert!(out.starts_with("Code,ISO2,Name\n"));
        assert!(out.contains("EAS,Z4,East Asia & Pacific"));
    }
}
