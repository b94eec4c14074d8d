use url::Url;
use worldbank_api::{CountryQuery, DateSpec, IndicatorQuery, ListQuery, Query, SeriesQuery};

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

#[test]
fn list_query_defaults() {
    let url = ListQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), Some("format=json&page=1"));
}

#[test]
fn per_page_omitted_when_not_positive() {
    for per_page in [0, -1, -100] {
        let url = ListQuery::default()
            .with_per_page(per_page)
            .add_to_url(&base_url());
        let query = url.query().unwrap();
        assert!(!query.contains("per_page"), "per_page={} leaked: {}", per_page, query);
    }
}

#[test]
fn page_and_per_page_included_when_positive() {
    let url = ListQuery::default()
        .with_page(3)
        .with_per_page(50)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=3"));
    assert!(query.contains("per_page=50"));
}

#[test]
fn format_json_is_always_first() {
    let queries = [
        ListQuery::default().with_page(0).to_query_string(),
        CountryQuery::default().with_region("EAS").to_query_string(),
        IndicatorQuery::default().with_source("2").to_query_string(),
        SeriesQuery::default().with_date("2020").to_query_string(),
    ];
    for query in queries {
        assert!(query.starts_with("?format=json"), "{}", query);
    }
}

#[test]
fn reserved_characters_are_percent_encoded() {
    let nasty = "a b&c?d/e";
    let queries = [
        CountryQuery::default()
            .with_region(nasty)
            .with_income_level(nasty)
            .with_lending_type(nasty)
            .to_query_string(),
        IndicatorQuery::default().with_source(nasty).to_query_string(),
        SeriesQuery::default().with_date(nasty).to_query_string(),
    ];
    for query in queries {
        let rest = query.strip_prefix('?').unwrap();
        for pair in rest.split('&') {
            let (_, value) = pair.split_once('=').unwrap();
            assert!(!value.contains(' '), "{}", value);
            assert!(!value.contains('&'), "{}", value);
            assert!(!value.contains('?'), "{}", value);
            assert!(!value.contains('/'), "{}", value);
        }
        assert!(query.contains("a%20b%26c%3Fd%2Fe"));
    }
}

#[test]
fn country_query_filters() {
    let url = CountryQuery::default()
        .with_region("SSF")
        .with_income_level("LMC")
        .with_lending_type("IDX")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("region=SSF"));
    assert!(query.contains("incomeLevel=LMC"));
    assert!(query.contains("lendingType=IDX"));
}

#[test]
fn empty_filters_are_skipped() {
    let url = CountryQuery::default()
        .with_region("")
        .with_income_level("")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("format=json&page=1"));
}

#[test]
fn series_query_date_and_mrv() {
    let url = SeriesQuery::default()
        .with_date_spec(DateSpec::year(2015))
        .with_mrv(3)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("date=2015"));
    assert!(query.contains("mrv=3"));

    let url = SeriesQuery::default().with_mrv(-2).add_to_url(&base_url());
    assert!(!url.query().unwrap().contains("mrv"));
}
