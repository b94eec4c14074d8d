//! `country-indicator` and `indicator-values`: indicator time series.

use anyhow::Result;
use clap::Args;
use worldbank_api::types::Observation;
use worldbank_api::{Client, SeriesQuery};

use super::{render, PageArgs};
use crate::output::{build_observation_rows, OutputFormat};
use crate::validation;

/// Date and paging flags shared by both series commands.
#[derive(Args)]
pub struct SeriesArgs {
    /// Period or range, e.g. 2020, 2000:2010, 2013Q1, or 2012M01:2012M08
    #[arg(long)]
    pub date: Option<String>,

    /// Only the N most recent values
    #[arg(long, default_value = "0")]
    pub mrv: i64,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct CountryIndicatorArgs {
    /// Country code(s), e.g. USA or USA;CHN, or `all`
    pub country: String,

    /// Indicator code, e.g. NY.GDP.MKTP.CD
    pub indicator: String,

    #[command(flatten)]
    pub series: SeriesArgs,
}

#[derive(Args)]
pub struct IndicatorValuesArgs {
    /// Indicator code, e.g. SP.POP.TOTL
    pub indicator: String,

    #[command(flatten)]
    pub series: SeriesArgs,
}

pub fn build_query(args: &SeriesArgs) -> Result<SeriesQuery> {
    let mut query = args
        .paging
        .apply(SeriesQuery::default())
        .with_mrv(args.mrv);
    if let Some(date) = &args.date {
        query = query.with_date_spec(validation::validate_date(date)?);
    }
    Ok(query)
}

pub async fn run_country_indicator(
    args: &CountryIndicatorArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let country = validation::validate_code(&args.country)?;
    let indicator = validation::validate_code(&args.indicator)?;
    let query = build_query(&args.series)?;

    let resp = client
        .get_country_indicator(&country, &indicator, &query)
        .await;
    render::<Observation, _>(&resp, format, build_observation_rows)
}

pub async fn run_indicator_values(
    args: &IndicatorValuesArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let indicator = validation::validate_code(&args.indicator)?;
    let query = build_query(&args.series)?;

    let resp = client.get_indicator_values(&indicator, &query).await;
    render::<Observation, _>(&resp, format, build_observation_rows)
}
