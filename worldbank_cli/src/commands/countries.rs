use anyhow::Result;
use clap::Args;
use worldbank_api::types::Country;
use worldbank_api::{Client, CountryQuery};

use super::{render, PageArgs};
use crate::output::{build_country_rows, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct CountriesArgs {
    /// Filter by region code (e.g. EAS, ECS, SSF)
    #[arg(long)]
    pub region: Option<String>,

    /// Filter by income level: LIC, LMC, UMC, HIC
    #[arg(long)]
    pub income_level: Option<String>,

    /// Filter by lending type: IBD, IDB, IDX, LNX
    #[arg(long)]
    pub lending_type: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub fn build_query(args: &CountriesArgs) -> Result<CountryQuery> {
    let mut query = args.paging.apply(CountryQuery::default());

    if let Some(region) = &args.region {
        query = query.with_region(&validation::validate_filter(region)?);
    }
    if let Some(income_level) = &args.income_level {
        query = query.with_income_level(&validation::validate_filter(income_level)?);
    }
    if let Some(lending_type) = &args.lending_type {
        query = query.with_lending_type(&validation::validate_filter(lending_type)?);
    }

    Ok(query)
}

pub async fn run(args: &CountriesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_query(args)?;
    let resp = client.get_countries(&query).await;
    render::<Country, _>(&resp, format, build_country_rows)
}
