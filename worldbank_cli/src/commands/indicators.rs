use anyhow::Result;
use clap::Args;
use worldbank_api::types::Indicator;
use worldbank_api::{Client, IndicatorQuery};

use super::{render, PageArgs};
use crate::output::{build_indicator_rows, OutputFormat};
use crate::validation;

#[derive(Args)]
pub struct IndicatorsArgs {
    /// Restrict to one source id (see `sources`), e.g. 2 for WDI
    #[arg(long)]
    pub source: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run(args: &IndicatorsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = args.paging.apply(IndicatorQuery::default());
    if let Some(source) = &args.source {
        query = query.with_source(&validation::validate_filter(source)?);
    }

    let resp = client.get_indicators(&query).await;
    render::<Indicator, _>(&resp, format, build_indicator_rows)
}
