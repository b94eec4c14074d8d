//! `sources`, `topics`, and `regions`: the endpoints that only page.

use anyhow::Result;
use clap::Args;
use worldbank_api::types::{Region, Source, Topic};
use worldbank_api::{Client, ListQuery};

use super::{render, PageArgs};
use crate::output::{build_region_rows, build_source_rows, build_topic_rows, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub paging: PageArgs,
}

impl ListArgs {
    fn query(&self) -> ListQuery {
        self.paging.apply(ListQuery::default())
    }
}

pub async fn run_sources(args: &ListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_sources(&args.query()).await;
    render::<Source, _>(&resp, format, build_source_rows)
}

pub async fn run_topics(args: &ListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_topic_list(&args.query()).await;
    render::<Topic, _>(&resp, format, build_topic_rows)
}

pub async fn run_regions(args: &ListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_region_list(&args.query()).await;
    render::<Region, _>(&resp, format, build_region_rows)
}
