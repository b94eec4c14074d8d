mod commands;
mod config;
mod error;
mod output;
mod validation;

use anyhow::Result;
use clap::{Parser, Subcommand};
use worldbank_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "worldbank")]
#[command(about = "Query the World Bank open-data API")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(flatten)]
    connection: config::ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List data sources
    Sources(commands::lists::ListArgs),
    /// List countries and aggregates
    Countries(commands::countries::CountriesArgs),
    /// List indicator definitions
    Indicators(commands::indicators::IndicatorsArgs),
    /// Time series of one indicator for one or more countries
    CountryIndicator(commands::series::CountryIndicatorArgs),
    /// Time series of one indicator across all countries
    IndicatorValues(commands::series::IndicatorValuesArgs),
    /// List topics
    Topics(commands::lists::ListArgs),
    /// List regions
    Regions(commands::lists::ListArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("worldbank=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!("Ignoring unreadable .env file: {}", e);
        }
    }

    let cli = Cli::parse();

    let format = OutputFormat::from_name(cli.output.as_str());
    let client = Client::with_config(config::resolve(&cli.connection)?);

    match &cli.command {
        Commands::Sources(args) => commands::lists::run_sources(args, &client, &format).await?,
        Commands::Countries(args) => commands::countries::run(args, &client, &format).await?,
        Commands::Indicators(args) => commands::indicators::run(args, &client, &format).await?,
        Commands::CountryIndicator(args) => {
            commands::series::run_country_indicator(args, &client, &format).await?
        }
        Commands::IndicatorValues(args) => {
            commands::series::run_indicator_values(args, &client, &format).await?
        }
        Commands::Topics(args) => commands::lists::run_topics(args, &client, &format).await?,
        Commands::Regions(args) => commands::lists::run_regions(args, &client, &format).await?,
    }

    Ok(())
}
