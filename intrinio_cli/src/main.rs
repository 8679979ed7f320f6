mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use intrinio_api::{Client, Configuration, NoopClassifier};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "intrinio")]
#[command(about = "Query financial data from the Intrinio API")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// API key (defaults to INTRINIO_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API base URL (defaults to INTRINIO_BASE_PATH or the production API)
    #[arg(long, global = true)]
    base_path: Option<String>,

    /// Do not treat non-2xx responses as errors
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List, search or look up companies
    Companies(Box<commands::companies::CompaniesArgs>),
    /// List SEC filings and footnotes
    Filings(commands::filings::FilingsArgs),
    /// Economic, SIC and stock market indices
    Indices(commands::indices::IndicesArgs),
    /// List, search or price securities
    Securities(Box<commands::securities::SecuritiesArgs>),
    /// Options contracts, chains and prices
    Options(Box<commands::options::OptionsArgs>),
    /// Zacks analyst data
    Zacks(commands::zacks::ZacksArgs),
    /// Stock exchanges
    Exchanges(commands::exchanges::ExchangesArgs),
    /// Latest value of a data tag
    DataPoint(commands::data_point::DataPointArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intrinio_api=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli)?;
    let format = cli.output;

    match &cli.command {
        Commands::Companies(args) => commands::companies::run(args, &client, format).await?,
        Commands::Filings(args) => commands::filings::run(args, &client, format).await?,
        Commands::Indices(args) => commands::indices::run(args, &client, format).await?,
        Commands::Securities(args) => commands::securities::run(args, &client, format).await?,
        Commands::Options(args) => commands::options::run(args, &client, format).await?,
        Commands::Zacks(args) => commands::zacks::run(args, &client, format).await?,
        Commands::Exchanges(args) => commands::exchanges::run(args, &client, format).await?,
        Commands::DataPoint(args) => commands::data_point::run(args, &client, format).await?,
    }

    Ok(())
}

fn build_client(cli: &Cli) -> Result<Client> {
    let mut config = Configuration::from_env();
    if let Some(key) = &cli.api_key {
        config = config.with_api_key(key);
    }
    if let Some(base_path) = &cli.base_path {
        config = config.with_base_path(base_path);
    }
    if config.effective_api_key().is_none() {
        tracing::warn!("No API key configured; set INTRINIO_API_KEY or pass --api-key");
    }

    let mut builder = Client::builder(config);
    if cli.lenient {
        builder = builder.classifier(NoopClassifier);
    }
    builder.build().context("Failed to build API client")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "intrinio",
            "companies",
            "--identifier",
            "AAPL",
            "--output",
            "json",
            "--api-key",
            "k",
        ])
        .unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        match cli.command {
            Commands::Companies(args) => assert_eq!(args.identifier.as_deref(), Some("AAPL")),
            _ => panic!("expected companies"),
        }
    }

    #[test]
    fn lenient_flag_builds_client() {
        let cli = Cli::try_parse_from([
            "intrinio",
            "--lenient",
            "--base-path",
            "http://localhost:9999",
            "data-point",
            "company",
            "AAPL",
            "marketcap",
        ])
        .unwrap();
        assert!(cli.lenient);
        let client = build_client(&cli).unwrap();
        assert_eq!(client.config().base_path, "http://localhost:9999");
    }

    #[test]
    fn blank_api_key_flag_counts_as_no_key() {
        let cli = Cli::try_parse_from([
            "intrinio",
            "--api-key",
            "   ",
            "data-point",
            "company",
            "AAPL",
            "marketcap",
        ])
        .unwrap();
        let client = build_client(&cli).unwrap();
        assert_eq!(client.config().api_key.as_deref(), Some("   "));
        assert_eq!(client.config().effective_api_key(), None);
    }

    #[test]
    fn rejects_unknown_output_format() {
        assert!(Cli::try_parse_from(["intrinio", "--output", "xml", "zacks", "ratings"]).is_err());
    }

    #[test]
    fn max_pages_parses_on_listing_commands() {
        let cli = Cli::try_parse_from([
            "intrinio",
            "securities",
            "--exchange-mic",
            "XNAS",
            "--max-pages",
            "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Securities(args) => assert_eq!(args.pages.max_pages, Some(3)),
            _ => panic!("expected securities"),
        }
    }
}
