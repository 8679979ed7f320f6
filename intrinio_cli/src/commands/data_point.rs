//! The `data-point` subcommand: the latest value of a data tag.

use anyhow::Result;
use clap::{Args, ValueEnum};
use intrinio_api::Client;
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DataPointSubject {
    Company,
    Security,
    EconomicIndex,
    SicIndex,
    StockMarketIndex,
}

#[derive(Args)]
pub struct DataPointArgs {
    /// What the identifier refers to
    #[arg(value_enum)]
    pub subject: DataPointSubject,

    /// Ticker, symbol or Intrinio ID
    pub identifier: String,

    /// Data tag (e.g. marketcap, close_price, level)
    pub tag: String,

    /// Fetch the text form instead of a number
    #[arg(long)]
    pub text: bool,
}

#[derive(Serialize)]
struct DataPoint<'a, T> {
    identifier: &'a str,
    tag: &'a str,
    value: T,
}

pub async fn run(args: &DataPointArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let (identifier, tag) = (args.identifier.as_str(), args.tag.as_str());

    if args.text {
        let value = match args.subject {
            DataPointSubject::Company => {
                client.company().get_company_data_point_text(identifier, tag).await?
            }
            DataPointSubject::Security => {
                client.security().get_security_data_point_text(identifier, tag).await?
            }
            DataPointSubject::EconomicIndex => {
                client.index().get_economic_index_data_point_text(identifier, tag).await?
            }
            DataPointSubject::SicIndex => {
                client.index().get_sic_index_data_point_text(identifier, tag).await?
            }
            DataPointSubject::StockMarketIndex => {
                client.index().get_stock_market_index_data_point_text(identifier, tag).await?
            }
        };
        return print_value(identifier, tag, value.trim(), format);
    }

    let value = match args.subject {
        DataPointSubject::Company => {
            client.company().get_company_data_point_number(identifier, tag).await?
        }
        DataPointSubject::Security => {
            client.security().get_security_data_point_number(identifier, tag).await?
        }
        DataPointSubject::EconomicIndex => {
            client.index().get_economic_index_data_point_number(identifier, tag).await?
        }
        DataPointSubject::SicIndex => {
            client.index().get_sic_index_data_point_number(identifier, tag).await?
        }
        DataPointSubject::StockMarketIndex => {
            client.index().get_stock_market_index_data_point_number(identifier, tag).await?
        }
    };
    print_value(identifier, tag, value, format)
}

fn print_value<T: Serialize + std::fmt::Display>(
    identifier: &str,
    tag: &str,
    value: T,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&DataPoint {
            identifier,
            tag,
            value,
        }),
        _ => println!("{}", value),
    }
    Ok(())
}
