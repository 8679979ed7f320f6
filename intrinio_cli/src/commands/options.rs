//! The `options` subcommand: contracts, expirations, chains and prices.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;
use intrinio_api::query::{
    OptionPricesQuery, OptionType, OptionsChainQuery, OptionsExpirationsQuery, OptionsQuery,
    PriceSource, RealtimePriceQuery,
};
use intrinio_api::Client;

use super::{fetch_pages, parse_option_type, parse_price_source, PageArgs};
use crate::output::{
    build_chain_rows, build_expiration_rows, build_field_rows, build_option_price_rows,
    build_option_rows, emit, OutputFormat,
};

#[derive(Args)]
pub struct OptionsArgs {
    /// Underlying symbol (e.g. AAPL)
    #[arg(long)]
    pub symbol: Option<String>,

    /// List expiration dates for --symbol
    #[arg(long, requires = "symbol", conflicts_with = "chain")]
    pub expirations: bool,

    /// Show the chain for --symbol at this expiration (YYYY-MM-DD)
    #[arg(long, requires = "symbol", value_name = "EXPIRATION")]
    pub chain: Option<String>,

    /// Price history of a contract code (e.g. AAPL190621C00180000)
    #[arg(long, conflicts_with = "symbol")]
    pub prices: Option<String>,

    /// With --prices, show the realtime quote instead of history
    #[arg(long, requires = "prices")]
    pub realtime: bool,

    /// Contract type: call or put
    #[arg(long = "type", value_parser = parse_option_type)]
    pub option_type: Option<OptionType>,

    /// Exact strike price
    #[arg(long)]
    pub strike: Option<f64>,

    /// Only strikes above this price
    #[arg(long)]
    pub strike_above: Option<f64>,

    /// Only strikes below this price
    #[arg(long)]
    pub strike_below: Option<f64>,

    /// Price source (e.g. realtime, delayed)
    #[arg(long, value_parser = parse_price_source)]
    pub source: Option<PriceSource>,

    /// Start date (YYYY-MM-DD) for --prices, or earliest expiration otherwise
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// End date (YYYY-MM-DD) for --prices, or latest expiration otherwise
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    #[command(flatten)]
    pub pages: PageArgs,
}

pub async fn run(args: &OptionsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let api = client.options();

    if let Some(code) = args.prices.as_deref() {
        if args.realtime {
            let mut query = RealtimePriceQuery::default();
            if let Some(source) = args.source {
                query = query.with_source(source);
            }
            let quote = api.get_options_prices_realtime(code, &query).await?;
            return emit(&quote, &build_field_rows(&quote)?, format);
        }
        let mut query = OptionPricesQuery::default();
        if let Some(date) = args.start_date {
            query = query.with_start_date(date);
        }
        if let Some(date) = args.end_date {
            query = query.with_end_date(date);
        }
        if let Some(size) = args.pages.page_size {
            query = query.with_page_size(size);
        }
        let pages = fetch_pages(query, &args.pages, |q| async move {
            api.get_options_prices(code, &q).await
        })
        .await?;
        let prices: Vec<_> = pages.iter().flat_map(|p| &p.prices).collect();
        return emit(&prices, &build_option_price_rows(prices.iter().copied()), format);
    }

    let Some(symbol) = args.symbol.as_deref() else {
        bail!("either --symbol or --prices is required");
    };

    if args.expirations {
        let mut query = OptionsExpirationsQuery::default();
        if let Some(date) = args.start_date {
            query = query.with_after(date);
        }
        if let Some(date) = args.end_date {
            query = query.with_before(date);
        }
        if let Some(source) = args.source {
            query = query.with_source(source);
        }
        let resp = api.get_options_expirations(symbol, &query).await?;
        return emit(&resp.expirations, &build_expiration_rows(&resp.expirations), format);
    }

    if let Some(expiration) = args.chain.as_deref() {
        let mut query = OptionsChainQuery::default();
        if let Some(option_type) = args.option_type {
            query = query.with_type(option_type);
        }
        if let Some(strike) = args.strike {
            query = query.with_strike(strike);
        }
        if let Some(strike) = args.strike_above {
            query = query.with_strike_greater_than(strike);
        }
        if let Some(strike) = args.strike_below {
            query = query.with_strike_less_than(strike);
        }
        if let Some(source) = args.source {
            query = query.with_source(source);
        }
        if let Some(size) = args.pages.page_size {
            query = query.with_page_size(size);
        }
        let resp = api.get_options_chain(symbol, expiration, &query).await?;
        return emit(&resp.chain, &build_chain_rows(&resp.chain), format);
    }

    let mut query = OptionsQuery::default();
    if let Some(option_type) = args.option_type {
        query = query.with_type(option_type);
    }
    if let Some(strike) = args.strike {
        query = query.with_strike(strike);
    }
    if let Some(strike) = args.strike_above {
        query = query.with_strike_greater_than(strike);
    }
    if let Some(strike) = args.strike_below {
        query = query.with_strike_less_than(strike);
    }
    if let Some(date) = args.start_date {
        query = query.with_expiration_after(date);
    }
    if let Some(date) = args.end_date {
        query = query.with_expiration_before(date);
    }
    if let Some(source) = args.source {
        query = query.with_source(source);
    }
    if let Some(size) = args.pages.page_size {
        query = query.with_page_size(size);
    }
    let pages = fetch_pages(query, &args.pages, |q| async move {
        api.get_options(symbol, &q).await
    })
    .await?;
    let contracts: Vec<_> = pages.iter().flat_map(|p| &p.options).collect();
    let rows = build_option_rows(contracts.iter().map(|c| (*c, None)));
    emit(&contracts, &rows, format)
}
