//! The `securities` subcommand: listings, search, prices and data tags.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use intrinio_api::query::{
    AllSecuritiesQuery, Frequency, HistoricalDataQuery, PriceSource, RealtimePriceQuery,
    SecuritySearchQuery, StockPricesQuery,
};
use intrinio_api::Client;

use super::{fetch_pages, parse_frequency, parse_price_source, PageArgs};
use crate::output::{
    build_field_rows, build_historical_rows, build_price_rows, build_security_rows, emit,
    OutputFormat,
};

#[derive(Args)]
pub struct SecuritiesArgs {
    /// Look up one security by ticker, FIGI or Intrinio ID
    #[arg(long)]
    pub identifier: Option<String>,

    /// Search securities by name or ticker
    #[arg(long, conflicts_with = "identifier")]
    pub search: Option<String>,

    /// Filter listing by exchange MIC (e.g. XNAS)
    #[arg(long)]
    pub exchange_mic: Option<String>,

    /// Filter listing by currency (e.g. USD)
    #[arg(long)]
    pub currency: Option<String>,

    /// Only active securities
    #[arg(long)]
    pub active: bool,

    /// Show end-of-period stock prices
    #[arg(long, requires = "identifier", conflicts_with_all = ["realtime", "tag"])]
    pub prices: bool,

    /// Show the latest realtime price
    #[arg(long, requires = "identifier", conflicts_with = "tag")]
    pub realtime: bool,

    /// Realtime price source (e.g. iex, bats_delayed)
    #[arg(long, value_parser = parse_price_source, requires = "realtime")]
    pub source: Option<PriceSource>,

    /// Show the history of a data tag (e.g. adj_close_price)
    #[arg(long, requires = "identifier")]
    pub tag: Option<String>,

    /// Frequency for --prices or --tag: daily, weekly, monthly, quarterly, yearly
    #[arg(long, value_parser = parse_frequency)]
    pub frequency: Option<Frequency>,

    /// Start date (YYYY-MM-DD) for --prices or --tag
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// End date (YYYY-MM-DD) for --prices or --tag
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    #[command(flatten)]
    pub pages: PageArgs,
}

pub async fn run(args: &SecuritiesArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let api = client.security();

    if let Some(search) = &args.search {
        let mut query = SecuritySearchQuery::default().with_query(search);
        if let Some(size) = args.pages.page_size {
            query = query.with_page_size(size);
        }
        let resp = api.search_securities(&query).await?;
        return emit(&resp.securities, &build_security_rows(&resp.securities), format);
    }

    let Some(identifier) = args.identifier.as_deref() else {
        let mut query = AllSecuritiesQuery::default();
        if let Some(mic) = &args.exchange_mic {
            query = query.with_exchange_mic(mic);
        }
        if let Some(currency) = &args.currency {
            query = query.with_currency(currency);
        }
        if args.active {
            query = query.with_active(true);
        }
        if let Some(size) = args.pages.page_size {
            query = query.with_page_size(size);
        }
        let pages = fetch_pages(query, &args.pages, |q| async move {
            api.get_all_securities(&q).await
        })
        .await?;
        let securities: Vec<_> = pages.iter().flat_map(|p| &p.securities).collect();
        return emit(&securities, &build_security_rows(securities.iter().copied()), format);
    };

    if args.prices {
        let mut query = StockPricesQuery::default();
        if let Some(frequency) = args.frequency {
            query = query.with_frequency(frequency);
        }
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
            api.get_security_stock_prices(identifier, &q).await
        })
        .await?;
        let prices: Vec<_> = pages.iter().flat_map(|p| &p.stock_prices).collect();
        return emit(&prices, &build_price_rows(prices.iter().copied()), format);
    }

    if args.realtime {
        let mut query = RealtimePriceQuery::default();
        if let Some(source) = args.source {
            query = query.with_source(source);
        }
        let price = api.get_security_realtime_price(identifier, &query).await?;
        return emit(&price, &build_field_rows(&price)?, format);
    }

    if let Some(tag) = args.tag.as_deref() {
        let mut query = HistoricalDataQuery::default();
        if let Some(frequency) = args.frequency {
            query = query.with_frequency(frequency);
        }
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
            api.get_security_historical_data(identifier, tag, &q).await
        })
        .await?;
        let data: Vec<_> = pages.iter().flat_map(|p| &p.historical_data).collect();
        return emit(&data, &build_historical_rows(data.iter().copied()), format);
    }

    let security = api.get_security_by_id(identifier).await?;
    emit(&security, &build_field_rows(&security)?, format)
}
