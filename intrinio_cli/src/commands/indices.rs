//! The `indices` subcommand: economic, SIC and stock market indices.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use intrinio_api::api::IndexApi;
use intrinio_api::query::{Frequency, HistoricalDataQuery, IndexSearchQuery, PageQuery, SortOrder};
use intrinio_api::types::HistoricalData;
use intrinio_api::Client;

use super::{fetch_pages, parse_frequency, parse_sort_order, PageArgs};
use crate::output::{build_field_rows, build_historical_rows, emit, index_row, IndexRow, OutputFormat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum IndexKind {
    Economic,
    Sic,
    StockMarket,
}

#[derive(Args)]
pub struct IndicesArgs {
    /// Index family
    #[arg(value_enum)]
    pub kind: IndexKind,

    /// Look up one index by symbol (e.g. $GDP, $SPX) or Intrinio ID
    #[arg(long)]
    pub identifier: Option<String>,

    /// Search indices by name or symbol
    #[arg(long, conflicts_with = "identifier")]
    pub search: Option<String>,

    /// Show the history of a data tag for --identifier (e.g. level)
    #[arg(long, requires = "identifier")]
    pub tag: Option<String>,

    /// Frequency for --tag: daily, weekly, monthly, quarterly, yearly
    #[arg(long, value_parser = parse_frequency, requires = "tag")]
    pub frequency: Option<Frequency>,

    /// Sort order for --tag: asc or desc
    #[arg(long, value_parser = parse_sort_order, requires = "tag")]
    pub sort_order: Option<SortOrder>,

    /// Start date (YYYY-MM-DD) for --tag
    #[arg(long, requires = "tag")]
    pub start_date: Option<NaiveDate>,

    /// End date (YYYY-MM-DD) for --tag
    #[arg(long, requires = "tag")]
    pub end_date: Option<NaiveDate>,

    #[command(flatten)]
    pub pages: PageArgs,
}

pub async fn run(args: &IndicesArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let api = client.index();

    if let Some(search) = &args.search {
        let mut query = IndexSearchQuery::default().with_query(search);
        if let Some(size) = args.pages.page_size {
            query = query.with_page_size(size);
        }
        return search_indices(api, args.kind, &query, format).await;
    }

    match (&args.identifier, &args.tag) {
        (Some(identifier), Some(tag)) => historical(api, args, identifier, tag, format).await,
        (Some(identifier), None) => lookup(api, args.kind, identifier, format).await,
        _ => list(api, args, format).await,
    }
}

async fn list(api: IndexApi<'_>, args: &IndicesArgs, format: OutputFormat) -> Result<()> {
    let mut query = PageQuery::default();
    if let Some(size) = args.pages.page_size {
        query = query.with_page_size(size);
    }
    match args.kind {
        IndexKind::Economic => {
            let pages = fetch_pages(query, &args.pages, |q| async move {
                api.get_all_economic_indices(&q).await
            })
            .await?;
            let indices: Vec<_> = pages.iter().flat_map(|p| &p.indices).collect();
            let rows: Vec<IndexRow> = indices
                .iter()
                .map(|i| index_row(&i.symbol, &i.index_name, &i.id))
                .collect();
            emit(&indices, &rows, format)
        }
        IndexKind::Sic => {
            let pages = fetch_pages(query, &args.pages, |q| async move {
                api.get_all_sic_indices(&q).await
            })
            .await?;
            let indices: Vec<_> = pages.iter().flat_map(|p| &p.indices).collect();
            let rows: Vec<IndexRow> = indices
                .iter()
                .map(|i| index_row(&i.symbol, &i.index_name, &i.id))
                .collect();
            emit(&indices, &rows, format)
        }
        IndexKind::StockMarket => {
            let pages = fetch_pages(query, &args.pages, |q| async move {
                api.get_all_stock_market_indices(&q).await
            })
            .await?;
            let indices: Vec<_> = pages.iter().flat_map(|p| &p.indices).collect();
            let rows: Vec<IndexRow> = indices
                .iter()
                .map(|i| index_row(&i.symbol, &i.index_name, &i.id))
                .collect();
            emit(&indices, &rows, format)
        }
    }
}

async fn search_indices(
    api: IndexApi<'_>,
    kind: IndexKind,
    query: &IndexSearchQuery,
    format: OutputFormat,
) -> Result<()> {
    match kind {
        IndexKind::Economic => {
            let resp = api.search_economic_indices(query).await?;
            let rows: Vec<IndexRow> = resp
                .indices
                .iter()
                .map(|i| index_row(&i.symbol, &i.index_name, &i.id))
                .collect();
            emit(&resp.indices, &rows, format)
        }
        IndexKind::Sic => {
            let resp = api.search_sic_indices(query).await?;
            let rows: Vec<IndexRow> = resp
                .indices
                .iter()
                .map(|i| index_row(&i.symbol, &i.index_name, &i.id))
                .collect();
            emit(&resp.indices, &rows, format)
        }
        IndexKind::StockMarket => {
            let resp = api.search_stock_markets_indices(query).await?;
            let rows: Vec<IndexRow> = resp
                .indices
                .iter()
                .map(|i| index_row(&i.symbol, &i.index_name, &i.id))
                .collect();
            emit(&resp.indices, &rows, format)
        }
    }
}

async fn lookup(
    api: IndexApi<'_>,
    kind: IndexKind,
    identifier: &str,
    format: OutputFormat,
) -> Result<()> {
    match kind {
        IndexKind::Economic => {
            let index = api.get_economic_index_by_id(identifier).await?;
            emit(&index, &build_field_rows(&index)?, format)
        }
        IndexKind::Sic => {
            let index = api.get_sic_index_by_id(identifier).await?;
            emit(&index, &build_field_rows(&index)?, format)
        }
        IndexKind::StockMarket => {
            let index = api.get_stock_market_index_by_id(identifier).await?;
            emit(&index, &build_field_rows(&index)?, format)
        }
    }
}

async fn historical(
    api: IndexApi<'_>,
    args: &IndicesArgs,
    identifier: &str,
    tag: &str,
    format: OutputFormat,
) -> Result<()> {
    let mut query = HistoricalDataQuery::default();
    if let Some(frequency) = args.frequency {
        query = query.with_frequency(frequency);
    }
    if let Some(order) = args.sort_order {
        query = query.with_sort_order(order);
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

    let data: Vec<HistoricalData> = match args.kind {
        IndexKind::Economic => fetch_pages(query, &args.pages, |q| async move {
            api.get_economic_index_historical_data(identifier, tag, &q).await
        })
        .await?
        .into_iter()
        .flat_map(|p| p.historical_data)
        .collect(),
        IndexKind::Sic => fetch_pages(query, &args.pages, |q| async move {
            api.get_sic_index_historical_data(identifier, tag, &q).await
        })
        .await?
        .into_iter()
        .flat_map(|p| p.historical_data)
        .collect(),
        IndexKind::StockMarket => fetch_pages(query, &args.pages, |q| async move {
            api.get_stock_market_index_historical_data(identifier, tag, &q)
                .await
        })
        .await?
        .into_iter()
        .flat_map(|p| p.historical_data)
        .collect(),
    };
    emit(&data, &build_historical_rows(&data), format)
}
