//! The `exchanges` subcommand: stock exchanges, their listings and price adjustments.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use intrinio_api::query::{ExchangePriceAdjustmentsQuery, SecuritiesCursorQuery, StockExchangesQuery};
use intrinio_api::Client;

use super::{fetch_pages, PageArgs};
use crate::output::{build_exchange_rows, build_field_rows, build_security_rows, emit, OutputFormat};

#[derive(Args)]
pub struct ExchangesArgs {
    /// Look up one exchange by MIC (e.g. XNAS) or Intrinio ID
    #[arg(long)]
    pub identifier: Option<String>,

    /// List securities traded on the exchange
    #[arg(long, requires = "identifier")]
    pub securities: bool,

    /// List split and dividend adjustments on the exchange for a date (YYYY-MM-DD)
    #[arg(long, requires = "identifier", conflicts_with = "securities", value_name = "DATE")]
    pub adjustments: Option<NaiveDate>,

    /// Filter listing by city
    #[arg(long)]
    pub city: Option<String>,

    /// Filter listing by country name
    #[arg(long)]
    pub country: Option<String>,

    /// Filter listing by ISO country code
    #[arg(long)]
    pub country_code: Option<String>,

    #[command(flatten)]
    pub pages: PageArgs,
}

pub async fn run(args: &ExchangesArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let api = client.stock_exchange();

    let Some(identifier) = args.identifier.as_deref() else {
        let mut query = StockExchangesQuery::default();
        if let Some(city) = &args.city {
            query = query.with_city(city);
        }
        if let Some(country) = &args.country {
            query = query.with_country(country);
        }
        if let Some(code) = &args.country_code {
            query = query.with_country_code(code);
        }
        if let Some(size) = args.pages.page_size {
            query = query.with_page_size(size);
        }
        let resp = api.get_all_stock_exchanges(&query).await?;
        return emit(
            &resp.stock_exchanges,
            &build_exchange_rows(&resp.stock_exchanges),
            format,
        );
    };

    if args.securities {
        let pages = fetch_pages(SecuritiesCursorQuery::default(), &args.pages, |q| async move {
            api.get_stock_exchange_securities(identifier, &q).await
        })
        .await?;
        let securities: Vec<_> = pages.iter().flat_map(|p| &p.securities).collect();
        return emit(&securities, &build_security_rows(securities.iter().copied()), format);
    }

    if let Some(date) = args.adjustments {
        let mut query = ExchangePriceAdjustmentsQuery::default().with_date(date);
        if let Some(size) = args.pages.page_size {
            query = query.with_page_size(size);
        }
        let pages = fetch_pages(query, &args.pages, |q| async move {
            api.get_stock_exchange_price_adjustments(identifier, &q).await
        })
        .await?;
        let adjustments: Vec<_> = pages
            .iter()
            .flat_map(|p| &p.stock_price_adjustments)
            .collect();
        let rows: Vec<_> = adjustments
            .iter()
            .map(|a| build_field_rows(a))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect();
        return emit(&adjustments, &rows, format);
    }

    let exchange = api.get_stock_exchange_by_id(identifier).await?;
    emit(&exchange, &build_field_rows(&exchange)?, format)
}
