//! The `zacks` subcommand: analyst ratings, estimates and surprises.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use intrinio_api::query::{
    ZacksAnalystRatingsQuery, ZacksEpsEstimatesQuery, ZacksEpsSurprisesQuery,
    ZacksIdentifierQuery, ZacksSalesSurprisesQuery,
};
use intrinio_api::Client;

use super::{fetch_pages, PageArgs};
use crate::output::{
    build_eps_estimate_rows, build_eps_surprise_rows, build_growth_rate_rows, build_rating_rows,
    build_sales_surprise_rows, build_target_price_rows, emit, OutputFormat,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ZacksReport {
    Ratings,
    EpsSurprises,
    SalesSurprises,
    EpsEstimates,
    TargetPrice,
    GrowthRates,
}

#[derive(Args)]
pub struct ZacksArgs {
    /// Which Zacks dataset to query
    #[arg(value_enum)]
    pub report: ZacksReport,

    /// Ticker or Intrinio ID (ratings, estimates, target price, growth rates)
    #[arg(long)]
    pub identifier: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Fiscal year (eps-estimates)
    #[arg(long)]
    pub fiscal_year: Option<i32>,

    #[command(flatten)]
    pub pages: PageArgs,
}

pub async fn run(args: &ZacksArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let api = client.zacks();
    let page_size = args.pages.page_size;

    match args.report {
        ZacksReport::Ratings => {
            let mut query = ZacksAnalystRatingsQuery::default();
            if let Some(identifier) = &args.identifier {
                query = query.with_identifier(identifier);
            }
            if let Some(date) = args.start_date {
                query = query.with_start_date(date);
            }
            if let Some(date) = args.end_date {
                query = query.with_end_date(date);
            }
            if let Some(size) = page_size {
                query = query.with_page_size(size);
            }
            let pages = fetch_pages(query, &args.pages, |q| async move {
                api.get_zacks_analyst_ratings(&q).await
            })
            .await?;
            let items: Vec<_> = pages.iter().flat_map(|p| &p.analyst_ratings).collect();
            emit(&items, &build_rating_rows(items.iter().copied()), format)
        }
        ZacksReport::EpsSurprises => {
            let mut query = ZacksEpsSurprisesQuery::default();
            if let Some(date) = args.start_date {
                query = query.with_start_date(date);
            }
            if let Some(date) = args.end_date {
                query = query.with_end_date(date);
            }
            if let Some(size) = page_size {
                query = query.with_page_size(size);
            }
            let pages = fetch_pages(query, &args.pages, |q| async move {
                api.get_zacks_eps_surprises(&q).await
            })
            .await?;
            let items: Vec<_> = pages.iter().flat_map(|p| &p.eps_surprises).collect();
            emit(&items, &build_eps_surprise_rows(items.iter().copied()), format)
        }
        ZacksReport::SalesSurprises => {
            let mut query = ZacksSalesSurprisesQuery::default();
            if let Some(date) = args.start_date {
                query = query.with_start_date(date);
            }
            if let Some(date) = args.end_date {
                query = query.with_end_date(date);
            }
            if let Some(size) = page_size {
                query = query.with_page_size(size);
            }
            let pages = fetch_pages(query, &args.pages, |q| async move {
                api.get_zacks_sales_surprises(&q).await
            })
            .await?;
            let items: Vec<_> = pages.iter().flat_map(|p| &p.sales_surprises).collect();
            emit(&items, &build_sales_surprise_rows(items.iter().copied()), format)
        }
        ZacksReport::EpsEstimates => {
            let mut query = ZacksEpsEstimatesQuery::default();
            if let Some(identifier) = &args.identifier {
                query = query.with_identifier(identifier);
            }
            if let Some(date) = args.start_date {
                query = query.with_start_date(date);
            }
            if let Some(date) = args.end_date {
                query = query.with_end_date(date);
            }
            if let Some(year) = args.fiscal_year {
                query = query.with_fiscal_year(year);
            }
            if let Some(size) = page_size {
                query = query.with_page_size(size);
            }
            let pages = fetch_pages(query, &args.pages, |q| async move {
                api.get_zacks_eps_estimates(&q).await
            })
            .await?;
            let items: Vec<_> = pages.iter().flat_map(|p| &p.estimates).collect();
            emit(&items, &build_eps_estimate_rows(items.iter().copied()), format)
        }
        ZacksReport::TargetPrice => {
            let query = identifier_query(args);
            let pages = fetch_pages(query, &args.pages, |q| async move {
                api.get_zacks_target_price_consensuses(&q).await
            })
            .await?;
            let items: Vec<_> = pages
                .iter()
                .flat_map(|p| &p.target_price_consensuses)
                .collect();
            emit(&items, &build_target_price_rows(items.iter().copied()), format)
        }
        ZacksReport::GrowthRates => {
            let query = identifier_query(args);
            let pages = fetch_pages(query, &args.pages, |q| async move {
                api.get_zacks_long_term_growth_rates(&q).await
            })
            .await?;
            let items: Vec<_> = pages
                .iter()
                .flat_map(|p| &p.long_term_growth_rates)
                .collect();
            emit(&items, &build_growth_rate_rows(items.iter().copied()), format)
        }
    }
}

fn identifier_query(args: &ZacksArgs) -> ZacksIdentifierQuery {
    let mut query = ZacksIdentifierQuery::default();
    if let Some(identifier) = &args.identifier {
        query = query.with_identifier(identifier);
    }
    if let Some(size) = args.pages.page_size {
        query = query.with_page_size(size);
    }
    query
}
