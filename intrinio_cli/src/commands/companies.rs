//! The `companies` subcommand: company listings, search and per-company views.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use intrinio_api::query::{
    AllCompaniesQuery, CompanyFilingsQuery, CompanySearchQuery, HistoricalDataQuery, NewsQuery,
    SecuritiesCursorQuery,
};
use intrinio_api::Client;

use super::{fetch_pages, parse_frequency, PageArgs};
use crate::output::{
    build_article_rows, build_company_rows, build_field_rows, build_filing_summary_rows,
    build_historical_rows, build_news_rows, build_security_rows, emit, OutputFormat,
};

#[derive(Args)]
pub struct CompaniesArgs {
    /// Look up one company by ticker, CIK, LEI or Intrinio ID
    #[arg(long)]
    pub identifier: Option<String>,

    /// Search companies by name or ticker
    #[arg(long, conflicts_with = "identifier")]
    pub search: Option<String>,

    /// Filter listing by sector (e.g. "Consumer Goods")
    #[arg(long)]
    pub sector: Option<String>,

    /// Filter listing by industry group
    #[arg(long)]
    pub industry_group: Option<String>,

    /// Filter listing by industry category
    #[arg(long)]
    pub industry_category: Option<String>,

    /// Filter listing by SIC code
    #[arg(long)]
    pub sic: Option<String>,

    /// Only companies with standardized fundamentals
    #[arg(long)]
    pub has_fundamentals: bool,

    /// Only companies with stock prices
    #[arg(long)]
    pub has_stock_prices: bool,

    /// Show recent news (for --identifier, or across all companies)
    #[arg(long, conflicts_with_all = ["securities", "filings", "tag"])]
    pub news: bool,

    /// Show securities issued by the company
    #[arg(long, requires = "identifier")]
    pub securities: bool,

    /// Show the company's SEC filings
    #[arg(long, requires = "identifier")]
    pub filings: bool,

    /// Show the history of a data tag (e.g. marketcap)
    #[arg(long, requires = "identifier")]
    pub tag: Option<String>,

    /// Frequency for --tag: daily, weekly, monthly, quarterly, yearly
    #[arg(long, value_parser = parse_frequency, requires = "tag")]
    pub frequency: Option<intrinio_api::query::Frequency>,

    /// Start date (YYYY-MM-DD) for --tag or --filings
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// End date (YYYY-MM-DD) for --tag or --filings
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    #[command(flatten)]
    pub pages: PageArgs,
}

pub async fn run(args: &CompaniesArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let api = client.company();

    if args.news && args.identifier.is_none() {
        let mut query = NewsQuery::default();
        if let Some(size) = args.pages.page_size {
            query = query.with_page_size(size);
        }
        let pages = fetch_pages(query, &args.pages, |q| async move {
            api.get_all_company_news(&q).await
        })
        .await?;
        let news: Vec<_> = pages.iter().flat_map(|p| &p.news).collect();
        return emit(&news, &build_article_rows(news.iter().copied()), format);
    }

    if let Some(search) = &args.search {
        let mut query = CompanySearchQuery::default().with_query(search);
        if let Some(size) = args.pages.page_size {
            query = query.with_page_size(size);
        }
        let resp = api.search_companies(&query).await?;
        return emit(&resp.companies, &build_company_rows(&resp.companies), format);
    }

    let Some(identifier) = args.identifier.as_deref() else {
        let query = listing_query(args);
        let pages = fetch_pages(query, &args.pages, |q| async move {
            api.get_all_companies(&q).await
        })
        .await?;
        let companies: Vec<_> = pages.iter().flat_map(|p| &p.companies).collect();
        return emit(&companies, &build_company_rows(companies.iter().copied()), format);
    };

    if args.news {
        let mut query = NewsQuery::default();
        if let Some(size) = args.pages.page_size {
            query = query.with_page_size(size);
        }
        let pages = fetch_pages(query, &args.pages, |q| async move {
            api.get_company_news(identifier, &q).await
        })
        .await?;
        let news: Vec<_> = pages.iter().flat_map(|p| &p.news).collect();
        return emit(&news, &build_news_rows(news.iter().copied()), format);
    }

    if args.securities {
        let query = SecuritiesCursorQuery::default();
        let pages = fetch_pages(query, &args.pages, |q| async move {
            api.get_company_securities(identifier, &q).await
        })
        .await?;
        let securities: Vec<_> = pages.iter().flat_map(|p| &p.securities).collect();
        return emit(&securities, &build_security_rows(securities.iter().copied()), format);
    }

    if args.filings {
        let mut query = CompanyFilingsQuery::default();
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
            api.get_company_filings(identifier, &q).await
        })
        .await?;
        let filings: Vec<_> = pages.iter().flat_map(|p| &p.filings).collect();
        return emit(&filings, &build_filing_summary_rows(filings.iter().copied()), format);
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
            api.get_company_historical_data(identifier, tag, &q).await
        })
        .await?;
        let data: Vec<_> = pages.iter().flat_map(|p| &p.historical_data).collect();
        return emit(&data, &build_historical_rows(data.iter().copied()), format);
    }

    let company = api.get_company(identifier).await?;
    emit(&company, &build_field_rows(&company)?, format)
}

fn listing_query(args: &CompaniesArgs) -> AllCompaniesQuery {
    let mut query = AllCompaniesQuery::default();
    if let Some(sector) = &args.sector {
        query = query.with_sector(sector);
    }
    if let Some(group) = &args.industry_group {
        query = query.with_industry_group(group);
    }
    if let Some(category) = &args.industry_category {
        query = query.with_industry_category(category);
    }
    if let Some(sic) = &args.sic {
        query = query.with_sic(sic);
    }
    if args.has_fundamentals {
        query = query.with_has_fundamentals(true);
    }
    if args.has_stock_prices {
        query = query.with_has_stock_prices(true);
    }
    if let Some(size) = args.pages.page_size {
        query = query.with_page_size(size);
    }
    query
}
