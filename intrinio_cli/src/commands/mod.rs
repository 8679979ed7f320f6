//! CLI subcommand implementations.

pub mod companies;
pub mod data_point;
pub mod exchanges;
pub mod filings;
pub mod indices;
pub mod options;
pub mod securities;
pub mod zacks;

use std::future::Future;

use anyhow::Result;
use clap::Args;
use intrinio_api::query::{Frequency, OptionType, PriceSource, SortOrder};
use intrinio_api::types::Paginated;
use intrinio_api::{collect_pages, PageCursor};

/// Paging flags shared by every listing subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Results per page (server default 100)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Resume from a `next_page` token printed by a previous run
    #[arg(long)]
    pub next_page: Option<String>,

    /// Follow `next_page` tokens until the listing is exhausted
    #[arg(long)]
    pub all_pages: bool,

    /// Follow `next_page` tokens for at most N pages
    #[arg(long, value_name = "N")]
    pub max_pages: Option<usize>,
}

impl PageArgs {
    fn follows(&self) -> bool {
        self.all_pages || self.max_pages.is_some()
    }
}

/// Fetches one page, or walks the cursor when `--all-pages` / `--max-pages`
/// is given. A leftover token is reported on stderr so the user can resume.
pub async fn fetch_pages<Q, P, F, Fut>(mut query: Q, pages: &PageArgs, mut fetch: F) -> Result<Vec<P>>
where
    Q: PageCursor + Clone,
    P: Paginated,
    F: FnMut(Q) -> Fut,
    Fut: Future<Output = Result<P, intrinio_api::Error>>,
{
    if pages.next_page.is_some() {
        query.set_next_page(pages.next_page.clone());
    }

    let results = if pages.follows() {
        collect_pages(query, pages.max_pages, fetch).await?
    } else {
        vec![fetch(query).await?]
    };

    if let Some(token) = results.last().and_then(|p| p.next_page()) {
        eprintln!("More results available: --next-page {}", token);
    }
    Ok(results)
}

pub fn parse_frequency(s: &str) -> Result<Frequency, String> {
    s.parse()
        .map_err(|_| format!("invalid frequency '{}': expected daily, weekly, monthly, quarterly or yearly", s))
}

pub fn parse_sort_order(s: &str) -> Result<SortOrder, String> {
    s.parse()
        .map_err(|_| format!("invalid sort order '{}': expected asc or desc", s))
}

pub fn parse_option_type(s: &str) -> Result<OptionType, String> {
    s.parse()
        .map_err(|_| format!("invalid option type '{}': expected call or put", s))
}

pub fn parse_price_source(s: &str) -> Result<PriceSource, String> {
    s.parse()
        .map_err(|_| format!("unknown price source '{}'", s))
}
