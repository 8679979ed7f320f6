//! The `filings` subcommand: SEC filings and their footnotes.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;
use intrinio_api::query::{FilingNoteQuery, FilingNotesQuery, FilingsQuery};
use intrinio_api::Client;

use super::{fetch_pages, PageArgs};
use crate::output::{build_field_rows, build_filing_rows, build_note_rows, emit, OutputFormat};

#[derive(Args)]
pub struct FilingsArgs {
    /// Company identifier (ticker, CIK or Intrinio ID) whose filings to list
    #[arg(long)]
    pub company: Option<String>,

    /// Look up a single filing by Intrinio ID
    #[arg(long, conflicts_with_all = ["company", "note"])]
    pub id: Option<String>,

    /// List XBRL footnotes instead of filings (requires --company)
    #[arg(long)]
    pub notes: bool,

    /// Show one footnote by ID
    #[arg(long, conflicts_with_all = ["company", "notes"])]
    pub note: Option<String>,

    /// With --note, print the raw footnote text
    #[arg(long, requires = "note")]
    pub text: bool,

    /// Filter by report type (e.g. 10-K, 10-Q)
    #[arg(long)]
    pub report_type: Option<String>,

    /// Filed on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Filed on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    #[command(flatten)]
    pub pages: PageArgs,
}

pub async fn run(args: &FilingsArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let api = client.filing();

    if let Some(id) = &args.id {
        let filing = api.get_filing_by_id(id).await?;
        return emit(&filing, &build_field_rows(&filing)?, format);
    }

    if let Some(note) = &args.note {
        if args.text {
            println!("{}", api.get_note_text(note).await?);
            return Ok(());
        }
        let query = FilingNoteQuery::default().with_content_format("text");
        let note = api.get_note(note, &query).await?;
        return emit(&note, &build_field_rows(&note)?, format);
    }

    let Some(company) = &args.company else {
        bail!("--company is required to list filings or notes");
    };

    if args.notes {
        let mut query = FilingNotesQuery::default().with_company(company);
        if let Some(report_type) = &args.report_type {
            query = query.with_report_type(report_type);
        }
        if let Some(date) = args.start_date {
            query = query.with_filing_start_date(date);
        }
        if let Some(date) = args.end_date {
            query = query.with_filing_end_date(date);
        }
        if let Some(size) = args.pages.page_size {
            query = query.with_page_size(size);
        }
        let pages = fetch_pages(query, &args.pages, |q| async move {
            api.get_all_notes(&q).await
        })
        .await?;
        let notes: Vec<_> = pages.iter().flat_map(|p| &p.filing_notes).collect();
        return emit(&notes, &build_note_rows(notes.iter().copied()), format);
    }

    let mut query = FilingsQuery::default().with_company(company);
    if let Some(report_type) = &args.report_type {
        query = query.with_report_type(report_type);
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
        api.get_all_filings(&q).await
    })
    .await?;
    let filings: Vec<_> = pages.iter().flat_map(|p| &p.filings).collect();
    emit(&filings, &build_filing_rows(filings.iter().copied()), format)
}
