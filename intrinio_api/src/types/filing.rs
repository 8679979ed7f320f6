use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{impl_paginated, CompanySummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingSummary {
    pub id: Option<String>,
    pub filing_date: Option<NaiveDate>,
    pub accepted_date: Option<String>,
    pub period_end_date: Option<NaiveDate>,
    pub report_type: Option<String>,
    pub sec_unique_id: Option<String>,
    pub filing_url: Option<String>,
    pub report_url: Option<String>,
}

/// An SEC filing with its filer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filing {
    pub id: Option<String>,
    pub filing_date: Option<NaiveDate>,
    pub accepted_date: Option<String>,
    pub period_end_date: Option<NaiveDate>,
    pub report_type: Option<String>,
    pub sec_unique_id: Option<String>,
    pub filing_url: Option<String>,
    pub report_url: Option<String>,
    pub instance_url: Option<String>,
    pub industry_category: Option<String>,
    pub industry_group: Option<String>,
    pub company: Option<CompanySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingNoteFiling {
    pub id: Option<String>,
    pub cik: Option<String>,
    pub ticker: Option<String>,
    pub filing_date: Option<NaiveDate>,
    pub report_type: Option<String>,
    pub period_ended: Option<NaiveDate>,
    pub fiscal_year: Option<i32>,
    pub fiscal_period: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingNoteSummary {
    pub id: Option<String>,
    pub xbrl_tag: Option<String>,
    pub filing: Option<FilingNoteFiling>,
}

/// A footnote from a financial filing, optionally with its content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingNote {
    pub id: Option<String>,
    pub xbrl_tag: Option<String>,
    pub content: Option<String>,
    pub filing: Option<FilingNoteFiling>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseFilings {
    #[serde(default)]
    pub filings: Vec<Filing>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseFilingNotes {
    #[serde(default)]
    pub filing_notes: Vec<FilingNoteSummary>,
    pub next_page: Option<String>,
}

impl_paginated!(ApiResponseFilings, ApiResponseFilingNotes);
