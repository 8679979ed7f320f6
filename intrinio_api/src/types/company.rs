use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{impl_paginated, FilingSummary, HistoricalData, SecuritySummary};

/// Minimal company record returned by listings and searches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySummary {
    pub id: Option<String>,
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub lei: Option<String>,
    pub cik: Option<String>,
}

/// Full company profile returned by `GET /companies/{identifier}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: Option<String>,
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub lei: Option<String>,
    pub legal_name: Option<String>,
    pub stock_exchange: Option<String>,
    pub sic: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub ceo: Option<String>,
    pub company_url: Option<String>,
    pub business_address: Option<String>,
    pub mailing_address: Option<String>,
    pub business_phone_no: Option<String>,
    pub hq_address1: Option<String>,
    pub hq_address2: Option<String>,
    pub hq_address_city: Option<String>,
    pub hq_address_postal_code: Option<String>,
    pub entity_legal_form: Option<String>,
    pub cik: Option<String>,
    pub latest_filing_date: Option<NaiveDate>,
    pub hq_state: Option<String>,
    pub hq_country: Option<String>,
    pub inc_state: Option<String>,
    pub inc_country: Option<String>,
    pub employees: Option<i64>,
    pub entity_status: Option<String>,
    pub sector: Option<String>,
    pub industry_category: Option<String>,
    pub industry_group: Option<String>,
    pub template: Option<String>,
    pub standardized_active: Option<bool>,
    pub first_fundamental_date: Option<NaiveDate>,
    pub last_fundamental_date: Option<NaiveDate>,
    pub first_stock_price_date: Option<NaiveDate>,
    pub last_stock_price_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyNewsSummary {
    pub id: Option<String>,
    pub title: Option<String>,
    pub publication_date: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
}

/// A news article tagged with the company it mentions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyNews {
    pub id: Option<String>,
    pub title: Option<String>,
    pub publication_date: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
    pub company: Option<CompanySummary>,
}

/// A single financial statement period for a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundamentalSummary {
    pub id: Option<String>,
    pub statement_code: Option<String>,
    pub fiscal_year: Option<i32>,
    pub fiscal_period: Option<String>,
    #[serde(rename = "type")]
    pub fiscal_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub filing_date: Option<NaiveDate>,
    pub is_latest: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseCompanies {
    #[serde(default)]
    pub companies: Vec<CompanySummary>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseCompaniesSearch {
    #[serde(default)]
    pub companies: Vec<CompanySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseNews {
    #[serde(default)]
    pub news: Vec<CompanyNews>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseCompanyNews {
    #[serde(default)]
    pub news: Vec<CompanyNewsSummary>,
    pub company: Option<CompanySummary>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseCompanyFilings {
    #[serde(default)]
    pub filings: Vec<FilingSummary>,
    pub company: Option<CompanySummary>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseCompanyFundamentals {
    #[serde(default)]
    pub fundamentals: Vec<FundamentalSummary>,
    pub company: Option<CompanySummary>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseCompanySecurities {
    #[serde(default)]
    pub securities: Vec<SecuritySummary>,
    pub company: Option<CompanySummary>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseCompanyHistoricalData {
    #[serde(default)]
    pub historical_data: Vec<HistoricalData>,
    pub company: Option<CompanySummary>,
    pub next_page: Option<String>,
}

impl_paginated!(
    ApiResponseCompanies,
    ApiResponseNews,
    ApiResponseCompanyNews,
    ApiResponseCompanyFilings,
    ApiResponseCompanyFundamentals,
    ApiResponseCompanySecurities,
    ApiResponseCompanyHistoricalData,
);
