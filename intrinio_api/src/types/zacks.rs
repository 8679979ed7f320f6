use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{impl_paginated, CompanySummary, SecuritySummary};

/// Consensus broker ratings for a security on a given date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZacksAnalystRating {
    pub date: Option<NaiveDate>,
    pub mean: Option<f64>,
    pub strong_buys: Option<i32>,
    pub buys: Option<i32>,
    pub holds: Option<i32>,
    pub sells: Option<i32>,
    pub strong_sells: Option<i32>,
    pub total: Option<i32>,
    pub security: Option<SecuritySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZacksEpsSurprise {
    pub id: Option<String>,
    pub ticker: Option<String>,
    pub actual_reported_date: Option<NaiveDate>,
    pub fiscal_year: Option<i32>,
    pub fiscal_quarter: Option<String>,
    pub eps_mean_estimate: Option<f64>,
    pub eps_actual: Option<f64>,
    pub eps_amount_diff: Option<f64>,
    pub eps_percent_diff: Option<f64>,
    pub company: Option<CompanySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZacksSalesSurprise {
    pub id: Option<String>,
    pub ticker: Option<String>,
    pub actual_reported_date: Option<NaiveDate>,
    pub fiscal_year: Option<i32>,
    pub fiscal_quarter: Option<String>,
    pub sales_mean_estimate: Option<f64>,
    pub sales_actual: Option<f64>,
    pub sales_amount_diff: Option<f64>,
    pub sales_percent_diff: Option<f64>,
    pub company: Option<CompanySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZacksEpsEstimate {
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub estimate_date: Option<NaiveDate>,
    pub fiscal_year: Option<i32>,
    pub fiscal_period: Option<String>,
    pub calendar_year: Option<i32>,
    pub calendar_period: Option<String>,
    pub count: Option<i32>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub standard_deviation: Option<f64>,
    pub company: Option<CompanySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZacksTargetPriceConsensus {
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub industry_group_number: Option<String>,
    pub industry_group_name: Option<String>,
    pub broker_count: Option<i32>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub mean: Option<f64>,
    pub standard_deviation: Option<f64>,
    pub estimate_date: Option<NaiveDate>,
    pub company: Option<CompanySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZacksLongTermGrowthRate {
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub estimate_date: Option<NaiveDate>,
    pub count: Option<i32>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub company: Option<CompanySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseZacksAnalystRatings {
    #[serde(default)]
    pub analyst_ratings: Vec<ZacksAnalystRating>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseZacksEpsSurprises {
    #[serde(default)]
    pub eps_surprises: Vec<ZacksEpsSurprise>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseZacksSalesSurprises {
    #[serde(default)]
    pub sales_surprises: Vec<ZacksSalesSurprise>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseZacksEpsEstimates {
    #[serde(default)]
    pub estimates: Vec<ZacksEpsEstimate>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseZacksTargetPriceConsensuses {
    #[serde(default)]
    pub target_price_consensuses: Vec<ZacksTargetPriceConsensus>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseZacksLongTermGrowthRates {
    #[serde(default)]
    pub long_term_growth_rates: Vec<ZacksLongTermGrowthRate>,
    pub next_page: Option<String>,
}

impl_paginated!(
    ApiResponseZacksAnalystRatings,
    ApiResponseZacksEpsSurprises,
    ApiResponseZacksSalesSurprises,
    ApiResponseZacksEpsEstimates,
    ApiResponseZacksTargetPriceConsensuses,
    ApiResponseZacksLongTermGrowthRates,
);
