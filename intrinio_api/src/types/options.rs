use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::impl_paginated;

/// An option contract identified by its OCC-style code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionContract {
    pub id: Option<String>,
    pub code: Option<String>,
    pub ticker: Option<String>,
    pub expiration: Option<NaiveDate>,
    pub strike: Option<f64>,
    #[serde(rename = "type")]
    pub option_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionPrice {
    pub date: Option<NaiveDate>,
    pub close: Option<f64>,
    pub close_bid: Option<f64>,
    pub close_ask: Option<f64>,
    pub volume: Option<f64>,
    pub open_interest: Option<f64>,
    pub implied_volatility: Option<f64>,
    pub delta: Option<f64>,
    pub gamma: Option<f64>,
    pub theta: Option<f64>,
    pub vega: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionPriceRealtime {
    pub last: Option<f64>,
    pub last_timestamp: Option<String>,
    pub ask: Option<f64>,
    pub ask_size: Option<f64>,
    pub bid: Option<f64>,
    pub bid_size: Option<f64>,
    pub volume: Option<f64>,
    pub open_interest: Option<f64>,
    pub exercise_style: Option<String>,
}

/// A contract paired with its latest price, as returned by chain queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionChainEntry {
    pub option: Option<OptionContract>,
    pub price: Option<OptionPrice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseOptions {
    #[serde(default)]
    pub options: Vec<OptionContract>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseOptionsExpirations {
    #[serde(default)]
    pub expirations: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseOptionsChain {
    #[serde(default)]
    pub chain: Vec<OptionChainEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseOptionPrices {
    #[serde(default)]
    pub prices: Vec<OptionPrice>,
    pub option: Option<OptionContract>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseOptionsPriceRealtime {
    pub price: Option<OptionPriceRealtime>,
    pub option: Option<OptionContract>,
}

impl_paginated!(ApiResponseOptions, ApiResponseOptionPrices);
