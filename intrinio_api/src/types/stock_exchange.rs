use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{impl_paginated, SecuritySummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockExchange {
    pub id: Option<String>,
    pub name: Option<String>,
    pub mic: Option<String>,
    pub acronym: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub website: Option<String>,
    pub first_stock_price_date: Option<NaiveDate>,
    pub last_stock_price_date: Option<NaiveDate>,
}

/// Split or dividend adjustment applied to a security's price history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockPriceAdjustment {
    pub date: Option<NaiveDate>,
    pub factor: Option<f64>,
    pub dividend: Option<f64>,
    pub dividend_currency: Option<String>,
    pub split_ratio: Option<f64>,
    pub security: Option<SecuritySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseStockExchanges {
    #[serde(default)]
    pub stock_exchanges: Vec<StockExchange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseStockExchangeStockPriceAdjustments {
    #[serde(default)]
    pub stock_price_adjustments: Vec<StockPriceAdjustment>,
    pub stock_exchange: Option<StockExchange>,
    pub next_page: Option<String>,
}

impl_paginated!(ApiResponseStockExchangeStockPriceAdjustments);
