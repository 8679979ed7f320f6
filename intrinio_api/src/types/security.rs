use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{impl_paginated, HistoricalData, StockExchange};

/// Listing-level record for a traded security.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecuritySummary {
    pub id: Option<String>,
    pub company_id: Option<String>,
    pub stock_exchange_id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub currency: Option<String>,
    pub ticker: Option<String>,
    pub composite_ticker: Option<String>,
    pub figi: Option<String>,
    pub composite_figi: Option<String>,
    pub share_class_figi: Option<String>,
    pub primary_listing: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Security {
    pub id: Option<String>,
    pub company_id: Option<String>,
    pub stock_exchange_id: Option<String>,
    pub stock_exchange: Option<String>,
    pub exchange_ticker: Option<String>,
    pub exchange_mic: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub currency: Option<String>,
    pub ticker: Option<String>,
    pub composite_ticker: Option<String>,
    pub figi: Option<String>,
    pub composite_figi: Option<String>,
    pub share_class_figi: Option<String>,
    pub primary_security: Option<bool>,
    pub primary_listing: Option<bool>,
    pub active: Option<bool>,
    pub etf: Option<bool>,
    pub delisted: Option<bool>,
    pub first_stock_price: Option<NaiveDate>,
    pub last_stock_price: Option<NaiveDate>,
    pub last_stock_price_adjustment: Option<NaiveDate>,
    pub last_corporate_action: Option<NaiveDate>,
    pub previous_tickers: Option<Vec<String>>,
    pub listing_exchange_mic: Option<String>,
}

/// End-of-period price bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockPriceSummary {
    pub date: NaiveDate,
    pub intraperiod: Option<bool>,
    pub frequency: Option<String>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    pub adj_open: Option<f64>,
    pub adj_high: Option<f64>,
    pub adj_low: Option<f64>,
    pub adj_close: Option<f64>,
    pub adj_volume: Option<f64>,
    pub factor: Option<f64>,
    pub split_ratio: Option<f64>,
    pub dividend: Option<f64>,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeStockPriceSecurity {
    pub id: Option<String>,
    pub ticker: Option<String>,
    pub exchange_ticker: Option<String>,
    pub figi: Option<String>,
    pub composite_figi: Option<String>,
}

/// Latest trade and quote for a security.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeStockPrice {
    pub last_price: Option<f64>,
    pub last_time: Option<String>,
    pub last_size: Option<f64>,
    pub bid_price: Option<f64>,
    pub bid_size: Option<f64>,
    pub ask_price: Option<f64>,
    pub ask_size: Option<f64>,
    pub open_price: Option<f64>,
    pub close_price: Option<f64>,
    pub high_price: Option<f64>,
    pub low_price: Option<f64>,
    pub exchange_volume: Option<f64>,
    pub market_volume: Option<f64>,
    pub updated_on: Option<String>,
    pub source: Option<String>,
    pub security: Option<RealtimeStockPriceSecurity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseSecurities {
    #[serde(default)]
    pub securities: Vec<SecuritySummary>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseSecuritiesSearch {
    #[serde(default)]
    pub securities: Vec<SecuritySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseSecurityStockPrices {
    #[serde(default)]
    pub stock_prices: Vec<StockPriceSummary>,
    pub security: Option<SecuritySummary>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseSecurityHistoricalData {
    #[serde(default)]
    pub historical_data: Vec<HistoricalData>,
    pub security: Option<SecuritySummary>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseStockExchangeSecurities {
    #[serde(default)]
    pub securities: Vec<SecuritySummary>,
    pub stock_exchange: Option<StockExchange>,
    pub next_page: Option<String>,
}

impl_paginated!(
    ApiResponseSecurities,
    ApiResponseSecurityStockPrices,
    ApiResponseSecurityHistoricalData,
    ApiResponseStockExchangeSecurities,
);
