use serde::{Deserialize, Serialize};

use super::{impl_paginated, HistoricalData};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicIndexSummary {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub index_name: Option<String>,
    pub continuous: Option<bool>,
    pub update_frequency: Option<String>,
    pub last_updated: Option<String>,
}

/// An economic time series such as GDP or the unemployment rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicIndex {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub index_name: Option<String>,
    pub continuous: Option<bool>,
    pub update_frequency: Option<String>,
    pub last_updated: Option<String>,
    pub notes: Option<String>,
    pub observation_start: Option<String>,
    pub observation_end: Option<String>,
    pub seasonal_adjustment: Option<String>,
    pub seasonal_adjustment_short: Option<String>,
    pub units: Option<String>,
    pub units_short: Option<String>,
}

/// Standard Industrial Classification index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SicIndex {
    pub id: Option<String>,
    pub code: Option<i32>,
    pub index_name: Option<String>,
    pub symbol: Option<String>,
    pub sector: Option<String>,
    pub industry_group: Option<String>,
    pub industry_category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMarketIndexSummary {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub index_name: Option<String>,
    pub continuous: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMarketIndex {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub index_name: Option<String>,
    pub continuous: Option<bool>,
    pub update_frequency: Option<String>,
    pub last_updated: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseEconomicIndices {
    #[serde(default)]
    pub indices: Vec<EconomicIndexSummary>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseEconomicIndicesSearch {
    #[serde(default)]
    pub indices: Vec<EconomicIndexSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseEconomicIndexHistoricalData {
    #[serde(default)]
    pub historical_data: Vec<HistoricalData>,
    pub index: Option<EconomicIndexSummary>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseSicIndices {
    #[serde(default)]
    pub indices: Vec<SicIndex>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseSicIndicesSearch {
    #[serde(default)]
    pub indices: Vec<SicIndex>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseSicIndexHistoricalData {
    #[serde(default)]
    pub historical_data: Vec<HistoricalData>,
    pub index: Option<SicIndex>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseStockMarketIndices {
    #[serde(default)]
    pub indices: Vec<StockMarketIndexSummary>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseStockMarketIndicesSearch {
    #[serde(default)]
    pub indices: Vec<StockMarketIndexSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponseStockMarketIndexHistoricalData {
    #[serde(default)]
    pub historical_data: Vec<HistoricalData>,
    pub index: Option<StockMarketIndexSummary>,
    pub next_page: Option<String>,
}

impl_paginated!(
    ApiResponseEconomicIndices,
    ApiResponseEconomicIndexHistoricalData,
    ApiResponseSicIndices,
    ApiResponseSicIndexHistoricalData,
    ApiResponseStockMarketIndices,
    ApiResponseStockMarketIndexHistoricalData,
);
