//! Economic, SIC and stock market indices.

use crate::query::{HistoricalDataQuery, IndexSearchQuery, PageQuery};
use crate::types::{
    ApiResponseEconomicIndexHistoricalData, ApiResponseEconomicIndices,
    ApiResponseEconomicIndicesSearch, ApiResponseSicIndexHistoricalData, ApiResponseSicIndices,
    ApiResponseSicIndicesSearch, ApiResponseStockMarketIndexHistoricalData,
    ApiResponseStockMarketIndices, ApiResponseStockMarketIndicesSearch, EconomicIndex, SicIndex,
    StockMarketIndex,
};
use crate::{Client, Endpoint};

pub const GET_ALL_ECONOMIC_INDICES: Endpoint =
    Endpoint::get("get_all_economic_indices", "/indices/economic");
pub const SEARCH_ECONOMIC_INDICES: Endpoint =
    Endpoint::get("search_economic_indices", "/indices/economic/search").requires(&["query"]);
pub const GET_ECONOMIC_INDEX_BY_ID: Endpoint =
    Endpoint::get("get_economic_index_by_id", "/indices/economic/{identifier}");
pub const GET_ECONOMIC_INDEX_HISTORICAL_DATA: Endpoint = Endpoint::get(
    "get_economic_index_historical_data",
    "/indices/economic/{identifier}/historical_data/{tag}",
);
pub const GET_ECONOMIC_INDEX_DATA_POINT_NUMBER: Endpoint = Endpoint::get(
    "get_economic_index_data_point_number",
    "/indices/economic/{identifier}/data_point/{tag}/number",
)
.text();
pub const GET_ECONOMIC_INDEX_DATA_POINT_TEXT: Endpoint = Endpoint::get(
    "get_economic_index_data_point_text",
    "/indices/economic/{identifier}/data_point/{tag}/text",
)
.text();

pub const GET_ALL_SIC_INDICES: Endpoint = Endpoint::get("get_all_sic_indices", "/indices/sic");
pub const SEARCH_SIC_INDICES: Endpoint =
    Endpoint::get("search_sic_indices", "/indices/sic/search").requires(&["query"]);
pub const GET_SIC_INDEX_BY_ID: Endpoint =
    Endpoint::get("get_sic_index_by_id", "/indices/sic/{identifier}");
pub const GET_SIC_INDEX_HISTORICAL_DATA: Endpoint = Endpoint::get(
    "get_sic_index_historical_data",
    "/indices/sic/{identifier}/historical_data/{tag}",
);
pub const GET_SIC_INDEX_DATA_POINT_NUMBER: Endpoint = Endpoint::get(
    "get_sic_index_data_point_number",
    "/indices/sic/{identifier}/data_point/{tag}/number",
)
.text();
pub const GET_SIC_INDEX_DATA_POINT_TEXT: Endpoint = Endpoint::get(
    "get_sic_index_data_point_text",
    "/indices/sic/{identifier}/data_point/{tag}/text",
)
.text();

pub const GET_ALL_STOCK_MARKET_INDICES: Endpoint =
    Endpoint::get("get_all_stock_market_indices", "/indices/stock_market");
pub const SEARCH_STOCK_MARKETS_INDICES: Endpoint =
    Endpoint::get("search_stock_markets_indices", "/indices/stock_market/search")
        .requires(&["query"]);
pub const GET_STOCK_MARKET_INDEX_BY_ID: Endpoint =
    Endpoint::get("get_stock_market_index_by_id", "/indices/stock_market/{identifier}");
pub const GET_STOCK_MARKET_INDEX_HISTORICAL_DATA: Endpoint = Endpoint::get(
    "get_stock_market_index_historical_data",
    "/indices/stock_market/{identifier}/historical_data/{tag}",
);
pub const GET_STOCK_MARKET_INDEX_DATA_POINT_NUMBER: Endpoint = Endpoint::get(
    "get_stock_market_index_data_point_number",
    "/indices/stock_market/{identifier}/data_point/{tag}/number",
)
.text();
pub const GET_STOCK_MARKET_INDEX_DATA_POINT_TEXT: Endpoint = Endpoint::get(
    "get_stock_market_index_data_point_text",
    "/indices/stock_market/{identifier}/data_point/{tag}/text",
)
.text();

/// Index endpoints. Obtained from [`Client::index`].
#[derive(Debug, Clone, Copy)]
pub struct IndexApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn index(&self) -> IndexApi<'_> {
        IndexApi { client: self }
    }
}

api_methods! {
    IndexApi {
        json fn get_all_economic_indices / get_all_economic_indices_with_info () [PageQuery]
            -> ApiResponseEconomicIndices = GET_ALL_ECONOMIC_INDICES;
        json fn search_economic_indices / search_economic_indices_with_info () [IndexSearchQuery]
            -> ApiResponseEconomicIndicesSearch = SEARCH_ECONOMIC_INDICES;
        /// Looks up an economic index by symbol (e.g. `$GDP`) or Intrinio ID.
        json fn get_economic_index_by_id / get_economic_index_by_id_with_info (identifier)
            -> EconomicIndex = GET_ECONOMIC_INDEX_BY_ID;
        json fn get_economic_index_historical_data / get_economic_index_historical_data_with_info (identifier, tag) [HistoricalDataQuery]
            -> ApiResponseEconomicIndexHistoricalData = GET_ECONOMIC_INDEX_HISTORICAL_DATA;
        number fn get_economic_index_data_point_number / get_economic_index_data_point_number_with_info (identifier, tag)
            -> f64 = GET_ECONOMIC_INDEX_DATA_POINT_NUMBER;
        text fn get_economic_index_data_point_text / get_economic_index_data_point_text_with_info (identifier, tag)
            -> String = GET_ECONOMIC_INDEX_DATA_POINT_TEXT;

        json fn get_all_sic_indices / get_all_sic_indices_with_info () [PageQuery]
            -> ApiResponseSicIndices = GET_ALL_SIC_INDICES;
        json fn search_sic_indices / search_sic_indices_with_info () [IndexSearchQuery]
            -> ApiResponseSicIndicesSearch = SEARCH_SIC_INDICES;
        json fn get_sic_index_by_id / get_sic_index_by_id_with_info (identifier)
            -> SicIndex = GET_SIC_INDEX_BY_ID;
        json fn get_sic_index_historical_data / get_sic_index_historical_data_with_info (identifier, tag) [HistoricalDataQuery]
            -> ApiResponseSicIndexHistoricalData = GET_SIC_INDEX_HISTORICAL_DATA;
        number fn get_sic_index_data_point_number / get_sic_index_data_point_number_with_info (identifier, tag)
            -> f64 = GET_SIC_INDEX_DATA_POINT_NUMBER;
        text fn get_sic_index_data_point_text / get_sic_index_data_point_text_with_info (identifier, tag)
            -> String = GET_SIC_INDEX_DATA_POINT_TEXT;

        json fn get_all_stock_market_indices / get_all_stock_market_indices_with_info () [PageQuery]
            -> ApiResponseStockMarketIndices = GET_ALL_STOCK_MARKET_INDICES;
        json fn search_stock_markets_indices / search_stock_markets_indices_with_info () [IndexSearchQuery]
            -> ApiResponseStockMarketIndicesSearch = SEARCH_STOCK_MARKETS_INDICES;
        /// Looks up a stock market index by symbol (e.g. `$SPX`) or Intrinio ID.
        json fn get_stock_market_index_by_id / get_stock_market_index_by_id_with_info (identifier)
            -> StockMarketIndex = GET_STOCK_MARKET_INDEX_BY_ID;
        json fn get_stock_market_index_historical_data / get_stock_market_index_historical_data_with_info (identifier, tag) [HistoricalDataQuery]
            -> ApiResponseStockMarketIndexHistoricalData = GET_STOCK_MARKET_INDEX_HISTORICAL_DATA;
        number fn get_stock_market_index_data_point_number / get_stock_market_index_data_point_number_with_info (identifier, tag)
            -> f64 = GET_STOCK_MARKET_INDEX_DATA_POINT_NUMBER;
        text fn get_stock_market_index_data_point_text / get_stock_market_index_data_point_text_with_info (identifier, tag)
            -> String = GET_STOCK_MARKET_INDEX_DATA_POINT_TEXT;
    }
}
