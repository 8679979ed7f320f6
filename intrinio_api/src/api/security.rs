//! Securities: listings, search, prices and data tags.

use crate::query::{
    AllSecuritiesQuery, HistoricalDataQuery, RealtimePriceQuery, SecuritySearchQuery,
    StockPricesQuery,
};
use crate::types::{
    ApiResponseSecurities, ApiResponseSecuritiesSearch, ApiResponseSecurityHistoricalData,
    ApiResponseSecurityStockPrices, RealtimeStockPrice, Security,
};
use crate::{Client, Endpoint};

pub const GET_ALL_SECURITIES: Endpoint = Endpoint::get("get_all_securities", "/securities");
pub const SEARCH_SECURITIES: Endpoint =
    Endpoint::get("search_securities", "/securities/search").requires(&["query"]);
pub const GET_SECURITY_BY_ID: Endpoint =
    Endpoint::get("get_security_by_id", "/securities/{identifier}");
pub const GET_SECURITY_STOCK_PRICES: Endpoint =
    Endpoint::get("get_security_stock_prices", "/securities/{identifier}/prices");
pub const GET_SECURITY_REALTIME_PRICE: Endpoint = Endpoint::get(
    "get_security_realtime_price",
    "/securities/{identifier}/prices/realtime",
);
pub const GET_SECURITY_HISTORICAL_DATA: Endpoint = Endpoint::get(
    "get_security_historical_data",
    "/securities/{identifier}/historical_data/{tag}",
);
pub const GET_SECURITY_DATA_POINT_NUMBER: Endpoint = Endpoint::get(
    "get_security_data_point_number",
    "/securities/{identifier}/data_point/{tag}/number",
)
.text();
pub const GET_SECURITY_DATA_POINT_TEXT: Endpoint = Endpoint::get(
    "get_security_data_point_text",
    "/securities/{identifier}/data_point/{tag}/text",
)
.text();

/// Security endpoints. Obtained from [`Client::security`].
#[derive(Debug, Clone, Copy)]
pub struct SecurityApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn security(&self) -> SecurityApi<'_> {
        SecurityApi { client: self }
    }
}

api_methods! {
    SecurityApi {
        json fn get_all_securities / get_all_securities_with_info () [AllSecuritiesQuery]
            -> ApiResponseSecurities = GET_ALL_SECURITIES;
        json fn search_securities / search_securities_with_info () [SecuritySearchQuery]
            -> ApiResponseSecuritiesSearch = SEARCH_SECURITIES;
        json fn get_security_by_id / get_security_by_id_with_info (identifier)
            -> Security = GET_SECURITY_BY_ID;
        /// End-of-day (or weekly, monthly...) price bars.
        json fn get_security_stock_prices / get_security_stock_prices_with_info (identifier) [StockPricesQuery]
            -> ApiResponseSecurityStockPrices = GET_SECURITY_STOCK_PRICES;
        json fn get_security_realtime_price / get_security_realtime_price_with_info (identifier) [RealtimePriceQuery]
            -> RealtimeStockPrice = GET_SECURITY_REALTIME_PRICE;
        json fn get_security_historical_data / get_security_historical_data_with_info (identifier, tag) [HistoricalDataQuery]
            -> ApiResponseSecurityHistoricalData = GET_SECURITY_HISTORICAL_DATA;
        number fn get_security_data_point_number / get_security_data_point_number_with_info (identifier, tag)
            -> f64 = GET_SECURITY_DATA_POINT_NUMBER;
        text fn get_security_data_point_text / get_security_data_point_text_with_info (identifier, tag)
            -> String = GET_SECURITY_DATA_POINT_TEXT;
    }
}
