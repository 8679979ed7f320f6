//! Stock exchanges and their listings.

use crate::query::{ExchangePriceAdjustmentsQuery, SecuritiesCursorQuery, StockExchangesQuery};
use crate::types::{
    ApiResponseStockExchangeSecurities, ApiResponseStockExchangeStockPriceAdjustments,
    ApiResponseStockExchanges, StockExchange,
};
use crate::{Client, Endpoint};

pub const GET_ALL_STOCK_EXCHANGES: Endpoint =
    Endpoint::get("get_all_stock_exchanges", "/stock_exchanges");
pub const GET_STOCK_EXCHANGE_BY_ID: Endpoint =
    Endpoint::get("get_stock_exchange_by_id", "/stock_exchanges/{identifier}");
pub const GET_STOCK_EXCHANGE_PRICE_ADJUSTMENTS: Endpoint = Endpoint::get(
    "get_stock_exchange_price_adjustments",
    "/stock_exchanges/{identifier}/prices/adjustments",
);
pub const GET_STOCK_EXCHANGE_SECURITIES: Endpoint = Endpoint::get(
    "get_stock_exchange_securities",
    "/stock_exchanges/{identifier}/securities",
);

/// Stock exchange endpoints. Obtained from [`Client::stock_exchange`].
#[derive(Debug, Clone, Copy)]
pub struct StockExchangeApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn stock_exchange(&self) -> StockExchangeApi<'_> {
        StockExchangeApi { client: self }
    }
}

api_methods! {
    StockExchangeApi {
        json fn get_all_stock_exchanges / get_all_stock_exchanges_with_info () [StockExchangesQuery]
            -> ApiResponseStockExchanges = GET_ALL_STOCK_EXCHANGES;
        /// Looks up an exchange by MIC (e.g. `XNAS`) or Intrinio ID.
        json fn get_stock_exchange_by_id / get_stock_exchange_by_id_with_info (identifier)
            -> StockExchange = GET_STOCK_EXCHANGE_BY_ID;
        json fn get_stock_exchange_price_adjustments / get_stock_exchange_price_adjustments_with_info (identifier) [ExchangePriceAdjustmentsQuery]
            -> ApiResponseStockExchangeStockPriceAdjustments = GET_STOCK_EXCHANGE_PRICE_ADJUSTMENTS;
        json fn get_stock_exchange_securities / get_stock_exchange_securities_with_info (identifier) [SecuritiesCursorQuery]
            -> ApiResponseStockExchangeSecurities = GET_STOCK_EXCHANGE_SECURITIES;
    }
}
