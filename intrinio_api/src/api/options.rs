//! Options contracts, chains and prices.

use crate::query::{
    OptionPricesQuery, OptionsChainQuery, OptionsExpirationsQuery, OptionsQuery,
    RealtimePriceQuery,
};
use crate::types::{
    ApiResponseOptionPrices, ApiResponseOptions, ApiResponseOptionsChain,
    ApiResponseOptionsExpirations, ApiResponseOptionsPriceRealtime,
};
use crate::{Client, Endpoint};

pub const GET_OPTIONS: Endpoint = Endpoint::get("get_options", "/options/{symbol}");
pub const GET_OPTIONS_EXPIRATIONS: Endpoint =
    Endpoint::get("get_options_expirations", "/options/expirations/{symbol}");
pub const GET_OPTIONS_CHAIN: Endpoint =
    Endpoint::get("get_options_chain", "/options/chain/{symbol}/{expiration}");
pub const GET_OPTIONS_PRICES: Endpoint =
    Endpoint::get("get_options_prices", "/options/prices/{identifier}");
pub const GET_OPTIONS_PRICES_REALTIME: Endpoint = Endpoint::get(
    "get_options_prices_realtime",
    "/options/prices/{identifier}/realtime",
);

/// Options endpoints. Obtained from [`Client::options`].
#[derive(Debug, Clone, Copy)]
pub struct OptionsApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn options(&self) -> OptionsApi<'_> {
        OptionsApi { client: self }
    }
}

api_methods! {
    OptionsApi {
        /// Contracts listed for an underlying symbol.
        json fn get_options / get_options_with_info (symbol) [OptionsQuery]
            -> ApiResponseOptions = GET_OPTIONS;
        json fn get_options_expirations / get_options_expirations_with_info (symbol) [OptionsExpirationsQuery]
            -> ApiResponseOptionsExpirations = GET_OPTIONS_EXPIRATIONS;
        /// All contracts for one expiration date (`YYYY-MM-DD`).
        json fn get_options_chain / get_options_chain_with_info (symbol, expiration) [OptionsChainQuery]
            -> ApiResponseOptionsChain = GET_OPTIONS_CHAIN;
        /// Price history of a contract, identified by its code.
        json fn get_options_prices / get_options_prices_with_info (identifier) [OptionPricesQuery]
            -> ApiResponseOptionPrices = GET_OPTIONS_PRICES;
        json fn get_options_prices_realtime / get_options_prices_realtime_with_info (identifier) [RealtimePriceQuery]
            -> ApiResponseOptionsPriceRealtime = GET_OPTIONS_PRICES_REALTIME;
    }
}
