//! Typed per-resource call sites, generated from the endpoint tables.
//!
//! Each resource module declares its [`Endpoint`] constants and lists them
//! in an `api_methods!` table. Every row expands into a payload-returning
//! method and a `_with_info` variant returning the [`ApiResponse`]
//! envelope. Path parameters are `&str` arguments named after their
//! placeholders; the executor validates them.
//!
//! [`ApiResponse`]: crate::types::ApiResponse

use crate::Endpoint;

/// Expands an endpoint table into async methods on a resource accessor.
///
/// Row syntax: `kind fn name / name_with_info (path params) [Query] -> Ret = ENDPOINT;`
/// where `kind` is `json`, `text` or `number` and the query type is optional.
macro_rules! api_methods {
    (@arg $q:ident) => {
        &$crate::query::NoQuery
    };
    (@arg $q:ident $t:ty) => {
        $q
    };
    (@method $exec:ident [$(#[$doc:meta])*] $name:ident $with_info:ident $endpoint:expr, [$($param:ident)*] [$($query:ty)?] $ret:ty) => {
        $(#[$doc])*
        pub async fn $name(
            &self,
            $($param: &str,)*
            $(query: &$query,)?
        ) -> Result<$ret, $crate::Error> {
            self.$with_info($($param,)* $(api_methods!(@arg query $query))?)
                .await
                .map($crate::types::ApiResponse::into_data)
        }

        #[doc = concat!("Like [`Self::", stringify!($name), "`], but also returns the HTTP status and headers.")]
        pub async fn $with_info(
            &self,
            $($param: &str,)*
            $(query: &$query,)?
        ) -> Result<$crate::types::ApiResponse<$ret>, $crate::Error> {
            self.client
                .$exec(
                    &$endpoint,
                    &[$((stringify!($param), $param)),*],
                    api_methods!(@arg query $($query)?),
                )
                .await
        }
    };
    (@kind json $($rest:tt)*) => {
        api_methods!(@method execute_with_info $($rest)*);
    };
    (@kind text $($rest:tt)*) => {
        api_methods!(@method execute_text_with_info $($rest)*);
    };
    (@kind number $($rest:tt)*) => {
        api_methods!(@method execute_number_with_info $($rest)*);
    };
    (
        $api:ident {
            $(
                $(#[$doc:meta])*
                $kind:ident fn $name:ident / $with_info:ident ( $($param:ident),* ) $([$query:ty])? -> $ret:ty = $endpoint:expr;
            )*
        }
    ) => {
        impl $api<'_> {
            $(
                api_methods!(@kind $kind [$(#[$doc])*] $name $with_info $endpoint, [$($param)*] [$($query)?] $ret);
            )*
        }
    };
}

pub mod company;
pub mod filing;
pub mod index;
pub mod options;
pub mod security;
pub mod stock_exchange;
pub mod zacks;

pub use self::company::CompanyApi;
pub use self::filing::FilingApi;
pub use self::index::IndexApi;
pub use self::options::OptionsApi;
pub use self::security::SecurityApi;
pub use self::stock_exchange::StockExchangeApi;
pub use self::zacks::ZacksApi;

static ALL_ENDPOINTS: &[Endpoint] = &[
    company::GET_ALL_COMPANIES,
    company::GET_ALL_COMPANY_NEWS,
    company::SEARCH_COMPANIES,
    company::GET_COMPANY,
    company::GET_COMPANY_NEWS,
    company::GET_COMPANY_FILINGS,
    company::GET_COMPANY_FUNDAMENTALS,
    company::GET_COMPANY_SECURITIES,
    company::GET_COMPANY_HISTORICAL_DATA,
    company::GET_COMPANY_DATA_POINT_NUMBER,
    company::GET_COMPANY_DATA_POINT_TEXT,
    filing::GET_ALL_FILINGS,
    filing::GET_FILING_BY_ID,
    filing::GET_ALL_NOTES,
    filing::GET_NOTE,
    filing::GET_NOTE_TEXT,
    index::GET_ALL_ECONOMIC_INDICES,
    index::SEARCH_ECONOMIC_INDICES,
    index::GET_ECONOMIC_INDEX_BY_ID,
    index::GET_ECONOMIC_INDEX_HISTORICAL_DATA,
    index::GET_ECONOMIC_INDEX_DATA_POINT_NUMBER,
    index::GET_ECONOMIC_INDEX_DATA_POINT_TEXT,
    index::GET_ALL_SIC_INDICES,
    index::SEARCH_SIC_INDICES,
    index::GET_SIC_INDEX_BY_ID,
    index::GET_SIC_INDEX_HISTORICAL_DATA,
    index::GET_SIC_INDEX_DATA_POINT_NUMBER,
    index::GET_SIC_INDEX_DATA_POINT_TEXT,
    index::GET_ALL_STOCK_MARKET_INDICES,
    index::SEARCH_STOCK_MARKETS_INDICES,
    index::GET_STOCK_MARKET_INDEX_BY_ID,
    index::GET_STOCK_MARKET_INDEX_HISTORICAL_DATA,
    index::GET_STOCK_MARKET_INDEX_DATA_POINT_NUMBER,
    index::GET_STOCK_MARKET_INDEX_DATA_POINT_TEXT,
    security::GET_ALL_SECURITIES,
    security::SEARCH_SECURITIES,
    security::GET_SECURITY_BY_ID,
    security::GET_SECURITY_STOCK_PRICES,
    security::GET_SECURITY_REALTIME_PRICE,
    security::GET_SECURITY_HISTORICAL_DATA,
    security::GET_SECURITY_DATA_POINT_NUMBER,
    security::GET_SECURITY_DATA_POINT_TEXT,
    options::GET_OPTIONS,
    options::GET_OPTIONS_EXPIRATIONS,
    options::GET_OPTIONS_CHAIN,
    options::GET_OPTIONS_PRICES,
    options::GET_OPTIONS_PRICES_REALTIME,
    zacks::GET_ZACKS_ANALYST_RATINGS,
    zacks::GET_ZACKS_EPS_SURPRISES,
    zacks::GET_ZACKS_SALES_SURPRISES,
    zacks::GET_ZACKS_EPS_ESTIMATES,
    zacks::GET_ZACKS_TARGET_PRICE_CONSENSUSES,
    zacks::GET_ZACKS_LONG_TERM_GROWTH_RATES,
    stock_exchange::GET_ALL_STOCK_EXCHANGES,
    stock_exchange::GET_STOCK_EXCHANGE_BY_ID,
    stock_exchange::GET_STOCK_EXCHANGE_PRICE_ADJUSTMENTS,
    stock_exchange::GET_STOCK_EXCHANGE_SECURITIES,
];

/// Every endpoint the SDK knows about.
pub fn all_endpoints() -> &'static [Endpoint] {
    ALL_ENDPOINTS
}

/// Looks up an endpoint by operation name.
pub fn find_endpoint(operation: &str) -> Option<&'static Endpoint> {
    ALL_ENDPOINTS.iter().find(|e| e.operation == operation)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn operation_names_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in all_endpoints() {
            assert!(
                seen.insert(endpoint.operation),
                "duplicate operation {}",
                endpoint.operation
            );
        }
    }

    #[test]
    fn paths_are_absolute_and_well_formed() {
        for endpoint in all_endpoints() {
            assert!(endpoint.path.starts_with('/'), "{}", endpoint.operation);
            for segment in endpoint.path.split('/').skip(1) {
                assert!(!segment.is_empty(), "{}", endpoint.operation);
                let open = segment.contains('{');
                let close = segment.contains('}');
                assert_eq!(open, close, "{}", endpoint.operation);
                if open {
                    assert!(segment.starts_with('{') && segment.ends_with('}'));
                }
            }
        }
    }

    #[test]
    fn find_endpoint_by_operation() {
        let ep = find_endpoint("get_company").unwrap();
        assert_eq!(ep.path, "/companies/{identifier}");
        assert!(find_endpoint("no_such_operation").is_none());
    }
}
