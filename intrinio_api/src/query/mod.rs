mod common;
pub(crate) use self::common::define_query;
pub use self::common::{IntoParam, NoQuery, PageCursor, Query, QueryParams, QueryValue};

mod params;
pub use self::params::{Frequency, OptionType, PriceSource, SortOrder};

mod company;
pub use self::company::{
    AllCompaniesQuery, CompanyFilingsQuery, CompanyFundamentalsQuery, CompanySearchQuery,
    HistoricalDataQuery, NewsQuery, SecuritiesCursorQuery,
};

mod filing;
pub use self::filing::{FilingNoteQuery, FilingNotesQuery, FilingsQuery};

mod index;
pub use self::index::{IndexSearchQuery, PageQuery};

mod security;
pub use self::security::{
    AllSecuritiesQuery, RealtimePriceQuery, SecuritySearchQuery, StockPricesQuery,
};

mod options;
pub use self::options::{
    OptionPricesQuery, OptionsChainQuery, OptionsExpirationsQuery, OptionsQuery,
};

mod zacks;
pub use self::zacks::{
    ZacksAnalystRatingsQuery, ZacksEpsEstimatesQuery, ZacksEpsSurprisesQuery,
    ZacksIdentifierQuery, ZacksSalesSurprisesQuery,
};

mod stock_exchange;
pub use self::stock_exchange::{ExchangePriceAdjustmentsQuery, StockExchangesQuery};
