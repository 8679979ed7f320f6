mod meta;
pub(crate) use self::meta::impl_paginated;
pub use self::meta::{ApiResponse, HistoricalData, Paginated};

mod company;
pub use self::company::{
    ApiResponseCompanies, ApiResponseCompaniesSearch, ApiResponseCompanyFilings,
    ApiResponseCompanyFundamentals, ApiResponseCompanyHistoricalData, ApiResponseCompanyNews,
    ApiResponseCompanySecurities, ApiResponseNews, Company, CompanyNews, CompanyNewsSummary,
    CompanySummary, FundamentalSummary,
};

mod filing;
pub use self::filing::{
    ApiResponseFilingNotes, ApiResponseFilings, Filing, FilingNote, FilingNoteFiling,
    FilingNoteSummary, FilingSummary,
};

mod index;
pub use self::index::{
    ApiResponseEconomicIndexHistoricalData, ApiResponseEconomicIndices,
    ApiResponseEconomicIndicesSearch, ApiResponseSicIndexHistoricalData, ApiResponseSicIndices,
    ApiResponseSicIndicesSearch, ApiResponseStockMarketIndexHistoricalData,
    ApiResponseStockMarketIndices, ApiResponseStockMarketIndicesSearch, EconomicIndex,
    EconomicIndexSummary, SicIndex, StockMarketIndex, StockMarketIndexSummary,
};

mod security;
pub use self::security::{
    ApiResponseSecurities, ApiResponseSecuritiesSearch, ApiResponseSecurityHistoricalData,
    ApiResponseSecurityStockPrices, ApiResponseStockExchangeSecurities, RealtimeStockPrice,
    RealtimeStockPriceSecurity, Security, SecuritySummary, StockPriceSummary,
};

mod options;
pub use self::options::{
    ApiResponseOptionPrices, ApiResponseOptions, ApiResponseOptionsChain,
    ApiResponseOptionsExpirations, ApiResponseOptionsPriceRealtime, OptionChainEntry,
    OptionContract, OptionPrice, OptionPriceRealtime,
};

mod zacks;
pub use self::zacks::{
    ApiResponseZacksAnalystRatings, ApiResponseZacksEpsEstimates, ApiResponseZacksEpsSurprises,
    ApiResponseZacksLongTermGrowthRates, ApiResponseZacksSalesSurprises,
    ApiResponseZacksTargetPriceConsensuses, ZacksAnalystRating, ZacksEpsEstimate,
    ZacksEpsSurprise, ZacksLongTermGrowthRate, ZacksSalesSurprise, ZacksTargetPriceConsensus,
};

mod stock_exchange;
pub use self::stock_exchange::{
    ApiResponseStockExchangeStockPriceAdjustments, ApiResponseStockExchanges, StockExchange,
    StockPriceAdjustment,
};
