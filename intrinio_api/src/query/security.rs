use chrono::NaiveDate;

use super::{define_query, Frequency, PriceSource};

define_query! {
    /// Filters for `GET /securities`.
    AllSecuritiesQuery: paged {
        active / with_active: bool = "active",
        delisted / with_delisted: bool = "delisted",
        /// Security type code, e.g. `EQS` for common stock.
        code / with_code: String = "code",
        currency / with_currency: String = "currency",
        ticker / with_ticker: String = "ticker",
        name / with_name: String = "name",
        composite_mic / with_composite_mic: String = "composite_mic",
        exchange_mic / with_exchange_mic: String = "exchange_mic",
        stock_prices_after / with_stock_prices_after: NaiveDate = "stock_prices_after",
        stock_prices_before / with_stock_prices_before: NaiveDate = "stock_prices_before",
        cik / with_cik: String = "cik",
        figi / with_figi: String = "figi",
        composite_figi / with_composite_figi: String = "composite_figi",
        share_class_figi / with_share_class_figi: String = "share_class_figi",
        figi_unique_id / with_figi_unique_id: String = "figi_unique_id",
        include_non_figi / with_include_non_figi: bool = "include_non_figi",
        primary_listing / with_primary_listing: bool = "primary_listing",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    /// Parameters for `GET /securities/search`. `query` is required.
    SecuritySearchQuery {
        query / with_query: String = "query",
        page_size / with_page_size: u32 = "page_size",
    }
}

define_query! {
    StockPricesQuery: paged {
        start_date / with_start_date: NaiveDate = "start_date",
        end_date / with_end_date: NaiveDate = "end_date",
        frequency / with_frequency: Frequency = "frequency",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    RealtimePriceQuery {
        source / with_source: PriceSource = "source",
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;
    use crate::query::Query;

    #[test]
    fn test_stock_prices_query() {
        let url = Url::parse("https://example.com/securities/AAPL/prices").unwrap();

        insta::assert_snapshot!(StockPricesQuery::default()
            .with_start_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
            .with_end_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
            .with_frequency(Frequency::Weekly)
            .add_to_url(&url)
            .to_string(), @"https://example.com/securities/AAPL/prices?start_date=2024-01-02&end_date=2024-01-31&frequency=weekly");
    }

    #[test]
    fn realtime_source_wire_value() {
        let pairs = RealtimePriceQuery::default()
            .with_source(PriceSource::BatsDelayed)
            .query_pairs();
        assert_eq!(pairs, vec![("source".to_string(), "bats_delayed".to_string())]);
    }
}
