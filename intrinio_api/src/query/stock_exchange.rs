use chrono::NaiveDate;

use super::define_query;

define_query! {
    /// Filters for `GET /stock_exchanges`.
    StockExchangesQuery {
        city / with_city: String = "city",
        country / with_country: String = "country",
        country_code / with_country_code: String = "country_code",
        page_size / with_page_size: u32 = "page_size",
    }
}

define_query! {
    ExchangePriceAdjustmentsQuery: paged {
        date / with_date: NaiveDate = "date",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}
