use chrono::NaiveDate;

use super::{define_query, OptionType, PriceSource};

define_query! {
    /// Filters for `GET /options/{symbol}`.
    OptionsQuery: paged {
        option_type / with_type: OptionType = "type",
        strike / with_strike: f64 = "strike",
        strike_greater_than / with_strike_greater_than: f64 = "strike_greater_than",
        strike_less_than / with_strike_less_than: f64 = "strike_less_than",
        expiration / with_expiration: NaiveDate = "expiration",
        expiration_after / with_expiration_after: NaiveDate = "expiration_after",
        expiration_before / with_expiration_before: NaiveDate = "expiration_before",
        source / with_source: PriceSource = "source",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    OptionsExpirationsQuery {
        after / with_after: NaiveDate = "after",
        before / with_before: NaiveDate = "before",
        source / with_source: PriceSource = "source",
    }
}

define_query! {
    /// Filters for `GET /options/chain/{symbol}/{expiration}`.
    OptionsChainQuery {
        /// Historical date to read the chain as of.
        date / with_date: NaiveDate = "date",
        option_type / with_type: OptionType = "type",
        strike / with_strike: f64 = "strike",
        strike_greater_than / with_strike_greater_than: f64 = "strike_greater_than",
        strike_less_than / with_strike_less_than: f64 = "strike_less_than",
        source / with_source: PriceSource = "source",
        page_size / with_page_size: u32 = "page_size",
    }
}

define_query! {
    OptionPricesQuery: paged {
        start_date / with_start_date: NaiveDate = "start_date",
        end_date / with_end_date: NaiveDate = "end_date",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Query;

    #[test]
    fn options_query_strikes_and_type() {
        let pairs = OptionsQuery::default()
            .with_type(OptionType::Put)
            .with_strike_greater_than(150.5)
            .query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("type".to_string(), "put".to_string()),
                ("strike_greater_than".to_string(), "150.5".to_string()),
            ]
        );
    }
}
