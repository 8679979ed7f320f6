use chrono::NaiveDate;

use super::define_query;

define_query! {
    /// Filters for `GET /zacks/analyst_ratings`.
    ZacksAnalystRatingsQuery: paged {
        identifier / with_identifier: String = "identifier",
        start_date / with_start_date: NaiveDate = "start_date",
        end_date / with_end_date: NaiveDate = "end_date",
        mean_greater / with_mean_greater: f64 = "mean_greater",
        mean_less / with_mean_less: f64 = "mean_less",
        strong_buys_greater / with_strong_buys_greater: i32 = "strong_buys_greater",
        strong_buys_less / with_strong_buys_less: i32 = "strong_buys_less",
        strong_sells_greater / with_strong_sells_greater: i32 = "strong_sells_greater",
        strong_sells_less / with_strong_sells_less: i32 = "strong_sells_less",
        total_greater / with_total_greater: i32 = "total_greater",
        total_less / with_total_less: i32 = "total_less",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    ZacksEpsSurprisesQuery: paged {
        start_date / with_start_date: NaiveDate = "start_date",
        end_date / with_end_date: NaiveDate = "end_date",
        eps_actual_greater / with_eps_actual_greater: f64 = "eps_actual_greater",
        eps_actual_less / with_eps_actual_less: f64 = "eps_actual_less",
        eps_mean_estimate_greater / with_eps_mean_estimate_greater: f64 = "eps_mean_estimate_greater",
        eps_mean_estimate_less / with_eps_mean_estimate_less: f64 = "eps_mean_estimate_less",
        eps_surprise_percent_greater / with_eps_surprise_percent_greater: f64 = "eps_surprise_percent_greater",
        eps_surprise_percent_less / with_eps_surprise_percent_less: f64 = "eps_surprise_percent_less",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    ZacksSalesSurprisesQuery: paged {
        start_date / with_start_date: NaiveDate = "start_date",
        end_date / with_end_date: NaiveDate = "end_date",
        sales_actual_greater / with_sales_actual_greater: f64 = "sales_actual_greater",
        sales_actual_less / with_sales_actual_less: f64 = "sales_actual_less",
        sales_surprise_percent_greater / with_sales_surprise_percent_greater: f64 = "sales_surprise_percent_greater",
        sales_surprise_percent_less / with_sales_surprise_percent_less: f64 = "sales_surprise_percent_less",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    ZacksEpsEstimatesQuery: paged {
        identifier / with_identifier: String = "identifier",
        start_date / with_start_date: NaiveDate = "start_date",
        end_date / with_end_date: NaiveDate = "end_date",
        fiscal_year / with_fiscal_year: i32 = "fiscal_year",
        /// e.g. `Q1`..`Q4`, `FY`.
        fiscal_period / with_fiscal_period: String = "fiscal_period",
        calendar_year / with_calendar_year: i32 = "calendar_year",
        calendar_period / with_calendar_period: String = "calendar_period",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    /// Identifier filter plus paging, used by the target price and growth rate listings.
    ZacksIdentifierQuery: paged {
        identifier / with_identifier: String = "identifier",
        industry_group_number / with_industry_group_number: String = "industry_group_number",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}
