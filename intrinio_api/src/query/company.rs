use chrono::NaiveDate;

use super::{define_query, Frequency, SortOrder};

define_query! {
    /// Filters for `GET /companies`.
    AllCompaniesQuery: paged {
        /// Only companies whose latest filing was on or after this date.
        latest_filing_date / with_latest_filing_date: NaiveDate = "latest_filing_date",
        /// Standard Industrial Classification code.
        sic / with_sic: String = "sic",
        template / with_template: String = "template",
        sector / with_sector: String = "sector",
        industry_category / with_industry_category: String = "industry_category",
        industry_group / with_industry_group: String = "industry_group",
        has_fundamentals / with_has_fundamentals: bool = "has_fundamentals",
        has_stock_prices / with_has_stock_prices: bool = "has_stock_prices",
        thea_enabled / with_thea_enabled: bool = "thea_enabled",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    /// Parameters for `GET /companies/search`. `query` is required.
    CompanySearchQuery {
        query / with_query: String = "query",
        active / with_active: bool = "active",
        page_size / with_page_size: u32 = "page_size",
    }
}

define_query! {
    /// Cursor-only paging for news listings.
    NewsQuery: paged {
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    CompanyFilingsQuery: paged {
        report_type / with_report_type: String = "report_type",
        start_date / with_start_date: NaiveDate = "start_date",
        end_date / with_end_date: NaiveDate = "end_date",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    CompanyFundamentalsQuery: paged {
        filed_after / with_filed_after: NaiveDate = "filed_after",
        filed_before / with_filed_before: NaiveDate = "filed_before",
        reported_only / with_reported_only: bool = "reported_only",
        fiscal_year / with_fiscal_year: i32 = "fiscal_year",
        /// e.g. `income_statement`, `balance_sheet_statement`.
        statement_code / with_statement_code: String = "statement_code",
        /// e.g. `FY`, `QTR`, `TTM`, `YTD`.
        fiscal_type / with_fiscal_type: String = "type",
        start_date / with_start_date: NaiveDate = "start_date",
        end_date / with_end_date: NaiveDate = "end_date",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    /// Listings that only accept a cursor.
    SecuritiesCursorQuery: paged {
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    /// Historical values of a data tag, shared by companies, securities and indices.
    HistoricalDataQuery: paged {
        frequency / with_frequency: Frequency = "frequency",
        /// Period type filter, e.g. `FY` or `QTR`.
        period_type / with_period_type: String = "type",
        start_date / with_start_date: NaiveDate = "start_date",
        end_date / with_end_date: NaiveDate = "end_date",
        sort_order / with_sort_order: SortOrder = "sort_order",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}
