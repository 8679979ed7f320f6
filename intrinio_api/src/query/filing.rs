use chrono::NaiveDate;

use super::define_query;

define_query! {
    /// Filters for `GET /filings`. `company` is required.
    FilingsQuery: paged {
        /// Ticker, CIK or Intrinio ID of the filer.
        company / with_company: String = "company",
        /// SEC form type, e.g. `10-K` or `10-Q`.
        report_type / with_report_type: String = "report_type",
        start_date / with_start_date: NaiveDate = "start_date",
        end_date / with_end_date: NaiveDate = "end_date",
        industry_category / with_industry_category: String = "industry_category",
        industry_group / with_industry_group: String = "industry_group",
        thea_enabled / with_thea_enabled: bool = "thea_enabled",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    /// Filters for `GET /filings/notes`. `company` is required.
    FilingNotesQuery: paged {
        company / with_company: String = "company",
        report_type / with_report_type: String = "report_type",
        filing_start_date / with_filing_start_date: NaiveDate = "filing_start_date",
        filing_end_date / with_filing_end_date: NaiveDate = "filing_end_date",
        period_ended_start_date / with_period_ended_start_date: NaiveDate = "period_ended_start_date",
        period_ended_end_date / with_period_ended_end_date: NaiveDate = "period_ended_end_date",
        page_size / with_page_size: u32 = "page_size",
        next_page / with_next_page: String = "next_page",
    }
}

define_query! {
    FilingNoteQuery {
        /// `text` or `html`.
        content_format / with_content_format: String = "content_format",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{PageCursor, Query};

    #[test]
    fn filings_query_includes_company_first() {
        let pairs = FilingsQuery::default()
            .with_report_type("10-K")
            .with_company("AAPL")
            .query_pairs();
        assert_eq!(pairs[0], ("company".to_string(), "AAPL".to_string()));
        assert_eq!(pairs[1], ("report_type".to_string(), "10-K".to_string()));
    }

    #[test]
    fn notes_query_cursor() {
        let mut query = FilingNotesQuery::default().with_company("AAPL");
        query.set_next_page(Some("abc==".to_string()));
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("next_page".to_string(), "abc==".to_string())));
    }
}
