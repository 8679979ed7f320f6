use chrono::NaiveDate;
use intrinio_api::query::{
    AllCompaniesQuery, CompanyFundamentalsQuery, Frequency, HistoricalDataQuery, OptionType,
    OptionsChainQuery, PriceSource, SortOrder, StockExchangesQuery, ZacksAnalystRatingsQuery,
};
use intrinio_api::{PageCursor, Query, QueryParams};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

#[test]
fn default_queries_are_empty() {
    assert!(AllCompaniesQuery::default().query_pairs().is_empty());
    assert!(HistoricalDataQuery::default().query_pairs().is_empty());
    let url = StockExchangesQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn fundamentals_type_uses_wire_name() {
    let url = CompanyFundamentalsQuery::default()
        .with_fiscal_year(2018)
        .with_fiscal_type("FY")
        .with_statement_code("income_statement")
        .add_to_url(&base_url());
    insta::assert_snapshot!(url.query().unwrap(), @"fiscal_year=2018&statement_code=income_statement&type=FY");
}

#[test]
fn historical_data_enums_render_lowercase() {
    let query = HistoricalDataQuery::default()
        .with_frequency(Frequency::Quarterly)
        .with_sort_order(SortOrder::Asc)
        .with_start_date(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap());
    let pairs = query.query_pairs();
    assert!(pairs.contains(&("frequency".to_string(), "quarterly".to_string())));
    assert!(pairs.contains(&("sort_order".to_string(), "asc".to_string())));
    assert!(pairs.contains(&("start_date".to_string(), "2018-01-01".to_string())));
}

#[test]
fn options_chain_query() {
    let url = OptionsChainQuery::default()
        .with_type(OptionType::Put)
        .with_strike_greater_than(150.5)
        .with_source(PriceSource::Realtime)
        .add_to_url(&base_url());
    insta::assert_snapshot!(url.query().unwrap(), @"type=put&strike_greater_than=150.5&source=realtime");
}

#[test]
fn values_are_form_encoded() {
    let url = AllCompaniesQuery::default()
        .with_industry_group("Oil & Gas")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("industry_group=Oil+%26+Gas"));
}

#[test]
fn next_page_token_is_passed_through() {
    let mut query = ZacksAnalystRatingsQuery::default().with_identifier("AAPL");
    query.set_next_page(Some("ab+/==".to_string()));
    let pairs = query.query_pairs();
    assert_eq!(pairs.last().unwrap(), &("next_page".to_string(), "ab+/==".to_string()));

    query.set_next_page(None);
    assert!(query.query_pairs().iter().all(|(k, _)| k != "next_page"));
}

#[test]
fn query_params_replaces_cursor() {
    let mut params = QueryParams::new()
        .with("identifier", "AAPL".to_string())
        .with_opt("page_size", Some(100u32))
        .with_opt::<bool>("active", None);
    params.set_next_page(Some("one".to_string()));
    params.set_next_page(Some("two".to_string()));
    assert_eq!(
        params.query_pairs(),
        vec![
            ("identifier".to_string(), "AAPL".to_string()),
            ("page_size".to_string(), "100".to_string()),
            ("next_page".to_string(), "two".to_string()),
        ]
    );
}

#[test]
fn enums_parse_from_wire_names() {
    assert_eq!("weekly".parse::<Frequency>(), Ok(Frequency::Weekly));
    assert_eq!("call".parse::<OptionType>(), Ok(OptionType::Call));
    assert_eq!("bats_delayed".parse::<PriceSource>(), Ok(PriceSource::BatsDelayed));
    assert!("hourly".parse::<Frequency>().is_err());
}
