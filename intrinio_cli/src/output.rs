use anyhow::Result;
use chrono::NaiveDate;
use clap::ValueEnum;
use intrinio_api::types::{
    CompanyNews, CompanyNewsSummary, CompanySummary, Filing, FilingNoteSummary, FilingSummary,
    HistoricalData,
    OptionChainEntry, OptionContract, OptionPrice, SecuritySummary, StockExchange,
    StockPriceSummary, ZacksAnalystRating, ZacksEpsEstimate, ZacksEpsSurprise,
    ZacksLongTermGrowthRate, ZacksSalesSurprise, ZacksTargetPriceConsensus,
};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
pub struct CompanyRow {
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "CIK")]
    #[serde(rename = "CIK")]
    cik: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
}

#[derive(Tabled, Serialize)]
pub struct NewsRow {
    #[tabled(rename = "Published")]
    #[serde(rename = "Published")]
    published: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

#[derive(Tabled, Serialize)]
pub struct FilingRow {
    #[tabled(rename = "Filed")]
    #[serde(rename = "Filed")]
    filed: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    report_type: String,
    #[tabled(rename = "Period End")]
    #[serde(rename = "Period End")]
    period_end: String,
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
}

#[derive(Tabled, Serialize)]
pub struct NoteRow {
    #[tabled(rename = "Tag")]
    #[serde(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    report_type: String,
    #[tabled(rename = "Period")]
    #[serde(rename = "Period")]
    period: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
}

#[derive(Tabled, Serialize)]
pub struct IndexRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
}

#[derive(Tabled, Serialize)]
pub struct HistoricalRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
pub struct SecurityRow {
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "FIGI")]
    #[serde(rename = "FIGI")]
    figi: String,
    #[tabled(rename = "Currency")]
    #[serde(rename = "Currency")]
    currency: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
}

#[derive(Tabled, Serialize)]
pub struct PriceRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Open")]
    #[serde(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    #[serde(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    #[serde(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: String,
}

#[derive(Tabled, Serialize)]
pub struct OptionRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    option_type: String,
    #[tabled(rename = "Strike")]
    #[serde(rename = "Strike")]
    strike: String,
    #[tabled(rename = "Expiration")]
    #[serde(rename = "Expiration")]
    expiration: String,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    close: String,
    #[tabled(rename = "Bid")]
    #[serde(rename = "Bid")]
    bid: String,
    #[tabled(rename = "Ask")]
    #[serde(rename = "Ask")]
    ask: String,
}

#[derive(Tabled, Serialize)]
pub struct OptionPriceRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Open Interest")]
    #[serde(rename = "Open Interest")]
    open_interest: String,
    #[tabled(rename = "IV")]
    #[serde(rename = "IV")]
    implied_volatility: String,
}

#[derive(Tabled, Serialize)]
pub struct ExpirationRow {
    #[tabled(rename = "Expiration")]
    #[serde(rename = "Expiration")]
    expiration: String,
}

#[derive(Tabled, Serialize)]
pub struct RatingRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Mean")]
    #[serde(rename = "Mean")]
    mean: String,
    #[tabled(rename = "Buy")]
    #[serde(rename = "Buy")]
    buy: i32,
    #[tabled(rename = "Hold")]
    #[serde(rename = "Hold")]
    hold: i32,
    #[tabled(rename = "Sell")]
    #[serde(rename = "Sell")]
    sell: i32,
}

#[derive(Tabled, Serialize)]
pub struct SurpriseRow {
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Reported")]
    #[serde(rename = "Reported")]
    reported: String,
    #[tabled(rename = "Period")]
    #[serde(rename = "Period")]
    period: String,
    #[tabled(rename = "Estimate")]
    #[serde(rename = "Estimate")]
    estimate: String,
    #[tabled(rename = "Actual")]
    #[serde(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Surprise %")]
    #[serde(rename = "Surprise %")]
    surprise: String,
}

#[derive(Tabled, Serialize)]
pub struct EstimateRow {
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Period")]
    #[serde(rename = "Period")]
    period: String,
    #[tabled(rename = "Count")]
    #[serde(rename = "Count")]
    count: String,
    #[tabled(rename = "Mean")]
    #[serde(rename = "Mean")]
    mean: String,
    #[tabled(rename = "High")]
    #[serde(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    #[serde(rename = "Low")]
    low: String,
}

#[derive(Tabled, Serialize)]
pub struct ExchangeRow {
    #[tabled(rename = "MIC")]
    #[serde(rename = "MIC")]
    mic: String,
    #[tabled(rename = "Acronym")]
    #[serde(rename = "Acronym")]
    acronym: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "City")]
    #[serde(rename = "City")]
    city: String,
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    country: String,
}

/// Key/value view of a single record.
#[derive(Tabled, Serialize)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

// -- Row builders --

pub fn build_company_rows<'a>(
    companies: impl IntoIterator<Item = &'a CompanySummary>,
) -> Vec<CompanyRow> {
    companies
        .into_iter()
        .map(|c| CompanyRow {
            ticker: text(&c.ticker),
            name: text(&c.name),
            cik: text(&c.cik),
            id: text(&c.id),
        })
        .collect()
}

pub fn build_news_rows<'a>(news: impl IntoIterator<Item = &'a CompanyNewsSummary>) -> Vec<NewsRow> {
    news.into_iter()
        .map(|n| NewsRow {
            published: text(&n.publication_date),
            title: text(&n.title),
            url: text(&n.url),
        })
        .collect()
}

pub fn build_article_rows<'a>(news: impl IntoIterator<Item = &'a CompanyNews>) -> Vec<NewsRow> {
    news.into_iter()
        .map(|n| NewsRow {
            published: text(&n.publication_date),
            title: text(&n.title),
            url: text(&n.url),
        })
        .collect()
}

pub fn build_filing_summary_rows<'a>(
    filings: impl IntoIterator<Item = &'a FilingSummary>,
) -> Vec<FilingRow> {
    filings
        .into_iter()
        .map(|f| FilingRow {
            filed: date(f.filing_date),
            report_type: text(&f.report_type),
            period_end: date(f.period_end_date),
            ticker: String::new(),
            id: text(&f.id),
        })
        .collect()
}

pub fn build_filing_rows<'a>(filings: impl IntoIterator<Item = &'a Filing>) -> Vec<FilingRow> {
    filings
        .into_iter()
        .map(|f| FilingRow {
            filed: date(f.filing_date),
            report_type: text(&f.report_type),
            period_end: date(f.period_end_date),
            ticker: f
                .company
                .as_ref()
                .map(|c| text(&c.ticker))
                .unwrap_or_default(),
            id: text(&f.id),
        })
        .collect()
}

pub fn build_note_rows<'a>(notes: impl IntoIterator<Item = &'a FilingNoteSummary>) -> Vec<NoteRow> {
    notes
        .into_iter()
        .map(|n| {
            let filing = n.filing.as_ref();
            NoteRow {
                tag: text(&n.xbrl_tag),
                report_type: filing.map(|f| text(&f.report_type)).unwrap_or_default(),
                period: filing.map(|f| date(f.period_ended)).unwrap_or_default(),
                id: text(&n.id),
            }
        })
        .collect()
}

pub fn index_row(symbol: &Option<String>, name: &Option<String>, id: &Option<String>) -> IndexRow {
    IndexRow {
        symbol: text(symbol),
        name: text(name),
        id: text(id),
    }
}

pub fn build_historical_rows<'a>(
    data: impl IntoIterator<Item = &'a HistoricalData>,
) -> Vec<HistoricalRow> {
    data.into_iter()
        .map(|d| HistoricalRow {
            date: d.date.to_string(),
            value: d.value.map(format_number).unwrap_or_default(),
        })
        .collect()
}

pub fn build_security_rows<'a>(
    securities: impl IntoIterator<Item = &'a SecuritySummary>,
) -> Vec<SecurityRow> {
    securities
        .into_iter()
        .map(|s| SecurityRow {
            ticker: text(&s.ticker),
            name: text(&s.name),
            figi: text(&s.figi),
            currency: text(&s.currency),
            id: text(&s.id),
        })
        .collect()
}

pub fn build_price_rows<'a>(prices: impl IntoIterator<Item = &'a StockPriceSummary>) -> Vec<PriceRow> {
    prices
        .into_iter()
        .map(|p| PriceRow {
            date: p.date.to_string(),
            open: price(p.open),
            high: price(p.high),
            low: price(p.low),
            close: price(p.close),
            volume: p.volume.map(format_volume).unwrap_or_default(),
        })
        .collect()
}

pub fn build_option_rows<'a>(
    contracts: impl IntoIterator<Item = (&'a OptionContract, Option<&'a OptionPrice>)>,
) -> Vec<OptionRow> {
    contracts
        .into_iter()
        .map(|(o, p)| OptionRow {
            code: text(&o.code),
            option_type: text(&o.option_type),
            strike: price(o.strike),
            expiration: date(o.expiration),
            close: price(p.and_then(|p| p.close)),
            bid: price(p.and_then(|p| p.close_bid)),
            ask: price(p.and_then(|p| p.close_ask)),
        })
        .collect()
}

pub fn build_chain_rows(chain: &[OptionChainEntry]) -> Vec<OptionRow> {
    build_option_rows(
        chain
            .iter()
            .filter_map(|e| e.option.as_ref().map(|o| (o, e.price.as_ref()))),
    )
}

pub fn build_option_price_rows<'a>(
    prices: impl IntoIterator<Item = &'a OptionPrice>,
) -> Vec<OptionPriceRow> {
    prices
        .into_iter()
        .map(|p| OptionPriceRow {
            date: date(p.date),
            close: price(p.close),
            volume: p.volume.map(format_volume).unwrap_or_default(),
            open_interest: p.open_interest.map(format_volume).unwrap_or_default(),
            implied_volatility: p.implied_volatility.map(format_number).unwrap_or_default(),
        })
        .collect()
}

pub fn build_expiration_rows(expirations: &[NaiveDate]) -> Vec<ExpirationRow> {
    expirations
        .iter()
        .map(|d| ExpirationRow {
            expiration: d.to_string(),
        })
        .collect()
}

pub fn build_rating_rows<'a>(
    ratings: impl IntoIterator<Item = &'a ZacksAnalystRating>,
) -> Vec<RatingRow> {
    ratings
        .into_iter()
        .map(|r| RatingRow {
            date: date(r.date),
            ticker: r
                .security
                .as_ref()
                .map(|s| text(&s.ticker))
                .unwrap_or_default(),
            mean: price(r.mean),
            buy: r.strong_buys.unwrap_or(0) + r.buys.unwrap_or(0),
            hold: r.holds.unwrap_or(0),
            sell: r.strong_sells.unwrap_or(0) + r.sells.unwrap_or(0),
        })
        .collect()
}

pub fn build_eps_surprise_rows<'a>(
    surprises: impl IntoIterator<Item = &'a ZacksEpsSurprise>,
) -> Vec<SurpriseRow> {
    surprises
        .into_iter()
        .map(|s| SurpriseRow {
            ticker: text(&s.ticker),
            reported: date(s.actual_reported_date),
            period: fiscal_period(s.fiscal_year, &s.fiscal_quarter),
            estimate: price(s.eps_mean_estimate),
            actual: price(s.eps_actual),
            surprise: price(s.eps_percent_diff),
        })
        .collect()
}

pub fn build_sales_surprise_rows<'a>(
    surprises: impl IntoIterator<Item = &'a ZacksSalesSurprise>,
) -> Vec<SurpriseRow> {
    surprises
        .into_iter()
        .map(|s| SurpriseRow {
            ticker: text(&s.ticker),
            reported: date(s.actual_reported_date),
            period: fiscal_period(s.fiscal_year, &s.fiscal_quarter),
            estimate: s.sales_mean_estimate.map(format_volume).unwrap_or_default(),
            actual: s.sales_actual.map(format_volume).unwrap_or_default(),
            surprise: price(s.sales_percent_diff),
        })
        .collect()
}

pub fn build_eps_estimate_rows<'a>(
    estimates: impl IntoIterator<Item = &'a ZacksEpsEstimate>,
) -> Vec<EstimateRow> {
    estimates
        .into_iter()
        .map(|e| EstimateRow {
            ticker: text(&e.ticker),
            date: date(e.estimate_date),
            period: fiscal_period(e.fiscal_year, &e.fiscal_period),
            count: count(e.count),
            mean: price(e.mean),
            high: price(e.high),
            low: price(e.low),
        })
        .collect()
}

pub fn build_target_price_rows<'a>(
    consensuses: impl IntoIterator<Item = &'a ZacksTargetPriceConsensus>,
) -> Vec<EstimateRow> {
    consensuses
        .into_iter()
        .map(|c| EstimateRow {
            ticker: text(&c.ticker),
            date: date(c.estimate_date),
            period: String::new(),
            count: count(c.broker_count),
            mean: price(c.mean),
            high: price(c.high),
            low: price(c.low),
        })
        .collect()
}

pub fn build_growth_rate_rows<'a>(
    rates: impl IntoIterator<Item = &'a ZacksLongTermGrowthRate>,
) -> Vec<EstimateRow> {
    rates
        .into_iter()
        .map(|r| EstimateRow {
            ticker: text(&r.ticker),
            date: date(r.estimate_date),
            period: String::new(),
            count: count(r.count),
            mean: price(r.mean),
            high: price(r.high),
            low: price(r.low),
        })
        .collect()
}

pub fn build_exchange_rows<'a>(
    exchanges: impl IntoIterator<Item = &'a StockExchange>,
) -> Vec<ExchangeRow> {
    exchanges
        .into_iter()
        .map(|e| ExchangeRow {
            mic: text(&e.mic),
            acronym: text(&e.acronym),
            name: text(&e.name),
            city: text(&e.city),
            country: text(&e.country),
        })
        .collect()
}

/// One row per non-null top-level field of `record`, sorted by field name.
pub fn build_field_rows<T: Serialize>(record: &T) -> Result<Vec<FieldRow>> {
    let value = serde_json::to_value(record)?;
    let Some(map) = value.as_object() else {
        return Ok(vec![FieldRow {
            field: "value".to_string(),
            value: scalar(&value),
        }]);
    };
    Ok(map
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| FieldRow {
            field: k.clone(),
            value: scalar(v),
        })
        .collect())
}

// -- Rendering --

/// Prints `rows` in the chosen format. JSON output uses `data` instead, so
/// nothing is lost to the tabular projection.
pub fn emit<R, T>(data: &T, rows: &[R], format: OutputFormat) -> Result<()>
where
    R: Tabled + Serialize,
    T: Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Json => print_json(data),
    }
    Ok(())
}

pub fn print_csv<R: Serialize>(rows: &[R]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Cell formatting --

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn date(value: Option<NaiveDate>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}

fn price(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

fn count(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn fiscal_period(year: Option<i32>, period: &Option<String>) -> String {
    match (year, period.as_deref()) {
        (Some(y), Some(p)) => format!("{} {}", p, y),
        (Some(y), None) => y.to_string(),
        (None, Some(p)) => p.to_string(),
        (None, None) => String::new(),
    }
}

fn scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn format_volume(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format_number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intrinio_api::types::{ApiResponseCompanies, ApiResponseOptionsChain, Company};

    fn load_companies_fixture() -> Vec<CompanySummary> {
        let json_str = include_str!("../../intrinio_api/tests/fixtures/companies.json");
        let resp: ApiResponseCompanies = serde_json::from_str(json_str).unwrap();
        resp.companies
    }

    fn load_chain_fixture() -> Vec<OptionChainEntry> {
        let json_str = include_str!("../../intrinio_api/tests/fixtures/options_chain.json");
        let resp: ApiResponseOptionsChain = serde_json::from_str(json_str).unwrap();
        resp.chain
    }

    fn csv_from_rows<T: Serialize>(rows: &[T]) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.serialize(row).unwrap();
        }
        wtr.flush().unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    // -- number formatting --

    #[test]
    fn test_format_volume_scales() {
        assert_eq!(format_volume(21_835_747.0), "21.8M");
        assert_eq!(format_volume(2_500_000_000.0), "2.5B");
        assert_eq!(format_volume(50_000.0), "50.0K");
        assert_eq!(format_volume(500.0), "500");
        assert_eq!(format_volume(0.0), "0");
    }

    #[test]
    fn test_format_number_drops_integral_fraction() {
        assert_eq!(format_number(746079000000.0), "746079000000");
        assert_eq!(format_number(0.2451), "0.2451");
    }

    #[test]
    fn test_fiscal_period() {
        assert_eq!(fiscal_period(Some(2018), &Some("Q4".to_string())), "Q4 2018");
        assert_eq!(fiscal_period(Some(2018), &None), "2018");
        assert_eq!(fiscal_period(None, &None), "");
    }

    // -- row builders --

    #[test]
    fn test_build_company_rows_mapping() {
        let companies = load_companies_fixture();
        let rows = build_company_rows(&companies);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].ticker, "AAPL");
        assert_eq!(rows[0].name, "Apple Inc");
        assert_eq!(rows[0].cik, "0000320193");
        // missing ticker renders empty
        assert_eq!(rows[2].ticker, "");
    }

    #[test]
    fn test_build_chain_rows_with_and_without_price() {
        let chain = load_chain_fixture();
        let rows = build_chain_rows(&chain);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].code, "AAPL190621C00180000");
        assert_eq!(rows[0].option_type, "call");
        assert_eq!(rows[0].strike, "180.00");
        assert_eq!(rows[0].bid, "8.30");
        assert_eq!(rows[1].close, "");
    }

    #[test]
    fn test_build_rating_rows_sums_buckets() {
        let rating: ZacksAnalystRating = serde_json::from_value(serde_json::json!({
            "date": "2019-02-01",
            "mean": 1.75,
            "strong_buys": 10,
            "buys": 3,
            "holds": 6,
            "sells": 1,
            "strong_sells": null,
            "security": {"ticker": "AAPL"}
        }))
        .unwrap();
        let rows = build_rating_rows([&rating]);
        assert_eq!(rows[0].ticker, "AAPL");
        assert_eq!(rows[0].buy, 13);
        assert_eq!(rows[0].hold, 6);
        assert_eq!(rows[0].sell, 1);
    }

    #[test]
    fn test_build_field_rows_skips_nulls() {
        let company: Company =
            serde_json::from_str(r#"{"ticker": "AAPL", "employees": 132000}"#).unwrap();
        let rows = build_field_rows(&company).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().any(|r| r.field == "ticker" && r.value == "AAPL"));
        assert!(rows.iter().any(|r| r.field == "employees" && r.value == "132000"));
    }

    #[test]
    fn test_build_field_rows_for_scalars() {
        let rows = build_field_rows(&42.5).unwrap();
        assert_eq!(rows[0].field, "value");
        assert_eq!(rows[0].value, "42.5");
    }

    // -- CSV / markdown --

    #[test]
    fn test_csv_company_headers() {
        let rows = build_company_rows(&load_companies_fixture());
        let csv = csv_from_rows(&rows);
        assert_eq!(csv.lines().next().unwrap(), "Ticker,Name,CIK,ID");
        assert_eq!(csv.lines().count(), 4);
    }

    #[test]
    fn test_csv_option_headers() {
        let rows = build_chain_rows(&load_chain_fixture());
        let csv = csv_from_rows(&rows);
        assert_eq!(
            csv.lines().next().unwrap(),
            "Code,Type,Strike,Expiration,Close,Bid,Ask"
        );
    }

    #[test]
    fn test_markdown_company_table() {
        let rows = build_company_rows(&load_companies_fixture());
        let mut table = Table::new(&rows);
        table.with(Style::markdown());
        let md = table.to_string();

        assert!(md.contains('|'));
        assert!(md.contains("---"));
        let header_line = md.lines().next().unwrap();
        assert!(header_line.contains("Ticker"));
        assert!(header_line.contains("CIK"));
    }
}
