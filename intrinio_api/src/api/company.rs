//! Companies: profiles, news, filings, fundamentals, securities and data tags.

use crate::query::{
    AllCompaniesQuery, CompanyFilingsQuery, CompanyFundamentalsQuery, CompanySearchQuery,
    HistoricalDataQuery, NewsQuery, SecuritiesCursorQuery,
};
use crate::types::{
    ApiResponseCompanies, ApiResponseCompaniesSearch, ApiResponseCompanyFilings,
    ApiResponseCompanyFundamentals, ApiResponseCompanyHistoricalData, ApiResponseCompanyNews,
    ApiResponseCompanySecurities, ApiResponseNews, Company,
};
use crate::{Client, Endpoint};

pub const GET_ALL_COMPANIES: Endpoint = Endpoint::get("get_all_companies", "/companies");
pub const GET_ALL_COMPANY_NEWS: Endpoint =
    Endpoint::get("get_all_company_news", "/companies/news");
pub const SEARCH_COMPANIES: Endpoint =
    Endpoint::get("search_companies", "/companies/search").requires(&["query"]);
pub const GET_COMPANY: Endpoint = Endpoint::get("get_company", "/companies/{identifier}");
pub const GET_COMPANY_NEWS: Endpoint =
    Endpoint::get("get_company_news", "/companies/{identifier}/news");
pub const GET_COMPANY_FILINGS: Endpoint =
    Endpoint::get("get_company_filings", "/companies/{identifier}/filings");
pub const GET_COMPANY_FUNDAMENTALS: Endpoint =
    Endpoint::get("get_company_fundamentals", "/companies/{identifier}/fundamentals");
pub const GET_COMPANY_SECURITIES: Endpoint =
    Endpoint::get("get_company_securities", "/companies/{identifier}/securities");
pub const GET_COMPANY_HISTORICAL_DATA: Endpoint = Endpoint::get(
    "get_company_historical_data",
    "/companies/{identifier}/historical_data/{tag}",
);
pub const GET_COMPANY_DATA_POINT_NUMBER: Endpoint = Endpoint::get(
    "get_company_data_point_number",
    "/companies/{identifier}/data_point/{tag}/number",
)
.text();
pub const GET_COMPANY_DATA_POINT_TEXT: Endpoint = Endpoint::get(
    "get_company_data_point_text",
    "/companies/{identifier}/data_point/{tag}/text",
)
.text();

/// Company endpoints. Obtained from [`Client::company`].
#[derive(Debug, Clone, Copy)]
pub struct CompanyApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn company(&self) -> CompanyApi<'_> {
        CompanyApi { client: self }
    }
}

api_methods! {
    CompanyApi {
        /// Lists all companies, optionally filtered.
        json fn get_all_companies / get_all_companies_with_info () [AllCompaniesQuery]
            -> ApiResponseCompanies = GET_ALL_COMPANIES;
        /// Latest news across all companies.
        json fn get_all_company_news / get_all_company_news_with_info () [NewsQuery]
            -> ApiResponseNews = GET_ALL_COMPANY_NEWS;
        /// Searches companies by name or ticker.
        json fn search_companies / search_companies_with_info () [CompanySearchQuery]
            -> ApiResponseCompaniesSearch = SEARCH_COMPANIES;
        /// Looks up a company by ticker, CIK, LEI or Intrinio ID.
        json fn get_company / get_company_with_info (identifier)
            -> Company = GET_COMPANY;
        json fn get_company_news / get_company_news_with_info (identifier) [NewsQuery]
            -> ApiResponseCompanyNews = GET_COMPANY_NEWS;
        json fn get_company_filings / get_company_filings_with_info (identifier) [CompanyFilingsQuery]
            -> ApiResponseCompanyFilings = GET_COMPANY_FILINGS;
        json fn get_company_fundamentals / get_company_fundamentals_with_info (identifier) [CompanyFundamentalsQuery]
            -> ApiResponseCompanyFundamentals = GET_COMPANY_FUNDAMENTALS;
        json fn get_company_securities / get_company_securities_with_info (identifier) [SecuritiesCursorQuery]
            -> ApiResponseCompanySecurities = GET_COMPANY_SECURITIES;
        /// Historical values of a data tag such as `marketcap` or `revenuegrowth`.
        json fn get_company_historical_data / get_company_historical_data_with_info (identifier, tag) [HistoricalDataQuery]
            -> ApiResponseCompanyHistoricalData = GET_COMPANY_HISTORICAL_DATA;
        /// Latest numeric value of a data tag.
        number fn get_company_data_point_number / get_company_data_point_number_with_info (identifier, tag)
            -> f64 = GET_COMPANY_DATA_POINT_NUMBER;
        /// Latest text value of a data tag.
        text fn get_company_data_point_text / get_company_data_point_text_with_info (identifier, tag)
            -> String = GET_COMPANY_DATA_POINT_TEXT;
    }
}
