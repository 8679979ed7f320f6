//! Zacks analyst ratings, estimates and surprises.

use crate::query::{
    ZacksAnalystRatingsQuery, ZacksEpsEstimatesQuery, ZacksEpsSurprisesQuery,
    ZacksIdentifierQuery, ZacksSalesSurprisesQuery,
};
use crate::types::{
    ApiResponseZacksAnalystRatings, ApiResponseZacksEpsEstimates, ApiResponseZacksEpsSurprises,
    ApiResponseZacksLongTermGrowthRates, ApiResponseZacksSalesSurprises,
    ApiResponseZacksTargetPriceConsensuses,
};
use crate::{Client, Endpoint};

pub const GET_ZACKS_ANALYST_RATINGS: Endpoint =
    Endpoint::get("get_zacks_analyst_ratings", "/zacks/analyst_ratings");
pub const GET_ZACKS_EPS_SURPRISES: Endpoint =
    Endpoint::get("get_zacks_eps_surprises", "/zacks/eps_surprises");
pub const GET_ZACKS_SALES_SURPRISES: Endpoint =
    Endpoint::get("get_zacks_sales_surprises", "/zacks/sales_surprises");
pub const GET_ZACKS_EPS_ESTIMATES: Endpoint =
    Endpoint::get("get_zacks_eps_estimates", "/zacks/eps_estimates");
pub const GET_ZACKS_TARGET_PRICE_CONSENSUSES: Endpoint = Endpoint::get(
    "get_zacks_target_price_consensuses",
    "/zacks/target_price_consensus",
);
pub const GET_ZACKS_LONG_TERM_GROWTH_RATES: Endpoint =
    Endpoint::get("get_zacks_long_term_growth_rates", "/zacks/long_term_growth_rates");

/// Zacks endpoints. Obtained from [`Client::zacks`].
#[derive(Debug, Clone, Copy)]
pub struct ZacksApi<'a> {
    client: &'a Client,
}

impl Client {
    pub fn zacks(&self) -> ZacksApi<'_> {
        ZacksApi { client: self }
    }
}

api_methods! {
    ZacksApi {
        json fn get_zacks_analyst_ratings / get_zacks_analyst_ratings_with_info () [ZacksAnalystRatingsQuery]
            -> ApiResponseZacksAnalystRatings = GET_ZACKS_ANALYST_RATINGS;
        json fn get_zacks_eps_surprises / get_zacks_eps_surprises_with_info () [ZacksEpsSurprisesQuery]
            -> ApiResponseZacksEpsSurprises = GET_ZACKS_EPS_SURPRISES;
        json fn get_zacks_sales_surprises / get_zacks_sales_surprises_with_info () [ZacksSalesSurprisesQuery]
            -> ApiResponseZacksSalesSurprises = GET_ZACKS_SALES_SURPRISES;
        json fn get_zacks_eps_estimates / get_zacks_eps_estimates_with_info () [ZacksEpsEstimatesQuery]
            -> ApiResponseZacksEpsEstimates = GET_ZACKS_EPS_ESTIMATES;
        json fn get_zacks_target_price_consensuses / get_zacks_target_price_consensuses_with_info () [ZacksIdentifierQuery]
            -> ApiResponseZacksTargetPriceConsensuses = GET_ZACKS_TARGET_PRICE_CONSENSUSES;
        json fn get_zacks_long_term_growth_rates / get_zacks_long_term_growth_rates_with_info () [ZacksIdentifierQuery]
            -> ApiResponseZacksLongTermGrowthRates = GET_ZACKS_LONG_TERM_GROWTH_RATES;
    }
}
