//! Request executor behaviour observed through a recording transport.

use std::sync::{Arc, Mutex};

use intrinio_api::query::{CompanySearchQuery, FilingsQuery};
use intrinio_api::{
    all_endpoints, Client, Configuration, Endpoint, Error, HttpRequest, HttpResponse, NoQuery,
    QueryParams, Transport, TransportFuture,
};

#[derive(Default)]
struct SpyTransport {
    requests: Mutex<Vec<HttpRequest>>,
    status: u16,
    body: String,
}

impl SpyTransport {
    fn returning(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            status,
            body: body.to_string(),
        })
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for SpyTransport {
    fn execute<'a>(&'a self, request: HttpRequest) -> TransportFuture<'a> {
        self.requests.lock().unwrap().push(request);
        let response = HttpResponse::new(self.status, self.body.clone());
        Box::pin(async move { Ok(response) })
    }
}

fn client_with(spy: &Arc<SpyTransport>, api_key: Option<&str>) -> Client {
    let mut config = Configuration::default().with_base_path("https://api.test/v2");
    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }
    Client::builder(config)
        .shared_transport(spy.clone())
        .build()
        .unwrap()
}

fn needs_input(endpoint: &Endpoint) -> bool {
    endpoint.path_params().next().is_some() || !endpoint.required_query.is_empty()
}

fn required_query(endpoint: &Endpoint) -> QueryParams {
    endpoint
        .required_query
        .iter()
        .fold(QueryParams::new(), |q, name| q.with(name, "x".to_string()))
}

#[tokio::test]
async fn missing_inputs_fail_without_a_request() {
    let spy = SpyTransport::returning(200, "{}");
    let client = client_with(&spy, Some("k"));

    for endpoint in all_endpoints().iter().filter(|e| needs_input(e)) {
        let result = client
            .execute::<serde_json::Value, _>(endpoint, &[], &NoQuery)
            .await;
        match result {
            Err(Error::InvalidArgument { param, operation }) => {
                assert_eq!(operation, endpoint.operation);
                let expected = endpoint
                    .required_query
                    .first()
                    .copied()
                    .or_else(|| endpoint.path_params().next());
                assert_eq!(Some(param), expected);
            }
            other => panic!("{}: unexpected {other:?}", endpoint.operation),
        }
    }
    assert!(spy.requests().is_empty());
}

#[tokio::test]
async fn blank_values_count_as_missing() {
    let spy = SpyTransport::returning(200, "{}");
    let client = client_with(&spy, Some("k"));

    let err = client.company().get_company("   ").await.unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidArgument {
            param: "identifier",
            operation: "get_company"
        }
    ));

    let err = client
        .company()
        .search_companies(&CompanySearchQuery::default().with_query(""))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { param: "query", .. }));

    let err = client
        .options()
        .get_options_chain("AAPL", "", &Default::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { param: "expiration", .. }));

    assert!(spy.requests().is_empty());
}

#[tokio::test]
async fn dot_segment_identifiers_never_collapse_the_path() {
    let spy = SpyTransport::returning(200, "{}");
    let client = client_with(&spy, Some("k"));

    for identifier in [".", ".."] {
        let err = client.company().get_company(identifier).await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                param: "identifier",
                operation: "get_company"
            }
        ));
    }

    let err = client
        .company()
        .get_company_historical_data(".", "marketcap", &Default::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { param: "identifier", .. }));

    let err = client
        .security()
        .get_security_data_point_text("AAPL", "..")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { param: "tag", .. }));

    assert!(spy.requests().is_empty());
}

#[tokio::test]
async fn every_endpoint_sends_one_fully_substituted_request() {
    for endpoint in all_endpoints() {
        let spy = SpyTransport::returning(200, "1");
        let client = client_with(&spy, Some("k"));
        let params: Vec<(&str, &str)> = endpoint.path_params().map(|p| (p, "X Y")).collect();

        client
            .execute::<serde_json::Value, _>(endpoint, &params, &required_query(endpoint))
            .await
            .unwrap();

        let requests = spy.requests();
        assert_eq!(requests.len(), 1, "{}", endpoint.operation);
        let url = &requests[0].url;
        assert!(url.as_str().starts_with("https://api.test/v2/"));
        assert!(!url.path().contains('{'), "{}", url);
        assert!(!url.path().contains('}'), "{}", url);
        assert_eq!(
            url.path().matches("X%20Y").count(),
            endpoint.path_params().count(),
            "{}",
            url
        );
        let last = url.query_pairs().last().unwrap();
        assert_eq!((last.0.as_ref(), last.1.as_ref()), ("api_key", "k"));
    }
}

#[tokio::test]
async fn unfiltered_listing_sends_only_the_api_key() {
    let spy = SpyTransport::returning(200, r#"{"filings": [], "next_page": null}"#);
    let client = client_with(&spy, Some("secret"));

    client
        .company()
        .get_company_filings("AAPL", &Default::default())
        .await
        .unwrap();

    let requests = spy.requests();
    assert_eq!(requests[0].url.query(), Some("api_key=secret"));
    assert_eq!(requests[0].url.path(), "/v2/companies/AAPL/filings");
}

#[tokio::test]
async fn no_api_key_param_without_a_key() {
    for key in [None, Some(""), Some("  ")] {
        let spy = SpyTransport::returning(200, "{}");
        let client = client_with(&spy, key);
        client.company().get_company("AAPL").await.unwrap();

        let requests = spy.requests();
        assert_eq!(requests[0].url.query(), None);
        assert_eq!(requests[0].query_param("api_key"), None);
    }
}

#[tokio::test]
async fn path_values_are_percent_encoded_as_one_segment() {
    let spy = SpyTransport::returning(200, "{}");
    let client = client_with(&spy, None);

    client.company().get_company("BRK/A B").await.unwrap();
    client.index().get_economic_index_by_id("$GDP").await.unwrap();

    let requests = spy.requests();
    assert_eq!(requests[0].url.path(), "/v2/companies/BRK%2FA%20B");
    assert_eq!(requests[1].url.path(), "/v2/indices/economic/$GDP");
}

#[tokio::test]
async fn default_headers_and_accept_are_sent() {
    let spy = SpyTransport::returning(200, "42");
    let config = Configuration::default()
        .with_base_path("https://api.test")
        .with_default_header("X-Client-Tag", "reports");
    let client = Client::builder(config)
        .shared_transport(spy.clone())
        .build()
        .unwrap();

    client
        .security()
        .get_security_data_point_number("AAPL", "close_price")
        .await
        .unwrap();

    let requests = spy.requests();
    let headers = &requests[0].headers;
    assert_eq!(headers.get("x-client-tag").unwrap(), "reports");
    assert_eq!(headers.get("accept").unwrap(), "text/plain");
}

#[tokio::test]
async fn custom_classifier_short_circuits_deserialization() {
    let spy = SpyTransport::returning(200, r#"{"error": "quota exceeded"}"#);
    let client = Client::builder(Configuration::default().with_api_key("k"))
        .shared_transport(spy.clone())
        .classifier(|operation: &str, resp: &HttpResponse| {
            resp.body.contains("\"error\"").then(|| Error::Rejected {
                operation: operation.to_string(),
                message: "quota exceeded".to_string(),
            })
        })
        .build()
        .unwrap();

    let err = client
        .filing()
        .get_all_filings(&FilingsQuery::default().with_company("AAPL"))
        .await
        .unwrap_err();
    match err {
        Error::Rejected { operation, message } => {
            assert_eq!(operation, "get_all_filings");
            assert_eq!(message, "quota exceeded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(spy.requests().len(), 1);
}

#[tokio::test]
async fn text_execution_of_a_json_endpoint_returns_the_raw_body() {
    let body = "{\"ticker\": \"AAPL\"}\n";
    let spy = SpyTransport::returning(200, body);
    let client = client_with(&spy, Some("k"));
    let endpoint = intrinio_api::find_endpoint("get_company").unwrap();

    let resp = client
        .execute_text_with_info(endpoint, &[("identifier", "AAPL")], &NoQuery)
        .await
        .unwrap();
    assert_eq!(resp.data, body);
    assert_eq!(spy.requests()[0].headers.get("accept").unwrap(), "application/json");
}

#[tokio::test]
async fn note_text_keeps_surrounding_whitespace() {
    let spy = SpyTransport::returning(200, "  Note 1. Basis of presentation\n\n");
    let client = client_with(&spy, Some("k"));

    let text = client.filing().get_note_text("xbn_123").await.unwrap();
    assert_eq!(text, "  Note 1. Basis of presentation\n\n");
}

#[tokio::test]
async fn default_classifier_rejects_non_success() {
    let spy = SpyTransport::returning(401, r#"{"error":"Unauthorized"}"#);
    let client = client_with(&spy, Some("bad"));

    let err = client.zacks().get_zacks_eps_estimates(&Default::default()).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}
