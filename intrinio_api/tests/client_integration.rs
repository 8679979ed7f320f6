use intrinio_api::query::{AllCompaniesQuery, FilingNotesQuery, HistoricalDataQuery, StockPricesQuery};
use intrinio_api::types::Paginated;
use intrinio_api::{collect_pages, Client, Configuration, Error, NoopClassifier};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), "demo-key").unwrap()
}

#[tokio::test]
async fn get_company_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("company.json");

    Mock::given(method("GET"))
        .and(path("/companies/AAPL"))
        .and(query_param("api_key", "demo-key"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let company = client(&mock_server).company().get_company("AAPL").await.unwrap();
    assert_eq!(company.ticker.as_deref(), Some("AAPL"));
    assert_eq!(company.name.as_deref(), Some("Apple Inc"));
    assert_eq!(company.employees, Some(132000));
    assert!(company.entity_status.is_none());
}

#[tokio::test]
async fn with_info_exposes_status_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies/AAPL"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-remaining", "99")
                .set_body_string(load_fixture("company.json")),
        )
        .mount(&mock_server)
        .await;

    let resp = client(&mock_server)
        .company()
        .get_company_with_info("AAPL")
        .await
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("x-ratelimit-remaining"), Some("99"));
    assert_eq!(resp.data.cik.as_deref(), Some("0000320193"));
}

#[tokio::test]
async fn get_company_not_found_is_http_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies/NOPE"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"error":"Not Found","message":"The requested company was not found"}"#),
        )
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .company()
        .get_company("NOPE")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    match err {
        Error::HttpStatus { operation, body, .. } => {
            assert_eq!(operation, "get_company");
            assert!(body.contains("not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn lenient_client_hands_error_bodies_to_the_deserializer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies/NOPE"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"Not Found"}"#))
        .mount(&mock_server)
        .await;

    let client = Client::builder(
        Configuration::default()
            .with_base_path(&mock_server.uri())
            .with_api_key("demo-key"),
    )
    .classifier(NoopClassifier)
    .build()
    .unwrap();

    let resp = client.company().get_company_with_info("NOPE").await.unwrap();
    assert_eq!(resp.status, 404);
    assert!(resp.data.ticker.is_none());
}

#[tokio::test]
async fn server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .company()
        .get_all_companies(&AllCompaniesQuery::default())
        .await;
    assert!(matches!(result, Err(Error::HttpStatus { status: 500, .. })));
}

#[tokio::test]
async fn malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .company()
        .get_all_companies(&AllCompaniesQuery::default())
        .await;
    match result {
        Err(Error::Deserialize { operation, body, .. }) => {
            assert_eq!(operation, "get_all_companies");
            assert_eq!(body, "{not valid json}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn filters_are_sent_before_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/securities/AAPL/prices"))
        .and(query_param("start_date", "2019-01-01"))
        .and(query_param("frequency", "daily"))
        .and(query_param("api_key", "demo-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("stock_prices.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = StockPricesQuery::default()
        .with_start_date(chrono::NaiveDate::from_ymd_opt(2019, 1, 1).unwrap())
        .with_frequency(intrinio_api::query::Frequency::Daily);
    let prices = client(&mock_server)
        .security()
        .get_security_stock_prices("AAPL", &query)
        .await
        .unwrap();
    assert_eq!(prices.stock_prices.len(), 2);
    assert!(!prices.has_more());

    let requests = mock_server.received_requests().await.unwrap();
    let raw_query = requests[0].url.query().unwrap();
    assert!(raw_query.ends_with("api_key=demo-key"), "{raw_query}");
}

#[tokio::test]
async fn missing_required_query_never_reaches_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .filing()
        .get_all_notes(&FilingNotesQuery::default().with_page_size(10))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidArgument {
            param: "company",
            operation: "get_all_notes"
        }
    ));
}

#[tokio::test]
async fn number_data_point() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies/AAPL/data_point/marketcap/number"))
        .and(header("accept", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("815220354100.0\n"))
        .mount(&mock_server)
        .await;

    let value = client(&mock_server)
        .company()
        .get_company_data_point_number("AAPL", "marketcap")
        .await
        .unwrap();
    assert_eq!(value, 815220354100.0);
}

#[tokio::test]
async fn text_data_point_is_returned_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies/AAPL/data_point/ceo/text"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Timothy D. Cook\n"))
        .mount(&mock_server)
        .await;

    let value = client(&mock_server)
        .company()
        .get_company_data_point_text("AAPL", "ceo")
        .await
        .unwrap();
    assert_eq!(value, "Timothy D. Cook\n");
}

#[tokio::test]
async fn non_numeric_data_point_is_a_deserialize_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/securities/AAPL/data_point/close_price/number"))
        .respond_with(ResponseTemplate::new(200).set_body_string("n/a"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .security()
        .get_security_data_point_number("AAPL", "close_price")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Deserialize { .. }));
}

#[tokio::test]
async fn historical_data_next_page_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies/AAPL/historical_data/marketcap"))
        .and(query_param("next_page", "NDk2MzI4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"historical_data":[{"date":"2018-03-31","value":1.0}],"next_page":null}"#,
        ))
        .with_priority(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/companies/AAPL/historical_data/marketcap"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("historical_data.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let api = client.company();
    let first = api
        .get_company_historical_data("AAPL", "marketcap", &HistoricalDataQuery::default())
        .await
        .unwrap();
    assert_eq!(first.historical_data.len(), 3);
    assert_eq!(first.next_page(), Some("NDk2MzI4"));

    let query = HistoricalDataQuery::default().with_next_page(first.next_page().unwrap());
    let second = api
        .get_company_historical_data("AAPL", "marketcap", &query)
        .await
        .unwrap();
    assert_eq!(second.historical_data.len(), 1);
    assert!(!second.has_more());
}

#[tokio::test]
async fn collect_pages_walks_company_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/companies"))
        .and(query_param("next_page", "MjAxOC0wMy0wMQ=="))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("companies_last_page.json")))
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/companies"))
        .and(query_param("sector", "Energy"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("companies.json")))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let query = AllCompaniesQuery::default().with_sector("Energy");
    let pages = collect_pages(query, None, |q| {
        let client = client.clone();
        async move { client.company().get_all_companies(&q).await }
    })
    .await
    .unwrap();

    assert_eq!(pages.len(), 2);
    let tickers: Vec<_> = pages
        .iter()
        .flat_map(|p| p.companies.iter())
        .filter_map(|c| c.ticker.as_deref())
        .collect();
    assert_eq!(tickers, ["AAPL", "MSFT", "XOM"]);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}
