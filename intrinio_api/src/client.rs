//! HTTP client for the Intrinio API: the single request executor every
//! resource call site delegates to.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    classifier::{FailureClassifier, StatusClassifier},
    config::Configuration,
    endpoint::Endpoint,
    errors::truncate_body,
    query::Query,
    transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport},
    types::ApiResponse,
    Error,
};

/// HTTP client for the Intrinio API.
///
/// Holds the configuration, transport and failure classifier behind `Arc`s,
/// so cloning is cheap and clones share everything. Nothing is mutated after
/// construction.
#[derive(Clone)]
pub struct Client {
    config: Arc<Configuration>,
    base_url: Url,
    transport: Arc<dyn Transport>,
    classifier: Arc<dyn FailureClassifier>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.config.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Client {
    /// Creates a client using reqwest and the default [`StatusClassifier`].
    pub fn new(config: Configuration) -> Result<Self, Error> {
        Self::builder(config).build()
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::new(
            Configuration::default()
                .with_base_path(base_url)
                .with_api_key(api_key),
        )
    }

    pub fn builder(config: Configuration) -> ClientBuilder {
        ClientBuilder {
            config,
            transport: None,
            classifier: None,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Builds the request URL: base path, substituted path, set query
    /// parameters, then `api_key` when one is configured.
    pub fn build_url<Q>(
        &self,
        endpoint: &Endpoint,
        path_params: &[(&str, &str)],
        query: &Q,
    ) -> Result<Url, Error>
    where
        Q: Query + ?Sized,
    {
        let pairs = query.query_pairs();
        endpoint.validate_query(&pairs)?;
        let mut url = endpoint.resolve(&self.base_url, path_params)?;
        {
            let mut serializer = url.query_pairs_mut();
            serializer.extend_pairs(pairs);
            if let Some(key) = self.config.effective_api_key() {
                serializer.append_pair("api_key", key);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }

    fn build_request(&self, endpoint: &Endpoint, url: Url) -> HttpRequest {
        let mut request = HttpRequest::new(endpoint.method, url);
        for (name, value) in &self.config.default_headers {
            request = request.with_header(name, value);
        }
        request.with_header("accept", endpoint.format.accept())
    }

    /// Validates, sends and classifies one call. Nothing reaches the
    /// transport unless every required parameter is present.
    async fn send<Q>(
        &self,
        endpoint: &Endpoint,
        path_params: &[(&str, &str)],
        query: &Q,
    ) -> Result<HttpResponse, Error>
    where
        Q: Query + ?Sized,
    {
        let url = self.build_url(endpoint, path_params, query)?;
        tracing::debug!(
            operation = endpoint.operation,
            path = url.path(),
            "Sending request"
        );
        let request = self.build_request(endpoint, url);
        let resp = self.transport.execute(request).await?;
        tracing::debug!(
            operation = endpoint.operation,
            status = resp.status,
            "Received response"
        );

        if let Some(err) = self.classifier.classify(endpoint.operation, &resp) {
            return Err(err);
        }
        Ok(resp)
    }

    /// Calls a JSON endpoint and returns the payload with status and headers.
    pub async fn execute_with_info<T, Q>(
        &self,
        endpoint: &Endpoint,
        path_params: &[(&str, &str)],
        query: &Q,
    ) -> Result<ApiResponse<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query + ?Sized,
    {
        let resp = self.send(endpoint, path_params, query).await?;
        let data = serde_json::from_str::<T>(&resp.body).map_err(|e| Error::Deserialize {
            operation: endpoint.operation.to_string(),
            message: e.to_string(),
            body: truncate_body(&resp.body),
        })?;
        Ok(ApiResponse {
            status: resp.status,
            headers: resp.headers,
            data,
        })
    }

    /// Calls a JSON endpoint and returns only the payload.
    pub async fn execute<T, Q>(
        &self,
        endpoint: &Endpoint,
        path_params: &[(&str, &str)],
        query: &Q,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query + ?Sized,
    {
        self.execute_with_info(endpoint, path_params, query)
            .await
            .map(ApiResponse::into_data)
    }

    /// Calls a `text/plain` endpoint; the body is returned as received.
    pub async fn execute_text_with_info<Q>(
        &self,
        endpoint: &Endpoint,
        path_params: &[(&str, &str)],
        query: &Q,
    ) -> Result<ApiResponse<String>, Error>
    where
        Q: Query + ?Sized,
    {
        let resp = self.send(endpoint, path_params, query).await?;
        Ok(ApiResponse {
            status: resp.status,
            data: resp.body,
            headers: resp.headers,
        })
    }

    /// Calls a `text/plain` endpoint whose body is a single number.
    /// Surrounding whitespace is ignored.
    pub async fn execute_number_with_info<Q>(
        &self,
        endpoint: &Endpoint,
        path_params: &[(&str, &str)],
        query: &Q,
    ) -> Result<ApiResponse<f64>, Error>
    where
        Q: Query + ?Sized,
    {
        let resp = self
            .execute_text_with_info(endpoint, path_params, query)
            .await?;
        let value = resp.data.trim().parse::<f64>().map_err(|e| Error::Deserialize {
            operation: endpoint.operation.to_string(),
            message: e.to_string(),
            body: truncate_body(&resp.data),
        })?;
        Ok(resp.map(|_| value))
    }
}

/// Assembles a [`Client`] with optional custom transport and classifier.
pub struct ClientBuilder {
    config: Configuration,
    transport: Option<Arc<dyn Transport>>,
    classifier: Option<Arc<dyn FailureClassifier>>,
}

impl ClientBuilder {
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Shares an existing transport, e.g. a recording spy kept by a test.
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn classifier(mut self, classifier: impl FailureClassifier + 'static) -> Self {
        self.classifier = Some(Arc::new(classifier));
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let base_url = Url::parse(&self.config.base_path).map_err(|e| {
            Error::InvalidUrl(format!("{}: {}", self.config.base_path, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(self.config.base_path.clone()));
        }
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(
                &self.config.user_agent,
                self.config.timeout,
            )?),
        };
        let classifier = self
            .classifier
            .unwrap_or_else(|| Arc::new(StatusClassifier));
        Ok(Client {
            config: Arc::new(self.config),
            base_url,
            transport,
            classifier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{NoQuery, QueryParams};
    use crate::transport::HttpMethod;

    const GET_COMPANY: Endpoint = Endpoint::get("get_company", "/companies/{identifier}");
    const ALL_COMPANIES: Endpoint = Endpoint::get("get_all_companies", "/companies");

    fn client(api_key: Option<&str>) -> Client {
        let mut config = Configuration::default();
        if let Some(key) = api_key {
            config = config.with_api_key(key);
        }
        Client::new(config).unwrap()
    }

    #[test]
    fn build_url_appends_api_key_last() {
        let url = client(Some("secret"))
            .build_url(
                &ALL_COMPANIES,
                &[],
                &QueryParams::new().with("sector", "Energy".to_string()),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api-v2.intrinio.com/companies?sector=Energy&api_key=secret"
        );
    }

    #[test]
    fn build_url_without_key_or_params_has_no_query() {
        let url = client(None)
            .build_url(&GET_COMPANY, &[("identifier", "AAPL")], &NoQuery)
            .unwrap();
        assert_eq!(url.as_str(), "https://api-v2.intrinio.com/companies/AAPL");
    }

    #[test]
    fn build_url_rejects_missing_identifier() {
        let err = client(Some("k"))
            .build_url(&GET_COMPANY, &[], &NoQuery)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                param: "identifier",
                operation: "get_company"
            }
        ));
    }

    #[test]
    fn request_carries_endpoint_method_and_accept() {
        let client = client(Some("k"));
        let url = client
            .build_url(&GET_COMPANY, &[("identifier", "AAPL")], &NoQuery)
            .unwrap();
        let request = client.build_request(&GET_COMPANY, url);
        assert_eq!(request.method, GET_COMPANY.method);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.headers.get("accept").unwrap(), "application/json");
    }

    #[test]
    fn invalid_base_path_is_rejected() {
        let result = Client::new(Configuration::default().with_base_path("not a url"));
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let out = format!("{:?}", client(Some("secret")));
        assert!(!out.contains("secret"));
        assert!(out.contains("***"));
    }
}
