//! Endpoint descriptors: the static table every typed call site is generated from.

use url::Url;

use crate::transport::HttpMethod;
use crate::Error;

/// How a response body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    /// `text/plain` body holding a single number or string.
    Text,
}

impl ResponseFormat {
    pub const fn accept(self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Text => "text/plain",
        }
    }
}

/// A single REST operation: name, method, path template and required inputs.
///
/// Path templates use whole-segment placeholders such as
/// `/companies/{identifier}/news`. Every placeholder is a required parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub operation: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    /// Query parameters that must be present and non-blank.
    pub required_query: &'static [&'static str],
    pub format: ResponseFormat,
}

impl Endpoint {
    /// A JSON `GET` endpoint with no required query parameters.
    pub const fn get(operation: &'static str, path: &'static str) -> Self {
        Self {
            operation,
            method: HttpMethod::Get,
            path,
            required_query: &[],
            format: ResponseFormat::Json,
        }
    }

    pub const fn requires(self, required_query: &'static [&'static str]) -> Self {
        Self {
            required_query,
            ..self
        }
    }

    pub const fn text(self) -> Self {
        Self {
            format: ResponseFormat::Text,
            ..self
        }
    }

    /// Names of the `{placeholder}` segments, in path order.
    pub fn path_params(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter_map(placeholder)
    }

    /// Checks that every placeholder has a non-blank value. `.` and `..`
    /// are rejected too: URL normalization would drop them from the path,
    /// encoded or not.
    pub fn validate_path_params(&self, params: &[(&str, &str)]) -> Result<(), Error> {
        for name in self.path_params() {
            if lookup(params, name).map_or(true, is_dot_segment) {
                return Err(Error::InvalidArgument {
                    param: name,
                    operation: self.operation,
                });
            }
        }
        Ok(())
    }

    /// Checks that every required query parameter has a non-blank value.
    pub fn validate_query(&self, pairs: &[(String, String)]) -> Result<(), Error> {
        for &name in self.required_query {
            let present = pairs
                .iter()
                .any(|(k, v)| k == name && !v.trim().is_empty());
            if !present {
                return Err(Error::InvalidArgument {
                    param: name,
                    operation: self.operation,
                });
            }
        }
        Ok(())
    }

    /// Appends this endpoint's path to `base`, substituting each placeholder
    /// once. Values are pushed as single segments, so `/`, spaces and `%`
    /// are percent-encoded rather than changing the path shape.
    pub fn resolve(&self, base: &Url, params: &[(&str, &str)]) -> Result<Url, Error> {
        self.validate_path_params(params)?;

        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidUrl(base.to_string()))?;
            segments.pop_if_empty();
            for segment in self.path.split('/').filter(|s| !s.is_empty()) {
                match placeholder(segment) {
                    Some(name) => {
                        // validated above
                        let value = lookup(params, name).unwrap_or_default();
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }
        Ok(url)
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

fn is_dot_segment(value: &str) -> bool {
    matches!(value, "." | "..")
}

fn lookup<'p>(params: &[(&str, &'p str)], name: &str) -> Option<&'p str> {
    params
        .iter()
        .find(|(k, _)| *k == name)
        .map(|(_, v)| *v)
        .filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORICAL: Endpoint = Endpoint::get(
        "get_company_historical_data",
        "/companies/{identifier}/historical_data/{tag}",
    );

    fn base() -> Url {
        Url::parse("https://api-v2.intrinio.com").unwrap()
    }

    #[test]
    fn path_params_in_order() {
        let names: Vec<_> = HISTORICAL.path_params().collect();
        assert_eq!(names, vec!["identifier", "tag"]);
    }

    #[test]
    fn resolve_substitutes_placeholders() {
        let url = HISTORICAL
            .resolve(&base(), &[("identifier", "AAPL"), ("tag", "marketcap")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api-v2.intrinio.com/companies/AAPL/historical_data/marketcap"
        );
    }

    #[test]
    fn resolve_escapes_slashes_and_spaces() {
        let url = Endpoint::get("get_company", "/companies/{identifier}")
            .resolve(&base(), &[("identifier", "BRK/A B")])
            .unwrap();
        assert_eq!(url.path(), "/companies/BRK%2FA%20B");
    }

    #[test]
    fn resolve_does_not_expand_braces_in_values() {
        let url = HISTORICAL
            .resolve(&base(), &[("identifier", "{tag}"), ("tag", "x")])
            .unwrap();
        assert_eq!(url.path(), "/companies/%7Btag%7D/historical_data/x");
    }

    #[test]
    fn resolve_keeps_base_path_prefix() {
        let base = Url::parse("http://localhost:8080/v2/").unwrap();
        let url = Endpoint::get("get_all_companies", "/companies")
            .resolve(&base, &[])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v2/companies");
    }

    #[test]
    fn missing_path_param_is_invalid_argument() {
        let err = HISTORICAL
            .resolve(&base(), &[("identifier", "AAPL")])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                param: "tag",
                operation: "get_company_historical_data"
            }
        ));
    }

    #[test]
    fn blank_path_param_is_invalid_argument() {
        let err = HISTORICAL
            .resolve(&base(), &[("identifier", "  "), ("tag", "x")])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                param: "identifier",
                ..
            }
        ));
    }

    #[test]
    fn dot_segments_are_invalid_arguments() {
        for value in [".", ".."] {
            let err = HISTORICAL
                .resolve(&base(), &[("identifier", value), ("tag", "marketcap")])
                .unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidArgument {
                    param: "identifier",
                    ..
                }
            ));
        }
        let url = HISTORICAL
            .resolve(&base(), &[("identifier", "..."), ("tag", ".x")])
            .unwrap();
        assert_eq!(url.path(), "/companies/.../historical_data/.x");
    }

    #[test]
    fn required_query_is_checked() {
        let search = Endpoint::get("search_companies", "/companies/search").requires(&["query"]);
        assert!(search.validate_query(&[]).is_err());
        assert!(search
            .validate_query(&[("query".to_string(), "".to_string())])
            .is_err());
        assert!(search
            .validate_query(&[("query".to_string(), "apple".to_string())])
            .is_ok());
    }

    #[test]
    fn text_endpoints_accept_plain_text() {
        let ep = Endpoint::get("x", "/x").text();
        assert_eq!(ep.format, ResponseFormat::Text);
        assert_eq!(ep.format.accept(), "text/plain");
    }
}
