//! Failure classification: decides whether a received response is an error.

use crate::errors::truncate_body;
use crate::transport::HttpResponse;
use crate::Error;

/// Maps an operation name and raw response to an optional error. When an
/// error is returned the call fails with it instead of deserializing the body.
pub trait FailureClassifier: Send + Sync {
    fn classify(&self, operation: &str, response: &HttpResponse) -> Option<Error>;
}

/// Treats every non-2xx status as [`Error::HttpStatus`]. This is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusClassifier;

impl FailureClassifier for StatusClassifier {
    fn classify(&self, operation: &str, response: &HttpResponse) -> Option<Error> {
        if response.is_success() {
            return None;
        }
        Some(Error::HttpStatus {
            operation: operation.to_string(),
            status: response.status,
            body: truncate_body(&response.body),
        })
    }
}

/// Never reports a failure; error bodies are handed to the deserializer as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopClassifier;

impl FailureClassifier for NoopClassifier {
    fn classify(&self, _operation: &str, _response: &HttpResponse) -> Option<Error> {
        None
    }
}

impl<F> FailureClassifier for F
where
    F: Fn(&str, &HttpResponse) -> Option<Error> + Send + Sync,
{
    fn classify(&self, operation: &str, response: &HttpResponse) -> Option<Error> {
        self(operation, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classifier_passes_success() {
        let resp = HttpResponse::new(200, "{}");
        assert!(StatusClassifier.classify("get_company", &resp).is_none());
    }

    #[test]
    fn status_classifier_flags_server_errors() {
        let resp = HttpResponse::new(503, "unavailable");
        let err = StatusClassifier.classify("get_company", &resp).unwrap();
        match err {
            Error::HttpStatus {
                operation,
                status,
                body,
            } => {
                assert_eq!(operation, "get_company");
                assert_eq!(status, 503);
                assert_eq!(body, "unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn noop_classifier_ignores_failures() {
        let resp = HttpResponse::new(500, "boom");
        assert!(NoopClassifier.classify("get_company", &resp).is_none());
    }

    #[test]
    fn closures_act_as_classifiers() {
        let only_401 = |operation: &str, resp: &HttpResponse| {
            (resp.status == 401).then(|| Error::Rejected {
                operation: operation.to_string(),
                message: "bad key".to_string(),
            })
        };
        assert!(only_401.classify("op", &HttpResponse::new(500, "")).is_none());
        assert!(only_401.classify("op", &HttpResponse::new(401, "")).is_some());
    }
}
