use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// A deserialized payload together with the status and headers it arrived with.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub headers: HeaderMap,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }

    /// Header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            status: self.status,
            headers: self.headers,
            data: f(self.data),
        }
    }
}

/// A page of a cursor-paginated listing.
pub trait Paginated {
    /// The server-issued cursor for the following page. Absent or empty
    /// tokens both mean this is the last page.
    fn next_page(&self) -> Option<&str>;

    fn has_more(&self) -> bool {
        self.next_page().is_some()
    }
}

/// Implements [`Paginated`] for response types with a `next_page` field.
macro_rules! impl_paginated {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::types::Paginated for $ty {
                fn next_page(&self) -> Option<&str> {
                    self.next_page.as_deref().filter(|t| !t.is_empty())
                }
            }
        )*
    };
}
pub(crate) use impl_paginated;

/// One observation of a historical data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalData {
    pub date: chrono::NaiveDate,
    pub value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Page {
        next_page: Option<String>,
    }
    impl_paginated!(Page);

    #[test]
    fn empty_cursor_means_last_page() {
        let page: Page = serde_json::from_str(r#"{"next_page": ""}"#).unwrap();
        assert_eq!(page.next_page(), None);
        assert!(!page.has_more());

        let page: Page = serde_json::from_str(r#"{"next_page": null}"#).unwrap();
        assert!(!page.has_more());

        let page: Page = serde_json::from_str(r#"{"next_page": "MjAxOC0wMy0wMQ=="}"#).unwrap();
        assert_eq!(page.next_page(), Some("MjAxOC0wMy0wMQ=="));
        assert!(page.has_more());
    }

    #[test]
    fn map_keeps_status_and_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "abc".parse().unwrap());
        let resp = ApiResponse {
            status: 200,
            headers,
            data: 2,
        };
        let mapped = resp.map(|n| n * 10);
        assert_eq!(mapped.status, 200);
        assert_eq!(mapped.header("x-request-id"), Some("abc"));
        assert_eq!(mapped.data, 20);
    }
}
