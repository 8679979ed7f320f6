//! Async client for the Intrinio financial data API (v2).
//!
//! Every resource call site delegates to one request executor on [`Client`],
//! which validates parameters, builds the URL, sends the request through a
//! [`Transport`] and classifies the response with a [`FailureClassifier`].

pub mod api;
mod classifier;
mod client;
mod config;
mod endpoint;
mod errors;
mod pagination;
pub mod query;
mod transport;
pub mod types;

pub use self::api::{all_endpoints, find_endpoint};
pub use self::classifier::{FailureClassifier, NoopClassifier, StatusClassifier};
pub use self::client::{Client, ClientBuilder};
pub use self::config::{Configuration, DEFAULT_BASE_PATH, DEFAULT_TIMEOUT};
pub use self::endpoint::{Endpoint, ResponseFormat};
pub use self::errors::Error;
pub use self::pagination::collect_pages;
pub use self::query::{NoQuery, PageCursor, Query, QueryParams};
pub use self::transport::{
    HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportFuture,
};
