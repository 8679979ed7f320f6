//! Shared query infrastructure: the [`Query`] trait, wire-value conversion,
//! dynamic [`QueryParams`], and the `define_query!` builder macro.

use chrono::NaiveDate;
use url::Url;

/// Trait implemented by all query builders.
pub trait Query {
    /// Wire-name/value pairs for every parameter that is set. Unset
    /// parameters are omitted entirely.
    fn query_pairs(&self) -> Vec<(String, String)>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }
}

/// Queries over paginated listings.
pub trait PageCursor {
    /// Sets the opaque `next_page` token, passed through unchanged.
    fn set_next_page(&mut self, token: Option<String>);
}

/// Query for endpoints that take no query parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQuery;

impl Query for NoQuery {
    fn query_pairs(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// Conversion of a typed parameter into its query-string form.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for u32 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for i32 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for f64 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for NaiveDate {
    fn to_query_value(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

/// Conversion accepted by `with_*` setters: any value of the field type,
/// plus `&str` for text fields.
pub trait IntoParam<T> {
    fn into_param(self) -> T;
}

impl<T> IntoParam<T> for T {
    fn into_param(self) -> T {
        self
    }
}

impl IntoParam<String> for &str {
    fn into_param(self) -> String {
        self.to_string()
    }
}

impl IntoParam<String> for &String {
    fn into_param(self) -> String {
        self.clone()
    }
}

/// Ad-hoc query for calling the executor directly with arbitrary parameters.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl QueryValue) -> Self {
        self.pairs.push((name.to_string(), value.to_query_value()));
        self
    }

    /// Adds the parameter only when `value` is set.
    pub fn with_opt<V: QueryValue>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.pairs.push((name.to_string(), value.to_query_value()));
        }
        self
    }
}

impl Query for QueryParams {
    fn query_pairs(&self) -> Vec<(String, String)> {
        self.pairs.clone()
    }
}

impl PageCursor for QueryParams {
    fn set_next_page(&mut self, token: Option<String>) {
        self.pairs.retain(|(k, _)| k != "next_page");
        if let Some(token) = token {
            self.pairs.push(("next_page".to_string(), token));
        }
    }
}

/// Declares a query builder: a struct of optional fields, one `with_*`
/// setter per field, and a [`Query`] impl that emits set fields under their
/// wire names in declaration order. A struct with a `next_page` field also
/// gets a [`PageCursor`] impl via `paged`.
macro_rules! define_query {
    (@paged $name:ident) => {
        impl $crate::query::PageCursor for $name {
            fn set_next_page(&mut self, token: Option<String>) {
                self.next_page = token;
            }
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident $(: $paged:ident)? {
            $(
                $(#[$fmeta:meta])*
                $field:ident / $setter:ident : $ty:ty = $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            $(
                pub fn $setter(mut self, value: impl $crate::query::IntoParam<$ty>) -> Self {
                    self.$field = Some($crate::query::IntoParam::into_param(value));
                    self
                }
            )*
        }

        impl $crate::query::Query for $name {
            fn query_pairs(&self) -> Vec<(String, String)> {
                let mut pairs = Vec::new();
                $(
                    if let Some(value) = &self.$field {
                        pairs.push((
                            $wire.to_string(),
                            $crate::query::QueryValue::to_query_value(value),
                        ));
                    }
                )*
                pairs
            }
        }

        $(define_query!(@$paged $name);)?
    };
}

pub(crate) use define_query;
