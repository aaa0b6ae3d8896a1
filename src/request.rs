//! Incoming HTTP request type.

use std::collections::HashMap;

use http::HeaderMap;
use http::request::Parts;
use url::form_urlencoded;

use crate::method::Method;

/// An incoming HTTP request, as seen by a handler.
///
/// Bodies are not read; every route the service exposes is a `GET`.
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(method: Method, parts: Parts, params: HashMap<String, String>) -> Self {
        let query = parts
            .uri
            .query()
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self {
            method,
            path: parts.uri.path().to_owned(),
            headers: parts.headers,
            query,
            params,
        }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }

    /// Case-insensitive header lookup. Non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a decoded query-string parameter.
    ///
    /// When a key repeats, the last occurrence wins:
    /// `?value=1&value=2` gives `Some("2")`.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/users/{id}`, `req.param("id")` on `/users/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str) -> Request {
        let (parts, ()) = http::Request::get(uri)
            .header("X-Request-Id", "abc")
            .body(())
            .unwrap()
            .into_parts();
        Request::new(Method::Get, parts, HashMap::new())
    }

    #[test]
    fn decodes_query_parameters() {
        let req = request("/ptax?address=1+Infinite%20Loop%2C+Cupertino%2C+CA&value=500000");
        assert_eq!(req.path(), "/ptax");
        assert_eq!(req.query("address"), Some("1 Infinite Loop, Cupertino, CA"));
        assert_eq!(req.query("value"), Some("500000"));
        assert_eq!(req.query("missing"), None);
    }

    #[test]
    fn last_repeated_key_wins() {
        let req = request("/ptax?value=1000&value=2000");
        assert_eq!(req.query("value"), Some("2000"));
    }

    #[test]
    fn empty_parameter_is_present_but_empty() {
        let req = request("/ptax?value=&address");
        assert_eq!(req.query("value"), Some(""));
        assert_eq!(req.query("address"), Some(""));
    }

    #[test]
    fn no_query_string() {
        let req = request("/ptax");
        assert_eq!(req.query("value"), None);
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = request("/");
        assert_eq!(req.header("x-request-id"), Some("abc"));
        assert_eq!(req.method(), Method::Get);
    }
}
