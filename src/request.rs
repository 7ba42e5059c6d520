//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::uri::Authority;
use url::form_urlencoded;

use crate::method::Method;

/// An incoming HTTP request with its body fully buffered.
///
/// The query string is decoded once, up front. Handlers read it through
/// [`Request::query`].
pub struct Request {
    pub(crate) method: Method,
    pub(crate) uri: http::Uri,
    pub(crate) version: http::Version,
    pub(crate) headers: http::HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) params: HashMap<String, String>,
    pub(crate) route: Option<String>,
}

impl Request {
    pub(crate) fn new(method: Method, req: http::Request<Bytes>) -> Self {
        let (parts, body) = req.into_parts();
        let query = parts
            .uri
            .query()
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        Self {
            method,
            uri: parts.uri,
            version: parts.version,
            headers: parts.headers,
            body,
            query,
            params: HashMap::new(),
            route: None,
        }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { self.uri.path() }
    pub fn uri(&self) -> &http::Uri { &self.uri }
    pub fn version(&self) -> http::Version { self.version }
    pub fn body(&self) -> &[u8] { &self.body }

    /// The route pattern that matched, e.g. `/pizza/{kind}`.
    pub fn route(&self) -> Option<&str> { self.route.as_deref() }

    /// Case-insensitive header lookup. Non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The `Host` header without its port, falling back to the URI
    /// authority (HTTP/2). IPv6 literals keep their brackets: `[::1]`.
    pub fn host(&self) -> Option<String> {
        match self.header("host") {
            Some(raw) => raw.parse::<Authority>().ok().map(|a| a.host().to_owned()),
            None => self.uri.authority().map(|a| a.host().to_owned()),
        }
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/users/{id}`, `req.param("id")` on `/users/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// First non-empty value of a query parameter.
    ///
    /// `?genre=` reads as `None`: an empty value constrains nothing.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }

    /// Every decoded query pair, in order, empty values included.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}
