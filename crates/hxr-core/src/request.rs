//! Request side of a captured exchange.
//!
//! Supplied by whatever issued the request (fetch engine, HAR import) and only
//! read by the record: the display URL, request line parts, raw header lines,
//! and the hostname used as a directory name when saving.

use anyhow::{Context, Result};

/// Immutable request context attached to a `ResponseRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    url: String,
    method: String,
    path: String,
    headers: Vec<String>,
    hostname: String,
}

impl RequestContext {
    /// Build from already-split parts. `hostname` must be safe as a single
    /// path segment; no sanitization is applied here.
    pub fn new(
        url: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
        headers: Vec<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            path: path.into(),
            headers,
            hostname: hostname.into(),
        }
    }

    /// Build from a full URL, deriving the request path (with query) and the
    /// hostname. A non-default port is kept in the hostname (`host:8080`) so
    /// that different services on one host do not share a directory.
    ///
    /// # Examples
    ///
    /// - `https://example.com/a?b=1` → path `/a?b=1`, hostname `example.com`
    /// - `http://localhost:8080/` → path `/`, hostname `localhost:8080`
    pub fn from_url(method: &str, url: &str, headers: Vec<String>) -> Result<Self> {
        let parsed = url::Url::parse(url).with_context(|| format!("invalid request URL: {url}"))?;

        let host = parsed
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("request URL has no host: {url}"))?;
        let hostname = match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        let path = match parsed.query() {
            Some(q) => format!("{}?{}", parsed.path(), q),
            None => parsed.path().to_string(),
        };

        Ok(Self {
            url: url.to_string(),
            method: method.to_string(),
            path,
            headers,
            hostname,
        })
    }

    /// Fully qualified URL, as displayed at the top of a transcript.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw `Name: value` lines in the order they were sent.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }
}
