//! One captured HTTP exchange: request context plus the response (or the
//! reason there is none).
//!
//! A record is built once by the fetch side, then rendered as a transcript
//! and/or saved under a content-addressed path. See `render` and `save`.

mod error;
mod render;
mod save;

use std::fmt;

use crate::request::RequestContext;

pub use error::{ExchangeError, RecordError, SaveError};
pub use render::RenderMode;
pub use save::{BODY_SUFFIX, HEADERS_SUFFIX};

/// Response half of a successful exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status line tail including the code, e.g. `200 OK`.
    pub status: String,
    pub status_code: u16,
    /// Raw `Name: value` lines in the order received.
    pub headers: Vec<String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(
        status: impl Into<String>,
        status_code: u16,
        headers: Vec<String>,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            status: status.into(),
            status_code,
            headers,
            body: body.into(),
        }
    }
}

/// Outcome of an exchange: either a response was obtained or it was not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeResult {
    Success(Response),
    Failure(ExchangeError),
}

/// A request context joined with the outcome of sending it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRecord {
    request: RequestContext,
    result: ExchangeResult,
}

impl ResponseRecord {
    pub fn new(request: RequestContext, result: ExchangeResult) -> Self {
        Self { request, result }
    }

    pub fn success(request: RequestContext, response: Response) -> Self {
        Self::new(request, ExchangeResult::Success(response))
    }

    pub fn failure(request: RequestContext, error: ExchangeError) -> Self {
        Self::new(request, ExchangeResult::Failure(error))
    }

    pub fn request(&self) -> &RequestContext {
        &self.request
    }

    pub fn result(&self) -> &ExchangeResult {
        &self.result
    }

    pub fn is_success(&self) -> bool {
        matches!(self.result, ExchangeResult::Success(_))
    }

    /// The response, or the exchange error as a `RecordError`.
    pub fn response(&self) -> Result<&Response, RecordError> {
        match &self.result {
            ExchangeResult::Success(resp) => Ok(resp),
            ExchangeResult::Failure(err) => Err(RecordError::Failed(err.clone())),
        }
    }
}

/// Full transcript with the body decoded as lossy UTF-8. Failed exchanges
/// print the URL and the error instead of a response section.
impl fmt::Display for ResponseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            ExchangeResult::Success(resp) => {
                let mut out = Vec::new();
                render::write_full(&mut out, &self.request, resp).map_err(|_| fmt::Error)?;
                f.write_str(&String::from_utf8_lossy(&out))
            }
            ExchangeResult::Failure(err) => {
                write!(f, "{}\n\n! {}\n", self.request.url(), err)
            }
        }
    }
}
