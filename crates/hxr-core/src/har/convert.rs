//! HAR entry → `ResponseRecord`.

use anyhow::{Context, Result};
use base64::Engine;

use super::parse::{HarEntry, HarHeader};
use crate::record::{ExchangeError, Response, ResponseRecord};
use crate::request::RequestContext;

/// Convert one entry. Entries without a response (status `0` or an `_error`
/// note) become failed records rather than errors.
pub fn to_record(entry: &HarEntry) -> Result<ResponseRecord> {
    let req = &entry.request;
    let request = RequestContext::from_url(&req.method, &req.url, header_lines(&req.headers))?;

    if let Some(err) = failure(entry) {
        return Ok(ResponseRecord::failure(request, err));
    }

    let res = &entry.response;
    // Positive and in range, otherwise `failure` would have caught it.
    let code = u16::try_from(res.status)
        .with_context(|| format!("status {} out of range for {}", res.status, req.url))?;
    let status = status_line(code, &res.status_text);
    let body = body_bytes(entry)?;

    Ok(ResponseRecord::success(
        request,
        Response::new(status, code, header_lines(&res.headers), body),
    ))
}

fn failure(entry: &HarEntry) -> Option<ExchangeError> {
    let note = entry
        .error
        .as_deref()
        .or(entry.response.error.as_deref())
        .filter(|s| !s.is_empty());
    if let Some(note) = note {
        return Some(ExchangeError::new(note));
    }
    if entry.response.status <= 0 || entry.response.status > i64::from(u16::MAX) {
        return Some(ExchangeError::new(format!(
            "no response recorded (status {})",
            entry.response.status
        )));
    }
    None
}

/// `200 OK`, or just `200` when the recorder left the reason phrase empty.
fn status_line(code: u16, text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        code.to_string()
    } else {
        format!("{code} {text}")
    }
}

fn header_lines(headers: &[HarHeader]) -> Vec<String> {
    headers
        .iter()
        .map(|h| format!("{}: {}", h.name, h.value))
        .collect()
}

fn body_bytes(entry: &HarEntry) -> Result<Vec<u8>> {
    let content = &entry.response.content;
    let Some(text) = content.text.as_deref() else {
        return Ok(Vec::new());
    };
    match content.encoding.as_deref() {
        Some(enc) if enc.eq_ignore_ascii_case("base64") => base64::engine::general_purpose::STANDARD
            .decode(text.trim())
            .with_context(|| format!("invalid base64 body for {}", entry.request.url)),
        _ => Ok(text.as_bytes().to_vec()),
    }
}
