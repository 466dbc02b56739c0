//! Minimal HAR 1.2 structures: enough to rebuild request/response pairs.

use serde::Deserialize;

/// Root HAR document (top-level wrapper).
#[derive(Debug, Deserialize)]
pub struct HarLog {
    pub log: HarRoot,
}

#[derive(Debug, Deserialize)]
pub struct HarRoot {
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
    pub response: HarResponse,
    /// Non-standard failure note written by some browsers.
    #[serde(default, rename = "_error")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HarRequest {
    #[serde(default = "default_method")]
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: Vec<HarHeader>,
}

#[derive(Debug, Deserialize)]
pub struct HarResponse {
    /// `0` (or negative) when no response was received.
    #[serde(default)]
    pub status: i64,
    #[serde(default, rename = "statusText")]
    pub status_text: String,
    #[serde(default)]
    pub headers: Vec<HarHeader>,
    #[serde(default)]
    pub content: HarContent,
    #[serde(default, rename = "_error")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarContent {
    #[serde(default)]
    pub text: Option<String>,
    /// `base64` when `text` holds encoded binary.
    #[serde(default)]
    pub encoding: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HarHeader {
    pub name: String,
    pub value: String,
}

fn default_method() -> String {
    "GET".to_string()
}
