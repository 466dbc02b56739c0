//! HAR (HTTP Archive) import: turn a recorded browser/proxy session into
//! `ResponseRecord`s without touching the network.
//!
//! Bodies come from `response.content.text` (base64-decoded when the entry
//! says so). Entries the recorder marks as failed become failed records.

mod convert;
mod parse;

use anyhow::{Context, Result};
use std::path::Path;

use crate::record::ResponseRecord;

pub use convert::to_record;
pub use parse::{HarContent, HarEntry, HarHeader, HarLog, HarRequest, HarResponse, HarRoot};

/// Read and parse a HAR file.
pub fn load(path: &Path) -> Result<HarLog> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read HAR file: {}", path.display()))?;
    let har: HarLog = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse HAR JSON: {}", path.display()))?;
    Ok(har)
}

/// Convert every entry, in file order. Fails on the first unconvertible entry.
pub fn records(har: &HarLog) -> Result<Vec<ResponseRecord>> {
    if har.log.entries.is_empty() {
        anyhow::bail!("HAR file has no entries");
    }
    har.log
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| to_record(e).with_context(|| format!("HAR entry {i}")))
        .collect()
}

/// `load` followed by `records`.
pub fn load_records(path: &Path) -> Result<Vec<ResponseRecord>> {
    let har = load(path)?;
    records(&har)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RenderMode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn har_file(json: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn load_records_keeps_entry_order() {
        let f = har_file(
            r#"{
                "log": {
                    "version": "1.2",
                    "entries": [
                        {
                            "request": { "method": "GET", "url": "https://a.example.com/1", "headers": [] },
                            "response": { "status": 200, "statusText": "OK", "headers": [], "content": { "text": "one" } }
                        },
                        {
                            "request": { "method": "GET", "url": "https://b.example.com/2", "headers": [] },
                            "response": { "status": 0, "statusText": "", "headers": [], "content": {} }
                        },
                        {
                            "request": { "method": "GET", "url": "https://c.example.com/3", "headers": [] },
                            "response": { "status": 404, "statusText": "Not Found", "headers": [], "content": { "text": "missing" } }
                        }
                    ]
                }
            }"#,
        );
        let recs = load_records(f.path()).unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].request().hostname(), "a.example.com");
        assert!(!recs[1].is_success());
        assert_eq!(recs[2].render(RenderMode::BodyOnly).unwrap(), b"missing");
    }

    #[test]
    fn empty_entries_err() {
        let f = har_file(r#"{"log":{"version":"1.2","entries":[]}}"#);
        assert!(load_records(f.path()).is_err());
    }

    #[test]
    fn invalid_json_err() {
        let f = har_file("{ not json");
        let err = load(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse HAR JSON"));
    }

    #[test]
    fn bad_entry_names_its_index() {
        let f = har_file(
            r#"{"log":{"entries":[
                { "request": { "url": "https://ok.example.com/" }, "response": { "status": 200 } },
                { "request": { "url": "::" }, "response": { "status": 200 } }
            ]}}"#,
        );
        let err = load_records(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("HAR entry 1"));
    }
}
