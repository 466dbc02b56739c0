//! HAR documents shared by the integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// Two exchanges on the same host with identical bodies but different
/// headers, one on another host, and one aborted request.
pub const SESSION: &str = r#"{
    "log": {
        "version": "1.2",
        "creator": { "name": "test", "version": "0" },
        "entries": [
            {
                "request": {
                    "method": "GET",
                    "url": "https://example.com/robots.txt",
                    "httpVersion": "HTTP/1.1",
                    "headers": [ { "name": "User-Agent", "value": "hxr-test" } ]
                },
                "response": {
                    "status": 200,
                    "statusText": "OK",
                    "headers": [ { "name": "Content-Type", "value": "text/plain" } ],
                    "content": { "text": "hello" }
                }
            },
            {
                "request": {
                    "method": "GET",
                    "url": "https://example.com/robots.txt?again=1",
                    "headers": []
                },
                "response": {
                    "status": 200,
                    "statusText": "OK",
                    "headers": [
                        { "name": "Content-Type", "value": "text/plain" },
                        { "name": "Age", "value": "12" }
                    ],
                    "content": { "text": "hello" }
                }
            },
            {
                "request": { "method": "HEAD", "url": "http://localhost:8080/health", "headers": [] },
                "response": { "status": 204, "statusText": "No Content", "headers": [], "content": {} }
            },
            {
                "request": { "method": "GET", "url": "https://gone.example.com/", "headers": [] },
                "response": { "status": 0, "statusText": "", "headers": [], "content": {}, "_error": "net::ERR_NAME_NOT_RESOLVED" }
            }
        ]
    }
}"#;

pub fn write(json: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("temp HAR file");
    f.write_all(json.as_bytes()).expect("write HAR");
    f.flush().expect("flush HAR");
    f
}
