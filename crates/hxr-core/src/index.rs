//! Append-only index of saved exchanges.
//!
//! One line per save: `<saved base path> <url> (<status>)`. The index lives
//! next to the host directories (`<root>/index.txt` by default) so a saved
//! response can be found again by URL with plain `grep`.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::record::ResponseRecord;

pub struct Index {
    file: File,
    path: PathBuf,
}

impl Index {
    /// Open `path` for appending, creating it (and its parent directories) if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create index dir: {}", parent.display()))?;
        }
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open index: {}", path.display()))?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the line for `record`, saved at `saved_path`.
    pub fn append(&mut self, saved_path: &Path, record: &ResponseRecord) -> Result<()> {
        let line = index_line(saved_path, record)?;
        self.file
            .write_all(line.as_bytes())
            .with_context(|| format!("failed to append to index: {}", self.path.display()))?;
        Ok(())
    }
}

/// Format one index line. Failed exchanges have no status and are rejected.
pub fn index_line(saved_path: &Path, record: &ResponseRecord) -> Result<String> {
    let resp = record.response()?;
    Ok(format!(
        "{} {} ({})\n",
        saved_path.display(),
        record.request().url(),
        resp.status
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ExchangeError, Response};
    use crate::request::RequestContext;

    fn req() -> RequestContext {
        RequestContext::new("https://example.com/a", "GET", "/a", vec![], "example.com")
    }

    #[test]
    fn index_line_format() {
        let rec = ResponseRecord::success(req(), Response::new("404 Not Found", 404, vec![], ""));
        let line = index_line(Path::new("out/example.com/abc"), &rec).unwrap();
        assert_eq!(line, "out/example.com/abc https://example.com/a (404 Not Found)\n");
    }

    #[test]
    fn index_line_rejects_failed_exchange() {
        let rec = ResponseRecord::failure(req(), ExchangeError::new("reset"));
        assert!(index_line(Path::new("x"), &rec).is_err());
    }

    #[test]
    fn append_accumulates_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("index.txt");
        let rec = ResponseRecord::success(req(), Response::new("200 OK", 200, vec![], "x"));

        let mut index = Index::open(&path).unwrap();
        index.append(Path::new("p1"), &rec).unwrap();
        drop(index);
        let mut index = Index::open(&path).unwrap();
        index.append(Path::new("p2"), &rec).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "p1 https://example.com/a (200 OK)\np2 https://example.com/a (200 OK)\n"
        );
    }
}
