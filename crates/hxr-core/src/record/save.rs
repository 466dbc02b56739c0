//! Content-addressed persistence of a record.
//!
//! Layout: `<root>/<hostname>/<sha1>.headers` (optional) and
//! `<root>/<hostname>/<sha1>.body`, where the digest covers the header blob
//! (when saved) followed by the body. Identical content maps to the same
//! files, so re-saving an unchanged response rewrites the same bytes.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use super::{RecordError, ResponseRecord, SaveError};
use crate::checksum;

pub const HEADERS_SUFFIX: &str = ".headers";
pub const BODY_SUFFIX: &str = ".body";

#[cfg(unix)]
const DIR_MODE: u32 = 0o750;
#[cfg(unix)]
const FILE_MODE: u32 = 0o640;

impl ResponseRecord {
    /// Digest that `save` would name the files after.
    pub fn content_digest(&self, skip_headers: bool) -> Result<String, RecordError> {
        let resp = self.response()?;
        let blob = if skip_headers {
            Vec::new()
        } else {
            header_blob(&resp.headers)
        };
        Ok(checksum::sha1_hex([blob.as_slice(), resp.body.as_slice()]))
    }

    /// Save the body (and, unless `skip_headers`, the response headers) under
    /// `root` and return the base path shared by both files (no suffix).
    ///
    /// Existing files at the computed path are overwritten. Nothing is rolled
    /// back on failure: the directory or the headers file may be left behind.
    pub fn save(&self, root: &Path, skip_headers: bool) -> Result<PathBuf, SaveError> {
        let hostname = self.request.hostname();
        let resp = self
            .response()
            .map_err(|e| SaveError::new(root.join(hostname), e))?;

        if !is_single_segment(hostname) {
            let err = io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("hostname is not a single path segment: {hostname:?}"),
            );
            return Err(SaveError::new(root, err));
        }

        let header_blob = if skip_headers {
            Vec::new()
        } else {
            header_blob(&resp.headers)
        };

        let digest = checksum::sha1_hex([header_blob.as_slice(), resp.body.as_slice()]);
        let base_path = root.join(hostname).join(&digest);

        if let Some(dir) = base_path.parent() {
            create_dir_all(dir).map_err(|e| SaveError::new(&base_path, e))?;
        }

        if !skip_headers {
            let headers_path = with_suffix(&base_path, HEADERS_SUFFIX);
            write_file(&headers_path, &header_blob).map_err(|e| SaveError::new(&headers_path, e))?;
        }

        let body_path = with_suffix(&base_path, BODY_SUFFIX);
        write_file(&body_path, &resp.body).map_err(|e| SaveError::new(&body_path, e))?;

        tracing::debug!(
            path = %base_path.display(),
            status = resp.status_code,
            headers = !skip_headers,
            "saved exchange"
        );
        Ok(base_path)
    }
}

/// True for exactly one normal component: no `/`, `..`, root, or empty name,
/// so joining it onto the root cannot leave the root.
fn is_single_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Each header line followed by `\n`, in stored order.
fn header_blob(headers: &[String]) -> Vec<u8> {
    let mut blob = Vec::with_capacity(headers.iter().map(|h| h.len() + 1).sum());
    for h in headers {
        blob.extend_from_slice(h.as_bytes());
        blob.push(b'\n');
    }
    blob
}

/// Appends `suffix` to the final component (`abc` → `abc.body`).
pub(crate) fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut o = base.as_os_str().to_owned();
    o.push(suffix);
    PathBuf::from(o)
}

fn create_dir_all(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(dir)
}

fn write_file(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut opts = File::options();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(FILE_MODE);
    }
    let mut f = opts.open(path)?;
    f.write_all(data)
}
