//! Transcript rendering.
//!
//! ```text
//! https://example.com/path
//!
//! > GET /path HTTP/1.1
//! > Accept: */*
//!
//! < HTTP/1.1 200 OK
//! < Content-Type: text/plain
//!
//! body bytes...
//! ```

use std::io::{self, Write};

use super::{RecordError, Response, ResponseRecord};
use crate::request::RequestContext;

/// What to include when rendering a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// URL, request line and headers, status line and headers, then body.
    #[default]
    Full,
    /// Raw body only, e.g. for piping into another tool.
    BodyOnly,
}

impl ResponseRecord {
    /// Render into a new buffer. The body is copied verbatim and may not be UTF-8.
    pub fn render(&self, mode: RenderMode) -> Result<Vec<u8>, RecordError> {
        let mut out = Vec::new();
        self.write_to(&mut out, mode)?;
        Ok(out)
    }

    /// Stream the rendering into `w`. Fails without writing anything if the
    /// exchange itself failed.
    pub fn write_to<W: Write>(&self, w: &mut W, mode: RenderMode) -> Result<(), RecordError> {
        let resp = self.response()?;
        match mode {
            RenderMode::Full => write_full(w, &self.request, resp)?,
            RenderMode::BodyOnly => w.write_all(&resp.body)?,
        }
        Ok(())
    }
}

pub(super) fn write_full<W: Write>(
    w: &mut W,
    req: &RequestContext,
    resp: &Response,
) -> io::Result<()> {
    write!(w, "{}\n\n", req.url())?;

    writeln!(w, "> {} {} HTTP/1.1", req.method(), req.path())?;
    for h in req.headers() {
        writeln!(w, "> {h}")?;
    }
    w.write_all(b"\n")?;

    writeln!(w, "< HTTP/1.1 {}", resp.status)?;
    for h in &resp.headers {
        writeln!(w, "< {h}")?;
    }
    w.write_all(b"\n")?;

    w.write_all(&resp.body)
}
