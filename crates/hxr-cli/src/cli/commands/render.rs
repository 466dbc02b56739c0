//! `hxr render <har>` – print transcripts.

use anyhow::{Context, Result};
use hxr_core::har;
use hxr_core::{RecordError, RenderMode};
use std::io::{self, Write};
use std::path::Path;

pub fn run_render(har_path: &Path, body_only: bool) -> Result<()> {
    let mode = if body_only {
        RenderMode::BodyOnly
    } else {
        RenderMode::Full
    };
    let records = har::load_records(har_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for rec in &records {
        match rec.write_to(&mut out, mode) {
            Ok(()) => {
                if mode == RenderMode::Full {
                    out.write_all(b"\n")?;
                }
            }
            Err(RecordError::Failed(err)) => {
                tracing::debug!(url = rec.request().url(), "skipping failed exchange");
                eprintln!("{}: {}", rec.request().url(), err);
            }
            Err(err) => return Err(err).context("failed to write to stdout"),
        }
    }
    out.flush()?;
    Ok(())
}
