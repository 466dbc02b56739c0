//! `hxr digest <har>` – show where each exchange would be saved.

use anyhow::Result;
use hxr_core::har;
use std::path::Path;

pub fn run_digest(har_path: &Path, skip_headers: bool) -> Result<()> {
    let records = har::load_records(har_path)?;
    for rec in &records {
        match rec.content_digest(skip_headers) {
            Ok(digest) => println!(
                "{}  {}/{}",
                rec.request().url(),
                rec.request().hostname(),
                digest
            ),
            Err(err) => eprintln!("{}: {}", rec.request().url(), err),
        }
    }
    Ok(())
}
