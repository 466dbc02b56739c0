//! `hxr save <har>` – write each exchange under the output root and index it.

use anyhow::Result;
use hxr_core::har;
use hxr_core::index::{self, Index};
use hxr_core::{RecordError, ResponseRecord};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SaveOptions {
    pub out: PathBuf,
    pub skip_headers: bool,
    pub index_path: Option<PathBuf>,
}

/// Counts reported after a save run.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct SaveSummary {
    pub saved: usize,
    /// Exchanges with no response; nothing to save.
    pub skipped: usize,
    pub failed: usize,
    /// Index file appended to, if any.
    pub index: Option<PathBuf>,
}

pub fn run_save(har_path: &Path, opts: &SaveOptions) -> Result<()> {
    let records = har::load_records(har_path)?;
    let stdout = std::io::stdout();
    let summary = save_records(&records, opts, &mut stdout.lock())?;
    tracing::info!(
        saved = summary.saved,
        skipped = summary.skipped,
        failed = summary.failed,
        out = %opts.out.display(),
        index = ?summary.index,
        "save finished"
    );
    if summary.failed > 0 {
        anyhow::bail!(
            "{} of {} exchanges could not be saved",
            summary.failed,
            records.len()
        );
    }
    Ok(())
}

/// Save `records`, printing one index-style line per saved exchange to `w`.
pub(crate) fn save_records<W: Write>(
    records: &[ResponseRecord],
    opts: &SaveOptions,
    w: &mut W,
) -> Result<SaveSummary> {
    let mut index = opts.index_path.as_deref().map(Index::open).transpose()?;
    let mut summary = SaveSummary {
        index: index.as_ref().map(|i| i.path().to_path_buf()),
        ..SaveSummary::default()
    };

    for rec in records {
        match rec.save(&opts.out, opts.skip_headers) {
            Ok(path) => {
                w.write_all(index::index_line(&path, rec)?.as_bytes())?;
                if let Some(index) = index.as_mut() {
                    index.append(&path, rec)?;
                }
                summary.saved += 1;
            }
            Err(err) if matches!(err.kind(), RecordError::Failed(_)) => {
                eprintln!("{}: {}", rec.request().url(), err.kind());
                summary.skipped += 1;
            }
            Err(err) => {
                eprintln!("{}: {:#}", rec.request().url(), anyhow::Error::new(err));
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
