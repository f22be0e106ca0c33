//! Exporter: write in-scope candidate bodies to disk and tally the outcome.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::naming::DedupNamer;
use crate::scan::Batch;

/// Why a single candidate failed to export. Local to that candidate; the
/// batch always runs to completion.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// One failed candidate: its URL and the error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    pub url: String,
    pub message: String,
}

/// Tally of one export call.
///
/// `exported + errors` always equals `in_scope`; out-of-scope candidates
/// count only toward `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportResult {
    pub total: usize,
    pub in_scope: usize,
    pub exported: usize,
    pub duplicates: u32,
    pub errors: usize,
    pub failures: Vec<ExportFailure>,
}

/// Outcome of an export call.
///
/// An empty batch (or one with no in-scope candidates) is reported as its
/// own variant rather than a zero-stat success, so callers can tell "nothing
/// to do" from "did nothing useful".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    NothingToExport,
    Done(ExportResult),
}

/// Write every in-scope candidate in `batch` to `dest_dir`, in batch order.
///
/// Filenames come from a fresh `DedupNamer`, so one call is one dedup
/// namespace. Each candidate's body is sliced from its raw response only
/// here, at write time. A failed write is recorded and iteration continues;
/// the result is returned even if every write fails.
///
/// `dest_dir` must already exist — creating it (and choosing it) is the
/// caller's concern.
pub fn export(batch: &Batch, dest_dir: &Path) -> ExportOutcome {
    if batch.is_empty() || batch.in_scope_count() == 0 {
        tracing::info!("export requested with nothing to export");
        return ExportOutcome::NothingToExport;
    }

    let mut namer = DedupNamer::new();
    let mut result = ExportResult {
        total: batch.len(),
        ..Default::default()
    };

    for candidate in batch.candidates() {
        if !candidate.in_scope {
            continue;
        }
        result.in_scope += 1;

        let name = namer.assign(&candidate.url);
        let path = dest_dir.join(&name);
        match fs::write(&path, candidate.body()) {
            Ok(()) => {
                tracing::debug!(url = %candidate.url, file = %path.display(), "exported");
                result.exported += 1;
            }
            Err(source) => {
                let err = ExportError::Io {
                    path: path.display().to_string(),
                    source,
                };
                tracing::warn!(url = %candidate.url, error = %err, "export failed");
                result.errors += 1;
                result.failures.push(ExportFailure {
                    url: candidate.url.clone(),
                    message: err.to_string(),
                });
            }
        }
    }

    result.duplicates = namer.duplicates();
    tracing::info!(
        total = result.total,
        in_scope = result.in_scope,
        exported = result.exported,
        duplicates = result.duplicates,
        errors = result.errors,
        "export finished"
    );
    ExportOutcome::Done(result)
}
