//! Turn a HAR file into a sequence of exchange records.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::path::{Path, PathBuf};

use crate::exchange::{ExchangeRecord, ResponseRecord, TrafficSource};

use super::parse::{HarEntry, HarLog};

/// Traffic source backed by a HAR 1.2 file on disk.
///
/// The file is re-read on every `exchanges` call, so a batch can be rescanned
/// after the capture file was updated.
#[derive(Debug, Clone)]
pub struct HarTrafficSource {
    path: PathBuf,
}

impl HarTrafficSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TrafficSource for HarTrafficSource {
    fn exchanges(&self) -> Result<Vec<ExchangeRecord>> {
        load_har(&self.path)
    }
}

/// Parse `path` as HAR 1.2 and convert every entry to an exchange record.
///
/// Entries keep their file order. An entry whose response carries no body
/// text (aborted request, binary omitted by the capture tool) becomes a
/// record without a response part; a body that fails base64 decoding is
/// treated the same way rather than failing the whole replay.
pub fn load_har(path: &Path) -> Result<Vec<ExchangeRecord>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read HAR file: {}", path.display()))?;
    let har: HarLog = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse HAR JSON: {}", path.display()))?;

    let records = har
        .log
        .entries
        .into_iter()
        .map(entry_to_record)
        .collect::<Vec<_>>();
    tracing::debug!(file = %path.display(), entries = records.len(), "loaded HAR");
    Ok(records)
}

fn entry_to_record(entry: HarEntry) -> ExchangeRecord {
    let url = entry.request.url;
    let status = entry.response.status;

    let body = entry.response.content.and_then(|content| {
        let text = content.text?;
        if content.encoding.as_deref() == Some("base64") {
            match BASE64.decode(text.as_bytes()) {
                Ok(bytes) => Some(bytes),
                Err(err) => {
                    tracing::warn!(url = %url, %err, "undecodable base64 body, dropping response");
                    None
                }
            }
        } else {
            Some(text.into_bytes())
        }
    });

    // HAR hands us the body directly, so the record carries body bytes only
    // and a zero offset.
    let response = body.map(|raw| ResponseRecord {
        status,
        body_offset: 0,
        raw,
    });
    ExchangeRecord::new(url, response)
}
