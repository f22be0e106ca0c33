//! Captured-traffic data model and the source seam.
//!
//! The pipeline never captures traffic itself; it consumes already-parsed
//! exchange records from a `TrafficSource` (HAR replay, synthetic fixtures,
//! or any other capture front end).

use anyhow::Result;

/// The response half of a captured exchange, as parsed by the capture layer.
#[derive(Debug, Clone)]
pub struct ResponseRecord {
    /// HTTP status code.
    pub status: u16,
    /// Byte index where the body begins inside `raw`. Trusted input from the
    /// capture layer; may exceed `raw.len()` on malformed records.
    pub body_offset: usize,
    /// The raw response bytes (headers + body).
    pub raw: Vec<u8>,
}

/// One captured HTTP request/response pair.
///
/// `response` is `None` when the capture layer recorded a request that never
/// completed; such exchanges are skipped by the collector.
#[derive(Debug, Clone)]
pub struct ExchangeRecord {
    pub url: String,
    pub response: Option<ResponseRecord>,
}

impl ExchangeRecord {
    pub fn new(url: impl Into<String>, response: Option<ResponseRecord>) -> Self {
        Self {
            url: url.into(),
            response,
        }
    }
}

/// Read-only, ordered source of captured exchanges.
///
/// The collector depends only on this trait and does not know about HAR or
/// any other capture format.
pub trait TrafficSource {
    fn exchanges(&self) -> Result<Vec<ExchangeRecord>>;
}
