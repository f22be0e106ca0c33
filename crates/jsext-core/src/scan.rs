//! Collector: filter captured exchanges down to JavaScript-asset candidates.

use crate::exchange::ExchangeRecord;
use crate::scope::ScopeOracle;

/// Whether a URL refers to a JavaScript asset.
///
/// True iff the URL ends with `.js` or contains `.js?` (query-stringed
/// assets like `app.js?v=2`). The substring form can match a path segment
/// that merely contains `.js?`, and the suffix form excludes `.jsx`; both
/// are intentional, the rule is literal.
pub fn is_js_url(url: &str) -> bool {
    url.ends_with(".js") || url.contains(".js?")
}

/// One JavaScript asset found in the captured traffic.
///
/// Holds the full raw response so the body can be sliced lazily at export
/// time; `size` is the body length as reported by the capture layer and may
/// be negative when the record's body offset is malformed.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub url: String,
    pub status: u16,
    pub size: i64,
    pub in_scope: bool,
    raw: Vec<u8>,
    body_offset: usize,
}

impl Candidate {
    /// Build a candidate directly from response parts, bypassing the scan
    /// predicate. Useful for driving the exporter from synthetic fixtures.
    pub fn from_response(
        url: impl Into<String>,
        status: u16,
        in_scope: bool,
        raw: Vec<u8>,
        body_offset: usize,
    ) -> Self {
        let size = raw.len() as i64 - body_offset as i64;
        Self {
            url: url.into(),
            status,
            size,
            in_scope,
            raw,
            body_offset,
        }
    }

    /// The response body. Empty when the body offset lies past the end of
    /// the raw bytes.
    pub fn body(&self) -> &[u8] {
        self.raw.get(self.body_offset..).unwrap_or(&[])
    }
}

/// Ordered candidates accumulated between explicit resets.
///
/// All candidates in one batch share a single filename-dedup namespace
/// during export. Repeated scans append; `clear` starts a fresh batch.
#[derive(Debug, Default)]
pub struct Batch {
    candidates: Vec<Candidate>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn in_scope_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.in_scope).count()
    }

    /// Append pre-built candidates, e.g. a hand-picked selection.
    pub fn push_all(&mut self, candidates: Vec<Candidate>) {
        self.candidates.extend(candidates);
    }

    /// Drop all accumulated candidates.
    pub fn clear(&mut self) {
        self.candidates.clear();
    }

    /// Scan `exchanges` and replace the batch contents with the matches.
    pub fn rescan<I>(&mut self, exchanges: I, scope: &dyn ScopeOracle)
    where
        I: IntoIterator<Item = ExchangeRecord>,
    {
        self.clear();
        self.extend_from_scan(exchanges, scope);
    }

    /// Scan `exchanges` and append the matches to the existing batch.
    ///
    /// This is the additive path for feeding hand-picked exchanges into an
    /// already-populated batch.
    pub fn extend_from_scan<I>(&mut self, exchanges: I, scope: &dyn ScopeOracle)
    where
        I: IntoIterator<Item = ExchangeRecord>,
    {
        self.candidates.extend(scan(exchanges, scope));
    }
}

/// Filter `exchanges` down to JavaScript-asset candidates, in input order.
///
/// An exchange whose URL fails the JS predicate, or that has no response at
/// all, contributes nothing. `size` is computed as raw length minus body
/// offset and is deliberately not clamped; a negative value is data about
/// the capture, not an error.
pub fn scan<I>(exchanges: I, scope: &dyn ScopeOracle) -> Vec<Candidate>
where
    I: IntoIterator<Item = ExchangeRecord>,
{
    let mut out = Vec::new();
    for ex in exchanges {
        if !is_js_url(&ex.url) {
            continue;
        }
        let Some(resp) = ex.response else {
            continue;
        };
        let in_scope = scope.is_in_scope(&ex.url);
        let size = resp.raw.len() as i64 - resp.body_offset as i64;
        tracing::debug!(url = %ex.url, status = resp.status, size, in_scope, "js candidate");
        out.push(Candidate {
            url: ex.url,
            status: resp.status,
            size,
            in_scope,
            raw: resp.raw,
            body_offset: resp.body_offset,
        });
    }
    out
}
