//! Scope membership query.
//!
//! Whether a URL belongs to the assessment boundary is a policy decision made
//! outside this crate; the pipeline only asks the question. The two shipped
//! oracles cover the common CLI cases: no configured scope (everything
//! matches) and a prefix list.

/// Membership test for the target assessment boundary.
pub trait ScopeOracle {
    fn is_in_scope(&self, url: &str) -> bool;
}

/// Treats every URL as in scope. Used when no scope is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAll;

impl ScopeOracle for AllowAll {
    fn is_in_scope(&self, _url: &str) -> bool {
        true
    }
}

/// In scope iff the URL starts with one of the configured prefixes.
///
/// Prefixes are compared literally; a prefix like `https://example.com/`
/// therefore also distinguishes scheme and port. Invalid URLs never match.
#[derive(Debug, Clone)]
pub struct PrefixScope {
    prefixes: Vec<String>,
}

impl PrefixScope {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl ScopeOracle for PrefixScope {
    fn is_in_scope(&self, url: &str) -> bool {
        if url::Url::parse(url).is_err() {
            return false;
        }
        self.prefixes.iter().any(|p| url.starts_with(p.as_str()))
    }
}
