//! URL-to-filename derivation with batch-scoped deduplication.
//!
//! Sanitization is a pure string-to-string function; uniqueness within one
//! export batch is layered on top by `DedupNamer`.

use std::collections::HashSet;

/// Longest sanitized name kept before the `.js` suffix is enforced.
const MAX_NAME_CHARS: usize = 200;

/// Derives a filesystem-safe filename from a URL.
///
/// Steps, in order:
/// 1. Strip one leading `http://` or `https://` (literal, case-sensitive).
/// 2. Replace each of `\ / * ? : " < > |` and `&` with `_`.
/// 3. If longer than 200 characters, keep only the final 200 — the path
///    tail distinguishes assets better than the domain prefix.
/// 4. Append `.js` unless the name already ends with it.
///
/// Characters outside the table (`=`, `%`, `#`, ...) pass through unchanged.
pub fn sanitize_url_filename(url: &str) -> String {
    let stripped = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .unwrap_or(url);

    let mut name: String = stripped
        .chars()
        .map(|c| match c {
            '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|' | '&' => '_',
            other => other,
        })
        .collect();

    let chars = name.chars().count();
    if chars > MAX_NAME_CHARS {
        name = name.chars().skip(chars - MAX_NAME_CHARS).collect();
    }

    if !name.ends_with(".js") {
        name.push_str(".js");
    }
    name
}

/// Assigns batch-unique filenames, one call per candidate in batch order.
///
/// On a collision the batch-wide duplicate counter is bumped and spliced
/// into the name before its extension, so the ordinal reflects how many
/// collisions the whole batch has seen, not how many times this particular
/// name recurred. A renamed result is not re-checked against the seen set;
/// a URL that sanitizes to an already-issued `_NNN` name verbatim will
/// collide silently.
///
/// Not thread-safe; the seen set is plain mutable state.
#[derive(Debug, Default)]
pub struct DedupNamer {
    seen: HashSet<String>,
    duplicates: u32,
}

impl DedupNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collisions renamed so far in this batch.
    pub fn duplicates(&self) -> u32 {
        self.duplicates
    }

    /// Sanitize `url` and make the result unique within this batch.
    pub fn assign(&mut self, url: &str) -> String {
        let mut name = sanitize_url_filename(url);
        if self.seen.contains(&name) {
            self.duplicates += 1;
            name = insert_ordinal(&name, self.duplicates);
            tracing::debug!(url, renamed = %name, "duplicate filename renamed");
        }
        self.seen.insert(name.clone());
        name
    }
}

/// Splice `_<ordinal, zero-padded to 3>` in front of the last-`.` extension.
fn insert_ordinal(name: &str, ordinal: u32) -> String {
    match name.rfind('.') {
        Some(dot) => format!("{}_{:03}{}", &name[..dot], ordinal, &name[dot..]),
        None => format!("{name}_{ordinal:03}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scheme_and_replaces_separators() {
        assert_eq!(
            sanitize_url_filename("http://a.com/app.js"),
            "a.com_app.js"
        );
        assert_eq!(
            sanitize_url_filename("https://a.com/static/app.js"),
            "a.com_static_app.js"
        );
    }

    #[test]
    fn scheme_strip_is_case_sensitive() {
        assert_eq!(
            sanitize_url_filename("HTTP://a.com/app.js"),
            "HTTP___a.com_app.js"
        );
    }

    #[test]
    fn query_string_characters() {
        // `?` is in the table, `=` is not.
        assert_eq!(
            sanitize_url_filename("https://x.com/lib.js?v=3"),
            "x.com_lib.js_v=3.js"
        );
        assert_eq!(
            sanitize_url_filename("https://a.com/a.js?x=1&y=2"),
            "a.com_a.js_x=1_y=2.js"
        );
    }

    #[test]
    fn appends_js_suffix_when_missing() {
        assert_eq!(
            sanitize_url_filename("https://a.com/app.js?v=2"),
            "a.com_app.js_v=2.js"
        );
        assert!(sanitize_url_filename("https://a.com/app.js").ends_with(".js"));
    }

    #[test]
    fn truncation_keeps_final_200_chars() {
        let long_path = "x".repeat(300);
        let url = format!("https://a.com/{long_path}");
        let sanitized = sanitize_url_filename(&url);

        // Reproduce the pre-suffix stage by hand to check the kept tail.
        let replaced = format!("a.com_{long_path}");
        let expected_stem: String = replaced
            .chars()
            .skip(replaced.chars().count() - 200)
            .collect();
        assert_eq!(expected_stem.chars().count(), 200);
        assert_eq!(sanitized, format!("{expected_stem}.js"));
    }

    #[test]
    fn dedup_renames_with_batch_ordinal() {
        let mut namer = DedupNamer::new();
        assert_eq!(namer.assign("http://a.com/app.js"), "a.com_app.js");
        assert_eq!(namer.assign("http://a.com/app.js"), "a.com_app_001.js");
        assert_eq!(namer.assign("http://a.com/app.js"), "a.com_app_002.js");
        assert_eq!(namer.duplicates(), 2);
    }

    #[test]
    fn dedup_counter_is_batch_wide() {
        let mut namer = DedupNamer::new();
        namer.assign("http://a.com/one.js");
        namer.assign("http://a.com/one.js"); // -> one_001
        namer.assign("http://a.com/two.js");
        // Second distinct collision continues the batch counter.
        assert_eq!(namer.assign("http://a.com/two.js"), "a.com_two_002.js");
    }

    #[test]
    fn fresh_namer_reproduces_first_run_names() {
        let urls = [
            "http://a.com/app.js",
            "http://a.com/lib.js?v=1",
            "http://a.com/app.js",
        ];
        let run = |urls: &[&str]| -> Vec<String> {
            let mut namer = DedupNamer::new();
            urls.iter().map(|u| namer.assign(u)).collect()
        };
        assert_eq!(run(&urls), run(&urls));
    }

    #[test]
    fn ordinal_splices_before_last_dot() {
        assert_eq!(insert_ordinal("a.com_app.js", 7), "a.com_app_007.js");
        assert_eq!(insert_ordinal("noext", 1), "noext_001");
    }
}
