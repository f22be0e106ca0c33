//! HAR (HTTP Archive) replay: parse HAR 1.2 files into exchange records.
//!
//! The capture tool that wrote the HAR already did the HTTP parsing, so each
//! entry maps straight onto an `ExchangeRecord` with the decoded body and a
//! zero body offset. Kept separate from the collector so the pipeline stays
//! capture-format agnostic.

mod parse;
mod source;

pub use source::{load_har, HarTrafficSource};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::TrafficSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_har(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn load_har_plain_text_body() {
        let f = write_har(
            r#"{
            "log": {
                "version": "1.2",
                "entries": [
                    {
                        "request": { "url": "https://a.com/app.js" },
                        "response": {
                            "status": 200,
                            "content": { "text": "console.log(1);" }
                        }
                    }
                ]
            }
        }"#,
        );
        let records = load_har(f.path()).unwrap();
        assert_eq!(records.len(), 1);
        let resp = records[0].response.as_ref().unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body_offset, 0);
        assert_eq!(resp.raw, b"console.log(1);");
    }

    #[test]
    fn load_har_base64_body() {
        // "var x=1;" base64-encoded.
        let f = write_har(
            r#"{
            "log": {
                "version": "1.2",
                "entries": [
                    {
                        "request": { "url": "https://a.com/lib.js" },
                        "response": {
                            "status": 200,
                            "content": { "text": "dmFyIHg9MTs=", "encoding": "base64" }
                        }
                    }
                ]
            }
        }"#,
        );
        let records = load_har(f.path()).unwrap();
        assert_eq!(records[0].response.as_ref().unwrap().raw, b"var x=1;");
    }

    #[test]
    fn load_har_entry_without_body_has_no_response() {
        let f = write_har(
            r#"{
            "log": {
                "version": "1.2",
                "entries": [
                    {
                        "request": { "url": "https://a.com/aborted.js" },
                        "response": { "status": 0 }
                    },
                    {
                        "request": { "url": "https://a.com/nobody.js" },
                        "response": { "status": 304, "content": {} }
                    }
                ]
            }
        }"#,
        );
        let records = load_har(f.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].response.is_none());
        assert!(records[1].response.is_none());
    }

    #[test]
    fn load_har_bad_base64_drops_response_not_file() {
        let f = write_har(
            r#"{
            "log": {
                "version": "1.2",
                "entries": [
                    {
                        "request": { "url": "https://a.com/bad.js" },
                        "response": {
                            "status": 200,
                            "content": { "text": "!!not-base64!!", "encoding": "base64" }
                        }
                    }
                ]
            }
        }"#,
        );
        let records = load_har(f.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].response.is_none());
    }

    #[test]
    fn load_har_invalid_json_errs() {
        let f = write_har("{not har");
        assert!(load_har(f.path()).is_err());
    }

    #[test]
    fn traffic_source_rereads_file() {
        let f = write_har(r#"{"log":{"version":"1.2","entries":[]}}"#);
        let source = HarTrafficSource::new(f.path());
        assert!(source.exchanges().unwrap().is_empty());
    }
}
