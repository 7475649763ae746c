//! Corpus file loading.
//!
//! Two formats are supported, chosen by file extension:
//!
//! - `.jsonl`: one JSON object per line, blank lines skipped:
//!   ```jsonl
//!   {"intent": "Cancel Order", "example_query": "Can I cancel my order?", "response": "Yes."}
//!   ```
//! - anything else: a single JSON array of the same objects.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::corpus::intent::IntentRecord;
use crate::error::{LexreplyError, Result};

/// Corpus file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    /// A JSON array of records.
    Json,
    /// One JSON record per line.
    JsonLines,
}

impl CorpusFormat {
    /// Pick the format from a path's extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") => CorpusFormat::JsonLines,
            _ => CorpusFormat::Json,
        }
    }
}

/// Read intent records from a file.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<IntentRecord>> {
    let path = path.as_ref();
    let format = CorpusFormat::from_path(path);
    let file = File::open(path).map_err(|e| {
        LexreplyError::corpus(format!("Failed to open corpus file {}: {e}", path.display()))
    })?;

    debug!("Reading corpus {} as {format:?}", path.display());

    match format {
        CorpusFormat::Json => parse_json(file),
        CorpusFormat::JsonLines => parse_json_lines(BufReader::new(file)),
    }
}

/// Parse a JSON array of records.
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<IntentRecord>> {
    serde_json::from_reader(reader)
        .map_err(|e| LexreplyError::parse(format!("Failed to parse JSON corpus: {e}")))
}

/// Parse JSON Lines records.
pub fn parse_json_lines<R: BufRead>(reader: R) -> Result<Vec<IntentRecord>> {
    let mut records = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| LexreplyError::parse(format!("Failed to read line: {e}")))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| {
            LexreplyError::parse(format!("Failed to parse JSON on line {}: {e}", number + 1))
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(CorpusFormat::from_path("intents.jsonl"), CorpusFormat::JsonLines);
        assert_eq!(CorpusFormat::from_path("intents.JSONL"), CorpusFormat::JsonLines);
        assert_eq!(CorpusFormat::from_path("intents.json"), CorpusFormat::Json);
        assert_eq!(CorpusFormat::from_path("intents"), CorpusFormat::Json);
    }

    #[test]
    fn test_parse_json_lines_skips_blank_lines() {
        let input = concat!(
            r#"{"intent": "A", "example_query": "qa", "response": "ra"}"#,
            "\n\n   \n",
            r#"{"intent": "B", "example_query": "qb", "response": "rb"}"#,
            "\n"
        );

        let records = parse_json_lines(input.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1], IntentRecord::new("B", "qb", "rb"));
    }

    #[test]
    fn test_parse_json_lines_reports_line() {
        let input = "{\"intent\": \"A\", \"example_query\": \"q\", \"response\": \"r\"}\n{broken\n";

        let error = parse_json_lines(input.as_bytes()).unwrap_err();

        assert!(matches!(error, LexreplyError::Corpus(_)));
        assert!(error.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_json_array() {
        let input = r#"[{"intent": "A", "example_query": "q", "response": "r"}]"#;

        let records = parse_json(input.as_bytes()).unwrap();

        assert_eq!(records, vec![IntentRecord::new("A", "q", "r")]);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let input = r#"[{"intent": "A", "response": "r"}]"#;

        assert!(matches!(parse_json(input.as_bytes()), Err(LexreplyError::Corpus(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = read_records("/nonexistent/lexreply/corpus.json");
        assert!(matches!(result, Err(LexreplyError::Corpus(_))));
    }
}
