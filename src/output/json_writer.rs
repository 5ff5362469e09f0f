//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::{OutputConfig, RecordRow};
use crate::analysis::Report;
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2023-01-01 10:00:00", "sender": "Alice", "body": "Hello"},
///   {"timestamp": "2023-01-01 10:01:00", "sender": "Bob", "body": "Hi"}
/// ]
/// ```
pub fn write_json(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Same as [`write_json`], returned as a string.
pub fn to_json(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let rows: Vec<RecordRow<'_>> = records
        .iter()
        .filter(|r| config.keeps(r))
        .map(|r| RecordRow::new(r, config))
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Serialises a report as pretty-printed JSON.
pub fn report_to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{SenderFilter, analyze};
    use crate::config::AnalysisConfig;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn record(sender: &str, body: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        MessageRecord::new(ts, sender, body)
    }

    #[test]
    fn test_to_json_minimal() {
        let json = to_json(&[record("Alice", "Hello")], &OutputConfig::minimal()).unwrap();

        assert!(json.contains(r#""sender": "Alice""#));
        assert!(json.contains(r#""body": "Hello""#));
        assert!(json.contains(r#""timestamp": "2024-06-15 12:30:00""#));
        assert!(!json.contains("media"));
    }

    #[test]
    fn test_write_json_with_flags() {
        let temp_file = NamedTempFile::new().unwrap();
        write_json(
            &[record("Alice", "gone").with_deleted(true)],
            temp_file.path(),
            &OutputConfig::new(),
        )
        .unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0]["deleted"], true);
        assert_eq!(parsed[0]["media"], false);
    }

    #[test]
    fn test_report_to_json() {
        let records = vec![record("Alice", "hello"), record("Bob", "hello")];
        let report = analyze(&records, &SenderFilter::All, &AnalysisConfig::default());
        let json = report_to_json(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["filter"], "all");
        assert_eq!(parsed["summary"]["total_messages"], 2);
        assert_eq!(parsed["top_words"][0]["key"], "hello");
    }
}
