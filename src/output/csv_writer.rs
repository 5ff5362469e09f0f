//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::{OutputConfig, TIMESTAMP_FORMAT};
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Body`, then `System`, `Media`, `Deleted`
///   when [`OutputConfig::include_flags`] is set
/// - Multi-line bodies are quoted, newlines kept
pub fn write_csv(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(file, records, config)
}

/// Same as [`write_csv`], returned as a string.
pub fn to_csv(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(sink: W, records: &[MessageRecord], config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;
    for record in records.iter().filter(|r| config.keeps(r)) {
        writer.write_record(build_row(record, config))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["Timestamp", "Sender", "Body"];
    if config.include_flags {
        header.extend(["System", "Media", "Deleted"]);
    }
    header
}

fn build_row(record: &MessageRecord, config: &OutputConfig) -> Vec<String> {
    let mut row = vec![
        record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        record.sender.clone(),
        record.body.clone(),
    ];
    if config.include_flags {
        row.extend([record.system, record.media, record.deleted].map(|f| f.to_string()));
    }
    row
}
