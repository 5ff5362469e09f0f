//! JSON Lines (JSONL) output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{OutputConfig, RecordRow};
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records as JSON Lines, one object per line.
///
/// ```jsonl
/// {"timestamp":"2023-01-01 10:00:00","sender":"Alice","body":"Hello"}
/// {"timestamp":"2023-01-01 10:01:00","sender":"Bob","body":"Hi"}
/// ```
pub fn write_jsonl(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, records, config)?;
    writer.flush()?;
    Ok(())
}

/// Same as [`write_jsonl`], returned as a string.
pub fn to_jsonl(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(&mut buffer, records, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(sink: &mut W, records: &[MessageRecord], config: &OutputConfig) -> Result<()> {
    for record in records.iter().filter(|r| config.keeps(r)) {
        let line = serde_json::to_string(&RecordRow::new(record, config))?;
        writeln!(sink, "{line}")?;
    }
    Ok(())
}
