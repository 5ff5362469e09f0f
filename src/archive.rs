//! Loading export text from disk.
//!
//! WhatsApp shares an export either as a bare `.txt` file or as a `.zip`
//! holding the transcript next to the media. For archives the first entry
//! whose name ends in `.txt` is the transcript; an archive without one is a
//! [`ChatstatError::NoContent`] error, raised before any parsing happens.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ChatstatError, Result};

/// Returns `true` when `path` has a `.zip` extension (any case).
pub fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// Reads an export from disk and returns its decoded text.
pub fn load_export(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;

    if is_archive(path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        return extract_text(&bytes, &name);
    }

    Ok(String::from_utf8(bytes)?)
}

/// Finds the transcript inside a zip archive and decodes it as UTF-8.
///
/// `archive_name` is only used in the error message.
#[cfg(feature = "archive")]
pub fn extract_text(bytes: &[u8], archive_name: &str) -> Result<String> {
    use std::io::{Cursor, Read};

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if !entry.is_file() || !entry.name().to_ascii_lowercase().ends_with(".txt") {
            continue;
        }

        debug!(entry = entry.name(), archive = archive_name, "found transcript");
        let mut raw = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or(0));
        entry.read_to_end(&mut raw)?;

        return String::from_utf8(raw).map_err(|source| ChatstatError::Utf8 {
            context: format!("{archive_name} entry"),
            source,
        });
    }

    Err(ChatstatError::no_content(archive_name))
}

/// Archive support is compiled out; `.zip` input is rejected.
#[cfg(not(feature = "archive"))]
pub fn extract_text(_bytes: &[u8], archive_name: &str) -> Result<String> {
    debug!(archive = archive_name, "archive support disabled");
    Err(ChatstatError::invalid_format(
        "export",
        format!("{archive_name}: zip input requires the `archive` feature"),
    ))
}
