//! Export entry point: render, derive the file name, write once.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::debug;

use crate::error::Error;
use crate::profile::ProfileRecord;
use crate::render::render;

/// File name used when the profile has no name.
pub const FALLBACK_FILE_NAME: &str = "bio_career_info.pdf";

const FILE_SUFFIX: &str = "_bio.pdf";

/// Derives the output file name from the profile's full name.
///
/// ASCII alphanumerics are kept, every other character becomes `_`, and the
/// fixed suffix is appended. An empty or whitespace-only name falls back to
/// [`FALLBACK_FILE_NAME`]. The derivation is pure, so repeated calls with the
/// same name are byte-identical.
pub fn output_file_name(full_name: &str) -> String {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return FALLBACK_FILE_NAME.to_owned();
    }
    let sanitized: String = trimmed
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect();
    format!("{sanitized}{FILE_SUFFIX}")
}

/// Result of a successful export.
#[derive(Clone, Debug)]
pub struct ExportedPdf {
    pub path: PathBuf,
    pub bytes_written: usize,
}

/// Renders `record` dated today and writes the PDF into `dir`.
///
/// The document is buffered fully in memory and persisted with a single
/// write, so a failed render leaves no partial file behind.
pub fn export(record: &ProfileRecord, dir: &Path) -> Result<ExportedPdf, Error> {
    let rendered = render(record, Local::now().date_naive())?;
    let path = dir.join(output_file_name(&record.full_name));
    fs::write(&path, &rendered.bytes)?;
    debug!("exported {} ({} bytes)", path.display(), rendered.bytes.len());
    Ok(ExportedPdf {
        path,
        bytes_written: rendered.bytes.len(),
    })
}
