//! Error type shared by the rendering and export entry points.

use std::io;

use thiserror::Error;

/// Failures surfaced by [`crate::render`] and [`crate::export`].
///
/// The renderer performs no input validation; empty or malformed fields are
/// handled by omission. The only failure modes are the PDF backend refusing
/// to construct the document and the final write of the buffered bytes.
#[derive(Debug, Error)]
pub enum Error {
    /// The PDF backend failed while constructing the document.
    #[error("failed to construct the PDF document: {0}")]
    Pdf(String),

    /// Reading or writing a file failed.
    #[error("file I/O failed")]
    Io(#[from] io::Error),

    /// A stored profile could not be parsed.
    #[error("stored profile is not valid JSON")]
    Store(#[from] serde_json::Error),
}
