//! Core entry point for the bio_pdf crate.
//!
//! Turns a single-user career profile ([`profile::ProfileRecord`]) into a
//! paginated PDF. The layout engine in [`layout`] is a pure state machine over
//! draw ops so it can be tested without a rendering surface; [`render`] paints
//! those ops with `printpdf` and [`export`] persists the buffered bytes.

pub mod error;
pub mod export;
pub mod layout;
pub mod metrics;
pub mod profile;
pub mod render;
pub mod store;
pub mod style;

pub use error::Error;
pub use export::{export, output_file_name, ExportedPdf};
pub use profile::{MobilityPreferences, ProfileRecord};
pub use render::{render, RenderedPdf};
pub use store::ProfileStore;
