//! File-backed persistence for the single live profile record.
//!
//! The record is stored as pretty-printed JSON under the well-known key
//! [`STORAGE_KEY`], matching the field names the original form saved. A
//! missing file simply yields a default record, so callers always receive a
//! fully-populated value.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;
use crate::profile::ProfileRecord;

/// Well-known key under which the profile is persisted.
pub const STORAGE_KEY: &str = "bioFormData";

/// Loads and saves the single [`ProfileRecord`].
#[derive(Clone, Debug)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Creates a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the well-known file name inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{STORAGE_KEY}.json")))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored record, or a default one when nothing was saved yet.
    pub fn load(&self) -> Result<ProfileRecord, Error> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no stored profile at {}, using defaults", self.path.display());
                Ok(ProfileRecord::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Persists `record`, replacing any previous version.
    pub fn save(&self, record: &ProfileRecord) -> Result<(), Error> {
        let json = serde_json::to_vec_pretty(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Removes the stored record. Resetting an empty store is not an error.
    pub fn reset(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProfileStore;
    use crate::profile::{MobilityPreferences, ProfileRecord};

    #[test]
    fn load_without_saved_record_returns_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = ProfileStore::in_dir(dir.path());
        let record = store.load().expect("load default record");
        assert_eq!(record, ProfileRecord::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = ProfileStore::in_dir(dir.path());
        let record = ProfileRecord {
            full_name: "Jane".into(),
            languages: "English".into(),
            willingness: MobilityPreferences {
                all_areas: true,
                ..MobilityPreferences::default()
            },
            ..ProfileRecord::default()
        };
        store.save(&record).expect("save record");
        assert_eq!(store.load().expect("load record"), record);
    }

    #[test]
    fn reset_removes_the_record_and_is_idempotent() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = ProfileStore::in_dir(dir.path());
        store
            .save(&ProfileRecord::default())
            .expect("save record");
        store.reset().expect("first reset");
        store.reset().expect("second reset");
        assert_eq!(
            store.load().expect("load after reset"),
            ProfileRecord::default()
        );
    }

    #[test]
    fn malformed_file_is_an_error_not_a_default() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = ProfileStore::in_dir(dir.path());
        std::fs::write(store.path(), b"not json").expect("write garbage");
        assert!(store.load().is_err());
    }
}
