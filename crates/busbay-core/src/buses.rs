//! The bus document collection served by the backend.
//!
//! Documents are kept in memory in insertion order. When a data file is
//! configured, the whole collection is written to it after every change and
//! read back on open.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::schedules::{sample_schedule, BusSchedule, ScheduleError};

/// File name of the persisted collection inside the data directory.
pub const BUSES_FILE_NAME: &str = "buses.json";

/// A stored bus schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusDocument {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Schedule fields.
    #[serde(flatten)]
    pub schedule: BusSchedule,

    /// When the document was created.
    pub created_at: DateTime<Utc>,

    /// When the document was last replaced.
    pub updated_at: DateTime<Utc>,
}

/// Errors from the bus collection.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No document has this id.
    #[error("Bus schedule not found: {0}")]
    NotFound(Uuid),

    /// Another document already uses this bus number.
    #[error("Bus number '{0}' is already in use")]
    DuplicateBusNumber(String),

    /// The submitted schedule is malformed.
    #[error("Invalid bus schedule: {0}")]
    Invalid(#[from] ScheduleError),

    /// Reading the data file failed.
    #[error("Failed to read {path}: {source}")]
    ReadError {
        /// Data file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the data file failed.
    #[error("Failed to write {path}: {source}")]
    WriteError {
        /// Data file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The data file could not be parsed or produced.
    #[error("Failed to parse {path}: {source}")]
    ParseError {
        /// Data file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for collection operations.
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Bus schedule collection.
#[derive(Debug, Default)]
pub struct BusRepository {
    documents: Vec<BusDocument>,
    path: Option<PathBuf>,
}

impl BusRepository {
    /// Empty collection that is never written to disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the collection stored in `data_dir`, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing data file cannot be read or parsed.
    pub fn open(data_dir: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = data_dir.as_ref().join(BUSES_FILE_NAME);
        let documents = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|source| {
                RepositoryError::ReadError {
                    path: path.clone(),
                    source,
                }
            })?;
            serde_json::from_str(&content).map_err(|source| RepositoryError::ParseError {
                path: path.clone(),
                source,
            })?
        } else {
            Vec::new()
        };

        info!(path = %path.display(), count = documents.len(), "Opened bus collection");
        Ok(Self {
            documents,
            path: Some(path),
        })
    }

    /// All documents in insertion order.
    #[must_use]
    pub fn list(&self) -> &[BusDocument] {
        &self.documents
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Find a document by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the id is unknown.
    pub fn get(&self, id: Uuid) -> RepositoryResult<&BusDocument> {
        self.documents
            .iter()
            .find(|doc| doc.id == id)
            .ok_or(RepositoryError::NotFound(id))
    }

    /// Insert a new document.
    ///
    /// # Errors
    ///
    /// Fails on invalid input, a duplicate bus number, or a write error.
    pub fn create(&mut self, schedule: BusSchedule) -> RepositoryResult<BusDocument> {
        schedule.validate()?;
        self.ensure_unique(&schedule.bus_number, None)?;

        let now = Utc::now();
        let document = BusDocument {
            id: Uuid::new_v4(),
            schedule,
            created_at: now,
            updated_at: now,
        };
        self.documents.push(document.clone());
        self.persist()?;

        debug!(id = %document.id, bus = %document.schedule.bus_number, "Created bus schedule");
        Ok(document)
    }

    /// Replace the schedule fields of an existing document.
    ///
    /// # Errors
    ///
    /// Fails if the id is unknown, the input is invalid, the bus number
    /// belongs to another document, or the write fails.
    pub fn update(&mut self, id: Uuid, schedule: BusSchedule) -> RepositoryResult<BusDocument> {
        schedule.validate()?;
        self.ensure_unique(&schedule.bus_number, Some(id))?;

        let document = self
            .documents
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        document.schedule = schedule;
        document.updated_at = Utc::now();
        let updated = document.clone();
        self.persist()?;

        debug!(%id, "Updated bus schedule");
        Ok(updated)
    }

    /// Insert the sample schedule.
    ///
    /// # Errors
    ///
    /// Same as [`BusRepository::create`]; a second call reports a duplicate.
    pub fn insert_sample(&mut self) -> RepositoryResult<BusDocument> {
        self.create(sample_schedule())
    }

    fn ensure_unique(&self, bus_number: &str, except: Option<Uuid>) -> RepositoryResult<()> {
        let clash = self
            .documents
            .iter()
            .any(|doc| doc.schedule.bus_number == bus_number && Some(doc.id) != except);
        if clash {
            return Err(RepositoryError::DuplicateBusNumber(bus_number.to_string()));
        }
        Ok(())
    }

    fn persist(&self) -> RepositoryResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let write_err = |source| RepositoryError::WriteError {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(&self.documents).map_err(|source| {
            RepositoryError::ParseError {
                path: path.clone(),
                source,
            }
        })?;
        std::fs::write(path, content).map_err(write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn schedule(number: &str) -> BusSchedule {
        BusSchedule {
            bus_number: number.to_string(),
            ..sample_schedule()
        }
    }

    #[test]
    fn test_create_and_get() {
        let mut repo = BusRepository::in_memory();
        let doc = repo.create(schedule("07")).unwrap();
        assert_eq!(doc.created_at, doc.updated_at);
        assert_eq!(repo.get(doc.id).unwrap().schedule.bus_number, "07");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_duplicate_bus_number_rejected() {
        let mut repo = BusRepository::in_memory();
        repo.insert_sample().unwrap();
        let err = repo.insert_sample().unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateBusNumber(ref n) if n == "01"));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut repo = BusRepository::in_memory();
        let doc = repo.create(schedule("07")).unwrap();
        let mut changed = schedule("07");
        changed.departure_time = "7:45 AM".into();

        let updated = repo.update(doc.id, changed).unwrap();
        assert_eq!(updated.schedule.departure_time, "7:45 AM");
        assert_eq!(updated.created_at, doc.created_at);
        assert!(updated.updated_at >= doc.updated_at);
    }

    #[test]
    fn test_update_clash_and_missing() {
        let mut repo = BusRepository::in_memory();
        let a = repo.create(schedule("07")).unwrap();
        repo.create(schedule("08")).unwrap();

        let err = repo.update(a.id, schedule("08")).unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateBusNumber(_)));

        let err = repo.update(Uuid::new_v4(), schedule("09")).unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[test]
    fn test_invalid_schedule_rejected() {
        let mut repo = BusRepository::in_memory();
        let mut bad = schedule("07");
        bad.stops.clear();
        let err = repo.create(bad).unwrap_err();
        assert!(matches!(err, RepositoryError::Invalid(ScheduleError::NoStops)));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_open_reloads_persisted_documents() {
        let dir = TempDir::new().unwrap();
        let id = {
            let mut repo = BusRepository::open(dir.path()).unwrap();
            repo.insert_sample().unwrap().id
        };

        let repo = BusRepository::open(dir.path()).unwrap();
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(id).unwrap().schedule, sample_schedule());
    }

    #[test]
    fn test_document_wire_format() {
        let mut repo = BusRepository::in_memory();
        let doc = repo.insert_sample().unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["_id"], doc.id.to_string());
        assert_eq!(json["busNumber"], "01");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("schedule").is_none());
    }
}
