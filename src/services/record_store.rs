// src/services/record_store.rs
use std::collections::HashSet;
use std::path::Path;

use crate::error::AppError;
use crate::message::{FacultyRecord, RoomRecord};

/// Read-only view over the faculty and room collections. The collections
/// are owned externally; this service only loads them once at startup.
#[derive(Debug, Default)]
pub struct RecordStore {
    faculty: Vec<FacultyRecord>,
    rooms: Vec<RoomRecord>,
    loaded: bool,
}

impl RecordStore {
    /// Load both collections from JSON files. A failed load does not abort
    /// startup; the store reports unloaded and every query errors instead.
    pub async fn load(faculty_path: impl AsRef<Path>, rooms_path: impl AsRef<Path>) -> Self {
        let faculty = read_collection::<FacultyRecord>(faculty_path.as_ref()).await;
        let rooms = read_collection::<RoomRecord>(rooms_path.as_ref()).await;

        match (faculty, rooms) {
            (Ok(faculty), Ok(rooms)) => Self {
                faculty: filter_faculty(faculty),
                rooms: filter_rooms(rooms),
                loaded: true,
            },
            (faculty, rooms) => {
                for err in [faculty.err(), rooms.err()].into_iter().flatten() {
                    tracing::error!(error = %err, "record store load failed");
                }
                Self::default()
            }
        }
    }

    pub fn all_faculty(&self) -> Result<Vec<FacultyRecord>, AppError> {
        if !self.loaded {
            return Err(AppError::StoreUnavailable);
        }
        Ok(self.faculty.clone())
    }

    pub fn available_rooms(&self) -> Result<Vec<RoomRecord>, AppError> {
        if !self.loaded {
            return Err(AppError::StoreUnavailable);
        }
        Ok(self
            .rooms
            .iter()
            .filter(|room| room.available)
            .cloned()
            .collect())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

async fn read_collection<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> anyhow::Result<Vec<T>> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

fn filter_faculty(records: Vec<FacultyRecord>) -> Vec<FacultyRecord> {
    records
        .into_iter()
        .filter(|record| {
            let valid = record.has_valid_email();
            if !valid {
                tracing::warn!(name = %record.name, email = %record.email, "skipping faculty record with invalid email");
            }
            valid
        })
        .collect()
}

fn filter_rooms(records: Vec<RoomRecord>) -> Vec<RoomRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            if record.capacity < 1 {
                tracing::warn!(name = %record.name, "skipping room record with zero capacity");
                return false;
            }
            if !seen.insert(record.name.clone()) {
                tracing::warn!(name = %record.name, "skipping duplicate room record");
                return false;
            }
            true
        })
        .collect()
}
