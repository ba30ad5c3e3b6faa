//! Profile persistence port
//!
//! The shared core never touches storage. Hosts load a [`UserProfile`]
//! through a [`ProfileStore`], hand it to the core, and save the result.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use healthtrack_shared::UserProfile;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Storage error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access profile store at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Profile store at {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where user profiles are read from and written back to
pub trait ProfileStore {
    /// Load a user's profile; unknown users get an empty profile
    fn load(&self, user_id: u64) -> Result<UserProfile, StoreError>;

    /// Replace the stored profile for a user, creating the record if needed
    fn save(&mut self, user_id: u64, profile: &UserProfile) -> Result<(), StoreError>;
}

/// One entry of the stored `users` array.
///
/// Account fields the dashboard does not understand are carried through
/// untouched on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl UserRecord {
    fn new(id: u64, profile: UserProfile) -> Self {
        Self {
            id,
            name: None,
            email: None,
            profile,
            extra: BTreeMap::new(),
        }
    }
}

/// Profiles kept in a single JSON file holding an array of [`UserRecord`]s
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// All stored records; a missing or blank file is an empty store
    pub fn records(&self) -> Result<Vec<UserRecord>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<UserRecord> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), records = records.len(), "Read profile store");
        Ok(records)
    }

    fn write_records(&self, records: &[UserRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        // Write next to the target and rename so readers never see a partial file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self, user_id: u64) -> Result<UserProfile, StoreError> {
        let profile = self
            .records()?
            .into_iter()
            .find(|r| r.id == user_id)
            .map(|r| r.profile);

        match profile {
            Some(profile) => Ok(profile),
            None => {
                debug!(user_id, "No stored profile, starting empty");
                Ok(UserProfile::default())
            }
        }
    }

    fn save(&mut self, user_id: u64, profile: &UserProfile) -> Result<(), StoreError> {
        let mut records = self.records()?;
        match records.iter_mut().find(|r| r.id == user_id) {
            Some(record) => record.profile = profile.clone(),
            None => records.push(UserRecord::new(user_id, profile.clone())),
        }
        self.write_records(&records)?;

        info!(
            user_id,
            meals = profile.meals.len(),
            water_logs = profile.water_logs.len(),
            "Saved profile"
        );
        Ok(())
    }
}

/// In-process store for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    profiles: HashMap<u64, UserProfile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self, user_id: u64) -> Result<UserProfile, StoreError> {
        Ok(self.profiles.get(&user_id).cloned().unwrap_or_default())
    }

    fn save(&mut self, user_id: u64, profile: &UserProfile) -> Result<(), StoreError> {
        self.profiles.insert(user_id, profile.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use healthtrack_shared::{MealEntry, MealType};

    #[test]
    fn test_memory_store_unknown_user_is_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.load(42).unwrap(), UserProfile::default());
    }

    #[test]
    fn test_memory_store_save_then_load() {
        let mut store = MemoryStore::new();
        let mut profile = UserProfile::default();
        profile.log_meal(MealEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            "Toast",
            MealType::Breakfast,
            180.0,
        ));

        store.save(7, &profile).unwrap();
        assert_eq!(store.load(7).unwrap(), profile);
        assert_eq!(store.load(8).unwrap(), UserProfile::default());
    }

    #[test]
    fn test_user_record_keeps_account_fields() {
        let json = r#"{
            "id": 1700000000000,
            "name": "Sam",
            "email": "sam@example.com",
            "password": "hunter22",
            "weight": 75,
            "meals": []
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1_700_000_000_000);
        assert_eq!(record.profile.weight, Some(75.0));
        assert_eq!(record.extra.get("password").and_then(|v| v.as_str()), Some("hunter22"));

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["password"], "hunter22");
        assert_eq!(out["email"], "sam@example.com");
    }
}
