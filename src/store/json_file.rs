use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use uuid::Uuid;

use super::BookingStore;
use crate::models::BookingRecord;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Opens the store, creating an empty collection if the file is missing.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if !path.exists() {
            let dir = parent_dir(&path);
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create directory {}", dir.display()))?;
            fs::write(&path, "[]")
                .with_context(|| format!("failed to create {}", path.display()))?;
            tracing::info!(path = %path.display(), "created empty bookings file");
        }
        Ok(Self { path })
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

impl BookingStore for JsonFileStore {
    fn load(&self) -> anyhow::Result<Vec<BookingRecord>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let records = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(records)
    }

    fn save(&mut self, records: &[BookingRecord]) -> anyhow::Result<()> {
        let content =
            serde_json::to_string_pretty(records).context("failed to serialize bookings")?;

        // Write beside the target and rename over it so readers never see a
        // half-written file.
        let tmp_file = parent_dir(&self.path).join(format!(".bookings-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content)
            .with_context(|| format!("failed to write {}", tmp_file.display()))?;
        fs::rename(&tmp_file, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;
    use chrono::{NaiveDate, Utc};
    use tempfile::tempdir;

    fn record(id: &str, time: &str) -> BookingRecord {
        BookingRecord {
            id: id.to_string(),
            name: "Lerato".to_string(),
            email: "lerato@example.com".to_string(),
            phone: "082 555 0199".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 17).unwrap(),
            time: time.to_string(),
            service: "General".to_string(),
            message: String::new(),
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_open_creates_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("bookings.json");

        let store = JsonFileStore::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_open_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.save(&[record("1", "10:00")]).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.load().unwrap().len(), 1);
    }

    #[test]
    fn test_save_overwrites_and_preserves_order() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("bookings.json")).unwrap();

        store.save(&[record("1", "10:00")]).unwrap();
        store
            .save(&[record("2", "11:00"), record("3", "09:00")])
            .unwrap();

        let ids: Vec<String> = store.load().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("bookings.json")).unwrap();
        store.save(&[record("1", "10:00")]).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_load_corrupt_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.load().is_err());
    }
}
