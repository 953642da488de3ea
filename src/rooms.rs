// ABOUTME: Persisted room IDs with operator remarks.
// ABOUTME: A JSON list of {room_id, remark}; a missing file is an empty book.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub room_id: u64,
    pub remark: String,
}

impl fmt::Display for RoomRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.room_id, self.remark)
    }
}

pub struct RoomBook {
    path: PathBuf,
}

impl RoomBook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> Result<Vec<RoomRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Append a room and persist the book immediately.
    pub fn add(&self, room_id: u64, remark: &str) -> Result<RoomRecord> {
        let mut records = self.records()?;
        let record = RoomRecord {
            room_id,
            remark: remark.to_string(),
        };
        records.push(record.clone());
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!("saved room {} to {}", room_id, self.path.display());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let book = RoomBook::new(dir.path().join("room_ids.json"));
        assert!(book.records().unwrap().is_empty());
    }

    #[test]
    fn add_persists_records_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let book = RoomBook::new(dir.path().join("room_ids.json"));
        book.add(1001, "main stage").unwrap();
        book.add(2002, "backup").unwrap();

        let reopened = RoomBook::new(book.path());
        let records = reopened.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].room_id, 1001);
        assert_eq!(records[1].remark, "backup");
    }

    #[test]
    fn reads_existing_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("room_ids.json");
        std::fs::write(&path, r#"[{"room_id": 7, "remark": "seven"}]"#).unwrap();
        let records = RoomBook::new(&path).records().unwrap();
        assert_eq!(records[0].to_string(), "7 (seven)");
    }
}
