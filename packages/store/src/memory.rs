//! In-process result store.
//!
//! Reference [`ResultStore`] backend: records live in a `tokio` RwLock
//! for the lifetime of the process. Useful for local runs and tests;
//! not durable.

use async_trait::async_trait;
use result_portal_result_models::ResultRecord;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{ResultStore, StoreError};

/// Non-durable store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ResultRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn insert(&self, records: &[ResultRecord]) -> Result<Vec<ResultRecord>, StoreError> {
        let mut stored = Vec::with_capacity(records.len());

        for record in records {
            let mut copy = record.clone();
            // Durable id replaces the pipeline's provisional tmp- id.
            copy.id = Uuid::new_v4().to_string();
            stored.push(copy);
        }

        self.records.write().await.extend(stored.iter().cloned());

        log::debug!("Stored {} result record(s)", stored.len());

        Ok(stored)
    }

    async fn all(&self) -> Result<Vec<ResultRecord>, StoreError> {
        let mut records = self.records.read().await.clone();
        records.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
        Ok(records)
    }

    async fn search_by_student(&self, student_id: &str) -> Result<Vec<ResultRecord>, StoreError> {
        let records = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.student_id.eq_ignore_ascii_case(student_id))
            .cloned()
            .collect();
        Ok(records)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};

    use super::*;

    fn record(student_id: &str, hour: u32) -> ResultRecord {
        ResultRecord {
            id: format!("tmp-{student_id}"),
            student_id: student_id.to_string(),
            student_name: "Test Student".to_string(),
            exam_name: "Mid".to_string(),
            semester: "Fall 2024".to_string(),
            year: "2024".to_string(),
            subjects: Vec::new(),
            total_marks: 100,
            obtained_marks: 85,
            percentage: 85.0,
            grade: "A".to_string(),
            upload_date: Utc.with_ymd_and_hms(2024, 12, 1, hour, 0, 0).unwrap(),
            pdf_url: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_durable_ids() {
        let store = MemoryStore::new();
        let stored = store.insert(&[record("CS010", 9)]).await.unwrap();

        assert_eq!(stored.len(), 1);
        assert!(!stored[0].id.starts_with("tmp-"));
        assert_eq!(stored[0].student_id, "CS010");
    }

    #[tokio::test]
    async fn all_lists_newest_upload_first() {
        let store = MemoryStore::new();
        store
            .insert(&[record("CS010", 9), record("CS011", 11)])
            .await
            .unwrap();

        let all = store.all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].student_id, "CS011");
        assert_eq!(all[1].student_id, "CS010");
    }

    #[tokio::test]
    async fn search_matches_student_id_case_insensitively() {
        let store = MemoryStore::new();
        store.insert(&[record("CS010", 9)]).await.unwrap();

        assert_eq!(store.search_by_student("cs010").await.unwrap().len(), 1);
        assert!(store.search_by_student("CS999").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_by_durable_id() {
        let store = MemoryStore::new();
        let stored = store.insert(&[record("CS010", 9)]).await.unwrap();

        store.delete(&stored[0].id).await.unwrap();
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete("missing").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref id } if id == "missing"));
    }
}
