//! Flat-file persistence.
//!
//! Each store owns one JSON file holding a single top-level array. Reads load
//! the whole file, writes replace it. A failed read is reported as an empty
//! array; a failed write is returned to the caller.

pub mod product;
pub mod user;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, MutexGuard};
use tracing::Instrument;

use crate::models;

pub type UserStore = JsonStore<models::User>;
pub type ProductStore = JsonStore<models::Product>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct JsonStore<T> {
    path: PathBuf,
    // held for the whole read-modify-write cycle of a mutating operation
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    pub async fn read(&self) -> Vec<T> {
        let span = tracing::debug_span!("Reading JSON store.", path = %self.path.display());
        async {
            let data = match tokio::fs::read_to_string(&self.path).await {
                Ok(data) => data,
                Err(err) => {
                    tracing::error!("Failed to read {}: {:?}", self.path.display(), err);
                    return vec![];
                }
            };

            serde_json::from_str::<Vec<T>>(&data).unwrap_or_else(|err| {
                tracing::error!("Failed to parse {}: {}", self.path.display(), err);
                vec![]
            })
        }
        .instrument(span)
        .await
    }

    pub async fn write(&self, records: &[T]) -> Result<(), StoreError> {
        let span = tracing::debug_span!("Writing JSON store.", path = %self.path.display());
        self.overwrite(records)
            .instrument(span)
            .await
            .map(|_| {
                tracing::info!(
                    "{} records have been written to {}",
                    records.len(),
                    self.path.display()
                );
            })
            .map_err(|err| {
                tracing::error!("Failed to write {}: {}", self.path.display(), err);
                err
            })
    }

    async fn overwrite(&self, records: &[T]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, data)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: u32,
        name: String,
    }

    fn store_in(dir: &tempfile::TempDir) -> JsonStore<Record> {
        JsonStore::new(dir.path().join("records.json"))
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.read().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();
        assert!(store.read().await.is_empty());

        std::fs::write(store.path(), r#"{"id": 1}"#).unwrap();
        assert!(store.read().await.is_empty());
    }

    #[tokio::test]
    async fn write_is_pretty_printed_and_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let first = vec![
            Record { id: 1, name: "a".into() },
            Record { id: 2, name: "b".into() },
        ];
        store.write(&first).await.unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": 1,"));
        assert_eq!(store.read().await, first);

        let second = vec![Record { id: 3, name: "c".into() }];
        store.write(&second).await.unwrap();
        assert_eq!(store.read().await, second);
    }

    #[tokio::test]
    async fn write_into_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonStore<Record> = JsonStore::new(dir.path().join("nope").join("r.json"));
        let err = store.write(&[]).await.unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
