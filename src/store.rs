//! JSON-document store: whole-file read and write of every collection.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A record with no fixed schema beyond `id` and `createdAt`.
pub type LooseRecord = Map<String, Value>;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Singleton banner configuration, not a collection.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FlashSetting {
    pub enabled: bool,
    pub banner_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
}

/// Sessions are append-only: no expiry, never pruned, and a deleted user
/// leaves its sessions dangling.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub created_at: i64,
}

/// The whole persisted document. Missing top-level keys are backfilled with
/// defaults on read so older files keep loading as collections are added.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub products: Vec<LooseRecord>,
    #[serde(default)]
    pub events: Vec<LooseRecord>,
    #[serde(default)]
    pub sales: Vec<LooseRecord>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub flash: FlashSetting,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// File-backed store. Every read hits the disk. `update` serializes
/// read-modify-write cycles behind one process-wide lock, so concurrent
/// requests in this process cannot lose each other's writes; writers in
/// other processes still race (last write wins).
#[derive(Clone)]
pub struct Store {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl Store {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Store {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the full document, creating the file with empty collections on
    /// first access.
    pub async fn read(&self) -> Result<Document, AppError> {
        self.ensure().await?;
        let raw = tokio::fs::read_to_string(&self.path).await?;
        if raw.trim().is_empty() {
            return Ok(Document::default());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    /// Serialize the full document and overwrite the file.
    pub async fn write(&self, doc: &Document) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, serde_json::to_string_pretty(doc)?).await?;
        Ok(())
    }

    /// One read-modify-write cycle under the process-wide lock. An error from
    /// `f` aborts the cycle without writing.
    pub async fn update<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Document) -> Result<T, AppError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.read().await?;
        let out = f(&mut doc)?;
        self.write(&doc).await?;
        Ok(out)
    }

    async fn ensure(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        if !tokio::fs::try_exists(&self.path).await? {
            let initial = serde_json::to_string_pretty(&Document::default())?;
            tokio::fs::write(&self.path, initial).await?;
        }
        Ok(())
    }
}
