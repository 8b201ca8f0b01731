//! Generic CRUD over one named collection in the document.

use crate::collections::CollectionSpec;
use crate::error::AppError;
use crate::store::{LooseRecord, Store};
use serde_json::Value;

pub struct CrudService;

impl CrudService {
    /// Full collection in insertion order, unfiltered.
    pub async fn list(store: &Store, spec: &CollectionSpec) -> Result<Vec<LooseRecord>, AppError> {
        Ok(store.read().await?.records(spec.key).clone())
    }

    /// Append a record seeded with a fresh `id` and `createdAt`; the body is
    /// merged over the seed, so caller-supplied fields win.
    pub async fn create(
        store: &Store,
        spec: &CollectionSpec,
        body: LooseRecord,
    ) -> Result<Value, AppError> {
        store
            .update(move |doc| {
                spec.write_check.check_create(doc, &body)?;
                let mut record = LooseRecord::new();
                record.insert("id".into(), Value::String(uuid::Uuid::new_v4().to_string()));
                record.insert(
                    "createdAt".into(),
                    Value::from(chrono::Utc::now().timestamp_millis()),
                );
                for (k, v) in body {
                    record.insert(k, v);
                }
                doc.records_mut(spec.key).push(record.clone());
                Ok(Value::Object(record))
            })
            .await
    }

    /// Shallow-merge the body over the stored record. The stored `id`
    /// survives the merge even when the body carries a different one.
    pub async fn update(
        store: &Store,
        spec: &CollectionSpec,
        id: &str,
        body: LooseRecord,
    ) -> Result<Value, AppError> {
        let id = id.to_string();
        store
            .update(move |doc| {
                spec.write_check.check_update(doc, &body)?;
                let record = doc
                    .records_mut(spec.key)
                    .iter_mut()
                    .find(|r| r.get("id").and_then(Value::as_str) == Some(id.as_str()))
                    .ok_or_else(|| AppError::NotFound(format!("{} not found", spec.singular)))?;
                for (k, v) in body {
                    record.insert(k, v);
                }
                record.insert("id".into(), Value::String(id));
                Ok(Value::Object(record.clone()))
            })
            .await
    }

    pub async fn delete(store: &Store, spec: &CollectionSpec, id: &str) -> Result<(), AppError> {
        let id = id.to_string();
        store
            .update(move |doc| {
                let records = doc.records_mut(spec.key);
                let before = records.len();
                records.retain(|r| r.get("id").and_then(Value::as_str) != Some(id.as_str()));
                if records.len() == before {
                    return Err(AppError::NotFound(format!("{} not found", spec.singular)));
                }
                Ok(())
            })
            .await
    }
}
