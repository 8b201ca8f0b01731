//! Write-time checks run before a record is stored.

use crate::error::AppError;
use crate::store::Document;
use serde_json::{Map, Value};

/// Optional per-collection hook run inside the create/update cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteCheck {
    None,
    /// `category` must resolve to an existing category by id or exact name.
    CategoryRef,
}

impl WriteCheck {
    /// Create requires the checked field to be present and resolvable.
    pub fn check_create(&self, doc: &Document, body: &Map<String, Value>) -> Result<(), AppError> {
        match self {
            WriteCheck::None => Ok(()),
            WriteCheck::CategoryRef => match body.get("category") {
                Some(v) if is_set(v) && category_resolves(doc, v) => Ok(()),
                _ => Err(AppError::BadRequest("Valid category required".into())),
            },
        }
    }

    /// Update only validates the checked field when the body carries one.
    pub fn check_update(&self, doc: &Document, body: &Map<String, Value>) -> Result<(), AppError> {
        match self {
            WriteCheck::None => Ok(()),
            WriteCheck::CategoryRef => match body.get("category") {
                Some(v) if is_set(v) && !category_resolves(doc, v) => {
                    Err(AppError::BadRequest("Valid category required".into()))
                }
                _ => Ok(()),
            },
        }
    }
}

/// Null, false, zero and the empty string all count as absent.
fn is_set(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        _ => true,
    }
}

/// Matches on category id or exact name. Non-string values never resolve.
fn category_resolves(doc: &Document, v: &Value) -> bool {
    v.as_str()
        .map(|s| doc.categories.iter().any(|c| c.id == s || c.name == s))
        .unwrap_or(false)
}
