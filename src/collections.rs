//! Registry of the dynamic collections served by the generic CRUD handlers.

use crate::service::WriteCheck;
use crate::store::{Document, LooseRecord};

/// Which top-level document field a spec maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionKey {
    Products,
    Events,
    Sales,
}

/// One dynamic collection: URL segment, label for not-found messages, and
/// the write-time check run before create/update.
pub struct CollectionSpec {
    pub key: CollectionKey,
    pub path_segment: &'static str,
    pub singular: &'static str,
    pub write_check: WriteCheck,
}

pub const COLLECTIONS: &[CollectionSpec] = &[
    CollectionSpec {
        key: CollectionKey::Products,
        path_segment: "products",
        singular: "product",
        write_check: WriteCheck::CategoryRef,
    },
    CollectionSpec {
        key: CollectionKey::Events,
        path_segment: "events",
        singular: "event",
        write_check: WriteCheck::None,
    },
    CollectionSpec {
        key: CollectionKey::Sales,
        path_segment: "sales",
        singular: "sale",
        write_check: WriteCheck::None,
    },
];

pub fn collection_by_path(path: &str) -> Option<&'static CollectionSpec> {
    COLLECTIONS.iter().find(|c| c.path_segment == path)
}

impl Document {
    pub fn records(&self, key: CollectionKey) -> &Vec<LooseRecord> {
        match key {
            CollectionKey::Products => &self.products,
            CollectionKey::Events => &self.events,
            CollectionKey::Sales => &self.sales,
        }
    }

    pub fn records_mut(&mut self, key: CollectionKey) -> &mut Vec<LooseRecord> {
        match key {
            CollectionKey::Products => &mut self.products,
            CollectionKey::Events => &mut self.events,
            CollectionKey::Sales => &mut self.sales,
        }
    }
}
