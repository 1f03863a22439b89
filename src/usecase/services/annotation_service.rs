use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::row::{Table, Variant};
use crate::usecase::ports::storage::{AnnotationStorage, StorageError};

pub struct AnnotationService {
    variant: Variant,
    storage: Arc<dyn AnnotationStorage>,
}

impl AnnotationService {
    pub fn new(variant: Variant, storage: Arc<dyn AnnotationStorage>) -> Self {
        Self { variant, storage }
    }

    pub fn get(&self, key: &str) -> Result<String, StorageError> {
        Ok(self.storage.get_note(key)?.unwrap_or_default())
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_note(key, value)
    }

    /// Notes for every row key in the table. Keys of deleted rows are left
    /// in storage.
    pub fn hydrate(&self, table: &Table) -> Result<BTreeMap<String, String>, StorageError> {
        let mut notes = BTreeMap::new();
        for row in table.rows() {
            let Some(key) = row.annotation_key(self.variant) else {
                continue;
            };
            if notes.contains_key(key) {
                continue;
            }
            notes.insert(key.to_string(), self.get(key)?);
        }
        Ok(notes)
    }
}
