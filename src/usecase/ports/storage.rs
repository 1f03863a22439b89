use thiserror::Error;

use crate::domain::entities::row::Table;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage backend failed: {0}")]
    Backend(String),
    #[error("stored table is corrupt: {0}")]
    Corrupt(String),
}

/// Durable home of the whole table. Every save replaces the previous value.
pub trait TableStorage: Send + Sync {
    fn load(&self) -> Result<Table, StorageError>;
    fn save(&self, table: &Table) -> Result<(), StorageError>;
    /// Wipes every entry of the key-value store, not only the table.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Free-text notes keyed by a row's key column value.
pub trait AnnotationStorage: Send + Sync {
    fn get_note(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_note(&self, key: &str, note: &str) -> Result<(), StorageError>;
    fn clear_notes(&self) -> Result<(), StorageError>;
}
