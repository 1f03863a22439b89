use std::path::PathBuf;

use crate::domain::entities::row::Table;
use crate::infra::sqlite::queries::{
    delete_all_entries, delete_all_notes, read_entry, read_note, upsert_note, write_entry,
};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::storage::{AnnotationStorage, StorageError, TableStorage};

/// Key the whole table is stored under.
pub const TABLE_KEY: &str = "appData";

pub struct SqliteStore {
    pub db_path: PathBuf,
}

impl SqliteStore {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    pub fn init(&self) -> Result<(), StorageError> {
        init_db(&self.db_path).map_err(|err| StorageError::Backend(format!("{err:#}")))
    }
}

fn backend(err: anyhow::Error) -> StorageError {
    StorageError::Backend(format!("{err:#}"))
}

impl TableStorage for SqliteStore {
    fn load(&self) -> Result<Table, StorageError> {
        let Some(raw) = read_entry(&self.db_path, TABLE_KEY).map_err(backend)? else {
            return Ok(Table::default());
        };
        serde_json::from_str(&raw).map_err(|err| StorageError::Corrupt(err.to_string()))
    }

    fn save(&self, table: &Table) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(table).map_err(|err| StorageError::Backend(err.to_string()))?;
        write_entry(&self.db_path, TABLE_KEY, &raw).map_err(backend)
    }

    fn clear(&self) -> Result<(), StorageError> {
        delete_all_entries(&self.db_path).map_err(backend)
    }
}

impl AnnotationStorage for SqliteStore {
    fn get_note(&self, key: &str) -> Result<Option<String>, StorageError> {
        read_note(&self.db_path, key).map_err(backend)
    }

    fn set_note(&self, key: &str, note: &str) -> Result<(), StorageError> {
        upsert_note(&self.db_path, key, note).map_err(backend)
    }

    fn clear_notes(&self) -> Result<(), StorageError> {
        delete_all_notes(&self.db_path).map_err(backend)
    }
}
