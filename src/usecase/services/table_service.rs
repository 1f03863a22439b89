use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::entities::row::{DeletedRow, Row, Table, Variant};
use crate::usecase::ports::storage::{AnnotationStorage, StorageError, TableStorage};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("row {index} does not exist (table has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// In-memory table mirrored to storage after every mutation.
pub struct TableStore {
    variant: Variant,
    storage: Arc<dyn TableStorage>,
    annotations: Arc<dyn AnnotationStorage>,
    table: Table,
    deleted: Option<DeletedRow>,
}

impl TableStore {
    pub fn new(
        variant: Variant,
        storage: Arc<dyn TableStorage>,
        annotations: Arc<dyn AnnotationStorage>,
    ) -> Self {
        Self {
            variant,
            storage,
            annotations,
            table: Table::default(),
            deleted: None,
        }
    }

    /// Replaces the in-memory table with the persisted one.
    pub fn load(&mut self) -> Result<usize, TableError> {
        self.table = self.storage.load()?;
        self.deleted = None;
        Ok(self.table.len())
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn deleted(&self) -> Option<&DeletedRow> {
        self.deleted.as_ref()
    }

    pub fn can_restore(&self) -> bool {
        self.deleted.is_some()
    }

    pub fn append(&mut self, rows: Vec<Row>) -> Result<usize, TableError> {
        let added = rows.len();
        self.table.extend(rows);
        self.persist()?;
        info!(added, total = self.table.len(), "rows appended");
        Ok(added)
    }

    pub fn delete_at(&mut self, index: usize) -> Result<Row, TableError> {
        let len = self.table.len();
        let row = self
            .table
            .remove(index)
            .ok_or(TableError::IndexOutOfRange { index, len })?;
        self.deleted = Some(DeletedRow {
            index,
            row: row.clone(),
        });
        self.persist()?;
        info!(index, "row deleted");
        Ok(row)
    }

    /// Returns false when there is nothing to restore.
    pub fn restore_last_deleted(&mut self) -> Result<bool, TableError> {
        let Some(DeletedRow { index, row }) = self.deleted.take() else {
            return Ok(false);
        };
        let at = self.table.insert(index, row);
        self.persist()?;
        info!(index = at, "row restored");
        Ok(true)
    }

    /// `confirm` runs before anything changes; declining leaves the table intact.
    pub fn clear_all(&mut self, confirm: impl FnOnce() -> bool) -> Result<bool, TableError> {
        if !confirm() {
            return Ok(false);
        }
        self.table.clear();
        self.deleted = None;
        if self.variant.has_annotations() {
            self.storage.clear()?;
            self.annotations.clear_notes()?;
        } else {
            self.persist()?;
        }
        info!(variant = self.variant.as_str(), "table cleared");
        Ok(true)
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.save(&self.table)
    }
}
