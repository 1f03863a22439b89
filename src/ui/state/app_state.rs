use std::collections::BTreeMap;
use std::sync::Arc;

use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::row::Variant;
use crate::infra::sqlite::repo::SqliteStore;
use crate::usecase::services::table_service::TableStore;
use crate::READY_STATUS;

pub struct AppState {
    pub store: Signal<TableStore>,
    pub notes: Signal<BTreeMap<String, String>>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(variant: Variant, repo: Arc<SqliteStore>) -> Self {
        Self {
            store: use_signal(move || TableStore::new(variant, repo.clone(), repo)),
            notes: use_signal(BTreeMap::<String, String>::new),
            busy: use_signal(|| false),
            status: use_signal(|| READY_STATUS.to_string()),
        }
    }
}
