use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::entities::row::{Row, Variant};
use crate::infra::export::tsv::export_table_tsv;
use crate::infra::sqlite::repo::SqliteStore;
use crate::platform::desktop::blocking::run_blocking;
use crate::platform::desktop::clipboard::copy_text;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::annotation_service::AnnotationService;
use crate::usecase::services::import_service::ImportService;
use crate::usecase::services::table_service::TableError;
use crate::{
    default_export_file_name, import_status_message, table_cell_style, table_header_cell_style,
    table_headers,
};

const TOOLBAR_BUTTON_STYLE: &str = "height: 40px; padding: 0 14px; cursor: pointer;";

fn confirm_clear_all() -> bool {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Usuń wszystkie wiersze")
        .set_description("Czy na pewno chcesz usunąć wszystkie wiersze?")
        .set_buttons(MessageButtons::YesNo)
        .show()
        == MessageDialogResult::Yes
}

#[component]
fn FileSelector(
    disabled: bool,
    on_select: EventHandler<Vec<PathBuf>>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            disabled: disabled,
            style: TOOLBAR_BUTTON_STYLE,
            onclick: move |_| {
                match FileDialog::new()
                    .add_filter("Eksport TXT", &["txt", "tsv", "csv"])
                    .add_filter("Wszystkie pliki", &["*"])
                    .pick_files()
                {
                    Some(paths) if !paths.is_empty() => on_select.call(paths),
                    _ => on_cancel.call(()),
                }
            },
            "Wybierz pliki"
        }
    }
}

#[component]
fn RowsTable(
    variant: Variant,
    rows: Vec<Row>,
    notes: BTreeMap<String, String>,
    on_copy: EventHandler<String>,
    on_delete: EventHandler<usize>,
    on_note: EventHandler<(String, String)>,
) -> Element {
    let headers = table_headers(variant);
    let with_notes = variant.has_annotations();

    rsx! {
        table { style: "border-collapse: collapse; width: 100%; background: #fff;",
            thead {
                tr {
                    for header in headers.iter() {
                        th { style: "{table_header_cell_style()}", "{header}" }
                    }
                }
            }
            tbody {
                {rows.iter().enumerate().map(|(row_idx, row)| {
                    let position = row_idx + 1;
                    let fields = row.fields().iter().skip(1).cloned().collect::<Vec<_>>();
                    let note_key = row.annotation_key(variant).map(str::to_string);
                    let has_key = note_key.is_some();
                    let note = note_key
                        .as_ref()
                        .and_then(|key| notes.get(key).cloned())
                        .unwrap_or_default();
                    rsx!(
                        tr { key: "{row_idx}",
                            td { style: "{table_cell_style()}", "{position}" }
                            {fields.into_iter().map(|value| {
                                let copied = value.clone();
                                rsx!(
                                    td {
                                        style: "{table_cell_style()}",
                                        ondoubleclick: move |_| on_copy.call(copied.clone()),
                                        "{value}"
                                    }
                                )
                            })}
                            if with_notes {
                                td { style: "border: 1px solid #bbb; padding: 4px;",
                                    input {
                                        style: "width: 100%; box-sizing: border-box;",
                                        disabled: !has_key,
                                        value: "{note}",
                                        oninput: move |event| {
                                            if let Some(key) = note_key.clone() {
                                                on_note.call((key, event.value()));
                                            }
                                        }
                                    }
                                }
                            }
                            td { style: "border: 1px solid #bbb; padding: 4px; text-align: center;",
                                button {
                                    onclick: move |_| on_delete.call(row_idx),
                                    "USUŃ"
                                }
                            }
                        }
                    )
                })}
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            return rsx! {
                div {
                    p { "Nieprawidłowa konfiguracja: {err}" }
                }
            };
        }
    };
    let variant = config.variant;

    let repo = Arc::new(SqliteStore::new(config.db_path.clone()));
    let AppState {
        mut store,
        mut notes,
        mut busy,
        mut status,
    } = AppState::new(variant, repo.clone());

    let import_service = Arc::new(ImportService::new(variant));
    let annotation_service = Arc::new(AnnotationService::new(variant, repo.clone()));
    let annotation_service_for_hydrate = annotation_service.clone();
    let annotation_service_for_edit = annotation_service.clone();
    let repo_for_init = repo.clone();

    use_effect(move || {
        busy.set(true);
        let load_result = run_blocking("load table", || -> Result<usize, TableError> {
            repo_for_init.init()?;
            store.write().load()
        });
        match load_result {
            Ok(count) => status.set(format!("Wczytano {count} wierszy")),
            Err(err) => {
                warn!("failed to load table: {err}");
                status.set(format!("Nie udało się wczytać danych: {err}"));
            }
        }
        busy.set(false);
    });

    use_effect(move || {
        if !variant.has_annotations() {
            return;
        }
        let snapshot = store.read().table().clone();
        match run_blocking("hydrate notes", || {
            annotation_service_for_hydrate.hydrate(&snapshot)
        }) {
            Ok(loaded) => notes.set(loaded),
            Err(err) => {
                warn!("failed to load notes: {err}");
                status.set(format!("Nie udało się wczytać uwag: {err}"));
            }
        }
    });

    let rows_snapshot = store.read().table().rows().to_vec();
    let row_count = rows_snapshot.len();
    let is_empty = store.read().table().is_empty();
    let can_restore = store.read().can_restore();
    let restore_title = store
        .read()
        .deleted()
        .map(|deleted| format!("Wiersz {}", deleted.index + 1))
        .unwrap_or_default();
    let notes_snapshot = notes();

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 12px; background: #fff; min-height: 100vh;",

            div {
                style: "display: flex; flex-direction: row; align-items: center; justify-content: space-between; gap: 8px; padding: 10px; position: sticky; top: 0; background: #fff; z-index: 10;",
                FileSelector {
                    disabled: busy(),
                    on_select: move |paths: Vec<PathBuf>| {
                        busy.set(true);
                        status.set(format!("Wczytywanie plików: {}", paths.len()));
                        let mut batch =
                            run_blocking("import batch", || import_service.import_batch(&paths));
                        let rows = std::mem::take(&mut batch.rows);
                        let appended = store.write().append(rows);
                        match appended {
                            Ok(added) => status.set(import_status_message(&batch, added)),
                            Err(err) => status.set(format!("Nie udało się zapisać danych: {err}")),
                        }
                        busy.set(false);
                    },
                    on_cancel: move |_| status.set("Nie wybrano plików".to_string()),
                }

                span { "Wierszy: {row_count}" }

                button {
                    style: TOOLBAR_BUTTON_STYLE,
                    disabled: !can_restore || busy(),
                    title: "{restore_title}",
                    onclick: move |_| {
                        let restored = store.write().restore_last_deleted();
                        match restored {
                            Ok(true) => status.set("Przywrócono ostatnio usunięty wiersz".to_string()),
                            Ok(false) => {}
                            Err(err) => status.set(format!("Nie udało się zapisać danych: {err}")),
                        }
                    },
                    "Przywróć ostatnio usunięty wiersz"
                }

                button {
                    style: TOOLBAR_BUTTON_STYLE,
                    disabled: is_empty || busy(),
                    onclick: move |_| {
                        let Some(path) = FileDialog::new()
                            .add_filter("TSV", &["tsv", "txt"])
                            .set_file_name(default_export_file_name())
                            .save_file()
                        else {
                            status.set("Anulowano eksport".to_string());
                            return;
                        };
                        let exported = run_blocking("export table", || {
                            export_table_tsv(&path, variant, store.read().table())
                        });
                        match exported {
                            Ok(count) => status.set(format!(
                                "Wyeksportowano {count} wierszy do {}",
                                path.display()
                            )),
                            Err(err) => status.set(format!("Eksport nie powiódł się: {err:#}")),
                        }
                    },
                    "Eksportuj"
                }

                button {
                    style: "{TOOLBAR_BUTTON_STYLE} background: #d24; color: #fff; border: none;",
                    disabled: is_empty || busy(),
                    onclick: move |_| {
                        let cleared = store.write().clear_all(confirm_clear_all);
                        match cleared {
                            Ok(true) => {
                                notes.write().clear();
                                status.set("Usunięto wszystkie wiersze".to_string());
                            }
                            Ok(false) => status.set("Anulowano usuwanie".to_string()),
                            Err(err) => status.set(format!("Nie udało się wyczyścić danych: {err}")),
                        }
                    },
                    "Usuń wszystkie wiersze"
                }
            }

            p { style: "margin: 4px 10px; color: #555;", "{status}" }

            RowsTable {
                variant: variant,
                rows: rows_snapshot,
                notes: notes_snapshot,
                on_copy: move |text: String| match copy_text(&text) {
                    Ok(()) => status.set(format!("Skopiowano: {text}")),
                    Err(err) => warn!("clipboard copy failed: {err:#}"),
                },
                on_delete: move |row_idx: usize| {
                    let deleted = store.write().delete_at(row_idx);
                    match deleted {
                        Ok(_) => status.set(format!("Usunięto wiersz {}", row_idx + 1)),
                        Err(err) => status.set(format!("Nie udało się usunąć wiersza: {err}")),
                    }
                },
                on_note: move |(key, value): (String, String)| {
                    notes.write().insert(key.clone(), value.clone());
                    if let Err(err) = annotation_service_for_edit.set(&key, &value) {
                        warn!("failed to save note for {key}: {err}");
                        status.set(format!("Nie udało się zapisać uwagi: {err}"));
                    }
                },
            }
        }
    }
}
