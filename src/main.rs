use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;

use crate::config::AppConfig;
use crate::domain::entities::extraction::ImportBatch;
use crate::domain::entities::row::Variant;

pub const READY_STATUS: &str = "Gotowe";
const NOTE_HEADER: &str = "Uwagi";
const DELETE_HEADER: &str = "Czy usunąć?";

fn main() {
    init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration: {err}");
            std::process::exit(2);
        }
    };
    let webview_data_dir = match ensure_webview_data_dir(&config.webview_data_dir) {
        Ok(dir) => dir,
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    };
    info!(
        variant = config.variant.as_str(),
        db = %config.db_path.display(),
        "starting"
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Faktury"))
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}

fn init_tracing() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env).with_target(false).init();
}

fn ensure_webview_data_dir(webview_data_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir.to_path_buf())
}

/// Header cells of the table view: position, every field but the identifier,
/// the note column for the extended variant and the delete column.
pub fn table_headers(variant: Variant) -> Vec<&'static str> {
    let mut headers = vec!["LP"];
    headers.extend(variant.column_labels().iter().skip(1).copied());
    if variant.has_annotations() {
        headers.push(NOTE_HEADER);
    }
    headers.push(DELETE_HEADER);
    headers
}

pub fn import_status_message(batch: &ImportBatch, appended: usize) -> String {
    let mut message = format!("Dodano {appended} wierszy z {} plików", batch.files);
    if batch.rejected_lines > 0 {
        message.push_str(&format!(", pominięto {} linii", batch.rejected_lines));
    }
    if !batch.failures.is_empty() {
        let names = batch
            .failures
            .iter()
            .map(|failure| {
                failure
                    .path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| failure.path.display().to_string())
            })
            .collect::<Vec<_>>()
            .join(", ");
        message.push_str(&format!("; nie udało się odczytać: {names}"));
    }
    message
}

pub fn default_export_file_name() -> String {
    format!("faktury-{}.tsv", chrono::Local::now().format("%m%d"))
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; background: #f4f4f4; border: 1px solid #bbb; padding: 6px; text-align: left; z-index: 1;"
}

pub fn table_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px; user-select: text; cursor: copy;"
}
