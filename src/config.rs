use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::domain::entities::row::Variant;

pub const VARIANT_ENV: &str = "FAKTURY_VARIANT";
pub const DB_PATH_ENV: &str = "FAKTURY_DB";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unable to resolve data directory")]
    NoDataDir,
    #[error("unknown FAKTURY_VARIANT value `{0}` (expected `base` or `extended`)")]
    UnknownVariant(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub variant: Variant,
    pub db_path: PathBuf,
    pub webview_data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let project_dirs =
            ProjectDirs::from("pl", "faktury", "faktury").ok_or(ConfigError::NoDataDir)?;
        Self::resolve(
            project_dirs.data_local_dir(),
            std::env::var(VARIANT_ENV).ok().as_deref(),
            std::env::var_os(DB_PATH_ENV).map(PathBuf::from),
        )
    }

    /// Builds the config from already-read environment values.
    pub fn resolve(
        data_dir: &Path,
        variant: Option<&str>,
        db_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let variant = match variant.filter(|value| !value.trim().is_empty()) {
            Some(value) => {
                Variant::parse(value).ok_or_else(|| ConfigError::UnknownVariant(value.to_string()))?
            }
            None => Variant::default(),
        };

        Ok(Self {
            variant,
            db_path: db_path.unwrap_or_else(|| data_dir.join("faktury.sqlite")),
            webview_data_dir: data_dir.join("webview2"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_base_variant_inside_data_dir() {
        let config = AppConfig::resolve(Path::new("/data"), None, None).expect("resolve");
        assert_eq!(config.variant, Variant::Base);
        assert_eq!(config.db_path, Path::new("/data/faktury.sqlite"));
        assert_eq!(config.webview_data_dir, Path::new("/data/webview2"));
    }

    #[test]
    fn honours_overrides() {
        let config = AppConfig::resolve(
            Path::new("/data"),
            Some("extended"),
            Some(PathBuf::from("/tmp/other.sqlite")),
        )
        .expect("resolve");
        assert_eq!(config.variant, Variant::Extended);
        assert_eq!(config.db_path, Path::new("/tmp/other.sqlite"));
    }

    #[test]
    fn rejects_unknown_variant() {
        let err = AppConfig::resolve(Path::new("/data"), Some("wide"), None).unwrap_err();
        assert_eq!(err, ConfigError::UnknownVariant("wide".to_string()));
    }
}
