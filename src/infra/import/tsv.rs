use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::extraction::Extraction;
use crate::domain::entities::row::Variant;
use crate::usecase::services::extract_service::extract_from_bytes;

pub fn import_tsv_file(path: &Path, variant: Variant) -> Result<Extraction> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read export: {}", path.display()))?;
    Ok(extract_from_bytes(&bytes, variant))
}
