use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::row::{Table, Variant};

/// Writes a header naming the variant columns, then one line per row.
pub fn export_table_tsv(path: &Path, variant: Variant, table: &Table) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)
        .with_context(|| format!("failed to create export: {}", path.display()))?;

    writer
        .write_record(variant.column_labels())
        .context("failed to write export header")?;
    for row in table.rows() {
        writer
            .write_record(row.fields())
            .context("failed to write export row")?;
    }
    writer.flush().context("failed to flush export")?;

    Ok(table.len())
}
