use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::domain::entities::extraction::{ImportBatch, ImportFailure};
use crate::domain::entities::row::Variant;
use crate::infra::import::tsv::import_tsv_file;

pub struct ImportService {
    variant: Variant,
}

impl ImportService {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    /// Reads every file in parallel and merges once all reads are done.
    /// Row groups follow the order of `paths`, not completion order.
    pub fn import_batch(&self, paths: &[PathBuf]) -> ImportBatch {
        let variant = self.variant;
        let slots: Vec<_> = paths
            .par_iter()
            .map(|path| import_tsv_file(path, variant))
            .collect();

        let mut batch = ImportBatch {
            files: paths.len(),
            ..ImportBatch::default()
        };
        for (path, slot) in paths.iter().zip(slots) {
            match slot {
                Ok(extraction) => {
                    for rejected in &extraction.rejected {
                        debug!(
                            path = %path.display(),
                            line = rejected.line_no,
                            fields = rejected.field_count,
                            "rejected line: {}",
                            rejected.reason
                        );
                    }
                    batch.rejected_lines += extraction.rejected.len();
                    batch.rows.extend(extraction.rows);
                }
                Err(err) => {
                    warn!(path = %path.display(), "import failed: {err:#}");
                    batch.failures.push(ImportFailure {
                        path: path.clone(),
                        message: format!("{err:#}"),
                    });
                }
            }
        }

        info!(
            files = batch.files,
            rows = batch.rows.len(),
            rejected = batch.rejected_lines,
            failed = batch.failures.len(),
            "import batch merged"
        );
        batch
    }
}
