use std::path::PathBuf;

use crate::domain::entities::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    TooFewFields { required: usize },
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::TooFewFields { required } => {
                write!(f, "expected at least {required} fields")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the decoded file.
    pub line_no: usize,
    pub field_count: usize,
    pub reason: RejectReason,
}

/// Accepted rows of one file plus every data line that was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub rows: Vec<Row>,
    pub rejected: Vec<RejectedLine>,
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Merged result of one file-picker selection, rows in picker order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    pub files: usize,
    pub rows: Vec<Row>,
    pub rejected_lines: usize,
    pub failures: Vec<ImportFailure>,
}
