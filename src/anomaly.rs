// src/anomaly.rs
//
// Nothing in reconstruction is fatal. When the source does not line up with
// what the walker expects, it records one of these and keeps going; callers
// decide whether to log, collect, or ignore them.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    // ===== Shape mismatch =====
    #[error("grade tuple #{processed} has no class to attach to ({classes} classes found); stopped")]
    GradeOverflow { processed: usize, classes: usize },

    #[error("class header '{name}' appears more than once; later header replaces the earlier one")]
    DuplicateClass { name: String },

    #[error("assignment '{name}' ({term}) references gId {correlation_id} which no class carries; dropped")]
    OrphanAssignment { correlation_id: String, name: String, term: String },

    // ===== Unparsable fields =====
    #[error("no grade found for assignment '{name}' ({term}, gId {correlation_id})")]
    MissingAssignmentGrade { correlation_id: String, name: String, term: String },

    #[error("unknown term code '{code}' kept verbatim")]
    UnknownTermCode { code: String },

    #[error("date '{raw}' matched no known format; kept verbatim")]
    UnparsedDate { raw: String },

    // ===== Report card rows =====
    #[error("row '{class}' has {len} cells, which no bracket covers; filled positionally, {dropped} value(s) dropped")]
    UnmatchedRowLength { class: String, len: usize, dropped: usize },
}

impl Anomaly {
    /// Log at the level the anomaly deserves.
    pub fn log(&self) {
        match self {
            Anomaly::GradeOverflow { .. }
            | Anomaly::OrphanAssignment { .. }
            | Anomaly::UnmatchedRowLength { .. } => logw!("{}", self),
            _ => logd!("{}", self),
        }
    }
}
