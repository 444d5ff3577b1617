// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Which portal document an input file holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocKind {
    Gradebook,
    Assignments,
    Attendance,
    ReportCard,
    ReportCardNames,
}

impl DocKind {
    pub fn stem(&self) -> &'static str {
        match self {
            DocKind::Gradebook => "gradebook",
            DocKind::Assignments => "assignments",
            DocKind::Attendance => "attendance",
            DocKind::ReportCard => "report_card",
            DocKind::ReportCardNames => "report_cards",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator; JSON has none.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// `None` writes to stdout.
    pub out: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out: None,
        }
    }
}

impl ExportOptions {
    /// Where a file export lands when the user gave a directory (or nothing).
    pub fn default_path_for(&self, kind: DocKind) -> PathBuf {
        PathBuf::from(DEFAULT_OUT_DIR).join(format!("{}_{}.{}", DEFAULT_FILE, kind.stem(), self.format.ext()))
    }
}
