// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod anomaly;
pub mod config;
pub mod core;
pub mod model;
pub mod tokens;

pub mod specs;
pub mod reconstruct;
pub mod scrape;

pub mod csv;
pub mod data;
pub mod file;

#[cfg(feature = "cli")]
pub mod cli;

pub use anomaly::Anomaly;
pub use model::{AbsentEvent, AssignmentGrade, ClassRecord, ReportCardClass, ReportCardInfo, ShortCode, SortedRow, Term, TermGrade};
pub use scrape::{collect_attendance, collect_gradebook, collect_report_card, collect_report_card_names};
