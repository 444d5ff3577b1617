// src/reconstruct/mod.rs
//! Structural reconstruction: flat `tokens::*` in, typed `model::*` out.
//!
//! Every entry point is pure. Nothing here fails; findings that don't line up
//! come back as `Anomaly` values next to the result.
pub mod assignments;
pub mod attendance;
pub mod grades;
pub mod report_card;

pub use assignments::correlate_assignments;
pub use attendance::reconstruct_attendance;
pub use grades::{reconstruct_grades, GradeCursor};
pub use report_card::{build_report_card, join_report_card_names, sort_row, sort_row_checked, BRACKETS};
