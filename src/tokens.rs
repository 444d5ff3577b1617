// src/tokens.rs
//
// The token stream: flat, ordered field tuples exactly as pattern extraction
// recovers them. Nothing here knows about nesting; that is reconstruct's job.

use crate::core::value::{parse_correlation_id, parse_grade};

/// `(name, period, time range, teacher)` from a gradebook class header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassHeader {
    pub name: String,
    pub period: u8,
    pub time_range: String,
    pub teacher: String,
}

/// The three shapes a gradebook grade cell can take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GradeTuple {
    /// A posted grade link: carries the class gId, the term code and the grade.
    Graded { gid: String, code: String, grade: String },
    /// An empty grade cell; the term exists but nothing is posted.
    Blank { gid: Option<String>, code: String },
    /// A bare number with no term code (semester exam column).
    Placeholder { grade: String },
}

/// A grade tuple after normalization; the only shape the grade walker sees.
#[derive(Clone, Debug, PartialEq)]
pub struct GradeToken {
    pub correlation_id: Option<u64>,
    pub short_code: Option<String>,
    pub grade: Option<f64>,
}

impl GradeTuple {
    pub fn normalize(&self) -> GradeToken {
        match self {
            GradeTuple::Graded { gid, code, grade } => GradeToken {
                correlation_id: parse_correlation_id(gid),
                short_code: non_blank(code),
                grade: parse_grade(grade),
            },
            GradeTuple::Blank { gid, code } => GradeToken {
                correlation_id: gid.as_deref().and_then(parse_correlation_id),
                short_code: non_blank(code),
                grade: None,
            },
            GradeTuple::Placeholder { grade } => GradeToken {
                correlation_id: None,
                short_code: None,
                grade: parse_grade(grade),
            },
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}

/// One assignment block: ids and labels plus the cells that may hold its grade.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentTuple {
    pub correlation_id: String,
    pub name: String,
    pub due_date_raw: String,
    pub term_code: String,
    /// Candidate grade cells, left to right. The first numeric one wins.
    pub grade_tokens: Vec<String>,
}

/// `(date, reason, periods, id, inline class or marker)` from an attendance row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRow {
    pub date: String,
    pub reason: String,
    pub periods: String,
    pub id: String,
    pub inline: String,
}

/// An id-keyed run of class links on the attendance page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassBlock {
    pub id: String,
    /// Matched block text; class names are pulled out of it one at a time.
    pub body: String,
}

/// Report-card text split into its header, ragged class rows, and credits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawReportCard {
    /// Header row. Element 0 is the "Course" caption, the rest label term slots.
    pub terms: Vec<String>,
    /// One entry per class; element 0 is the class label.
    pub rows: Vec<Vec<String>>,
    pub credits: Option<f64>,
}

/// `(queue_desc, queue_prog, queue_params, ref id)` from a report-card queue call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueCall {
    pub desc: String,
    pub prog: String,
    pub params: String,
    pub ref_id: String,
}
