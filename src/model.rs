// src/model.rs
//
// Typed records rebuilt from portal documents. Everything here is plain data:
// owned, `Send + Sync`, serializable, and compared structurally in tests.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::consts::ROW_WIDTH;

/// Every grading-period code a gradebook can carry, in portal column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortCode {
    P1, P2, Q1, P3, P4, Q2, SE1, S1,
    P5, P6, Q3, P7, P8, Q4, SE2, S2,
    FIN,
}

impl ShortCode {
    pub const ALL: [ShortCode; 17] = [
        ShortCode::P1, ShortCode::P2, ShortCode::Q1, ShortCode::P3, ShortCode::P4,
        ShortCode::Q2, ShortCode::SE1, ShortCode::S1, ShortCode::P5, ShortCode::P6,
        ShortCode::Q3, ShortCode::P7, ShortCode::P8, ShortCode::Q4, ShortCode::SE2,
        ShortCode::S2, ShortCode::FIN,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShortCode::P1 => "P1",
            ShortCode::P2 => "P2",
            ShortCode::Q1 => "Q1",
            ShortCode::P3 => "P3",
            ShortCode::P4 => "P4",
            ShortCode::Q2 => "Q2",
            ShortCode::SE1 => "SE1",
            ShortCode::S1 => "S1",
            ShortCode::P5 => "P5",
            ShortCode::P6 => "P6",
            ShortCode::Q3 => "Q3",
            ShortCode::P7 => "P7",
            ShortCode::P8 => "P8",
            ShortCode::Q4 => "Q4",
            ShortCode::SE2 => "SE2",
            ShortCode::S2 => "S2",
            ShortCode::FIN => "FIN",
        }
    }

    /// Long display name, e.g. `Q1` → "Quarter 1".
    pub fn label(&self) -> &'static str {
        match self {
            ShortCode::P1 => "Progress Report 1",
            ShortCode::P2 => "Progress Report 2",
            ShortCode::Q1 => "Quarter 1",
            ShortCode::P3 => "Progress Report 3",
            ShortCode::P4 => "Progress Report 4",
            ShortCode::Q2 => "Quarter 2",
            ShortCode::SE1 => "Semester 1 Exam",
            ShortCode::S1 => "Semester 1",
            ShortCode::P5 => "Progress Report 5",
            ShortCode::P6 => "Progress Report 6",
            ShortCode::Q3 => "Quarter 3",
            ShortCode::P7 => "Progress Report 7",
            ShortCode::P8 => "Progress Report 8",
            ShortCode::Q4 => "Quarter 4",
            ShortCode::SE2 => "Semester 2 Exam",
            ShortCode::S2 => "Semester 2",
            ShortCode::FIN => "Final",
        }
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShortCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ShortCode::ALL.iter().copied().find(|c| c.as_str().eq_ignore_ascii_case(s)).ok_or(())
    }
}

/// A term as it appeared in the stream: a known code, or the raw text when the
/// portal emits something outside the enumerated set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Term {
    Code(ShortCode),
    Raw(String),
}

impl Term {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<ShortCode>() {
            Ok(code) => Term::Code(code),
            Err(()) => Term::Raw(s!(raw.trim())),
        }
    }

    pub fn code(&self) -> Option<ShortCode> {
        match self {
            Term::Code(c) => Some(*c),
            Term::Raw(_) => None,
        }
    }
}

impl From<ShortCode> for Term {
    fn from(code: ShortCode) -> Self { Term::Code(code) }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Code(c) => f.write_str(c.as_str()),
            Term::Raw(s) => f.write_str(s),
        }
    }
}

/// A calendar date, or the source text verbatim when no known format matched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortalDate {
    Date(NaiveDate),
    Raw(String),
}

impl PortalDate {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            PortalDate::Date(d) => Some(*d),
            PortalDate::Raw(_) => None,
        }
    }
}

impl fmt::Display for PortalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalDate::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            PortalDate::Raw(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermGrade {
    pub term: Term,
    /// `None` = not posted yet. Never collapsed to zero.
    pub grade: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignmentGrade {
    pub term: Term,
    pub name: String,
    pub due_date: PortalDate,
    pub grade: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub period: u8,
    pub teacher: String,
    pub time_range: String,
    /// Joins assignment blocks back to this class. First non-zero stamp wins.
    pub correlation_id: Option<u64>,
    pub term_grades: Vec<TermGrade>,
    pub assignment_grades: Vec<AssignmentGrade>,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>, period: u8, time_range: impl Into<String>, teacher: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            period,
            teacher: teacher.into(),
            time_range: time_range.into(),
            correlation_id: None,
            term_grades: Vec::new(),
            assignment_grades: Vec::new(),
        }
    }

    /// Posted grade for a term, if any.
    pub fn grade_for(&self, code: ShortCode) -> Option<f64> {
        self.term_grades
            .iter()
            .find(|tg| tg.term.code() == Some(code))
            .and_then(|tg| tg.grade)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbsentEvent {
    pub date: PortalDate,
    pub reason: String,
    pub periods: String,
    pub classes: Vec<String>,
}

/// One report-card cell: a number, or a mark such as a conduct letter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportValue {
    Grade(f64),
    Mark(String),
}

impl ReportValue {
    pub fn grade(&self) -> Option<f64> {
        match self {
            ReportValue::Grade(g) => Some(*g),
            ReportValue::Mark(_) => None,
        }
    }
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Grade(g) => write!(f, "{g}"),
            ReportValue::Mark(m) => f.write_str(m),
        }
    }
}

/// Fixed-width report-card row. Slot 0 is the class label; `None` is blank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedRow(pub [Option<String>; ROW_WIDTH]);

impl SortedRow {
    pub fn blank() -> Self {
        SortedRow(std::array::from_fn(|_| None))
    }

    pub fn label(&self) -> Option<&str> {
        self.0[0].as_deref()
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.0.get(slot).and_then(|s| s.as_deref())
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { false }

    pub fn as_slice(&self) -> &[Option<String>] { &self.0 }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportCardClass {
    pub class: String,
    /// Slots 1..=18 of the sorted row, typed. Always `ROW_WIDTH - 1` long.
    pub slots: Vec<Option<ReportValue>>,
}

impl ReportCardClass {
    /// Pair each slot with its header label. Missing labels come back empty.
    pub fn terms<'a>(&'a self, header: &'a [String]) -> impl Iterator<Item = (&'a str, Option<&'a ReportValue>)> + 'a {
        self.slots
            .iter()
            .enumerate()
            .map(move |(i, v)| (header.get(i).map(|s| s.as_str()).unwrap_or(""), v.as_ref()))
    }
}

/// Listing entry for a report card the portal can render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCardInfo {
    pub name: String,
    pub queue_desc: String,
    pub queue_prog: String,
    pub queue_params: String,
}
