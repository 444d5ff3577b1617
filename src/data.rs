// src/data.rs
//
// Flat tables for export. Records stay typed everywhere else; they only become
// rows of strings here, right before CSV/TSV output.

use crate::config::consts::ROW_WIDTH;
use crate::model::ReportCardInfo;
use crate::scrape::{Attendance, Gradebook, ReportCard};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: &[&str]) -> Self {
        Self { headers: Some(headers.iter().map(|h| s!(*h)).collect()), rows: Vec::new() }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Absent grades export as empty cells, never as 0.
fn grade_cell(g: Option<f64>) -> String {
    g.map(|v| v.to_string()).unwrap_or_default()
}

/// One row per posted-or-pending term grade.
pub fn term_grades(book: &Gradebook) -> DataSet {
    let mut ds = DataSet::new(&["Class", "Period", "Teacher", "Time", "Term", "Grade"]);
    for c in &book.classes {
        for tg in &c.term_grades {
            ds.rows.push(vec![
                c.name.clone(),
                c.period.to_string(),
                c.teacher.clone(),
                c.time_range.clone(),
                tg.term.to_string(),
                grade_cell(tg.grade),
            ]);
        }
    }
    ds
}

pub fn assignments(book: &Gradebook) -> DataSet {
    let mut ds = DataSet::new(&["Class", "Term", "Assignment", "Due", "Grade"]);
    for c in &book.classes {
        for a in &c.assignment_grades {
            ds.rows.push(vec![
                c.name.clone(),
                a.term.to_string(),
                a.name.clone(),
                a.due_date.to_string(),
                grade_cell(a.grade),
            ]);
        }
    }
    ds
}

pub fn attendance(att: &Attendance) -> DataSet {
    let mut ds = DataSet::new(&["Date", "Reason", "Periods", "Classes"]);
    for e in &att.events {
        ds.rows.push(vec![e.date.to_string(), e.reason.clone(), e.periods.clone(), e.classes.join("; ")]);
    }
    ds
}

/// Class label plus the 18 slots; header labels past the card's own header are left empty.
pub fn report_card(card: &ReportCard) -> DataSet {
    let mut headers = vec![s!("Class")];
    headers.extend((0..ROW_WIDTH - 1).map(|i| card.terms.get(i).cloned().unwrap_or_default()));

    let rows = card
        .classes
        .iter()
        .map(|c| {
            let mut row = vec![c.class.clone()];
            row.extend(c.slots.iter().map(|v| v.as_ref().map(|v| v.to_string()).unwrap_or_default()));
            row
        })
        .collect();
    DataSet { headers: Some(headers), rows }
}

pub fn report_card_names(infos: &[ReportCardInfo]) -> DataSet {
    let mut ds = DataSet::new(&["Name", "Queue Desc", "Queue Prog", "Queue Params"]);
    for i in infos {
        ds.rows.push(vec![i.name.clone(), i.queue_desc.clone(), i.queue_prog.clone(), i.queue_params.clone()]);
    }
    ds
}
