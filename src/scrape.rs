// src/scrape.rs
//
// Document-level entry points: page text in, typed bundle out. Extraction
// (specs) and reconstruction run back to back; every anomaly is logged once
// here and kept on the bundle for the caller.

use serde::Serialize;

use crate::anomaly::Anomaly;
use crate::model::{AbsentEvent, ClassRecord, ReportCardClass, ReportCardInfo};
use crate::reconstruct::{
    build_report_card, correlate_assignments, join_report_card_names, reconstruct_attendance, reconstruct_grades,
};
use crate::specs;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Gradebook {
    pub classes: Vec<ClassRecord>,
    pub anomalies: Vec<Anomaly>,
}

impl Gradebook {
    pub fn class(&self, name: &str) -> Option<&ClassRecord> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn term_grade_count(&self) -> usize {
        self.classes.iter().map(|c| c.term_grades.len()).sum()
    }

    pub fn assignment_count(&self) -> usize {
        self.classes.iter().map(|c| c.assignment_grades.len()).sum()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Attendance {
    pub events: Vec<AbsentEvent>,
    pub anomalies: Vec<Anomaly>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReportCard {
    pub name: String,
    /// Header labels for slots 1..=18 (the "Course" caption is not included).
    pub terms: Vec<String>,
    pub classes: Vec<ReportCardClass>,
    pub credits: Option<f64>,
    pub anomalies: Vec<Anomaly>,
}

impl ReportCard {
    pub fn class(&self, name: &str) -> Option<&ReportCardClass> {
        self.classes.iter().find(|c| c.class == name)
    }
}

fn log_all(anomalies: &[Anomaly]) {
    for a in anomalies {
        a.log();
    }
}

/// Gradebook page: classes, their term grades, and their assignments.
pub fn collect_gradebook(html: &str) -> Gradebook {
    let headers = specs::gradebook::class_headers(html);
    let tuples = specs::gradebook::grade_tuples(html);
    let (mut classes, mut anomalies) = reconstruct_grades(&headers, &tuples);

    let assignments = specs::gradebook::assignment_tuples(html);
    let (_, more) = correlate_assignments(&mut classes, &assignments);
    anomalies.extend(more);

    let book = Gradebook { classes, anomalies };
    logf!(
        "Gradebook: {} classes, {} term grades, {} assignments",
        book.classes.len(),
        book.term_grade_count(),
        book.assignment_count()
    );
    log_all(&book.anomalies);
    book
}

/// Attendance page. Event rows and class-list blocks come from the same text.
pub fn collect_attendance(html: &str) -> Attendance {
    let (events, anomalies) = reconstruct_attendance(html, html);
    logf!("Attendance: {} absence events", events.len());
    log_all(&anomalies);
    Attendance { events, anomalies }
}

/// Rendered report card as text lines. `name` is the listing name; it decides
/// whether single-semester rows belong to the spring half.
pub fn collect_report_card(name: &str, text: &str) -> ReportCard {
    let window = specs::report_card::course_window(text);
    let raw = specs::report_card::split_document(&window);
    let (classes, anomalies) = build_report_card(name, &raw);

    let card = ReportCard {
        name: s!(name),
        terms: raw.terms.iter().skip(1).cloned().collect(),
        classes,
        credits: raw.credits,
        anomalies,
    };
    logf!("Report card '{}': {} classes, credits {:?}", card.name, card.classes.len(), card.credits);
    log_all(&card.anomalies);
    card
}

/// Report-card listing page: every card the portal can render.
pub fn collect_report_card_names(html: &str) -> Vec<ReportCardInfo> {
    let names = specs::report_card::names_by_id(html);
    let calls = specs::report_card::queue_calls(html);
    let infos = join_report_card_names(&names, &calls);
    logf!("Report cards: {} listed", infos.len());
    infos
}
