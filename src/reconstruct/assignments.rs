// src/reconstruct/assignments.rs
//
// Assignment blocks don't sit under their class in the markup; they carry the
// class's gId instead. The grade walk stamps that id on each class, so this is
// a plain join on it.

use std::collections::HashMap;

use crate::anomaly::Anomaly;
use crate::core::value::{parse_correlation_id, parse_date, parse_grade};
use crate::model::{AssignmentGrade, ClassRecord, PortalDate, Term};
use crate::tokens::AssignmentTuple;

/// First cell that reads as a number; zero counts.
pub fn first_grade(tokens: &[String]) -> Option<f64> {
    tokens.iter().find_map(|t| parse_grade(t))
}

/// Attach each assignment to the class whose correlation id it carries.
/// Returns how many were attached; the rest show up as anomalies.
pub fn correlate_assignments(classes: &mut [ClassRecord], tuples: &[AssignmentTuple]) -> (usize, Vec<Anomaly>) {
    let by_id: HashMap<u64, usize> = classes
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.correlation_id.map(|id| (id, i)))
        .collect();

    let mut anomalies = Vec::new();
    let mut attached = 0usize;

    for t in tuples {
        let Some(&idx) = parse_correlation_id(&t.correlation_id).and_then(|id| by_id.get(&id)) else {
            anomalies.push(Anomaly::OrphanAssignment {
                correlation_id: t.correlation_id.clone(),
                name: t.name.clone(),
                term: t.term_code.clone(),
            });
            continue;
        };

        let grade = first_grade(&t.grade_tokens);
        if grade.is_none() {
            anomalies.push(Anomaly::MissingAssignmentGrade {
                correlation_id: t.correlation_id.clone(),
                name: t.name.clone(),
                term: t.term_code.clone(),
            });
        }

        let due_date = parse_date(&t.due_date_raw);
        if let PortalDate::Raw(raw) = &due_date {
            anomalies.push(Anomaly::UnparsedDate { raw: raw.clone() });
        }

        let term = Term::parse(&t.term_code);
        if let Term::Raw(code) = &term {
            anomalies.push(Anomaly::UnknownTermCode { code: code.clone() });
        }

        classes[idx].assignment_grades.push(AssignmentGrade {
            term,
            name: t.name.clone(),
            due_date,
            grade,
        });
        attached += 1;
    }

    logd!("Assignments: {} of {} attached", attached, tuples.len());
    (attached, anomalies)
}
