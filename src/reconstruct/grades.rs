// src/reconstruct/grades.rs
//
// The gradebook emits every class's grade cells as one flat run. Boundaries
// are implied: `FIN` closes a class, and a cell without a term code is a
// semester exam whose half is decided by the code just before it.

use std::collections::HashMap;

use crate::anomaly::Anomaly;
use crate::model::{ClassRecord, ShortCode, Term, TermGrade};
use crate::tokens::{ClassHeader, GradeToken, GradeTuple};

/// Walk state: which class receives the next grade, and the last term code seen.
#[derive(Debug, Default)]
pub struct GradeCursor {
    class: usize,
    prev: Option<Term>,
}

impl GradeCursor {
    pub fn new() -> Self { Self::default() }

    pub fn class_index(&self) -> usize { self.class }

    pub fn prev_code(&self) -> Option<&Term> { self.prev.as_ref() }

    /// Term a token belongs to. A missing code is the exam of whichever
    /// semester the previous code closed.
    fn resolve(&self, code: Option<&str>) -> Term {
        match code {
            Some(raw) => Term::parse(raw),
            None if self.prev == Some(Term::Code(ShortCode::Q2)) => Term::Code(ShortCode::SE1),
            None => Term::Code(ShortCode::SE2),
        }
    }

    /// Apply one token to `classes`. Returns `Err(GradeOverflow)` once the
    /// cursor has run past the last class; the caller stops there.
    pub fn step(
        &mut self,
        classes: &mut [ClassRecord],
        token: &GradeToken,
        processed: usize,
        anomalies: &mut Vec<Anomaly>,
    ) -> Result<(), Anomaly> {
        let total = classes.len();
        let Some(class) = classes.get_mut(self.class) else {
            return Err(Anomaly::GradeOverflow { processed, classes: total });
        };

        if let Some(id) = token.correlation_id {
            if class.correlation_id.is_none() {
                class.correlation_id = Some(id);
            }
        }

        let term = self.resolve(token.short_code.as_deref());
        if token.short_code.is_some() {
            if let Term::Raw(code) = &term {
                anomalies.push(Anomaly::UnknownTermCode { code: code.clone() });
            }
            self.prev = Some(term.clone());
        }

        let is_fin = term == Term::Code(ShortCode::FIN);

        class.term_grades.push(TermGrade { term, grade: token.grade });

        if is_fin {
            self.class += 1;
        }
        Ok(())
    }
}

/// One record per header, in header order. A repeated name replaces the
/// earlier record in place so names stay unique.
fn records_from_headers(headers: &[ClassHeader], anomalies: &mut Vec<Anomaly>) -> Vec<ClassRecord> {
    let mut classes: Vec<ClassRecord> = Vec::with_capacity(headers.len());
    let mut by_name: HashMap<&str, usize> = HashMap::new();

    for h in headers {
        let record = ClassRecord::new(h.name.as_str(), h.period, h.time_range.as_str(), h.teacher.as_str());
        match by_name.get(h.name.as_str()) {
            Some(&idx) => {
                anomalies.push(Anomaly::DuplicateClass { name: h.name.clone() });
                classes[idx] = record;
            }
            None => {
                by_name.insert(h.name.as_str(), classes.len());
                classes.push(record);
            }
        }
    }
    classes
}

pub fn reconstruct_grades(headers: &[ClassHeader], tuples: &[GradeTuple]) -> (Vec<ClassRecord>, Vec<Anomaly>) {
    let mut anomalies = Vec::new();
    let mut classes = records_from_headers(headers, &mut anomalies);
    let mut cursor = GradeCursor::new();

    for (processed, tuple) in tuples.iter().enumerate() {
        let token = tuple.normalize();
        if let Err(overflow) = cursor.step(&mut classes, &token, processed, &mut anomalies) {
            anomalies.push(overflow);
            break;
        }
    }

    logd!(
        "Grades: {} classes, {} term grades, cursor at class {}",
        classes.len(),
        classes.iter().map(|c| c.term_grades.len()).sum::<usize>(),
        cursor.class_index()
    );
    (classes, anomalies)
}
