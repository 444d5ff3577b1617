// src/specs/report_card.rs
//
// Report cards come in two pieces: an HTML listing that names each card and
// the queue call that renders it, and the rendered card as a stream of text
// lines (one per PDF text item). The grade table sits between the "Course"
// header and the "Comments:" footer.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::{LABEL_MIN_LEN, REPORT_CARD_END, REPORT_CARD_START};
use crate::core::sanitize::clean_text;
use crate::tokens::{QueueCall, RawReportCard};

/// Groups: link id | card name
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a id='(\w+)' name='\w+' href="javascript:void\(0\)" >([^<]+)"#).expect("report card name pattern")
});

/// Groups: queue desc | queue prog | queue params | ref id
static QUEUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"Queue","([^"]+)", "([^"]+)", "([^"]+)"\)\},'#(\w+)"#).expect("report card queue pattern")
});

// ---------- listing ----------

/// `(id, name)` for every link on the listing page, in page order.
pub fn name_links(html: &str) -> Vec<(String, String)> {
    NAME_RE
        .captures_iter(html)
        .map(|c| (s!(&c[1]), clean_text(&c[2])))
        .collect()
}

pub fn queue_calls(html: &str) -> Vec<QueueCall> {
    QUEUE_RE
        .captures_iter(html)
        .map(|c| QueueCall {
            desc: s!(&c[1]),
            prog: s!(&c[2]),
            params: s!(&c[3]),
            ref_id: s!(&c[4]),
        })
        .collect()
}

/// Names keyed by link id, for the queue-call join.
pub fn names_by_id(html: &str) -> HashMap<String, String> {
    name_links(html).into_iter().collect()
}

// ---------- rendered card ----------

/// Lines from the first one mentioning "Course" up to (not including) the
/// first one mentioning "Comments:". Empty when there is no "Course" line.
pub fn course_window(text: &str) -> Vec<String> {
    text.lines()
        .skip_while(|l| !l.contains(REPORT_CARD_START))
        .take_while(|l| !l.contains(REPORT_CARD_END))
        .map(|l| s!(l))
        .collect()
}

fn is_numeric(s: &str) -> bool {
    s.trim().parse::<f64>().is_ok()
}

fn is_label(s: &str) -> bool {
    s.chars().count() >= LABEL_MIN_LEN && !is_numeric(s)
}

/// Split the course window into header terms, class rows and trailing credits.
///
/// Blank lines are ignored. The last line is the credit total. The header is
/// everything before the first long element after the "Course" caption; each
/// class row starts at a long, non-numeric element (the class label).
pub fn split_document(lines: &[String]) -> RawReportCard {
    let mut elements: Vec<String> = lines
        .iter()
        .map(|l| s!(l.trim()))
        .filter(|l| !l.is_empty())
        .collect();

    let Some(last) = elements.pop() else {
        return RawReportCard::default();
    };
    let credits = last.parse::<f64>().ok().filter(|c| c.is_finite());

    let start = elements
        .iter()
        .skip(1)
        .position(|e| e.chars().count() >= LABEL_MIN_LEN)
        .map(|p| p + 1)
        .unwrap_or(0);

    let body = elements.split_off(start);
    let terms = elements;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for e in body {
        match rows.last_mut() {
            Some(row) if !is_label(&e) => row.push(e),
            _ => rows.push(vec![e]),
        }
    }

    RawReportCard { terms, rows, credits }
}
