// src/reconstruct/report_card.rs
//
// A report-card row only lists the cells that have something in them, so a
// class taken for one semester, or a card printed mid-year, comes out short.
// Row length (label included) tells us which columns are missing: the
// attendance/credit cells at the end get peeled off into their fixed slots,
// the grades that remain fill left to right.

use std::collections::HashMap;

use crate::anomaly::Anomaly;
use crate::config::consts::{ROW_WIDTH, SPRING_MARKERS, SPRING_OFFSET};
use crate::core::value::parse_report_value;
use crate::model::{ReportCardClass, ReportCardInfo, SortedRow};
use crate::tokens::{QueueCall, RawReportCard};

// Row lengths where the card layout changes.
pub const EARLY_MAX: usize = 8;      // through Q1
pub const FALL_ONLY_LEN: usize = 11; // fall-semester class, no spring attendance
pub const MID_MAX: usize = 13;       // through Q2
pub const Q3_MAX: usize = 14;        // through Q3

/// Where a row's values go: trailing values peeled into fixed slots (last
/// value first), then the rest filled from slot `1 + offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub peel: &'static [usize],
    /// Drop the first value after the label before filling.
    pub skip_first: bool,
    pub offset: usize,
}

impl Layout {
    const POSITIONAL: Layout = Layout { peel: &[], skip_first: false, offset: 0 };
}

pub struct Bracket {
    pub name: &'static str,
    pub applies: fn(&str, usize) -> bool,
    pub layout: fn(usize) -> Layout,
}

fn is_spring(name: &str) -> bool {
    SPRING_MARKERS.iter().any(|m| name.contains(m))
}

/// Evaluated in order; the first bracket whose predicate holds wins.
pub static BRACKETS: [Bracket; 5] = [
    Bracket {
        name: "spring",
        applies: |name, len| len <= MID_MAX && is_spring(name),
        layout: |len| {
            if len <= EARLY_MAX {
                Layout { peel: &[17, 16, 15], skip_first: true, offset: SPRING_OFFSET }
            } else {
                Layout { peel: &[], skip_first: false, offset: SPRING_OFFSET }
            }
        },
    },
    Bracket {
        name: "early",
        applies: |_, len| len <= EARLY_MAX,
        layout: |len| {
            if len == EARLY_MAX {
                Layout { peel: &[17, 16, 15, 8, 7], ..Layout::POSITIONAL }
            } else {
                Layout { peel: &[17, 8, 7], ..Layout::POSITIONAL }
            }
        },
    },
    Bracket {
        name: "mid",
        applies: |_, len| len <= MID_MAX,
        layout: |len| {
            if len == FALL_ONLY_LEN {
                Layout { peel: &[18, 17], ..Layout::POSITIONAL }
            } else {
                Layout { peel: &[17, 16, 15], ..Layout::POSITIONAL }
            }
        },
    },
    Bracket {
        name: "q3",
        applies: |_, len| len <= Q3_MAX,
        layout: |_| Layout { peel: &[17, 16, 15], ..Layout::POSITIONAL },
    },
    Bracket {
        name: "full",
        applies: |_, len| len == ROW_WIDTH,
        layout: |_| Layout::POSITIONAL,
    },
];

pub fn bracket_for(report_name: &str, len: usize) -> Option<&'static Bracket> {
    BRACKETS.iter().find(|b| (b.applies)(report_name, len))
}

/// Place `row` into the fixed 19-slot layout. Returns the anomaly when the
/// length matched no bracket or values fell past the last slot.
pub fn sort_row_checked(report_name: &str, row: &[String]) -> (SortedRow, Option<Anomaly>) {
    let mut out = SortedRow::blank();
    let Some(label) = row.first() else {
        return (out, None);
    };
    out.0[0] = Some(label.clone());

    let len = row.len();
    let bracket = bracket_for(report_name, len);
    let layout = bracket.map(|b| (b.layout)(len)).unwrap_or(Layout::POSITIONAL);

    // Peel from the end, never past the label.
    let mut end = len;
    for &slot in layout.peel {
        if end <= 1 {
            break;
        }
        end -= 1;
        out.0[slot] = Some(row[end].clone());
    }

    let start = (if layout.skip_first { 2 } else { 1 }).min(end);
    let mut dropped = 0usize;
    for (k, value) in row[start..end].iter().enumerate() {
        let slot = 1 + layout.offset + k;
        match out.0.get_mut(slot) {
            Some(cell) => *cell = Some(value.clone()),
            None => dropped += 1,
        }
    }

    let anomaly = (bracket.is_none() || dropped > 0).then(|| Anomaly::UnmatchedRowLength {
        class: label.clone(),
        len,
        dropped,
    });
    (out, anomaly)
}

pub fn sort_row(report_name: &str, row: &[String]) -> SortedRow {
    let (sorted, anomaly) = sort_row_checked(report_name, row);
    if let Some(a) = anomaly {
        a.log();
    }
    sorted
}

fn typed(sorted: &SortedRow) -> ReportCardClass {
    ReportCardClass {
        class: sorted.label().map(String::from).unwrap_or_default(),
        slots: sorted.as_slice()[1..]
            .iter()
            .map(|cell| cell.as_deref().map(parse_report_value))
            .collect(),
    }
}

/// Sort and type every row of a split report card.
pub fn build_report_card(report_name: &str, raw: &RawReportCard) -> (Vec<ReportCardClass>, Vec<Anomaly>) {
    let mut anomalies = Vec::new();
    let classes = raw
        .rows
        .iter()
        .map(|row| {
            let (sorted, anomaly) = sort_row_checked(report_name, row);
            anomalies.extend(anomaly);
            typed(&sorted)
        })
        .collect();
    (classes, anomalies)
}

/// Pair listing names with their queue calls by link id. Calls whose id names
/// no link are skipped; a name seen twice keeps its latest call.
pub fn join_report_card_names(names_by_id: &HashMap<String, String>, calls: &[QueueCall]) -> Vec<ReportCardInfo> {
    let mut out: Vec<ReportCardInfo> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for call in calls {
        let Some(name) = names_by_id.get(&call.ref_id) else {
            logd!("Report cards: queue call for unknown id {}", call.ref_id);
            continue;
        };
        let info = ReportCardInfo {
            name: name.clone(),
            queue_desc: call.desc.clone(),
            queue_prog: call.prog.clone(),
            queue_params: call.params.clone(),
        };
        match seen.get(name) {
            Some(&i) => out[i] = info,
            None => {
                seen.insert(name.clone(), out.len());
                out.push(info);
            }
        }
    }
    out
}
