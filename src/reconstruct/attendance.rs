// src/reconstruct/attendance.rs
//
// Two passes over the same page. Rows give the events; an event showing
// "View Classes" has its class list elsewhere, in a block tagged with the
// event's id. The passes meet on that id.

use std::collections::HashMap;

use crate::anomaly::Anomaly;
use crate::config::consts::VIEW_CLASSES;
use crate::core::value::parse_date;
use crate::model::{AbsentEvent, PortalDate};
use crate::specs::attendance::{block_class_names, class_blocks, event_rows};
use crate::tokens::{ClassBlock, EventRow};

/// Events in row order, each paired with the id it waits on (if any).
fn pass_events(rows: &[EventRow], anomalies: &mut Vec<Anomaly>) -> Vec<(Option<String>, AbsentEvent)> {
    rows.iter()
        .map(|r| {
            let date = parse_date(&r.date);
            if let PortalDate::Raw(raw) = &date {
                anomalies.push(Anomaly::UnparsedDate { raw: raw.clone() });
            }
            let (waiting, classes) = if r.inline == VIEW_CLASSES {
                (Some(r.id.clone()), Vec::new())
            } else {
                (None, vec![r.inline.clone()])
            };
            let event = AbsentEvent {
                date,
                reason: r.reason.clone(),
                periods: r.periods.clone(),
                classes,
            };
            (waiting, event)
        })
        .collect()
}

/// Block id → class names in block order. A repeated id extends the list.
fn pass_blocks(blocks: &[ClassBlock]) -> HashMap<String, Vec<String>> {
    let mut by_id: HashMap<String, Vec<String>> = HashMap::new();
    for b in blocks {
        by_id.entry(b.id.clone()).or_default().extend(block_class_names(b));
    }
    by_id
}

/// Join already-extracted rows and blocks.
pub fn join_events(rows: &[EventRow], blocks: &[ClassBlock]) -> (Vec<AbsentEvent>, Vec<Anomaly>) {
    let mut anomalies = Vec::new();
    let events = pass_events(rows, &mut anomalies);
    let mut names = pass_blocks(blocks);

    let out: Vec<AbsentEvent> = events
        .into_iter()
        .map(|(waiting, mut event)| {
            if let Some(id) = waiting {
                match names.remove(&id) {
                    Some(classes) => event.classes = classes,
                    None => logd!("Attendance: no class block for event {}", id),
                }
            }
            event
        })
        .collect();

    for id in names.keys() {
        logd!("Attendance: class block {} has no event", id);
    }
    (out, anomalies)
}

pub fn reconstruct_attendance(event_text: &str, block_text: &str) -> (Vec<AbsentEvent>, Vec<Anomaly>) {
    let rows = event_rows(event_text);
    let blocks = class_blocks(block_text);
    let (events, anomalies) = join_events(&rows, &blocks);
    logd!("Attendance: {} events, {} class blocks", events.len(), blocks.len());
    (events, anomalies)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, inline: &str) -> EventRow {
        EventRow {
            date: s!("Mon Sep 11, 2023"),
            reason: s!("Excused"),
            periods: s!("1 2"),
            id: s!(id),
            inline: s!(inline),
        }
    }

    fn block(id: &str, names: &[&str]) -> ClassBlock {
        let body: String = names
            .iter()
            .map(|n| format!(r#"<a id=\u0027x\u0027 name=\u0027x\u0027 href=\u0022javascript:void(0)\u0022 >{n}</a><br />"#))
            .collect();
        ClassBlock { id: s!(id), body }
    }

    #[test]
    fn waiting_events_take_block_names_in_order() {
        let rows = vec![row("e1", VIEW_CLASSES), row("e2", "CHEMISTRY")];
        let blocks = vec![block("e1", &["ENGLISH II", "GEOMETRY"]), block("e2", &["SHOULD NOT APPEAR"])];
        let (events, anomalies) = join_events(&rows, &blocks);
        assert!(anomalies.is_empty());
        assert_eq!(events[0].classes, vec![s!("ENGLISH II"), s!("GEOMETRY")]);
        assert_eq!(events[1].classes, vec![s!("CHEMISTRY")]);
    }

    #[test]
    fn missing_block_leaves_empty_list() {
        let (events, _) = join_events(&[row("e1", VIEW_CLASSES)], &[block("zz", &["ART"])]);
        assert_eq!(events.len(), 1);
        assert!(events[0].classes.is_empty());
    }

    #[test]
    fn bad_date_is_kept_and_reported() {
        let mut r = row("e1", "ART");
        r.date = s!("sometime");
        let (events, anomalies) = join_events(&[r], &[]);
        assert_eq!(events[0].date, PortalDate::Raw(s!("sometime")));
        assert_eq!(anomalies, vec![Anomaly::UnparsedDate { raw: s!("sometime") }]);
    }
}
