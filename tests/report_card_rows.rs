// tests/report_card_rows.rs
use sky_scrape::anomaly::Anomaly;
use sky_scrape::config::consts::ROW_WIDTH;
use sky_scrape::model::ReportValue;
use sky_scrape::reconstruct::report_card::{sort_row, sort_row_checked};
use sky_scrape::scrape::{collect_report_card, collect_report_card_names};

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Text as the PDF reader hands it over: one item per line.
fn q1_card() -> String {
    [
        "ANYTOWN HIGH SCHOOL",
        "Course",
        "P1", "P2", "Q1", "P3", "P4", "Q2", "EX1", "S1", "P5", "P6", "Q3", "P7", "P8", "Q4", "EX2", "S2", "ABS", "TAR",
        // full-year class, Q1 printed: label + 7
        "ENGLISH II", "96", "95", "94", "S", "2", "1", "0.5",
        // short row: label + 5
        "AP BIOLOGY", "0", "88", "E", "3", "0.5",
        "",
        "1.0",
        "Comments:",
        "Keep it up",
    ]
    .join("\n")
}

#[test]
fn q1_card_rows_land_in_fixed_slots() {
    let card = collect_report_card("2023-2024 Q1 Report Card", &q1_card());
    assert_eq!(card.terms.len(), ROW_WIDTH - 1);
    assert_eq!(card.terms[0], "P1");
    assert_eq!(card.credits, Some(1.0));
    assert_eq!(card.classes.len(), 2);
    assert!(card.anomalies.is_empty());

    let english = card.class("ENGLISH II").unwrap();
    assert_eq!(english.slots.len(), ROW_WIDTH - 1);
    // slots[i] is row slot i + 1
    assert_eq!(english.slots[0], Some(ReportValue::Grade(96.0)));
    assert_eq!(english.slots[1], Some(ReportValue::Grade(95.0)));
    assert_eq!(english.slots[6], Some(ReportValue::Grade(94.0)));
    assert_eq!(english.slots[7], Some(ReportValue::Mark("S".into())));
    assert_eq!(english.slots[14], Some(ReportValue::Grade(2.0)));
    assert_eq!(english.slots[15], Some(ReportValue::Grade(1.0)));
    assert_eq!(english.slots[16], Some(ReportValue::Grade(0.5)));
    for i in (8..=13).chain([17]) {
        assert_eq!(english.slots[i], None, "slot {}", i + 1);
    }

    let bio = card.class("AP BIOLOGY").unwrap();
    assert_eq!(bio.slots[0], Some(ReportValue::Grade(0.0)));
    assert_eq!(bio.slots[16], Some(ReportValue::Grade(0.5)));
}

#[test]
fn terms_pair_slots_with_header() {
    let card = collect_report_card("2023-2024 Q1 Report Card", &q1_card());
    let english = card.class("ENGLISH II").unwrap();
    let pairs: Vec<(&str, Option<f64>)> = english
        .terms(&card.terms)
        .map(|(t, v)| (t, v.and_then(|v| v.grade())))
        .take(3)
        .collect();
    assert_eq!(pairs, vec![("P1", Some(96.0)), ("P2", Some(95.0)), ("Q1", None)]);
}

#[test]
fn every_length_has_nineteen_slots() {
    for name in ["Q1 Report Card", "Q3 Report Card"] {
        for len in 3..=19 {
            let mut row = vec![String::from("CLASS NAME")];
            row.extend((1..len).map(|i| i.to_string()));
            assert_eq!(sort_row(name, &row).len(), ROW_WIDTH);
            assert_eq!(sort_row(name, &row).label(), Some("CLASS NAME"));
        }
    }
}

#[test]
fn full_spring_row_is_identity() {
    let mut row = vec![String::from("CHEMISTRY")];
    row.extend((1..19).map(|i| format!("{}", 70 + i)));
    let sorted = sort_row("2023-2024 Q4 Report Card", &row);
    let back: Vec<String> = sorted.as_slice().iter().map(|c| c.clone().unwrap()).collect();
    assert_eq!(back, row);
}

#[test]
fn q1_row_of_eight() {
    let row = cells(&["ALGEBRA II", "a", "b", "c", "d", "e", "f", "last"]);
    let sorted = sort_row("2023-2024 Q1 Report Card", &row);
    assert_eq!(sorted.get(0), Some("ALGEBRA II"));
    assert_eq!(sorted.get(17), Some("last"));
    for slot in (9..=14).chain([18]) {
        assert_eq!(sorted.get(slot), None);
    }
}

#[test]
fn uncovered_length_is_flagged_not_fatal() {
    let mut row = vec![String::from("SPANISH III")];
    row.extend((1..17).map(|i| i.to_string()));
    let (sorted, anomaly) = sort_row_checked("2024 Q3 Report Card", &row);
    assert_eq!(sorted.get(16), Some("16"));
    assert_eq!(anomaly, Some(Anomaly::UnmatchedRowLength { class: "SPANISH III".into(), len: 17, dropped: 0 }));
}

#[test]
fn listing_names_join_queue_calls() {
    let html = concat!(
        r#"<li><a id='rcA' name='rcA' href="javascript:void(0)" >2023-2024 Q1 Report Card</a></li>"#,
        r#"<li><a id='rcB' name='rcB' href="javascript:void(0)" >2023-2024 Q2 Report Card</a></li>"#,
        r#"<script>"#,
        r#"$('#x').click(function(){Queue","2023-2024+Q2+Report+Card", "sfrptcrd001", "a,b,c")},'#rcB');"#,
        r#"$('#y').click(function(){Queue","2023-2024+Q1+Report+Card", "sfrptcrd001", "d,e,f")},'#rcA');"#,
        r#"$('#z').click(function(){Queue","Other", "p", "q")},'#nope');"#,
        r#"</script>"#,
    );
    let infos = collect_report_card_names(html);
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].name, "2023-2024 Q2 Report Card");
    assert_eq!(infos[0].queue_prog, "sfrptcrd001");
    assert_eq!(infos[1].queue_params, "d,e,f");
}
