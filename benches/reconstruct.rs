// benches/reconstruct.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use sky_scrape::{
    reconstruct::{reconstruct_grades, sort_row},
    scrape,
    tokens::{ClassHeader, GradeTuple},
};

/// Synthetic stream: `classes` full-year classes, 17 grade cells each.
fn grade_stream(classes: usize) -> (Vec<ClassHeader>, Vec<GradeTuple>) {
    let codes = ["P1", "P2", "Q1", "P3", "P4", "Q2", "", "S1", "P5", "P6", "Q3", "P7", "P8", "Q4", "", "S2", "FIN"];
    let headers = (0..classes)
        .map(|i| ClassHeader {
            name: format!("CLASS {i}"),
            period: (i % 8 + 1) as u8,
            time_range: "8:00 AM - 8:50 AM".into(),
            teacher: "TEACHER".into(),
        })
        .collect();
    let mut tuples = Vec::with_capacity(classes * codes.len());
    for i in 0..classes {
        for (j, code) in codes.iter().enumerate() {
            let grade = format!("{}", 70 + (i + j) % 30);
            tuples.push(if code.is_empty() {
                GradeTuple::Placeholder { grade }
            } else {
                GradeTuple::Graded { gid: format!("{}", 1000 + i), code: code.to_string(), grade }
            });
        }
    }
    (headers, tuples)
}

fn report_card_text(classes: usize) -> String {
    let mut lines = vec!["Course".to_string()];
    lines.extend(["P1", "P2", "Q1", "P3", "P4", "Q2", "EX1", "S1"].map(String::from));
    for i in 0..classes {
        lines.push(format!("CLASS NUMBER {i}"));
        // Alternate full-width, mid-year and short rows.
        let n = [18, 11, 7][i % 3];
        lines.extend((0..n).map(|k| format!("{}", 80 + k)));
    }
    lines.push("6.5".into());
    lines.push("Comments:".into());
    lines.join("\n")
}

fn bench_reconstruct(c: &mut Criterion) {
    let (headers, tuples) = grade_stream(12);
    c.bench_function("grades_12_classes", |b| {
        b.iter(|| {
            let (classes, _) = reconstruct_grades(black_box(&headers), black_box(&tuples));
            black_box(classes.len())
        })
    });

    let row: Vec<String> = std::iter::once("ENGLISH II".to_string())
        .chain((1..8).map(|i| i.to_string()))
        .collect();
    c.bench_function("sort_row_len_8", |b| {
        b.iter(|| black_box(sort_row(black_box("2023 Q1 Report Card"), black_box(&row))))
    });

    let text = report_card_text(40);
    c.bench_function("report_card_40_rows", |b| {
        b.iter(|| {
            let card = scrape::collect_report_card(black_box("2023 Q2 Report Card"), black_box(&text));
            black_box(card.classes.len())
        })
    });
}

criterion_group!(benches, bench_reconstruct);
criterion_main!(benches);
