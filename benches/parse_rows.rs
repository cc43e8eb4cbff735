//! Parsing benchmarks for the worksheet pipeline
//!
//! Run with: cargo bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use csv::StringRecord;
use flagella_loader::app::services::worksheet_parser::WorksheetParser;
use flagella_loader::app::services::worksheet_parser::row_parser::parse_side;

/// One row carrying a left and a right side at the given timepoint
fn paired_row(time: f64) -> String {
    let side = |bump: f64| -> String {
        (1..=10)
            .map(|r| format!("{:.2}", r as f64 + time / 100.0 + bump))
            .collect::<Vec<_>>()
            .join(",")
    };
    format!("{time},{},,,{time},{}", side(0.0), side(0.5))
}

/// One row carrying a left side only
fn control_row(time: f64) -> String {
    let cells = (1..=10)
        .map(|r| format!("{:.2}", r as f64 + time / 100.0))
        .collect::<Vec<_>>()
        .join(",");
    format!("{time},{cells}")
}

/// Build a complete two-week worksheet in memory
fn sample_worksheet() -> String {
    let mut lines = vec!["Week One Flagella,,".to_string()];
    push_section(&mut lines);
    lines.push("WEEK TWO FLAGELLA,,".to_string());
    push_section(&mut lines);
    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>) {
    for _ in 0..2 {
        for i in 0..9 {
            lines.push(paired_row((i * 10) as f64));
        }
        lines.push(",,,".to_string());
    }
    lines.push(control_row(0.0));
    lines.push(control_row(90.0));
}

fn bench_parse_side(c: &mut Criterion) {
    let row = paired_row(30.0);
    let record = StringRecord::from(row.split(',').collect::<Vec<_>>());

    c.bench_function("parse_side_left", |b| {
        b.iter(|| parse_side(black_box(&record), black_box(0)))
    });

    c.bench_function("parse_side_right", |b| {
        b.iter(|| parse_side(black_box(&record), black_box(13)))
    });
}

fn bench_parse_worksheet(c: &mut Criterion) {
    let parser = WorksheetParser::new();
    let content = sample_worksheet();

    c.bench_function("parse_full_worksheet", |b| {
        b.iter(|| parser.parse_content(black_box(&content)))
    });
}

criterion_group!(benches, bench_parse_side, bench_parse_worksheet);
criterion_main!(benches);
