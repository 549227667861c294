use super::*;
use crate::catalog::DOMAIN_COUNT;
use crate::model::rating::{Rating, RatingSheet};
use crate::pipeline::stage2_score::score_sheet;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("gnh_report_test_{}_{}", std::process::id(), id));
    dir
}

fn build_result() -> ScoreResult {
    let mut values = [Rating::new(2).unwrap(); DOMAIN_COUNT];
    values[2] = Rating::new(5).unwrap();
    score_sheet(&RatingSheet::from_array(values))
}

#[test]
fn test_write_reports_creates_all_files() {
    let dir = make_temp_dir().join("nested");
    let written = write_reports(&build_result(), &dir).unwrap();
    assert_eq!(written.len(), 3);
    for name in [REPORT_FILE, SUMMARY_FILE, RATINGS_FILE] {
        assert!(dir.join(name).is_file(), "{name}");
    }

    let report = std::fs::read_to_string(dir.join(REPORT_FILE)).unwrap();
    assert!(report.contains("46.7%"));
    assert!(report.contains("Band: risk"));

    let summary = std::fs::read_to_string(dir.join(SUMMARY_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&summary).unwrap();
    assert_eq!(value["total"], 21);
    assert_eq!(value["category"], "risk");
}

#[test]
fn test_ratings_tsv_layout() {
    let dir = make_temp_dir();
    write_reports(&build_result(), &dir).unwrap();
    let tsv = std::fs::read_to_string(dir.join(RATINGS_FILE)).unwrap();
    let lines = tsv.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 1 + DOMAIN_COUNT);
    assert_eq!(lines[0], "domain\tname\trating");
    assert_eq!(lines[3], "education\tEducation\t5");
    assert_eq!(lines[9], "good_governance\tGood governance\t2");
}

#[test]
fn test_render_result_formats() {
    let result = build_result();
    let text = render_result(&result, OutputFormat::Text).unwrap();
    assert!(text.starts_with("Gross National Happiness Index"));
    let json = render_result(&result, OutputFormat::Json).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
}
