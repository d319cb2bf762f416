/*!
 * Tests for batch report rendering
 */

use std::path::PathBuf;
use autotranslate::errors::{DocumentError, ProcessError};
use autotranslate::report::{BatchReport, FileOutcome, FileStatus, ReportFormat};

fn sample_report() -> BatchReport {
    let failure = ProcessError::Document {
        path: PathBuf::from("files/b.md"),
        source: DocumentError::MalformedFrontMatter { reason: "closing '---' marker not found".to_string() },
    };

    BatchReport::new(vec![
        FileOutcome::success(PathBuf::from("files/a.md"), FileStatus::Translated),
        FileOutcome::failure(&failure),
        FileOutcome::success(PathBuf::from("files/c.md"), FileStatus::Unchanged),
    ])
}

#[test]
fn test_counts_shouldReflectStatuses() {
    let report = sample_report();
    assert_eq!(report.count(FileStatus::Translated), 1);
    assert_eq!(report.count(FileStatus::Unchanged), 1);
    assert_eq!(report.count(FileStatus::Failed), 1);
    assert_eq!(report.failures().count(), 1);
    assert_eq!(report.summary(), "3 file(s): 1 translated, 1 unchanged, 1 failed");
}

#[test]
fn test_render_markdown_shouldProduceTableAndSummary() {
    let rendered = sample_report().render(ReportFormat::Md).unwrap();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "| File | Status | Detail |");
    assert_eq!(lines[2], "| files/a.md | translated |  |");
    assert!(lines[3].starts_with("| files/b.md | failed | files/b.md: Malformed front matter"));
    assert_eq!(lines.last().copied(), Some("3 file(s): 1 translated, 1 unchanged, 1 failed"));
}

#[test]
fn test_render_csv_shouldQuoteFieldsWithCommas() {
    let report = BatchReport::new(vec![FileOutcome {
        path: PathBuf::from("files/a,b.md"),
        status: FileStatus::Failed,
        detail: Some("bad \"quote\"".to_string()),
    }]);

    let rendered = report.render(ReportFormat::Csv).unwrap();

    assert_eq!(rendered, "path,status,detail\n\"files/a,b.md\",failed,\"bad \"\"quote\"\"\"\n");
}

#[test]
fn test_render_json_shouldIncludeFilesAndTotals() {
    let rendered = sample_report().render(ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["translated"], 1);
    assert_eq!(value["failed"], 1);
    assert_eq!(value["files"][0]["path"], "files/a.md");
    assert_eq!(value["files"][0]["status"], "translated");
    assert!(value["files"][0].get("detail").is_none());
    assert_eq!(value["files"][1]["status"], "failed");
}
