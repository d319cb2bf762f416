/*!
 * Batch report rendering.
 *
 * The report lists every processed file with its outcome and can be
 * rendered as a markdown table, CSV or JSON.
 */

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::ProcessError;

/// Output format of the batch report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Md,
    Csv,
    Json,
}

/// Outcome of one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Rewritten with different content
    Translated,
    /// Rewritten, content identical to the original
    Unchanged,
    /// Left untouched because processing failed
    Failed,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Translated => "translated",
            Self::Unchanged => "unchanged",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
    /// Error description for failed files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl FileOutcome {
    pub fn success(path: PathBuf, status: FileStatus) -> Self {
        Self { path, status, detail: None }
    }

    pub fn failure(error: &ProcessError) -> Self {
        Self {
            path: error.path().to_path_buf(),
            status: FileStatus::Failed,
            detail: Some(error.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status == FileStatus::Failed
    }
}

/// Outcomes of a whole batch, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub files: Vec<FileOutcome>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileOutcome],
    translated: usize,
    unchanged: usize,
    failed: usize,
}

impl BatchReport {
    pub fn new(files: Vec<FileOutcome>) -> Self {
        Self { files }
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| f.is_failure())
    }

    /// One-line summary used in logs and the markdown report
    pub fn summary(&self) -> String {
        format!(
            "{} file(s): {} translated, {} unchanged, {} failed",
            self.files.len(),
            self.count(FileStatus::Translated),
            self.count(FileStatus::Unchanged),
            self.count(FileStatus::Failed)
        )
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Md => Ok(self.render_markdown()),
            ReportFormat::Csv => Ok(self.render_csv()),
            ReportFormat::Json => serde_json::to_string_pretty(&JsonReport {
                files: &self.files,
                translated: self.count(FileStatus::Translated),
                unchanged: self.count(FileStatus::Unchanged),
                failed: self.count(FileStatus::Failed),
            }),
        }
    }

    fn render_markdown(&self) -> String {
        let mut out = String::from("| File | Status | Detail |\n| --- | --- | --- |\n");
        for file in &self.files {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                markdown_cell(&file.path.to_string_lossy()),
                file.status.as_str(),
                markdown_cell(file.detail.as_deref().unwrap_or(""))
            ));
        }
        out.push('\n');
        out.push_str(&self.summary());
        out.push('\n');
        out
    }

    fn render_csv(&self) -> String {
        let mut out = String::from("path,status,detail\n");
        for file in &self.files {
            out.push_str(&format!(
                "{},{},{}\n",
                csv_field(&file.path.to_string_lossy()),
                file.status.as_str(),
                csv_field(file.detail.as_deref().unwrap_or(""))
            ));
        }
        out
    }
}

fn markdown_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
