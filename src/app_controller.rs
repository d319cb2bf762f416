use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinError;

use crate::app_config::Config;
use crate::document::Document;
use crate::errors::{AppError, ProcessError};
use crate::file_utils::FileManager;
use crate::report::{BatchReport, FileOutcome, FileStatus};
use crate::translation::{self, Vocabulary};

// @module: Batch driver for document translation

/// Main application controller: discovers documents and rewrites them
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Tables shared read-only by every file task
    vocabulary: Arc<Vocabulary>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let vocabulary = Arc::new(config.vocabulary()?);

        Ok(Self { config, vocabulary })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Discover documents under `inputs` and rewrite each of them.
    ///
    /// Discovery failures abort the run. Failures of individual files are
    /// logged, recorded in the report and do not stop the batch. Returns
    /// once every write has completed.
    pub async fn run<P: AsRef<Path>>(&self, inputs: &[P]) -> Result<BatchReport, AppError> {
        let start_time = Instant::now();

        let progress = Self::spinner();
        progress.set_message("Crawling files...");

        let files = match FileManager::discover(inputs, &self.config.extension_suffix()) {
            Ok(files) => files,
            Err(e) => {
                progress.finish_and_clear();
                return Err(e.into());
            }
        };

        progress.set_length(files.len() as u64);
        progress.set_message("Translating");

        let progress_handle = progress.clone();
        let mut results: Vec<(usize, PathBuf, Result<FileStatus, ProcessError>)> =
            stream::iter(files.into_iter().enumerate())
                .map(|(index, path)| {
                    let vocabulary = Arc::clone(&self.vocabulary);
                    async move {
                        let task_path = path.clone();
                        let joined = tokio::task::spawn_blocking(move || {
                            Self::process_file(&task_path, &vocabulary)
                        })
                        .await;
                        let result = Self::settle(&path, joined);
                        (index, path, result)
                    }
                })
                .buffer_unordered(self.config.concurrent_files)
                .inspect(move |(_, _, result)| {
                    if let Err(e) = result {
                        progress_handle.suspend(|| error!("{}", e));
                    }
                    progress_handle.inc(1);
                })
                .collect()
                .await;

        progress.finish_and_clear();

        // Restore discovery order
        results.sort_by_key(|(index, _, _)| *index);
        let report = BatchReport::new(
            results
                .into_iter()
                .map(|(_, path, result)| match result {
                    Ok(status) => FileOutcome::success(path, status),
                    Err(e) => FileOutcome::failure(&e),
                })
                .collect(),
        );

        info!(
            "Batch completed in {}: {}",
            Self::format_duration(start_time.elapsed()),
            report.summary()
        );

        Ok(report)
    }

    /// Read, decode, rewrite and write back a single file.
    ///
    /// The file is only written once its new content is fully built.
    pub fn process_file(path: &Path, vocabulary: &Vocabulary) -> Result<FileStatus, ProcessError> {
        let raw = FileManager::read_to_string(path).map_err(|source| ProcessError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Document::decode(path, &raw).map_err(|source| ProcessError::Document {
            path: path.to_path_buf(),
            source,
        })?;

        let rewritten = translation::translate_document(&document, vocabulary).map_err(|source| {
            ProcessError::Document {
                path: path.to_path_buf(),
                source,
            }
        })?;

        FileManager::write_atomic(path, &rewritten).map_err(|source| ProcessError::WriteFailure {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Rewrote {:?}", path);

        if rewritten == raw {
            Ok(FileStatus::Unchanged)
        } else {
            Ok(FileStatus::Translated)
        }
    }

    // @returns: Outcome of a file task, a worker that died counts as aborted
    fn settle(
        path: &Path,
        joined: Result<Result<FileStatus, ProcessError>, JoinError>,
    ) -> Result<FileStatus, ProcessError> {
        joined.unwrap_or_else(|e| {
            Err(ProcessError::Aborted {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })
    }

    fn spinner() -> ProgressBar {
        let progress = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        progress.set_style(style);
        progress.enable_steady_tick(Duration::from_millis(100));
        progress
    }

    /// Format a duration as "1m 05s" or "3.2s"
    fn format_duration(duration: Duration) -> String {
        let secs = duration.as_secs();
        if secs >= 60 {
            format!("{}m {:02}s", secs / 60, secs % 60)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        }
    }
}
