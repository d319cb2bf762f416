use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::AppError;
use crate::translation::{SubstitutionTable, Vocabulary};

/// Application configuration module
/// This module handles loading, validating and resolving the settings of a
/// translation run.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Locale segment rewritten in links (e.g. "en-US")
    #[serde(default = "default_source_locale")]
    pub source_locale: String,

    /// Locale whose vocabulary is applied (e.g. "zh-CN")
    #[serde(default = "default_target_locale")]
    pub target_locale: String,

    /// Extension of documents picked up when crawling directories
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Maximum number of files processed at once
    #[serde(default = "default_concurrent_files")]
    pub concurrent_files: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Body table replacing the built-in headings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_map: Option<SubstitutionTable>,

    /// Title table replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_map: Option<SubstitutionTable>,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_locale() -> String {
    "en-US".to_string()
}

fn default_target_locale() -> String {
    "zh-CN".to_string()
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_concurrent_files() -> usize {
    8
}

impl Config {
    /// Load a configuration file, falling back to defaults when it is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file {:?}: {}", path, e)))
    }

    /// Check the configuration for values a run cannot work with
    pub fn validate(&self) -> Result<(), AppError> {
        if self.source_locale.trim().is_empty() || self.target_locale.trim().is_empty() {
            return Err(AppError::Config("Source and target locales must not be empty".to_string()));
        }

        if self.extension.trim_start_matches('.').is_empty() {
            return Err(AppError::Config("Document extension must not be empty".to_string()));
        }

        if self.concurrent_files == 0 {
            return Err(AppError::Config("concurrent_files must be at least 1".to_string()));
        }

        for (name, table) in [("content_map", &self.content_map), ("title_map", &self.title_map)] {
            if let Some(index) = table.as_ref().and_then(|t| t.find_empty_pattern()) {
                return Err(AppError::Config(format!("{} entry {} has an empty pattern", name, index)));
            }
        }

        if Vocabulary::builtin(&self.target_locale).is_none()
            && (self.content_map.is_none() || self.title_map.is_none())
        {
            return Err(AppError::Config(format!(
                "No built-in vocabulary for '{}'; provide both content_map and title_map",
                self.target_locale
            )));
        }

        Ok(())
    }

    /// Suffix matched against file names when crawling, e.g. ".md"
    pub fn extension_suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }

    /// Build the vocabulary for this run: overrides where given, built-in
    /// tables otherwise, and the locale rule at the end of the body table.
    pub fn vocabulary(&self) -> Result<Vocabulary, AppError> {
        let builtin = Vocabulary::builtin(&self.target_locale);

        let content = match (&self.content_map, &builtin) {
            (Some(table), _) => table.clone(),
            (None, Some(vocabulary)) => vocabulary.content_table().clone(),
            (None, None) => {
                return Err(AppError::Config(format!("No content map for '{}'", self.target_locale)));
            }
        };
        let title = match (&self.title_map, &builtin) {
            (Some(table), _) => table.clone(),
            (None, Some(vocabulary)) => vocabulary.title_table().clone(),
            (None, None) => {
                return Err(AppError::Config(format!("No title map for '{}'", self.target_locale)));
            }
        };

        Ok(Vocabulary::new(content, title).with_locale_rule(&self.source_locale, &self.target_locale))
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_locale: default_source_locale(),
            target_locale: default_target_locale(),
            extension: default_extension(),
            concurrent_files: default_concurrent_files(),
            log_level: LogLevel::default(),
            content_map: None,
            title_map: None,
        }
    }
}
