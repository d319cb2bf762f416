/*!
 * # autotranslate - vocabulary-based localization of markdown documents
 *
 * Rewrites section headings, titles and locale links of markdown documents
 * with YAML front matter, using fixed ordered substitution tables.
 *
 * ## Features
 *
 * - Recursive discovery of documents under files and directories
 * - Front matter decoding and fixed-layout re-encoding
 * - Ordered literal substitution for bodies and titles
 * - Concurrent batch processing with per-file failure isolation
 * - Atomic in-place writes
 * - Markdown, CSV and JSON batch reports
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `file_utils`: Discovery and file system operations
 * - `document`: Front matter decoding and encoding
 * - `translation`: Substitution tables and vocabularies
 * - `app_controller`: Batch driver
 * - `report`: Batch report rendering
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod report;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use document::{Document, Header};
pub use errors::{AppError, DiscoveryError, DocumentError, ProcessError};
pub use report::{BatchReport, FileOutcome, FileStatus, ReportFormat};
pub use translation::{SubstitutionTable, Vocabulary};
