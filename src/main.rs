// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use autotranslate::app_config::{Config, LogLevel};
use autotranslate::{Controller, ReportFormat};

/// CLI Wrapper for ReportFormat to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliReportFormat {
    Md,
    Csv,
    Json,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(cli_format: CliReportFormat) -> Self {
        match cli_format {
            CliReportFormat::Md => ReportFormat::Md,
            CliReportFormat::Csv => ReportFormat::Csv,
            CliReportFormat::Json => ReportFormat::Json,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for autotranslate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// autotranslate - rewrite headings, titles and locale links of markdown
/// documents using a fixed vocabulary.
#[derive(Parser, Debug)]
#[command(name = "autotranslate")]
#[command(version)]
#[command(about = "Vocabulary-based localization of markdown documents")]
#[command(long_about = "autotranslate rewrites the section headings, titles and locale links of
markdown documents with YAML front matter, in place.

EXAMPLES:
    autotranslate                              # Process ./files/
    autotranslate files/zh-cn/web/api          # Process a directory tree
    autotranslate a.md b.md -f json            # Process two files, JSON report
    autotranslate -j 16 --log-level debug dir/ # More parallelism, verbose logs
    autotranslate completions bash             # Generate bash completions

CONFIGURATION:
    Settings are read from autotranslate.json when present. Built-in defaults
    are used otherwise.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The files to process (relative to the current working directory)
    #[arg(value_name = "FILES", default_value = "./files/")]
    files: Vec<PathBuf>,

    /// The format to print results in
    #[arg(short, long, value_enum, default_value = "md")]
    format: CliReportFormat,

    /// Configuration file path
    #[arg(short, long = "config", value_name = "PATH", default_value = "autotranslate.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Number of files processed at once
    #[arg(short, long)]
    jobs: Option<usize>,
}

// @struct: Stderr logger colored by level, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and marker for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "✖"),
            Level::Warn => ("1;33", "!"),
            Level::Info => ("1;32", " "),
            Level::Debug => ("1;36", "·"),
            Level::Trace => ("1;35", "…"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now = chrono::Local::now().format("%H:%M:%S.%3f");
        let (color, marker) = Self::style_for_level(record.level());
        let _ = writeln!(
            std::io::stderr(),
            "\x1B[{}m{} {} {}\x1B[0m",
            color,
            now,
            marker,
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "autotranslate", &mut std::io::stdout());
        return Ok(());
    }

    run_translate(cli).await
}

async fn run_translate(options: CommandLineOptions) -> Result<()> {
    let mut config = Config::load_or_default(&options.config_path)
        .with_context(|| format!("Failed to load config file: {:?}", options.config_path))?;

    // Override config with CLI options if provided
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }
    if let Some(jobs) = options.jobs {
        config.concurrent_files = jobs;
    }

    log::set_max_level(config.log_level.into());

    let controller = Controller::with_config(config).context("Configuration validation failed")?;

    let report = controller
        .run(options.files.as_slice())
        .await
        .context("Failed to collect input files")?;

    let rendered = report
        .render(options.format.into())
        .context("Failed to render report")?;
    print!("{}", rendered);

    Ok(())
}
