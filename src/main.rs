// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use numverify::app_config::{self, Config};
use numverify::verifier::{
    BatchSummary, BatchVerifier, Diagnostic, DiagnosticKind, DiagnosticReport, DiagnosticScope,
    NumberVerifier, SegmentPair, SegmentReport,
};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for DiagnosticScope to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliScope {
    Token,
    Segment,
}

impl From<CliScope> for DiagnosticScope {
    fn from(scope: CliScope) -> Self {
        match scope {
            CliScope::Token => DiagnosticScope::TokenPairLevel,
            CliScope::Segment => DiagnosticScope::SegmentPairLevel,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the numbers of one source text against its translation
    Check {
        /// Source text
        #[arg(short, long)]
        source: Option<String>,

        /// Target text
        #[arg(short, long)]
        target: Option<String>,

        /// Only show findings at this scope
        #[arg(long, value_enum)]
        scope: Option<CliScope>,
    },

    /// Check a JSON file of segment pairs
    Batch {
        /// JSON array of {"id", "source", "target"} objects
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only report findings at this scope
        #[arg(long, value_enum)]
        scope: Option<CliScope>,

        /// Drop findings with this message key (e.g. Error_NumberAdded), repeatable
        #[arg(long, value_name = "MESSAGE_KEY")]
        ignore: Vec<String>,
    },

    /// Generate shell completions for numverify
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// numverify - number verification for translations
///
/// Checks that the numbers of source texts are preserved in their translations,
/// in value and in the separator conventions of each language.
#[derive(Parser, Debug)]
#[command(name = "numverify")]
#[command(version = "1.0.0")]
#[command(about = "Verify numbers between source texts and translations")]
#[command(long_about = "numverify compares the numbers of a source text and its translation.

EXAMPLES:
    numverify check -s \"2400 bis 2483,5\" -t \"2400 to 2483.5\"
    numverify batch segments.json -o report.json
    numverify --log-level debug batch segments.json --scope segment
    numverify completions bash > numverify.bash

CONFIGURATION:
    Separator settings are stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't exist, a
    default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger, filtered by the global max level
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&level));
    }

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "numverify", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli.config_path, cli.log_level.clone())?;

    if cli.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let policy = config.to_policy().context("Configuration validation failed")?;
    let verifier = NumberVerifier::new(policy);

    match cli.command {
        Commands::Check { source, target, scope } => {
            run_check(&verifier, source.as_deref(), target.as_deref(), scope)
        }
        Commands::Batch { input_path, output, scope, ignore } => {
            let ignored = parse_message_keys(&ignore)?;
            let batch = BatchVerifier::new(verifier, config.batch.max_concurrent);
            run_batch(&batch, &input_path, output.as_deref(), scope, &ignored).await
        }
        Commands::Completions { .. } => Ok(()),
    }
}

/// Load the config file, creating a default one if it does not exist
fn load_config(config_path: &str, log_level: Option<CliLogLevel>) -> Result<Config> {
    let path = Path::new(config_path);
    let mut config = if path.exists() {
        Config::from_file(path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save(path)?;
        config
    };

    if let Some(log_level) = log_level {
        config.log_level = log_level.into();
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

fn run_check(
    verifier: &NumberVerifier,
    source: Option<&str>,
    target: Option<&str>,
    scope: Option<CliScope>,
) -> Result<()> {
    let report = DiagnosticReport::from(verifier.check_source_and_target(source, target));
    if report.is_clean() {
        info!("No number issues found");
        return Ok(());
    }

    let shown: Vec<&Diagnostic> = match scope {
        Some(scope) => report.filter_scope(scope.into()),
        None => report.iter().collect(),
    };
    if shown.is_empty() {
        info!("No number issues found at the selected scope");
        return Ok(());
    }

    for diagnostic in shown {
        println!("{}", diagnostic);
    }

    Ok(())
}

fn parse_message_keys(keys: &[String]) -> Result<Vec<DiagnosticKind>> {
    keys.iter()
        .map(|key| {
            DiagnosticKind::from_message_key(key)
                .ok_or_else(|| anyhow!("Unknown message key: {}", key))
        })
        .collect()
}

async fn run_batch(
    batch: &BatchVerifier,
    input_path: &Path,
    output: Option<&Path>,
    scope: Option<CliScope>,
    ignored: &[DiagnosticKind],
) -> Result<()> {
    if !input_path.is_file() {
        return Err(anyhow!("Input path does not exist: {:?}", input_path));
    }

    let file = File::open(input_path)
        .context(format!("Failed to open input file: {}", input_path.display()))?;
    let pairs: Vec<SegmentPair> = serde_json::from_reader(BufReader::new(file))
        .context(format!("Failed to parse segment pairs: {}", input_path.display()))?;

    info!("Verifying {} segment pair(s) from {}", pairs.len(), input_path.display());

    let progress_bar = ProgressBar::new(pairs.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );

    let bar = progress_bar.clone();
    let mut reports: Vec<SegmentReport> = batch
        .verify_all_with_progress(pairs, move |done, _| bar.set_position(done as u64))
        .await;
    progress_bar.finish_and_clear();

    if let Some(scope) = scope {
        let scope: DiagnosticScope = scope.into();
        for report in reports.iter_mut() {
            report.retain_scope(scope);
        }
    }
    if !ignored.is_empty() {
        for report in reports.iter_mut() {
            report.diagnostics.remove_kinds(ignored);
        }
    }

    let summary = BatchSummary::from_reports(&reports);
    for (kind, count) in &summary.counts {
        debug!("{}: {}", kind.message_key(), count);
    }
    info!(
        "{} of {} segment pair(s) have number issues",
        summary.segments_with_findings, summary.total_segments
    );

    let json = serde_json::to_string_pretty(&reports).context("Failed to serialize report")?;
    match output {
        Some(path) => std::fs::write(path, json)
            .context(format!("Failed to write report to file: {}", path.display()))?,
        None => println!("{}", json),
    }

    Ok(())
}
