/*!
 * Common test utilities for the numverify test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

use numverify::verifier::{Diagnostic, DiagnosticKind, DiagnosticReport, DiagnosticScope};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Kinds of a diagnostic list, in order
pub fn kinds(diagnostics: &[Diagnostic]) -> Vec<DiagnosticKind> {
    DiagnosticReport::new(diagnostics.to_vec()).kinds()
}

/// Kinds at one scope, in order
pub fn kinds_at(report: &DiagnosticReport, scope: DiagnosticScope) -> Vec<DiagnosticKind> {
    report.filter_scope(scope).iter().map(|d| d.kind).collect()
}

/// Routes `log` output through the test harness; safe to call from every test
pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}
