/*!
 * Batch verification of many segment pairs.
 *
 * Each segment pair is checked on the blocking pool, with at most
 * `max_concurrent` checks in flight. Reports come back in input order.
 */

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use futures::stream::{self, StreamExt};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use super::checker::NumberVerifier;
use super::diagnostics::{DiagnosticKind, DiagnosticReport, DiagnosticScope};

/// A source text and its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPair {
    /// Caller-defined identifier, echoed in the report
    pub id: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

impl SegmentPair {
    pub fn new(id: impl Into<String>, source: Option<&str>, target: Option<&str>) -> Self {
        Self {
            id: id.into(),
            source: source.map(str::to_string),
            target: target.map(str::to_string),
        }
    }
}

/// Findings for one segment pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentReport {
    pub id: String,
    pub diagnostics: DiagnosticReport,
    /// Set when the check could not run to completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SegmentReport {
    /// Keep only findings at one scope
    pub fn retain_scope(&mut self, scope: DiagnosticScope) {
        self.diagnostics.retain_scope(scope);
    }
}

/// Totals over a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total_segments: usize,
    pub segments_with_findings: usize,
    pub failed_segments: usize,
    pub counts: BTreeMap<DiagnosticKind, usize>,
}

impl BatchSummary {
    pub fn from_reports(reports: &[SegmentReport]) -> Self {
        let mut summary = BatchSummary {
            total_segments: reports.len(),
            ..Default::default()
        };

        for report in reports {
            if report.error.is_some() {
                summary.failed_segments += 1;
            }
            if !report.diagnostics.is_clean() {
                summary.segments_with_findings += 1;
            }
            for diagnostic in &report.diagnostics {
                *summary.counts.entry(diagnostic.kind).or_insert(0) += 1;
            }
        }

        summary
    }
}

/// Runs a [`NumberVerifier`] over many segment pairs concurrently
pub struct BatchVerifier {
    verifier: Arc<NumberVerifier>,
    max_concurrent: usize,
}

impl BatchVerifier {
    pub fn new(verifier: NumberVerifier, max_concurrent: usize) -> Self {
        Self {
            verifier: Arc::new(verifier),
            max_concurrent: max_concurrent.max(1),
        }
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Verify all pairs, returning reports in input order
    pub async fn verify_all(&self, pairs: Vec<SegmentPair>) -> Vec<SegmentReport> {
        self.verify_all_with_progress(pairs, |_, _| {}).await
    }

    /// Verify all pairs, calling `progress_callback(done, total)` as each finishes
    pub async fn verify_all_with_progress(
        &self,
        pairs: Vec<SegmentPair>,
        progress_callback: impl Fn(usize, usize) + Clone + Send + 'static,
    ) -> Vec<SegmentReport> {
        let total = pairs.len();
        let processed = Arc::new(AtomicUsize::new(0));
        let start_time = Instant::now();

        let mut results = stream::iter(pairs.into_iter().enumerate())
            .map(|(index, pair)| {
                let verifier = self.verifier.clone();
                let processed = processed.clone();
                let progress_callback = progress_callback.clone();

                async move {
                    let id = pair.id.clone();
                    let outcome = tokio::task::spawn_blocking(move || {
                        verifier.check_source_and_target(pair.source.as_deref(), pair.target.as_deref())
                    })
                    .await;

                    let report = match outcome {
                        Ok(diagnostics) => SegmentReport {
                            id,
                            diagnostics: diagnostics.into(),
                            error: None,
                        },
                        Err(e) => {
                            error!("Segment {} could not be verified: {}", id, e);
                            SegmentReport {
                                id,
                                diagnostics: DiagnosticReport::default(),
                                error: Some(e.to_string()),
                            }
                        }
                    };

                    let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
                    progress_callback(current, total);

                    (index, report)
                }
            })
            .buffer_unordered(self.max_concurrent)
            .collect::<Vec<_>>()
            .await;

        results.sort_by_key(|(index, _)| *index);
        let reports: Vec<SegmentReport> = results.into_iter().map(|(_, report)| report).collect();

        let summary = BatchSummary::from_reports(&reports);
        info!(
            "Verified {} segment pair(s) in {:?}: {} with findings",
            summary.total_segments,
            start_time.elapsed(),
            summary.segments_with_findings
        );
        debug!("Finding counts: {:?}", summary.counts);

        reports
    }
}
