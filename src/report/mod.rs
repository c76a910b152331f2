// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console and file output for classification and evaluation results

pub mod formatter;
pub mod output;

use crate::classify::Classification;
use crate::evaluate::EvaluationReport;
use anyhow::Result;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

/// Print one classification to the console
pub fn print_classification(classification: &Classification) {
    ReportFormatter::new().print_classification(classification);
}

/// Print an evaluation summary to the console
pub fn print_evaluation(report: &EvaluationReport) {
    ReportFormatter::new().print_evaluation(report);
}

/// Save an evaluation report, format chosen by the caller
pub fn save_report<P: AsRef<Path>>(
    report: &EvaluationReport,
    format: ReportOutputFormat,
    path: P,
) -> Result<()> {
    ReportFormatter::new().save(report, format, path)
}
