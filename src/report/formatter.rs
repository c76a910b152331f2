// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use crate::classify::Classification;
use crate::evaluate::EvaluationReport;
use crate::report::output::ReportOutputFormat;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_classification(&self, classification: &Classification) {
        println!("{}", "edit distance results for each language profile:".bold());
        for score in &classification.scores {
            let line = format!("{} --> {}", score.language, score.distance);
            if score.language == classification.language {
                println!("  {}", line.green());
            } else {
                println!("  {}", line);
            }
        }
        println!();
        println!(
            "sentence classified as {}",
            classification.language.to_string().bold().cyan()
        );
    }

    pub fn print_evaluation(&self, report: &EvaluationReport) {
        println!("\n{}", "=== LANGUAGE IDENTIFICATION EVALUATION ===".bold().cyan());
        println!("  Expected language: {}", report.language);
        println!();

        for result in &report.results {
            let predicted = result
                .predicted
                .map(|lang| lang.to_string())
                .unwrap_or_else(|| "-".to_string());
            let status = if result.correct {
                "OK".green()
            } else {
                "MISS".red()
            };
            println!(
                "  {:<6} {:<30} {}",
                status,
                result.file.display(),
                predicted
            );
        }
        println!();

        let percent = report.percent();
        let accuracy_color = if percent >= 80.0 {
            "green"
        } else if percent >= 50.0 {
            "yellow"
        } else {
            "red"
        };
        println!(
            "{}/{} classifications were correct --> {}",
            report.correct,
            report.total,
            format!("{:.1}%", percent).color(accuracy_color).bold()
        );
    }

    pub fn save<P: AsRef<Path>>(
        &self,
        report: &EvaluationReport,
        format: ReportOutputFormat,
        path: P,
    ) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = format.serialize(report)?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        println!("Report saved to: {}", path.display());
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
