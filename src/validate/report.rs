//! Human and machine readable validation reports.

use anyhow::Result;
use serde::Serialize;

use super::ValidationResult;

const GREEN: &str = "\x1b[92m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// True when every result passed (vacuously true for no results)
pub fn all_passed(results: &[ValidationResult]) -> bool {
    results.iter().all(|r| r.is_valid)
}

/// Plain-text report with a per-file breakdown and a closing summary
pub fn render_text(results: &[ValidationResult], color: bool) -> String {
    let total = results.len();
    let valid = results.iter().filter(|r| r.is_valid).count();
    let rule = "=".repeat(70);

    let mut lines = vec![
        String::new(),
        rule.clone(),
        format!("VALIDATION RESULTS: {}/{} files passed", valid, total),
        rule,
        String::new(),
    ];

    for result in results {
        let (status, paint) = if result.is_valid {
            ("✓ PASS", GREEN)
        } else {
            ("✗ FAIL", RED)
        };

        if color {
            lines.push(format!("{}{}{} {}", paint, status, RESET, result.filepath));
        } else {
            lines.push(format!("{} {}", status, result.filepath));
        }

        if !result.errors.is_empty() {
            lines.push(format!("  Errors ({}):", result.errors.len()));
            lines.extend(result.errors.iter().map(|e| format!("    ✗ {}", e)));
        }

        if !result.warnings.is_empty() {
            lines.push(format!("  Warnings ({}):", result.warnings.len()));
            lines.extend(result.warnings.iter().map(|w| format!("    ⚠ {}", w)));
        }

        lines.push(String::new());
    }

    if valid == total {
        lines.push("🎉 All prompts are valid!".to_string());
    } else {
        lines.push(format!("❌ {} prompt(s) need attention.", total - valid));
    }
    lines.push(String::new());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total: usize,
    passed: usize,
    failed: usize,
    results: &'a [ValidationResult],
}

/// Pretty-printed JSON report
pub fn render_json(results: &[ValidationResult]) -> Result<String> {
    let passed = results.iter().filter(|r| r.is_valid).count();
    let report = JsonReport {
        total: results.len(),
        passed,
        failed: results.len() - passed,
        results,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
