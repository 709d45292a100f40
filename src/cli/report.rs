//! Human-readable command output.

use std::io::{self, Write};

use colored::Colorize;

use crate::plugin::EmitSummary;
use crate::translations::LoadWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

pub fn print_warnings(warnings: &[LoadWarning]) {
    print_warnings_to(warnings, &mut io::stderr().lock());
}

pub fn print_warnings_to<W: Write>(warnings: &[LoadWarning], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning.message);
    }
}

pub fn print_emit_summary(summary: &EmitSummary, dry_run: bool, verbose: bool) {
    print_emit_summary_to(summary, dry_run, verbose, &mut io::stdout().lock());
}

pub fn print_emit_summary_to<W: Write>(
    summary: &EmitSummary,
    dry_run: bool,
    verbose: bool,
    writer: &mut W,
) {
    if summary.script_assets.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.yellow(),
            "No script assets found - nothing to translate".yellow()
        );
        return;
    }

    if verbose || dry_run {
        for name in &summary.emitted {
            let _ = writeln!(writer, "  {}", name.cyan());
        }
    }

    let languages = if summary.languages.is_empty() {
        "source file only".to_string()
    } else {
        summary.languages.join(", ")
    };
    let verb = if dry_run { "Would write" } else { "Wrote" };
    let scripts = summary.script_assets.len();
    let emitted = summary.emitted.len();

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} {} {} for {} script {} ({})",
            verb,
            emitted,
            plural(emitted, "asset", "assets"),
            scripts,
            plural(scripts, "asset", "assets"),
            languages
        )
        .green()
    );
}

pub fn print_codes(codes: &[String]) {
    print_codes_to(codes, &mut io::stdout().lock());
}

pub fn print_codes_to<W: Write>(codes: &[String], writer: &mut W) {
    for code in codes {
        let _ = writeln!(writer, "{}", code);
    }
}
