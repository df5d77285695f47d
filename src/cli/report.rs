//! Terminal output for command results.
//!
//! Separate from the markdown report so textusage can be used as a library.
//! Progress and results go to stdout; warnings go to stderr.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{AnalyzeSummary, CommandResult, CommandSummary, InitSummary};
use crate::{config::locale_display_name, core::file_scanner::ScanWarning};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    match &result.summary {
        CommandSummary::Analyze(summary) => {
            print_scan_warnings_to(&summary.warnings, verbose, &mut stderr);
            if verbose {
                print_dynamic_note_to(summary.dynamic_call_count, &mut stderr);
            }
            print_analyze_to(summary, &mut stdout);
            if result.exit_on_missing && result.missing_count > 0 {
                print_strict_failure_to(result.missing_count, &mut stdout);
            }
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut stdout),
    }
}

/// Print a progress line to stdout.
pub fn print_progress(message: &str) {
    println!("{}", message.dimmed());
}

/// Print unreadable source files.
///
/// Verbose mode lists every file; otherwise a single count line is printed.
pub fn print_scan_warnings_to<W: Write>(warnings: &[ScanWarning], verbose: bool, writer: &mut W) {
    if warnings.is_empty() {
        return;
    }
    if verbose {
        for warning in warnings {
            let _ = writeln!(
                writer,
                "{} Cannot read {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

fn print_dynamic_note_to<W: Write>(count: usize, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} call(s) build their key at runtime and were not counted",
            "note:".bold(),
            count
        );
    }
}

fn print_analyze_to<W: Write>(summary: &AnalyzeSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "\n{} ({} keys used across {} {})",
        "Results".bold(),
        summary.used_key_count,
        summary.files_scanned,
        if summary.files_scanned == 1 {
            "file"
        } else {
            "files"
        }
    );

    for (locale, data) in &summary.analysis {
        let _ = writeln!(
            writer,
            "\n{} ({}):",
            locale_display_name(&summary.locale_names, locale).bold(),
            locale
        );
        let _ = writeln!(writer, "  - defined: {}", data.total_defined);
        let _ = writeln!(writer, "  - used: {}", data.total_used);
        let _ = writeln!(writer, "  - usage: {:.1}%", data.usage_percentage);
        let _ = writeln!(writer, "  - unused: {}", data.unused_count());
        if data.missing_count() > 0 {
            let _ = writeln!(
                writer,
                "  - {} {}",
                "missing:".red(),
                data.missing_count()
            );
        }
    }

    let _ = writeln!(
        writer,
        "\n{} {}",
        SUCCESS_MARK.green(),
        format!("Report written to {}", summary.report_path.display()).green()
    );
}

fn print_strict_failure_to<W: Write>(missing_count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} missing {} in the reference locale",
        FAILURE_MARK.red(),
        missing_count,
        if missing_count == 1 { "key" } else { "keys" }
    );
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
