//! Report formatting and printing utilities.
//!
//! Summaries go to stdout; warnings about skipped input go to stderr so the
//! artifacts' paths stay pipeable.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, CompileSummary, InitSummary, OptimizeSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::ScanWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    print_warnings(&result.warnings, verbose);
    print_summary_to(&result.summary, verbose, &mut io::stdout().lock()).ok();
}

fn print_warnings(warnings: &[ScanWarning], verbose: bool) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            eprintln!(
                "{} {}: {}",
                "warning:".yellow().bold(),
                warning.path,
                warning.message
            );
        }
    } else {
        eprintln!(
            "{} {} input problem(s) skipped (run with {} for details)",
            "warning:".yellow().bold(),
            warnings.len(),
            "--verbose".cyan()
        );
    }
}

/// Print a command summary to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_summary_to<W: Write>(
    summary: &CommandSummary,
    verbose: bool,
    writer: &mut W,
) -> io::Result<()> {
    match summary {
        CommandSummary::Compile(summary) => print_compile(summary, writer),
        CommandSummary::Optimize(summary) => print_optimize(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_compile<W: Write>(summary: &CompileSummary, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} Compiled {} word(s) from {} file(s) across {} version(s).",
        SUCCESS_MARK.green(),
        summary.word_count,
        summary.files_loaded,
        summary.version_count
    )?;
    writeln!(writer, "  - json: {}", summary.json_path.display())?;
    writeln!(writer, "  - wiki: {}", summary.wiki_path.display())?;
    Ok(())
}

fn print_optimize<W: Write>(
    summary: &OptimizeSummary,
    verbose: bool,
    writer: &mut W,
) -> io::Result<()> {
    let removed_total: usize = summary.reductions.iter().map(|r| r.removals.len()).sum();
    writeln!(
        writer,
        "{} Optimized {} language list(s) from {} file(s) ({} pattern(s) removed).",
        SUCCESS_MARK.green(),
        summary.reductions.len(),
        summary.files_loaded,
        removed_total
    )?;

    for reduction in &summary.reductions {
        writeln!(
            writer,
            "  - {}: {} -> {} entries ({})",
            reduction.language.to_string().cyan(),
            reduction.before,
            reduction.after,
            reduction.path.display()
        )?;
        if verbose {
            for removal in &reduction.removals {
                writeln!(
                    writer,
                    "      removed \"{}\" (covered by \"{}\")",
                    removal.pattern, removal.covered_by
                )?;
            }
        }
    }
    Ok(())
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) -> io::Result<()> {
    if summary.created {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        )?;
    }
    Ok(())
}
