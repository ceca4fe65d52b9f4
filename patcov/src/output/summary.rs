use colored::Colorize;
use std::io::Write;

use crate::compiler::CompileFailure;
use crate::coverage::CoverageSummary;

/// Print the main header with box-drawing characters.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        "╔════════════════════════════════════════╗".cyan()
    )?;
    writeln!(
        writer,
        "{}",
        "║  Value-Pattern Coverage Report         ║".cyan().bold()
    )?;
    writeln!(
        writer,
        "{}",
        "╚════════════════════════════════════════╝".cyan()
    )?;
    writeln!(writer)?;
    Ok(())
}

/// Print the pattern-load banner with a colored failure "pill".
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_load_banner(
    writer: &mut impl Write,
    rule_count: usize,
    failures: &[CompileFailure],
) -> std::io::Result<()> {
    fn pill(label: &str, count: usize) -> String {
        if count == 0 {
            format!("{}: {}", label, count.to_string().green())
        } else {
            format!("{}: {}", label, count.to_string().red().bold())
        }
    }

    writeln!(
        writer,
        "Patterns loaded: {}  {}",
        rule_count.to_string().cyan().bold(),
        pill("Compile failures", failures.len()),
    )?;
    Ok(())
}

/// Print one corpus summary line. Counts stay uncolored so the line is
/// grep-friendly in CI logs.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_corpus_summary(
    writer: &mut impl Write,
    corpus: &str,
    summary: &CoverageSummary,
) -> std::io::Result<()> {
    writeln!(writer, "\n{} {}", "##".dimmed(), corpus.bold().underline())?;
    writeln!(
        writer,
        "{} files, {}/{} patterns fire, {} total matches",
        summary.files_scanned, summary.firing_count, summary.rule_count, summary.total_matches,
    )?;
    Ok(())
}
