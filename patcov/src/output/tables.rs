use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use rustc_hash::FxHashMap;
use std::io::Write;

use crate::compiler::CompileFailure;
use crate::constants::VERBOSE_SAMPLE_LIMIT;
use crate::coverage::CoverageSummary;
use crate::mapping::ValuePattern;
use crate::scanner::ScanResult;

fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);

    if cfg!(test) {
        table.set_width(120);
    }
    table
}

/// Print the top-rules tally table. With `samples`, also print up to
/// [`VERBOSE_SAMPLE_LIMIT`] match excerpts per rule.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_top_rules(
    writer: &mut impl Write,
    summary: &CoverageSummary,
    samples: Option<&ScanResult>,
) -> std::io::Result<()> {
    if summary.top_rules.is_empty() {
        writeln!(writer, "{}", "No patterns fired.".yellow())?;
        return Ok(());
    }

    let mut table = create_table(vec!["Rule ID", "Matches", "Files"]);
    for tally in &summary.top_rules {
        table.add_row(vec![
            Cell::new(&tally.rule_id).add_attribute(Attribute::Dim),
            Cell::new(tally.matches),
            Cell::new(tally.files),
        ]);
    }
    writeln!(writer, "{table}")?;

    if let Some(result) = samples {
        for tally in &summary.top_rules {
            let Some(records) = result.hits.get(&tally.rule_id) else {
                continue;
            };
            writeln!(writer, "{}", tally.rule_id.bold())?;
            for record in records.iter().take(VERBOSE_SAMPLE_LIMIT) {
                writeln!(writer, "  {}: {}", record.file, record.excerpt.dimmed())?;
            }
        }
    }
    Ok(())
}

/// Print the sorted gap list, the primary coverage signal.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_gap_list(
    writer: &mut impl Write,
    rule_count: usize,
    gap_ids: &[String],
) -> std::io::Result<()> {
    if gap_ids.is_empty() {
        writeln!(
            writer,
            "{} all {rule_count} patterns fire at least once",
            "[OK]".green(),
        )?;
        return Ok(());
    }

    writeln!(
        writer,
        "\n{}",
        format!(
            "{} of {rule_count} patterns with zero hits across all corpora:",
            gap_ids.len(),
        )
        .red()
        .bold()
    )?;
    for id in gap_ids {
        writeln!(writer, "  {id}")?;
    }
    Ok(())
}

/// Print every loaded rule with its compile status, so rules dropped by
/// compilation stay visible to the operator.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_pattern_list(
    writer: &mut impl Write,
    patterns: &[ValuePattern],
    failures: &[CompileFailure],
) -> std::io::Result<()> {
    let failed: FxHashMap<&str, &str> = failures
        .iter()
        .map(|f| (f.rule_id.as_str(), f.error.as_str()))
        .collect();

    let mut table = create_table(vec!["Rule ID", "Keyword", "Status"]);
    for vp in patterns {
        let status = match failed.get(vp.id.as_str()) {
            Some(error) => Cell::new(format!("FAILED: {error}")).fg(Color::Red),
            None => Cell::new("ok").fg(Color::Green),
        };
        table.add_row(vec![
            Cell::new(&vp.id).add_attribute(Attribute::Dim),
            Cell::new(&vp.keyword),
            status,
        ]);
    }
    writeln!(writer, "{table}")?;
    Ok(())
}

/// Print the compile-failure table.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_compile_failures(
    writer: &mut impl Write,
    failures: &[CompileFailure],
) -> std::io::Result<()> {
    if failures.is_empty() {
        return Ok(());
    }

    writeln!(
        writer,
        "\n{}",
        "Patterns that failed to compile".red().bold().underline()
    )?;
    let mut table = create_table(vec!["Rule ID", "Error"]);
    for failure in failures {
        table.add_row(vec![
            Cell::new(&failure.rule_id).add_attribute(Attribute::Dim),
            Cell::new(&failure.error),
        ]);
    }
    writeln!(writer, "{table}")?;
    Ok(())
}
