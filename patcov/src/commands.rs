//! Command implementations: scan, gaps, patterns.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::cli::CorpusArgs;
use crate::compiler::{compile_patterns, CompileFailure, CompiledPattern};
use crate::config::Config;
use crate::constants::DEFAULT_TOP_RULES;
use crate::coverage::{self, CoverageSummary};
use crate::mapping::{load_mapping, SecretMapping};
use crate::output;
use crate::scanner::{scan_directory, ScanResult};
use crate::utils::{normalize_display_path, parse_exclude_folders};

/// Serializable per-corpus entry of the scan report.
#[derive(Serialize)]
struct CorpusReport {
    corpus: String,
    summary: CoverageSummary,
}

/// Serializable payload for `scan --json`.
#[derive(Serialize)]
struct ScanReport {
    rule_count: usize,
    compile_failures: Vec<CompileFailure>,
    corpora: Vec<CorpusReport>,
}

/// Serializable payload for `gaps --json`.
#[derive(Serialize)]
struct GapReport {
    rule_count: usize,
    firing_count: usize,
    gaps: Vec<String>,
    compile_failures: Vec<CompileFailure>,
}

/// Serializable per-rule entry for `patterns --json`.
#[derive(Serialize)]
struct PatternStatus {
    id: String,
    keyword: String,
    compiled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn resolve_mapping_path(cli_mapping: Option<&Path>, config: &Config) -> Result<PathBuf> {
    cli_mapping
        .map(Path::to_path_buf)
        .or_else(|| config.patcov.mapping.clone())
        .context("no mapping document given (use --mapping or set `mapping` in .patcov.toml)")
}

fn load_and_compile(
    mapping_path: &Path,
) -> Result<(SecretMapping, Vec<CompiledPattern>, Vec<CompileFailure>)> {
    let mapping = load_mapping(mapping_path)
        .with_context(|| format!("failed to load mapping {}", mapping_path.display()))?;
    let (compiled, failures) = compile_patterns(&mapping.value_patterns);
    Ok((mapping, compiled, failures))
}

fn merged_exclude_folders(corpus: &CorpusArgs, config: &Config) -> FxHashSet<String> {
    let mut user_excludes = corpus.exclude_folders.clone();
    if let Some(extra) = &config.patcov.exclude_folders {
        user_excludes.extend(extra.iter().cloned());
    }
    parse_exclude_folders(&user_excludes)
}

/// Executes the scan command over every corpus root.
///
/// # Errors
///
/// Returns an error when the mapping document cannot be loaded or report
/// serialization fails. Per-rule compile failures and per-file read
/// failures degrade gracefully and show up in the report instead.
pub fn run_scan<W: Write>(
    corpus: &CorpusArgs,
    top: Option<usize>,
    verbose: bool,
    config: &Config,
    writer: &mut W,
) -> Result<i32> {
    let mapping_path = resolve_mapping_path(corpus.mapping.as_deref(), config)?;
    let (mapping, compiled, failures) = load_and_compile(&mapping_path)?;

    let exclude_folders = merged_exclude_folders(corpus, config);
    let top = top.or(config.patcov.top).unwrap_or(DEFAULT_TOP_RULES);
    let rule_count = mapping.value_patterns.len();

    if corpus.json {
        let mut corpora = Vec::new();
        for root in &corpus.roots {
            let result = scan_directory(root, &compiled, &exclude_folders);
            corpora.push(CorpusReport {
                corpus: normalize_display_path(root),
                summary: coverage::summarize(rule_count, &result, top),
            });
        }
        let report = ScanReport {
            rule_count,
            compile_failures: failures,
            corpora,
        };
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
        return Ok(0);
    }

    output::print_header(writer)?;
    output::print_load_banner(writer, rule_count, &failures)?;
    output::print_compile_failures(writer, &failures)?;

    for root in &corpus.roots {
        let label = normalize_display_path(root);
        let spinner = output::create_scan_spinner(&label);
        let result = scan_directory(root, &compiled, &exclude_folders);
        spinner.finish_and_clear();

        let summary = coverage::summarize(rule_count, &result, top);
        output::print_corpus_summary(writer, &label, &summary)?;
        output::print_top_rules(writer, &summary, verbose.then_some(&result))?;
    }

    Ok(0)
}

/// Executes the gaps command: scans every corpus root and lists rules with
/// zero matches across the union of results.
///
/// # Errors
///
/// Returns an error when the mapping document cannot be loaded or report
/// serialization fails.
pub fn run_gaps<W: Write>(
    corpus: &CorpusArgs,
    fail_threshold: Option<usize>,
    config: &Config,
    writer: &mut W,
) -> Result<i32> {
    let mapping_path = resolve_mapping_path(corpus.mapping.as_deref(), config)?;
    let (mapping, compiled, failures) = load_and_compile(&mapping_path)?;
    let exclude_folders = merged_exclude_folders(corpus, config);

    let results: Vec<ScanResult> = corpus
        .roots
        .iter()
        .map(|root| {
            let spinner = output::create_scan_spinner(&normalize_display_path(root));
            let result = scan_directory(root, &compiled, &exclude_folders);
            spinner.finish_and_clear();
            result
        })
        .collect();

    let rule_count = mapping.value_patterns.len();
    let gap_ids = coverage::gaps(&mapping.value_patterns, &results);

    if corpus.json {
        let report = GapReport {
            rule_count,
            firing_count: rule_count - gap_ids.len(),
            gaps: gap_ids.clone(),
            compile_failures: failures,
        };
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
    } else {
        output::print_gap_list(writer, rule_count, &gap_ids)?;
        output::print_compile_failures(writer, &failures)?;
    }

    if let Some(threshold) = fail_threshold.or(config.patcov.fail_threshold) {
        if gap_ids.len() > threshold {
            if !corpus.json {
                eprintln!(
                    "\n[GATE] Coverage gaps: {} exceed threshold {threshold} - FAILED",
                    gap_ids.len()
                );
            }
            return Ok(1);
        }
    }
    Ok(0)
}

/// Executes the patterns command: lists every loaded rule with its compile
/// status.
///
/// # Errors
///
/// Returns an error when the mapping document cannot be loaded or report
/// serialization fails.
pub fn run_patterns<W: Write>(
    mapping_path: Option<&Path>,
    json: bool,
    config: &Config,
    writer: &mut W,
) -> Result<i32> {
    let mapping_path = resolve_mapping_path(mapping_path, config)?;
    let (mapping, _compiled, failures) = load_and_compile(&mapping_path)?;

    if json {
        let failed: rustc_hash::FxHashMap<&str, &str> = failures
            .iter()
            .map(|f| (f.rule_id.as_str(), f.error.as_str()))
            .collect();
        let listing: Vec<PatternStatus> = mapping
            .value_patterns
            .iter()
            .map(|vp| PatternStatus {
                id: vp.id.clone(),
                keyword: vp.keyword.clone(),
                compiled: !failed.contains_key(vp.id.as_str()),
                error: failed.get(vp.id.as_str()).map(|e| (*e).to_owned()),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *writer, &listing)?;
        writeln!(writer)?;
    } else {
        output::print_pattern_list(writer, &mapping.value_patterns, &failures)?;
    }

    Ok(0)
}
