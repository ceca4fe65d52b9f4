//! Pure aggregation over scan results: summaries and the gap set.
//!
//! Everything here is order-independent over match counts, so a future
//! parallel scanner can feed it unchanged.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::mapping::ValuePattern;
use crate::scanner::ScanResult;

/// Per-rule tally within a summary.
#[derive(Debug, Clone, Serialize)]
pub struct RuleTally {
    /// Rule id.
    pub rule_id: String,
    /// Match occurrences across the corpus.
    pub matches: usize,
    /// Distinct files the rule fired in.
    pub files: usize,
}

/// Read-only coverage view over one scan result.
#[derive(Debug, Serialize)]
pub struct CoverageSummary {
    /// Rules in the loaded set.
    pub rule_count: usize,
    /// Rules with at least one match.
    pub firing_count: usize,
    /// Match occurrences across all rules.
    pub total_matches: usize,
    /// Files read during the scan.
    pub files_scanned: usize,
    /// Top rules by match volume (ties broken by id).
    pub top_rules: Vec<RuleTally>,
}

/// Summarizes one scan result against a rule set of `rule_count` rules.
///
/// `top` bounds the tally list; ordering is match count descending with
/// ties broken by rule id ascending so output is deterministic.
#[must_use]
pub fn summarize(rule_count: usize, result: &ScanResult, top: usize) -> CoverageSummary {
    let mut tallies: Vec<RuleTally> = result
        .hits
        .iter()
        .filter(|(_, records)| !records.is_empty())
        .map(|(rule_id, records)| {
            let files: FxHashSet<&str> = records.iter().map(|r| r.file.as_str()).collect();
            RuleTally {
                rule_id: rule_id.clone(),
                matches: records.len(),
                files: files.len(),
            }
        })
        .collect();

    tallies.sort_by(|a, b| {
        b.matches
            .cmp(&a.matches)
            .then_with(|| a.rule_id.cmp(&b.rule_id))
    });

    let firing_count = tallies.len();
    tallies.truncate(top);

    CoverageSummary {
        rule_count,
        firing_count,
        total_matches: result.total_matches(),
        files_scanned: result.files_scanned,
        top_rules: tallies,
    }
}

/// Rules with zero matches across the union of all supplied results.
///
/// This is the primary coverage signal: a non-empty gap list means the
/// corpora do not exercise those rules. Sorted lexicographically.
#[must_use]
pub fn gaps(patterns: &[ValuePattern], results: &[ScanResult]) -> Vec<String> {
    let firing: FxHashSet<&str> = results.iter().flat_map(ScanResult::firing_ids).collect();

    let mut missing: Vec<String> = patterns
        .iter()
        .filter(|vp| !firing.contains(vp.id.as_str()))
        .map(|vp| vp.id.clone())
        .collect();
    missing.sort();
    missing
}
