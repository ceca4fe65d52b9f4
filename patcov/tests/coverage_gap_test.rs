//! Coverage aggregation and gap-set scenarios.

use patcov::compiler::compile_patterns;
use patcov::coverage::{gaps, summarize};
use patcov::mapping::ValuePattern;
use patcov::scanner::scan_directory;
use patcov::utils::parse_exclude_folders;
use rustc_hash::FxHashSet;
use std::fs;
use tempfile::TempDir;

fn pattern(id: &str, regex: &str) -> ValuePattern {
    ValuePattern {
        id: id.to_owned(),
        regex: regex.to_owned(),
        secret_group: 0,
        keywords: Vec::new(),
        keyword: String::new(),
    }
}

#[test]
fn three_rule_scenario_covers_all() {
    let dir = TempDir::new().expect("create temp corpus");
    fs::write(dir.path().join("sample.txt"), "foo123 bar BAZ").expect("write fixture");

    let rules = vec![
        pattern("A", r"foo\d+"),
        pattern("B", "bar"),
        pattern("C", "baz(?i)"),
    ];
    let (compiled, failures) = compile_patterns(&rules);
    assert!(failures.is_empty());

    let result = scan_directory(dir.path(), &compiled, &parse_exclude_folders(&[]));

    assert_eq!(result.files_scanned, 1);
    assert_eq!(result.hits["A"][0].excerpt, "foo123");
    assert_eq!(result.hits["B"][0].excerpt, "bar");
    assert_eq!(result.hits["C"][0].excerpt, "BAZ");
    assert!(gaps(&rules, std::slice::from_ref(&result)).is_empty());
}

#[test]
fn compile_failure_is_isolated_from_the_rest() {
    let rules = vec![pattern("broken", "(unbalanced"), pattern("fine", r"fine\d+")];
    let (compiled, failures) = compile_patterns(&rules);

    assert_eq!(compiled.len(), 1);
    assert_eq!(compiled[0].pattern.id, "fine");
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].rule_id, "broken");

    // The surviving rule still scans normally.
    let dir = TempDir::new().expect("create temp corpus");
    fs::write(dir.path().join("f.txt"), "fine42").expect("write fixture");
    let result = scan_directory(dir.path(), &compiled, &parse_exclude_folders(&[]));
    assert_eq!(result.hits["fine"].len(), 1);
}

#[test]
fn gap_set_is_a_true_set_difference() {
    let dir = TempDir::new().expect("create temp corpus");
    fs::write(dir.path().join("data.txt"), "alpha beta").expect("write fixture");

    let rules = vec![
        pattern("x-alpha", "alpha"),
        pattern("y-beta", "beta"),
        pattern("z-gamma", "gamma"),
    ];
    let (compiled, _) = compile_patterns(&rules);
    let results = [scan_directory(dir.path(), &compiled, &parse_exclude_folders(&[]))];

    let gap_ids = gaps(&rules, &results);
    assert_eq!(gap_ids, ["z-gamma"]);

    // Gaps ∪ firing == all rule ids, and the two sets are disjoint.
    let firing = results[0].firing_ids();
    let all: FxHashSet<&str> = rules.iter().map(|r| r.id.as_str()).collect();
    let mut union = firing.clone();
    for id in &gap_ids {
        assert!(!firing.contains(id.as_str()));
        union.insert(id.as_str());
    }
    assert_eq!(union, all);
}

#[test]
fn rule_firing_only_in_second_corpus_leaves_the_gap_list() {
    let corpus1 = TempDir::new().expect("create temp corpus");
    let corpus2 = TempDir::new().expect("create temp corpus");
    fs::write(corpus1.path().join("a.txt"), "alpha").expect("write fixture");
    fs::write(corpus2.path().join("b.txt"), "omega").expect("write fixture");

    let rules = vec![pattern("alpha", "alpha"), pattern("omega", "omega")];
    let (compiled, _) = compile_patterns(&rules);
    let excludes = parse_exclude_folders(&[]);
    let result1 = scan_directory(corpus1.path(), &compiled, &excludes);
    let result2 = scan_directory(corpus2.path(), &compiled, &excludes);

    let gaps_one = gaps(&rules, std::slice::from_ref(&result1));
    assert_eq!(gaps_one, ["omega"]);

    let gaps_both = gaps(&rules, &[result1, result2]);
    assert!(gaps_both.is_empty());
}

#[test]
fn summary_orders_by_matches_then_id() {
    let dir = TempDir::new().expect("create temp corpus");
    fs::write(dir.path().join("data.txt"), "bb bb aa cc").expect("write fixture");

    // "aa-rule" and "cc-rule" each match once; the tie breaks by id.
    let rules = vec![
        pattern("cc-rule", "cc"),
        pattern("aa-rule", "aa"),
        pattern("bb-rule", "bb"),
    ];
    let (compiled, _) = compile_patterns(&rules);
    let result = scan_directory(dir.path(), &compiled, &parse_exclude_folders(&[]));

    let summary = summarize(rules.len(), &result, 20);
    assert_eq!(summary.rule_count, 3);
    assert_eq!(summary.firing_count, 3);
    assert_eq!(summary.total_matches, 4);
    assert_eq!(summary.files_scanned, 1);

    let order: Vec<&str> = summary
        .top_rules
        .iter()
        .map(|t| t.rule_id.as_str())
        .collect();
    assert_eq!(order, ["bb-rule", "aa-rule", "cc-rule"]);
    assert_eq!(summary.top_rules[0].matches, 2);
    assert_eq!(summary.top_rules[0].files, 1);
}

#[test]
fn summary_truncates_to_top_n() {
    let dir = TempDir::new().expect("create temp corpus");
    fs::write(dir.path().join("data.txt"), "aa bb cc").expect("write fixture");

    let rules = vec![pattern("a", "aa"), pattern("b", "bb"), pattern("c", "cc")];
    let (compiled, _) = compile_patterns(&rules);
    let result = scan_directory(dir.path(), &compiled, &parse_exclude_folders(&[]));

    let summary = summarize(rules.len(), &result, 1);
    assert_eq!(summary.firing_count, 3);
    assert_eq!(summary.top_rules.len(), 1);
    // Tie on one match each: lexicographically smallest id wins the slot.
    assert_eq!(summary.top_rules[0].rule_id, "a");
}

#[test]
fn distinct_file_counts_are_tracked_per_rule() {
    let dir = TempDir::new().expect("create temp corpus");
    fs::write(dir.path().join("one.txt"), "dup dup").expect("write fixture");
    fs::write(dir.path().join("two.txt"), "dup").expect("write fixture");

    let rules = vec![pattern("dup", "dup")];
    let (compiled, _) = compile_patterns(&rules);
    let result = scan_directory(dir.path(), &compiled, &parse_exclude_folders(&[]));

    let summary = summarize(rules.len(), &result, 20);
    assert_eq!(summary.top_rules[0].matches, 3);
    assert_eq!(summary.top_rules[0].files, 2);
}
