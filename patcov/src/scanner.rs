//! Corpus scanner: walks a directory tree and applies the matcher set.

use std::path::Path;

use ignore::WalkBuilder;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::compiler::CompiledPattern;
use crate::constants::EXCERPT_MAX_CHARS;
use crate::utils::normalize_display_path;

/// One match occurrence of one rule in one file.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    /// Id of the rule that fired.
    pub rule_id: String,
    /// File path relative to the scan root.
    pub file: String,
    /// Matched secret value (or whole match), truncated.
    pub excerpt: String,
}

/// All matches collected from one corpus root. Immutable once produced.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Rule id → match records, left-to-right within each file.
    pub hits: FxHashMap<String, Vec<MatchRecord>>,
    /// Files whose content was actually read and matched.
    pub files_scanned: usize,
}

impl ScanResult {
    /// Ids of rules with at least one match.
    #[must_use]
    pub fn firing_ids(&self) -> FxHashSet<&str> {
        self.hits
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Total match count across all rules.
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.hits.values().map(Vec::len).sum()
    }
}

/// Scans all files under `root` with the compiled matcher set.
///
/// Directories whose name appears in `exclude_folders` are pruned from the
/// walk. Unreadable or non-UTF-8 files are skipped silently and do not
/// count toward `files_scanned`. Read-only: nothing on disk is touched.
#[must_use]
pub fn scan_directory(
    root: &Path,
    patterns: &[CompiledPattern],
    exclude_folders: &FxHashSet<String>,
) -> ScanResult {
    let mut result = ScanResult::default();

    // Corpora often carry .gitignore files harvested from the projects they
    // came from; honoring them would silently shrink the corpus. Standard
    // filters stay off and exclusion is by directory name only.
    let excluded = exclude_folders.clone();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_dir()) {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !excluded.contains(name))
        })
        .build();

    for entry in walker.flatten() {
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let Ok(content) = std::fs::read_to_string(entry.path()) else {
            continue;
        };
        result.files_scanned += 1;

        let rel = entry.path().strip_prefix(root).unwrap_or_else(|_| entry.path());
        let file = normalize_display_path(rel);

        for compiled in patterns {
            for caps in compiled.regex.captures_iter(&content) {
                let Some(whole) = caps.get(0) else { continue };
                let group = compiled.pattern.secret_group;
                let matched = if group > 0 {
                    caps.get(group).map_or(whole.as_str(), |g| g.as_str())
                } else {
                    whole.as_str()
                };
                result
                    .hits
                    .entry(compiled.pattern.id.clone())
                    .or_default()
                    .push(MatchRecord {
                        rule_id: compiled.pattern.id.clone(),
                        file: file.clone(),
                        excerpt: truncate_excerpt(matched),
                    });
            }
        }
    }

    result
}

/// Bounds an excerpt to [`EXCERPT_MAX_CHARS`], respecting char boundaries.
fn truncate_excerpt(matched: &str) -> String {
    matched.chars().take(EXCERPT_MAX_CHARS).collect()
}
