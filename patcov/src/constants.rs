//! Shared constants and default sets.

use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Maximum excerpt length recorded per match, in characters.
pub const EXCERPT_MAX_CHARS: usize = 80;
/// Number of top rules shown in a scan summary.
pub const DEFAULT_TOP_RULES: usize = 20;
/// Sample excerpts shown per rule in verbose mode.
pub const VERBOSE_SAMPLE_LIMIT: usize = 3;
/// Default configuration filename.
pub const CONFIG_FILENAME: &str = ".patcov.toml";

/// Returns default folders excluded from corpus walks: version-control
/// metadata, dependency caches, and bytecode caches.
pub fn get_default_exclude_folders() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut set = FxHashSet::default();
        for folder in [
            ".git",
            ".hg",
            ".svn",
            "node_modules",
            "bower_components",
            "vendor",
            "venv",
            ".venv",
            "site-packages",
            "target",
            "__pycache__",
            ".pytest_cache",
            ".mypy_cache",
            ".ruff_cache",
            ".tox",
        ] {
            set.insert(folder);
        }
        set
    })
}

pub use get_default_exclude_folders as DEFAULT_EXCLUDE_FOLDERS;
