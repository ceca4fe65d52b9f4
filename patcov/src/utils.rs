//! Small path and set helpers shared across commands.

use rustc_hash::FxHashSet;

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use patcov::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\corpus\\leak.env")), "corpus/leak.env");
/// assert_eq!(normalize_display_path(Path::new("./corpus/leak.env")), "corpus/leak.env");
/// ```
#[must_use]
pub fn normalize_display_path(path: &std::path::Path) -> String {
    let s = path.to_string_lossy();
    let normalized = s.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Merges the default exclusion set with user-supplied folder names.
///
/// The result is passed explicitly to the scanner; exclusion is never
/// module-level mutable state.
#[must_use]
pub fn parse_exclude_folders(user_exclude_folders: &[String]) -> FxHashSet<String> {
    let mut exclude_folders = FxHashSet::default();

    for folder in crate::constants::DEFAULT_EXCLUDE_FOLDERS() {
        exclude_folders.insert((*folder).to_owned());
    }

    for folder in user_exclude_folders {
        exclude_folders.insert(folder.clone());
    }

    exclude_folders
}
