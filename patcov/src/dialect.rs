//! Regex dialect normalization.
//!
//! Value patterns are authored against the upstream engine's dialect; this
//! module rewrites each source string into an equivalent one for the local
//! `regex` crate. The rewrites form a fixed, enumerable table applied in
//! order — no validation happens here, so a source that is still broken
//! surfaces at compile time instead.

/// POSIX bracket-class spellings used by upstream patterns, with their
/// explicit equivalents. Textual substitution over the literal token, not
/// a general POSIX-class parser.
const POSIX_CLASS_REPLACEMENTS: &[(&str, &str)] = &[
    ("[[:alnum:]]", "[A-Za-z0-9]"),
    ("[[:alpha:]]", "[A-Za-z]"),
    ("[[:digit:]]", "[0-9]"),
    ("[[:xdigit:]]", "[A-Fa-f0-9]"),
    ("[[:lower:]]", "[a-z]"),
    ("[[:upper:]]", "[A-Z]"),
    ("[[:space:]]", "[\\t\\r\\n\\f\\v ]"),
];

/// Inline case-insensitivity token. Some engines require inline flags to
/// lead the expression, so the token is relocated rather than dropped.
const CASE_FLAG_TOKEN: &str = "(?i)";

/// Rewrites an upstream regex source into the executing dialect.
///
/// Applied in order: end-of-text anchor (`\z` → `$`), POSIX bracket
/// classes, inline case-flag relocation to the front. Later rewrites rely
/// on earlier ones having normalized the text. Idempotent: adapting an
/// already-adapted source is a no-op.
#[must_use]
pub fn adapt_pattern(source: &str) -> String {
    let mut pattern = source.replace("\\z", "$");

    for (posix, class) in POSIX_CLASS_REPLACEMENTS {
        pattern = pattern.replace(posix, class);
    }

    if pattern.contains(CASE_FLAG_TOKEN) {
        pattern = pattern.replace(CASE_FLAG_TOKEN, "");
        pattern.insert_str(0, CASE_FLAG_TOKEN);
    }

    pattern
}
