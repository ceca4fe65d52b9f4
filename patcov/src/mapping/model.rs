use rustc_hash::FxHashMap;
use serde::Deserialize;

/// One value-shaped secret pattern from the mapping document.
///
/// The `regex` source is authored against the upstream engine's dialect and
/// must pass through [`crate::dialect::adapt_pattern`] before compiling.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValuePattern {
    /// Unique rule identifier.
    pub id: String,
    /// Regex source as authored upstream.
    pub regex: String,
    /// Capture group holding the secret value; 0 means the whole match.
    #[serde(default)]
    pub secret_group: usize,
    /// Variable-name keywords associated with this pattern.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Primary keyword, when the upstream mapping designates one.
    #[serde(default)]
    pub keyword: String,
}

/// The full mapping document.
///
/// Only `value_patterns` is consumed by the coverage pipeline; the host
/// maps are carried so the fixture generator can consume them through this
/// loader.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretMapping {
    /// Document schema version.
    #[serde(default)]
    pub schema_version: u32,
    /// Timestamp the document was generated at.
    #[serde(default)]
    pub generated_at: String,
    /// Variable-name keyword → credential hosts.
    #[serde(default)]
    pub keyword_host_map: FxHashMap<String, Vec<String>>,
    /// Exact variable name → credential hosts.
    #[serde(default)]
    pub exact_name_host_map: FxHashMap<String, Vec<String>>,
    /// Value-shaped secret patterns.
    pub value_patterns: Vec<ValuePattern>,
}
