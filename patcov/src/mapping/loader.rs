use rustc_hash::FxHashSet;
use std::path::Path;

use super::model::SecretMapping;

/// Mapping load error. Every variant is fatal: no partial rule set is
/// ever returned.
#[derive(Debug)]
pub enum MappingError {
    /// The document could not be read.
    Io(std::io::Error),
    /// The document is not valid JSON or violates the schema.
    Malformed(String),
    /// Two entries share the same rule id.
    DuplicateRuleId(String),
}

impl std::fmt::Display for MappingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read mapping: {e}"),
            Self::Malformed(msg) => write!(f, "malformed mapping: {msg}"),
            Self::DuplicateRuleId(id) => write!(f, "duplicate rule id in mapping: {id}"),
        }
    }
}

impl std::error::Error for MappingError {}

impl From<std::io::Error> for MappingError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Loads and validates the mapping document at `path`.
///
/// Entries must supply `id` and `regex`; `secret_group`, `keywords` and
/// `keyword` default when absent. Rule ids must be unique — duplicates are
/// rejected here, never silently merged.
///
/// # Errors
///
/// Returns [`MappingError`] when the file is unreadable, the document lacks
/// the `value_patterns` array, an entry lacks `id` or `regex`, or two
/// entries share an id.
pub fn load_mapping(path: &Path) -> Result<SecretMapping, MappingError> {
    let content = std::fs::read_to_string(path)?;
    let mapping: SecretMapping =
        serde_json::from_str(&content).map_err(|e| MappingError::Malformed(e.to_string()))?;

    let mut seen = FxHashSet::default();
    for vp in &mapping.value_patterns {
        if !seen.insert(vp.id.as_str()) {
            return Err(MappingError::DuplicateRuleId(vp.id.clone()));
        }
    }

    Ok(mapping)
}
