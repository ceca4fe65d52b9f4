//! Compiles value patterns into executable matchers.

use regex::Regex;
use serde::Serialize;

use crate::dialect::adapt_pattern;
use crate::mapping::ValuePattern;

/// A value pattern paired with its compiled matcher.
#[derive(Debug)]
pub struct CompiledPattern {
    /// The originating rule.
    pub pattern: ValuePattern,
    /// Matcher compiled from the dialect-adapted source.
    pub regex: Regex,
}

/// One rule whose adapted source failed to compile.
#[derive(Debug, Clone, Serialize)]
pub struct CompileFailure {
    /// Id of the failing rule.
    pub rule_id: String,
    /// Compiler error message.
    pub error: String,
}

/// Compiles every pattern, isolating failures per rule.
///
/// One bad rule never aborts the rest: failures are collected alongside
/// the compiled set and are expected operating behavior, not an error
/// state. Output order follows input order.
#[must_use]
pub fn compile_patterns(patterns: &[ValuePattern]) -> (Vec<CompiledPattern>, Vec<CompileFailure>) {
    let mut compiled = Vec::new();
    let mut failures = Vec::new();

    for vp in patterns {
        match Regex::new(&adapt_pattern(&vp.regex)) {
            Ok(regex) => compiled.push(CompiledPattern {
                pattern: vp.clone(),
                regex,
            }),
            Err(err) => failures.push(CompileFailure {
                rule_id: vp.id.clone(),
                error: err.to_string(),
            }),
        }
    }

    (compiled, failures)
}
