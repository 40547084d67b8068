//! JSON/TOML codecs and validation for compiler entries.
//!
//! Decoding goes through the raw (all-optional) form so that failures come
//! back as typed [`ConfigError`]s rather than opaque parser messages. Loading
//! and storing files is left to the caller.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::compiler::{Compiler, RawCompiler};
use crate::error::{ConfigError, Result};

/// A validation issue found in a set of compiler entries.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity. Always "warning": none of the checks make an entry unusable.
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Parse a compiler from a JSON object.
pub fn parse_compiler_json(json: &str) -> Result<Compiler> {
    let raw: RawCompiler = serde_json::from_str(json)?;
    finish(raw)
}

/// Parse a JSON array of compilers.
///
/// The first bad entry fails the whole list; nothing is skipped.
pub fn parse_compilers_json(json: &str) -> Result<Vec<Compiler>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let compilers = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<RawCompiler>(entry)
                .map_err(ConfigError::from)
                .and_then(finish)
                .map_err(|source| ConfigError::Entry {
                    index,
                    source: Box::new(source),
                })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!("decoded {} compiler entries", compilers.len());
    Ok(compilers)
}

/// Serialize a compiler to compact JSON.
pub fn compiler_to_json(compiler: &Compiler) -> Result<String> {
    Ok(serde_json::to_string(compiler)?)
}

/// Serialize a compiler to pretty JSON.
pub fn compiler_to_json_pretty(compiler: &Compiler) -> Result<String> {
    Ok(serde_json::to_string_pretty(compiler)?)
}

/// Parse a compiler from a TOML document.
pub fn parse_compiler_toml(toml_str: &str) -> Result<Compiler> {
    let raw: RawCompiler = toml::from_str(toml_str)?;
    finish(raw)
}

/// Serialize a compiler to pretty TOML.
pub fn compiler_to_toml(compiler: &Compiler) -> Result<String> {
    let toml_str = toml::to_string_pretty(compiler)?;
    Ok(toml_str)
}

fn finish(raw: RawCompiler) -> Result<Compiler> {
    Compiler::try_from(raw).inspect_err(|err| debug!("rejected compiler entry: {err}"))
}

/// Check a set of compilers for problems a registry builder should know about.
///
/// Only reports. Deciding what to do with duplicates (keep the last, reject
/// the set) belongs to whoever builds the registry.
pub fn validate_compilers(compilers: &[Compiler]) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    // 1. Identities are unique
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, compiler) in compilers.iter().enumerate() {
        if let Some(&first) = seen.get(compiler.id()) {
            warn!("duplicate compiler identity '{}'", compiler.id());
            issues.push(ValidationIssue {
                severity: "warning",
                message: format!(
                    "compiler '{}' at index {} duplicates the identity of index {}",
                    compiler.id(),
                    index,
                    first
                ),
            });
        } else {
            seen.insert(compiler.id(), index);
        }
    }

    // 2. Names are non-empty
    for (index, compiler) in compilers.iter().enumerate() {
        if compiler.name().is_empty() {
            issues.push(ValidationIssue {
                severity: "warning",
                message: format!("compiler at index {index} has an empty name"),
            });
        }
    }

    // 3. Invoke patterns are non-empty
    for compiler in compilers {
        if compiler.invoke_pattern().is_empty() {
            issues.push(ValidationIssue {
                severity: "warning",
                message: format!("compiler '{}' has an empty invoke pattern", compiler.id()),
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
