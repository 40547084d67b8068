//! Compiler toolchain entry.
//!
//! Ties a name, default architecture, executable path, version and invocation
//! pattern into one immutable value that the explorer enumerates and invokes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::arch::Architecture;
use crate::error::{ConfigError, Result};
use crate::version::{RawVersion, Version};

/// A configured compiler.
///
/// Identity is the name: two entries with the same name are the same logical
/// compiler even when their other fields differ. Equality is structural over
/// all fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCompiler")]
pub struct Compiler {
    name: String,
    default_arch: Architecture,
    path: PathBuf,
    invoke_pattern: String,
    // Last so the TOML form puts the `[version]` table after plain keys.
    version: Version,
}

/// Serialized form of [`Compiler`] before validation.
///
/// Everything is optional here so that decoding can report exactly which
/// field is missing or malformed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCompiler {
    name: Option<String>,
    default_arch: Option<String>,
    path: Option<PathBuf>,
    invoke_pattern: Option<String>,
    version: Option<RawVersion>,
}

impl Compiler {
    /// Build an entry from its five fields.
    pub fn new(
        name: impl Into<String>,
        default_arch: Architecture,
        path: impl Into<PathBuf>,
        version: Version,
        invoke_pattern: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            default_arch,
            path: path.into(),
            invoke_pattern: invoke_pattern.into(),
            version,
        }
    }

    /// Stable identity of this entry: the name, verbatim.
    pub fn id(&self) -> &str {
        &self.name
    }

    /// Human-readable name (e.g. "Apple Clang").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Architecture emitted by the default invocation pattern.
    pub fn default_arch(&self) -> Architecture {
        self.default_arch
    }

    /// Path to the executable. Not checked for existence.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Version label and ordering key.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Template for invoking the compiler to get assembly for
    /// [`default_arch`](Self::default_arch). Substitution syntax is up to the
    /// invoker.
    pub fn invoke_pattern(&self) -> &str {
        &self.invoke_pattern
    }
}

impl TryFrom<RawCompiler> for Compiler {
    type Error = ConfigError;

    fn try_from(raw: RawCompiler) -> Result<Self> {
        let name = raw.name.ok_or(ConfigError::MissingField { field: "name" })?;
        let default_arch: Architecture = raw
            .default_arch
            .ok_or(ConfigError::MissingField {
                field: "defaultArch",
            })?
            .parse()?;
        let path = raw.path.ok_or(ConfigError::MissingField { field: "path" })?;
        let version = Version::try_from(
            raw.version
                .ok_or(ConfigError::MissingField { field: "version" })?,
        )?;
        let invoke_pattern = raw.invoke_pattern.ok_or(ConfigError::MissingField {
            field: "invokePattern",
        })?;

        Ok(Self {
            name,
            default_arch,
            path,
            invoke_pattern,
            version,
        })
    }
}
