//! Compiler toolchain entries for the compiler explorer.
//!
//! A [`Compiler`] describes one installed toolchain: its name (which doubles
//! as its identity), the [`Architecture`] it targets by default, the path to
//! its executable, a [`Version`] and an invocation pattern.
//!
//! - **Architecture:** closed set of target tags (`arm32`, `arm64`, `x86_64`, `x86`)
//! - **Version:** display label plus optional per-vendor ordering key
//! - **Compiler:** the entry itself, immutable once built
//!
//! Discovery, invocation and configuration files live elsewhere; this crate
//! only models entries and converts them to and from JSON/TOML.

pub mod arch;
pub mod compiler;
pub mod error;
pub mod parse;
pub mod version;

pub use arch::Architecture;
pub use compiler::Compiler;
pub use error::{ConfigError, Result};
pub use parse::{
    compiler_to_json, compiler_to_json_pretty, compiler_to_toml, parse_compiler_json,
    parse_compiler_toml, parse_compilers_json, validate_compilers, ValidationIssue,
};
pub use version::{sort_by_ordering_key, sort_compilers, sort_versions, Version};
