//! Compiler versions and ordering keys.
//!
//! Vendor version strings ("13.0.1", "trunk", "2023-10-dev") are not
//! comparable with each other, so a version carries a display label plus an
//! optional integer key used only to order entries from the same vendor.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::compiler::Compiler;
use crate::error::{ConfigError, Result};

/// A compiler version: display label plus optional ordering key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawVersion")]
pub struct Version {
    human_readable: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<i64>,
}

/// Serialized form of [`Version`] before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawVersion {
    pub(crate) human_readable: Option<String>,
    pub(crate) version: Option<i64>,
}

impl Version {
    /// Build a version, rejecting an empty label.
    pub fn new(human_readable: impl Into<String>, version: Option<i64>) -> Result<Self> {
        let human_readable = human_readable.into();
        if human_readable.is_empty() {
            return Err(ConfigError::InvalidVersionLabel);
        }
        Ok(Self {
            human_readable,
            version,
        })
    }

    /// A version with no ordering key.
    pub fn unordered(human_readable: impl Into<String>) -> Result<Self> {
        Self::new(human_readable, None)
    }

    /// A version with an ordering key.
    pub fn ordered(human_readable: impl Into<String>, key: i64) -> Result<Self> {
        Self::new(human_readable, Some(key))
    }

    /// Label shown to users. Never empty.
    pub fn human_readable(&self) -> &str {
        &self.human_readable
    }

    /// Ordering key, if the vendor assigned one.
    pub fn ordering_key(&self) -> Option<i64> {
        self.version
    }

    /// Compare ordering keys.
    ///
    /// Ascending by key when both sides have one, `Equal` otherwise. Keys only
    /// mean something between versions of the same vendor. This is not a total
    /// order over mixed inputs; sort with [`sort_versions`] or
    /// [`sort_by_ordering_key`] rather than passing it to `sort_by`.
    pub fn compare_ordering_key(&self, other: &Version) -> Ordering {
        match (self.version, other.version) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => Ordering::Equal,
        }
    }
}

impl TryFrom<RawVersion> for Version {
    type Error = ConfigError;

    fn try_from(raw: RawVersion) -> Result<Self> {
        let human_readable = raw.human_readable.ok_or(ConfigError::MissingField {
            field: "version.humanReadable",
        })?;
        Version::new(human_readable, raw.version)
    }
}

/// Stable sort by an optional ordering key.
///
/// Entries without a key stay at their positions. Entries with a key are
/// sorted ascending among the positions keyed entries occupy; equal keys keep
/// their input order. Labels are never consulted.
pub fn sort_by_ordering_key<T, F>(items: &mut Vec<T>, key: F)
where
    F: Fn(&T) -> Option<i64>,
{
    let mut slots: Vec<Option<T>> = Vec::with_capacity(items.len());
    let mut keyed_positions = Vec::new();
    let mut keyed = Vec::new();

    for (index, item) in std::mem::take(items).into_iter().enumerate() {
        match key(&item) {
            Some(k) => {
                keyed_positions.push(index);
                keyed.push((k, item));
                slots.push(None);
            }
            None => slots.push(Some(item)),
        }
    }

    keyed.sort_by_key(|(k, _)| *k);
    for (position, (_, item)) in keyed_positions.into_iter().zip(keyed) {
        slots[position] = Some(item);
    }

    items.extend(slots.into_iter().flatten());
}

/// Sort versions by ordering key. See [`sort_by_ordering_key`].
pub fn sort_versions(versions: &mut Vec<Version>) {
    sort_by_ordering_key(versions, Version::ordering_key);
}

/// Sort compilers of one vendor by their version ordering key.
pub fn sort_compilers(compilers: &mut Vec<Compiler>) {
    sort_by_ordering_key(compilers, |c| c.version().ordering_key());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(versions: &[Version]) -> Vec<Option<i64>> {
        versions.iter().map(Version::ordering_key).collect()
    }

    fn labels(versions: &[Version]) -> Vec<&str> {
        versions.iter().map(Version::human_readable).collect()
    }

    #[test]
    fn empty_label_rejected() {
        assert!(matches!(
            Version::new("", Some(1)),
            Err(ConfigError::InvalidVersionLabel)
        ));
        assert!(Version::unordered("trunk").is_ok());
    }

    #[test]
    fn compare_keys() {
        let v1 = Version::ordered("14.0.0", 14).unwrap();
        let v2 = Version::ordered("15.0.0", 15).unwrap();
        let trunk = Version::unordered("trunk").unwrap();
        assert_eq!(v1.compare_ordering_key(&v2), Ordering::Less);
        assert_eq!(v2.compare_ordering_key(&v1), Ordering::Greater);
        assert_eq!(v1.compare_ordering_key(&trunk), Ordering::Equal);
        assert_eq!(trunk.compare_ordering_key(&trunk), Ordering::Equal);
    }

    #[test]
    fn sort_keyed_ascending() {
        let mut versions = vec![
            Version::ordered("c", 3).unwrap(),
            Version::ordered("a", 1).unwrap(),
            Version::ordered("b", 2).unwrap(),
        ];
        sort_versions(&mut versions);
        assert_eq!(keys(&versions), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn sort_unkeyed_preserves_input_order() {
        // Labels are deliberately out of lexical order.
        let mut versions = vec![
            Version::unordered("trunk").unwrap(),
            Version::unordered("13.0.1").unwrap(),
            Version::unordered("2023-10-dev").unwrap(),
        ];
        sort_versions(&mut versions);
        assert_eq!(labels(&versions), vec!["trunk", "13.0.1", "2023-10-dev"]);
    }

    #[test]
    fn sort_mixed_keeps_unkeyed_in_place() {
        let mut versions = vec![
            Version::ordered("9", 9).unwrap(),
            Version::unordered("trunk").unwrap(),
            Version::ordered("2", 2).unwrap(),
            Version::unordered("nightly").unwrap(),
            Version::ordered("5", 5).unwrap(),
        ];
        sort_versions(&mut versions);
        assert_eq!(labels(&versions), vec!["2", "trunk", "5", "nightly", "9"]);
    }

    #[test]
    fn sort_equal_keys_is_stable() {
        let mut versions = vec![
            Version::ordered("second", 2).unwrap(),
            Version::ordered("first-a", 1).unwrap(),
            Version::ordered("first-b", 1).unwrap(),
        ];
        sort_versions(&mut versions);
        assert_eq!(labels(&versions), vec!["first-a", "first-b", "second"]);
    }

    fn clang(label: &str, key: Option<i64>) -> Compiler {
        Compiler::new(
            format!("Clang {label}"),
            crate::arch::Architecture::X86_64,
            "/usr/bin/clang",
            Version::new(label, key).unwrap(),
            "{path} -S {input} -o {output}",
        )
    }

    fn compiler_labels(compilers: &[Compiler]) -> Vec<&str> {
        compilers.iter().map(|c| c.version().human_readable()).collect()
    }

    #[test]
    fn sort_compilers_by_key() {
        let mut compilers = vec![
            clang("17", Some(3)),
            clang("15", Some(1)),
            clang("16", Some(2)),
        ];
        sort_compilers(&mut compilers);
        assert_eq!(compiler_labels(&compilers), vec!["15", "16", "17"]);
    }

    #[test]
    fn sort_compilers_mixed_keeps_unkeyed_in_place() {
        let mut compilers = vec![
            clang("17", Some(17)),
            clang("trunk", None),
            clang("15", Some(15)),
        ];
        sort_compilers(&mut compilers);
        assert_eq!(compiler_labels(&compilers), vec!["15", "trunk", "17"]);
        assert_eq!(compilers[1].id(), "Clang trunk");
    }

    #[test]
    fn absent_key_is_not_zero() {
        let absent = Version::unordered("trunk").unwrap();
        let json = serde_json::to_string(&absent).unwrap();
        assert_eq!(json, r#"{"humanReadable":"trunk"}"#);
        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ordering_key(), None);

        let zero = Version::ordered("0.1", 0).unwrap();
        let json = serde_json::to_string(&zero).unwrap();
        assert_eq!(json, r#"{"humanReadable":"0.1","version":0}"#);
        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ordering_key(), Some(0));
        assert_ne!(back, absent);
    }

    #[test]
    fn null_key_decodes_as_absent() {
        let v: Version = serde_json::from_str(r#"{"humanReadable":"trunk","version":null}"#).unwrap();
        assert_eq!(v.ordering_key(), None);
    }

    #[test]
    fn deserialize_validates_label() {
        let err = serde_json::from_str::<Version>(r#"{"humanReadable":"","version":1}"#).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
        let err = serde_json::from_str::<Version>(r#"{"version":1}"#).unwrap_err();
        assert!(err.to_string().contains("version.humanReadable"));
    }
}
