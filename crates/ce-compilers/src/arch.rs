//! Target architecture tags.
//!
//! The set is closed: every compiler entry names exactly one of these as the
//! architecture its default invocation pattern emits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Architecture a compiler targets by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Architecture {
    /// 32-bit ARM.
    #[serde(rename = "arm32")]
    Arm32,
    /// 64-bit ARM.
    #[serde(rename = "arm64")]
    Arm64,
    /// 64-bit x86.
    #[serde(rename = "x86_64")]
    X86_64,
    /// 32-bit x86.
    #[serde(rename = "x86")]
    X86,
}

impl Architecture {
    /// Every architecture, in declaration order.
    pub const ALL: [Architecture; 4] = [
        Architecture::Arm32,
        Architecture::Arm64,
        Architecture::X86_64,
        Architecture::X86,
    ];

    /// The serialized token for this architecture.
    pub fn as_str(self) -> &'static str {
        match self {
            Architecture::Arm32 => "arm32",
            Architecture::Arm64 => "arm64",
            Architecture::X86_64 => "x86_64",
            Architecture::X86 => "x86",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = ConfigError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        // Case-sensitive: "ARM64" is not a valid token.
        Architecture::ALL
            .into_iter()
            .find(|arch| arch.as_str() == token)
            .ok_or_else(|| ConfigError::UnknownArchitecture {
                token: token.to_string(),
            })
    }
}

impl TryFrom<&str> for Architecture {
    type Error = ConfigError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl TryFrom<String> for Architecture {
    type Error = ConfigError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}
