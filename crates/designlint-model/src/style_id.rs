//! Structured style identifiers.
//!
//! Hosts hand out style ids such as `S:4b93d40f61be15e2,12:7`. The part
//! between `S:` and the first comma is the style key shared by every file that
//! imports the style; the trailing part is document-local.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const STYLE_PREFIX: &str = "S:";

/// A style id parsed once into prefix, key, and trailing parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleId {
    raw: String,
    prefixed: bool,
    key: String,
    trailing: Option<String>,
}

impl StyleId {
    /// Parses a raw id. Ids without the `S:` prefix are kept as-is, with the
    /// key still cut at the first comma.
    pub fn parse(raw: &str) -> Self {
        let (prefixed, rest) = match raw.strip_prefix(STYLE_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let (key, trailing) = match rest.split_once(',') {
            Some((key, trailing)) => (key.to_string(), Some(trailing.to_string())),
            None => (rest.to_string(), None),
        };
        Self {
            raw: raw.to_string(),
            prefixed,
            key,
            trailing,
        }
    }

    /// The id exactly as the host reported it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The bare style key used for comparison and display.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_prefixed(&self) -> bool {
        self.prefixed
    }

    pub fn trailing(&self) -> Option<&str> {
        self.trailing.as_deref()
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for StyleId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for StyleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for StyleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
