//! Typography properties.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeightUnit {
    #[default]
    Auto,
    Pixels,
    Percent,
}

/// Line height: either automatic or an explicit value in some unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineHeight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: LineHeightUnit,
}

impl LineHeight {
    pub fn auto() -> Self {
        Self::default()
    }

    pub fn pixels(value: f64) -> Self {
        Self {
            value: Some(value),
            unit: LineHeightUnit::Pixels,
        }
    }

    /// Resolves to the explicit value when one is set, else `Auto`.
    pub fn resolve(&self) -> ResolvedLineHeight {
        match self.value {
            Some(value) => ResolvedLineHeight::Value(value),
            None => ResolvedLineHeight::Auto,
        }
    }
}

/// A line height reduced to what comparisons and display need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedLineHeight {
    Value(f64),
    Auto,
}

impl fmt::Display for ResolvedLineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedLineHeight::Value(v) => write!(f, "{}", v),
            ResolvedLineHeight::Auto => f.write_str("Auto"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterSpacingUnit {
    Pixels,
    #[default]
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LetterSpacing {
    pub value: f64,
    #[serde(default)]
    pub unit: LetterSpacingUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    #[default]
    Original,
    Upper,
    Lower,
    Title,
    SmallCaps,
    SmallCapsForced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    #[default]
    Top,
    Center,
    Bottom,
}
