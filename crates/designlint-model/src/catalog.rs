//! Style catalogs.
//!
//! A catalog is a named collection of canonical styles partitioned by property
//! kind. A document has at most one local catalog and any number of external
//! library catalogs.

use serde::{Deserialize, Serialize};

use crate::paint::Paint;
use crate::style_id::StyleId;
use crate::text::{LetterSpacing, LineHeight, TextCase};

/// Source label for entries of the local catalog.
pub const LOCAL_LIBRARY: &str = "Local Library";

/// A published fill style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintStyle {
    pub name: String,
    pub id: StyleId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub paint: Paint,
}

impl PaintStyle {
    pub fn new(name: impl Into<String>, id: &str, paint: Paint) -> Self {
        Self {
            name: name.into(),
            id: StyleId::parse(id),
            key: None,
            paint,
        }
    }

    /// The explicit key if the catalog supplied one, else the key parsed from
    /// the id.
    pub fn style_key(&self) -> &str {
        self.key.as_deref().unwrap_or_else(|| self.id.key())
    }
}

/// Typography payload of a text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_style: String,
    pub font_size: f64,
    #[serde(default)]
    pub line_height: LineHeight,
    #[serde(default)]
    pub letter_spacing: LetterSpacing,
    #[serde(default)]
    pub text_case: TextCase,
    #[serde(default)]
    pub paragraph_spacing: f64,
}

/// A published text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyleEntry {
    pub name: String,
    pub id: StyleId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub style: TextStyle,
}

impl TextStyleEntry {
    pub fn new(name: impl Into<String>, id: &str, style: TextStyle) -> Self {
        Self {
            name: name.into(),
            id: StyleId::parse(id),
            key: None,
            style,
        }
    }

    pub fn style_key(&self) -> &str {
        self.key.as_deref().unwrap_or_else(|| self.id.key())
    }
}

/// One catalog tier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleCatalog {
    /// Display name; used as the source label of external libraries.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fills: Vec<PaintStyle>,
    #[serde(default)]
    pub text: Vec<TextStyleEntry>,
}

impl StyleCatalog {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, style: PaintStyle) -> Self {
        self.fills.push(style);
        self
    }

    pub fn with_text(mut self, style: TextStyleEntry) -> Self {
        self.text.push(style);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fills.is_empty() && self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_style_key_prefers_explicit_key() {
        let mut style = PaintStyle::new(
            "Brand/Red",
            "S:abc123,4:5",
            Paint::solid(Rgb::new(1.0, 0.0, 0.0), 1.0),
        );
        assert_eq!(style.style_key(), "abc123");

        style.key = Some("published-key".to_string());
        assert_eq!(style.style_key(), "published-key");
    }

    #[test]
    fn test_catalog_json() {
        let json = r#"{
            "name": "Core Tokens",
            "fills": [{
                "name": "Brand/Red",
                "id": "S:abc,1:2",
                "paint": { "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0 }, "opacity": 1 }
            }],
            "text": [{
                "name": "Body/Regular",
                "id": "S:def,3:4",
                "key": "def",
                "style": {
                    "fontFamily": "Inter",
                    "fontStyle": "Regular",
                    "fontSize": 16,
                    "lineHeight": { "value": 24, "unit": "PIXELS" },
                    "letterSpacing": { "value": 0, "unit": "PERCENT" },
                    "textCase": "ORIGINAL",
                    "paragraphSpacing": 0
                }
            }]
        }"#;
        let catalog: StyleCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.name, "Core Tokens");
        assert_eq!(catalog.fills[0].id.key(), "abc");
        assert_eq!(catalog.text[0].style.font_family, "Inter");
        assert!(!catalog.is_empty());
    }
}
