//! Lint configuration.

use serde::{Deserialize, Serialize};

use crate::rules::radius::DEFAULT_RADIUS_VALUES;

/// Settings that shape the default rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LintConfig {
    /// Accepted corner radii.
    pub radius_values: Vec<f64>,
    /// Whether the radius rule runs at all.
    pub check_radius: bool,
    /// Whether text layers get the fill rule.
    pub check_text_fills: bool,
    /// Fill style keys text layers must not use. When non-empty, text layers
    /// get the text color rule instead of the plain fill rule.
    pub forbidden_text_fill_keys: Vec<String>,
    /// Rule ids to skip.
    pub disabled_rules: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            radius_values: DEFAULT_RADIUS_VALUES.to_vec(),
            check_radius: false,
            check_text_fills: true,
            forbidden_text_fill_keys: Vec::new(),
            disabled_rules: Vec::new(),
        }
    }
}

impl LintConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
