//! Shadow and blur effects.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Effect type as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    /// Any effect type this model does not know about.
    #[serde(other)]
    Other,
}

impl EffectType {
    /// Human label. Unknown types are labelled as background blurs.
    pub fn label(&self) -> &'static str {
        match self {
            EffectType::DropShadow => "Drop Shadow",
            EffectType::InnerShadow => "Inner Shadow",
            EffectType::LayerBlur => "Layer Blur",
            EffectType::BackgroundBlur | EffectType::Other => "Background Blur",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// One effect layer. Shadows carry a color and an offset; blurs carry neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    #[serde(default)]
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vector>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Effect {
    /// Creates a shadow effect.
    pub fn shadow(effect_type: EffectType, radius: f64, color: Rgba, offset: Vector) -> Self {
        Self {
            effect_type,
            radius,
            color: Some(color),
            offset: Some(offset),
            visible: true,
        }
    }

    /// Creates a blur effect.
    pub fn blur(effect_type: EffectType, radius: f64) -> Self {
        Self {
            effect_type,
            radius,
            color: None,
            offset: None,
            visible: true,
        }
    }
}
