//! Paints used for fills and strokes.

use serde::{Deserialize, Serialize};

use crate::color::{convert_color, Rgb, Rgba};

/// A single paint layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(flatten)]
    pub kind: PaintKind,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_visible() -> bool {
    true
}

fn default_opacity() -> f64 {
    1.0
}

/// The paint type and its type-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid {
        color: Rgb,
    },
    GradientLinear {
        #[serde(rename = "gradientStops")]
        gradient_stops: Vec<GradientStop>,
    },
    GradientRadial {
        #[serde(rename = "gradientStops")]
        gradient_stops: Vec<GradientStop>,
    },
    GradientAngular {
        #[serde(rename = "gradientStops")]
        gradient_stops: Vec<GradientStop>,
    },
    GradientDiamond {
        #[serde(rename = "gradientStops")]
        gradient_stops: Vec<GradientStop>,
    },
    Image {
        #[serde(rename = "imageHash", default)]
        image_hash: String,
    },
    Video,
}

/// The four gradient subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradientKind {
    Linear,
    Radial,
    Angular,
    Diamond,
}

impl GradientKind {
    /// Returns the host type name (e.g. `GRADIENT_LINEAR`).
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientKind::Linear => "GRADIENT_LINEAR",
            GradientKind::Radial => "GRADIENT_RADIAL",
            GradientKind::Angular => "GRADIENT_ANGULAR",
            GradientKind::Diamond => "GRADIENT_DIAMOND",
        }
    }
}

impl std::fmt::Display for GradientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One color stop of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Rgba,
    #[serde(default)]
    pub position: f64,
}

impl Paint {
    /// Creates a visible, fully opaque paint.
    pub fn new(kind: PaintKind) -> Self {
        Self {
            kind,
            visible: true,
            opacity: 1.0,
        }
    }

    /// Creates a visible solid paint.
    pub fn solid(color: Rgb, opacity: f64) -> Self {
        Self {
            opacity,
            ..Self::new(PaintKind::Solid { color })
        }
    }

    /// Creates a visible gradient paint.
    pub fn gradient(kind: GradientKind, stops: Vec<GradientStop>) -> Self {
        let kind = match kind {
            GradientKind::Linear => PaintKind::GradientLinear {
                gradient_stops: stops,
            },
            GradientKind::Radial => PaintKind::GradientRadial {
                gradient_stops: stops,
            },
            GradientKind::Angular => PaintKind::GradientAngular {
                gradient_stops: stops,
            },
            GradientKind::Diamond => PaintKind::GradientDiamond {
                gradient_stops: stops,
            },
        };
        Self::new(kind)
    }

    /// Returns the gradient subtype and stops if this is a gradient paint.
    pub fn as_gradient(&self) -> Option<(GradientKind, &[GradientStop])> {
        match &self.kind {
            PaintKind::GradientLinear { gradient_stops } => {
                Some((GradientKind::Linear, gradient_stops))
            }
            PaintKind::GradientRadial { gradient_stops } => {
                Some((GradientKind::Radial, gradient_stops))
            }
            PaintKind::GradientAngular { gradient_stops } => {
                Some((GradientKind::Angular, gradient_stops))
            }
            PaintKind::GradientDiamond { gradient_stops } => {
                Some((GradientKind::Diamond, gradient_stops))
            }
            PaintKind::Solid { .. } | PaintKind::Image { .. } | PaintKind::Video => None,
        }
    }

    /// Image and video paints can never be expressed as a style.
    pub fn is_media(&self) -> bool {
        matches!(self.kind, PaintKind::Image { .. } | PaintKind::Video)
    }

    /// Renders the paint for display.
    ///
    /// Solid paints render as `#rrggbb`, gradients as
    /// `GRADIENT_<KIND> #rrggbb,#rrggbb,...`.
    pub fn describe(&self) -> String {
        if let Some((kind, stops)) = self.as_gradient() {
            let stops: Vec<String> = stops
                .iter()
                .map(|stop| convert_color(&stop.color).hex())
                .collect();
            return format!("{} {}", kind, stops.join(","));
        }

        match &self.kind {
            PaintKind::Solid { color } => convert_color(color).hex(),
            PaintKind::Image { image_hash } => format!("Image - {}", image_hash),
            _ => "Video Fill".to_string(),
        }
    }
}

/// Renders the first paint of a list; `None` for an empty list.
pub fn describe_fills(fills: &[Paint]) -> Option<String> {
    fills.first().map(Paint::describe)
}
