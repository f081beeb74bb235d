//! Design nodes.

use serde::{Deserialize, Serialize};

use crate::effect::Effect;
use crate::mixed::{Mixable, StyleRef};
use crate::paint::Paint;
use crate::text::{
    FontName, LetterSpacing, LineHeight, TextAlignHorizontal, TextAlignVertical, TextCase,
};

/// Node types reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Component,
    Instance,
    Ellipse,
    Polygon,
    Star,
    Line,
    BooleanOperation,
    Frame,
    Vector,
    Group,
    Rectangle,
    Text,
    /// Any node type this model does not know about.
    #[serde(other)]
    Other,
}

impl NodeType {
    /// Returns the host type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Component => "COMPONENT",
            NodeType::Instance => "INSTANCE",
            NodeType::Ellipse => "ELLIPSE",
            NodeType::Polygon => "POLYGON",
            NodeType::Star => "STAR",
            NodeType::Line => "LINE",
            NodeType::BooleanOperation => "BOOLEAN_OPERATION",
            NodeType::Frame => "FRAME",
            NodeType::Vector => "VECTOR",
            NodeType::Group => "GROUP",
            NodeType::Rectangle => "RECTANGLE",
            NodeType::Text => "TEXT",
            NodeType::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    #[default]
    Inside,
    Outside,
    Center,
}

impl StrokeAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrokeAlign::Inside => "INSIDE",
            StrokeAlign::Outside => "OUTSIDE",
            StrokeAlign::Center => "CENTER",
        }
    }
}

impl std::fmt::Display for StrokeAlign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node of the design tree.
///
/// Fields mirror the host's property names. Text properties are only
/// meaningful on `TEXT` nodes and corner radii only on shapes; they default
/// when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique within a document.
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub children: Vec<Node>,

    #[serde(default)]
    pub fills: Mixable<Vec<Paint>>,
    #[serde(default)]
    pub fill_style_id: StyleRef,

    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub stroke_style_id: StyleRef,
    #[serde(default = "default_stroke_weight")]
    pub stroke_weight: Mixable<f64>,
    #[serde(default)]
    pub stroke_align: StrokeAlign,

    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub effect_style_id: StyleRef,

    #[serde(default)]
    pub corner_radius: Mixable<f64>,
    #[serde(default)]
    pub top_left_radius: f64,
    #[serde(default)]
    pub top_right_radius: f64,
    #[serde(default)]
    pub bottom_left_radius: f64,
    #[serde(default)]
    pub bottom_right_radius: f64,
    #[serde(default)]
    pub height: f64,

    #[serde(default)]
    pub text_style_id: StyleRef,
    #[serde(default)]
    pub font_name: Mixable<FontName>,
    #[serde(default)]
    pub font_size: Mixable<f64>,
    #[serde(default)]
    pub line_height: LineHeight,
    #[serde(default)]
    pub letter_spacing: LetterSpacing,
    #[serde(default)]
    pub text_case: TextCase,
    #[serde(default)]
    pub paragraph_spacing: f64,
    #[serde(default)]
    pub paragraph_indent: f64,
    #[serde(default)]
    pub text_align_horizontal: TextAlignHorizontal,
    #[serde(default)]
    pub text_align_vertical: TextAlignVertical,
}

fn default_visible() -> bool {
    true
}

fn default_stroke_weight() -> Mixable<f64> {
    Mixable::Value(1.0)
}

impl Node {
    /// Creates a visible node with no paints, effects, or children.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            visible: true,
            children: Vec::new(),
            fills: Mixable::Value(Vec::new()),
            fill_style_id: StyleRef::Unbound,
            strokes: Vec::new(),
            stroke_style_id: StyleRef::Unbound,
            stroke_weight: default_stroke_weight(),
            stroke_align: StrokeAlign::default(),
            effects: Vec::new(),
            effect_style_id: StyleRef::Unbound,
            corner_radius: Mixable::Value(0.0),
            top_left_radius: 0.0,
            top_right_radius: 0.0,
            bottom_left_radius: 0.0,
            bottom_right_radius: 0.0,
            height: 0.0,
            text_style_id: StyleRef::Unbound,
            font_name: Mixable::Value(FontName::default()),
            font_size: Mixable::Value(0.0),
            line_height: LineHeight::default(),
            letter_spacing: LetterSpacing::default(),
            text_case: TextCase::default(),
            paragraph_spacing: 0.0,
            paragraph_indent: 0.0,
            text_align_horizontal: TextAlignHorizontal::default(),
            text_align_vertical: TextAlignVertical::default(),
        }
    }

    /// Returns a non-owning handle to this node.
    pub fn handle(&self) -> NodeRef {
        NodeRef {
            id: self.id.clone(),
            name: self.name.clone(),
            node_type: self.node_type,
        }
    }
}

/// Identifies a node without owning it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
}
