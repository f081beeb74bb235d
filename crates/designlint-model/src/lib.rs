//! designlint data model
//!
//! This crate provides the types the lint engine reads: the design node tree,
//! paints, effects, typography, and the style catalogs a design system
//! publishes.
//!
//! # Overview
//!
//! Node properties come from a host document and can be in one of three
//! states:
//!
//! - **Value**: a concrete value set directly on the node
//! - **Bound**: the property is bound to a named style ([`StyleRef::Bound`])
//! - **Mixed**: the property differs across the node's sub-ranges
//!   ([`StyleRef::Mixed`], [`Mixable::Mixed`])
//!
//! # Example
//!
//! ```
//! use designlint_model::{Document, NodeType, StyleRef};
//!
//! let doc = Document::from_json(r#"{
//!     "nodes": [{
//!         "id": "1:2",
//!         "name": "Card",
//!         "type": "RECTANGLE",
//!         "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0 } }],
//!         "fillStyleId": ""
//!     }]
//! }"#).unwrap();
//!
//! let card = &doc.nodes[0];
//! assert_eq!(card.node_type, NodeType::Rectangle);
//! assert_eq!(card.fill_style_id, StyleRef::Unbound);
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Style catalogs and their entries
//! - [`color`]: Channel conversion and hex rendering
//! - [`document`]: Document snapshot loading
//! - [`effect`]: Shadow and blur effects
//! - [`mixed`]: The indeterminate marker, [`Mixable`] and [`StyleRef`]
//! - [`node`]: Design nodes
//! - [`outline`]: The reduced node shape sent across process boundaries
//! - [`paint`]: Solid, gradient, image, and video paints
//! - [`style_id`]: Structured style identifiers
//! - [`text`]: Typography properties
//! - [`tree`]: Tree traversal

pub mod catalog;
pub mod color;
pub mod document;
pub mod effect;
pub mod error;
pub mod mixed;
pub mod node;
pub mod outline;
pub mod paint;
pub mod style_id;
pub mod text;
pub mod tree;

// Re-export commonly used types at the crate root
pub use catalog::{PaintStyle, StyleCatalog, TextStyle, TextStyleEntry, LOCAL_LIBRARY};
pub use color::{convert_color, hex_to_rgb, rgb_to_hex, ColorChannels, DisplayColor, Rgb, Rgba};
pub use document::Document;
pub use effect::{Effect, EffectType, Vector};
pub use error::ModelError;
pub use mixed::{Mixable, StyleRef, MIXED_MARKER};
pub use node::{Node, NodeRef, NodeType, StrokeAlign};
pub use outline::{outline, NodeOutline};
pub use paint::{describe_fills, GradientKind, GradientStop, Paint, PaintKind};
pub use style_id::StyleId;
pub use text::{
    FontName, LetterSpacing, LetterSpacingUnit, LineHeight, LineHeightUnit, ResolvedLineHeight,
    TextAlignHorizontal, TextAlignVertical, TextCase,
};
pub use tree::{descends_into, walk_post_order};
