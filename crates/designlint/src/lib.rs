//! Style-compliance lint engine for design documents.
//!
//! Finds nodes whose fills, strokes, effects, typography, or corner radii are
//! set directly instead of through the design system's styles, and offers the
//! catalog styles that could replace them.
//!
//! # Example
//!
//! ```
//! use designlint::{lint, Catalogs, ErrorKind};
//! use designlint_model::Document;
//!
//! let doc = Document::from_json(r#"{
//!     "nodes": [{
//!         "id": "1:2",
//!         "name": "Card",
//!         "type": "RECTANGLE",
//!         "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0 } }]
//!     }]
//! }"#).unwrap();
//!
//! let outcome = lint(&doc.nodes, &Catalogs::from_document(&doc)).unwrap();
//! assert_eq!(outcome.error_count(), 1);
//!
//! let error = &outcome.flat_errors[0];
//! assert_eq!(error.kind, ErrorKind::Fill);
//! assert_eq!(error.value, "#ff0000");
//! ```

pub mod candidates;
pub mod config;
pub mod fix;
pub mod lint;
pub mod matchers;
pub mod registry;
pub mod report;
pub mod rules;

pub use candidates::{resolve_candidates, Catalogs, Resolution};
pub use config::LintConfig;
pub use fix::{apply_fix, FixError, StyleApplier};
pub use lint::{lint, Linter};
pub use matchers::{normalize_style_key, MatchStrength, StyleMatcher, Tier};
pub use registry::{RuleMetadata, RuleRegistry};
pub use report::{ErrorKind, ErrorRecord, LintOutcome, NodeSummary, StyleCandidate};
pub use rules::{LintError, StyleRule};
