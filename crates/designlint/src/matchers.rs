//! Style matchers.
//!
//! A matcher decides whether a catalog entry is an exact equivalent of a
//! node's current property value, merely close to it, or unrelated.
//! Comparisons are strict: two solid colors only match when every channel and
//! the opacity compare equal, with no tolerance.

use designlint_model::{
    FontName, LetterSpacing, Node, Paint, PaintKind, PaintStyle, ResolvedLineHeight, StyleCatalog,
    StyleId, TextAlignHorizontal, TextAlignVertical, TextCase, TextStyle, TextStyleEntry,
};

use crate::report::StyleCandidate;

/// Which catalog tier an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Local,
    Library,
}

/// How well a catalog entry fits the node's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrength {
    /// Equivalent under the property's comparison rule.
    Exact,
    /// Not equivalent, but worth suggesting.
    Close,
}

/// Matching policy for one property kind.
pub trait StyleMatcher {
    /// Catalog entry type this matcher compares against.
    type Entry;

    /// The entries of `catalog` relevant to this property kind.
    fn entries<'c>(&self, catalog: &'c StyleCatalog) -> &'c [Self::Entry];

    /// Classifies one entry. `None` means the entry is unrelated.
    fn classify(&self, entry: &Self::Entry, tier: Tier) -> Option<MatchStrength>;

    /// Builds the candidate shown to the user for an entry.
    fn candidate(&self, entry: &Self::Entry, source: &str) -> StyleCandidate;
}

/// Reduces a compound style id (`S:<key>,<rest>`) to its bare key.
pub fn normalize_style_key(raw: &str) -> String {
    StyleId::parse(raw).key().to_string()
}

// ============================================================================
// Fills
// ============================================================================

/// Returns true if a style's paint is equivalent to a node's fill.
///
/// Solid paints compare r, g, b and opacity exactly. Gradients must share a
/// subtype and render to the same stop string. Any other pairing never
/// matches.
pub fn fill_matches(style: &Paint, fill: &Paint) -> bool {
    if let (PaintKind::Solid { color: a }, PaintKind::Solid { color: b }) = (&style.kind, &fill.kind)
    {
        return a.r == b.r && a.g == b.g && a.b == b.b && style.opacity == fill.opacity;
    }

    match (style.as_gradient(), fill.as_gradient()) {
        (Some((style_kind, _)), Some((fill_kind, _))) => {
            style_kind == fill_kind && style.describe() == fill.describe()
        }
        _ => false,
    }
}

/// Matches fill styles against one node fill.
pub struct FillMatcher<'n> {
    fill: &'n Paint,
}

impl<'n> FillMatcher<'n> {
    pub fn new(fill: &'n Paint) -> Self {
        Self { fill }
    }
}

impl StyleMatcher for FillMatcher<'_> {
    type Entry = PaintStyle;

    fn entries<'c>(&self, catalog: &'c StyleCatalog) -> &'c [PaintStyle] {
        &catalog.fills
    }

    fn classify(&self, entry: &PaintStyle, tier: Tier) -> Option<MatchStrength> {
        if fill_matches(&entry.paint, self.fill) {
            return Some(MatchStrength::Exact);
        }
        // Library gradients are offered for gradient fills even when the
        // stops differ.
        let both_gradients =
            entry.paint.as_gradient().is_some() && self.fill.as_gradient().is_some();
        if tier == Tier::Library && both_gradients {
            Some(MatchStrength::Close)
        } else {
            None
        }
    }

    fn candidate(&self, entry: &PaintStyle, source: &str) -> StyleCandidate {
        StyleCandidate {
            name: entry.name.clone(),
            id: entry.id.to_string(),
            key: entry.style_key().to_string(),
            value: entry.name.clone(),
            source: source.to_string(),
        }
    }
}

// ============================================================================
// Text
// ============================================================================

/// Every typography field of a text node, captured for comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSnapshot {
    pub font_family: String,
    pub font_style: String,
    pub font_size: f64,
    pub line_height: ResolvedLineHeight,
    pub letter_spacing: LetterSpacing,
    pub text_case: TextCase,
    pub paragraph_spacing: f64,
    pub paragraph_indent: f64,
    pub text_align_horizontal: TextAlignHorizontal,
    pub text_align_vertical: TextAlignVertical,
}

impl TextSnapshot {
    /// Captures a node's typography. `font` and `size` are passed separately
    /// because the caller has already ruled out mixed values.
    pub fn capture(node: &Node, font: &FontName, size: f64) -> Self {
        Self {
            font_family: font.family.clone(),
            font_style: font.style.clone(),
            font_size: size,
            line_height: node.line_height.resolve(),
            letter_spacing: node.letter_spacing,
            text_case: node.text_case,
            paragraph_spacing: node.paragraph_spacing,
            paragraph_indent: node.paragraph_indent,
            text_align_horizontal: node.text_align_horizontal,
            text_align_vertical: node.text_align_vertical,
        }
    }

    /// Renders `<family> <style> / <size> (<line height> line-height)`.
    pub fn describe(&self) -> String {
        format!(
            "{} {} / {} ({} line-height)",
            self.font_family, self.font_style, self.font_size, self.line_height
        )
    }
}

/// Returns true if every typography field of the style equals the snapshot.
pub fn text_matches(style: &TextStyle, text: &TextSnapshot) -> bool {
    text_close(style, text)
        && style.letter_spacing.value == text.letter_spacing.value
        && style.letter_spacing.unit == text.letter_spacing.unit
        && style.text_case == text.text_case
        && style.paragraph_spacing == text.paragraph_spacing
}

/// Returns true if family, style, size, and resolved line height agree.
pub fn text_close(style: &TextStyle, text: &TextSnapshot) -> bool {
    style.font_family == text.font_family
        && style.font_style == text.font_style
        && style.font_size == text.font_size
        && style.line_height.resolve() == text.line_height
}

/// Matches text styles against a typography snapshot.
pub struct TextMatcher<'n> {
    text: &'n TextSnapshot,
}

impl<'n> TextMatcher<'n> {
    pub fn new(text: &'n TextSnapshot) -> Self {
        Self { text }
    }
}

impl StyleMatcher for TextMatcher<'_> {
    type Entry = TextStyleEntry;

    fn entries<'c>(&self, catalog: &'c StyleCatalog) -> &'c [TextStyleEntry] {
        &catalog.text
    }

    fn classify(&self, entry: &TextStyleEntry, _tier: Tier) -> Option<MatchStrength> {
        if text_matches(&entry.style, self.text) {
            Some(MatchStrength::Exact)
        } else if text_close(&entry.style, self.text) {
            Some(MatchStrength::Close)
        } else {
            None
        }
    }

    fn candidate(&self, entry: &TextStyleEntry, source: &str) -> StyleCandidate {
        StyleCandidate {
            name: entry.name.clone(),
            id: entry.id.to_string(),
            key: entry.style_key().to_string(),
            value: format!(
                "{} · {}/{}",
                entry.name,
                entry.style.font_size,
                entry.style.line_height.resolve()
            ),
            source: source.to_string(),
        }
    }
}
