//! Effect style rule.

use designlint_model::{convert_color, Effect, Node, NodeType, StyleRef, Vector};

use crate::candidates::Catalogs;
use crate::report::{ErrorKind, ErrorRecord};
use crate::rules::{LintError, StyleRule, SHAPES_AND_TEXT};

/// Display form of one effect layer.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectDescriptor {
    pub label: &'static str,
    pub radius: f64,
    /// Hex color, only for colored effects.
    pub fill: Option<String>,
    pub offset: Option<Vector>,
    pub value: String,
}

impl EffectDescriptor {
    /// Describes one effect. A colored effect must carry an offset.
    pub fn describe(node: &Node, effect: &Effect) -> Result<Self, LintError> {
        let label = effect.effect_type.label();

        let Some(color) = &effect.color else {
            return Ok(Self {
                label,
                radius: effect.radius,
                fill: None,
                offset: None,
                value: format!("{} {}px", label, unsigned_zero(effect.radius)),
            });
        };

        let offset = effect
            .offset
            .ok_or_else(|| LintError::malformed(node, format!("{} has a color but no offset", label)))?;
        let hex = convert_color(color).hex();
        let value = format!(
            "{} {} {}px X: {}, Y: {}",
            label,
            hex,
            unsigned_zero(effect.radius),
            unsigned_zero(offset.x),
            unsigned_zero(offset.y)
        );

        Ok(Self {
            label,
            radius: effect.radius,
            fill: Some(hex),
            offset: Some(offset),
            value,
        })
    }
}

/// Maps `-0.0` to `0.0` so it renders as `0`.
fn unsigned_zero(n: f64) -> f64 {
    if n == 0.0 {
        0.0
    } else {
        n
    }
}

/// Rule: effects/missing-style
/// Detects shadows and blurs that are not bound to an effect style.
pub struct EffectRule;

impl StyleRule for EffectRule {
    fn id(&self) -> &'static str {
        "effects/missing-style"
    }

    fn description(&self) -> &'static str {
        "Effects are not bound to an effect style"
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Effects
    }

    fn applies_to(&self) -> &[NodeType] {
        SHAPES_AND_TEXT
    }

    fn check(&self, node: &Node, _catalogs: &Catalogs<'_>) -> Result<Option<ErrorRecord>, LintError> {
        check_effects(node)
    }
}

/// Checks a node's effects.
///
/// Descriptors are accumulated in reverse order, so the reported value
/// describes the last effect in the node's list.
pub fn check_effects(node: &Node) -> Result<Option<ErrorRecord>, LintError> {
    if node.effects.is_empty() || !node.visible || node.effect_style_id != StyleRef::Unbound {
        return Ok(None);
    }

    let mut descriptors = Vec::with_capacity(node.effects.len());
    for effect in node.effects.iter().rev() {
        descriptors.push(EffectDescriptor::describe(node, effect)?);
    }

    let value = descriptors
        .into_iter()
        .next()
        .map(|d| d.value)
        .unwrap_or_default();

    Ok(Some(
        ErrorRecord::new(node.handle(), ErrorKind::Effects, "Missing effects style").with_value(value),
    ))
}
