//! Corner radius rule.

use designlint_model::{Mixable, Node, NodeType};

use crate::candidates::Catalogs;
use crate::report::{ErrorKind, ErrorRecord};
use crate::rules::{LintError, StyleRule, SHAPES};

/// Radii accepted when no configuration overrides them.
pub const DEFAULT_RADIUS_VALUES: &[f64] = &[0.0, 2.0, 4.0, 8.0, 16.0, 24.0, 32.0];

/// Rule: radius/off-scale
/// Detects corner radii outside the accepted set.
pub struct RadiusRule {
    accepted: Vec<f64>,
}

impl RadiusRule {
    pub fn new(accepted: Vec<f64>) -> Self {
        Self { accepted }
    }

    pub fn accepted(&self) -> &[f64] {
        &self.accepted
    }
}

impl Default for RadiusRule {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS_VALUES.to_vec())
    }
}

impl StyleRule for RadiusRule {
    fn id(&self) -> &'static str {
        "radius/off-scale"
    }

    fn description(&self) -> &'static str {
        "Corner radius is not on the radius scale"
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Radius
    }

    fn applies_to(&self) -> &[NodeType] {
        SHAPES
    }

    fn check(&self, node: &Node, _catalogs: &Catalogs<'_>) -> Result<Option<ErrorRecord>, LintError> {
        Ok(check_radius(node, &self.accepted))
    }
}

/// Checks a node's corner radii against `accepted`.
///
/// A zero radius or one equal to the node's height (a pill shape) always
/// conforms. Per-corner radii are checked in the order top-left, top-right,
/// bottom-left, bottom-right and only the first violation is reported.
pub fn check_radius(node: &Node, accepted: &[f64]) -> Option<ErrorRecord> {
    let radius_error = |message: &str, value: f64| {
        Some(ErrorRecord::new(node.handle(), ErrorKind::Radius, message).with_value(value.to_string()))
    };

    match node.corner_radius {
        Mixable::Value(radius) => {
            if radius == 0.0 || radius == node.height || accepted.contains(&radius) {
                None
            } else {
                radius_error("Incorrect border radius", radius)
            }
        }
        Mixable::Mixed => {
            let corners = [
                ("Incorrect top left radius", node.top_left_radius),
                ("Incorrect top right radius", node.top_right_radius),
                ("Incorrect bottom left radius", node.bottom_left_radius),
                ("Incorrect bottom right radius", node.bottom_right_radius),
            ];
            corners
                .into_iter()
                .find(|(_, value)| !accepted.contains(value))
                .and_then(|(message, value)| radius_error(message, value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn rect(radius: f64, height: f64) -> Node {
        let mut node = Node::new("6:1", "Button", NodeType::Rectangle);
        node.corner_radius = Mixable::Value(radius);
        node.height = height;
        node
    }

    #[test]
    fn test_zero_and_pill_are_exempt() {
        assert_eq!(check_radius(&rect(0.0, 40.0), &[4.0]), None);
        assert_eq!(check_radius(&rect(40.0, 40.0), &[4.0]), None);
    }

    #[test]
    fn test_uniform_radius() {
        assert_eq!(check_radius(&rect(8.0, 40.0), DEFAULT_RADIUS_VALUES), None);

        let error = check_radius(&rect(5.0, 40.0), DEFAULT_RADIUS_VALUES).unwrap();
        assert_eq!(error.kind, ErrorKind::Radius);
        assert_eq!(error.message, "Incorrect border radius");
        assert_eq!(error.value, "5");
    }

    #[test]
    fn test_first_corner_violation_wins() {
        let mut node = rect(0.0, 40.0);
        node.corner_radius = Mixable::Mixed;
        node.top_left_radius = 4.0;
        node.top_right_radius = 3.0;
        node.bottom_left_radius = 7.0;
        node.bottom_right_radius = 4.0;

        let error = check_radius(&node, DEFAULT_RADIUS_VALUES).unwrap();
        assert_eq!(error.message, "Incorrect top right radius");
        assert_eq!(error.value, "3");
    }

    #[test]
    fn test_top_left_reports_its_own_value() {
        let mut node = rect(0.0, 40.0);
        node.corner_radius = Mixable::Mixed;
        node.top_left_radius = 5.0;
        node.top_right_radius = 9.0;

        let error = check_radius(&node, DEFAULT_RADIUS_VALUES).unwrap();
        assert_eq!(error.message, "Incorrect top left radius");
        assert_eq!(error.value, "5");
    }

    #[test]
    fn test_mixed_corners_on_scale() {
        let mut node = rect(0.0, 40.0);
        node.corner_radius = Mixable::Mixed;
        node.top_left_radius = 2.0;
        node.top_right_radius = 4.0;
        assert_eq!(check_radius(&node, DEFAULT_RADIUS_VALUES), None);
    }

    #[test]
    fn test_rule_uses_configured_scale() {
        let rule = RadiusRule::new(vec![6.0]);
        let result = rule.check(&rect(6.0, 40.0), &Catalogs::empty()).unwrap();
        assert_eq!(result, None);
        assert_eq!(rule.accepted(), &[6.0]);
    }

    proptest! {
        #[test]
        fn zero_and_pill_exempt_for_any_scale(
            scale in prop::collection::vec(1u32..=64, 0..8),
            height in 1u32..=200,
        ) {
            let accepted: Vec<f64> = scale.into_iter().map(f64::from).collect();
            let height = f64::from(height);
            prop_assert_eq!(check_radius(&rect(0.0, height), &accepted), None);
            prop_assert_eq!(check_radius(&rect(height, height), &accepted), None);
        }

        #[test]
        fn uniform_radius_flagged_iff_off_scale(
            scale in prop::collection::vec(1u32..=64, 0..8),
            radius in 1u32..=64,
        ) {
            let accepted: Vec<f64> = scale.into_iter().map(f64::from).collect();
            let radius = f64::from(radius);
            let error = check_radius(&rect(radius, 500.0), &accepted);
            prop_assert_eq!(error.is_some(), !accepted.contains(&radius));
        }
    }
}
