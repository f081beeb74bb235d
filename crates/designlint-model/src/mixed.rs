//! Indeterminate values and style references.
//!
//! A host reports a property as "mixed" when it differs across a node's
//! sub-ranges (for example two font sizes inside one text layer). In JSON the
//! marker is the literal string [`MIXED_MARKER`].

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::style_id::StyleId;

/// JSON encoding of the indeterminate marker.
pub const MIXED_MARKER: &str = "$mixed";

/// A raw property value that may be indeterminate.
#[derive(Debug, Clone, PartialEq)]
pub enum Mixable<T> {
    /// The property has one value across the whole node.
    Value(T),
    /// The property differs across the node's sub-ranges.
    Mixed,
}

impl<T> Mixable<T> {
    /// Returns the uniform value, or `None` when mixed.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Mixable::Value(v) => Some(v),
            Mixable::Mixed => None,
        }
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, Mixable::Mixed)
    }
}

impl<T: Default> Default for Mixable<T> {
    fn default() -> Self {
        Mixable::Value(T::default())
    }
}

impl<T> From<T> for Mixable<T> {
    fn from(value: T) -> Self {
        Mixable::Value(value)
    }
}

/// A node's binding to a named style for one property.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StyleRef {
    /// No style bound; the value is set directly on the node.
    #[default]
    Unbound,
    /// Bound to a named style.
    Bound(StyleId),
    /// Sub-ranges of the node are bound to different styles.
    Mixed,
}

impl StyleRef {
    /// Creates a reference from a raw host id. An empty id means unbound.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            StyleRef::Unbound
        } else {
            StyleRef::Bound(StyleId::parse(raw))
        }
    }

    /// Returns the bound style id, if any.
    pub fn bound(&self) -> Option<&StyleId> {
        match self {
            StyleRef::Bound(id) => Some(id),
            StyleRef::Unbound | StyleRef::Mixed => None,
        }
    }
}

/// Accepts only the marker string.
struct MixedTag;

impl<'de> Deserialize<'de> for MixedTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == MIXED_MARKER {
            Ok(MixedTag)
        } else {
            Err(de::Error::custom(format!("expected {:?}", MIXED_MARKER)))
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MixableRepr<T> {
    Mixed(MixedTag),
    Value(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Mixable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match MixableRepr::<T>::deserialize(deserializer)? {
            MixableRepr::Mixed(_) => Mixable::Mixed,
            MixableRepr::Value(v) => Mixable::Value(v),
        })
    }
}

impl<T: Serialize> Serialize for Mixable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Mixable::Value(v) => v.serialize(serializer),
            Mixable::Mixed => serializer.serialize_str(MIXED_MARKER),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StyleRefRepr {
    Mixed(MixedTag),
    Id(Option<String>),
}

impl<'de> Deserialize<'de> for StyleRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match StyleRefRepr::deserialize(deserializer)? {
            StyleRefRepr::Mixed(_) => StyleRef::Mixed,
            StyleRefRepr::Id(raw) => StyleRef::from_raw(raw.as_deref().unwrap_or_default()),
        })
    }
}

impl Serialize for StyleRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleRef::Unbound => serializer.serialize_str(""),
            StyleRef::Bound(id) => serializer.serialize_str(id.as_str()),
            StyleRef::Mixed => serializer.serialize_str(MIXED_MARKER),
        }
    }
}
