//! Local-first candidate resolution across catalog tiers.

use designlint_model::{Document, StyleCatalog, LOCAL_LIBRARY};

use crate::matchers::{MatchStrength, StyleMatcher, Tier};
use crate::report::{ErrorRecord, StyleCandidate};

/// The catalogs available to a lint pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalogs<'a> {
    /// The document's own styles.
    pub local: Option<&'a StyleCatalog>,
    /// External libraries, in enumeration order.
    pub libraries: &'a [StyleCatalog],
}

impl<'a> Catalogs<'a> {
    pub fn new(local: Option<&'a StyleCatalog>, libraries: &'a [StyleCatalog]) -> Self {
        Self { local, libraries }
    }

    /// No catalogs at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_document(doc: &'a Document) -> Self {
        Self::new(doc.local_styles.as_ref(), &doc.libraries)
    }
}

/// Exact matches and suggestions found for one node property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub matches: Vec<StyleCandidate>,
    pub suggestions: Vec<StyleCandidate>,
}

impl Resolution {
    /// Attaches the resolution to an error: matches when any were found,
    /// else suggestions when any were found, else nothing.
    pub fn attach_to(self, error: ErrorRecord) -> ErrorRecord {
        if !self.matches.is_empty() {
            error.with_matches(self.matches)
        } else if !self.suggestions.is_empty() {
            error.with_suggestions(self.suggestions)
        } else {
            error
        }
    }

    fn collect<M: StyleMatcher>(
        &mut self,
        matcher: &M,
        catalog: &StyleCatalog,
        tier: Tier,
        source: &str,
    ) {
        for entry in matcher.entries(catalog) {
            match matcher.classify(entry, tier) {
                Some(MatchStrength::Exact) => self.matches.push(matcher.candidate(entry, source)),
                Some(MatchStrength::Close) => {
                    self.suggestions.push(matcher.candidate(entry, source))
                }
                None => {}
            }
        }
    }
}

/// Scans the local catalog, then the libraries if the local catalog produced
/// no exact match.
///
/// Enumeration order is preserved and nothing is truncated or deduplicated.
pub fn resolve_candidates<M: StyleMatcher>(matcher: &M, catalogs: &Catalogs<'_>) -> Resolution {
    let mut resolution = Resolution::default();

    if let Some(local) = catalogs.local {
        resolution.collect(matcher, local, Tier::Local, LOCAL_LIBRARY);
    }

    if resolution.matches.is_empty() {
        for library in catalogs.libraries {
            resolution.collect(matcher, library, Tier::Library, &library.name);
        }
    }

    resolution
}
