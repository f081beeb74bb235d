//! Applying a chosen candidate back to the host document.
//!
//! The engine never mutates nodes. A host implements [`StyleApplier`] and
//! [`apply_fix`] forwards the user's choice to it.

use designlint_model::NodeRef;

use crate::report::{ErrorKind, ErrorRecord, StyleCandidate};

/// Errors from applying a fix.
#[derive(Debug, thiserror::Error)]
pub enum FixError {
    #[error("no candidate styles for {kind} error on node {node_id}")]
    NoCandidates { node_id: String, kind: ErrorKind },

    #[error("candidate {choice} out of range ({available} available)")]
    ChoiceOutOfRange { choice: usize, available: usize },

    #[error("host failed to apply style: {0}")]
    Host(String),
}

/// Binds a node property to a catalog style in the host document.
pub trait StyleApplier {
    fn apply_style(
        &mut self,
        node: &NodeRef,
        kind: ErrorKind,
        candidate: &StyleCandidate,
    ) -> Result<(), FixError>;
}

/// Applies candidate `choice` of `error` through `applier`.
///
/// Candidates are taken from the error's matches, or its suggestions when it
/// has no matches. Returns the candidate that was applied.
pub fn apply_fix<'e, A>(
    error: &'e ErrorRecord,
    choice: usize,
    applier: &mut A,
) -> Result<&'e StyleCandidate, FixError>
where
    A: StyleApplier + ?Sized,
{
    let candidates = error.alternatives();
    if candidates.is_empty() {
        return Err(FixError::NoCandidates {
            node_id: error.node.id.clone(),
            kind: error.kind,
        });
    }

    let candidate = candidates.get(choice).ok_or(FixError::ChoiceOutOfRange {
        choice,
        available: candidates.len(),
    })?;

    applier.apply_style(&error.node, error.kind, candidate)?;
    Ok(candidate)
}
