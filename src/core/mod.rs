//! Core types shared by the pruners and the command layer.
//!
//! - [`HelperError`] and [`ErrorContext`] for failures
//! - [`OperationIdSet`] for the validated identifier set
//! - [`PruneOutcome`] for what a single-document prune did

pub mod error;
mod operation_ids;

pub use error::{ErrorContext, HelperError, user_friendly_error};
pub use operation_ids::OperationIdSet;

/// Result of pruning one document.
///
/// Only [`PruneOutcome::Pruned`] means the file on disk was rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneOutcome {
    /// The document does not exist; nothing was read or written.
    Missing,
    /// The document has no workflow list to filter.
    NoWorkflows,
    /// The document was read but none of the requested IDs were present.
    Unchanged,
    /// `removed` entries were deleted and the document was rewritten.
    Pruned {
        /// Number of entries deleted
        removed: usize,
    },
}

impl PruneOutcome {
    /// Number of entries removed from the document.
    #[must_use]
    pub const fn removed(&self) -> usize {
        match self {
            Self::Pruned {
                removed,
            } => *removed,
            _ => 0,
        }
    }

    /// Whether the document on disk was rewritten.
    #[must_use]
    pub const fn rewrote(&self) -> bool {
        matches!(self, Self::Pruned { .. })
    }
}
