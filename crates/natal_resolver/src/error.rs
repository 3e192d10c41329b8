//! Error types for resolution.

use natal_facts::StoreError;

/// Errors from resolving a placement.
///
/// Classification and rendering cannot fail; only the fact store can.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// The fact store failed. Surfaced as-is, without retry.
    #[error(transparent)]
    Store(#[from] StoreError),
}
