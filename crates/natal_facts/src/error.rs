//! Error types for fact stores and their configuration.

use std::path::PathBuf;

/// Failure of the fact-store collaborator.
///
/// A missing (body, sign, house) combination is not an error; lookups
/// return `Ok(None)` for it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("fact store unavailable: {0}")]
    Unavailable(String),
    /// The backing store rejected or failed a query.
    #[error("fact store query failed: {0}")]
    Query(String),
    /// Reading a fact sheet from disk failed.
    #[error("cannot read fact sheet {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A fact sheet was not valid JSON or did not match the schema.
    #[error("invalid fact sheet: {0}")]
    Parse(#[from] serde_json::Error),
    /// The store configuration did not validate.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Invalid store configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A fact-sheet source was selected with an empty path.
    #[error("fact sheet path must not be empty")]
    EmptyPath,
    /// The configured fact sheet does not exist.
    #[error("fact sheet not found: {}", .0.display())]
    MissingFile(PathBuf),
}
