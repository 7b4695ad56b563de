//! Error types for quarrel-fetch

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors surfaced by the ordered slice fetcher.
///
/// Cancellation is not an error: a canceled fetch just ends its stream
/// early.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("total item count query failed")]
    TotalItems(#[source] anyhow::Error),

    #[error("element fetch failed at index {index}")]
    Element {
        index: u64,
        #[source]
        source: anyhow::Error,
    },
}

impl FetchError {
    /// The collection index the failure is attributable to, if any.
    pub fn index(&self) -> Option<u64> {
        match self {
            FetchError::TotalItems(_) => None,
            FetchError::Element { index, .. } => Some(*index),
        }
    }
}
