//! Error types for psa-sync.

use std::path::PathBuf;

use thiserror::Error;

use psa_core::ExtractError;
use psa_renderer::RenderError;

/// All errors that can arise from a generate or check run.
///
/// A stale document in check mode is not an error; it is reported through
/// [`CheckReport`](crate::CheckReport).
#[derive(Debug, Error)]
pub enum SyncError {
    /// The input header could not be read.
    #[error("extract error: {0}")]
    Extract(#[from] ExtractError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
