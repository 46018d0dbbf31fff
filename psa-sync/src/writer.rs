//! Atomic document writer.
//!
//! ## `write_document` protocol
//!
//! 1. Normalise line endings of the rendered content to LF.
//! 2. Read the current file, if any; identical bytes → leave it alone.
//! 3. Stage the content in `<path>.psa.tmp` next to the target.
//! 4. Rename over the target (atomic on POSIX), replacing the old content.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{io_err, SyncError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File already held exactly this content and was not touched.
    Unchanged { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::Unchanged { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// write_document
// ---------------------------------------------------------------------------

/// Atomically replace `path` with `content`.
///
/// Parent directories are created as needed. On failure the original file is
/// left intact and the temporary file removed.
pub fn write_document(path: &Path, content: &str) -> Result<WriteResult, SyncError> {
    let tmp = PathBuf::from(format!("{}.psa.tmp", path.display()));
    write_document_with_tmp(path, content, &tmp)
}

fn write_document_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<WriteResult, SyncError> {
    let content = content.replace("\r\n", "\n");

    if on_disk(path)?.as_deref() == Some(content.as_bytes()) {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    replace_via_tmp(path, tmp, &content)?;
    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

/// Current bytes at `path`, `None` when the document was never generated.
fn on_disk(path: &Path) -> Result<Option<Vec<u8>>, SyncError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

/// Stage `content` in `tmp`, then rename it over `path`. A failed rename
/// removes `tmp` and leaves `path` as it was.
fn replace_via_tmp(path: &Path, tmp: &Path, content: &str) -> Result<(), SyncError> {
    for dir in [path.parent(), tmp.parent()].into_iter().flatten() {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;
    std::fs::rename(tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(tmp);
        io_err(path, e)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
