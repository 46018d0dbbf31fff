//! Check mode: compare freshly rendered documents with what is on disk.
//!
//! Nothing here writes to the filesystem. Existing files are read in text
//! mode, so CRLF line endings compare equal to LF.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use psa_renderer::RenderedDocument;

/// Result of checking one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// On-disk content equals the rendered content.
    Current,
    /// On-disk content differs; `unified_diff` goes from disk to rendered.
    Stale { unified_diff: String },
    /// The file is missing or could not be read.
    Unreadable { reason: String },
}

impl Verdict {
    pub fn is_current(&self) -> bool {
        matches!(self, Verdict::Current)
    }
}

/// Verdicts for every document of a run, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckReport {
    pub verdicts: Vec<(PathBuf, Verdict)>,
}

impl CheckReport {
    /// `true` when every document is current.
    pub fn is_current(&self) -> bool {
        self.verdicts.iter().all(|(_, v)| v.is_current())
    }

    /// Paths of documents that are stale or unreadable.
    pub fn stale_paths(&self) -> Vec<&Path> {
        self.verdicts
            .iter()
            .filter(|(_, v)| !v.is_current())
            .map(|(p, _)| p.as_path())
            .collect()
    }
}

/// Compare one rendered document against its file on disk.
///
/// `diff_root` only shortens the paths shown in diff headers.
pub fn check_document(doc: &RenderedDocument, diff_root: &Path) -> Verdict {
    let existing = match std::fs::read_to_string(&doc.path) {
        Ok(content) => normalize_line_endings(&content),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!("missing: {}", doc.path.display());
            return Verdict::Unreadable {
                reason: "file not found".to_string(),
            };
        }
        Err(err) => {
            tracing::warn!("unreadable: {}: {err}", doc.path.display());
            return Verdict::Unreadable {
                reason: err.to_string(),
            };
        }
    };

    if existing == doc.content {
        tracing::debug!("current: {}", doc.path.display());
        return Verdict::Current;
    }

    tracing::warn!("stale: {}", doc.path.display());
    let relative = doc.path.strip_prefix(diff_root).unwrap_or(doc.path.as_path());
    let old_header = format!("a/{}", relative.display());
    let new_header = format!("b/{}", relative.display());
    let unified_diff = TextDiff::from_lines(&existing, &doc.content)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();
    Verdict::Stale { unified_diff }
}

/// Check every document. All documents are checked even after a mismatch,
/// so the report names each stale file.
pub fn check_documents(docs: &[RenderedDocument], diff_root: &Path) -> CheckReport {
    CheckReport {
        verdicts: docs
            .iter()
            .map(|doc| (doc.path.clone(), check_document(doc, diff_root)))
            .collect(),
    }
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
