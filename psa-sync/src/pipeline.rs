//! Pipeline entrypoint: extract, render, then write or verify.

use std::path::Path;

use psa_core::{extract_from_file, GenConfig};
use psa_renderer::Renderer;

use crate::check::{check_documents, CheckReport};
use crate::writer::{write_document, WriteResult};
use crate::SyncError;

/// What a run does with the rendered documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Overwrite both output files.
    #[default]
    Generate,
    /// Compare both output files with the rendered documents; write nothing.
    Check,
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated(Vec<WriteResult>),
    Checked(CheckReport),
}

impl Outcome {
    /// `false` only for a check run that found stale or unreadable files.
    pub fn is_success(&self) -> bool {
        match self {
            Outcome::Generated(_) => true,
            Outcome::Checked(report) => report.is_current(),
        }
    }
}

/// Run the pipeline for `config`.
///
/// Extraction and both renders complete before any output file is touched,
/// so an unreadable input leaves the outputs as they were. `template_dir`
/// optionally overrides the embedded templates.
pub fn run(config: &GenConfig, mode: Mode, template_dir: Option<&Path>) -> Result<Outcome, SyncError> {
    let input = config.input_path();
    let symbols = extract_from_file(&input)?;
    tracing::debug!("{} symbol(s) from {}", symbols.len(), input.display());

    let renderer = Renderer::with_overrides(template_dir)?;
    let docs = renderer.render_all(config, &symbols)?;

    match mode {
        Mode::Generate => {
            let mut writes = Vec::with_capacity(docs.len());
            for doc in &docs {
                writes.push(write_document(&doc.path, &doc.content)?);
            }
            Ok(Outcome::Generated(writes))
        }
        Mode::Check => {
            let root = config.resolve(Path::new("."));
            Ok(Outcome::Checked(check_documents(&docs, &root)))
        }
    }
}
