//! Tera rendering engine — [`DocumentKind`] and [`Renderer`].
//!
//! # Documents
//!
//! | Kind    | Template             | Default output           |
//! |---------|----------------------|--------------------------|
//! | Kconfig | `kconfig.psa.tera`   | `Kconfig.psa`            |
//! | Header  | `config_psa.h.tera`  | `configs/config-psa.h`   |
//!
//! Output must be byte-stable: check mode compares it against files on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tera::Tera;

use psa_core::{GenConfig, Symbol};

use crate::context::TemplateContext;
use crate::error::RenderError;

/// Template text for `kind`: `<override_dir>/<template name>` when that file
/// exists, the embedded default otherwise.
fn template_source(kind: DocumentKind, override_dir: Option<&Path>) -> Result<String, RenderError> {
    let Some(path) = override_dir.map(|dir| dir.join(kind.template_name())) else {
        return Ok(kind.embedded_template().to_string());
    };
    match std::fs::read_to_string(&path) {
        // Windows checkouts may carry CRLF; the documents are LF only.
        Ok(text) => Ok(text.replace("\r\n", "\n")),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(kind.embedded_template().to_string()),
        Err(source) => Err(RenderError::Io { path, source }),
    }
}

fn build_tera(override_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    // Paths in provenance comments must come out verbatim.
    tera.autoescape_on(vec![]);
    for kind in DocumentKind::all() {
        let source = template_source(*kind, override_dir)?;
        tera.add_raw_template(kind.template_name(), &source)?;
    }
    Ok(tera)
}

// ---------------------------------------------------------------------------
// DocumentKind
// ---------------------------------------------------------------------------

/// The two generated documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Kconfig schema: one boolean option per symbol.
    Kconfig,
    /// C header mapping `CONFIG_PSA_WANT_*` back onto `PSA_WANT_*`.
    Header,
}

impl DocumentKind {
    /// All kinds in a stable order (Kconfig first, as it is written first).
    pub fn all() -> &'static [DocumentKind] {
        &[DocumentKind::Kconfig, DocumentKind::Header]
    }

    /// Template text compiled into the binary.
    pub fn embedded_template(&self) -> &'static str {
        match self {
            DocumentKind::Kconfig => include_str!("templates/kconfig.psa.tera"),
            DocumentKind::Header  => include_str!("templates/config_psa.h.tera"),
        }
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            DocumentKind::Kconfig => "kconfig.psa.tera",
            DocumentKind::Header  => "config_psa.h.tera",
        }
    }

    /// Where this document lives under `config`.
    pub fn output_path(&self, config: &GenConfig) -> PathBuf {
        match self {
            DocumentKind::Kconfig => config.kconfig_path(),
            DocumentKind::Header  => config.header_path(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Kconfig => "Kconfig",
            DocumentKind::Header  => "header",
        }
    }
}

// ---------------------------------------------------------------------------
// RenderedDocument
// ---------------------------------------------------------------------------

/// A rendered document paired with its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub kind: DocumentKind,
    pub path: PathBuf,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based renderer with embedded templates and optional overrides.
///
/// `override_dir` may contain `.tera` files named after
/// [`DocumentKind::template_name`]; they replace the embedded defaults.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a renderer from the embedded templates only.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_overrides(None)
    }

    /// Construct a renderer, letting templates in `override_dir` replace the
    /// embedded ones by name.
    pub fn with_overrides(override_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(override_dir)?;
        Ok(Renderer { tera })
    }

    /// Render one document. Pure: the same context always yields the same text.
    pub fn render(&self, ctx: &TemplateContext, kind: DocumentKind) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera()?;
        let rendered = self.tera.render(kind.template_name(), &tera_ctx)?;
        Ok(rendered)
    }

    /// Render every [`DocumentKind`] for `symbols`, paired with the output
    /// paths from `config`.
    pub fn render_all(
        &self,
        config: &GenConfig,
        symbols: &[Symbol],
    ) -> Result<Vec<RenderedDocument>, RenderError> {
        let ctx = TemplateContext::new(config, symbols);
        DocumentKind::all()
            .iter()
            .map(|kind| {
                Ok(RenderedDocument {
                    kind: *kind,
                    path: kind.output_path(config),
                    content: self.render(&ctx, *kind)?,
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
