//! # psa-renderer
//!
//! Tera-based rendering of the two documents derived from the `PSA_WANT_*`
//! symbol list: the Kconfig schema and the C bridge header.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use psa_core::{GenConfig, Symbol};
//! use psa_renderer::{DocumentKind, Renderer, TemplateContext};
//!
//! fn render_all(config: &GenConfig, symbols: &[Symbol]) {
//!     if let Ok(renderer) = Renderer::new() {
//!         let ctx = TemplateContext::new(config, symbols);
//!         for kind in DocumentKind::all() {
//!             if let Ok(content) = renderer.render(&ctx, *kind) {
//!                 println!("{}: {} bytes", kind.label(), content.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::{DocumentKind, RenderedDocument, Renderer};
pub use error::RenderError;
