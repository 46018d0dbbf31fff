//! psa-core — symbol types, extraction, configuration, errors.
//!
//! Public API surface:
//! - [`types`] — [`Symbol`]
//! - [`extractor`] — scan a header for `#define PSA_WANT_*` lines
//! - [`config`] — [`GenConfig`], the input/output layout of a run
//! - [`error`] — [`ExtractError`], [`ConfigError`]

pub mod config;
pub mod error;
pub mod extractor;
pub mod types;

pub use config::GenConfig;
pub use error::{ConfigError, ExtractError};
pub use extractor::{extract_from_file, extract_symbols};
pub use types::Symbol;
