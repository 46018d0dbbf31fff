//! # psa-sync
//!
//! Generate-or-verify orchestration for the PSA Kconfig and header documents.
//!
//! Call [`pipeline::run`] with a [`GenConfig`](psa_core::GenConfig) and a
//! [`Mode`]: [`Mode::Generate`] writes both documents, [`Mode::Check`]
//! compares them against what is on disk and writes nothing.

pub mod check;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use check::{check_document, check_documents, CheckReport, Verdict};
pub use error::SyncError;
pub use pipeline::{run, Mode, Outcome};
pub use writer::{write_document, WriteResult};
