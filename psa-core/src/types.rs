//! Domain types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A feature-flag macro name such as `PSA_WANT_ALG_SHA_256`.
///
/// Holds the full name, prefix included. Extraction guarantees the prefix;
/// values built by hand through [`From`] are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub String);

impl Symbol {
    /// Namespace every extracted flag starts with.
    pub const PREFIX: &'static str = "PSA_WANT_";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name with [`Symbol::PREFIX`] removed, e.g. `ALG_SHA_256`.
    pub fn feature(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}
