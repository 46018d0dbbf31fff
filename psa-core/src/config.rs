//! Run configuration — where the input header is and where the two generated
//! documents go.
//!
//! Every relative path resolves against [`GenConfig::module_dir`], which
//! defaults to the directory holding the running executable. Absolute
//! paths pass through untouched.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Input header, relative to the module directory.
pub const DEFAULT_INPUT: &str = "../../../modules/crypto/mbedtls/include/psa/crypto_config.h";
/// Generated Kconfig schema, relative to the module directory.
pub const DEFAULT_KCONFIG_OUTPUT: &str = "Kconfig.psa";
/// Generated C header, relative to the module directory.
pub const DEFAULT_HEADER_OUTPUT: &str = "configs/config-psa.h";
/// Generator name written into the provenance comments of both documents.
pub const DEFAULT_GENERATOR: &str = "create_psa_files.py";

/// Paths and provenance for a single generate/check run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    pub module_dir: PathBuf,
    pub input: PathBuf,
    pub kconfig_output: PathBuf,
    pub header_output: PathBuf,
    pub generator: String,
    /// Input path written into the provenance comments. Fixed text, so
    /// pointing `input` at the same header another way keeps outputs stable.
    pub provenance: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            module_dir: tool_dir(),
            input: PathBuf::from(DEFAULT_INPUT),
            kconfig_output: PathBuf::from(DEFAULT_KCONFIG_OUTPUT),
            header_output: PathBuf::from(DEFAULT_HEADER_OUTPUT),
            generator: DEFAULT_GENERATOR.to_string(),
            provenance: DEFAULT_INPUT.to_string(),
        }
    }
}

impl GenConfig {
    /// Default layout rooted at `module_dir`.
    pub fn with_module_dir(module_dir: impl Into<PathBuf>) -> Self {
        Self {
            module_dir: module_dir.into(),
            ..Self::default()
        }
    }

    /// Load a YAML config file. Fields left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`GenConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Resolve `rel` against the module directory.
    pub fn resolve(&self, rel: &Path) -> PathBuf {
        if rel.is_absolute() {
            rel.to_path_buf()
        } else {
            normalize(&self.module_dir.join(rel))
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.resolve(&self.input)
    }

    pub fn kconfig_path(&self) -> PathBuf {
        self.resolve(&self.kconfig_output)
    }

    pub fn header_path(&self) -> PathBuf {
        self.resolve(&self.header_output)
    }

    /// Input path as recorded in the provenance comments, `/`-separated.
    pub fn provenance_input(&self) -> String {
        self.provenance.replace('\\', "/")
    }
}

/// Directory of the running executable; `.` if it cannot be determined.
pub fn tool_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Lexically fold `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
