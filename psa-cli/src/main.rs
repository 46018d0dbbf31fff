//! psa-gen — derive the PSA Kconfig schema and bridge header from
//! `crypto_config.h`.
//!
//! # Usage
//!
//! ```text
//! psa-gen [--module-dir <DIR>] [--input <PATH>] [--config <FILE>] [--templates <DIR>]
//! psa-gen --check [...]
//! ```
//!
//! Exit status: 0 on success, 1 when `--check` finds stale files or any
//! input/output fails, 2 on usage errors.

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use psa_core::GenConfig;
use psa_sync::{pipeline, Mode};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "psa-gen",
    version,
    about = "Generate Kconfig.psa and config-psa.h from the PSA_WANT_* defines in crypto_config.h",
    long_about = None,
)]
struct Cli {
    /// Verify the generated files are up to date instead of writing them.
    #[arg(long)]
    check: bool,

    /// Directory all relative paths resolve from (default: directory of this executable).
    #[arg(long, value_name = "DIR")]
    module_dir: Option<PathBuf>,

    /// Input header, relative to the module directory.
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// YAML file with module_dir / input / kconfig_output / header_output / generator.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory of `.tera` files overriding the embedded templates.
    #[arg(long, value_name = "DIR")]
    templates: Option<PathBuf>,
}

impl Cli {
    /// Config file first, then command-line overrides.
    fn gen_config(&self) -> Result<GenConfig> {
        let mut config = match &self.config {
            Some(path) => GenConfig::load(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?,
            None => GenConfig::default(),
        };
        if let Some(dir) = &self.module_dir {
            config.module_dir = dir.clone();
        }
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        Ok(config)
    }

    fn mode(&self) -> Mode {
        if self.check {
            Mode::Check
        } else {
            Mode::Generate
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = cli.gen_config()?;
    log::debug!("config: {config:?}");

    let outcome = pipeline::run(&config, cli.mode(), cli.templates.as_deref())
        .with_context(|| format!("psa-gen failed for '{}'", config.input_path().display()))?;

    report::print_outcome(&outcome);
    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
