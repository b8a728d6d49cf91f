//! The package generator pipeline.
//!
//! A run moves through a fixed sequence of stages:
//!
//! ```text
//! Start -> ConfigsParsed -> FilesWritten -> ToolchainInvoked -> Done
//! ```
//!
//! Any unrecoverable error moves the run to [`GenStage::Aborted`];
//! [`GenError::stage`] tells the last stage that completed. Descriptor parse
//! failures are not unrecoverable: they are reported in
//! [`GenReport::failures`] and the run continues without them.

mod config;

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::bootfs::{BootfsOutputs, ensure_gen_dir, write_bootfs};
use crate::collect::{ConfigFailure, collect};
use crate::gn::write_group;
use crate::toolchain::ToolchainError;

pub use config::{GenConfig, PACKAGES_ENV, ROOT_ENV, default_packages, parse_package_list};

/// Fatal errors of a generator run, one variant per failing step.
#[derive(Debug, Error)]
pub enum GenError {
  #[error("failed to resolve project root {}: {source}", path.display())]
  ResolveRoot { path: PathBuf, source: std::io::Error },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateOutDir { path: PathBuf, source: std::io::Error },

  #[error("failed to write build file {}: {source}", path.display())]
  WriteBuildFile { path: PathBuf, source: std::io::Error },

  #[error("failed to write bootfs file {}: {source}", path.display())]
  WriteBootfs { path: PathBuf, source: std::io::Error },

  #[error(transparent)]
  Toolchain(#[from] ToolchainError),
}

impl GenError {
  /// The last stage completed before the run aborted.
  pub fn stage(&self) -> GenStage {
    match self {
      GenError::ResolveRoot { .. } => GenStage::Start,
      GenError::CreateOutDir { .. } | GenError::WriteBuildFile { .. } | GenError::WriteBootfs { .. } => {
        GenStage::ConfigsParsed
      }
      GenError::Toolchain(_) => GenStage::FilesWritten,
    }
  }
}

/// Stages of a generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenStage {
  Start,
  ConfigsParsed,
  FilesWritten,
  ToolchainInvoked,
  Done,
  Aborted,
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct GenReport {
  /// Number of descriptors that contributed to the outputs.
  pub packages: usize,
  pub labels: usize,
  pub binaries: usize,
  /// Descriptors that were skipped.
  pub failures: Vec<ConfigFailure>,
  /// The generated build group file.
  pub build_file: PathBuf,
  pub bootfs: BootfsOutputs,
  pub stage: GenStage,
}

/// Run the whole pipeline described by `config`.
pub fn generate(config: &GenConfig) -> Result<GenReport, GenError> {
  generate_with(config, |_| {})
}

/// Like [`generate`], calling `on_failure` for every skipped descriptor as
/// soon as collection finishes, before any file is written.
pub fn generate_with<F>(config: &GenConfig, on_failure: F) -> Result<GenReport, GenError>
where
  F: FnMut(&ConfigFailure),
{
  let mut stage = GenStage::Start;
  debug!(?stage, root = %config.root.display(), packages = config.packages.len(), "starting generator");

  run_stages(config, &mut stage, on_failure).inspect_err(|err| {
    debug!(failed_after = ?err.stage(), error = %err, "generator failed");
    advance(stage, GenStage::Aborted);
  })
}

fn run_stages<F>(config: &GenConfig, stage: &mut GenStage, mut on_failure: F) -> Result<GenReport, GenError>
where
  F: FnMut(&ConfigFailure),
{
  let collection = collect(config.package_paths());
  for failure in &collection.failures {
    on_failure(failure);
  }
  *stage = advance(*stage, GenStage::ConfigsParsed);

  // Nothing is written if the output directory cannot be created.
  ensure_gen_dir(&config.outdir)?;
  let build_file = config.build_file();
  write_group(&build_file, &collection.state.labels)?;
  let bootfs = write_bootfs(&collection.state.binaries, &config.outdir)?;
  *stage = advance(*stage, GenStage::FilesWritten);

  config.gn_invocation().run()?;
  *stage = advance(*stage, GenStage::ToolchainInvoked);

  *stage = advance(*stage, GenStage::Done);

  Ok(GenReport {
    packages: config.packages.len() - collection.failures.len(),
    labels: collection.state.labels.len(),
    binaries: collection.state.binaries.len(),
    failures: collection.failures,
    build_file,
    bootfs,
    stage: *stage,
  })
}

fn advance(from: GenStage, to: GenStage) -> GenStage {
  debug!(?from, ?to, "generator stage");
  to
}
