//! Configuration of the package generator.
//!
//! Everything the pipeline reads is carried in [`GenConfig`]. The CLI builds
//! it from the environment with [`GenConfig::from_env`]; library callers may
//! construct it directly with any package list.

use std::path::{Path, PathBuf};

use crate::consts::{DEFAULT_PACKAGES, SCRIPT_EXECUTABLE};
use crate::pipeline::GenError;
use crate::toolchain::GnInvocation;

/// Environment variable overriding the project root.
pub const ROOT_ENV: &str = "PKGGEN_ROOT";

/// Environment variable holding the comma-separated package list.
pub const PACKAGES_ENV: &str = "PKGGEN_PACKAGES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
  /// Project root, passed to the generator as `--root`.
  pub root: PathBuf,
  /// Directory holding the package descriptors and the generated `BUILD.gn`.
  pub packages_dir: PathBuf,
  /// Descriptor file names, read in this order.
  pub packages: Vec<String>,
  /// Absolute build output directory.
  pub outdir: PathBuf,
  /// Build-graph generator binary.
  pub gn: PathBuf,
  /// Generator dot-config file.
  pub dotfile: PathBuf,
  pub script_executable: PathBuf,
}

impl GenConfig {
  /// Derive the standard layout from a project root.
  ///
  /// A relative `outdir` is resolved against `root`.
  pub fn new(root: impl Into<PathBuf>, outdir: impl AsRef<Path>, packages: Vec<String>) -> Self {
    let root = root.into();
    let packages_dir = root.join("packages");
    Self {
      outdir: root.join(outdir),
      gn: root.join("buildtools").join("gn"),
      dotfile: packages_dir.join("dot_gn"),
      script_executable: PathBuf::from(SCRIPT_EXECUTABLE),
      packages_dir,
      packages,
      root,
    }
  }

  /// Build the configuration from `PKGGEN_ROOT` and `PKGGEN_PACKAGES`.
  ///
  /// The root defaults to the current directory and is canonicalized.
  pub fn from_env(outdir: impl AsRef<Path>) -> Result<Self, GenError> {
    let root = match std::env::var_os(ROOT_ENV) {
      Some(root) if !root.is_empty() => PathBuf::from(root),
      _ => std::env::current_dir().map_err(|e| GenError::ResolveRoot {
        path: PathBuf::from("."),
        source: e,
      })?,
    };
    let root = dunce::canonicalize(&root).map_err(|e| GenError::ResolveRoot { path: root, source: e })?;

    let packages = match std::env::var(PACKAGES_ENV) {
      Ok(list) => parse_package_list(&list),
      Err(_) => default_packages(),
    };

    Ok(Self::new(root, outdir, packages))
  }

  /// Paths of the package descriptors, in order.
  pub fn package_paths(&self) -> Vec<PathBuf> {
    self.packages.iter().map(|name| self.packages_dir.join(name)).collect()
  }

  /// Path of the generated build group file.
  pub fn build_file(&self) -> PathBuf {
    self.packages_dir.join("BUILD.gn")
  }

  pub fn gn_invocation(&self) -> GnInvocation {
    GnInvocation {
      program: self.gn.clone(),
      outdir: self.outdir.clone(),
      root: self.root.clone(),
      dotfile: self.dotfile.clone(),
      script_executable: self.script_executable.clone(),
    }
  }
}

pub fn default_packages() -> Vec<String> {
  DEFAULT_PACKAGES.iter().map(|s| s.to_string()).collect()
}

/// Split a comma-separated package list, dropping empty entries.
pub fn parse_package_list(list: &str) -> Vec<String> {
  list
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(String::from)
    .collect()
}
