//! Loading package descriptors from disk.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use types::{BinaryEntry, PackageDescriptor};

/// Errors that can occur while loading a single descriptor.
#[derive(Debug, Error)]
pub enum PackageError {
  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("failed to parse {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },
}

/// Read and parse the descriptor at `path`.
///
/// Either the whole descriptor is returned or an error; a descriptor with a
/// malformed binary entry yields no partial result.
pub fn load_descriptor(path: &Path) -> Result<PackageDescriptor, PackageError> {
  let content = fs::read_to_string(path).map_err(|e| PackageError::Read {
    path: path.to_path_buf(),
    source: e,
  })?;

  let descriptor: PackageDescriptor = serde_json::from_str(&content).map_err(|e| PackageError::Parse {
    path: path.to_path_buf(),
    source: e,
  })?;

  debug!(
    path = %path.display(),
    label = %descriptor.label,
    binaries = descriptor.binaries.len(),
    "loaded package descriptor"
  );

  Ok(descriptor)
}
