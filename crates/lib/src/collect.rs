//! Aggregation of package descriptors.
//!
//! Descriptors are read in the order given. Every descriptor that loads
//! contributes its label and binaries; every one that fails is recorded as a
//! [`ConfigFailure`] and contributes nothing.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::package::{BinaryEntry, PackageDescriptor, PackageError, load_descriptor};

/// Labels and binaries accumulated across all descriptors.
///
/// Both sequences keep input order. Nothing is deduplicated or sorted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregateState {
  pub labels: Vec<String>,
  pub binaries: Vec<BinaryEntry>,
}

impl AggregateState {
  /// Append one descriptor's contributions.
  pub fn push(&mut self, descriptor: PackageDescriptor) {
    self.labels.push(descriptor.label);
    self.binaries.extend(descriptor.binaries);
  }
}

/// A descriptor that was skipped.
#[derive(Debug)]
pub struct ConfigFailure {
  pub path: PathBuf,
  pub error: PackageError,
}

/// Outcome of collecting a set of descriptors.
#[derive(Debug, Default)]
pub struct Collection {
  pub state: AggregateState,
  pub failures: Vec<ConfigFailure>,
}

/// Load every descriptor in `paths` and aggregate the ones that parse.
pub fn collect<I, P>(paths: I) -> Collection
where
  I: IntoIterator<Item = P>,
  P: AsRef<Path>,
{
  let mut collection = Collection::default();

  for path in paths {
    let path = path.as_ref();
    match load_descriptor(path) {
      Ok(descriptor) => collection.state.push(descriptor),
      Err(e) => {
        warn!(path = %path.display(), error = %e, "skipping package config");
        collection.failures.push(ConfigFailure {
          path: path.to_path_buf(),
          error: e,
        });
      }
    }
  }

  collection
}
