//! Package descriptor types.
//!
//! A package descriptor is a small JSON document naming one build-graph
//! target and the binaries it contributes to the boot filesystem:
//!
//! ```json
//! {
//!   "label": "//apps/fortune",
//!   "binaries": [
//!     { "binary": "fortune", "bootfs_path": "bin/fortune" }
//!   ]
//! }
//! ```

use serde::Deserialize;

/// One compiled artifact and where it lands in the boot filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BinaryEntry {
  /// Path of the artifact, relative to the build output directory.
  pub binary: String,
  /// Destination path inside the boot filesystem image.
  pub bootfs_path: String,
}

/// A parsed package descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageDescriptor {
  /// Build-graph label of the package.
  pub label: String,
  /// Binaries in file order.
  pub binaries: Vec<BinaryEntry>,
}
