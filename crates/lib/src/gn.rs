//! Generated build-graph group file.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::consts::BOOTSTRAP_TARGET;
use crate::pipeline::GenError;

/// Render the `default` group depending on the bootstrap target and `labels`.
///
/// Labels are written verbatim in the given order.
pub fn render_group<S: AsRef<str>>(labels: &[S]) -> String {
  let mut out = String::new();
  out.push('\n');
  out.push_str("# NOTE: This file is auto-generated by pkggen. Do not edit by hand.\n");
  out.push('\n');
  out.push_str("group(\"default\") {\n");
  out.push_str("  testonly = true\n");
  out.push_str("  deps = [\n");
  let _ = writeln!(out, "    \"{}\",", BOOTSTRAP_TARGET);
  for label in labels {
    let _ = writeln!(out, "    \"{}\",", label.as_ref());
  }
  out.push_str("  ]\n");
  out.push_str("}\n");
  out
}

/// Write the group file to `path`, replacing any existing file.
pub fn write_group<S: AsRef<str>>(path: &Path, labels: &[S]) -> Result<(), GenError> {
  fs::write(path, render_group(labels)).map_err(|e| GenError::WriteBuildFile {
    path: path.to_path_buf(),
    source: e,
  })?;
  info!(path = %path.display(), labels = labels.len(), "wrote build group");
  Ok(())
}
