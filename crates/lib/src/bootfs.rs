//! Boot filesystem manifest and depfile.
//!
//! The manifest maps every bootfs destination to the absolute path of the
//! artifact in the build output directory, one `dest=src` record per line.
//! The depfile tells the build system to regenerate the bootfs image when any
//! listed binary changes. Its syntax is consumed verbatim by the build tool:
//!
//! ```text
//! user.bootfs: gen/packages/mkbootfs/user.bootfs.manifest bin/a bin/b
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::consts::{BOOTFS_DEPFILE, BOOTFS_GEN_DIR, BOOTFS_MANIFEST, BOOTFS_TARGET};
use crate::package::BinaryEntry;
use crate::pipeline::GenError;

/// Paths of the files written by [`write_bootfs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootfsOutputs {
  pub manifest: PathBuf,
  pub depfile: PathBuf,
}

/// Render the manifest, resolving each binary against `outdir`.
pub fn render_manifest(binaries: &[BinaryEntry], outdir: &Path) -> String {
  let mut out = String::new();
  for entry in binaries {
    let _ = writeln!(out, "{}={}", entry.bootfs_path, outdir.join(&entry.binary).display());
  }
  out
}

/// Render the depfile line for the manifest.
pub fn render_depfile(binaries: &[BinaryEntry]) -> String {
  let mut out = format!("{}: {}/{}", BOOTFS_TARGET, BOOTFS_GEN_DIR, BOOTFS_MANIFEST);
  for entry in binaries {
    out.push(' ');
    out.push_str(&entry.binary);
  }
  out.push('\n');
  out
}

/// Create `<outdir>/gen/packages/mkbootfs` if it is missing.
///
/// Runs before any output of the pipeline is written.
pub fn ensure_gen_dir(outdir: &Path) -> Result<PathBuf, GenError> {
  let gen_dir = outdir.join(BOOTFS_GEN_DIR);
  if !gen_dir.is_dir() {
    debug!(path = %gen_dir.display(), "creating bootfs gen directory");
    fs::create_dir_all(&gen_dir).map_err(|e| GenError::CreateOutDir {
      path: gen_dir.clone(),
      source: e,
    })?;
  }
  Ok(gen_dir)
}

/// Write the manifest and depfile under `<outdir>/gen/packages/mkbootfs`.
///
/// The directory must exist; see [`ensure_gen_dir`].
pub fn write_bootfs(binaries: &[BinaryEntry], outdir: &Path) -> Result<BootfsOutputs, GenError> {
  let gen_dir = outdir.join(BOOTFS_GEN_DIR);

  let manifest = gen_dir.join(BOOTFS_MANIFEST);
  fs::write(&manifest, render_manifest(binaries, outdir)).map_err(|e| GenError::WriteBootfs {
    path: manifest.clone(),
    source: e,
  })?;
  info!(path = %manifest.display(), entries = binaries.len(), "wrote bootfs manifest");

  let depfile = gen_dir.join(BOOTFS_DEPFILE);
  fs::write(&depfile, render_depfile(binaries)).map_err(|e| GenError::WriteBootfs {
    path: depfile.clone(),
    source: e,
  })?;
  info!(path = %depfile.display(), "wrote bootfs depfile");

  Ok(BootfsOutputs { manifest, depfile })
}
