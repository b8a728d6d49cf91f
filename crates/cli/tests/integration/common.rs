//! Shared test helpers for CLI integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Get a Command for the pkggen binary with logging left at its default.
pub fn pkggen_cmd() -> Command {
  let mut cmd: Command = cargo_bin_cmd!("pkggen");
  cmd.env_remove("RUST_LOG");
  cmd
}

/// Isolated project root.
///
/// Each test gets its own temporary directory laid out like a source tree:
/// `packages/` holds descriptors and `buildtools/gn` is a stub that records
/// its arguments to `gn-args.txt` before running the given body.
pub struct TestProject {
  pub temp: TempDir,
  pub root: PathBuf,
}

impl TestProject {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let root = dunce::canonicalize(temp.path()).unwrap();
    std::fs::create_dir_all(root.join("packages")).unwrap();
    let project = Self { temp, root };
    project.write_gn("exit 0");
    project
  }

  /// Replace the body of the `gn` stub.
  pub fn write_gn(&self, body: &str) {
    let gn = self.root.join("buildtools").join("gn");
    std::fs::create_dir_all(self.root.join("buildtools")).unwrap();
    std::fs::write(
      &gn,
      format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n{}\n",
        self.gn_args_path().display(),
        body
      ),
    )
    .unwrap();
    make_executable(&gn);
  }

  /// Write a package descriptor under `packages/`.
  pub fn write_package(&self, name: &str, content: &str) {
    std::fs::write(self.root.join("packages").join(name), content).unwrap();
  }

  pub fn gn_args_path(&self) -> PathBuf {
    self.root.join("gn-args.txt")
  }

  /// Read a file relative to the project root.
  pub fn read(&self, relative: &str) -> String {
    std::fs::read_to_string(self.root.join(relative)).unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
  }

  /// Get a `pkggen gen` Command for this project.
  ///
  /// Sets environment variables for isolated testing:
  /// - `PKGGEN_ROOT`: the project root
  /// - `PKGGEN_PACKAGES`: the given package names
  pub fn gen_cmd(&self, packages: &[&str]) -> Command {
    let mut cmd = pkggen_cmd();
    cmd.arg("gen");
    cmd.env("PKGGEN_ROOT", &self.root);
    cmd.env("PKGGEN_PACKAGES", packages.join(","));
    cmd
  }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
  use std::os::unix::fs::PermissionsExt;
  std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
