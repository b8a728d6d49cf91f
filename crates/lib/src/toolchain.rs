//! Invocation of the external build-graph generator.
//!
//! The generator runs synchronously with the terminal's stdio, so its output
//! reaches the user directly. A non-zero exit is reported as
//! [`ToolchainError::Failed`]; there is no retry.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ToolchainError {
  #[error("failed to run {}: {source}", program.display())]
  Spawn { program: PathBuf, source: std::io::Error },

  #[error("{} exited with code {code:?}", program.display())]
  Failed { program: PathBuf, code: Option<i32> },
}

/// A `gn gen` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GnInvocation {
  /// The generator binary.
  pub program: PathBuf,
  /// Build output directory to generate into.
  pub outdir: PathBuf,
  /// Project root passed as `--root`.
  pub root: PathBuf,
  /// Dot-config file passed as `--dotfile`.
  pub dotfile: PathBuf,
  /// Interpreter passed as `--script-executable`.
  pub script_executable: PathBuf,
}

impl GnInvocation {
  /// Command-line arguments, excluding the program itself.
  pub fn args(&self) -> Vec<OsString> {
    vec![
      OsString::from("gen"),
      self.outdir.clone().into_os_string(),
      flag("--root=", &self.root),
      flag("--dotfile=", &self.dotfile),
      flag("--script-executable=", &self.script_executable),
    ]
  }

  /// Run the generator and wait for it to exit.
  pub fn run(&self) -> Result<(), ToolchainError> {
    let args = self.args();
    info!(program = %self.program.display(), outdir = %self.outdir.display(), "running build-graph generator");
    debug!(args = ?args, "generator arguments");

    let status = Command::new(&self.program)
      .args(&args)
      .status()
      .map_err(|e| ToolchainError::Spawn {
        program: self.program.clone(),
        source: e,
      })?;

    if !status.success() {
      return Err(ToolchainError::Failed {
        program: self.program.clone(),
        code: status.code(),
      });
    }

    debug!(program = %self.program.display(), "build-graph generator finished");
    Ok(())
  }
}

fn flag(name: &str, value: &std::path::Path) -> OsString {
  let mut arg = OsString::from(name);
  arg.push(value.as_os_str());
  arg
}
