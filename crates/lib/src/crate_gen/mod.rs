//! Synthesis of a crate wrapping generated Rust sources.
//!
//! Generated bindings land in arbitrary directories of the build output. To
//! compile them with cargo, a crate is written under the gen directory with a
//! fixed `Cargo.toml` and a `src/lib.rs` that declares every generated file
//! as a module and re-exports its contents:
//!
//! ```text
//! <gen_dir>/<output>/Cargo.toml
//! <gen_dir>/<output>/src/lib.rs
//! ```

mod label;
mod list;

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::util::path::{absolutize, relative_to};

pub use label::label_to_crate;
pub use list::{ListLiteralError, parse_list_literal};

const HEADER: &str = "Autogenerated by pkggen make-crate";

/// Crates every generated binding depends on.
const RUNTIME_EXTERNS: &[&str] = &[
  "fuchsia_zircon as zircon",
  "futures",
  "tokio_core",
  "tokio_fuchsia",
];

#[derive(Debug, Error)]
pub enum CrateError {
  #[error("failed to determine current directory: {0}")]
  ResolvePath(#[source] std::io::Error),

  #[error("input has no file name: {}", path.display())]
  InvalidInput { path: PathBuf },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: std::io::Error },
}

/// Inputs of a crate synthesis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateSpec {
  /// Crate directory relative to `gen_dir`; also the source of the crate name.
  pub output: String,
  /// Root of the gen directory.
  pub gen_dir: PathBuf,
  /// Generated source files, in declaration order.
  pub inputs: Vec<PathBuf>,
  /// Source root of the build. Accepted for compatibility and otherwise unused.
  pub srcroot: Option<PathBuf>,
  /// Labels of crates this one re-exports.
  pub dep_inputs: Vec<String>,
}

/// Files written by [`make_crate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrateOutputs {
  pub crate_name: String,
  pub cargo_toml: PathBuf,
  pub lib_rs: PathBuf,
}

/// Render the crate's `Cargo.toml`.
pub fn render_cargo_toml(crate_name: &str) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "# {}", HEADER);
  out.push_str("[package]\n");
  let _ = writeln!(out, "name = \"{}\"", crate_name);
  out.push_str("version = \"0.1.0\"\n");
  out.push('\n');
  out.push_str("[dependencies]\n");
  out.push_str("futures = \"0.1\"\n");
  out.push_str("tokio-core = \"0.1.9\"\n");
  out
}

/// Render `src/lib.rs`.
///
/// `src_dir` and `inputs` must be absolute and normalized. A `#[path]`
/// attribute is emitted only for inputs that do not sit directly in
/// `src_dir` under their module name.
pub fn render_lib_rs<S: AsRef<str>>(src_dir: &Path, inputs: &[PathBuf], dep_inputs: &[S]) -> Result<String, CrateError> {
  let modules = inputs
    .iter()
    .map(|input| module_name(input).map(|name| (input, name)))
    .collect::<Result<Vec<_>, _>>()?;

  let mut out = String::new();
  let _ = writeln!(out, "// {}", HEADER);
  out.push_str("#[macro_use]\n");
  out.push_str("extern crate fidl;\n");
  for name in RUNTIME_EXTERNS {
    let _ = writeln!(out, "extern crate {};", name);
  }
  // TODO: only `pub` the crates that are public dependencies once the build passes them separately.
  for dep in dep_inputs {
    let _ = writeln!(out, "pub extern crate {};", label_to_crate(dep.as_ref()));
  }
  out.push('\n');

  for (input, name) in &modules {
    let rel = relative_to(input, src_dir);
    if rel != Path::new(&format!("{}.rs", name)) {
      let _ = writeln!(out, "#[path=\"{}\"]", rel.display());
    }
    let _ = writeln!(out, "mod {};", name);
  }
  out.push('\n');

  for (_, name) in &modules {
    let _ = writeln!(out, "pub use {}::*;", name);
  }

  Ok(out)
}

/// Write the crate described by `spec`.
///
/// Relative paths are resolved against the current directory.
pub fn make_crate(spec: &CrateSpec) -> Result<CrateOutputs, CrateError> {
  let cwd = std::env::current_dir().map_err(CrateError::ResolvePath)?;
  make_crate_in(spec, &cwd)
}

fn make_crate_in(spec: &CrateSpec, cwd: &Path) -> Result<CrateOutputs, CrateError> {
  let crate_name = label_to_crate(&spec.output);
  let crate_dir = absolutize(&spec.gen_dir.join(&spec.output), cwd);
  let src_dir = crate_dir.join("src");
  debug!(crate_name = %crate_name, dir = %crate_dir.display(), inputs = spec.inputs.len(), "synthesizing crate");

  fs::create_dir_all(&src_dir).map_err(|e| CrateError::CreateDir {
    path: src_dir.clone(),
    source: e,
  })?;

  let inputs: Vec<PathBuf> = spec.inputs.iter().map(|i| absolutize(i, cwd)).collect();
  let lib_content = render_lib_rs(&src_dir, &inputs, spec.dep_inputs.as_slice())?;

  let cargo_toml = crate_dir.join("Cargo.toml");
  write(&cargo_toml, &render_cargo_toml(&crate_name))?;

  let lib_rs = src_dir.join("lib.rs");
  write(&lib_rs, &lib_content)?;

  info!(crate_name = %crate_name, path = %crate_dir.display(), "wrote crate");

  Ok(CrateOutputs {
    crate_name,
    cargo_toml,
    lib_rs,
  })
}

fn write(path: &Path, content: &str) -> Result<(), CrateError> {
  fs::write(path, content).map_err(|e| CrateError::WriteFile {
    path: path.to_path_buf(),
    source: e,
  })
}

fn module_name(input: &Path) -> Result<String, CrateError> {
  input
    .file_stem()
    .map(|s| s.to_string_lossy().into_owned())
    .ok_or_else(|| CrateError::InvalidInput {
      path: input.to_path_buf(),
    })
}
