//! Implementation of the `pkggen make-crate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use pkggen_lib::crate_gen::{CrateSpec, make_crate, parse_list_literal};

use crate::output::print_success;

pub struct MakeCrateArgs {
  pub output: String,
  pub gen_dir: PathBuf,
  pub srcroot: Option<PathBuf>,
  pub inputs: Option<String>,
  pub dep_inputs: Option<String>,
}

/// Write a crate wrapping the given generated sources.
///
/// `inputs` and `dep_inputs` are list literals; an absent list is empty.
pub fn cmd_make_crate(args: MakeCrateArgs) -> Result<()> {
  let inputs = parse_list(args.inputs.as_deref()).context("Invalid --inputs")?;
  let dep_inputs = parse_list(args.dep_inputs.as_deref()).context("Invalid --dep-inputs")?;

  let spec = CrateSpec {
    output: args.output,
    gen_dir: args.gen_dir,
    inputs: inputs.into_iter().map(PathBuf::from).collect(),
    srcroot: args.srcroot,
    dep_inputs,
  };

  let outputs = make_crate(&spec).with_context(|| format!("Failed to write crate for {}", spec.output))?;

  print_success(&format!(
    "Wrote crate {} ({})",
    outputs.crate_name,
    outputs.cargo_toml.display()
  ));

  Ok(())
}

fn parse_list(literal: Option<&str>) -> Result<Vec<String>> {
  match literal {
    Some(literal) if !literal.trim().is_empty() => Ok(parse_list_literal(literal)?),
    _ => Ok(Vec::new()),
  }
}
