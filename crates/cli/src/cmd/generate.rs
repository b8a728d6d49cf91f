//! Implementation of the `pkggen gen` command.
//!
//! Collects the package descriptors, writes `packages/BUILD.gn` and the bootfs
//! manifest and depfile, then runs `gn gen` on the output directory.

use anyhow::{Context, Result};
use tracing::info;

use pkggen_lib::pipeline::{GenConfig, generate_with};

use crate::output::{print_info, print_stat, print_success, print_warning};

pub fn cmd_gen(outdir: &str) -> Result<()> {
  let config = GenConfig::from_env(outdir).context("Failed to resolve generator configuration")?;
  info!(root = %config.root.display(), outdir = %config.outdir.display(), "generating package build files");

  let report = generate_with(&config, |failure| {
    print_warning(&format!(
      "Failed to parse config {}, error {}",
      failure.path.display(),
      failure.error
    ));
  })
  .context("Package generation failed")?;

  println!();
  print_success("Generated package build files");
  print_stat("Packages", &format!("{} of {}", report.packages, config.packages.len()));
  print_stat("Labels", &report.labels.to_string());
  print_stat("Binaries", &report.binaries.to_string());
  print_stat("Build file", &report.build_file.display().to_string());
  print_stat("Manifest", &report.bootfs.manifest.display().to_string());
  print_stat("Depfile", &report.bootfs.depfile.display().to_string());

  if !report.failures.is_empty() {
    println!();
    print_info(&format!(
      "Skipped {} package config(s); see warnings above",
      report.failures.len()
    ));
  }

  Ok(())
}
