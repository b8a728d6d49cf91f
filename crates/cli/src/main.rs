mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pkggen_lib::consts::DEFAULT_OUTDIR;

use crate::cmd::{MakeCrateArgs, cmd_gen, cmd_make_crate};

/// pkggen - package build file and crate generator
#[derive(Parser)]
#[command(name = "pkggen")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Generate BUILD.gn and the bootfs manifest, then run gn
  Gen {
    /// Build output directory, relative to the project root
    #[arg(short, long, default_value = DEFAULT_OUTDIR)]
    outdir: String,
  },

  /// Write a crate wrapping a set of generated Rust sources
  MakeCrate {
    /// Location of the source root
    #[arg(long)]
    srcroot: Option<PathBuf>,

    /// List of source files for the crate
    #[arg(long)]
    inputs: Option<String>,

    /// List of dependency labels
    #[arg(long)]
    dep_inputs: Option<String>,

    /// Crate directory, relative to the gen directory
    #[arg(long)]
    output: String,

    /// Root of the gen directory
    #[arg(long)]
    gen_dir: PathBuf,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Gen { outdir } => cmd_gen(&outdir),
    Commands::MakeCrate {
      srcroot,
      inputs,
      dep_inputs,
      output,
      gen_dir,
    } => cmd_make_crate(MakeCrateArgs {
      output,
      gen_dir,
      srcroot,
      inputs,
      dep_inputs,
    }),
  }
}
