//! pkggen-lib: generators for package build files and aggregate crates.
//!
//! - [`pipeline`]: reads package descriptors, writes the build group file and
//!   the bootfs manifest, then runs the build-graph generator
//! - [`crate_gen`]: writes a crate that wraps a set of generated sources

pub mod bootfs;
pub mod collect;
pub mod consts;
pub mod crate_gen;
pub mod gn;
pub mod package;
pub mod pipeline;
pub mod toolchain;
pub mod util;
