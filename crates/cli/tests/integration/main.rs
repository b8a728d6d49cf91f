//! Integration tests for the pkggen binary.

mod common;
#[cfg(unix)]
mod gen_tests;
mod make_crate_tests;
