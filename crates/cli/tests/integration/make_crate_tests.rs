//! `pkggen make-crate` integration tests.

use predicates::prelude::*;
use tempfile::TempDir;

use super::common::pkggen_cmd;

#[test]
fn make_crate_writes_manifest_and_lib() {
  let temp = TempDir::new().unwrap();
  let gen_dir = temp.path().join("gen");
  let input = gen_dir.join("fidl").join("echo.rs");

  pkggen_cmd()
    .arg("make-crate")
    .arg("--gen-dir")
    .arg(&gen_dir)
    .args(["--output", "garnet/examples/echo"])
    .arg("--inputs")
    .arg(format!("['{}']", input.display()))
    .args(["--dep-inputs", "['//garnet/public/lib/fidl:bindings']"])
    .assert()
    .success()
    .stdout(predicate::str::contains("garnet_examples_echo"));

  let crate_dir = gen_dir.join("garnet/examples/echo");
  let cargo = std::fs::read_to_string(crate_dir.join("Cargo.toml")).unwrap();
  assert!(cargo.contains("name = \"garnet_examples_echo\"\n"));
  assert!(cargo.contains("tokio-core = \"0.1.9\"\n"));

  let lib = std::fs::read_to_string(crate_dir.join("src/lib.rs")).unwrap();
  assert!(lib.contains("pub extern crate garnet_public_lib_fidl_bindings;\n"));
  assert!(lib.contains("#[path=\"../../../../fidl/echo.rs\"]\nmod echo;\n"));
  assert!(lib.ends_with("pub use echo::*;\n"));
}

#[test]
fn make_crate_without_inputs() {
  let temp = TempDir::new().unwrap();

  pkggen_cmd()
    .arg("make-crate")
    .arg("--gen-dir")
    .arg(temp.path())
    .args(["--output", "empty"])
    .assert()
    .success();

  let lib = std::fs::read_to_string(temp.path().join("empty/src/lib.rs")).unwrap();
  assert!(!lib.contains("mod "));
  assert!(lib.contains("extern crate fidl;\n"));
}
