//! `pkggen gen` integration tests.

use predicates::prelude::*;

use super::common::TestProject;

const PKG_A: &str = r#"{"label":"//a","binaries":[{"binary":"a.bin","bootfs_path":"bin/a"}]}"#;
const PKG_B: &str = r#"{
  "label": "//apps/b",
  "binaries": [
    { "binary": "b", "bootfs_path": "bin/b" },
    { "binary": "lib/libb.so", "bootfs_path": "lib/libb.so" }
  ]
}"#;

#[test]
fn gen_writes_all_outputs() {
  let project = TestProject::new();
  project.write_package("a", PKG_A);

  project
    .gen_cmd(&["a"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Generated package build files"));

  let outdir = project.root.join("out/Debug");
  assert_eq!(
    project.read("out/Debug/gen/packages/mkbootfs/user.bootfs.manifest"),
    format!("bin/a={}\n", outdir.join("a.bin").display())
  );
  assert_eq!(
    project.read("out/Debug/gen/packages/mkbootfs/user.bootfs.d"),
    "user.bootfs: gen/packages/mkbootfs/user.bootfs.manifest a.bin\n"
  );
  let build = project.read("packages/BUILD.gn");
  assert!(build.contains("    \"//packages/mkbootfs\",\n    \"//a\",\n"));
}

#[test]
fn gen_passes_fixed_arguments_to_gn() {
  let project = TestProject::new();
  project.write_package("a", PKG_A);

  project.gen_cmd(&["a"]).arg("-o").arg("out/Release").assert().success();

  let root = project.root.display();
  assert_eq!(
    std::fs::read_to_string(project.gn_args_path()).unwrap(),
    format!(
      "gen\n{root}/out/Release\n--root={root}\n--dotfile={root}/packages/dot_gn\n--script-executable=/usr/bin/env\n"
    )
  );
}

#[test]
fn gen_preserves_package_order() {
  let project = TestProject::new();
  project.write_package("a", PKG_A);
  project.write_package("b", PKG_B);

  project.gen_cmd(&["b", "a"]).assert().success();

  let build = project.read("packages/BUILD.gn");
  let b = build.find("\"//apps/b\"").unwrap();
  let a = build.find("\"//a\"").unwrap();
  assert!(b < a);

  let manifest = project.read("out/Debug/gen/packages/mkbootfs/user.bootfs.manifest");
  let dests: Vec<_> = manifest.lines().map(|l| l.split('=').next().unwrap()).collect();
  assert_eq!(dests, vec!["bin/b", "lib/libb.so", "bin/a"]);
}

#[test]
fn gen_skips_invalid_config_with_warning() {
  let project = TestProject::new();
  project.write_package("a", PKG_A);
  project.write_package("broken", "{ \"label\": ");

  project
    .gen_cmd(&["broken", "a"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Failed to parse config"))
    .stderr(predicate::str::contains("broken"));

  let build = project.read("packages/BUILD.gn");
  assert!(build.contains("\"//a\""));
  assert_eq!(build.matches("\",\n").count(), 2);
}

#[test]
fn gen_is_idempotent() {
  let project = TestProject::new();
  project.write_package("a", PKG_A);
  project.write_package("b", PKG_B);
  let files = [
    "packages/BUILD.gn",
    "out/Debug/gen/packages/mkbootfs/user.bootfs.manifest",
    "out/Debug/gen/packages/mkbootfs/user.bootfs.d",
  ];

  project.gen_cmd(&["a", "b"]).assert().success();
  let first = files.map(|f| project.read(f));
  project.gen_cmd(&["a", "b"]).assert().success();
  let second = files.map(|f| project.read(f));

  assert_eq!(first, second);
}

#[test]
fn gen_fails_when_gn_fails() {
  let project = TestProject::new();
  project.write_package("a", PKG_A);
  project.write_gn("exit 2");

  project
    .gen_cmd(&["a"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("exited with code Some(2)"));
}

#[test]
fn gen_fails_when_outdir_cannot_be_created() {
  let project = TestProject::new();
  project.write_package("a", PKG_A);
  std::fs::write(project.root.join("out"), "").unwrap();

  project
    .gen_cmd(&["a"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to create directory"));

  assert!(!project.gn_args_path().exists());
  assert!(!project.root.join("packages/BUILD.gn").exists());
}
