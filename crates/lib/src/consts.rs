/// Application name, used as the prefix of environment variables.
pub const APP_NAME: &str = "pkggen";

/// Output directory used when `--outdir` is not given.
pub const DEFAULT_OUTDIR: &str = "out/Debug";

/// Package descriptors read when `PKGGEN_PACKAGES` is not set.
pub const DEFAULT_PACKAGES: &[&str] = &["fortune", "ftl", "mojo", "mtl"];

/// Target that every generated group depends on first.
pub const BOOTSTRAP_TARGET: &str = "//packages/mkbootfs";

/// Directory under the build output that holds the bootfs descriptors.
pub const BOOTFS_GEN_DIR: &str = "gen/packages/mkbootfs";

pub const BOOTFS_MANIFEST: &str = "user.bootfs.manifest";
pub const BOOTFS_DEPFILE: &str = "user.bootfs.d";

/// Target named on the left-hand side of the bootfs depfile.
pub const BOOTFS_TARGET: &str = "user.bootfs";

pub const SCRIPT_EXECUTABLE: &str = "/usr/bin/env";
