//! Lexical path helpers.
//!
//! These never touch the filesystem and never resolve symlinks.

use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against `cwd` and drop `.` and `..` components.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
  normalize(&cwd.join(path))
}

/// Remove `.` components and fold `..` into their parent.
///
/// `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
  let mut out = PathBuf::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => match out.components().next_back() {
        Some(Component::Normal(_)) => {
          out.pop();
        }
        Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
        _ => out.push(".."),
      },
      other => out.push(other.as_os_str()),
    }
  }
  out
}

/// Express `target` relative to `base`. Both must be absolute and normalized.
pub fn relative_to(target: &Path, base: &Path) -> PathBuf {
  let target: Vec<_> = target.components().collect();
  let base: Vec<_> = base.components().collect();
  let common = target.iter().zip(&base).take_while(|(a, b)| a == b).count();

  let mut rel = PathBuf::new();
  for _ in common..base.len() {
    rel.push("..");
  }
  for component in &target[common..] {
    rel.push(component.as_os_str());
  }
  if rel.as_os_str().is_empty() {
    rel.push(".");
  }
  rel
}
