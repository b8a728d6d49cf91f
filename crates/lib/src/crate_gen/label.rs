//! Mapping of build labels to crate names.

/// Convert a build label or output path to a crate name.
///
/// `//garnet/public/lib/app:fidl-service` becomes
/// `garnet_public_lib_app_fidl_service`.
pub fn label_to_crate(label: &str) -> String {
  label
    .trim_start_matches('/')
    .chars()
    .map(|c| match c {
      '/' | ':' | '-' | '.' => '_',
      c => c.to_ascii_lowercase(),
    })
    .collect()
}
