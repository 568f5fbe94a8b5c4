use std::path::{Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Render a path with `/` as the only separator.
///
/// Only Windows has a second separator; elsewhere backslashes are legal file
/// name characters and are left alone.
pub fn to_forward_slashes(path: &Path) -> String {
    let s = path.to_string_lossy();
    if cfg!(windows) { s.replace('\\', "/") } else { s.into_owned() }
}

/// The directory a source root is scanned from: its parent, spelled as `root/..`.
///
/// Not canonicalised: this spelling ends up in the per-file checksum lines.
pub fn scan_root_of(source_root: &Path) -> PathBuf {
    source_root.join("..")
}
