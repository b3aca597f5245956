use std::path::{Path, PathBuf};

/// Root of the cargo workspace, derived from the location of this crate.
pub fn cargo_workspace_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
}
