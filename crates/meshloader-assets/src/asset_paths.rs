use std::path::{Path, PathBuf};

/// How a user supplied path should be interpreted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// Used verbatim.
    #[default]
    Absolute,
    /// Relative to the configured content directory.
    Relative,
}

pub fn resolve_asset_path(path: &str, path_type: PathType, content_dir: &Path) -> PathBuf {
    match path_type {
        PathType::Absolute => PathBuf::from(path),
        PathType::Relative => content_dir.join(path),
    }
}
