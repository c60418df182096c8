use std::{
    fs,
    path::{Path, PathBuf},
};

pub fn directory_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Creates `path` and all missing parents. Returns `true` when the directory exists afterwards.
pub fn create_directory(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    if path.is_dir() {
        return true;
    }

    match fs::create_dir_all(path) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("Failed to create directory {}: {}", path.display(), err);
            false
        }
    }
}

/// Lists every directory below `path`, recursively, as full paths. Files are not included.
pub fn list_folders(path: impl AsRef<Path>) -> Vec<PathBuf> {
    meshloader_profiling::profile_function!();

    let mut folders = Vec::new();
    collect_folders_recursive(path.as_ref(), &mut folders);
    folders.sort();
    folders
}

fn collect_folders_recursive(dir: &Path, folders: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("Failed to list {}: {}", dir.display(), err);
            return;
        }
    };

    for entry in entries.flatten() {
        let is_dir = entry.file_type().map(|ty| ty.is_dir()).unwrap_or(false);
        if is_dir {
            let folder = entry.path();
            collect_folders_recursive(&folder, folders);
            folders.push(folder);
        }
    }
}
