use std::path::PathBuf;

use meshloader_assets::{resolve_asset_path, PathType};
use meshloader_scene::PostProcess;

use crate::{node::flatten_scene, ImportError, ImportResult, NodeData};

#[derive(Debug, Clone)]
pub struct ImportSettings {
    /// Base directory for [`PathType::Relative`] paths.
    pub content_dir: PathBuf,
    pub post_process: PostProcess,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("Content"),
            post_process: PostProcess::IMPORT_DEFAULT,
        }
    }
}

/// Imports a mesh file and flattens its node hierarchy.
///
/// Never fails loudly: any error is logged and reported as an unsuccessful, empty result.
pub fn load_mesh_from_file(
    file_path: &str,
    path_type: PathType,
    settings: &ImportSettings,
) -> ImportResult {
    let result = try_load_mesh_from_file(file_path, path_type, settings);
    if let Err(err) = &result {
        log::warn!("Runtime mesh loader: {}", err.report());
    }

    ImportResult::from(result)
}

pub fn try_load_mesh_from_file(
    file_path: &str,
    path_type: PathType,
    settings: &ImportSettings,
) -> Result<Vec<NodeData>, ImportError> {
    meshloader_profiling::profile_function!();

    if file_path.is_empty() {
        return Err(ImportError::EmptyPath);
    }

    let path = resolve_asset_path(file_path, path_type, &settings.content_dir);

    let scene = meshloader_scene::read_file(&path, settings.post_process).map_err(|err| {
        ImportError::ParseFailure {
            path: path.clone(),
            source: err.into(),
        }
    })?;

    if !scene.has_meshes() {
        return Err(ImportError::NoMeshesInScene { path });
    }

    let nodes = flatten_scene(&scene);
    log::info!(
        "Imported {}: {} nodes, {} meshes",
        path.display(),
        nodes.len(),
        scene.meshes.len()
    );

    Ok(nodes)
}
