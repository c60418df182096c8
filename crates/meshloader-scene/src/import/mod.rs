use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::{post_process, PostProcess, Scene};

mod gltf_loader;
mod obj_loader;

pub use gltf_loader::read_gltf;
pub use obj_loader::read_obj;

/// Name given to the node that groups top level objects when a format has no single root.
pub const ROOT_NODE_NAME: &str = "RootNode";

/// Reads a scene from disk, picking the format from the file extension, and applies `flags`.
pub fn read_file(path: &Path, flags: PostProcess) -> Result<Scene> {
    meshloader_profiling::profile_function!();

    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);

    let mut scene = match extension.as_deref() {
        Some("gltf") | Some("glb") => read_gltf(path)?,
        Some("obj") => read_obj(path)?,
        Some(extension) => bail!(
            "Unsupported scene format \".{}\" ({})",
            extension,
            path.display()
        ),
        None => bail!("Cannot determine scene format of {}", path.display()),
    };

    scene
        .validate()
        .with_context(|| format!("Malformed scene {}", path.display()))?;
    post_process::apply(&mut scene, flags);

    log::debug!(
        "Read {}: {} nodes, {} meshes",
        path.display(),
        scene.num_nodes(),
        scene.meshes.len()
    );

    Ok(scene)
}
