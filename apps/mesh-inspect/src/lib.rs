use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use meshloader::{ImportResult, MeshLoader, MeshLoaderConfig, PathType, PostProcess};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Mesh file to import (.gltf, .glb or .obj)
    file_path: String,

    /// Resolve the file path against the content directory
    #[arg(long, default_value_t = false)]
    relative: bool,

    /// Content directory used for relative paths, defaults to $MESHLOADER_CONTENT_DIR or "Content"
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Import the scene exactly as read, without any post-processing
    #[arg(long, default_value_t = false)]
    no_post_process: bool,

    /// Texture to decode alongside the mesh
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Record profiling scopes
    #[arg(long, default_value_t = false)]
    profile: bool,
}

pub fn internal_main() -> Result<()> {
    let args = Args::parse();

    let mut config = MeshLoaderConfig::from_env();
    if let Some(content_dir) = args.content_dir {
        config.content_dir = content_dir;
    }
    if args.no_post_process {
        config.post_process = PostProcess::empty();
    }

    meshloader::meshloader_profiling::set_enabled(args.profile);
    let mesh_loader = MeshLoader::new(config);

    let path_type = if args.relative {
        PathType::Relative
    } else {
        PathType::Absolute
    };

    let result = mesh_loader.load_mesh_from_file(&args.file_path, path_type);
    meshloader::meshloader_profiling::finish_frame();

    if !result.success {
        match path_type {
            PathType::Relative => bail!(
                "Failed to import {} from {}",
                args.file_path,
                mesh_loader.config().content_dir.display()
            ),
            PathType::Absolute => bail!("Failed to import {}", args.file_path),
        }
    }
    log_summary(&result);

    if let Some(texture_path) = args.texture {
        match mesh_loader.load_texture_2d(&texture_path) {
            Some(texture) => log::info!(
                "Texture {}: {}x{} {:?}",
                texture_path.display(),
                texture.width(),
                texture.height(),
                texture.format()
            ),
            None => bail!("Failed to load texture {}", texture_path.display()),
        }
    }

    Ok(())
}

fn log_summary(result: &ImportResult) {
    log::info!(
        "{} nodes, {} meshes",
        result.nodes.len(),
        result.num_meshes()
    );

    for (i, node) in result.nodes.iter().enumerate() {
        log::info!(
            "[{}] parent {} translation {:?}",
            i,
            node.raw_parent_index(),
            node.relative_transform.get_translation()
        );

        for mesh in &node.meshes {
            log::info!(
                "    {} vertices, {} indices, uvs: {}, tangents: {}",
                mesh.vertices.len(),
                mesh.triangles.len(),
                mesh.has_uvs(),
                mesh.has_tangents()
            );
        }
    }
}
