#![doc(html_no_source)]

mod config;
mod mesh_loader;
pub use config::MeshLoaderConfig;
pub use mesh_loader::MeshLoader;

pub use meshloader_assets::PathType;
pub use meshloader_model::{ImportResult, MeshData, NodeData};
pub use meshloader_scene::PostProcess;
pub use meshloader_texture::{Texture, TextureFormat};

// Reexport all crates
pub use meshloader_assets;
pub use meshloader_model;
pub use meshloader_profiling;
pub use meshloader_scene;
pub use meshloader_texture;
pub use meshloader_transform;
