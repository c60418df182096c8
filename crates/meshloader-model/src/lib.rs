use glam::{Vec2, Vec3};
use meshloader_transform::Transform;

pub mod error;
pub mod loader;
pub mod mesh;
pub mod node;

pub use error::ImportError;
pub use loader::{load_mesh_from_file, try_load_mesh_from_file, ImportSettings};

/// Flattened vertex data of a single imported mesh.
///
/// `normals` always has one entry per vertex. Texture coordinates and tangents are only present
/// when the source mesh had them, so never index them with a vertex index without checking.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vec3>,
    /// Vertex indices of every face in source order, flattened.
    pub triangles: Vec<u32>,
    pub normals: Vec<Vec3>,
    pub uvs: Option<Vec<Vec2>>,
    pub tangents: Option<Vec<Vec3>>,
}

impl MeshData {
    pub fn has_uvs(&self) -> bool {
        self.uvs.is_some()
    }

    pub fn has_tangents(&self) -> bool {
        self.tangents.is_some()
    }

    pub fn uvs(&self) -> &[Vec2] {
        self.uvs.as_deref().unwrap_or_default()
    }

    pub fn tangents(&self) -> &[Vec3] {
        self.tangents.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NodeData {
    pub relative_transform: Transform,
    /// Index of the parent in [`ImportResult::nodes`], `None` for the root.
    pub parent_index: Option<usize>,
    pub meshes: Vec<MeshData>,
}

impl NodeData {
    /// Parent index as exposed to scripting hosts, `-1` for the root.
    pub fn raw_parent_index(&self) -> i32 {
        self.parent_index.map_or(-1, |index| index as i32)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportResult {
    pub success: bool,
    /// Nodes in pre-order, every parent precedes its children.
    pub nodes: Vec<NodeData>,
}

impl ImportResult {
    pub fn failed() -> Self {
        Self {
            success: false,
            nodes: vec![],
        }
    }

    pub fn num_meshes(&self) -> usize {
        self.nodes.iter().map(|node| node.meshes.len()).sum()
    }
}

impl From<Result<Vec<NodeData>, ImportError>> for ImportResult {
    fn from(result: Result<Vec<NodeData>, ImportError>) -> Self {
        match result {
            Ok(nodes) => Self {
                success: true,
                nodes,
            },
            Err(_) => Self::failed(),
        }
    }
}
