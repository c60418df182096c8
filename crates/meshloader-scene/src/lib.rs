//! In-memory scene graph as produced by the format importers, before it is flattened into
//! host-facing records.

use anyhow::{bail, Result};

pub mod import;
pub mod matrix;
pub mod mesh;
pub mod post_process;

pub use import::read_file;
pub use matrix::Matrix4x4;
pub use mesh::{Face, Mesh, TangentSpace};
pub use post_process::PostProcess;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,

    /// Local-to-parent transform, row-major.
    pub transformation: Matrix4x4,
    /// Indices into [`Scene::meshes`].
    pub meshes: Vec<usize>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: &str, transformation: Matrix4x4) -> Self {
        Self {
            name: name.to_owned(),
            transformation,
            meshes: vec![],
            children: vec![],
        }
    }

    /// Number of nodes in the subtree rooted at this node, itself included.
    pub fn count_nodes(&self) -> usize {
        1 + self.children.iter().map(Node::count_nodes).sum::<usize>()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub root: Node,
    pub meshes: Vec<Mesh>,
}

impl Scene {
    pub fn new(root: Node, meshes: Vec<Mesh>) -> Self {
        Self { root, meshes }
    }

    pub fn has_meshes(&self) -> bool {
        !self.meshes.is_empty()
    }

    pub fn num_nodes(&self) -> usize {
        self.root.count_nodes()
    }

    /// Checks that every node references existing meshes and every mesh is self-consistent.
    pub fn validate(&self) -> Result<()> {
        for (i, mesh) in self.meshes.iter().enumerate() {
            mesh.validate()
                .map_err(|err| err.context(format!("Invalid mesh {} (\"{}\")", i, mesh.name)))?;
        }

        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if let Some(mesh_idx) = node.meshes.iter().find(|&&idx| idx >= self.meshes.len()) {
                bail!(
                    "Node \"{}\" references mesh {} but the scene only has {} meshes",
                    node.name,
                    mesh_idx,
                    self.meshes.len()
                );
            }
            stack.extend(node.children.iter());
        }

        Ok(())
    }
}
