use glam::Mat4;
use meshloader_scene::{Node, Scene};
use meshloader_transform::Transform;

use crate::{mesh::process_mesh, NodeData};

/// Flattens the subtree rooted at `node` into `nodes` in pre-order.
///
/// A node's index is its position in `nodes`, taken right after it is pushed and before any of
/// its children are visited, so every child refers to an index lower than its own.
pub fn process_nodes_recursive(
    node: &Node,
    scene: &Scene,
    parent_index: Option<usize>,
    nodes: &mut Vec<NodeData>,
) {
    nodes.push(process_node(node, scene, parent_index));
    let node_idx = nodes.len() - 1;

    log::debug!(
        "Node \"{}\": {} meshes, {} children",
        node.name,
        node.meshes.len(),
        node.children.len()
    );

    for child in &node.children {
        process_nodes_recursive(child, scene, Some(node_idx), nodes);
    }
}

fn process_node(node: &Node, scene: &Scene, parent_index: Option<usize>) -> NodeData {
    meshloader_profiling::profile_function!();

    let meshes = node
        .meshes
        .iter()
        .filter_map(|&mesh_idx| {
            log::debug!("Loading mesh at index: {}", mesh_idx);
            scene.meshes.get(mesh_idx).map(process_mesh)
        })
        .collect();

    NodeData {
        relative_transform: Transform::from(Mat4::from(node.transformation)),
        parent_index,
        meshes,
    }
}

/// Flattens the whole scene starting at its root.
pub fn flatten_scene(scene: &Scene) -> Vec<NodeData> {
    meshloader_profiling::profile_function!();

    let mut nodes = Vec::with_capacity(scene.num_nodes());
    process_nodes_recursive(&scene.root, scene, None, &mut nodes);
    nodes
}
