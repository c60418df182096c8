use crate::{Face, Mesh, Node, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MergeKey {
    material_index: usize,
    has_normals: bool,
    has_tangents: bool,
    num_tex_coord_channels: usize,
}

impl MergeKey {
    fn new(mesh: &Mesh) -> Self {
        Self {
            material_index: mesh.material_index,
            has_normals: mesh.has_normals(),
            has_tangents: mesh.has_tangents_and_bitangents(),
            num_tex_coord_channels: mesh.tex_coords.len(),
        }
    }
}

fn count_references(node: &Node, reference_counts: &mut [usize]) {
    for &mesh_idx in &node.meshes {
        reference_counts[mesh_idx] += 1;
    }
    for child in &node.children {
        count_references(child, reference_counts);
    }
}

fn append_mesh(target: &mut Mesh, mut source: Mesh) {
    let base_vertex = target.vertices.len() as u32;

    target.vertices.append(&mut source.vertices);
    if let (Some(normals), Some(mut source_normals)) = (&mut target.normals, source.normals) {
        normals.append(&mut source_normals);
    }
    if let (Some(tangent_space), Some(mut source_tangent_space)) =
        (&mut target.tangent_space, source.tangent_space)
    {
        tangent_space
            .tangents
            .append(&mut source_tangent_space.tangents);
        tangent_space
            .bitangents
            .append(&mut source_tangent_space.bitangents);
    }
    for (tex_coords, mut source_tex_coords) in target.tex_coords.iter_mut().zip(source.tex_coords) {
        tex_coords.append(&mut source_tex_coords);
    }

    target.faces.extend(source.faces.into_iter().map(|face| {
        Face::new(
            face.indices
                .into_iter()
                .map(|index| index + base_vertex)
                .collect(),
        )
    }));
}

fn optimize_node(
    node: &mut Node,
    reference_counts: &[usize],
    source_meshes: &mut [Option<Mesh>],
    shared_remap: &mut [Option<usize>],
    meshes: &mut Vec<Mesh>,
) {
    let mut node_meshes = Vec::with_capacity(node.meshes.len());
    let mut merge_targets: Vec<(MergeKey, usize)> = vec![];

    for &mesh_idx in &node.meshes {
        if reference_counts[mesh_idx] > 1 {
            // Shared meshes are emitted once and never merged.
            let new_idx = match shared_remap[mesh_idx] {
                Some(new_idx) => new_idx,
                None => {
                    let Some(mesh) = source_meshes[mesh_idx].take() else {
                        continue;
                    };
                    meshes.push(mesh);
                    shared_remap[mesh_idx] = Some(meshes.len() - 1);
                    meshes.len() - 1
                }
            };
            node_meshes.push(new_idx);
            continue;
        }

        let Some(mesh) = source_meshes[mesh_idx].take() else {
            continue;
        };
        let key = MergeKey::new(&mesh);
        if let Some(&(_, target_idx)) = merge_targets.iter().find(|(k, _)| *k == key) {
            append_mesh(&mut meshes[target_idx], mesh);
        } else {
            meshes.push(mesh);
            let new_idx = meshes.len() - 1;
            merge_targets.push((key, new_idx));
            node_meshes.push(new_idx);
        }
    }
    node.meshes = node_meshes;

    for child in &mut node.children {
        optimize_node(child, reference_counts, source_meshes, shared_remap, meshes);
    }
}

/// Merges meshes referenced by the same node when they share material and vertex layout and no
/// other node references them. Meshes no node references are dropped.
pub fn optimize_meshes(scene: &mut Scene) {
    meshloader_profiling::profile_function!();

    let mut reference_counts = vec![0; scene.meshes.len()];
    count_references(&scene.root, &mut reference_counts);

    let num_meshes_before = scene.meshes.len();
    let mut source_meshes: Vec<Option<Mesh>> = scene.meshes.drain(..).map(Some).collect();
    let mut shared_remap = vec![None; source_meshes.len()];
    let mut meshes = Vec::with_capacity(source_meshes.len());

    optimize_node(
        &mut scene.root,
        &reference_counts,
        &mut source_meshes,
        &mut shared_remap,
        &mut meshes,
    );
    scene.meshes = meshes;

    if scene.meshes.len() != num_meshes_before {
        log::debug!(
            "Optimized meshes: {} -> {}",
            num_meshes_before,
            scene.meshes.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::Matrix4x4;

    fn triangle(material_index: usize, offset: f32) -> Mesh {
        Mesh {
            material_index,
            vertices: vec![
                Vec3::splat(offset),
                Vec3::splat(offset) + Vec3::X,
                Vec3::splat(offset) + Vec3::Y,
            ],
            faces: vec![Face::new(vec![0, 1, 2])],
            ..Default::default()
        }
    }

    #[test]
    fn same_material_meshes_of_a_node_are_merged() {
        let mut root = Node::new("root", Matrix4x4::IDENTITY);
        root.meshes = vec![0, 1, 2];
        let mut scene = Scene::new(root, vec![triangle(0, 0.0), triangle(1, 1.0), triangle(0, 2.0)]);

        optimize_meshes(&mut scene);

        assert_eq!(scene.meshes.len(), 2);
        assert_eq!(scene.root.meshes, vec![0, 1]);

        let merged = &scene.meshes[0];
        assert_eq!(merged.num_vertices(), 6);
        assert_eq!(merged.faces[1].indices, vec![3, 4, 5]);
        assert_eq!(merged.vertices[3], Vec3::splat(2.0));
        assert_eq!(scene.meshes[1].material_index, 1);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn shared_meshes_are_kept_separate() {
        let mut root = Node::new("root", Matrix4x4::IDENTITY);
        root.meshes = vec![0, 1];
        let mut child = Node::new("child", Matrix4x4::IDENTITY);
        child.meshes = vec![0];
        root.children.push(child);
        let mut scene = Scene::new(root, vec![triangle(0, 0.0), triangle(0, 1.0)]);

        optimize_meshes(&mut scene);

        assert_eq!(scene.meshes.len(), 2);
        assert_eq!(scene.root.meshes, vec![0, 1]);
        assert_eq!(scene.root.children[0].meshes, vec![0]);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn unreferenced_meshes_are_dropped() {
        let mut root = Node::new("root", Matrix4x4::IDENTITY);
        root.meshes = vec![1];
        let mut scene = Scene::new(root, vec![triangle(0, 0.0), triangle(0, 1.0)]);

        optimize_meshes(&mut scene);

        assert_eq!(scene.meshes.len(), 1);
        assert_eq!(scene.root.meshes, vec![0]);
        assert_eq!(scene.meshes[0].vertices[0], Vec3::ONE);
    }
}
