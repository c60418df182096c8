use std::{ops::Range, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use glam::{Mat4, Vec2, Vec3, Vec4};
use gltf::mesh::Mode;

use super::ROOT_NODE_NAME;
use crate::{Face, Matrix4x4, Mesh, Node, Scene, TangentSpace};

/// Reads a `.gltf` or `.glb` file. Every primitive becomes its own mesh, texture coordinates are
/// flipped to a bottom-left origin.
pub fn read_gltf(path: &Path) -> Result<Scene> {
    meshloader_profiling::profile_function!();

    let gltf::Gltf { document, blob } = gltf::Gltf::open(path)
        .with_context(|| format!("Failed to parse glTF {}", path.display()))?;
    let buffers = gltf::import_buffers(&document, path.parent(), blob)
        .with_context(|| format!("Failed to load glTF buffers of {}", path.display()))?;

    let mut meshes = vec![];
    let mut primitive_ranges: Vec<Range<usize>> = Vec::with_capacity(document.meshes().len());
    for mesh in document.meshes() {
        let name = mesh.name().unwrap_or("Unnamed");
        let first_mesh = meshes.len();

        for primitive in mesh.primitives() {
            let scene_mesh = read_primitive(&primitive, &buffers, name).with_context(|| {
                format!(
                    "Failed to process mesh \"{}\" primitive {}",
                    name,
                    primitive.index()
                )
            })?;
            meshes.push(scene_mesh);
        }

        primitive_ranges.push(first_mesh..meshes.len());
    }

    let mut on_path = vec![false; document.nodes().len()];
    let mut root_nodes: Vec<Node> = match document
        .default_scene()
        .or_else(|| document.scenes().next())
    {
        Some(scene) => scene
            .nodes()
            .map(|node| process_nodes_recursive(&node, &primitive_ranges, &mut on_path))
            .collect::<Result<_>>()
            .with_context(|| format!("Invalid node hierarchy in {}", path.display()))?,
        None => vec![],
    };

    let root = if root_nodes.len() == 1 {
        root_nodes.swap_remove(0)
    } else {
        let mut root = Node::new(ROOT_NODE_NAME, Matrix4x4::IDENTITY);
        root.children = root_nodes;
        root
    };

    Ok(Scene::new(root, meshes))
}

/// `on_path` marks the nodes between the scene root and `node`. A node showing up twice on that
/// path means the hierarchy is cyclic.
fn process_nodes_recursive(
    node: &gltf::Node,
    primitive_ranges: &[Range<usize>],
    on_path: &mut [bool],
) -> Result<Node> {
    match on_path.get_mut(node.index()) {
        Some(visited) if *visited => bail!("Node {} is its own ancestor", node.index()),
        Some(visited) => *visited = true,
        None => bail!("Node {} is out of range", node.index()),
    }

    let matrix = Mat4::from_cols_array_2d(&node.transform().matrix());
    let mut scene_node = Node::new(node.name().unwrap_or("Unnamed"), Matrix4x4::from(matrix));

    if let Some(mesh) = node.mesh() {
        if let Some(range) = primitive_ranges.get(mesh.index()) {
            scene_node.meshes.extend(range.clone());
        }
    }

    scene_node.children = node
        .children()
        .map(|child| process_nodes_recursive(&child, primitive_ranges, on_path))
        .collect::<Result<_>>()?;

    on_path[node.index()] = false;
    Ok(scene_node)
}

fn read_primitive(
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
    name: &str,
) -> Result<Mesh> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));

    let vertices: Vec<Vec3> = reader
        .read_positions()
        .ok_or_else(|| anyhow!("Vertices must have positions"))?
        .map(Vec3::from)
        .collect();

    let normals: Option<Vec<Vec3>> = reader
        .read_normals()
        .map(|normals| normals.map(Vec3::from).collect());

    let mut tex_coords = vec![];
    while let Some(set) = reader.read_tex_coords(tex_coords.len() as u32) {
        tex_coords.push(
            set.into_f32()
                .map(|[u, v]| Vec2::new(u, 1.0 - v))
                .collect::<Vec<_>>(),
        );
    }

    let tangent_space = match (reader.read_tangents(), &normals) {
        (Some(tangents), Some(normals)) => {
            let tangents: Vec<Vec4> = tangents.map(Vec4::from).collect();
            let bitangents = normals
                .iter()
                .zip(&tangents)
                .map(|(normal, tangent)| normal.cross(tangent.truncate()) * tangent.w)
                .collect();

            Some(TangentSpace {
                tangents: tangents.iter().map(|tangent| tangent.truncate()).collect(),
                bitangents,
            })
        }
        _ => None,
    };

    let indices: Vec<u32> = match reader.read_indices() {
        Some(indices) => indices.into_u32().collect(),
        None => (0..vertices.len() as u32).collect(),
    };

    Ok(Mesh {
        name: name.to_owned(),
        material_index: primitive.material().index().unwrap_or(0),
        vertices,
        normals,
        tangent_space,
        tex_coords,
        faces: build_faces(primitive.mode(), &indices),
    })
}

fn build_faces(mode: Mode, indices: &[u32]) -> Vec<Face> {
    match mode {
        Mode::Points => indices.iter().map(|&i| Face::new(vec![i])).collect(),
        Mode::Lines => indices
            .chunks_exact(2)
            .map(|line| Face::new(line.to_vec()))
            .collect(),
        Mode::LineStrip => indices
            .windows(2)
            .map(|line| Face::new(line.to_vec()))
            .collect(),
        Mode::LineLoop => {
            let mut faces: Vec<Face> = indices
                .windows(2)
                .map(|line| Face::new(line.to_vec()))
                .collect();
            if let (Some(&first), Some(&last)) = (indices.first(), indices.last()) {
                if indices.len() > 2 {
                    faces.push(Face::new(vec![last, first]));
                }
            }
            faces
        }
        Mode::Triangles => indices
            .chunks_exact(3)
            .map(|triangle| Face::new(triangle.to_vec()))
            .collect(),
        Mode::TriangleStrip => indices
            .windows(3)
            .enumerate()
            .map(|(i, strip)| {
                // Every other triangle of a strip is wound the other way.
                if i % 2 == 0 {
                    Face::new(vec![strip[0], strip[1], strip[2]])
                } else {
                    Face::new(vec![strip[1], strip[0], strip[2]])
                }
            })
            .collect(),
        Mode::TriangleFan => match indices.split_first() {
            Some((&center, rest)) => rest
                .windows(2)
                .map(|pair| Face::new(vec![center, pair[0], pair[1]]))
                .collect(),
            None => vec![],
        },
    }
}
