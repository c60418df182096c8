use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::{Vec2, Vec3};

use super::ROOT_NODE_NAME;
use crate::{Face, Matrix4x4, Mesh, Node, Scene};

/// Reads a Wavefront `.obj` file. Every object becomes a child of the root node holding a single
/// mesh. Polygons are kept as declared.
pub fn read_obj(path: &Path) -> Result<Scene> {
    meshloader_profiling::profile_function!();

    let (models, materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            single_index: true,
            triangulate: false,
            ..Default::default()
        },
    )
    .with_context(|| format!("Failed to parse OBJ {}", path.display()))?;

    if let Err(err) = materials {
        log::warn!("Ignoring materials of {}: {}", path.display(), err);
    }

    let mut root = Node::new(ROOT_NODE_NAME, Matrix4x4::IDENTITY);
    let mut meshes = Vec::with_capacity(models.len());

    for model in models {
        let mesh = read_model_mesh(&model.name, model.mesh)
            .with_context(|| format!("Failed to process object \"{}\"", model.name))?;

        let mut node = Node::new(&model.name, Matrix4x4::IDENTITY);
        node.meshes.push(meshes.len());
        root.children.push(node);
        meshes.push(mesh);
    }

    Ok(Scene::new(root, meshes))
}

fn read_model_mesh(name: &str, mesh: tobj::Mesh) -> Result<Mesh> {
    if mesh.positions.len() % 3 != 0 {
        bail!("Position data is not a multiple of 3");
    }

    let num_vertices = mesh.positions.len() / 3;
    let vertices: Vec<Vec3> = mesh
        .positions
        .chunks_exact(3)
        .map(Vec3::from_slice)
        .collect();

    let normals: Option<Vec<Vec3>> = if mesh.normals.len() == num_vertices * 3 && num_vertices > 0 {
        Some(mesh.normals.chunks_exact(3).map(Vec3::from_slice).collect())
    } else {
        if !mesh.normals.is_empty() {
            log::warn!("Ignoring incomplete normals of \"{}\"", name);
        }
        None
    };

    let tex_coords: Vec<Vec<Vec2>> = if mesh.texcoords.len() == num_vertices * 2 && num_vertices > 0 {
        vec![mesh
            .texcoords
            .chunks_exact(2)
            .map(Vec2::from_slice)
            .collect()]
    } else {
        if !mesh.texcoords.is_empty() {
            log::warn!("Ignoring incomplete texture coordinates of \"{}\"", name);
        }
        vec![]
    };

    let faces: Vec<Face> = if mesh.face_arities.is_empty() {
        if mesh.indices.len() % 3 != 0 {
            bail!("Triangle index data is not a multiple of 3");
        }
        mesh.indices
            .chunks_exact(3)
            .map(|triangle| Face::new(triangle.to_vec()))
            .collect()
    } else {
        let mut faces = Vec::with_capacity(mesh.face_arities.len());
        let mut remaining = mesh.indices.as_slice();
        for &arity in &mesh.face_arities {
            let arity = arity as usize;
            if arity > remaining.len() {
                bail!("Face arities exceed the index data");
            }
            let (face, rest) = remaining.split_at(arity);
            faces.push(Face::new(face.to_vec()));
            remaining = rest;
        }
        faces
    };

    Ok(Mesh {
        name: name.to_owned(),
        material_index: mesh.material_id.unwrap_or(0),
        vertices,
        normals,
        tangent_space: None,
        tex_coords,
        faces,
    })
}
