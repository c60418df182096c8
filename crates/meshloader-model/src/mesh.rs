use glam::{Vec2, Vec3};
use meshloader_scene::Mesh;

use crate::MeshData;

/// Copies the vertex attributes and faces of a scene mesh into a [`MeshData`].
///
/// Texture coordinates come from the first channel with V flipped (`v' = 1 - v`). Faces are
/// flattened in source order using each face's own index count.
pub fn process_mesh(mesh: &Mesh) -> MeshData {
    meshloader_profiling::profile_function!();

    let num_vertices = mesh.num_vertices();
    let normals = mesh.normals.as_deref();
    let tex_coords = mesh.tex_coords(0);
    let tangents = mesh
        .tangent_space
        .as_ref()
        .map(|tangent_space| tangent_space.tangents.as_slice());

    let mut mesh_data = MeshData {
        vertices: Vec::with_capacity(num_vertices),
        triangles: Vec::with_capacity(mesh.faces.iter().map(|face| face.num_indices()).sum()),
        normals: Vec::with_capacity(num_vertices),
        uvs: tex_coords.map(|_| Vec::with_capacity(num_vertices)),
        tangents: tangents.map(|_| Vec::with_capacity(num_vertices)),
    };

    for j in 0..num_vertices {
        mesh_data.vertices.push(mesh.vertices[j]);
        mesh_data
            .normals
            .push(normals.map_or(Vec3::ZERO, |normals| normals[j]));

        if let (Some(uvs), Some(tex_coords)) = (&mut mesh_data.uvs, tex_coords) {
            let tex_coord = tex_coords[j];
            uvs.push(Vec2::new(tex_coord.x, 1.0 - tex_coord.y));
        }

        if let (Some(mesh_tangents), Some(tangents)) = (&mut mesh_data.tangents, tangents) {
            mesh_tangents.push(tangents[j]);
        }
    }

    log::debug!("Mesh \"{}\": {} faces", mesh.name, mesh.num_faces());
    for face in &mesh.faces {
        mesh_data.triangles.extend_from_slice(&face.indices);
    }

    mesh_data
}

#[cfg(test)]
mod tests {
    use meshloader_scene::{Face, TangentSpace};

    use super::*;

    fn bare_triangle() -> Mesh {
        Mesh {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            faces: vec![Face::new(vec![0, 1, 2])],
            ..Default::default()
        }
    }

    #[test]
    fn bare_triangle_gets_zero_normals_and_no_optional_attributes() {
        let mesh_data = process_mesh(&bare_triangle());

        assert_eq!(mesh_data.vertices, vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
        assert_eq!(mesh_data.normals, vec![Vec3::ZERO; 3]);
        assert_eq!(mesh_data.uvs, None);
        assert_eq!(mesh_data.tangents, None);
        assert_eq!(mesh_data.triangles, vec![0, 1, 2]);
    }

    #[test]
    fn source_normals_are_copied_per_vertex() {
        let mut mesh = bare_triangle();
        mesh.normals = Some(vec![Vec3::Z, Vec3::Y, Vec3::X]);

        let mesh_data = process_mesh(&mesh);
        assert_eq!(mesh_data.normals.len(), mesh_data.vertices.len());
        assert_eq!(mesh_data.normals, vec![Vec3::Z, Vec3::Y, Vec3::X]);
    }

    #[test]
    fn uvs_are_flipped_vertically() {
        let mut mesh = bare_triangle();
        mesh.tex_coords = vec![
            vec![Vec2::new(0.25, 0.0), Vec2::new(0.5, 0.25), Vec2::new(1.0, 1.0)],
            vec![Vec2::ONE; 3],
        ];

        let mesh_data = process_mesh(&mesh);
        assert_eq!(
            mesh_data.uvs(),
            &[Vec2::new(0.25, 1.0), Vec2::new(0.5, 0.75), Vec2::new(1.0, 0.0)]
        );

        // Flipping again restores the source coordinates.
        let restored: Vec<Vec2> = mesh_data
            .uvs()
            .iter()
            .map(|uv| Vec2::new(uv.x, 1.0 - uv.y))
            .collect();
        assert_eq!(restored, mesh.tex_coords[0]);
    }

    #[test]
    fn tangents_require_tangent_space() {
        let mut mesh = bare_triangle();
        mesh.tangent_space = Some(TangentSpace {
            tangents: vec![Vec3::X; 3],
            bitangents: vec![Vec3::Y; 3],
        });

        let mesh_data = process_mesh(&mesh);
        assert_eq!(mesh_data.tangents(), &[Vec3::X; 3]);
    }

    #[test]
    fn mixed_face_sizes_are_flattened_in_order() {
        let mesh = Mesh {
            vertices: vec![Vec3::ZERO; 5],
            faces: vec![
                Face::new(vec![4]),
                Face::new(vec![0, 1, 2, 3]),
                Face::new(vec![3, 2]),
            ],
            ..Default::default()
        };

        let mesh_data = process_mesh(&mesh);
        let expected_len: usize = mesh.faces.iter().map(Face::num_indices).sum();
        assert_eq!(mesh_data.triangles.len(), expected_len);
        assert_eq!(mesh_data.triangles, vec![4, 0, 1, 2, 3, 3, 2]);
    }

    #[test]
    fn empty_mesh_is_valid() {
        let mesh_data = process_mesh(&Mesh::default());
        assert!(mesh_data.vertices.is_empty());
        assert!(mesh_data.normals.is_empty());
        assert!(mesh_data.triangles.is_empty());
    }
}
