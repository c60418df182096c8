use glam::{Vec2, Vec3};

use crate::{Face, Mesh, TangentSpace};

struct TangentGeometry<'a> {
    vertices: &'a [Vec3],
    normals: &'a [Vec3],
    tex_coords: &'a [Vec2],
    faces: &'a [Face],

    tangents: Vec<Vec3>,
    signs: Vec<f32>,
}

impl TangentGeometry<'_> {
    fn index(&self, face: usize, vert: usize) -> usize {
        self.faces[face].indices[vert] as usize
    }
}

impl mikktspace::Geometry for TangentGeometry<'_> {
    fn num_faces(&self) -> usize {
        self.faces.len()
    }

    fn num_vertices_of_face(&self, face: usize) -> usize {
        self.faces[face].num_indices()
    }

    fn position(&self, face: usize, vert: usize) -> [f32; 3] {
        self.vertices[self.index(face, vert)].into()
    }

    fn normal(&self, face: usize, vert: usize) -> [f32; 3] {
        self.normals[self.index(face, vert)].into()
    }

    fn tex_coord(&self, face: usize, vert: usize) -> [f32; 2] {
        self.tex_coords[self.index(face, vert)].into()
    }

    fn set_tangent_encoded(&mut self, tangent: [f32; 4], face: usize, vert: usize) {
        let i = self.index(face, vert);
        self.tangents[i] = Vec3::new(tangent[0], tangent[1], tangent[2]);
        self.signs[i] = tangent[3];
    }
}

/// Generates a MikkTSpace tangent frame from the normals and first texture coordinate channel.
///
/// Meshes that already have tangents, lack normals or texture coordinates, contain faces
/// other than triangles and quads, or have all their vertices in one point are left untouched.
pub fn calc_tangent_space(mesh: &mut Mesh) {
    meshloader_profiling::profile_function!();

    if mesh.has_tangents_and_bitangents() || mesh.faces.is_empty() {
        return;
    }
    let (Some(normals), Some(tex_coords)) = (mesh.normals.as_deref(), mesh.tex_coords(0)) else {
        return;
    };
    if !mesh
        .faces
        .iter()
        .all(|face| matches!(face.num_indices(), 3 | 4))
    {
        log::debug!(
            "Skipping tangent generation for \"{}\": only triangles and quads are supported",
            mesh.name
        );
        return;
    }
    if has_zero_extent(&mesh.vertices) {
        log::debug!(
            "Skipping tangent generation for \"{}\": all vertices coincide",
            mesh.name
        );
        return;
    }

    let mut geometry = TangentGeometry {
        vertices: &mesh.vertices,
        normals,
        tex_coords,
        faces: &mesh.faces,
        tangents: vec![Vec3::ZERO; mesh.vertices.len()],
        signs: vec![1.0; mesh.vertices.len()],
    };

    if !mikktspace::generate_tangents(&mut geometry) {
        log::warn!("Failed to generate tangents for \"{}\"", mesh.name);
        return;
    }

    let bitangents = normals
        .iter()
        .zip(&geometry.tangents)
        .zip(&geometry.signs)
        .map(|((normal, tangent), sign)| normal.cross(*tangent) * *sign)
        .collect();
    let tangents = geometry.tangents;

    mesh.tangent_space = Some(TangentSpace {
        tangents,
        bitangents,
    });
}

fn has_zero_extent(vertices: &[Vec3]) -> bool {
    let (min, max) = vertices.iter().fold(
        (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
        |(min, max), &vertex| (min.min(vertex), max.max(vertex)),
    );
    !(max - min).cmpgt(Vec3::ZERO).any()
}
