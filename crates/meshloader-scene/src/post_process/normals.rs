use std::collections::HashMap;

use glam::Vec3;

use crate::Mesh;

// Adding 0.0 folds -0.0 into 0.0 so both hash to the same key.
fn position_key(position: Vec3) -> [u32; 3] {
    (position + Vec3::ZERO).to_array().map(f32::to_bits)
}

/// Generates normals for a mesh that has none by averaging the area weighted normals of every
/// polygon touching a position. Vertices that share a position share a normal.
pub fn gen_smooth_normals(mesh: &mut Mesh) {
    meshloader_profiling::profile_function!();

    if mesh.has_normals() {
        return;
    }

    let mut vertex_normals = vec![Vec3::ZERO; mesh.num_vertices()];
    for face in &mesh.faces {
        if face.num_indices() < 3 {
            continue;
        }

        // Fan sum of cross products, twice the polygon's area along its normal.
        let p0 = mesh.vertices[face.indices[0] as usize];
        let mut face_normal = Vec3::ZERO;
        for pair in face.indices[1..].windows(2) {
            let p1 = mesh.vertices[pair[0] as usize];
            let p2 = mesh.vertices[pair[1] as usize];
            face_normal += (p1 - p0).cross(p2 - p0);
        }

        for &index in &face.indices {
            vertex_normals[index as usize] += face_normal;
        }
    }

    let mut position_normals: HashMap<[u32; 3], Vec3> = HashMap::new();
    for (position, normal) in mesh.vertices.iter().zip(&vertex_normals) {
        *position_normals
            .entry(position_key(*position))
            .or_insert(Vec3::ZERO) += *normal;
    }

    let normals = mesh
        .vertices
        .iter()
        .map(|position| {
            position_normals
                .get(&position_key(*position))
                .copied()
                .unwrap_or(Vec3::ZERO)
                .normalize_or_zero()
        })
        .collect();
    mesh.normals = Some(normals);
}
