use crate::{Face, Mesh};

/// Fan-splits every face with more than three indices. Point and line faces are kept as is.
pub fn triangulate(mesh: &mut Mesh) {
    meshloader_profiling::profile_function!();

    if mesh.faces.iter().all(|face| face.num_indices() <= 3) {
        return;
    }

    let mut faces = Vec::with_capacity(mesh.faces.len());
    for face in mesh.faces.drain(..) {
        if face.num_indices() <= 3 {
            faces.push(face);
            continue;
        }

        let first = face.indices[0];
        for pair in face.indices[1..].windows(2) {
            faces.push(Face::new(vec![first, pair[0], pair[1]]));
        }
    }
    mesh.faces = faces;
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn pentagon_becomes_three_triangles() {
        let mut mesh = Mesh {
            vertices: vec![Vec3::ZERO; 5],
            faces: vec![Face::new(vec![0, 1, 2, 3, 4])],
            ..Default::default()
        };
        triangulate(&mut mesh);

        let faces: Vec<_> = mesh.faces.iter().map(|face| face.indices.clone()).collect();
        assert_eq!(faces, vec![vec![0, 1, 2], vec![0, 2, 3], vec![0, 3, 4]]);
    }

    #[test]
    fn points_lines_and_triangles_are_kept_in_order() {
        let mut mesh = Mesh {
            vertices: vec![Vec3::ZERO; 4],
            faces: vec![
                Face::new(vec![0]),
                Face::new(vec![0, 1]),
                Face::new(vec![0, 1, 2, 3]),
                Face::new(vec![1, 2, 3]),
            ],
            ..Default::default()
        };
        triangulate(&mut mesh);

        let sizes: Vec<_> = mesh.faces.iter().map(Face::num_indices).collect();
        assert_eq!(sizes, vec![1, 2, 3, 3, 3]);
        assert_eq!(mesh.faces[4].indices, vec![1, 2, 3]);
    }
}
