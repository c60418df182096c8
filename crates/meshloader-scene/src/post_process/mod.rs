use bitflags::bitflags;

use crate::Scene;

mod handedness;
mod normals;
mod optimize;
mod tangents;
mod triangulate;

pub use handedness::make_left_handed;
pub use normals::gen_smooth_normals;
pub use optimize::optimize_meshes;
pub use tangents::calc_tangent_space;
pub use triangulate::triangulate;

bitflags! {
    /// Normalization steps applied to a scene right after it has been read.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PostProcess: u32 {
        /// Splits polygons with more than three indices into triangles.
        const TRIANGULATE = 1 << 0;
        /// Mirrors the scene along Z to convert it to a left-handed coordinate system.
        const MAKE_LEFT_HANDED = 1 << 1;
        /// Generates tangents and bitangents for meshes with normals and texture coordinates.
        const CALC_TANGENT_SPACE = 1 << 2;
        /// Generates smoothed normals for meshes that have none.
        const GEN_SMOOTH_NORMALS = 1 << 3;
        /// Merges meshes of a node that share a material and vertex layout.
        const OPTIMIZE_MESHES = 1 << 4;

        const IMPORT_DEFAULT = Self::TRIANGULATE.bits()
            | Self::MAKE_LEFT_HANDED.bits()
            | Self::CALC_TANGENT_SPACE.bits()
            | Self::GEN_SMOOTH_NORMALS.bits()
            | Self::OPTIMIZE_MESHES.bits();
    }
}

impl Default for PostProcess {
    fn default() -> Self {
        Self::IMPORT_DEFAULT
    }
}

/// Runs every step in `flags` over `scene`. Steps run in a fixed order regardless of how the
/// flags were combined: triangulation, normals, tangents, mesh merging, handedness.
pub fn apply(scene: &mut Scene, flags: PostProcess) {
    meshloader_profiling::profile_function!();

    if flags.contains(PostProcess::TRIANGULATE) {
        scene.meshes.iter_mut().for_each(triangulate);
    }
    if flags.contains(PostProcess::GEN_SMOOTH_NORMALS) {
        scene.meshes.iter_mut().for_each(gen_smooth_normals);
    }
    if flags.contains(PostProcess::CALC_TANGENT_SPACE) {
        scene.meshes.iter_mut().for_each(calc_tangent_space);
    }
    if flags.contains(PostProcess::OPTIMIZE_MESHES) {
        optimize_meshes(scene);
    }
    if flags.contains(PostProcess::MAKE_LEFT_HANDED) {
        make_left_handed(scene);
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::{Face, Matrix4x4, Mesh, Node};

    #[test]
    fn default_is_full_import_set() {
        let flags = PostProcess::default();
        assert!(flags.contains(PostProcess::TRIANGULATE));
        assert!(flags.contains(PostProcess::MAKE_LEFT_HANDED));
        assert!(flags.contains(PostProcess::CALC_TANGENT_SPACE));
        assert!(flags.contains(PostProcess::GEN_SMOOTH_NORMALS));
        assert!(flags.contains(PostProcess::OPTIMIZE_MESHES));
    }

    #[test]
    fn full_pipeline_on_textured_quad() {
        let quad = Mesh {
            vertices: vec![
                Vec3::ZERO,
                Vec3::X,
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::Y,
            ],
            tex_coords: vec![vec![Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y]],
            faces: vec![Face::new(vec![0, 1, 2, 3])],
            ..Default::default()
        };
        let mut root = Node::new("root", Matrix4x4::IDENTITY);
        root.meshes.push(0);
        let mut scene = Scene::new(root, vec![quad]);

        apply(&mut scene, PostProcess::IMPORT_DEFAULT);

        let mesh = &scene.meshes[0];
        assert_eq!(mesh.faces.len(), 2);
        assert!(mesh.faces.iter().all(|face| face.num_indices() == 3));

        // +Z normals of the counter-clockwise quad end up mirrored to -Z.
        let normals = mesh.normals.as_ref().unwrap();
        assert!(normals.iter().all(|n| n.abs_diff_eq(-Vec3::Z, 1e-5)));
        assert!(mesh.has_tangents_and_bitangents());
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn empty_flags_leave_scene_untouched() {
        let mesh = Mesh {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 1.0), Vec3::Y],
            faces: vec![Face::new(vec![0, 1, 2, 3])],
            ..Default::default()
        };
        let mut root = Node::new("root", Matrix4x4::IDENTITY);
        root.meshes.push(0);
        let mut scene = Scene::new(root, vec![mesh]);
        let before = scene.clone();

        apply(&mut scene, PostProcess::empty());
        assert_eq!(scene, before);
    }
}
