use glam::{Mat4, Quat, Vec3};

/// Local-to-parent transform of an imported node.
///
/// Keeps both the decomposed translation/rotation/scale and the matrix it was built from,
/// decomposition drops shear so [`Transform::get_matrix`] returns the source matrix untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
    matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            matrix: Mat4::IDENTITY,
        }
    }
}

impl From<Mat4> for Transform {
    fn from(matrix: Mat4) -> Self {
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        Self {
            translation,
            rotation,
            scale,
            matrix,
        }
    }
}

impl Transform {
    pub fn get_translation(&self) -> Vec3 {
        self.translation
    }

    pub fn get_rotation(&self) -> Quat {
        self.rotation
    }

    pub fn get_scale(&self) -> Vec3 {
        self.scale
    }

    pub fn get_matrix(&self) -> Mat4 {
        self.matrix
    }
}
