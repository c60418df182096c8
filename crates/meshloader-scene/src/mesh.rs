use anyhow::{bail, Result};
use glam::{Vec2, Vec3};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<u32>,
}

impl Face {
    pub fn new(indices: Vec<u32>) -> Self {
        Self { indices }
    }

    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }
}

/// Per-vertex tangent frame. Tangents and bitangents only ever exist together.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TangentSpace {
    pub tangents: Vec<Vec3>,
    pub bitangents: Vec<Vec3>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub material_index: usize,

    pub vertices: Vec<Vec3>,
    pub normals: Option<Vec<Vec3>>,
    pub tangent_space: Option<TangentSpace>,
    /// One entry per texture coordinate channel, each holding one coordinate per vertex.
    pub tex_coords: Vec<Vec<Vec2>>,

    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    pub fn has_tangents_and_bitangents(&self) -> bool {
        self.tangent_space.is_some()
    }

    pub fn tex_coords(&self, channel: usize) -> Option<&[Vec2]> {
        self.tex_coords.get(channel).map(Vec::as_slice)
    }

    /// Checks attribute counts, face indices and that every attribute value is finite.
    pub fn validate(&self) -> Result<()> {
        let num_vertices = self.num_vertices();

        if let Some(i) = self.vertices.iter().position(|vertex| !vertex.is_finite()) {
            bail!("Vertex {} has a non-finite position", i);
        }

        if let Some(normals) = &self.normals {
            if normals.len() != num_vertices {
                bail!("{} normals for {} vertices", normals.len(), num_vertices);
            }
            if let Some(i) = normals.iter().position(|normal| !normal.is_finite()) {
                bail!("Vertex {} has a non-finite normal", i);
            }
        }

        if let Some(tangent_space) = &self.tangent_space {
            if tangent_space.tangents.len() != num_vertices
                || tangent_space.bitangents.len() != num_vertices
            {
                bail!(
                    "{} tangents and {} bitangents for {} vertices",
                    tangent_space.tangents.len(),
                    tangent_space.bitangents.len(),
                    num_vertices
                );
            }
            if !tangent_space
                .tangents
                .iter()
                .chain(&tangent_space.bitangents)
                .all(|v| v.is_finite())
            {
                bail!("Tangent space has non-finite values");
            }
        }

        for (channel, tex_coords) in self.tex_coords.iter().enumerate() {
            if tex_coords.len() != num_vertices {
                bail!(
                    "{} texture coordinates in channel {} for {} vertices",
                    tex_coords.len(),
                    channel,
                    num_vertices
                );
            }
            if let Some(i) = tex_coords.iter().position(|uv| !uv.is_finite()) {
                bail!(
                    "Vertex {} has a non-finite texture coordinate in channel {}",
                    i,
                    channel
                );
            }
        }

        for (i, face) in self.faces.iter().enumerate() {
            if let Some(index) = face.indices.iter().find(|&&index| index as usize >= num_vertices) {
                bail!(
                    "Face {} references vertex {} but the mesh only has {} vertices",
                    i,
                    index,
                    num_vertices
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        Mesh {
            vertices: vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y],
            faces: vec![Face::new(vec![0, 1, 2, 3])],
            ..Default::default()
        }
    }

    #[test]
    fn valid_quad() {
        assert!(quad().validate().is_ok());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut mesh = quad();
        mesh.faces.push(Face::new(vec![0, 1, 4]));
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn attribute_count_mismatch_is_rejected() {
        let mut mesh = quad();
        mesh.normals = Some(vec![Vec3::Z; 3]);
        assert!(mesh.validate().is_err());

        let mut mesh = quad();
        mesh.tex_coords.push(vec![Vec2::ZERO; 5]);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn non_finite_attributes_are_rejected() {
        let mut mesh = quad();
        mesh.vertices[1].x = f32::NAN;
        assert!(mesh.validate().is_err());

        let mut mesh = quad();
        mesh.normals = Some(vec![Vec3::Z, Vec3::Z, Vec3::splat(f32::INFINITY), Vec3::Z]);
        assert!(mesh.validate().is_err());

        let mut mesh = quad();
        mesh.tex_coords
            .push(vec![Vec2::ZERO, Vec2::new(0.0, f32::NAN), Vec2::ONE, Vec2::Y]);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn tex_coords_by_channel() {
        let mut mesh = quad();
        assert!(mesh.tex_coords(0).is_none());

        mesh.tex_coords.push(vec![Vec2::ONE; 4]);
        assert_eq!(mesh.tex_coords(0).map(<[Vec2]>::len), Some(4));
        assert!(mesh.tex_coords(1).is_none());
    }
}
