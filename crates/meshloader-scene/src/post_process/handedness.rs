use crate::{Node, Scene};

fn mirror_node(node: &mut Node) {
    node.transformation.mirror_z();
    node.children.iter_mut().for_each(mirror_node);
}

/// Converts a right-handed scene to left-handed by mirroring everything along the Z axis.
pub fn make_left_handed(scene: &mut Scene) {
    meshloader_profiling::profile_function!();

    for mesh in &mut scene.meshes {
        for vertex in &mut mesh.vertices {
            vertex.z = -vertex.z;
        }
        if let Some(normals) = &mut mesh.normals {
            for normal in normals {
                normal.z = -normal.z;
            }
        }
        if let Some(tangent_space) = &mut mesh.tangent_space {
            for tangent in &mut tangent_space.tangents {
                tangent.z = -tangent.z;
            }
            for bitangent in &mut tangent_space.bitangents {
                bitangent.z = -bitangent.z;
            }
        }
    }

    mirror_node(&mut scene.root);
}
