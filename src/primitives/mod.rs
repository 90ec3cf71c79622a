//! Primitive mesh factories.
//!
//! Each factory produces CPU-side geometry plus a material; the renderer
//! uploads the buffers the first time the node is drawn.

mod cone;
mod cube;
mod sphere;
mod torus;

pub use cone::create_cone;
pub use cube::create_cube;
pub use sphere::create_sphere;
pub use torus::create_torus;

use crate::types::Vertex;

/// CPU-side indexed triangle mesh.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Solid-color material.
#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub base_color: [f32; 3],
}

/// A renderable primitive: geometry plus material.
#[derive(Clone, Debug)]
pub struct Primitive {
    pub geometry: MeshData,
    pub material: Material,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn assert_unit_normals(mesh: &MeshData) {
        for v in &mesh.vertices {
            let len = Vec3::from_array(v.normal).length();
            assert!((len - 1.0).abs() < 1e-4, "non-unit normal: {:?}", v.normal);
        }
    }

    #[test]
    fn test_factories_produce_well_formed_meshes() {
        for primitive in [
            create_cube(),
            create_sphere(),
            create_torus(),
            create_cone(),
        ] {
            let mesh = &primitive.geometry;
            assert!(!mesh.vertices.is_empty());
            assert_eq!(mesh.index_count() % 3, 0);
            let max = *mesh.indices.iter().max().unwrap() as usize;
            assert!(max < mesh.vertex_count(), "index out of range");
            assert_unit_normals(mesh);
        }
    }
}
