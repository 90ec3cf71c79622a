use std::f32::consts::PI;

use crate::types::Vertex;

use super::{Material, MeshData, Primitive};

/// A cyan unit sphere.
pub fn create_sphere() -> Primitive {
    Primitive {
        geometry: sphere_mesh(1.0, 40, 16),
        material: Material {
            base_color: [0.0, 1.0, 1.0],
        },
    }
}

/// UV sphere centered at the origin, built from latitude rings swept through
/// `segments` longitudinal steps.
pub fn sphere_mesh(radius: f32, segments: u32, rings: u32) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for seg in 0..=segments {
            let theta = 2.0 * PI * seg as f32 / segments as f32;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();

            vertices.push(Vertex::new(
                [x * radius, y * radius, z * radius],
                [x, y, z],
            ));
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;

            indices.push(current);
            indices.push(next);
            indices.push(current + 1);

            indices.push(current + 1);
            indices.push(next);
            indices.push(next + 1);
        }
    }

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_sphere_counts() {
        let mesh = create_sphere().geometry;
        assert_eq!(mesh.vertex_count(), 41 * 17);
        assert_eq!(mesh.triangle_count(), 40 * 16 * 2);
    }

    #[test]
    fn test_sphere_vertices_lie_on_radius() {
        let mesh = sphere_mesh(1.0, 8, 4);
        for v in &mesh.vertices {
            let len = Vec3::from_array(v.position).length();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_pole_vertices_at_radius() {
        let mesh = sphere_mesh(2.0, 8, 4);
        assert!((mesh.vertices[0].position[1] - 2.0).abs() < 1e-5);
        let last = mesh.vertices.last().unwrap();
        assert!((last.position[1] + 2.0).abs() < 1e-5);
    }
}
