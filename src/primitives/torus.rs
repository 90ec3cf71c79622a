use std::f32::consts::PI;

use glam::Vec3;

use crate::types::Vertex;

use super::{Material, MeshData, Primitive};

/// A spring-green, coarsely tessellated torus.
pub fn create_torus() -> Primitive {
    Primitive {
        geometry: torus_mesh(1.0, 0.5, 5, 20, 6.285),
        material: Material {
            base_color: [0.0, 0.98, 0.604],
        },
    }
}

/// Torus in the XY plane: a tube of radius `tube` swept `arc` radians around
/// a center circle of radius `radius`.
pub fn torus_mesh(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
    arc: f32,
) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for j in 0..=radial_segments {
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * arc;
            let v = j as f32 / radial_segments as f32 * 2.0 * PI;

            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let normal = (position - center).normalize();

            vertices.push(Vertex::new(position.to_array(), normal.to_array()));
        }
    }

    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = (tubular_segments + 1) * j + i - 1;
            let b = (tubular_segments + 1) * (j - 1) + i - 1;
            let c = (tubular_segments + 1) * (j - 1) + i;
            let d = (tubular_segments + 1) * j + i;

            indices.extend_from_slice(&[a, b, d]);
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torus_counts() {
        let mesh = create_torus().geometry;
        assert_eq!(mesh.vertex_count(), 6 * 21);
        assert_eq!(mesh.triangle_count(), 5 * 20 * 2);
    }

    #[test]
    fn test_torus_vertices_within_outer_radius() {
        let mesh = torus_mesh(1.0, 0.5, 6, 12, 2.0 * PI);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            let ring_distance = Vec3::new(p.x, p.y, 0.0).length();
            assert!(ring_distance <= 1.5 + 1e-5);
            assert!(ring_distance >= 0.5 - 1e-5);
        }
    }
}
