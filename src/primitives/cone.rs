use std::f32::consts::PI;

use glam::Vec3;

use crate::types::Vertex;

use super::{Material, MeshData, Primitive};

/// An orange four-sided cone; reads as a triangle from every side.
pub fn create_cone() -> Primitive {
    Primitive {
        geometry: cone_mesh(1.0, 2.0, 4),
        material: Material {
            base_color: [1.0, 0.647, 0.0],
        },
    }
}

/// Flat-shaded cone centered at the origin: apex at `+height/2`, base disc at
/// `-height/2`. Each side face gets its own vertices so the facets stay hard.
pub fn cone_mesh(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let half = height * 0.5;
    let apex = Vec3::new(0.0, half, 0.0);
    let slant = (height * height + radius * radius).sqrt();

    let base_point = |i: u32| {
        let theta = 2.0 * PI * i as f32 / radial_segments as f32;
        Vec3::new(radius * theta.cos(), -half, radius * theta.sin())
    };

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // sides, one hard-edged face per segment
    for i in 0..radial_segments {
        let p0 = base_point(i);
        let p1 = base_point(i + 1);

        let theta_mid = 2.0 * PI * (i as f32 + 0.5) / radial_segments as f32;
        let normal = Vec3::new(
            height * theta_mid.cos() / slant,
            radius / slant,
            height * theta_mid.sin() / slant,
        )
        .normalize();

        let base = vertices.len() as u32;
        vertices.push(Vertex::new(p0.to_array(), normal.to_array()));
        vertices.push(Vertex::new(p1.to_array(), normal.to_array()));
        vertices.push(Vertex::new(apex.to_array(), normal.to_array()));
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    // base cap, fanned around the center
    let down = [0.0, -1.0, 0.0];
    let center = vertices.len() as u32;
    vertices.push(Vertex::new([0.0, -half, 0.0], down));
    for i in 0..radial_segments {
        vertices.push(Vertex::new(base_point(i).to_array(), down));
    }
    for i in 0..radial_segments {
        let rim = center + 1 + i;
        let next = center + 1 + (i + 1) % radial_segments;
        indices.extend_from_slice(&[center, next, rim]);
    }

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_counts() {
        let mesh = create_cone().geometry;
        // 4 side faces * 3 vertices + base center + 4 rim vertices
        assert_eq!(mesh.vertex_count(), 17);
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn test_cone_apex_and_base_heights() {
        let mesh = cone_mesh(1.0, 2.0, 4);
        let ys: Vec<f32> = mesh.vertices.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().any(|&y| (y - 1.0).abs() < 1e-6));
        assert!(ys.iter().all(|&y| y <= 1.0 + 1e-6 && y >= -1.0 - 1e-6));
    }

    #[test]
    fn test_side_normals_point_outward_and_up() {
        let mesh = cone_mesh(1.0, 2.0, 8);
        // side vertices come first: 8 faces * 3 vertices
        for v in mesh.vertices.iter().take(24) {
            let n = Vec3::from_array(v.normal);
            let p = Vec3::from_array(v.position);
            assert!(n.y > 0.0);
            let radial = Vec3::new(p.x, 0.0, p.z);
            if radial.length() > 1e-6 {
                assert!(n.dot(radial.normalize()) > 0.0);
            }
        }
    }
}
