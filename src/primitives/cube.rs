use crate::types::Vertex;

use super::{Material, MeshData, Primitive};

/// A purple 2x2x2 box.
pub fn create_cube() -> Primitive {
    Primitive {
        geometry: box_mesh(2.0, 2.0, 2.0),
        material: Material {
            base_color: [0.5, 0.0, 0.5],
        },
    }
}

/// Axis-aligned box centered at the origin. Each face carries its own four
/// vertices so the normals stay flat.
pub fn box_mesh(width: f32, height: f32, depth: f32) -> MeshData {
    let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);

    #[rustfmt::skip]
    let vertices = vec![
        // Front face (Z+)
        Vertex::new([-hw, -hh,  hd], [ 0.0,  0.0,  1.0]),
        Vertex::new([ hw, -hh,  hd], [ 0.0,  0.0,  1.0]),
        Vertex::new([ hw,  hh,  hd], [ 0.0,  0.0,  1.0]),
        Vertex::new([-hw,  hh,  hd], [ 0.0,  0.0,  1.0]),
        // Back face (Z-)
        Vertex::new([ hw, -hh, -hd], [ 0.0,  0.0, -1.0]),
        Vertex::new([-hw, -hh, -hd], [ 0.0,  0.0, -1.0]),
        Vertex::new([-hw,  hh, -hd], [ 0.0,  0.0, -1.0]),
        Vertex::new([ hw,  hh, -hd], [ 0.0,  0.0, -1.0]),
        // Top face (Y+)
        Vertex::new([-hw,  hh,  hd], [ 0.0,  1.0,  0.0]),
        Vertex::new([ hw,  hh,  hd], [ 0.0,  1.0,  0.0]),
        Vertex::new([ hw,  hh, -hd], [ 0.0,  1.0,  0.0]),
        Vertex::new([-hw,  hh, -hd], [ 0.0,  1.0,  0.0]),
        // Bottom face (Y-)
        Vertex::new([-hw, -hh, -hd], [ 0.0, -1.0,  0.0]),
        Vertex::new([ hw, -hh, -hd], [ 0.0, -1.0,  0.0]),
        Vertex::new([ hw, -hh,  hd], [ 0.0, -1.0,  0.0]),
        Vertex::new([-hw, -hh,  hd], [ 0.0, -1.0,  0.0]),
        // Right face (X+)
        Vertex::new([ hw, -hh,  hd], [ 1.0,  0.0,  0.0]),
        Vertex::new([ hw, -hh, -hd], [ 1.0,  0.0,  0.0]),
        Vertex::new([ hw,  hh, -hd], [ 1.0,  0.0,  0.0]),
        Vertex::new([ hw,  hh,  hd], [ 1.0,  0.0,  0.0]),
        // Left face (X-)
        Vertex::new([-hw, -hh, -hd], [-1.0,  0.0,  0.0]),
        Vertex::new([-hw, -hh,  hd], [-1.0,  0.0,  0.0]),
        Vertex::new([-hw,  hh,  hd], [-1.0,  0.0,  0.0]),
        Vertex::new([-hw,  hh, -hd], [-1.0,  0.0,  0.0]),
    ];

    #[rustfmt::skip]
    let indices: Vec<u32> = vec![
        0,  1,  2,  2,  3,  0,  // front
        4,  5,  6,  6,  7,  4,  // back
        8,  9,  10, 10, 11, 8,  // top
        12, 13, 14, 14, 15, 12, // bottom
        16, 17, 18, 18, 19, 16, // right
        20, 21, 22, 22, 23, 20, // left
    ];

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let mesh = create_cube().geometry;
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_box_spans_requested_extents() {
        let mesh = box_mesh(2.0, 2.0, 2.0);
        for v in &mesh.vertices {
            for c in v.position {
                assert!((c.abs() - 1.0).abs() < 1e-6);
            }
        }
    }
}
