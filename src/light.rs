//! Light definitions and the light factory.

use glam::Vec3;

use crate::transform::Transform;

/// A directional light (sun-like). The owning scene node's world position
/// orients the light toward the origin.
#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    /// Light color.
    pub color: Vec3,
    /// Light intensity.
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 1.0,
        }
    }
}

/// The scene's single light: white, intensity 4, up-right and toward the
/// viewer.
pub fn create_lights() -> (DirectionalLight, Transform) {
    let light = DirectionalLight {
        color: Vec3::ONE,
        intensity: 4.0,
    };
    let transform = Transform::new().with_position(Vec3::new(10.0, 10.0, 10.0));
    (light, transform)
}
