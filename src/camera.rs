//! Perspective camera with an explicitly recomputed projection.

use glam::{Mat4, Vec3};

/// A look-at perspective camera.
///
/// The projection matrix is cached and recomputed only by
/// [`Camera::update_projection`]; [`Camera::set_aspect`] stores the new ratio
/// and triggers that recompute, so the projection always reflects the current
/// viewport by the time a frame is drawn.
#[derive(Clone, Debug)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    projection: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create the camera with its front-of-scene defaults.
    pub fn new() -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            fov_y: 35.0_f32.to_radians(),
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Store a new aspect ratio and recompute the projection.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection();
    }

    /// Recompute the cached projection matrix from the current parameters.
    pub fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}
