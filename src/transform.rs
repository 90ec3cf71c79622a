//! Local transform component for scene nodes.
//!
//! A [`Transform`] stores position, rotation, and scale. The local matrix is
//! composed from those components on every read, so the components can never
//! silently disagree with a stale cached matrix. A node that prefers to work
//! in matrix form can install one with [`Transform::set_matrix`] (or compose
//! the current components once with [`Transform::bake_matrix`]); from then on
//! the installed matrix is the single source of truth until it is cleared.

use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Debug)]
pub struct Transform {
    /// Position relative to the parent frame.
    pub position: Vec3,
    /// Rotation as a quaternion.
    pub rotation: Quat,
    /// Per-axis scale factor.
    pub scale: Vec3,
    matrix_override: Option<Mat4>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            matrix_override: None,
        }
    }
}

impl Transform {
    /// Create an identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform with the given position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Create a transform with the given rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Create a transform with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Set the rotation from intrinsic XYZ Euler angles, in radians.
    pub fn set_euler(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, x, y, z);
    }

    /// Rotate around the local Z axis by `angle` radians.
    pub fn rotate_z(&mut self, angle: f32) {
        self.rotation *= Quat::from_rotation_z(angle);
    }

    /// Install `matrix` as the authoritative local matrix.
    ///
    /// The position/rotation/scale components stop contributing to
    /// [`Transform::local_matrix`] until [`Transform::clear_matrix`] runs.
    pub fn set_matrix(&mut self, matrix: Mat4) {
        self.matrix_override = Some(matrix);
    }

    /// Compose the current components into a matrix and install it as the
    /// authoritative local matrix. Component mutations made afterwards have
    /// no effect until the matrix is re-baked or cleared.
    pub fn bake_matrix(&mut self) {
        self.matrix_override = Some(self.compose());
    }

    /// Return to component-driven mode.
    pub fn clear_matrix(&mut self) {
        self.matrix_override = None;
    }

    /// Whether an installed matrix currently overrides the components.
    pub fn is_matrix_authoritative(&self) -> bool {
        self.matrix_override.is_some()
    }

    /// The local transformation matrix.
    ///
    /// Composed fresh from position/rotation/scale, unless an authoritative
    /// matrix has been installed, in which case that matrix is returned.
    pub fn local_matrix(&self) -> Mat4 {
        self.matrix_override.unwrap_or_else(|| self.compose())
    }

    fn compose(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}
