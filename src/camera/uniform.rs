use glam::Mat3;

use super::core::Camera;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer layout holding the camera's derived matrices.
///
/// All matrices are column-major. The view-normal matrix columns are
/// padded to `vec4` to match WGSL `mat3x3` alignment.
pub struct CameraUniform {
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix of the selected strategy.
    pub proj: [[f32; 4]; 4],
    /// View-normal matrix (transpose of the inverse of the view's upper
    /// 3×3), columns padded.
    pub view_normal: [[f32; 4]; 3],
    /// Camera world-space position.
    pub eye: [f32; 3],
    /// Uniform world-scale factor.
    pub world_scale: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: glam::Mat4::IDENTITY.to_cols_array_2d(),
            proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            view_normal: pad_mat3(Mat3::IDENTITY),
            eye: [0.0; 3],
            world_scale: 1.0,
        }
    }

    /// Refresh all fields from the given camera's current state.
    pub fn update(&mut self, camera: &Camera) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.proj = camera.proj_matrix().to_cols_array_2d();
        self.view_normal = pad_mat3(camera.view_normal_matrix());
        self.eye = camera.eye().to_array();
        self.world_scale = camera.world_scale();
    }
}

fn pad_mat3(m: Mat3) -> [[f32; 4]; 3] {
    [
        [m.x_axis.x, m.x_axis.y, m.x_axis.z, 0.0],
        [m.y_axis.x, m.y_axis.y, m.y_axis.z, 0.0],
        [m.z_axis.x, m.z_axis.y, m.z_axis.z, 0.0],
    ]
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn update_mirrors_camera_state() {
        let mut camera = Camera::new();
        camera.set_eye(Some(Vec3::new(1.0, 2.0, -6.0)));
        camera.set_world_scale(2.0);

        let mut uniform = CameraUniform::new();
        uniform.update(&camera);

        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(uniform.proj, camera.proj_matrix().to_cols_array_2d());
        assert_eq!(uniform.eye, [1.0, 2.0, -6.0]);
        assert_eq!(uniform.world_scale, 2.0);

        let normal = camera.view_normal_matrix();
        assert_eq!(uniform.view_normal[0][0], normal.x_axis.x);
        assert_eq!(uniform.view_normal[2][2], normal.z_axis.z);
        // Padding lanes stay zero.
        assert_eq!(uniform.view_normal[0][3], 0.0);
        assert_eq!(uniform.view_normal[1][3], 0.0);
        assert_eq!(uniform.view_normal[2][3], 0.0);
    }

    #[test]
    fn default_is_identity() {
        let uniform = CameraUniform::default();
        assert_eq!(uniform.view, glam::Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(uniform.world_scale, 1.0);
    }
}
