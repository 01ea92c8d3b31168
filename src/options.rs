//! Camera configuration block for viewer UIs and presets.
//!
//! Settings serialize with serde and carry a JSON Schema so an owning
//! viewer can expose them through a schema-driven options panel. Applying
//! a block to a live [`Camera`] goes through the ordinary setters, so
//! dirty-flag and redraw propagation hold.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, ProjectionType};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera behavior and projection parameters.
pub struct CameraOptions {
    /// Uniform world-scale factor baked into the view matrix.
    #[schemars(title = "World Scale", range(min = 0.01, max = 100.0))]
    pub world_scale: f32,
    /// Pivot yaw rotations about world-up instead of the camera's up.
    #[schemars(title = "Gimbal Lock")]
    pub gimbal_lock: bool,
    /// Reject pitch rotations that would flip the camera past vertical.
    #[schemars(title = "Constrain Pitch")]
    pub constrain_pitch: bool,
    /// Active projection strategy.
    #[schemars(title = "Projection")]
    pub projection: ProjectionType,
    /// Vertical field of view in degrees (perspective).
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Orthographic frustum size in world units.
    #[schemars(title = "Ortho Scale", range(min = 0.1, max = 100.0))]
    pub ortho_scale: f32,
    /// Field of view passed to view-fit framing.
    #[schemars(title = "Fit FOV", range(min = 10.0, max = 120.0), extend("step" = 1.0))]
    pub fit_fov: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            world_scale: 1.0,
            gimbal_lock: true,
            constrain_pitch: true,
            projection: ProjectionType::Perspective,
            fovy: 45.0,
            znear: 0.1,
            zfar: 2000.0,
            ortho_scale: 1.0,
            fit_fov: 45.0,
        }
    }
}

impl CameraOptions {
    /// Generate the JSON Schema describing the UI-exposed settings.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(CameraOptions)
    }
}

impl Camera {
    /// Apply an options block to this camera.
    ///
    /// Viewport aspect ratios are deliberately untouched: they are driven
    /// by window resizes, not presets. `fit_fov` is carried for the viewer
    /// to pass into [`view_fit`](Self::view_fit).
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.set_world_scale(options.world_scale);
        self.set_gimbal_lock(options.gimbal_lock);
        self.set_constrain_pitch(options.constrain_pitch);

        let persp = self.perspective_mut();
        persp.fovy = options.fovy;
        persp.znear = options.znear;
        persp.zfar = options.zfar;

        let ortho = self.orthographic_mut();
        ortho.scale = options.ortho_scale;
        ortho.znear = options.znear;
        ortho.zfar = options.zfar;

        self.set_projection(options.projection);
    }
}
