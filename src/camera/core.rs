use std::cell::Cell;

use glam::{Mat3, Mat4, Vec3};

use super::projection::{Orthographic, Perspective, ProjectionType};
use super::{Aabb, RedrawSignal};

/// Default eye position.
pub const DEFAULT_EYE: Vec3 = Vec3::new(0.0, 0.0, -10.0);
/// Default look-at target.
pub const DEFAULT_TARGET: Vec3 = Vec3::ZERO;
/// Default up direction.
pub const DEFAULT_UP: Vec3 = Vec3::Y;
/// Default world-axis triplet: X-right, Y-up, Z-forward-negated
/// (look-at convention).
pub const DEFAULT_WORLD_AXIS: [f32; 9] =
    [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0];

/// Look-at camera with a lazily rebuilt view/view-normal matrix cache.
///
/// Owns the view-space basis (eye, target, up), the scene's world-axis
/// convention, a uniform world scale, the two projection strategies, and
/// the behavioral flags governing rotation ([`gimbal_lock`] pins yaw to
/// world-up, [`constrain_pitch`] rejects rotations that would flip the
/// camera past world-vertical).
///
/// Every mutation marks the cached matrices dirty and raises the shared
/// [`RedrawSignal`]; matrix getters rebuild on demand and repeated reads
/// without an intervening mutation return bit-identical results.
///
/// Callers are responsible for keeping `up` non-zero and not parallel to
/// the view direction; degenerate inputs propagate silently into
/// degenerate matrices.
///
/// [`gimbal_lock`]: Self::gimbal_lock
/// [`constrain_pitch`]: Self::constrain_pitch
#[derive(Debug)]
pub struct Camera {
    pub(crate) eye: Vec3,
    pub(crate) target: Vec3,
    pub(crate) up: Vec3,
    pub(crate) world_scale: f32,
    pub(crate) world_axis: [f32; 9],
    pub(crate) world_right: Vec3,
    pub(crate) world_up: Vec3,
    pub(crate) world_forward: Vec3,
    pub(crate) gimbal_lock: bool,
    pub(crate) constrain_pitch: bool,
    projection: ProjectionType,
    perspective: Perspective,
    orthographic: Orthographic,
    pub(crate) scene_bounds: Aabb,
    redraw: RedrawSignal,
    dirty: Cell<bool>,
    view: Cell<Mat4>,
    view_normal: Cell<Mat3>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create a camera with the default frame: eye at `(0, 0, -10)`
    /// looking at the origin with `+Y` up, unit world scale, gimbal lock
    /// and pitch constraint enabled, perspective projection selected.
    #[must_use]
    pub fn new() -> Self {
        let camera = Self {
            eye: DEFAULT_EYE,
            target: DEFAULT_TARGET,
            up: DEFAULT_UP,
            world_scale: 1.0,
            world_axis: DEFAULT_WORLD_AXIS,
            world_right: Vec3::X,
            world_up: Vec3::Y,
            world_forward: Vec3::NEG_Z,
            gimbal_lock: true,
            constrain_pitch: true,
            projection: ProjectionType::Perspective,
            perspective: Perspective::default(),
            orthographic: Orthographic::default(),
            scene_bounds: Aabb::default(),
            redraw: RedrawSignal::new(),
            dirty: Cell::new(true),
            view: Cell::new(Mat4::IDENTITY),
            view_normal: Cell::new(Mat3::IDENTITY),
        };
        camera.rebuild();
        camera
    }

    /// Handle to the shared needs-redraw flag for the owning viewer.
    #[must_use]
    pub fn redraw_signal(&self) -> RedrawSignal {
        self.redraw.clone()
    }

    /// Raise the redraw signal and invalidate the cached matrices.
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty.set(true);
        self.redraw.raise();
    }

    fn rebuild(&self) {
        // World scale is composed before the look-at transform: geometry is
        // scaled about the origin, then viewed.
        let view = Mat4::look_at_rh(self.eye, self.target, self.up)
            * Mat4::from_scale(Vec3::splat(self.world_scale));
        self.view.set(view);
        self.view_normal
            .set(Mat3::from_mat4(view).inverse().transpose());
        self.dirty.set(false);
    }

    // ── View-space basis ──

    /// World-space camera position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Set the eye position; `None` restores [`DEFAULT_EYE`].
    pub fn set_eye(&mut self, eye: Option<Vec3>) {
        self.eye = eye.unwrap_or(DEFAULT_EYE);
        self.mark_dirty();
    }

    /// World-space look-at point.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Set the look-at target; `None` restores [`DEFAULT_TARGET`].
    pub fn set_target(&mut self, target: Option<Vec3>) {
        self.target = target.unwrap_or(DEFAULT_TARGET);
        self.mark_dirty();
    }

    /// Current camera up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Set the up direction; `None` restores [`DEFAULT_UP`]. The vector is
    /// stored as given — no renormalization.
    pub fn set_up(&mut self, up: Option<Vec3>) {
        self.up = up.unwrap_or(DEFAULT_UP);
        self.mark_dirty();
    }

    // ── World scale and axis convention ──

    /// Uniform world-scale factor baked into the view matrix.
    #[must_use]
    pub fn world_scale(&self) -> f32 {
        self.world_scale
    }

    /// Set the world scale. Zero, negative, and NaN inputs reset to 1.0.
    pub fn set_world_scale(&mut self, scale: f32) {
        self.world_scale = if scale > 0.0 { scale } else { 1.0 };
        self.mark_dirty();
    }

    /// The right/up/forward unit-vector triplet defining the scene's
    /// coordinate convention.
    #[must_use]
    pub fn world_axis(&self) -> [f32; 9] {
        self.world_axis
    }

    /// Set the world-axis triplet and recompute the derived
    /// right/up/forward vectors.
    pub fn set_world_axis(&mut self, axis: [f32; 9]) {
        self.world_axis = axis;
        self.world_right = Vec3::new(axis[0], axis[1], axis[2]);
        self.world_up = Vec3::new(axis[3], axis[4], axis[5]);
        self.world_forward = Vec3::new(axis[6], axis[7], axis[8]);
        self.mark_dirty();
    }

    /// World-right vector of the scene convention.
    #[must_use]
    pub fn world_right(&self) -> Vec3 {
        self.world_right
    }

    /// World-up vector of the scene convention.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// World-forward vector of the scene convention.
    #[must_use]
    pub fn world_forward(&self) -> Vec3 {
        self.world_forward
    }

    // ── Behavioral flags ──

    /// Whether yaw rotations pivot about world-up instead of the camera's
    /// current up.
    #[must_use]
    pub fn gimbal_lock(&self) -> bool {
        self.gimbal_lock
    }

    /// Toggle gimbal lock. Affects future rotations only; no matrix is
    /// invalidated.
    pub fn set_gimbal_lock(&mut self, enabled: bool) {
        self.gimbal_lock = enabled;
    }

    /// Whether pitch rotations that would flip the camera past
    /// world-vertical are rejected.
    #[must_use]
    pub fn constrain_pitch(&self) -> bool {
        self.constrain_pitch
    }

    /// Toggle the pitch constraint. Affects future rotations only.
    pub fn set_constrain_pitch(&mut self, enabled: bool) {
        self.constrain_pitch = enabled;
    }

    // ── Scene bounds (viewer collaborator state) ──

    /// Scene bounds used as the default for [`view_fit`](Self::view_fit).
    #[must_use]
    pub fn scene_bounds(&self) -> Aabb {
        self.scene_bounds
    }

    /// Push the owning viewer's current scene bounds. Does not move the
    /// camera; only [`view_fit`](Self::view_fit) consumes this.
    pub fn set_scene_bounds(&mut self, bounds: Aabb) {
        self.scene_bounds = bounds;
    }

    // ── Projection selection ──

    /// Currently selected projection strategy.
    #[must_use]
    pub fn projection_type(&self) -> ProjectionType {
        self.projection
    }

    /// Select a projection strategy. Pure selection — strategy parameters
    /// are untouched. Raises the redraw signal (the projection matrix
    /// changes) without invalidating the view cache.
    pub fn set_projection(&mut self, kind: ProjectionType) {
        self.projection = kind;
        self.redraw.raise();
    }

    /// Select a projection strategy by token (`"perspective"` or
    /// `"orthographic"`). An unrecognized token is a non-fatal no-op: a
    /// warning is logged and the prior selection is retained.
    pub fn set_projection_type(&mut self, token: &str) {
        match token.parse::<ProjectionType>() {
            Ok(kind) => self.set_projection(kind),
            Err(e) => {
                log::warn!("{e}; keeping {}", self.projection);
            }
        }
    }

    /// The perspective strategy's parameters.
    #[must_use]
    pub fn perspective(&self) -> &Perspective {
        &self.perspective
    }

    /// Configure the perspective strategy. The core never touches these
    /// parameters itself.
    pub fn perspective_mut(&mut self) -> &mut Perspective {
        &mut self.perspective
    }

    /// The orthographic strategy's parameters.
    #[must_use]
    pub fn orthographic(&self) -> &Orthographic {
        &self.orthographic
    }

    /// Configure the orthographic strategy.
    pub fn orthographic_mut(&mut self) -> &mut Orthographic {
        &mut self.orthographic
    }

    /// Projection matrix of the currently selected strategy
    /// (column-major, wgpu/Vulkan `[0, 1]` depth range).
    #[must_use]
    pub fn proj_matrix(&self) -> Mat4 {
        match self.projection {
            ProjectionType::Perspective => self.perspective.matrix(),
            ProjectionType::Orthographic => self.orthographic.matrix(),
        }
    }

    // ── Derived matrices ──

    /// View matrix for the current eye/target/up/world-scale state.
    ///
    /// Rebuilds the cache exactly when a mutation occurred since the last
    /// read; otherwise returns the cached value unchanged.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        if self.dirty.get() {
            self.rebuild();
        }
        self.view.get()
    }

    /// View-normal matrix: transpose of the inverse of the upper 3×3 of
    /// the scaled view matrix. Same cache contract as
    /// [`view_matrix`](Self::view_matrix).
    #[must_use]
    pub fn view_normal_matrix(&self) -> Mat3 {
        if self.dirty.get() {
            self.rebuild();
        }
        self.view_normal.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame() {
        let camera = Camera::new();
        assert_eq!(camera.eye(), Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(camera.target(), Vec3::ZERO);
        assert_eq!(camera.up(), Vec3::Y);
        assert_eq!(camera.world_scale(), 1.0);
        assert!(camera.gimbal_lock());
        assert!(camera.constrain_pitch());
        assert_eq!(camera.projection_type(), ProjectionType::Perspective);
    }

    #[test]
    fn repeated_reads_are_bit_identical() {
        let camera = Camera::new();
        let a = camera.view_matrix().to_cols_array();
        let b = camera.view_matrix().to_cols_array();
        assert_eq!(a, b);
        let na = camera.view_normal_matrix().to_cols_array();
        let nb = camera.view_normal_matrix().to_cols_array();
        assert_eq!(na, nb);
    }

    #[test]
    fn setters_invalidate_the_cache() {
        let mut camera = Camera::new();
        let before = camera.view_matrix();

        camera.set_eye(Some(Vec3::new(3.0, 1.0, -7.0)));
        let after_eye = camera.view_matrix();
        assert_ne!(before.to_cols_array(), after_eye.to_cols_array());

        camera.set_target(Some(Vec3::new(0.5, 0.0, 1.0)));
        let after_target = camera.view_matrix();
        assert_ne!(after_eye.to_cols_array(), after_target.to_cols_array());

        camera.set_world_scale(2.0);
        let after_scale = camera.view_matrix();
        assert_ne!(after_target.to_cols_array(), after_scale.to_cols_array());
    }

    #[test]
    fn setters_raise_redraw() {
        let mut camera = Camera::new();
        let redraw = camera.redraw_signal();
        assert!(!redraw.is_raised());

        camera.set_up(Some(Vec3::Y));
        assert!(redraw.take());

        camera.set_world_axis(DEFAULT_WORLD_AXIS);
        assert!(redraw.take());
    }

    #[test]
    fn optional_setters_restore_defaults() {
        let mut camera = Camera::new();
        camera.set_eye(Some(Vec3::splat(5.0)));
        camera.set_target(Some(Vec3::splat(1.0)));
        camera.set_up(Some(Vec3::X));

        camera.set_eye(None);
        camera.set_target(None);
        camera.set_up(None);
        assert_eq!(camera.eye(), DEFAULT_EYE);
        assert_eq!(camera.target(), DEFAULT_TARGET);
        assert_eq!(camera.up(), DEFAULT_UP);
    }

    #[test]
    fn world_scale_clamps_to_positive() {
        let mut camera = Camera::new();
        camera.set_world_scale(0.0);
        assert_eq!(camera.world_scale(), 1.0);
        camera.set_world_scale(-3.0);
        assert_eq!(camera.world_scale(), 1.0);
        camera.set_world_scale(f32::NAN);
        assert_eq!(camera.world_scale(), 1.0);
        camera.set_world_scale(0.25);
        assert_eq!(camera.world_scale(), 0.25);
    }

    #[test]
    fn world_axis_derives_basis_vectors() {
        let mut camera = Camera::new();
        // Z-up convention: X-right, Z-up, Y-forward.
        camera.set_world_axis([
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0,
        ]);
        assert_eq!(camera.world_right(), Vec3::X);
        assert_eq!(camera.world_up(), Vec3::Z);
        assert_eq!(camera.world_forward(), Vec3::Y);
    }

    #[test]
    fn world_scale_is_baked_into_the_view_matrix() {
        let mut camera = Camera::new();
        camera.set_world_scale(2.0);
        let expected = Mat4::look_at_rh(camera.eye(), camera.target(), camera.up())
            * Mat4::from_scale(Vec3::splat(2.0));
        assert_eq!(camera.view_matrix().to_cols_array(), expected.to_cols_array());
    }

    #[test]
    fn view_normal_matrix_is_inverse_transpose() {
        let mut camera = Camera::new();
        camera.set_world_scale(3.0);
        camera.set_eye(Some(Vec3::new(2.0, 5.0, -4.0)));
        let expected = Mat3::from_mat4(camera.view_matrix())
            .inverse()
            .transpose();
        let got = camera.view_normal_matrix();
        assert!((got.to_cols_array()
            .iter()
            .zip(expected.to_cols_array().iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0f32, f32::max))
            < 1e-6);
    }

    #[test]
    fn unknown_projection_token_is_retained() {
        let mut camera = Camera::new();
        camera.set_projection_type("orthographic");
        assert_eq!(camera.projection_type(), ProjectionType::Orthographic);

        // Bogus token: warning logged, selection unchanged.
        camera.set_projection_type("fisheye");
        assert_eq!(camera.projection_type(), ProjectionType::Orthographic);
    }

    #[test]
    fn projection_switch_raises_redraw_without_dirtying_view() {
        let mut camera = Camera::new();
        let redraw = camera.redraw_signal();
        let view = camera.view_matrix();
        assert!(!redraw.take());

        camera.set_projection(ProjectionType::Orthographic);
        assert!(redraw.take());
        assert_eq!(
            camera.view_matrix().to_cols_array(),
            view.to_cols_array()
        );
    }

    #[test]
    fn proj_matrix_delegates_to_selection() {
        let mut camera = Camera::new();
        let persp = camera.proj_matrix();
        camera.set_projection(ProjectionType::Orthographic);
        let ortho = camera.proj_matrix();
        assert_ne!(persp.to_cols_array(), ortho.to_cols_array());
        assert_eq!(
            ortho.to_cols_array(),
            camera.orthographic().matrix().to_cols_array()
        );
    }
}
