//! Navigation operations: orbit, yaw, pitch, pan, zoom, view-fit.
//!
//! All rotation entry points take a signed angle in degrees, build a
//! rotation about the chosen pivot axis, and re-derive the moving endpoint
//! from the fixed point plus the rotated offset. `up` is co-rotated by the
//! same rotation wherever it is rotated at all, which preserves
//! orthogonality between `up` and the view direction by construction.

use glam::{Quat, Vec3};

use super::core::Camera;
use super::Aabb;

/// Fit field-of-view used when `view_fit` is called without one.
pub const DEFAULT_FIT_FOV: f32 = 45.0;

const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Pitch-clamp check, in the degree-scaled unit the angle convention
/// produces: the candidate up's projection onto world-up is divided by the
/// degree-to-radian constant and compared against 1.0. This is not a
/// literal one-degree comparison and must not be rewritten as one.
fn pitch_rejected(candidate_up: Vec3, world_up: Vec3) -> bool {
    candidate_up.dot(world_up) / DEG_TO_RAD < 1.0
}

impl Camera {
    /// Orbit the eye about the target by `degrees`.
    ///
    /// Pivots about world-up when gimbal lock is enabled, otherwise about
    /// the camera's current up. The up vector is always co-rotated.
    pub fn orbit_yaw(&mut self, degrees: f32) {
        let axis = if self.gimbal_lock {
            self.world_up
        } else {
            self.up
        };
        let rotation =
            Quat::from_axis_angle(axis.normalize(), degrees.to_radians());
        let eye_offset = self.eye - self.target;
        self.eye = self.target + rotation * eye_offset;
        self.up = rotation * self.up;
        self.mark_dirty();
    }

    /// Orbit the eye vertically about the target by `degrees`.
    ///
    /// The pivot axis is the cross product of the normalized eye→target
    /// offset and the normalized up, so the rotation purely tilts the
    /// camera. With the pitch constraint enabled, a rotation that would
    /// tip the camera past world-vertical is rejected outright: no
    /// mutation, no redraw.
    pub fn orbit_pitch(&mut self, degrees: f32) {
        let eye_offset = self.eye - self.target;
        let axis = eye_offset.normalize().cross(self.up.normalize());
        let rotation = Quat::from_axis_angle(axis, degrees.to_radians());
        let candidate_up = rotation * self.up;
        if self.constrain_pitch && pitch_rejected(candidate_up, self.world_up)
        {
            return;
        }
        self.up = candidate_up;
        self.eye = self.target + rotation * eye_offset;
        self.mark_dirty();
    }

    /// Rotate the target about the eye by `degrees` (first-person look).
    ///
    /// Pivots about world-up when gimbal lock is enabled, otherwise about
    /// the camera's current up. The up vector is co-rotated only under
    /// gimbal lock (rotating `up` about itself would be a no-op anyway).
    pub fn yaw(&mut self, degrees: f32) {
        let axis = if self.gimbal_lock {
            self.world_up
        } else {
            self.up
        };
        let rotation =
            Quat::from_axis_angle(axis.normalize(), degrees.to_radians());
        let look = self.target - self.eye;
        self.target = self.eye + rotation * look;
        if self.gimbal_lock {
            self.up = rotation * self.up;
        }
        self.mark_dirty();
    }

    /// Tilt the target about the eye by `degrees` (first-person look).
    ///
    /// Same constraint behavior as [`orbit_pitch`](Self::orbit_pitch).
    pub fn pitch(&mut self, degrees: f32) {
        let look = self.target - self.eye;
        let axis = look.normalize().cross(self.up.normalize());
        let rotation = Quat::from_axis_angle(axis, degrees.to_radians());
        let candidate_up = rotation * self.up;
        if self.constrain_pitch && pitch_rejected(candidate_up, self.world_up)
        {
            return;
        }
        self.up = candidate_up;
        self.target = self.eye + rotation * look;
        self.mark_dirty();
    }

    /// Translate eye and target identically by a displacement given in the
    /// camera's local frame: `x` along camera-right (cross of normalized
    /// up and normalized eye→target), `y` along normalized up, `z` along
    /// the normalized view axis (dollying). Eye–target distance and
    /// orientation are preserved.
    pub fn pan(&mut self, delta: Vec3) {
        let look = self.target - self.eye;
        let mut offset = Vec3::ZERO;
        // Zero components are skipped; behavior is identical to scaling
        // by zero.
        if delta.x != 0.0 {
            let right = self.up.normalize().cross(look.normalize());
            offset += right * delta.x;
        }
        if delta.y != 0.0 {
            offset += self.up.normalize() * delta.y;
        }
        if delta.z != 0.0 {
            offset += look.normalize() * delta.z;
        }
        self.eye += offset;
        self.target += offset;
        self.mark_dirty();
    }

    /// Dolly both endpoints by `delta` along the normalized eye→target
    /// direction. Positive `delta` moves the pair toward (and past) the
    /// old target — the look-at point travels with the eye.
    pub fn zoom(&mut self, delta: f32) {
        let offset = (self.target - self.eye).normalize() * delta;
        self.eye += offset;
        self.target += offset;
        self.mark_dirty();
    }

    /// Reposition eye and target so `bounds` is fully framed.
    ///
    /// The target becomes the box center; the eye is placed along the
    /// pre-fit view direction at `diagonal / tan(fit_fov / 2)` from it.
    /// `bounds` defaults to the viewer-pushed
    /// [`scene_bounds`](Self::scene_bounds); `fit_fov` defaults to
    /// [`DEFAULT_FIT_FOV`] degrees.
    pub fn view_fit(&mut self, bounds: Option<Aabb>, fit_fov: Option<f32>) {
        let bounds = bounds.unwrap_or(self.scene_bounds);
        let fit_fov = fit_fov.unwrap_or(DEFAULT_FIT_FOV);
        let view_dir = (self.eye - self.target).normalize();
        let distance =
            bounds.diagonal() / (fit_fov.to_radians() * 0.5).tan();
        self.target = bounds.center();
        self.eye = self.target + view_dir * distance;
        self.mark_dirty();
    }
}
