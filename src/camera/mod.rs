//! Camera system for 3D scene viewing.
//!
//! Provides a look-at camera with orbit/yaw/pitch rotation, panning, zoom,
//! view-fit framing, and lazily rebuilt view/view-normal matrices.

/// Core camera state, accessors, and the lazy matrix cache.
pub mod core;
/// Orbit, yaw, pitch, pan, zoom, and view-fit operations.
pub mod navigate;
/// Perspective and orthographic projection strategies.
pub mod projection;
/// GPU uniform layout for the derived matrices.
pub mod uniform;

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec3;

pub use self::core::Camera;
pub use projection::{Orthographic, Perspective, ProjectionType};
pub use uniform::CameraUniform;

/// Axis-aligned bounding box in world space (min corner + max corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from its min and max corners.
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing all given points. Empty input yields a
    /// degenerate box at the origin.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut min = Vec3::INFINITY;
        let mut max = Vec3::NEG_INFINITY;
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }
        if points.is_empty() {
            Self {
                min: Vec3::ZERO,
                max: Vec3::ZERO,
            }
        } else {
            Self { min, max }
        }
    }

    /// Geometric center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Length of the spatial diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f32 {
        (self.max - self.min).length()
    }
}

impl Default for Aabb {
    /// Unit box `[-1, 1]³`.
    fn default() -> Self {
        Self {
            min: Vec3::splat(-1.0),
            max: Vec3::splat(1.0),
        }
    }
}

/// Redraw request flag shared between a [`Camera`] and its owning viewer.
///
/// Every camera mutation raises the flag; the viewer drains it with
/// [`take`](Self::take) once per render. Multiple mutations between renders
/// coalesce — the flag is monotonic within a frame. Clones share the same
/// underlying flag. `Rc`-backed on purpose: the camera is a single-thread
/// component and the signal is `!Send`.
#[derive(Debug, Clone, Default)]
pub struct RedrawSignal(Rc<Cell<bool>>);

impl RedrawSignal {
    /// Create a lowered signal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag.
    pub fn raise(&self) {
        self.0.set(true);
    }

    /// Whether the flag is currently raised.
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.0.get()
    }

    /// Read and lower the flag. Returns `true` if a redraw was pending.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}
