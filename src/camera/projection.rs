//! Projection strategies selected by the camera.
//!
//! The camera only chooses between the two strategies; their parameters
//! (field of view, clip planes, ortho extents, viewport aspect) are owned
//! and configured by the caller.

use std::fmt;
use std::str::FromStr;

use glam::Mat4;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ParseProjectionError;

/// Which projection strategy is active.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionType {
    /// Perspective projection with depth foreshortening.
    #[default]
    Perspective,
    /// Orthographic projection (no depth foreshortening).
    Orthographic,
}

impl fmt::Display for ProjectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Perspective => f.write_str("perspective"),
            Self::Orthographic => f.write_str("orthographic"),
        }
    }
}

impl FromStr for ProjectionType {
    type Err = ParseProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perspective" => Ok(Self::Perspective),
            "orthographic" => Ok(Self::Orthographic),
            other => Err(ParseProjectionError(other.to_owned())),
        }
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            aspect: 1.0,
            znear: 0.1,
            zfar: 2000.0,
        }
    }
}

impl Perspective {
    /// Build the projection matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

/// Orthographic projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthographic {
    /// Frustum size: the smaller viewport dimension spans this many world
    /// units; the larger one is widened by the aspect ratio.
    pub scale: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Orthographic {
    fn default() -> Self {
        Self {
            scale: 1.0,
            aspect: 1.0,
            znear: 0.1,
            zfar: 2000.0,
        }
    }
}

impl Orthographic {
    /// Build the projection matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let half = self.scale * 0.5;
        let (half_w, half_h) = if self.aspect >= 1.0 {
            (half * self.aspect, half)
        } else {
            (half, half / self.aspect)
        };
        Mat4::orthographic_rh(
            -half_w, half_w, -half_h, half_h, self.znear, self.zfar,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_parse_and_display_round_trip() {
        for kind in [ProjectionType::Perspective, ProjectionType::Orthographic]
        {
            let parsed: ProjectionType =
                kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_token_reports_itself() {
        let err = "fisheye".parse::<ProjectionType>().unwrap_err();
        assert!(err.to_string().contains("fisheye"));
    }

    #[test]
    fn serde_uses_lowercase_tokens() {
        let json = serde_json::to_string(&ProjectionType::Orthographic)
            .unwrap();
        assert_eq!(json, "\"orthographic\"");
        let parsed: ProjectionType =
            serde_json::from_str("\"perspective\"").unwrap();
        assert_eq!(parsed, ProjectionType::Perspective);
    }

    #[test]
    fn perspective_matches_glam() {
        let persp = Perspective {
            fovy: 60.0,
            aspect: 1.6,
            znear: 0.5,
            zfar: 500.0,
        };
        let expected =
            Mat4::perspective_rh(60.0f32.to_radians(), 1.6, 0.5, 500.0);
        assert_eq!(
            persp.matrix().to_cols_array(),
            expected.to_cols_array()
        );
    }

    #[test]
    fn orthographic_widens_along_the_larger_dimension() {
        let wide = Orthographic {
            scale: 2.0,
            aspect: 2.0,
            ..Orthographic::default()
        };
        let expected =
            Mat4::orthographic_rh(-2.0, 2.0, -1.0, 1.0, 0.1, 2000.0);
        assert_eq!(wide.matrix().to_cols_array(), expected.to_cols_array());

        let tall = Orthographic {
            scale: 2.0,
            aspect: 0.5,
            ..Orthographic::default()
        };
        let expected =
            Mat4::orthographic_rh(-1.0, 1.0, -2.0, 2.0, 0.1, 2000.0);
        assert_eq!(tall.matrix().to_cols_array(), expected.to_cols_array());
    }
}
