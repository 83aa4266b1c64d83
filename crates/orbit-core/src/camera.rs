//! Camera description and screen-space ray construction.
//!
//! Kept free of platform APIs so both the picking code and the renderer can
//! share it; the web front-end feeds in canvas pixel sizes.

use crate::constants::{
    CAMERA_FOV_Y_DEG, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_ZFAR, CAMERA_ZNEAR,
    ZOOM_PER_WHEEL_UNIT,
};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Pixel size of the surface a camera renders into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Pointer offset from the centre, -1..1 on both axes with +y up.
    pub fn centered_ndc(&self, px: Vec2) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new((2.0 * px.x / w) - 1.0, 1.0 - (2.0 * px.y / h))
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera on the +Z axis looking at the origin.
    pub fn looking_at_origin(distance: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.width > 0.0 && viewport.height > 0.0 {
            self.aspect = viewport.aspect();
        }
    }

    /// Distance along the principal (Z) axis.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.eye.z
    }

    /// Move the camera along Z by a multiple of the wheel delta, clamped to
    /// the allowed zoom range.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        let z = self.eye.z + delta_y * ZOOM_PER_WHEEL_UNIT;
        self.eye.z = z.clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Compute a world-space ray from pixel coordinates on `viewport`.
    ///
    /// Returns `(ray_origin, ray_direction)` with a normalized direction.
    pub fn screen_ray(&self, viewport: Viewport, px: Vec2) -> (Vec3, Vec3) {
        let ndc = viewport.centered_ndc(px);
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye;
        let rd = (p1 - ro).normalize();
        (ro, rd)
    }
}
