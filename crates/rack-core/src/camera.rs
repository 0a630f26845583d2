//! Perspective orbit camera with damped rotate, pan and dolly.

use crate::constants::{
    CAMERA_EYE, CAMERA_FOVY_DEG, CAMERA_TARGET, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_DAMPING,
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLAR_EPS, ORBIT_ZOOM_SCALE,
};
use crate::geometry::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};
use std::f32::consts::{PI, TAU};

/// Spherical coordinates around the orbit target, Y up.
///
/// `theta` is the azimuth measured from +Z towards +X, `phi` the polar angle
/// from +Y.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Spherical {
    radius: f32,
    theta: f32,
    phi: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(s * self.theta.sin(), self.phi.cos() * self.radius, s * self.theta.cos())
    }
}

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Fraction of the pending motion applied per update; 1.0 disables damping.
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    eye: Vec3,
    spherical_delta: Spherical,
    pan_offset: Vec3,
    scale: f32,
}

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            target,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            damping: ORBIT_DAMPING,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            eye,
            spherical_delta: Spherical::default(),
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }

    /// Camera at the room's default vantage point for a canvas of the given size.
    pub fn for_canvas(width: u32, height: u32) -> Self {
        Self::new(CAMERA_EYE, CAMERA_TARGET, aspect_of(width, height))
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = aspect_of(width, height);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Drag-to-rotate. Deltas are in pixels; a drag across the full viewport
    /// height turns the camera once around.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.spherical_delta.theta -= TAU * dx_px / h;
        self.spherical_delta.phi -= TAU * dy_px / h;
    }

    /// Drag-to-pan. Moves the target in the camera's view plane so the point
    /// under the cursor follows it.
    pub fn pan(&mut self, dx_px: f32, dy_px: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let offset = self.eye - self.target;
        let distance = offset.length() * (self.fovy_radians * 0.5).tan();
        let view = self.view_matrix().inverse();
        let right = view.x_axis.truncate();
        let up = view.y_axis.truncate();
        self.pan_offset -= right * (2.0 * dx_px * distance / h);
        self.pan_offset += up * (2.0 * dy_px * distance / h);
    }

    /// Mouse-wheel dolly. Negative `delta_y` (wheel up) moves closer.
    pub fn zoom(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.scale *= ORBIT_ZOOM_SCALE;
        } else if delta_y > 0.0 {
            self.scale /= ORBIT_ZOOM_SCALE;
        }
    }

    /// Advance one frame. Returns true while the camera is still moving.
    pub fn update(&mut self) -> bool {
        let mut spherical = Spherical::from_offset(self.eye - self.target);
        let k = self.damping.clamp(0.0, 1.0);
        spherical.theta += self.spherical_delta.theta * k;
        spherical.phi += self.spherical_delta.phi * k;
        spherical.phi = spherical.phi.clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS);
        spherical.radius =
            (spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);

        self.target += self.pan_offset * k;
        let new_eye = self.target + spherical.to_offset();
        let moved = (new_eye - self.eye).length_squared() > 1e-8;
        self.eye = new_eye;

        self.spherical_delta.theta *= 1.0 - k;
        self.spherical_delta.phi *= 1.0 - k;
        self.pan_offset *= 1.0 - k;
        self.scale = 1.0;
        moved
    }

    /// World-space ray through a point in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far = far.truncate() / far.w;
        Ray::new(self.eye, far - self.eye)
    }
}

#[inline]
fn aspect_of(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Map a position inside an element of `width` x `height` CSS pixels to NDC.
#[inline]
pub fn pointer_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((x / w) * 2.0 - 1.0, 1.0 - (y / h) * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(cam: &mut OrbitCamera) {
        for _ in 0..200 {
            cam.update();
        }
    }

    #[test]
    fn default_camera_looks_at_origin_from_above() {
        let mut cam = OrbitCamera::for_canvas(800, 600);
        assert!(!cam.update());
        assert!((cam.eye() - Vec3::new(0.0, 5.0, 10.0)).length() < 1e-4);
        assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = OrbitCamera::for_canvas(800, 600);
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        let expected = (Vec3::ZERO - cam.eye()).normalize();
        assert!((ray.dir - expected).length() < 1e-4);
    }

    #[test]
    fn damping_spreads_rotation_over_frames() {
        let mut cam = OrbitCamera::for_canvas(800, 600);
        let start = cam.eye();
        cam.rotate(100.0, 0.0, 600.0);
        assert!(cam.update());
        let after_one = cam.eye();
        settle(&mut cam);
        let total = cam.eye();
        // first frame only covers a quarter of the remaining turn
        let first_step = (after_one - start).length();
        let full_step = (total - start).length();
        assert!(first_step > 0.0 && first_step < full_step);
        // orbiting keeps distance to the target
        assert!((total.length() - start.length()).abs() < 1e-3);
    }

    #[test]
    fn polar_angle_never_flips_over_the_pole() {
        let mut cam = OrbitCamera::for_canvas(800, 600);
        cam.rotate(0.0, 10_000.0, 600.0);
        settle(&mut cam);
        let offset = cam.eye() - cam.target;
        assert!(offset.y > 0.0);
        assert!(offset.x.is_finite() && offset.z.is_finite());
    }

    #[test]
    fn wheel_up_moves_closer_and_is_clamped() {
        let mut cam = OrbitCamera::for_canvas(800, 600);
        let d0 = cam.eye().length();
        cam.zoom(-1.0);
        cam.update();
        assert!(cam.eye().length() < d0);
        for _ in 0..500 {
            cam.zoom(-1.0);
            cam.update();
        }
        assert!((cam.eye().length() - ORBIT_MIN_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn pan_moves_target_sideways() {
        let mut cam = OrbitCamera::for_canvas(800, 600);
        cam.pan(50.0, 0.0, 600.0);
        settle(&mut cam);
        assert!(cam.target.x < 0.0);
        assert!(cam.target.y.abs() < 1e-4);
    }

    #[test]
    fn ndc_mapping_corners() {
        assert_eq!(pointer_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(pointer_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(pointer_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    }
}
