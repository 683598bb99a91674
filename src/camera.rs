use crate::aliases::Vec3;
use crate::pdf::random_in_unit_disc;
use crate::ray::Ray;
use crate::sampler::Sampler;
use std::f64::consts::PI;

/// Thin-lens perspective camera.
pub struct Camera {
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    origin: Vec3,
    lens_radius: f64,
    u: Vec3, // a unit vector directing right
    v: Vec3, // a unit vector directing up
}

impl Camera {
    pub fn new(
        look_from: &Vec3,
        look_at: &Vec3,
        view_up: &Vec3,
        vfov: f64,   // vertical field of view in degrees
        aspect: f64, // width over height
        lens_radius: f64,
        focus_dist: f64,
    ) -> Self {
        let theta: f64 = vfov * PI / 180.0;
        let half_height: f64 = (theta * 0.5).tan();
        let half_width: f64 = aspect * half_height;
        let origin: Vec3 = *look_from;
        let w: Vec3 = (look_from - look_at).normalize();
        let u: Vec3 = view_up.cross(&w).normalize();
        let v: Vec3 = w.cross(&u);
        let lower_left_corner = origin - focus_dist * (half_width * u + half_height * v + w);
        let horizontal = u * 2.0 * focus_dist * half_width;
        let vertical = v * 2.0 * focus_dist * half_height;
        Camera {
            lower_left_corner,
            horizontal,
            vertical,
            origin,
            lens_radius,
            u,
            v,
        }
    }
    /// A pinhole camera focused at `look_at`.
    pub fn pinhole(look_from: &Vec3, look_at: &Vec3, view_up: &Vec3, vfov: f64, aspect: f64) -> Self {
        let focus_dist = (look_from - look_at).norm();
        Camera::new(look_from, look_at, view_up, vfov, aspect, 0.0, focus_dist)
    }
    /// Ray through the film position (s, t) in [0, 1]^2, (0, 0) being the lower left corner.
    pub fn get_ray(&self, s: f64, t: f64, sampler: &mut dyn Sampler) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let r = self.lens_radius * random_in_unit_disc(sampler);
            r.x * self.u + r.y * self.v
        } else {
            Vec3::zeros()
        };
        Ray::new(
            &(self.origin + offset),
            &(self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset),
        )
    }
}
