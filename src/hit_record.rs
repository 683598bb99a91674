use crate::aliases::{Vec2, Vec3};
use crate::material::Material;
use crate::ray::Ray;

#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    pub t: f64,
    pub point: Vec3,
    pub tex_coord: Vec2,
    /// Shading normal, always facing against the incoming ray.
    pub normal: Vec3,
    /// Whether the ray hit the side the outward normal points to.
    pub front_face: bool,
    pub material: &'a dyn Material,
}

impl<'a> HitRecord<'a> {
    /// * `outward_normal` - must be normalized
    pub fn new(
        ray: &Ray,
        t: f64,
        outward_normal: &Vec3,
        tex_coord: Vec2,
        material: &'a dyn Material,
    ) -> Self {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        HitRecord {
            t,
            point: ray.evaluate(t),
            tex_coord,
            normal: if front_face {
                *outward_normal
            } else {
                -outward_normal
            },
            front_face,
            material,
        }
    }
    pub fn u(&self) -> f64 {
        self.tex_coord[0]
    }
    pub fn v(&self) -> f64 {
        self.tex_coord[1]
    }
}
