use crate::aliases::{Vec2, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::material::Material;
use crate::onb::Onb;
use crate::pdf::{random_in_cone, random_unit_vector};
use crate::ray::Ray;
use crate::sampler::Sampler;
use std::f64::consts::PI;
use std::sync::Arc;

pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Arc<dyn Material>,
}

impl Sphere {
    pub fn new(center: &Vec3, radius: f64, material: Arc<dyn Material>) -> Self {
        Sphere {
            center: *center,
            radius,
            material,
        }
    }
    pub fn center(&self) -> &Vec3 {
        &self.center
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    /// Calculates the parameter t of the ray at which it hits this Sphere.
    pub fn hit_core(center: &Vec3, radius: f64, ray: &Ray, t_min: f64, t_max: f64) -> Option<f64> {
        let oc = ray.origin - center;
        let a = ray.direction.norm_squared();
        let half_b = oc.dot(&ray.direction);
        let c = oc.norm_squared() - radius * radius;
        let disc = half_b * half_b - a * c;
        if disc < 0.0 {
            return None;
        }
        let disc_rt = disc.sqrt();
        // find the nearest root that lies in acceptable range
        let t = (-half_b - disc_rt) / a;
        if t_min < t && t < t_max {
            return Some(t);
        }
        let t = (-half_b + disc_rt) / a;
        if t_min < t && t < t_max {
            return Some(t);
        }
        None
    }
    /// convert a point on unit sphere to a uv coordinate
    pub fn get_uv(p: &Vec3) -> Vec2 {
        let theta = (-p[1]).max(-1.0).min(1.0).acos();
        let phi = f64::atan2(-p[2], p[0]) + PI;
        Vec2::new(phi / (2.0 * PI), theta / PI)
    }
    // cosine of the half angle of the cone subtended by this sphere, None if origin is inside.
    fn cos_theta_max(&self, origin: &Vec3) -> Option<f64> {
        let dist_squared = (self.center - origin).norm_squared();
        let ratio = self.radius * self.radius / dist_squared;
        if ratio >= 1.0 {
            None
        } else {
            Some((1.0 - ratio).sqrt())
        }
    }
}

impl Hitable for Sphere {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord<'s>> {
        Sphere::hit_core(&self.center, self.radius, ray, t_min, t_max).map(|t| {
            let outward_normal = (ray.evaluate(t) - self.center) / self.radius;
            let uv = Sphere::get_uv(&outward_normal);
            HitRecord::new(ray, t, &outward_normal, uv, self.material.as_ref())
        })
    }
    fn random_direction_from(&self, origin: &Vec3, sampler: &mut dyn Sampler) -> Vec3 {
        match self.cos_theta_max(origin) {
            Some(cosine) => {
                let vec_local = random_in_cone(cosine, sampler);
                let onb = Onb::build_from_w(&(self.center - origin));
                onb.local_to_global_vec(&vec_local)
            }
            // seen from inside, the sphere covers every direction.
            None => random_unit_vector(sampler),
        }
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f64 {
        match self.cos_theta_max(origin) {
            Some(cosine_max) => {
                let cosine = (self.center - origin).normalize().dot(&dir.normalize());
                if cosine >= cosine_max {
                    1.0 / (2.0 * PI * (1.0 - cosine_max))
                } else {
                    0.0
                }
            }
            None => 1.0 / (4.0 * PI),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Sphere;
    use crate::aliases::{Color, Vec3};
    use crate::hitable::Hitable;
    use crate::material::lambertian::Lambertian;
    use crate::pdf::hitable::HitablePdf;
    use crate::pdf::tests::integrate_over_sphere;
    use crate::pdf::Pdf;
    use crate::ray::Ray;
    use crate::sampler::RandomSampler;
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn unit_sphere() -> Sphere {
        Sphere::new(
            &Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Arc::new(Lambertian::from_color(&Color::new(0.5, 0.5, 0.5))),
        )
    }

    #[test]
    fn ray_through_center_has_two_collinear_normals() {
        let sphere = unit_sphere();
        let dir = Vec3::new(0.0, 0.0, -1.0);
        let ray = Ray::new(&Vec3::new(0.0, 0.0, 0.0), &dir);
        let near = sphere.hit(&ray, 0.001, std::f64::MAX).unwrap();
        let far = sphere.hit(&ray, near.t + 1e-6, std::f64::MAX).unwrap();
        assert_relative_eq!(near.t, 4.0, epsilon = 1e-9);
        assert_relative_eq!(far.t, 6.0, epsilon = 1e-9);
        for rec in &[near, far] {
            assert_relative_eq!(rec.normal.cross(&dir).norm(), 0.0, epsilon = 1e-9);
        }
        assert!(near.front_face);
        assert!(!far.front_face);
        // the shading normal faces against the ray on both sides
        assert!(near.normal.dot(&dir) < 0.0);
        assert!(far.normal.dot(&dir) < 0.0);
    }

    #[test]
    fn ray_missing_the_sphere_has_no_hit() {
        let sphere = unit_sphere();
        let ray = Ray::new(&Vec3::new(0.0, 2.0, 0.0), &Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray, 0.001, std::f64::MAX).is_none());
        let behind = Ray::new(&Vec3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.hit(&behind, 0.001, std::f64::MAX).is_none());
    }

    #[test]
    fn uv_is_in_unit_square() {
        for p in &[
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
        ] {
            let uv = Sphere::get_uv(p);
            assert!(0.0 <= uv[0] && uv[0] <= 1.0);
            assert!(0.0 <= uv[1] && uv[1] <= 1.0);
        }
        assert_relative_eq!(Sphere::get_uv(&Vec3::new(0.0, -1.0, 0.0))[1], 0.0);
        assert_relative_eq!(Sphere::get_uv(&Vec3::new(0.0, 1.0, 0.0))[1], 1.0);
    }

    #[test]
    fn solid_angle_density_integrates_to_one() {
        let sphere = unit_sphere();
        let origin = Vec3::new(0.0, 0.0, -3.0);
        let pdf = HitablePdf::new(&sphere, &origin);
        let integral = integrate_over_sphere(&pdf, 400_000, 31);
        assert!((integral - 1.0).abs() < 0.05, "integral: {}", integral);
    }

    #[test]
    fn sampled_directions_hit_the_sphere() {
        let sphere = unit_sphere();
        let origin = Vec3::new(0.3, -0.2, 0.0);
        let pdf = HitablePdf::new(&sphere, &origin);
        let mut sampler = RandomSampler::new(1, 32);
        for _ in 0..1000 {
            let dir = pdf.generate(&mut sampler);
            assert!(pdf.density(&dir) > 0.0);
            let ray = Ray::new(&origin, &dir);
            assert!(sphere.hit(&ray, 0.001, std::f64::MAX).is_some());
        }
    }

    #[test]
    fn origin_inside_uses_the_whole_sphere_of_directions() {
        let sphere = unit_sphere();
        let origin = Vec3::new(0.0, 0.0, -5.2);
        let pdf = HitablePdf::new(&sphere, &origin);
        let integral = integrate_over_sphere(&pdf, 1000, 33);
        assert_relative_eq!(integral, 1.0, epsilon = 1e-9);
    }
}
