use crate::aliases::Vec3;
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::ray::Ray;
use crate::sampler::Sampler;
use std::sync::Arc;

pub struct HitableList {
    pub list: Vec<Arc<dyn Hitable>>,
}

impl HitableList {
    pub fn new(objs: Vec<Arc<dyn Hitable>>) -> Self {
        HitableList { list: objs }
    }
    pub fn len(&self) -> usize {
        self.list.len()
    }
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Hitable for HitableList {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord<'s>> {
        let mut res: Option<HitRecord<'s>> = None;
        let mut closest_so_far = t_max;
        for obj in &self.list {
            if let Some(tmp_rec) = obj.hit(ray, t_min, closest_so_far) {
                closest_so_far = tmp_rec.t;
                res = Some(tmp_rec);
            }
        }
        res
    }
    /// Picks one member uniformly and samples toward it.
    fn random_direction_from(&self, origin: &Vec3, sampler: &mut dyn Sampler) -> Vec3 {
        if self.list.is_empty() {
            return Vec3::new(1.0, 0.0, 0.0);
        }
        let idx = ((sampler.sample_1d() * self.list.len() as f64) as usize).min(self.list.len() - 1);
        self.list[idx].random_direction_from(origin, sampler)
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f64 {
        if self.list.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .list
            .iter()
            .map(|o| o.direction_density(origin, dir))
            .sum();
        sum / self.list.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::HitableList;
    use crate::aliases::{Color, Vec3};
    use crate::hitable::flip_face::FlipFace;
    use crate::hitable::sphere::Sphere;
    use crate::hitable::Hitable;
    use crate::material::diffuse_light::DiffuseLight;
    use crate::pdf::tests::integrate_over_sphere;
    use crate::pdf::hitable::HitablePdf;
    use crate::ray::Ray;
    use std::sync::Arc;

    fn light_sphere(center: Vec3, radius: f64) -> Arc<dyn Hitable> {
        Arc::new(Sphere::new(
            &center,
            radius,
            Arc::new(DiffuseLight::from_color(&Color::new(1.0, 1.0, 1.0))),
        ))
    }

    #[test]
    fn returns_the_closest_hit() {
        let list = HitableList::new(vec![
            light_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0),
            light_sphere(Vec3::new(0.0, 0.0, -4.0), 1.0),
        ]);
        let ray = Ray::new(&Vec3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 0.0, -1.0));
        let rec = list.hit(&ray, 0.001, std::f64::MAX).unwrap();
        assert!((rec.t - 3.0).abs() < 1e-9);
        assert!(HitableList::new(vec![]).hit(&ray, 0.001, std::f64::MAX).is_none());
    }

    #[test]
    fn group_density_is_normalized() {
        let list = HitableList::new(vec![
            light_sphere(Vec3::new(0.0, 0.0, -3.0), 1.0),
            light_sphere(Vec3::new(3.0, 0.0, 0.0), 1.5),
        ]);
        let origin = Vec3::new(0.0, 0.0, 0.0);
        let pdf = HitablePdf::new(&list, &origin);
        let integral = integrate_over_sphere(&pdf, 400_000, 41);
        assert!((integral - 1.0).abs() < 0.05, "integral: {}", integral);
    }

    #[test]
    fn flip_face_toggles_front_face() {
        let sphere = light_sphere(Vec3::new(0.0, 0.0, -3.0), 1.0);
        let flipped = FlipFace::new(sphere.clone());
        let ray = Ray::new(&Vec3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 0.0, -1.0));
        let a = sphere.hit(&ray, 0.001, std::f64::MAX).unwrap();
        let b = flipped.hit(&ray, 0.001, std::f64::MAX).unwrap();
        assert!(a.front_face);
        assert!(!b.front_face);
        assert_eq!(a.t, b.t);
    }
}
