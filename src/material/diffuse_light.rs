use crate::aliases::{Color, Vec2, Vec3};
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::ray::Ray;
use crate::texture::constant::ConstantTexture;
use crate::texture::Texture;
use std::sync::Arc;

/// Emits light from its front face and absorbs everything.
pub struct DiffuseLight {
    pub emit: Arc<dyn Texture>,
}

impl DiffuseLight {
    pub fn new(emit: Arc<dyn Texture>) -> Self {
        DiffuseLight { emit }
    }
    pub fn from_color(emit: &Color) -> Self {
        DiffuseLight {
            emit: ConstantTexture::shared(emit),
        }
    }
}

impl Material for DiffuseLight {
    fn emitted(&self, _ray_in: &Ray, rec: &HitRecord, u: f64, v: f64, point: &Vec3) -> Color {
        if rec.front_face {
            self.emit.value(&Vec2::new(u, v), point)
        } else {
            Color::zeros()
        }
    }
}
