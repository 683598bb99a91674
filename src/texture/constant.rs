use crate::aliases::{Color, Vec2, Vec3};
use crate::texture::Texture;
use std::sync::Arc;

pub struct ConstantTexture(Color);

impl ConstantTexture {
    pub fn new(color: &Color) -> Self {
        ConstantTexture(*color)
    }
    pub fn shared(color: &Color) -> Arc<dyn Texture> {
        Arc::new(Self::new(color))
    }
}

impl Texture for ConstantTexture {
    fn value(&self, _uv: &Vec2, _p: &Vec3) -> Color {
        self.0
    }
}
