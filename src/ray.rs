use crate::aliases::Vec3;

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3, // not necessarily normalized
}

impl Ray {
    pub fn new(origin: &Vec3, direction: &Vec3) -> Self {
        Ray {
            origin: *origin,
            direction: *direction,
        }
    }
    pub fn evaluate(&self, t: f64) -> Vec3 {
        self.origin + t * self.direction
    }
}
