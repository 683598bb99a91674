mod spherebox;

use clap::ValueEnum;
use misray::camera::Camera;
use misray::scene::Scene;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScenesType {
    /// Walls made of huge spheres around a glass, a metal and two glossy balls.
    SphereBox,
    /// Floor and ceiling only, with a row of balls.
    Simplest,
}

pub fn get(scene_type: ScenesType, aspect_ratio: f64) -> (Scene, Camera) {
    match scene_type {
        ScenesType::SphereBox => self::spherebox::scene(aspect_ratio),
        ScenesType::Simplest => self::spherebox::simplest_scene(aspect_ratio),
    }
}
