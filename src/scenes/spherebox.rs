use misray::aliases::{Color, Vec3};
use misray::camera::Camera;
use misray::hitable::hitable_list::HitableList;
use misray::hitable::sphere::Sphere;
use misray::hitable::Hitable;
use misray::material::blinn_phong::BlinnPhong;
use misray::material::diffuse_light::DiffuseLight;
use misray::material::glass::Dielectric;
use misray::material::lambertian::Lambertian;
use misray::material::metal::Metal;
use misray::material::phong::Phong;
use misray::material::Material;
use misray::scene::Scene;
use misray::texture::checker::CheckerTexture;
use misray::texture::constant::ConstantTexture;
use std::sync::Arc;

const WALL_RADIUS: f64 = 1e5;

fn sphere(center: Vec3, radius: f64, material: Arc<dyn Material>) -> Arc<dyn Hitable> {
    Arc::new(Sphere::new(&center, radius, material))
}

fn light() -> Arc<dyn Hitable> {
    sphere(
        Vec3::new(50.0, 681.6 - 0.27, 81.6),
        600.0,
        Arc::new(DiffuseLight::from_color(&Color::new(15.0, 15.0, 15.0))),
    )
}

fn camera(aspect_ratio: f64) -> Camera {
    Camera::pinhole(
        &Vec3::new(50.0, 50.0, 295.6),
        &Vec3::new(50.0, 50.0, 50.0),
        &Vec3::new(0.0, 1.0, 0.0),
        30.0,
        aspect_ratio,
    )
}

fn grey() -> Arc<dyn Material> {
    Arc::new(Lambertian::from_color(&Color::new(0.75, 0.75, 0.75)))
}

pub fn scene(aspect_ratio: f64) -> (Scene, Camera) {
    let light = light();
    let floor = Arc::new(Lambertian::new(Arc::new(CheckerTexture::new(
        ConstantTexture::shared(&Color::new(0.75, 0.75, 0.75)),
        ConstantTexture::shared(&Color::new(0.25, 0.25, 0.25)),
        10.0,
        &Vec3::zeros(),
    ))));
    let objs: Vec<Arc<dyn Hitable>> = vec![
        sphere(
            Vec3::new(WALL_RADIUS + 1.0, 40.8, 81.6),
            WALL_RADIUS,
            Arc::new(Phong::from_color(&Color::new(0.75, 0.25, 0.25), 50.0)),
        ), // left
        sphere(
            Vec3::new(-WALL_RADIUS + 99.0, 40.8, 81.6),
            WALL_RADIUS,
            Arc::new(BlinnPhong::from_color(&Color::new(0.333, 0.983, 0.015), 100.0)),
        ), // right
        sphere(Vec3::new(50.0, 40.8, WALL_RADIUS), WALL_RADIUS, grey()), // back
        sphere(Vec3::new(50.0, WALL_RADIUS, 81.6), WALL_RADIUS, floor), // bottom
        sphere(Vec3::new(50.0, -WALL_RADIUS + 81.6, 81.6), WALL_RADIUS, grey()), // top
        sphere(Vec3::new(27.0, 16.5, 47.0), 16.5, Arc::new(Dielectric::new(1.5))),
        sphere(
            Vec3::new(73.0, 16.5, 78.0),
            16.5,
            Arc::new(Metal::new(&Color::new(1.0, 1.0, 1.0), 0.2)),
        ),
        sphere(
            Vec3::new(51.0, 18.5, 90.0),
            10.5,
            Arc::new(Phong::from_color(&Color::new(0.5, 0.2, 0.2), 2000.0)),
        ),
        light.clone(),
    ];
    let scene = Scene::new(Arc::new(HitableList::new(objs))).with_lights(light);
    (scene, camera(aspect_ratio))
}

pub fn simplest_scene(aspect_ratio: f64) -> (Scene, Camera) {
    let light = light();
    let objs: Vec<Arc<dyn Hitable>> = vec![
        sphere(Vec3::new(50.0, WALL_RADIUS, 81.6), WALL_RADIUS, grey()),
        sphere(Vec3::new(50.0, -WALL_RADIUS + 81.6, 81.6), WALL_RADIUS, grey()),
        sphere(Vec3::new(40.0, 16.5, 25.0), 16.5, Arc::new(Dielectric::new(1.5))),
        sphere(
            Vec3::new(40.0, 16.5, 58.0),
            16.5,
            Arc::new(Metal::new(&Color::new(1.0, 1.0, 1.0), 0.2)),
        ),
        sphere(
            Vec3::new(40.0, 18.5, 80.0),
            10.5,
            Arc::new(Phong::from_color(&Color::new(0.5, 0.2, 0.2), 50.0)),
        ),
        sphere(
            Vec3::new(40.0, 16.5, 130.0),
            20.5,
            Arc::new(Lambertian::from_color(&Color::new(0.3, 0.8, 0.1))),
        ),
        light.clone(),
    ];
    let scene = Scene::new(Arc::new(HitableList::new(objs))).with_lights(light);
    (scene, camera(aspect_ratio))
}
