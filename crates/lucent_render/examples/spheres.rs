//! Classic demo scene.
//!
//! Mirror, metal and plastic spheres over a checkered floor, lit by two
//! point lights. Renders the scene plus a top-down diagnostic view and
//! saves both as PNG.

use lucent_render::{
    draw_overhead, render_par, textures, Camera, Film, Light, Material, Plane, RenderConfig,
    Scene, Sphere, Triangle, Vec3,
};

fn main() {
    env_logger::init();

    let scene = build_scene();

    let width = 800u32;
    let height = 500u32;
    let camera = Camera::new(
        Vec3::ZERO,
        -Vec3::Z,
        Vec3::Y,
        width as f32 / height as f32,
        60.0,
    );
    let config = RenderConfig::default();

    println!("Rendering {}x{}...", width, height);
    let start = std::time::Instant::now();
    let mut film = Film::new(width, height);
    render_par(&camera, &scene, &config, &mut film);
    println!("Rendered in {:?}", start.elapsed());

    film.save_png("spheres.png").expect("failed to save image");
    println!("Saved to spheres.png");

    // Top-down diagnostic of the same scene.
    let mut overhead = Film::new(width, height);
    draw_overhead(&camera, &scene, &mut overhead, 0.0);
    overhead
        .save_png("spheres_overhead.png")
        .expect("failed to save image");
    println!("Saved to spheres_overhead.png");
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    scene.add_primitive(
        Plane::new(Vec3::Y, -1.0, Vec3::splat(0.8), Material::Matte)
            .with_texture(textures::checker),
    );
    scene.add_primitive(Sphere::new(
        Vec3::new(-1.2, 0.0, -4.0),
        1.0,
        Vec3::new(0.9, 0.2, 0.2),
        Material::Plastic,
    ));
    scene.add_primitive(Sphere::new(
        Vec3::new(1.2, 0.0, -4.5),
        1.0,
        Vec3::new(0.9, 0.8, 0.3),
        Material::Metal,
    ));
    scene.add_primitive(Sphere::new(
        Vec3::new(0.0, -0.6, -2.6),
        0.4,
        Vec3::ONE,
        Material::Mirror,
    ));
    scene.add_primitive(Triangle::new(
        Vec3::new(-2.8, -1.0, -5.5),
        Vec3::new(-1.8, -1.0, -6.5),
        Vec3::new(-2.3, 0.8, -6.0),
        Vec3::new(0.3, 0.6, 0.9),
        Material::Matte,
    ));

    scene.add_light(Light::new(Vec3::new(3.0, 4.0, -2.0), Vec3::splat(18.0)));
    scene.add_light(Light::new(Vec3::new(-4.0, 3.0, -1.0), Vec3::new(8.0, 8.0, 11.0)));

    scene
}
