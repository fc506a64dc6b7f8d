//! Top-down diagnostic view of the scene.
//!
//! Projects the camera, lights, spheres, and a fan of primary rays onto
//! the (x, z) plane and sketches them on a pixel sink. Debug tooling
//! only; the primary render contract lives in [`crate::render`].

use crate::camera::Camera;
use crate::film::PixelSink;
use crate::primitive::Primitive;
use crate::scene::Scene;
use crate::tracer::pack_rgb;
use lucent_math::{Ray, Vec2, Vec3};
use std::f32::consts::TAU;

/// Pixels per world unit in the overhead projection.
const SCALE: f32 = 32.0;
/// Segments approximating a sphere cross-section circle.
const CIRCLE_SEGMENTS: u32 = 64;
/// Drawn length for rays that escape the scene.
const MISS_DISTANCE: f32 = 100.0;
/// Number of primary rays fanned across the screen plane.
const RAY_FAN: u32 = 11;

const COLOR_CAMERA: u32 = 0x00_ff_00;
const COLOR_WHITE: u32 = 0xff_ff_ff;
const COLOR_RAY: u32 = 0xff_ff_00;
const COLOR_SHADOW_RAY: u32 = 0x80_80_00;

/// Draw the overhead view, slicing spheres with the y = `plane_height`
/// plane.
pub fn draw_overhead(camera: &Camera, scene: &Scene, sink: &mut dyn PixelSink, plane_height: f32) {
    sink.clear(0);

    let origin = raster_origin(sink);

    // Camera marker in green.
    let cam = world_to_raster(camera.position(), origin);
    sink.bar(cam.0 - 1, cam.1 - 1, cam.0 + 1, cam.1 + 1, COLOR_CAMERA);

    // Lights in white.
    for light in scene.lights() {
        let p = world_to_raster(light.position, origin);
        sink.bar(p.0 - 1, p.1 - 1, p.0 + 1, p.1 + 1, COLOR_WHITE);
    }

    // Screen plane: a line between the left and right edge midpoints.
    let screen = camera.screen();
    let left = (screen.top_left + screen.bottom_left) / 2.0;
    let right = (screen.top_right + screen.bottom_right) / 2.0;
    let l = world_to_raster(left, origin);
    let r = world_to_raster(right, origin);
    sink.line(l.0, l.1, r.0, r.1, COLOR_WHITE);

    // Sphere cross-sections at the slicing plane.
    for primitive in scene.primitives() {
        if let Primitive::Sphere(sphere) = primitive {
            let offset = plane_height - sphere.center().y;
            let radius = (sphere.radius() * sphere.radius() - offset * offset).sqrt();
            if radius.is_nan() {
                // The slicing plane misses this sphere.
                continue;
            }
            let center = Vec2::new(sphere.center().x, sphere.center().z);
            draw_circle(sink, origin, center, radius, pack_rgb(sphere.color()));
        }
    }

    // Fan of primary rays with their shadow rays.
    for i in 0..RAY_FAN {
        let ratio = i as f32 / (RAY_FAN - 1) as f32;
        let along = left + ratio * (right - left);
        let ray = Ray::new(camera.position(), along.normalize());

        let intersection = scene.closest_intersection(&ray);
        let distance = intersection.as_ref().map_or(MISS_DISTANCE, |hit| hit.distance);
        let hit_point = ray.at(distance);
        let p = world_to_raster(hit_point, origin);
        sink.line(cam.0, cam.1, p.0, p.1, COLOR_RAY);

        if intersection.is_none() {
            continue;
        }
        for light in scene.lights() {
            let shadow_ray = Ray::new(hit_point, (light.position - hit_point).normalize());
            let shadow_distance = scene
                .closest_intersection(&shadow_ray)
                .map_or(MISS_DISTANCE, |hit| hit.distance);
            let sp = world_to_raster(shadow_ray.at(shadow_distance), origin);
            sink.line(p.0, p.1, sp.0, sp.1, COLOR_SHADOW_RAY);
        }
    }
}

/// The raster position of the world origin: middle-bottom of the sink.
fn raster_origin(sink: &dyn PixelSink) -> (i32, i32) {
    ((sink.width() / 2) as i32, (sink.height() * 7 / 8) as i32)
}

fn world_to_raster(p: Vec3, origin: (i32, i32)) -> (i32, i32) {
    // Flatten onto (x, z).
    flat_to_raster(Vec2::new(p.x, p.z), origin)
}

fn flat_to_raster(p: Vec2, origin: (i32, i32)) -> (i32, i32) {
    (origin.0 + (p.x * SCALE) as i32, origin.1 + (p.y * SCALE) as i32)
}

fn draw_circle(sink: &mut dyn PixelSink, origin: (i32, i32), center: Vec2, radius: f32, rgb: u32) {
    for i in 0..CIRCLE_SEGMENTS {
        let a0 = i as f32 / CIRCLE_SEGMENTS as f32 * TAU;
        let a1 = (i + 1) as f32 / CIRCLE_SEGMENTS as f32 * TAU;
        let p0 = flat_to_raster(center + radius * Vec2::from_angle(a0), origin);
        let p1 = flat_to_raster(center + radius * Vec2::from_angle(a1), origin);
        sink.line(p0.0, p0.1, p1.0, p1.1, rgb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::film::Film;
    use crate::light::Light;
    use crate::material::Material;
    use crate::primitive::Sphere;

    #[test]
    fn test_camera_marker_drawn() {
        let camera = Camera::with_defaults(Vec3::ZERO, -Vec3::Z, Vec3::Y);
        let scene = Scene::new();
        let mut film = Film::new(100, 100);

        draw_overhead(&camera, &scene, &mut film, 0.0);

        // World origin maps to (50, 87); the camera bar covers it.
        assert_eq!(film.pixel(50, 87), COLOR_CAMERA);
    }

    #[test]
    fn test_sphere_cross_section_drawn() {
        let camera = Camera::with_defaults(Vec3::ZERO, -Vec3::Z, Vec3::Y);
        let mut scene = Scene::new();
        let color = Vec3::new(1.0, 0.0, 0.0);
        scene.add_primitive(Sphere::new(Vec3::new(0.0, 0.0, -2.0), 1.0, color, Material::Matte));
        let mut film = Film::new(128, 128);

        draw_overhead(&camera, &scene, &mut film, 0.0);

        // Circle center is at (64, 112 - 64); its rightmost point sits
        // one world unit (32 pixels) to the right.
        assert_eq!(film.pixel(96, 48), pack_rgb(color));
    }

    #[test]
    fn test_sliced_out_sphere_skipped() {
        let camera = Camera::with_defaults(Vec3::ZERO, -Vec3::Z, Vec3::Y);
        let mut scene = Scene::new();
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 0.0, -2.0),
            1.0,
            Vec3::X,
            Material::Matte,
        ));
        scene.add_light(Light::new(Vec3::new(2.0, 0.0, -1.0), Vec3::splat(5.0)));
        let mut film = Film::new(128, 128);

        // Slicing plane far above the sphere: no circle, no panic.
        draw_overhead(&camera, &scene, &mut film, 10.0);
        assert_ne!(film.pixel(96, 48), pack_rgb(Vec3::X));
    }
}
