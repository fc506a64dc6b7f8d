//! Whitted-style shading integrator and the frame driver.
//!
//! Per pixel: cast a primary ray, find the closest hit, accumulate
//! direct lighting with shadow rays, and follow perfect mirrors with a
//! bounded iterative bounce loop.

use crate::camera::Camera;
use crate::film::{Film, PixelSink};
use crate::material::{Color, Material};
use crate::scene::Scene;
use lucent_math::{scalar, Ray, Vec3};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Maximum number of mirror-reflection hops before a ray gives up black.
pub const BOUNCE_LIMIT: u32 = 8;

/// Phong exponent for the Plastic/Metal highlight.
const SHININESS: i32 = 16;

/// Specular tint for Plastic surfaces.
const PLASTIC_SPECULAR: Vec3 = Vec3::ONE;

/// Tunables for a render pass.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Constant ambient term added to every lit surface.
    pub ambient: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ambient: Vec3::ONE / 12.0,
        }
    }
}

/// Trace one ray through the scene and return its illumination.
///
/// The result is unclamped; `pack_rgb` clamps at pixel conversion time.
pub fn trace(scene: &Scene, mut ray: Ray, config: &RenderConfig) -> Color {
    for _ in 0..=BOUNCE_LIMIT {
        let Some(intersection) = scene.closest_intersection(&ray) else {
            return Color::ZERO;
        };

        let hit_point = ray.at(intersection.distance);
        let material = intersection.primitive.material();

        if material == Material::Mirror {
            // The incoming direction points toward the surface, so this
            // is the inverse of the light reflection below. A mirror
            // replaces local shading entirely; no attenuation accrues.
            let cos_view = ray.direction().dot(intersection.normal);
            let reflected = (ray.direction() - 2.0 * cos_view * intersection.normal).normalize();
            ray = Ray::new(hit_point, reflected);
            continue;
        }

        let mut illumination = Color::ZERO;
        for light in scene.lights() {
            let to_light = light.position - hit_point;
            let distance_squared = to_light.length_squared();
            let light_dir = to_light.normalize();

            let shadow_ray = Ray::new(hit_point, light_dir);
            if let Some(occluder) = scene.closest_intersection(&shadow_ray) {
                // Squared distances avoid a square root; an occluder past
                // the light does not block it.
                if scalar::compare(occluder.distance * occluder.distance, distance_squared)
                    != Ordering::Greater
                {
                    continue;
                }
            }

            // Distance fall-off with angle modulation. The cosine is left
            // unclamped: a light behind the surface subtracts energy here
            // and the final clamp absorbs the excess.
            let cos_light = intersection.normal.dot(light_dir);
            illumination += intersection.color * light.intensity * cos_light / distance_squared;

            let tint = match material {
                Material::Plastic => PLASTIC_SPECULAR,
                Material::Metal => intersection.color,
                Material::Matte => continue,
                Material::Mirror => unreachable!("mirrors never reach direct lighting"),
            };

            let reflected = (2.0 * cos_light * intersection.normal - light_dir).normalize();
            // Toward the viewer, hence the negated ray direction.
            let shine = (-ray.direction()).dot(reflected).powi(SHININESS);
            illumination += tint * light.intensity * shine / distance_squared;
        }

        illumination += intersection.color * config.ambient;
        return illumination;
    }

    // A mirror chain exhausted the bounce budget.
    Color::ZERO
}

/// Clamp an illumination to [0, 1] per channel and pack as `0x00RRGGBB`.
pub fn pack_rgb(color: Color) -> u32 {
    let clamped = color.clamp(Vec3::ZERO, Vec3::ONE);
    let r = (clamped.x * 255.0).round() as u32;
    let g = (clamped.y * 255.0).round() as u32;
    let b = (clamped.z * 255.0).round() as u32;
    (r << 16) | (g << 8) | b
}

/// Render every pixel of the sink exactly once, single-threaded.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig, sink: &mut dyn PixelSink) {
    let (width, height) = (sink.width(), sink.height());
    log::debug!("rendering {}x{} raster", width, height);
    sink.clear(0);

    for y in 0..height {
        let v = y as f32 / height as f32;
        for x in 0..width {
            let u = x as f32 / width as f32;
            let ray = camera.primary_ray(u, v);
            let color = trace(scene, ray, config);
            sink.plot(x as i32, y as i32, pack_rgb(color));
        }
    }
}

/// Scanline-parallel render into a film.
///
/// Pixels are pure functions of the scene snapshot, so rows can go wide;
/// the scene must stay unmutated for the duration of the pass.
pub fn render_par(camera: &Camera, scene: &Scene, config: &RenderConfig, film: &mut Film) {
    let (width, height) = (film.width(), film.height());
    if width == 0 || height == 0 {
        // Nothing to chunk; an empty raster is a no-op like in `render`.
        return;
    }
    log::debug!(
        "rendering {}x{} raster on {} threads",
        width,
        height,
        rayon::current_num_threads()
    );

    film.pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            let v = y as f32 / height as f32;
            for (x, pixel) in row.iter_mut().enumerate() {
                let u = x as f32 / width as f32;
                let ray = camera.primary_ray(u, v);
                *pixel = pack_rgb(trace(scene, ray, config));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::Light;
    use crate::primitive::{Plane, Sphere};

    fn matte_floor() -> Plane {
        Plane::new(Vec3::Y, -1.0, Vec3::ONE, Material::Matte)
    }

    #[test]
    fn test_pack_rgb_clamps_and_rounds() {
        assert_eq!(pack_rgb(Vec3::splat(2.0)), 0xffffff);
        assert_eq!(pack_rgb(Vec3::splat(-1.0)), 0);
        assert_eq!(pack_rgb(Vec3::new(1.0, 0.0, 0.5)), 0xff0080);
    }

    #[test]
    fn test_miss_is_black() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(trace(&scene, ray, &RenderConfig::default()), Vec3::ZERO);
    }

    #[test]
    fn test_diffuse_plus_ambient() {
        let mut scene = Scene::new();
        scene.add_primitive(matte_floor());
        // Straight above the shading point at distance 4.
        scene.add_light(Light::new(Vec3::new(0.0, 3.0, 0.0), Vec3::splat(4.0)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        let result = trace(&scene, ray, &RenderConfig::default());

        // Diffuse 4/16 plus ambient 1/12.
        let expected = 0.25 + 1.0 / 12.0;
        assert!((result - Vec3::splat(expected)).length() < 1e-5);
    }

    #[test]
    fn test_occluded_light_contributes_nothing() {
        let mut scene = Scene::new();
        scene.add_primitive(matte_floor());
        // Small sphere between the floor and the light.
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 2.0, 0.0),
            0.5,
            Vec3::splat(0.5),
            Material::Matte,
        ));
        scene.add_light(Light::new(Vec3::new(0.0, 5.0, 0.0), Vec3::splat(10.0)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        let shadowed = trace(&scene, ray, &RenderConfig::default());

        // Only the ambient term survives.
        assert!((shadowed - Vec3::ONE / 12.0).length() < 1e-5);

        // A second, unoccluded light still contributes on its own.
        scene.add_light(Light::new(Vec3::new(4.0, 3.0, 0.0), Vec3::splat(10.0)));
        let lit = trace(&scene, ray, &RenderConfig::default());
        assert!(lit.x > shadowed.x);
    }

    #[test]
    fn test_light_behind_surface_subtracts() {
        let mut scene = Scene::new();
        scene.add_primitive(matte_floor());
        // Below the floor: the unclamped cosine goes negative.
        scene.add_light(Light::new(Vec3::new(0.0, -3.0, 0.0), Vec3::splat(4.0)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        let result = trace(&scene, ray, &RenderConfig::default());

        // Ambient 1/12 minus diffuse 4/4.
        let expected = 1.0 / 12.0 - 1.0;
        assert!((result - Vec3::splat(expected)).length() < 1e-5);
    }

    #[test]
    fn test_specular_only_for_glossy_materials() {
        let config = RenderConfig::default();
        let light = Light::new(Vec3::new(0.0, 3.0, 0.0), Vec3::splat(4.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));

        let mut matte = Scene::new();
        matte.add_primitive(matte_floor());
        matte.add_light(light);

        let mut plastic = Scene::new();
        plastic.add_primitive(Plane::new(Vec3::Y, -1.0, Vec3::ONE, Material::Plastic));
        plastic.add_light(light);

        // Light, viewer and normal are colinear here, so the highlight is
        // at full strength for the plastic plane.
        let matte_result = trace(&matte, ray, &config);
        let plastic_result = trace(&plastic, ray, &config);
        assert!(plastic_result.x > matte_result.x);
        assert!((plastic_result.x - (matte_result.x + 4.0 / 16.0)).abs() < 1e-5);
    }

    #[test]
    fn test_metal_tints_highlight() {
        let light = Light::new(Vec3::new(0.0, 3.0, 0.0), Vec3::splat(4.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));

        let mut metal = Scene::new();
        metal.add_primitive(Plane::new(
            Vec3::Y,
            -1.0,
            Vec3::new(1.0, 0.5, 0.0),
            Material::Metal,
        ));
        metal.add_light(light);

        let result = trace(&metal, ray, &RenderConfig::default());
        // The highlight carries the surface's own color, so the blue
        // channel stays ambient-plus-diffuse only (zero here).
        let color = Vec3::new(1.0, 0.5, 0.0);
        let diffuse = color * 4.0 / 16.0;
        let ambient = color / 12.0;
        let specular = color * 4.0 / 16.0;
        let expected = diffuse + ambient + specular;
        assert!((result - expected).length() < 1e-5);
    }

    #[test]
    fn test_mirror_chain_terminates_black() {
        let mut scene = Scene::new();
        // Two parallel mirrors facing each other.
        scene.add_primitive(Plane::new(Vec3::Y, -1.0, Vec3::ONE, Material::Mirror));
        scene.add_primitive(Plane::new(-Vec3::Y, -1.0, Vec3::ONE, Material::Mirror));
        scene.add_light(Light::new(Vec3::new(0.0, 0.0, 5.0), Vec3::splat(10.0)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(trace(&scene, ray, &RenderConfig::default()), Vec3::ZERO);
    }

    #[test]
    fn test_mirror_replaces_local_shading() {
        let mut scene = Scene::new();
        // Mirror floor bounces the ray up into a matte ceiling.
        scene.add_primitive(Plane::new(Vec3::Y, -1.0, Vec3::new(0.9, 0.0, 0.0), Material::Mirror));
        scene.add_primitive(Plane::new(-Vec3::Y, -5.0, Vec3::ONE, Material::Matte));
        // Light between the planes, 5 below the ceiling hit point.
        scene.add_light(Light::new(Vec3::ZERO, Vec3::splat(25.0)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        let result = trace(&scene, ray, &RenderConfig::default());

        // Pure ceiling shading: diffuse 25/25 plus ambient. The mirror's
        // own red color must leave no trace.
        let expected = Vec3::splat(1.0 + 1.0 / 12.0);
        assert!((result - expected).length() < 1e-5);
    }

    #[test]
    fn test_render_idempotent_and_matches_parallel() {
        let mut scene = Scene::new();
        scene.add_primitive(matte_floor());
        scene.add_primitive(Sphere::new(
            Vec3::new(0.0, 0.0, -4.0),
            1.0,
            Vec3::new(0.8, 0.2, 0.2),
            Material::Plastic,
        ));
        scene.add_light(Light::new(Vec3::new(3.0, 4.0, -2.0), Vec3::splat(15.0)));

        let camera = Camera::with_defaults(Vec3::ZERO, -Vec3::Z, Vec3::Y);
        let config = RenderConfig::default();

        let mut first = Film::new(32, 32);
        let mut second = Film::new(32, 32);
        render(&camera, &scene, &config, &mut first);
        render(&camera, &scene, &config, &mut second);
        assert_eq!(first, second);

        let mut parallel = Film::new(32, 32);
        render_par(&camera, &scene, &config, &mut parallel);
        assert_eq!(first, parallel);
    }

    #[test]
    fn test_render_par_empty_raster_is_noop() {
        let camera = Camera::with_defaults(Vec3::ZERO, -Vec3::Z, Vec3::Y);
        let scene = Scene::new();
        let config = RenderConfig::default();

        // Both degenerate shapes must behave like the serial driver:
        // nothing to do, no panic.
        let mut no_width = Film::new(0, 4);
        render_par(&camera, &scene, &config, &mut no_width);

        let mut no_height = Film::new(4, 0);
        render_par(&camera, &scene, &config, &mut no_height);
        render(&camera, &scene, &config, &mut no_height);
    }

    #[test]
    fn test_overlapping_lights_clamp_to_white() {
        let mut scene = Scene::new();
        scene.add_primitive(matte_floor());
        scene.add_light(Light::new(Vec3::new(0.0, 1.0, 0.0), Vec3::splat(100.0)));
        scene.add_light(Light::new(Vec3::new(0.0, 2.0, 0.0), Vec3::splat(100.0)));

        let camera = Camera::with_defaults(Vec3::ZERO, -Vec3::Y, Vec3::Z);
        let mut film = Film::new(8, 8);
        render(&camera, &scene, &RenderConfig::default(), &mut film);

        // Looking straight down the over-lit floor: fully saturated.
        assert_eq!(film.pixel(4, 4), 0xffffff);
    }
}
